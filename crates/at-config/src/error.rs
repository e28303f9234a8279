use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min:   i64,
        max:   i64,
    },

    #[error("no menu option with field id {0:?}")]
    UnknownOption(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
