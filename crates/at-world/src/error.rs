use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout parse error: {0}")]
    Parse(String),
}

pub type WorldResult<T> = Result<T, WorldError>;
