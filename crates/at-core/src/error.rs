//! Core error type.

use thiserror::Error;

/// Errors raised while validating core harness types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `at-core`.
pub type CoreResult<T> = Result<T, CoreError>;
