use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("Invalid diagnostics format: {0} (expected: text|json)")]
    InvalidFormat(String),

    #[error("Invalid diagnostics level: {0}")]
    InvalidLevel(String),

    #[error("Diagnostics subscriber already initialized")]
    AlreadyInitialized,
}

pub type ObserveResult<T> = Result<T, ObserveError>;
