use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid stream target: {0} (expected: stdout|stderr)")]
    InvalidStream(String),

    #[error("invalid logger config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
