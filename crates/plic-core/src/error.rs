use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid structure: {0}")]
    Invalid(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
