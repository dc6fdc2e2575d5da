use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlicError {
    #[error("manifest io: {0}")]
    ManifestIo(String),
    #[error("manifest format: {0}")]
    ManifestFormat(String),
    #[error("structure load: {0}")]
    StructureLoad(String),
    #[error("structure write: {0}")]
    StructureWrite(String),
    #[error("no interaction site detected in complex '{0}'")]
    NoInteractionSite(String),
    #[error("report write: {0}")]
    ReportWrite(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    #[error("usage: {0}")]
    Usage(String),
}

pub type PlicResult<T> = Result<T, PlicError>;
