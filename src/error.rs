use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("failed to load dataset: {0}")]
    DatasetLoad(String),

    #[error("invalid catalog configuration: {0}")]
    InvalidCatalog(String),

    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error("view phase violation: {0}")]
    PhaseViolation(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
