use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("submission has no daily records")]
    EmptySubmission,
    #[error("invalid ISO date {0:?}")]
    InvalidDate(String),
    #[error("duplicate column {0:?} in flat record")]
    DuplicateColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
