use thiserror::Error;

use tlfb_model::ModelError;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
