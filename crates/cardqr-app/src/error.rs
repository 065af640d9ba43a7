use thiserror::Error;

/// Application-level errors (binary boundary)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request document: {0}")]
    RequestError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CoreError(#[from] cardqr_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
