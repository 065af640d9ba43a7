use thiserror::Error;

/// Service-level errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Unknown error-correction level: {0}")]
    UnknownErrorCorrection(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
