use thiserror::Error;

/// Contact model and serialization errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Unknown format version: {0}")]
    UnknownFormatVersion(String),

    #[error("Unknown {kind}: {value}")]
    UnknownTag { kind: &'static str, value: String },

    #[error("Gender must be one of: M, F, O, N, U (got {0:?})")]
    InvalidGender(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
