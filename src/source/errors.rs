use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

impl From<TypeConstraintError> for SourceError {
    fn from(err: TypeConstraintError) -> Self {
        SourceError::InvalidRecord(err.to_string())
    }
}
