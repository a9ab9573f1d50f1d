//! Service layer shared by the HTML routes and the JSON API.

use thiserror::Error;

use crate::controller::ListError;
use crate::forms::FormError;
use crate::source::errors::SourceError;

pub mod list;
pub mod reservations;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ListError> for ServiceError {
    fn from(val: ListError) -> Self {
        match val {
            ListError::InvalidField(field) => ServiceError::Form(format!("Invalid field: {field}")),
            ListError::Source(err) => ServiceError::Source(err),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
