//! Form definitions backing the admin routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod list;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid sort direction")]
    InvalidDirection,

    #[error("invalid period")]
    InvalidPeriod,
}
