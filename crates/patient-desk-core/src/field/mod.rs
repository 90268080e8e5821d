//! Typed field selection for the editable patient form.

mod edit;
mod selector;

pub use edit::*;
pub use selector::*;

use thiserror::Error;

/// Field addressing and input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown contact field: {0}")]
    UnknownContactField(String),

    #[error("malformed field name: {0}")]
    MalformedName(String),

    #[error("age must be a whole number, got: {0}")]
    InvalidAge(String),

    #[error("gender must be Male, Female or Other, got: {0}")]
    InvalidGender(String),
}

pub type FieldResult<T> = Result<T, FieldError>;
