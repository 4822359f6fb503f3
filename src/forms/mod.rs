//! Request bodies accepted by the API and their conversion into domain
//! values.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::TypeConstraintError;

pub mod beer;
pub mod category;
pub mod customer;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        source: TypeConstraintError,
    },
}

impl FormError {
    fn field(field: &'static str) -> impl FnOnce(TypeConstraintError) -> Self {
        move |source| FormError::InvalidField { field, source }
    }
}

/// Rejects text made only of whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Treats blank text in a partial update as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
