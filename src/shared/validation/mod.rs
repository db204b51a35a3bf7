//! Declarative request-body validation.
//!
//! A [`ValidationChain`] holds one [`FieldChain`] per field. Each field runs
//! its rules in declaration order and reports at most one message; fields
//! are independent, so the result is an ordered list of `(field, message)`.

mod body;
mod chain;
pub mod media_fields;
mod rule;

pub use body::{value_to_text, RequestBody};
pub use chain::{FieldChain, ValidationChain};
pub use rule::{AsyncRule, Rule};

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationFailure {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("Validation lookup failed: {0}")]
    LookupFailed(String),
}
