use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::body::{value_to_text, RequestBody};

/// Predicate that needs I/O, e.g. a uniqueness lookup.
///
/// `Ok(true)` means the value is acceptable. `Err` aborts the whole
/// validation run instead of producing a field message.
#[async_trait]
pub trait AsyncRule: Send + Sync {
    async fn check(&self, value: &str) -> Result<bool, String>;
}

#[derive(Clone)]
pub enum Rule {
    Exists,
    /// String, number or boolean; objects and arrays fail.
    Scalar,
    /// Minimum number of characters in the text form.
    MinLength(usize),
    OneOf(&'static [&'static str]),
    /// Text form must equal the text form of the named sibling field.
    EqualsField(&'static str),
    Unique(Arc<dyn AsyncRule>),
}

impl Rule {
    pub fn is_async(&self) -> bool {
        matches!(self, Rule::Unique(_))
    }

    /// Evaluates a synchronous rule. Async rules always pass here.
    pub fn passes(&self, field: &str, body: &RequestBody) -> bool {
        match self {
            Rule::Exists => body.contains(field),
            Rule::Scalar => body
                .get(field)
                .is_some_and(|value| !value.is_object() && !value.is_array()),
            Rule::MinLength(min) => body.text(field).chars().count() >= *min,
            Rule::OneOf(allowed) => {
                let value = body.text(field);
                allowed.iter().any(|candidate| *candidate == value)
            }
            Rule::EqualsField(other) => {
                let left = body.get(field).map(value_to_text);
                let right = body.get(other).map(value_to_text);
                left.is_some() && left == right
            }
            Rule::Unique(_) => true,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Exists => write!(f, "Exists"),
            Rule::Scalar => write!(f, "Scalar"),
            Rule::MinLength(n) => write!(f, "MinLength({n})"),
            Rule::OneOf(values) => write!(f, "OneOf({values:?})"),
            Rule::EqualsField(other) => write!(f, "EqualsField({other})"),
            Rule::Unique(_) => write!(f, "Unique"),
        }
    }
}
