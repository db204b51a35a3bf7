use std::sync::Arc;

use super::{
    body::RequestBody,
    rule::{AsyncRule, Rule},
    FieldError, ValidationFailure,
};

/// Ordered rules for one body field.
#[derive(Debug, Clone)]
pub struct FieldChain {
    field: &'static str,
    rules: Vec<(Rule, &'static str)>,
}

impl FieldChain {
    pub fn body(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn exists(self, message: &'static str) -> Self {
        self.rule(Rule::Exists, message)
    }

    pub fn is_text(self, message: &'static str) -> Self {
        self.rule(Rule::Scalar, message)
    }

    pub fn min_length(self, min: usize, message: &'static str) -> Self {
        self.rule(Rule::MinLength(min), message)
    }

    pub fn one_of(self, allowed: &'static [&'static str], message: &'static str) -> Self {
        self.rule(Rule::OneOf(allowed), message)
    }

    pub fn equals_field(self, other: &'static str, message: &'static str) -> Self {
        self.rule(Rule::EqualsField(other), message)
    }

    pub fn unique(self, lookup: Arc<dyn AsyncRule>, message: &'static str) -> Self {
        self.rule(Rule::Unique(lookup), message)
    }

    pub fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.rules.push((rule, message));
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// First failing rule's message, if any.
    async fn check(&self, body: &RequestBody) -> Result<Option<FieldError>, ValidationFailure> {
        for (rule, message) in &self.rules {
            let passed = match rule {
                Rule::Unique(lookup) => lookup
                    .check(&body.text(self.field))
                    .await
                    .map_err(ValidationFailure::LookupFailed)?,
                sync_rule => sync_rule.passes(self.field, body),
            };

            if !passed {
                return Ok(Some(FieldError::new(self.field, *message)));
            }
        }

        Ok(None)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationChain {
    fields: Vec<FieldChain>,
}

impl ValidationChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, chain: FieldChain) -> Self {
        self.fields.push(chain);
        self
    }

    /// Runs every field chain and collects the failures in declaration order.
    pub async fn validate(&self, body: &RequestBody) -> Result<(), ValidationFailure> {
        let mut errors = Vec::new();

        for chain in &self.fields {
            if let Some(error) = chain.check(body).await? {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::Invalid(errors))
        }
    }
}
