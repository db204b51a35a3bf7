use serde_json::{Map, Value};

/// A JSON request body viewed as a flat set of fields.
///
/// Anything other than a JSON object is treated as an empty body.
#[derive(Debug, Clone, Default)]
pub struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Field value. A `null` is reported as absent so that `exists` rejects it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Text form of a field, empty when absent.
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(value_to_text).unwrap_or_default()
    }

    /// Finite number from a JSON number or a numeric string.
    pub fn number(&self, field: &str) -> Option<f64> {
        let parsed = match self.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|n| n.is_finite())
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// Strings as-is, numbers and booleans as their JSON text, anything else empty.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
