//! The untyped per-company input payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FeatureError, FeatureResult};

/// Numeric record fields, in the order the vectorizer emits them.
pub const NUMERIC_FIELDS: [&str; 12] = [
    "founded_at",
    "first_funding_at",
    "last_funding_at",
    "funding_rounds",
    "funding_total_usd",
    "first_milestone_at",
    "last_milestone_at",
    "milestones",
    "relationships",
    "investment_rounds",
    "lat",
    "lng",
];

/// String fields that become one-hot indicator columns.
pub const CATEGORICAL_FIELDS: [&str; 2] = ["category", "country"];

/// One company, as received from a caller.
///
/// The record is deliberately untyped: fields are looked up and converted on
/// demand so that a bad field is reported by name instead of failing the whole
/// payload at deserialization time. Unknown keys are carried along and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builder-style insert (handy for tests and fixtures).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a field as a floating-point number.
    ///
    /// JSON numbers and strings holding a finite number are accepted; `null`
    /// counts as absent. `"NaN"` and `"inf"` parse as floats but are rejected.
    pub fn number(&self, field: &str) -> FeatureResult<f64> {
        match self.0.get(field) {
            None | Some(Value::Null) => Err(FeatureError::missing(field)),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| FeatureError::type_mismatch(field, "a number", n.to_string())),
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                Ok(_) => Err(FeatureError::type_mismatch(
                    field,
                    "a finite number",
                    format!("string {s:?}"),
                )),
                Err(_) => Err(FeatureError::type_mismatch(field, "a number", format!("string {s:?}"))),
            },
            Some(other) => Err(FeatureError::type_mismatch(field, "a number", kind(other))),
        }
    }

    /// Read a field as a label used to build a column name.
    ///
    /// Numbers are rendered with their JSON text (`7` → `"7"`).
    pub fn label(&self, field: &str) -> FeatureResult<String> {
        match self.0.get(field) {
            None | Some(Value::Null) => Err(FeatureError::missing(field)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(other) => Err(FeatureError::type_mismatch(field, "a string", kind(other))),
        }
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn kind(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_accepts_json_numbers_and_numeric_strings() {
        let record = RawRecord::default()
            .with("lat", 37.7)
            .with("milestones", 2)
            .with("funding_total_usd", " 1000000 ");

        assert_eq!(record.number("lat").unwrap(), 37.7);
        assert_eq!(record.number("milestones").unwrap(), 2.0);
        assert_eq!(record.number("funding_total_usd").unwrap(), 1_000_000.0);
    }

    #[test]
    fn absent_and_null_fields_are_missing() {
        let record = RawRecord::default().with("founded_at", Value::Null);

        assert_eq!(
            record.number("founded_at").unwrap_err(),
            FeatureError::MissingField("founded_at".to_string())
        );
        assert_eq!(
            record.label("country").unwrap_err(),
            FeatureError::MissingField("country".to_string())
        );
    }

    #[test]
    fn non_numeric_values_are_type_mismatches() {
        let record = RawRecord::default()
            .with("founded_at", "last year")
            .with("funding_rounds", json!([1, 2]));

        let err = record.number("founded_at").unwrap_err();
        assert!(matches!(err, FeatureError::TypeMismatch { ref field, .. } if field == "founded_at"));
        assert!(err.to_string().contains("last year"));

        let err = record.number("funding_rounds").unwrap_err();
        assert_eq!(err.to_string(), "field 'funding_rounds' must be a number, got an array");
    }

    #[test]
    fn non_finite_strings_are_rejected() {
        for text in ["NaN", "inf", "-infinity"] {
            let record = RawRecord::default().with("funding_rounds", text);
            let err = record.number("funding_rounds").unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("field 'funding_rounds' must be a finite number, got string {text:?}")
            );
        }
    }

    #[test]
    fn labels_render_numbers_as_text() {
        let record = RawRecord::default().with("category", "software").with("country", 7);

        assert_eq!(record.label("category").unwrap(), "software");
        assert_eq!(record.label("country").unwrap(), "7");
        assert!(RawRecord::default().with("country", true).label("country").is_err());
    }

    #[test]
    fn record_deserializes_from_a_json_object() {
        let record: RawRecord = serde_json::from_value(json!({"founded_at": 2010, "extra": "ignored"})).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.number("founded_at").unwrap(), 2010.0);
    }
}
