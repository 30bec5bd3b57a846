//! Scalar cell values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar cell in a dataset.
///
/// Datasets are dynamically typed at the cell level: a column's type is
/// established by classifying its live values (see
/// [`ColumnType`](crate::types::ColumnType)), not declared up front. The
/// three shapes mirror what a CSV cell can hold: a number, free text, or
/// nothing at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A textual value.
    Text(String),
    /// A missing value (empty cell or a not-available marker).
    #[default]
    Missing,
}

impl Value {
    /// Returns the numeric interpretation of this value, if it has one.
    ///
    /// Numbers are returned as-is. Text is trimmed and parsed as `f64`;
    /// unparsable text has no numeric interpretation. Missing values never
    /// do.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Missing => None,
        }
    }

    /// Returns true if this value is missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Returns true if this value is present (not missing).
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Missing => Ok(()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_as_number() {
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::Number(-0.0).as_number(), Some(0.0));
    }

    #[test]
    fn test_text_as_number() {
        assert_eq!(Value::from("42").as_number(), Some(42.0));
        assert_eq!(Value::from("  3.14 ").as_number(), Some(3.14));
        assert_eq!(Value::from("-1e3").as_number(), Some(-1000.0));
        assert_eq!(Value::from("abc").as_number(), None);
        assert_eq!(Value::from("").as_number(), None);
        assert_eq!(Value::from("1,000").as_number(), None);
    }

    #[test]
    fn test_missing() {
        assert_eq!(Value::Missing.as_number(), None);
        assert!(Value::Missing.is_missing());
        assert!(!Value::Missing.is_present());
        assert!(Value::Number(0.0).is_present());
        assert_eq!(Value::default(), Value::Missing);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(Some(1.5)), Value::Number(1.5));
        assert_eq!(Value::from(None::<f64>), Value::Missing);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::Missing.to_string(), "");
    }

    #[test]
    fn test_serde_untagged() {
        assert_eq!(serde_json::to_string(&Value::Number(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&Value::from("x")).unwrap(),
            r#""x""#
        );
        assert_eq!(serde_json::to_string(&Value::Missing).unwrap(), "null");

        let v: Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(v, Value::Number(2.5));
        let v: Value = serde_json::from_str("null").unwrap();
        assert_eq!(v, Value::Missing);
        let v: Value = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(v, Value::Text("abc".to_string()));
    }
}
