//! Field values entered during a fill session

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value held by a single field.
///
/// An unset field has no `FieldValue` at all; callers model that with
/// `Option<FieldValue>`. Dates serialize as `YYYY-MM-DD` strings and read
/// back as `Text`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    /// Truthiness as the form engine sees it: empty text, zero, NaN and
    /// `false` are falsy; every date is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Date(_) => true,
        }
    }

    /// The text content, when the value is textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render for concatenation into a derived field. Falsy values render
    /// as the empty string.
    pub fn render(&self) -> String {
        if !self.is_truthy() {
            return String::new();
        }
        self.to_string()
    }
}

/// Render an optional value, treating an unset field like a falsy one
pub fn render_optional(value: Option<&FieldValue>) -> String {
    value.map(FieldValue::render).unwrap_or_default()
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) if n.is_infinite() => {
                write!(f, "{}", if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) if n.is_nan() => write!(f, "NaN"),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!FieldValue::from("").is_truthy());
        assert!(!FieldValue::from(0.0).is_truthy());
        assert!(!FieldValue::from(f64::NAN).is_truthy());
        assert!(!FieldValue::from(false).is_truthy());

        assert!(FieldValue::from("0").is_truthy());
        assert!(FieldValue::from(-1.5).is_truthy());
        assert!(FieldValue::from(true).is_truthy());
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert!(FieldValue::from(date).is_truthy());
    }

    #[test]
    fn test_render() {
        assert_eq!(FieldValue::from(3.0).render(), "3");
        assert_eq!(FieldValue::from(2.5).render(), "2.5");
        assert_eq!(FieldValue::from(true).render(), "true");
        assert_eq!(FieldValue::from(false).render(), "");
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(FieldValue::from(date).render(), "2024-02-09");
        assert_eq!(render_optional(None), "");
    }

    #[test]
    fn test_untagged_json() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"["abc", 4, true]"#).unwrap();
        assert_eq!(
            values,
            vec![FieldValue::from("abc"), FieldValue::from(4.0), FieldValue::from(true)]
        );
    }
}
