//! Field definitions
//!
//! A field is one question in a form. Its kind is a closed set of variants;
//! only choice kinds carry options. On disk a field is stored as a flat
//! camelCase record (`type`, `options`, `isDerived`, `parentFields`, ...).
//!
//! `parentFields` is only kept for derived fields. A record with
//! `isDerived: false` (or no `isDerived`) loads without its parent list and
//! is written back without one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{FieldId, FieldValue};

/// Kind of input a field collects
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Textarea,
    Select { options: Vec<String> },
    Radio { options: Vec<String> },
    Checkbox,
    Date,
}

impl FieldKind {
    /// Every kind name accepted by [`FieldKind::from_str`], in picker order
    pub const NAMES: [&'static str; 7] =
        ["text", "number", "textarea", "select", "radio", "checkbox", "date"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select { .. } => "select",
            Self::Radio { .. } => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
        }
    }

    /// Options of a choice field; empty for every other kind
    pub fn options(&self) -> &[String] {
        match self {
            Self::Select { options } | Self::Radio { options } => options,
            _ => &[],
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select { .. } | Self::Radio { .. })
    }

    /// True when both kinds are the same variant, ignoring options
    pub fn same_variant(&self, other: &FieldKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn from_record(name: &str, options: Option<Vec<String>>) -> Result<Self, UnknownFieldKind> {
        let options = options.unwrap_or_default();
        Ok(match name {
            "text" => Self::Text,
            "number" => Self::Number,
            "textarea" => Self::Textarea,
            "select" => Self::Select { options },
            "radio" => Self::Radio { options },
            "checkbox" => Self::Checkbox,
            "date" => Self::Date,
            other => return Err(UnknownFieldKind(other.to_string())),
        })
    }
}

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    /// Parse a kind name; choice kinds start with no options
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_record(s, None)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type: {0}")]
pub struct UnknownFieldKind(pub String);

/// Named constraints checked against a field's value
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_empty: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<bool>,
}

impl ValidationRules {
    pub fn not_empty(mut self) -> Self {
        self.not_empty = Some(true);
        self
    }

    pub fn min_length(mut self, len: u32) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: u32) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = Some(true);
        self
    }

    pub fn password(mut self) -> Self {
        self.password = Some(true);
        self
    }
}

/// Marks a field as computed from other fields rather than entered
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Derivation {
    /// Fields whose values feed this one, in join order
    pub parent_fields: Vec<FieldId>,
}

impl Derivation {
    pub fn new(parent_fields: Vec<FieldId>) -> Self {
        Self { parent_fields }
    }

    pub fn depends_on(&self, field_id: &FieldId) -> bool {
        self.parent_fields.contains(field_id)
    }
}

/// One question in a form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldRecord", into = "FieldRecord")]
pub struct FormField {
    pub id: FieldId,
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    /// Declared by the builder; not consumed by validation
    pub default_value: Option<FieldValue>,
    /// `None` disables validation entirely, including `required`
    pub validation_rules: Option<ValidationRules>,
    pub derivation: Option<Derivation>,
    /// Stored and round-tripped, never evaluated
    pub formula: Option<String>,
}

impl FormField {
    pub fn new(id: FieldId, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            required: false,
            default_value: None,
            validation_rules: None,
            derivation: None,
            formula: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.validation_rules = Some(rules);
        self
    }

    pub fn derived_from(mut self, parent_fields: Vec<FieldId>) -> Self {
        self.derivation = Some(Derivation::new(parent_fields));
        self
    }

    pub fn is_derived(&self) -> bool {
        self.derivation.is_some()
    }

    /// True when this field is derived and `field_id` is one of its parents
    pub fn derives_from(&self, field_id: &FieldId) -> bool {
        self.derivation
            .as_ref()
            .map(|d| d.depends_on(field_id))
            .unwrap_or(false)
    }
}

/// Flat storage record for a field
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldRecord {
    id: FieldId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_value: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validation_rules: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_derived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_fields: Option<Vec<FieldId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    formula: Option<String>,
}

impl TryFrom<FieldRecord> for FormField {
    type Error = UnknownFieldKind;

    fn try_from(record: FieldRecord) -> Result<Self, Self::Error> {
        let kind = FieldKind::from_record(&record.kind, record.options)?;
        let derivation = match record.is_derived {
            Some(true) => Some(Derivation::new(record.parent_fields.unwrap_or_default())),
            _ => None,
        };
        Ok(Self {
            id: record.id,
            kind,
            label: record.label,
            required: record.required,
            default_value: record.default_value,
            validation_rules: record.validation_rules,
            derivation,
            formula: record.formula,
        })
    }
}

impl From<FormField> for FieldRecord {
    fn from(field: FormField) -> Self {
        let kind = field.kind.as_str().to_string();
        let options = match field.kind {
            FieldKind::Select { options } | FieldKind::Radio { options } => Some(options),
            _ => None,
        };
        let (is_derived, parent_fields) = match field.derivation {
            Some(derivation) => (Some(true), Some(derivation.parent_fields)),
            None => (None, None),
        };
        Self {
            id: field.id,
            kind,
            label: field.label,
            required: field.required,
            default_value: field.default_value,
            validation_rules: field.validation_rules,
            options,
            is_derived,
            parent_fields,
            formula: field.formula,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names_round_trip() {
        for name in FieldKind::NAMES {
            let kind: FieldKind = name.parse().unwrap();
            assert_eq!(kind.as_str(), name);
        }
        assert_eq!(
            "slider".parse::<FieldKind>(),
            Err(UnknownFieldKind("slider".into()))
        );
    }

    #[test]
    fn test_options_only_on_choice_kinds() {
        let select = FieldKind::Select { options: vec!["a".into(), "b".into()] };
        assert!(select.is_choice());
        assert_eq!(select.options().len(), 2);
        assert!(FieldKind::Text.options().is_empty());
        assert!(select.same_variant(&FieldKind::Select { options: vec![] }));
        assert!(!select.same_variant(&FieldKind::Radio { options: vec![] }));
    }

    #[test]
    fn test_record_layout() {
        let field = FormField::new(
            FieldId::from("f1"),
            FieldKind::Radio { options: vec!["yes".into(), "no".into()] },
            "Agree?",
        )
        .required(true)
        .with_rules(ValidationRules::default().not_empty());

        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "f1",
                "type": "radio",
                "label": "Agree?",
                "required": true,
                "validationRules": { "notEmpty": true },
                "options": ["yes", "no"]
            })
        );
    }

    #[test]
    fn test_derived_record_round_trip() {
        let raw = json!({
            "id": "full",
            "type": "text",
            "label": "Full name",
            "required": false,
            "isDerived": true,
            "parentFields": ["first", "last"],
            "formula": "first + last"
        });
        let field: FormField = serde_json::from_value(raw.clone()).unwrap();
        assert!(field.derives_from(&FieldId::from("last")));
        assert_eq!(field.formula.as_deref(), Some("first + last"));
        assert_eq!(serde_json::to_value(&field).unwrap(), raw);
    }

    #[test]
    fn test_parent_fields_dropped_when_not_derived() {
        let raw = json!({
            "id": "plain",
            "type": "text",
            "label": "Plain",
            "required": false,
            "isDerived": false,
            "parentFields": ["first"]
        });
        let field: FormField = serde_json::from_value(raw).unwrap();
        assert!(!field.is_derived());
        assert!(!field.derives_from(&FieldId::from("first")));

        let written = serde_json::to_value(&field).unwrap();
        assert!(written.get("isDerived").is_none());
        assert!(written.get("parentFields").is_none());
    }

    #[test]
    fn test_choice_record_without_options_loads_empty() {
        let field: FormField = serde_json::from_value(json!({
            "id": "s", "type": "select", "label": "Pick", "required": false
        }))
        .unwrap();
        assert_eq!(field.kind, FieldKind::Select { options: vec![] });
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<FormField, _> = serde_json::from_value(json!({
            "id": "x", "type": "slider", "label": "", "required": false
        }));
        assert!(result.is_err());
    }
}
