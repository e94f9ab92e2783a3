//! Data Transfer Objects
//!
//! Inputs the builder hands to the store.

use crate::domain::value_objects::{
    Derivation, FieldId, FieldKind, FieldValue, FormField, ValidationRules,
};

/// A field as composed in the builder, before the store assigns its id
#[derive(Clone, Debug, PartialEq)]
pub struct NewField {
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    pub default_value: Option<FieldValue>,
    pub validation_rules: Option<ValidationRules>,
    pub derivation: Option<Derivation>,
    pub formula: Option<String>,
}

impl NewField {
    /// Builder defaults: not required, with an empty rule set so that
    /// `required` is enforced once the field is filled.
    pub fn new(kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            required: false,
            default_value: None,
            validation_rules: Some(ValidationRules::default()),
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

    /// Drop the rule set; the field then never fails validation
    pub fn without_rules(mut self) -> Self {
        self.validation_rules = None;
        self
    }

    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn derived_from(mut self, parent_fields: Vec<FieldId>) -> Self {
        self.derivation = Some(Derivation::new(parent_fields));
        self
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Whether the builder may submit this field: a label is required
    pub fn is_complete(&self) -> bool {
        !self.label.is_empty()
    }

    pub(crate) fn into_field(self, id: FieldId) -> FormField {
        FormField {
            id,
            kind: self.kind,
            label: self.label,
            required: self.required,
            default_value: self.default_value,
            validation_rules: self.validation_rules,
            derivation: self.derivation,
            formula: self.formula,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let field = NewField::new(FieldKind::Text, "Name");
        assert!(!field.required);
        assert_eq!(field.validation_rules, Some(ValidationRules::default()));
        assert!(field.is_complete());
        assert!(!NewField::new(FieldKind::Text, "").is_complete());
    }

    #[test]
    fn test_into_field_keeps_attributes() {
        let field = NewField::new(FieldKind::Number, "Age")
            .required(true)
            .with_default(18.0)
            .with_formula("age")
            .into_field(FieldId::from("age"));
        assert_eq!(field.id.as_str(), "age");
        assert!(field.required);
        assert_eq!(field.default_value, Some(FieldValue::Number(18.0)));
        assert_eq!(field.formula.as_deref(), Some("age"));
    }
}
