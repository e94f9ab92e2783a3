//! Form Schema Aggregate
//!
//! An ordered list of fields plus the metadata assigned when a draft is
//! started. Field order drives rendering and reordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::value_objects::{FieldId, FormField, SchemaId};

/// Form schema aggregate root
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    id: SchemaId,
    name: String,
    created_at: DateTime<Utc>,
    fields: Vec<FormField>,
}

impl FormSchema {
    /// Start an unnamed, empty draft
    pub fn draft() -> Self {
        Self {
            id: SchemaId::new(),
            name: String::new(),
            created_at: Utc::now(),
            fields: vec![],
        }
    }

    pub fn id(&self) -> &SchemaId { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn fields(&self) -> &[FormField] { &self.fields }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn field(&self, id: &FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| &f.id == id)
    }

    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }

    // =========================================================================
    // Mutations (driven by the store)
    // =========================================================================

    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Give a copy its own identity; `created_at` is kept
    pub(crate) fn reassign_id(&mut self) {
        self.id = SchemaId::new();
    }

    pub(crate) fn push_field(&mut self, field: FormField) {
        self.fields.push(field);
    }

    /// Replace the field with the same id in place. The field kind may not
    /// change variant.
    pub(crate) fn replace_field(&mut self, field: FormField) -> bool {
        match self.fields.iter_mut().find(|f| f.id == field.id) {
            Some(slot) if slot.kind.same_variant(&field.kind) => {
                *slot = field;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn remove_field(&mut self, id: &FieldId) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| &f.id != id);
        self.fields.len() != before
    }

    /// Replace the field list wholesale. Accepted only when `fields` holds
    /// exactly the current fields, each once and unchanged.
    pub(crate) fn replace_order(&mut self, fields: Vec<FormField>) -> bool {
        if !self.is_permutation(&fields) {
            return false;
        }
        self.fields = fields;
        true
    }

    fn is_permutation(&self, fields: &[FormField]) -> bool {
        if fields.len() != self.fields.len() {
            return false;
        }
        let current: HashMap<&FieldId, &FormField> =
            self.fields.iter().map(|f| (&f.id, f)).collect();
        let mut seen = HashSet::with_capacity(fields.len());
        fields
            .iter()
            .all(|f| current.get(&f.id) == Some(&f) && seen.insert(&f.id))
    }
}

/// Listing entry for a saved schema
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaSummary {
    pub id: SchemaId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FieldKind;

    fn field(id: &str) -> FormField {
        FormField::new(FieldId::from(id), FieldKind::Text, id)
    }

    #[test]
    fn test_draft_starts_empty() {
        let draft = FormSchema::draft();
        assert!(draft.is_empty());
        assert_eq!(draft.name(), "");
    }

    #[test]
    fn test_replace_field_keeps_position() {
        let mut schema = FormSchema::draft();
        schema.push_field(field("a"));
        schema.push_field(field("b"));

        let mut renamed = field("a");
        renamed.label = "Renamed".into();
        assert!(schema.replace_field(renamed));
        assert_eq!(schema.fields()[0].label, "Renamed");
        assert_eq!(schema.fields()[1].id.as_str(), "b");
    }

    #[test]
    fn test_replace_field_rejects_kind_change() {
        let mut schema = FormSchema::draft();
        schema.push_field(field("a"));

        let changed = FormField::new(FieldId::from("a"), FieldKind::Checkbox, "a");
        assert!(!schema.replace_field(changed));
        assert_eq!(schema.fields()[0].kind, FieldKind::Text);
    }

    #[test]
    fn test_replace_order_requires_permutation() {
        let mut schema = FormSchema::draft();
        schema.push_field(field("a"));
        schema.push_field(field("b"));

        assert!(!schema.replace_order(vec![field("a")]));
        assert!(!schema.replace_order(vec![field("a"), field("a")]));
        assert!(!schema.replace_order(vec![field("a"), field("c")]));
        assert!(schema.replace_order(vec![field("b"), field("a")]));
        assert_eq!(schema.fields()[0].id.as_str(), "b");
    }

    #[test]
    fn test_replace_order_rejects_changed_fields() {
        let mut schema = FormSchema::draft();
        schema.push_field(field("a"));
        schema.push_field(field("b"));

        let retyped = FormField::new(FieldId::from("a"), FieldKind::Checkbox, "a");
        assert!(!schema.replace_order(vec![field("b"), retyped]));

        let mut relabelled = field("a");
        relabelled.label = "Other".into();
        assert!(!schema.replace_order(vec![field("b"), relabelled]));

        assert_eq!(schema.fields()[0].kind, FieldKind::Text);
        assert_eq!(schema.fields()[0].label, "a");
    }

    #[test]
    fn test_schema_json_keys() {
        let mut schema = FormSchema::draft();
        schema.rename("Survey");
        schema.push_field(field("a"));
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["name"], "Survey");
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["fields"][0]["type"], "text");
    }
}
