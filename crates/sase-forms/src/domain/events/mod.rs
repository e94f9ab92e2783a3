//! Form events
//!
//! Raised by the schema store as commands are applied.

use crate::domain::value_objects::{FieldId, SchemaId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomainEvent {
    Form(FormEvent),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    DraftStarted { schema_id: SchemaId },
    FieldAdded { schema_id: SchemaId, field_id: FieldId },
    FieldUpdated { schema_id: SchemaId, field_id: FieldId },
    FieldRemoved { schema_id: SchemaId, field_id: FieldId },
    FieldsReordered { schema_id: SchemaId },
    Saved { schema_id: SchemaId, name: String },
    Loaded { schema_id: SchemaId },
}
