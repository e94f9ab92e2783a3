//! Fill session
//!
//! Transient values and per-field errors for one schema being filled. The
//! session keeps its own copy of the schema and never writes back to the
//! store.

use std::collections::HashMap;
use tracing::debug;

use crate::application::store::CommandOutcome;
use crate::domain::aggregates::{FormSchema, FormSubmission};
use crate::domain::services::{DerivationEngine, DerivationMode, FieldValidator};
use crate::domain::value_objects::{FieldId, FieldValue};

/// One fill operation
#[derive(Clone, Debug, PartialEq)]
pub enum SessionCommand {
    SetValue { field_id: FieldId, value: FieldValue },
    ClearValue { field_id: FieldId },
}

/// Submit rejected: every failing field with its message
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("form has {} invalid field(s)", .errors.len())]
pub struct SubmitError {
    pub errors: HashMap<FieldId, String>,
}

#[derive(Clone, Debug)]
pub struct FillSession {
    schema: FormSchema,
    mode: DerivationMode,
    values: HashMap<FieldId, FieldValue>,
    errors: HashMap<FieldId, String>,
}

impl FillSession {
    pub fn new(schema: &FormSchema) -> Self {
        Self::with_mode(schema, DerivationMode::default())
    }

    pub fn with_mode(schema: &FormSchema, mode: DerivationMode) -> Self {
        Self {
            schema: schema.clone(),
            mode,
            values: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn schema(&self) -> &FormSchema { &self.schema }
    pub fn values(&self) -> &HashMap<FieldId, FieldValue> { &self.values }
    pub fn errors(&self) -> &HashMap<FieldId, String> { &self.errors }
    pub fn value(&self, id: &FieldId) -> Option<&FieldValue> { self.values.get(id) }
    pub fn error(&self, id: &FieldId) -> Option<&str> { self.errors.get(id).map(String::as_str) }

    /// Submit stays disabled while any field shows an error
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn dispatch(&mut self, command: SessionCommand) -> CommandOutcome {
        match command {
            SessionCommand::SetValue { field_id, value } => self.set_value(&field_id, value),
            SessionCommand::ClearValue { field_id } => self.clear_value(&field_id),
        }
    }

    pub fn set_value(&mut self, id: &FieldId, value: FieldValue) -> CommandOutcome {
        self.apply(id, Some(value))
    }

    pub fn clear_value(&mut self, id: &FieldId) -> CommandOutcome {
        self.apply(id, None)
    }

    /// Store the value, validate that field, then run one derivation pass.
    /// Derived fields take no direct input and their errors are left as is.
    fn apply(&mut self, id: &FieldId, value: Option<FieldValue>) -> CommandOutcome {
        let Some(field) = self.schema.field(id) else {
            debug!(field_id = %id, "set_value ignored: unknown field");
            return CommandOutcome::Ignored;
        };
        if field.is_derived() {
            debug!(field_id = %id, "set_value ignored: derived field");
            return CommandOutcome::Ignored;
        }

        let before = self.values.clone();
        match &value {
            Some(v) => self.values.insert(id.clone(), v.clone()),
            None => self.values.remove(id),
        };

        match FieldValidator::validate(field, value.as_ref()) {
            Some(message) => self.errors.insert(id.clone(), message),
            None => self.errors.remove(id),
        };

        let derived = DerivationEngine::derive(
            self.schema.fields(),
            id,
            value.as_ref(),
            &before,
            self.mode,
        );
        for (derived_id, derived_value) in derived {
            self.values.insert(derived_id, derived_value);
        }
        CommandOutcome::Applied
    }

    /// Validate every field against the current values, replacing all
    /// errors. Succeeds with a submission when nothing fails.
    pub fn submit(&mut self) -> Result<FormSubmission, SubmitError> {
        self.errors = self
            .schema
            .fields()
            .iter()
            .filter_map(|field| {
                FieldValidator::validate(field, self.values.get(&field.id))
                    .map(|message| (field.id.clone(), message))
            })
            .collect();

        if !self.errors.is_empty() {
            debug!(schema_id = %self.schema.id(), invalid = self.errors.len(), "Submit rejected");
            return Err(SubmitError { errors: self.errors.clone() });
        }
        debug!(schema_id = %self.schema.id(), "Submit accepted");
        Ok(FormSubmission::create(self.schema.id().clone(), self.values.clone()))
    }
}
