//! Schema store
//!
//! Owns the draft being edited and the saved collection. Every builder
//! operation is a [`StoreCommand`]; commands whose preconditions are not met
//! (no draft, unknown field) are ignored rather than reported as errors.

use tracing::{debug, info, warn};

use crate::application::dto::NewField;
use crate::application::session::FillSession;
use crate::config::FormsConfig;
use crate::domain::aggregates::{FormSchema, SchemaSummary};
use crate::domain::events::{DomainEvent, FormEvent};
use crate::domain::services::DerivationMode;
use crate::domain::value_objects::{FieldId, FormField, SchemaId};
use crate::infrastructure::persistence::JsonFileRepository;
use crate::ports::outbound::SchemaRepository;
use crate::Result;

/// One builder operation
#[derive(Clone, Debug, PartialEq)]
pub enum StoreCommand {
    StartNewForm,
    AddField(NewField),
    UpdateField(FormField),
    DeleteField(FieldId),
    /// Complete new field order, e.g. from [`crate::FieldOrdering::move_field`]
    ReorderFields(Vec<FormField>),
    SaveForm(String),
    LoadForm(SchemaId),
}

/// Whether a command changed state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Ignored,
}

impl CommandOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    fn from_applied(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::Ignored }
    }
}

pub struct FormStore<R: SchemaRepository> {
    repository: R,
    draft: Option<FormSchema>,
    saved: Vec<FormSchema>,
    events: Vec<DomainEvent>,
    mode: DerivationMode,
}

impl FormStore<JsonFileRepository> {
    /// Store over the JSON slot named in `config`, with its derivation mode
    pub fn from_config(config: &FormsConfig) -> Self {
        Self::open(JsonFileRepository::new(
            &config.storage.path,
            &config.storage.slot,
        ))
        .with_derivation_mode(config.runtime.derivation)
    }
}

impl<R: SchemaRepository> FormStore<R> {
    /// Open the store, reading the saved collection once. Unreadable or
    /// corrupt storage starts an empty collection.
    pub fn open(repository: R) -> Self {
        let saved = match repository.load_all() {
            Ok(saved) => {
                debug!(count = saved.len(), "Loaded saved forms");
                saved
            }
            Err(e) => {
                warn!(error = %e, "Saved forms unreadable, starting with an empty collection");
                vec![]
            }
        };
        Self {
            repository,
            draft: None,
            saved,
            events: vec![],
            mode: DerivationMode::default(),
        }
    }

    /// Derivation mode handed to fill sessions opened from this store
    pub fn with_derivation_mode(mut self, mode: DerivationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn dispatch(&mut self, command: StoreCommand) -> Result<CommandOutcome> {
        let outcome = match command {
            StoreCommand::StartNewForm => {
                self.start_new_form();
                CommandOutcome::Applied
            }
            StoreCommand::AddField(field) => {
                CommandOutcome::from_applied(self.add_field(field).is_some())
            }
            StoreCommand::UpdateField(field) => self.update_field(field),
            StoreCommand::DeleteField(id) => self.delete_field(&id),
            StoreCommand::ReorderFields(fields) => self.reorder_fields(fields),
            StoreCommand::SaveForm(name) => return self.save_form(&name),
            StoreCommand::LoadForm(id) => self.load_form(&id),
        };
        Ok(outcome)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn draft(&self) -> Option<&FormSchema> {
        self.draft.as_ref()
    }

    /// Listing of the saved collection, in save order
    pub fn saved_forms(&self) -> Vec<SchemaSummary> {
        self.saved.iter().map(FormSchema::summary).collect()
    }

    pub fn saved_form(&self, id: &SchemaId) -> Option<&FormSchema> {
        self.saved.iter().find(|s| s.id() == id)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn derivation_mode(&self) -> DerivationMode {
        self.mode
    }

    /// Fill session over the current draft, as the preview screen uses it
    pub fn preview_session(&self) -> Option<FillSession> {
        self.draft
            .as_ref()
            .map(|draft| FillSession::with_mode(draft, self.mode))
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Builder operations
    // =========================================================================

    /// Start a fresh draft, discarding any unsaved one
    pub fn start_new_form(&mut self) -> SchemaId {
        if let Some(previous) = &self.draft {
            debug!(schema_id = %previous.id(), "Discarding unsaved draft");
        }
        let draft = FormSchema::draft();
        let schema_id = draft.id().clone();
        self.draft = Some(draft);
        self.raise(FormEvent::DraftStarted { schema_id: schema_id.clone() });
        schema_id
    }

    /// Append a field with a fresh id. Label and kind are not checked here.
    pub fn add_field(&mut self, field: NewField) -> Option<FieldId> {
        let Some(draft) = self.draft.as_mut() else {
            debug!("add_field ignored: no draft");
            return None;
        };
        let field_id = FieldId::new();
        draft.push_field(field.into_field(field_id.clone()));
        let schema_id = draft.id().clone();
        self.raise(FormEvent::FieldAdded { schema_id, field_id: field_id.clone() });
        Some(field_id)
    }

    pub fn update_field(&mut self, field: FormField) -> CommandOutcome {
        let Some(draft) = self.draft.as_mut() else {
            debug!("update_field ignored: no draft");
            return CommandOutcome::Ignored;
        };
        let field_id = field.id.clone();
        if !draft.replace_field(field) {
            debug!(field_id = %field_id, "update_field ignored: unknown field or kind change");
            return CommandOutcome::Ignored;
        }
        let schema_id = draft.id().clone();
        self.raise(FormEvent::FieldUpdated { schema_id, field_id });
        CommandOutcome::Applied
    }

    pub fn delete_field(&mut self, id: &FieldId) -> CommandOutcome {
        let Some(draft) = self.draft.as_mut() else {
            debug!("delete_field ignored: no draft");
            return CommandOutcome::Ignored;
        };
        if !draft.remove_field(id) {
            debug!(field_id = %id, "delete_field ignored: unknown field");
            return CommandOutcome::Ignored;
        }
        let schema_id = draft.id().clone();
        self.raise(FormEvent::FieldRemoved { schema_id, field_id: id.clone() });
        CommandOutcome::Applied
    }

    /// Replace the field list with `fields`, which must hold exactly the
    /// draft's current fields in their new order.
    pub fn reorder_fields(&mut self, fields: Vec<FormField>) -> CommandOutcome {
        let Some(draft) = self.draft.as_mut() else {
            debug!("reorder_fields ignored: no draft");
            return CommandOutcome::Ignored;
        };
        if !draft.replace_order(fields) {
            debug!(schema_id = %draft.id(), "reorder_fields ignored: not a reordering of the current fields");
            return CommandOutcome::Ignored;
        }
        let schema_id = draft.id().clone();
        self.raise(FormEvent::FieldsReordered { schema_id });
        CommandOutcome::Applied
    }

    /// Name the draft, persist the collection with it appended, and clear
    /// the draft. If persisting fails nothing changes in memory.
    pub fn save_form(&mut self, name: &str) -> Result<CommandOutcome> {
        let Some(draft) = self.draft.as_ref() else {
            debug!("save_form ignored: no draft");
            return Ok(CommandOutcome::Ignored);
        };
        if name.is_empty() || draft.is_empty() {
            debug!(schema_id = %draft.id(), "save_form ignored: empty name or no fields");
            return Ok(CommandOutcome::Ignored);
        }

        let mut schema = draft.clone();
        schema.rename(name);
        // A loaded copy saved again becomes a new entry
        if self.saved_form(schema.id()).is_some() {
            schema.reassign_id();
        }
        let schema_id = schema.id().clone();

        self.saved.push(schema);
        if let Err(e) = self.repository.store_all(&self.saved) {
            self.saved.pop();
            warn!(schema_id = %schema_id, error = %e, "Failed to persist saved forms");
            return Err(e.into());
        }
        self.draft = None;

        info!(schema_id = %schema_id, name, "Form saved");
        self.raise(FormEvent::Saved { schema_id, name: name.to_string() });
        Ok(CommandOutcome::Applied)
    }

    /// Copy a saved schema into the draft slot
    pub fn load_form(&mut self, id: &SchemaId) -> CommandOutcome {
        let Some(schema) = self.saved_form(id).cloned() else {
            debug!(schema_id = %id, "load_form ignored: not found");
            return CommandOutcome::Ignored;
        };
        self.draft = Some(schema);
        info!(schema_id = %id, "Form loaded");
        self.raise(FormEvent::Loaded { schema_id: id.clone() });
        CommandOutcome::Applied
    }

    fn raise(&mut self, event: FormEvent) {
        self.events.push(DomainEvent::Form(event));
    }
}
