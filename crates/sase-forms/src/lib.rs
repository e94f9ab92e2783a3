//! OpenSASE Form Builder
//!
//! Local form builder: compose a schema of typed fields, save named schemas,
//! and fill them in with per-field validation and derived fields.
//!
//! ## Architecture
//!
//! - **Domain Layer**: schema aggregate, field value objects, validation and
//!   derivation services
//! - **Application Layer**: the schema store (builder commands) and fill
//!   sessions
//! - **Ports Layer**: the saved-collection repository interface
//! - **Infrastructure Layer**: JSON file and in-memory repositories
//!
//! ## Example
//!
//! ```
//! use sase_forms::{FieldKind, FieldValue, FillSession, FormStore, InMemorySchemaRepository, NewField};
//!
//! let mut store = FormStore::open(InMemorySchemaRepository::new());
//! let form_id = store.start_new_form();
//! let name = store.add_field(NewField::new(FieldKind::Text, "Name").required(true)).unwrap();
//! store.save_form("Contact").unwrap();
//!
//! store.load_form(&form_id);
//! let mut session = FillSession::new(store.draft().unwrap());
//! session.set_value(&name, FieldValue::from("Ada"));
//! assert!(session.submit().is_ok());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    CommandOutcome, FillSession, FormStore, NewField, SessionCommand, StoreCommand, SubmitError,
};
pub use config::{FormsConfig, RuntimeConfig, StorageConfig};
pub use domain::aggregates::{FormSchema, FormSubmission, SchemaSummary};
pub use domain::events::{DomainEvent, FormEvent};
pub use domain::services::{DerivationEngine, DerivationMode, FieldOrdering, FieldValidator};
pub use domain::value_objects::{
    Derivation, FieldId, FieldKind, FieldValue, FormField, SchemaId, ValidationRules,
};
pub use infrastructure::{InMemorySchemaRepository, JsonFileRepository};
pub use ports::outbound::{RepositoryError, SchemaRepository};

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, FormsError>;
