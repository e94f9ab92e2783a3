//! Outbound ports (Repository traits)
//!
//! Durable storage for the saved schema collection. The collection is always
//! read and written as a whole.

use crate::domain::aggregates::FormSchema;

/// Saved schema repository port
pub trait SchemaRepository {
    /// Read the whole saved collection. An absent slot is an empty collection.
    fn load_all(&self) -> Result<Vec<FormSchema>, RepositoryError>;

    /// Overwrite the slot with `schemas`. Either the whole collection is
    /// written or the previous content remains.
    fn store_all(&self, schemas: &[FormSchema]) -> Result<(), RepositoryError>;
}

impl<R: SchemaRepository + ?Sized> SchemaRepository for Box<R> {
    fn load_all(&self) -> Result<Vec<FormSchema>, RepositoryError> {
        (**self).load_all()
    }

    fn store_all(&self, schemas: &[FormSchema]) -> Result<(), RepositoryError> {
        (**self).store_all(schemas)
    }
}

impl<R: SchemaRepository + ?Sized> SchemaRepository for std::sync::Arc<R> {
    fn load_all(&self) -> Result<Vec<FormSchema>, RepositoryError> {
        (**self).load_all()
    }

    fn store_all(&self, schemas: &[FormSchema]) -> Result<(), RepositoryError> {
        (**self).store_all(schemas)
    }
}

/// Repository errors
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
