//! Schema repository implementations

mod json_file;

pub use json_file::JsonFileRepository;

use parking_lot::RwLock;

use crate::domain::aggregates::FormSchema;
use crate::ports::outbound::{RepositoryError, SchemaRepository};

/// In-memory repository holding the serialized slot as a string, so tests
/// and embedders see exactly what a durable slot would contain.
#[derive(Default)]
pub struct InMemorySchemaRepository {
    slot: RwLock<Option<String>>,
}

impl InMemorySchemaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw content, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(raw.into())),
        }
    }

    /// Current raw slot content
    pub fn raw(&self) -> Option<String> {
        self.slot.read().clone()
    }
}

impl SchemaRepository for InMemorySchemaRepository {
    fn load_all(&self) -> Result<Vec<FormSchema>, RepositoryError> {
        match self.slot.read().as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(vec![]),
        }
    }

    fn store_all(&self, schemas: &[FormSchema]) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(schemas)?;
        *self.slot.write() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FieldId, FieldKind, FormField};

    #[test]
    fn test_empty_slot_loads_empty() {
        let repo = InMemorySchemaRepository::new();
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_store_and_load() {
        let repo = InMemorySchemaRepository::new();
        let mut schema = FormSchema::draft();
        schema.push_field(FormField::new(FieldId::new(), FieldKind::Date, "When"));
        schema.rename("Booking");

        repo.store_all(std::slice::from_ref(&schema)).unwrap();
        assert_eq!(repo.load_all().unwrap(), vec![schema]);
        assert!(repo.raw().unwrap().starts_with('['));
    }

    #[test]
    fn test_corrupt_slot_is_an_error() {
        let repo = InMemorySchemaRepository::with_raw("{not json");
        assert!(matches!(repo.load_all(), Err(RepositoryError::Serialization(_))));
    }
}
