//! JSON file repository
//!
//! One file per slot holding the whole saved collection as a JSON array.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::aggregates::FormSchema;
use crate::ports::outbound::{RepositoryError, SchemaRepository};

pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Repository for `<dir>/<slot>.json`
    pub fn new(dir: impl AsRef<Path>, slot: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", slot)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SchemaRepository for JsonFileRepository {
    fn load_all(&self) -> Result<Vec<FormSchema>, RepositoryError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No saved forms slot yet");
            return Ok(vec![]);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn store_all(&self, schemas: &[FormSchema]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(schemas)?;

        // Write beside the slot, then swap it in
        let staging = self.staging_path();
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            count = schemas.len(),
            "Saved forms written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FieldId, FieldKind, FormField};

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("sase_forms_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = temp_dir();
        let repo = JsonFileRepository::new(&dir, "savedForms");
        assert!(repo.load_all().unwrap().is_empty());
        assert!(!dir.exists());
    }

    #[test]
    fn test_store_creates_dir_and_round_trips() {
        let dir = temp_dir();
        let repo = JsonFileRepository::new(&dir, "savedForms");

        let mut schema = FormSchema::draft();
        schema.push_field(FormField::new(
            FieldId::new(),
            FieldKind::Select { options: vec!["S".into(), "M".into(), "L".into()] },
            "Size",
        ));
        schema.rename("Order");

        repo.store_all(std::slice::from_ref(&schema)).unwrap();
        assert_eq!(repo.path(), dir.join("savedForms.json"));
        assert!(!repo.staging_path().exists());
        assert_eq!(repo.load_all().unwrap(), vec![schema]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_reads_existing_camel_case_slot() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("savedForms.json"),
            r#"[{"id":"s1","name":"Contact","createdAt":"2024-05-01T10:00:00.000Z",
                "fields":[{"id":"f1","type":"text","label":"Name","required":true,
                           "validationRules":{"minLength":2}}]}]"#,
        )
        .unwrap();

        let repo = JsonFileRepository::new(&dir, "savedForms");
        let schemas = repo.load_all().unwrap();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].name(), "Contact");
        assert_eq!(schemas[0].fields()[0].validation_rules.as_ref().unwrap().min_length, Some(2));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("savedForms.json"), "[{").unwrap();

        let repo = JsonFileRepository::new(&dir, "savedForms");
        assert!(matches!(repo.load_all(), Err(RepositoryError::Serialization(_))));

        fs::remove_dir_all(&dir).unwrap();
    }
}
