//! Form submission produced by a successful fill session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::value_objects::{FieldId, FieldValue, SchemaId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub id: String,
    pub form_id: SchemaId,
    pub responses: HashMap<FieldId, FieldValue>,
    pub submitted_at: DateTime<Utc>,
}

impl FormSubmission {
    pub fn create(form_id: SchemaId, responses: HashMap<FieldId, FieldValue>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            form_id,
            responses,
            submitted_at: Utc::now(),
        }
    }
}
