//! Derived field computation
//!
//! A derived field's value is the space-joined rendering of its parents'
//! values. Only fields that list the changed field as a parent are
//! recomputed, and outputs never trigger a second pass.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::value_objects::value::render_optional;
use crate::domain::value_objects::{FieldId, FieldValue, FormField};

/// Which snapshot a derivation pass reads parent values from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DerivationMode {
    /// Read every parent from the values as they were before the change.
    /// A field whose only parent is the changed field takes the new value.
    #[default]
    StaleSnapshot,
    /// Read the changed parent's new value alongside the other parents
    Current,
}

/// Derivation domain service
pub struct DerivationEngine;

impl DerivationEngine {
    /// Compute new values for every derived field fed by `changed`.
    ///
    /// `before` is the value map prior to applying `new_value`. Results are
    /// returned in schema order.
    pub fn derive(
        fields: &[FormField],
        changed: &FieldId,
        new_value: Option<&FieldValue>,
        before: &HashMap<FieldId, FieldValue>,
        mode: DerivationMode,
    ) -> Vec<(FieldId, FieldValue)> {
        fields
            .iter()
            .filter_map(|field| {
                let derivation = field.derivation.as_ref()?;
                if !derivation.depends_on(changed) {
                    return None;
                }
                let parents = &derivation.parent_fields;
                let sole_parent = parents.len() == 1;
                let joined = parents
                    .iter()
                    .map(|parent| {
                        let read_new = parent == changed
                            && (sole_parent || mode == DerivationMode::Current);
                        if read_new {
                            render_optional(new_value)
                        } else {
                            render_optional(before.get(parent))
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                Some((field.id.clone(), FieldValue::Text(joined)))
            })
            .collect()
    }
}
