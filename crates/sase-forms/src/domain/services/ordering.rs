//! Field ordering
//!
//! Builds the complete new order a builder hands to `reorder_fields` after
//! a single-item drag.

use crate::domain::value_objects::FormField;

pub struct FieldOrdering;

impl FieldOrdering {
    /// Move the item at `from` to `to`: removal, then insertion.
    ///
    /// Returns the list unchanged when either index is out of range.
    pub fn move_field(fields: &[FormField], from: usize, to: usize) -> Vec<FormField> {
        let mut items = fields.to_vec();
        if from >= items.len() || to >= items.len() {
            return items;
        }
        let moved = items.remove(from);
        items.insert(to, moved);
        items
    }
}
