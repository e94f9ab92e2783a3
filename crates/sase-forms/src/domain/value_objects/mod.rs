//! Forms value objects
//!
//! Identifiers, field definitions and the values a user enters.

pub mod field;
pub mod value;

pub use field::{Derivation, FieldKind, FormField, UnknownFieldKind, ValidationRules};
pub use value::FieldValue;

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id! {
    /// Identifier of a field, unique within its schema
    FieldId
}

string_id! {
    /// Identifier of a form schema
    SchemaId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        assert_ne!(FieldId::new(), FieldId::new());
        assert_ne!(SchemaId::new(), SchemaId::new());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = FieldId::from_string("f-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"f-1\"");
        let back: FieldId = serde_json::from_str("\"f-1\"").unwrap();
        assert_eq!(back, id);
    }
}
