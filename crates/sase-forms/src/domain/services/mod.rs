//! Domain services module

pub mod derivation;
pub mod ordering;
pub mod validation;

pub use derivation::{DerivationEngine, DerivationMode};
pub use ordering::FieldOrdering;
pub use validation::FieldValidator;
