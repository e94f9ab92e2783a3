//! Domain module
//!
//! Schema model, field value objects and the pure validation/derivation
//! services.

pub mod aggregates;
pub mod events;
pub mod services;
pub mod value_objects;

pub use aggregates::*;
pub use events::*;
pub use services::*;
pub use value_objects::*;
