//! Infrastructure layer
//!
//! Concrete implementations of the outbound ports.

pub mod persistence;

pub use persistence::{InMemorySchemaRepository, JsonFileRepository};
