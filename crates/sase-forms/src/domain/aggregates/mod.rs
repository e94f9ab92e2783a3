//! Aggregates module

pub mod schema;
pub mod submission;

pub use schema::{FormSchema, SchemaSummary};
pub use submission::FormSubmission;
