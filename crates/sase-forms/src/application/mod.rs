//! Application layer
//!
//! The schema store the builder drives and the fill sessions the preview
//! screen drives.

pub mod dto;
pub mod session;
pub mod store;

pub use dto::NewField;
pub use session::{FillSession, SessionCommand, SubmitError};
pub use store::{CommandOutcome, FormStore, StoreCommand};
