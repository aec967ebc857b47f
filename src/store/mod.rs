//! Persistence for the draft/published document pair.

pub mod core;
pub mod errors;

pub use self::core::{DocumentStore, DRAFT, PUBLISHED};
pub use errors::{StoreError, StoreResult};
