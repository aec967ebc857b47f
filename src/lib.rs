//! # PageCraft
//!
//! This library implements a block-based site builder: a non-technical
//! editor assembles a page from reusable blocks, edits each block through a
//! form generated from a declarative schema, and publishes a reviewed draft
//! to a separately served live document.
//!
//! ## Core Components
//!
//! * `schema` - Block type catalog, field definitions, and the validator
//!   that instantiates sections and resolves conditional field visibility
//! * `site` - The site document model: sections plus page metadata
//! * `store` - Sled-backed store holding the draft and published documents
//! * `pagecraft_node` - Composition service, HTTP transport, and
//!   configuration
//! * `error` - Error types and handling
//! * `logging` - Logger initialization
//!
//! ## Architecture
//!
//! The catalog is a static table populated once at startup; there is no
//! runtime registration path. All mutable state lives in the document store
//! as two independent whole documents, `draft` and `published`. Saving
//! replaces the draft wholesale with last-writer-wins semantics; publishing
//! snapshots the draft into the published slot atomically, so the two never
//! share structure and readers never observe a partially written document.

pub mod error;
pub mod logging;
pub mod pagecraft_node;
pub mod schema;
pub mod site;
pub mod store;

// Re-export main types for convenience
pub use error::{PageCraftError, PageCraftResult};
pub use pagecraft_node::config::{load_node_config, NodeConfig};
pub use pagecraft_node::{PageCraftHttpServer, PageCraftNode};
pub use schema::{BlockTypeCatalog, BlockTypeDefinition, FieldDefinition, InputKind, SchemaError};
pub use site::{Section, SiteDocument, SiteMeta};
pub use store::{DocumentStore, StoreError};
