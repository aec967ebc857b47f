//! Block type schemas: the static catalog plus the validator that turns
//! declarative field definitions into instantiated sections and resolved
//! editor forms.

pub mod catalog;
pub mod types;
pub mod validator;

pub use catalog::BlockTypeCatalog;
pub use types::{BlockTypeDefinition, FieldDefinition, InputKind, SchemaError};
pub use validator::{instantiate, resolve_visible_fields, ResolvedField};
