pub mod block_type;
pub mod errors;

pub use block_type::{BlockTypeDefinition, FieldDefinition, InputKind};
pub use errors::SchemaError;
