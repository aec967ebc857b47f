use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    UnknownType(String),
    InvalidDefinition(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchemaError::UnknownType(type_id) => write!(f, "Unknown block type: {}", type_id),
            SchemaError::InvalidDefinition(msg) => {
                write!(f, "Invalid block type definition: {}", msg)
            }
        }
    }
}

impl std::error::Error for SchemaError {}
