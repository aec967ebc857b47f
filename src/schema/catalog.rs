use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::json;

use super::types::{BlockTypeDefinition, FieldDefinition, InputKind, SchemaError};

static BUILTIN: Lazy<BlockTypeCatalog> = Lazy::new(|| {
    BlockTypeCatalog::new(builtin_types()).expect("builtin block type table is valid")
});

/// Immutable lookup table of block type definitions keyed by `typeId`.
///
/// The catalog is populated once at startup from the compiled-in table and
/// never mutated afterwards — there is no runtime registration path, so
/// `list_types` is deterministic and stable for the process lifetime.
#[derive(Debug)]
pub struct BlockTypeCatalog {
    types: Vec<BlockTypeDefinition>,
    index: HashMap<String, usize>,
}

impl BlockTypeCatalog {
    /// Build a catalog from an ordered list of definitions.
    ///
    /// Rejects tables that violate the static invariants: duplicate
    /// `typeId`s, `select` fields without options (or options on any other
    /// kind), and `dependsOn` references that do not name a sibling
    /// `toggle` field.
    pub fn new(types: Vec<BlockTypeDefinition>) -> Result<Self, SchemaError> {
        let mut index = HashMap::new();
        for (pos, block_type) in types.iter().enumerate() {
            if index.insert(block_type.type_id.clone(), pos).is_some() {
                return Err(SchemaError::InvalidDefinition(format!(
                    "duplicate typeId '{}'",
                    block_type.type_id
                )));
            }
            for field in &block_type.schema {
                validate_field(block_type, field)?;
            }
        }
        Ok(Self { types, index })
    }

    /// The process-wide builtin catalog.
    pub fn builtin() -> &'static BlockTypeCatalog {
        &BUILTIN
    }

    /// All block type definitions in declaration order.
    pub fn list_types(&self) -> &[BlockTypeDefinition] {
        &self.types
    }

    /// Look up a definition by its `typeId`.
    pub fn get(&self, type_id: &str) -> Option<&BlockTypeDefinition> {
        self.index.get(type_id).map(|pos| &self.types[*pos])
    }

    /// Look up a definition, failing with `UnknownType` when absent.
    pub fn require(&self, type_id: &str) -> Result<&BlockTypeDefinition, SchemaError> {
        self.get(type_id)
            .ok_or_else(|| SchemaError::UnknownType(type_id.to_string()))
    }
}

fn validate_field(
    block_type: &BlockTypeDefinition,
    field: &FieldDefinition,
) -> Result<(), SchemaError> {
    match (field.input_kind, &field.options) {
        (InputKind::Select, None) => {
            return Err(SchemaError::InvalidDefinition(format!(
                "select field '{}.{}' declares no options",
                block_type.type_id, field.key
            )));
        }
        (InputKind::Select, Some(_)) => {}
        (_, Some(_)) => {
            return Err(SchemaError::InvalidDefinition(format!(
                "non-select field '{}.{}' declares options",
                block_type.type_id, field.key
            )));
        }
        (_, None) => {}
    }
    if let Some(dep) = &field.depends_on {
        match block_type.field(dep) {
            Some(target) if target.input_kind == InputKind::Toggle => {}
            Some(_) => {
                return Err(SchemaError::InvalidDefinition(format!(
                    "field '{}.{}' depends on '{}', which is not a toggle",
                    block_type.type_id, field.key, dep
                )));
            }
            None => {
                return Err(SchemaError::InvalidDefinition(format!(
                    "field '{}.{}' depends on missing sibling '{}'",
                    block_type.type_id, field.key, dep
                )));
            }
        }
    }
    Ok(())
}

/// The compiled-in block type table.
fn builtin_types() -> Vec<BlockTypeDefinition> {
    vec![
        BlockTypeDefinition::new("banner", "Banner")
            .with_default("title", json!("Welcome"))
            .with_default("subtitle", json!("Edit this banner"))
            .with_field(FieldDefinition::new("title", "Title", InputKind::Text))
            .with_field(FieldDefinition::new(
                "subtitle",
                "Subtitle",
                InputKind::Text,
            )),
        BlockTypeDefinition::new("bannerPro", "Banner Pro")
            .with_default("showTitle", json!(true))
            .with_default("title", json!("Welcome"))
            .with_default("align", json!("center"))
            .with_default(
                "buttons",
                json!([{ "label": "Learn more", "href": "#" }]),
            )
            .with_field(FieldDefinition::new(
                "showTitle",
                "Show title",
                InputKind::Toggle,
            ))
            .with_field(
                FieldDefinition::new("title", "Title", InputKind::Text)
                    .with_depends_on("showTitle"),
            )
            .with_field(
                FieldDefinition::new("align", "Alignment", InputKind::Select)
                    .with_options(&["left", "center", "right"]),
            )
            .with_field(FieldDefinition::new(
                "buttons",
                "Buttons",
                InputKind::Buttons,
            )),
        BlockTypeDefinition::new("cards", "Cards")
            .with_default("items", json!([{ "title": "Card", "text": "Text" }]))
            .with_field(FieldDefinition::new(
                "items",
                "Cards",
                InputKind::CardsList,
            )),
        BlockTypeDefinition::new("text", "Text")
            .with_default("body", json!("Write something"))
            .with_field(FieldDefinition::new("body", "Body", InputKind::Textarea)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_stable() {
        let first: Vec<_> = BlockTypeCatalog::builtin()
            .list_types()
            .iter()
            .map(|t| t.type_id.clone())
            .collect();
        let second: Vec<_> = BlockTypeCatalog::builtin()
            .list_types()
            .iter()
            .map(|t| t.type_id.clone())
            .collect();
        assert_eq!(first, second);
        assert!(first.contains(&"banner".to_string()));
        assert!(first.contains(&"bannerPro".to_string()));
    }

    #[test]
    fn lookup_by_type_id() {
        let catalog = BlockTypeCatalog::builtin();
        assert_eq!(catalog.get("cards").unwrap().display_name, "Cards");
        assert!(catalog.get("missing").is_none());
        assert_eq!(
            catalog.require("missing").unwrap_err(),
            SchemaError::UnknownType("missing".to_string())
        );
    }

    #[test]
    fn rejects_duplicate_type_ids() {
        let types = vec![
            BlockTypeDefinition::new("dup", "One"),
            BlockTypeDefinition::new("dup", "Two"),
        ];
        assert!(matches!(
            BlockTypeCatalog::new(types),
            Err(SchemaError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn rejects_select_without_options() {
        let types = vec![BlockTypeDefinition::new("bad", "Bad").with_field(
            FieldDefinition::new("choice", "Choice", InputKind::Select),
        )];
        assert!(matches!(
            BlockTypeCatalog::new(types),
            Err(SchemaError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn rejects_depends_on_non_toggle() {
        let types = vec![BlockTypeDefinition::new("bad", "Bad")
            .with_field(FieldDefinition::new("title", "Title", InputKind::Text))
            .with_field(
                FieldDefinition::new("subtitle", "Subtitle", InputKind::Text)
                    .with_depends_on("title"),
            )];
        assert!(matches!(
            BlockTypeCatalog::new(types),
            Err(SchemaError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn rejects_depends_on_missing_sibling() {
        let types = vec![BlockTypeDefinition::new("bad", "Bad").with_field(
            FieldDefinition::new("title", "Title", InputKind::Text).with_depends_on("ghost"),
        )];
        assert!(matches!(
            BlockTypeCatalog::new(types),
            Err(SchemaError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn builtin_select_fields_carry_options() {
        for block_type in BlockTypeCatalog::builtin().list_types() {
            for field in &block_type.schema {
                assert_eq!(
                    field.input_kind == InputKind::Select,
                    field.options.is_some(),
                    "field {}.{}",
                    block_type.type_id,
                    field.key
                );
            }
        }
    }
}
