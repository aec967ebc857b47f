use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::catalog::BlockTypeCatalog;
use super::types::{FieldDefinition, SchemaError};
use crate::site::Section;

/// One schema field resolved against a concrete property bag: the
/// definition, the value the editor should show, and whether the field is
/// currently visible under the `dependsOn` rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    pub field: FieldDefinition,
    pub current_value: Value,
    pub visible: bool,
}

/// Build a new section from a catalog type: a freshly generated unique id
/// and a deep copy of the type's default props.
pub fn instantiate(catalog: &BlockTypeCatalog, type_id: &str) -> Result<Section, SchemaError> {
    let block_type = catalog.require(type_id)?;
    Ok(Section {
        id: Uuid::new_v4().to_string(),
        type_id: block_type.type_id.clone(),
        props: block_type.default_props.clone(),
    })
}

/// Resolve each schema field of `type_id` against `props`, in declared
/// order.
///
/// A field with no `dependsOn` is always visible. Otherwise visibility is
/// the boolean value of the referenced prop, with a missing or non-boolean
/// value counting as `false`. The shown value falls back from `props` to
/// the type's default, then to JSON null. `props` is never mutated.
pub fn resolve_visible_fields(
    catalog: &BlockTypeCatalog,
    type_id: &str,
    props: &Map<String, Value>,
) -> Result<Vec<ResolvedField>, SchemaError> {
    let block_type = catalog.require(type_id)?;
    let resolved = block_type
        .schema
        .iter()
        .map(|field| {
            let visible = match &field.depends_on {
                None => true,
                Some(dep) => matches!(props.get(dep), Some(Value::Bool(true))),
            };
            let current_value = props
                .get(&field.key)
                .or_else(|| block_type.default_for(&field.key))
                .cloned()
                .unwrap_or(Value::Null);
            ResolvedField {
                field: field.clone(),
                current_value,
                visible,
            }
        })
        .collect();
    Ok(resolved)
}
