use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The form control an editing surface renders for a field.
///
/// Serialized in camelCase so the wire names match the editor's field
/// vocabulary (`text`, `textarea`, `toggle`, `select`, `buttons`,
/// `cardsList`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    Text,
    Textarea,
    Toggle,
    Select,
    Buttons,
    CardsList,
}

/// One editable field of a block type's schema.
///
/// `depends_on` is a one-level back-reference to a sibling `toggle` field:
/// the field is only shown while that toggle holds `true`. It is data, not
/// logic — no transitive chains or boolean expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub key: String,
    pub label: String,
    pub input_kind: InputKind,
    /// Choices offered by a `select` field. Present iff `input_kind` is
    /// `Select`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Key of the sibling toggle field gating this field's visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
}

impl FieldDefinition {
    #[must_use]
    pub fn new(key: &str, label: &str, input_kind: InputKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            input_kind,
            options: None,
            depends_on: None,
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    pub fn with_depends_on(mut self, key: &str) -> Self {
        self.depends_on = Some(key.to_string());
        self
    }
}

/// A reusable block template: default content plus the ordered schema the
/// editor renders as a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTypeDefinition {
    pub type_id: String,
    pub display_name: String,
    /// Initial property bag for newly instantiated sections. Values may be
    /// scalars, booleans, or lists of loosely-shaped records.
    pub default_props: Map<String, Value>,
    /// Field definitions in display order.
    pub schema: Vec<FieldDefinition>,
}

impl BlockTypeDefinition {
    #[must_use]
    pub fn new(type_id: &str, display_name: &str) -> Self {
        Self {
            type_id: type_id.to_string(),
            display_name: display_name.to_string(),
            default_props: Map::new(),
            schema: Vec::new(),
        }
    }

    pub fn with_default(mut self, key: &str, value: Value) -> Self {
        self.default_props.insert(key.to_string(), value);
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.schema.push(field);
        self
    }

    /// The default value for `key`, if the type declares one.
    pub fn default_for(&self, key: &str) -> Option<&Value> {
        self.default_props.get(key)
    }

    /// The schema field with the given key, if declared.
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.schema.iter().find(|f| f.key == key)
    }
}
