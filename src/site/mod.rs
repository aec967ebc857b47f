//! The site document model: an ordered list of block sections plus page
//! metadata. Documents round-trip losslessly through JSON, including the
//! unconstrained record lists some props hold.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
}

/// One configured block instance within a page.
///
/// `props` may be partial or carry keys the type's schema never mentions;
/// array-valued props such as `buttons` or card lists hold records of
/// whatever shape the editor produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub type_id: String,
    #[serde(default)]
    pub props: Map<String, Value>,
}

/// A whole page: metadata plus sections in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDocument {
    pub meta: SiteMeta,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Default for SiteDocument {
    /// The seed document both store slots start from on first boot.
    fn default() -> Self {
        Self {
            meta: SiteMeta {
                title: "My block site".to_string(),
            },
            sections: Vec::new(),
        }
    }
}
