use log::info;
use serde_json::{Map, Value};

use crate::error::PageCraftResult;
use crate::pagecraft_node::config::NodeConfig;
use crate::schema::{self, BlockTypeCatalog, BlockTypeDefinition, ResolvedField};
use crate::site::{Section, SiteDocument};
use crate::store::{DocumentStore, DRAFT, PUBLISHED};

/// A PageCraft node: the single entry point composing the block type
/// catalog, the schema validator, and the document store.
///
/// All state lives in the store; the node itself is a cheaply cloneable
/// handle and every operation is one synchronous call, so concurrent
/// operations never block each other. Draft saves are last-writer-wins.
///
/// # Examples
///
/// ```rust,no_run
/// use pagecraft::pagecraft_node::{NodeConfig, PageCraftNode};
/// use pagecraft::error::PageCraftResult;
/// use std::path::PathBuf;
///
/// fn main() -> PageCraftResult<()> {
///     let config = NodeConfig::new(PathBuf::from("data"));
///     let node = PageCraftNode::new(config)?;
///
///     // Drop a fresh banner section into the draft and publish it.
///     let mut draft = node.get_draft()?;
///     draft.sections.push(node.instantiate_section("banner")?);
///     node.save_draft(&draft)?;
///     node.publish_draft()?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PageCraftNode {
    /// The draft/published document store
    store: DocumentStore,
    /// The process-wide block type catalog
    catalog: &'static BlockTypeCatalog,
    /// Configuration settings for this node
    config: NodeConfig,
}

impl PageCraftNode {
    /// Creates a new PageCraftNode with the specified configuration.
    ///
    /// Opens the document store at the configured storage path and seeds the
    /// draft/published pair on first boot.
    pub fn new(config: NodeConfig) -> PageCraftResult<Self> {
        let store = DocumentStore::open(&config.storage_path)?;
        store.initialize()?;
        info!(
            "Document store ready at {}",
            config.storage_path.display()
        );
        Ok(Self {
            store,
            catalog: BlockTypeCatalog::builtin(),
            config,
        })
    }

    /// Loads an existing node from the specified configuration.
    pub fn load(config: NodeConfig) -> PageCraftResult<Self> {
        Self::new(config)
    }

    /// This node's configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// All block type definitions, in catalog order.
    pub fn list_block_types(&self) -> &[BlockTypeDefinition] {
        self.catalog.list_types()
    }

    /// Builds a new section from the named block type with a fresh id and a
    /// copy of the type's default props.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownType` (wrapped) when `type_id` is not in
    /// the catalog.
    pub fn instantiate_section(&self, type_id: &str) -> PageCraftResult<Section> {
        Ok(schema::instantiate(self.catalog, type_id)?)
    }

    /// Resolves the named type's schema against a concrete property bag for
    /// the editing surface: current values plus `dependsOn` visibility.
    pub fn resolve_visible_fields(
        &self,
        type_id: &str,
        props: &Map<String, Value>,
    ) -> PageCraftResult<Vec<ResolvedField>> {
        Ok(schema::resolve_visible_fields(self.catalog, type_id, props)?)
    }

    /// The publicly served document.
    pub fn get_published(&self) -> PageCraftResult<SiteDocument> {
        Ok(self.store.get(PUBLISHED)?)
    }

    /// The editor's in-progress document.
    pub fn get_draft(&self) -> PageCraftResult<SiteDocument> {
        Ok(self.store.get(DRAFT)?)
    }

    /// Replaces the draft wholesale.
    ///
    /// The editing surface is trusted: section `typeId`s and props are not
    /// re-checked against the catalog.
    pub fn save_draft(&self, document: &SiteDocument) -> PageCraftResult<()> {
        self.store.put(DRAFT, document)?;
        Ok(())
    }

    /// Replaces the published document with an independent copy of the
    /// current draft. Idempotent in effect, but always writes.
    pub fn publish_draft(&self) -> PageCraftResult<()> {
        self.store.publish()?;
        info!("Published current draft");
        Ok(())
    }
}
