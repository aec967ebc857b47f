use std::path::Path;

use log::info;
use serde::{de::DeserializeOwned, Serialize};

use super::errors::{StoreError, StoreResult};
use crate::site::SiteDocument;

/// Name of the editor's in-progress document.
pub const DRAFT: &str = "draft";
/// Name of the publicly served document.
pub const PUBLISHED: &str = "published";

const DOCUMENTS_TREE: &str = "site_documents";

/// Sled-backed store holding the two site documents.
///
/// The store is schema-agnostic: documents are replaced wholesale as single
/// JSON values and section `typeId`s are never checked against the catalog.
/// Every operation is one atomic key read or write, so concurrent readers
/// see either the old or the new document, never a mix, and a failed write
/// leaves the previously stored document intact.
#[derive(Clone)]
pub struct DocumentStore {
    /// The underlying sled database instance
    db: sled::Db,
    /// Cached tree holding the draft and published documents
    documents_tree: sled::Tree,
}

impl DocumentStore {
    /// Creates a store on an already opened sled database.
    pub fn new(db: sled::Db) -> StoreResult<Self> {
        let documents_tree = db.open_tree(DOCUMENTS_TREE)?;
        Ok(Self { db, documents_tree })
    }

    /// Opens (or creates) the sled database at `path` and wraps it.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = sled::open(path)?;
        Self::new(db)
    }

    /// Reads the named document.
    ///
    /// Fails with [`StoreError::UnknownDocument`] for names outside
    /// `draft`/`published`, and with [`StoreError::Unavailable`] when the
    /// document cannot be produced from storage.
    pub fn get(&self, name: &str) -> StoreResult<SiteDocument> {
        let key = Self::document_key(name)?;
        self.get_item::<SiteDocument>(key)?
            .ok_or_else(|| StoreError::Unavailable(format!("document '{}' missing from storage", key)))
    }

    /// Replaces the named document wholesale and persists it immediately.
    pub fn put(&self, name: &str, document: &SiteDocument) -> StoreResult<()> {
        let key = Self::document_key(name)?;
        self.store_item(key, document)
    }

    /// Sets `published` to an independent copy of the current draft.
    ///
    /// The stored draft bytes are copied under the published key with a
    /// single whole-value insert, so the switch is instantaneous for
    /// concurrent readers and the two documents never share structure.
    pub fn publish(&self) -> StoreResult<()> {
        let draft_bytes = self.documents_tree.get(DRAFT.as_bytes())?.ok_or_else(|| {
            StoreError::Unavailable(format!("document '{}' missing from storage", DRAFT))
        })?;
        self.documents_tree
            .insert(PUBLISHED.as_bytes(), draft_bytes)?;
        self.flush()
    }

    /// Seeds each of `draft` and `published` with the default document where
    /// it does not yet exist. Idempotent; never overwrites an existing
    /// document.
    pub fn initialize(&self) -> StoreResult<()> {
        let seed = SiteDocument::default();
        let mut seeded = false;
        for key in [DRAFT, PUBLISHED] {
            if self.documents_tree.get(key.as_bytes())?.is_none() {
                let bytes = serde_json::to_vec(&seed)?;
                self.documents_tree.insert(key.as_bytes(), bytes)?;
                seeded = true;
            }
        }
        if seeded {
            self.flush()?;
            info!("Seeded document store with the default site document");
        }
        Ok(())
    }

    fn document_key(name: &str) -> StoreResult<&'static str> {
        match name {
            DRAFT => Ok(DRAFT),
            PUBLISHED => Ok(PUBLISHED),
            other => Err(StoreError::UnknownDocument(other.to_string())),
        }
    }

    /// Serializes an item and writes it under `key`, flushing for
    /// durability.
    fn store_item<T: Serialize>(&self, key: &str, item: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec(item)?;
        self.documents_tree.insert(key.as_bytes(), bytes)?;
        self.flush()
    }

    /// Reads and deserializes the item under `key`, if present.
    fn get_item<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.documents_tree.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn flush(&self) -> StoreResult<()> {
        self.db.flush()?;
        Ok(())
    }
}
