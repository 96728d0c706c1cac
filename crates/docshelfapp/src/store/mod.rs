//! # Storage Layer
//!
//! This module owns the authoritative in-memory collection sequence and its
//! persistence round-trip. The [`BlobStore`] trait abstracts the raw
//! key-addressed storage so the same store logic runs against the filesystem
//! in production and plain memory in tests.
//!
//! ## Persistence Contract
//!
//! The whole collection sequence lives under a single fixed key
//! ([`COLLECTIONS_KEY`]) as a versioned JSON envelope:
//!
//! ```text
//! { "version": 1, "collections": [ { "id": …, "name": …,
//!   "document_ids": […], "created": … }, … ] }
//! ```
//!
//! An absent key means an empty shelf (normal first run). A legacy bare array
//! of collection records—the pre-envelope format—is still accepted on load.
//! Anything else fails loudly at load time with a `Serialization`/`Store`
//! error; the host decides the fallback, the store never guesses.
//!
//! ## Write Discipline
//!
//! Every structural mutation (create, delete, membership edit) persists the
//! full sequence before returning. No-op paths (blank name, unknown id) write
//! nothing at all, which keeps "rejected" and "persisted" mutually exclusive.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBlobStore`]: production, atomic tmp+rename writes.
//! - [`mem_backend::MemBlobStore`]: for testing logic without filesystem I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ShelfError};
use crate::model::{Collection, MembershipChange};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::BlobStore;
pub use fs_backend::FsBlobStore;
pub use mem_backend::MemBlobStore;

/// Fixed storage key for the collection sequence.
pub const COLLECTIONS_KEY: &str = "collections";

const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    collections: &'a [Collection],
}

// Untagged so the legacy bare-array format still deserializes.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredShelf {
    Versioned {
        version: u32,
        collections: Vec<Collection>,
    },
    Legacy(Vec<Collection>),
}

/// Authoritative list of collections plus its load/save round-trip.
///
/// Generic over [`BlobStore`] so tests run against [`MemBlobStore`] and
/// production against [`FsBlobStore`].
pub struct CollectionStore<B: BlobStore> {
    backend: B,
    collections: Vec<Collection>,
}

impl<B: BlobStore> CollectionStore<B> {
    /// Loads the stored collection sequence, or starts empty if the key has
    /// never been written.
    pub fn load(backend: B) -> Result<Self> {
        let collections = match backend.read(COLLECTIONS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<StoredShelf>(&raw)? {
                StoredShelf::Versioned {
                    version,
                    collections,
                } => {
                    if version > SCHEMA_VERSION {
                        return Err(ShelfError::Store(format!(
                            "Unsupported collections schema version {} (expected <= {})",
                            version, SCHEMA_VERSION
                        )));
                    }
                    collections
                }
                StoredShelf::Legacy(collections) => collections,
            },
        };
        Ok(Self {
            backend,
            collections,
        })
    }

    /// Serializes the full sequence back to the blob store, replacing any
    /// prior value. The backend write is atomic, so a reader never observes a
    /// partial shelf.
    pub fn save(&self) -> Result<()> {
        let envelope = Envelope {
            version: SCHEMA_VERSION,
            collections: &self.collections,
        };
        let raw = serde_json::to_string_pretty(&envelope)?;
        self.backend.write(COLLECTIONS_KEY, &raw)
    }

    /// The stored sequence, in insertion order. Display ordering is derived
    /// elsewhere and never fed back into this sequence.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn find(&self, id: Uuid) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Access to the underlying blob backend, for hosts that keep their own
    /// state (e.g. a session blob) in the same store.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates a collection with the given name and persists.
    ///
    /// Returns the new collection's id, or `Ok(None)` without writing anything
    /// when the trimmed name is empty (validation rejection is a silent no-op).
    pub fn create(&mut self, name: &str) -> Result<Option<Uuid>> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let collection = Collection::new(name);
        let id = collection.id;
        self.collections.push(collection);
        self.save()?;
        Ok(Some(id))
    }

    /// Removes the collection with the given id and persists.
    ///
    /// Returns whether anything was removed. An unknown id is a no-op, not an
    /// error, so deletion is safe to retry.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let before = self.collections.len();
        self.collections.retain(|c| c.id != id);
        if self.collections.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Flips a document's membership in the given collection and persists.
    ///
    /// Returns `Ok(None)` without writing when the collection id is unknown.
    pub fn toggle_membership(
        &mut self,
        collection_id: Uuid,
        document_id: &str,
    ) -> Result<Option<MembershipChange>> {
        let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id)
        else {
            return Ok(None);
        };
        let change = collection.toggle_document(document_id);
        self.save()?;
        Ok(Some(change))
    }

    /// Makes `document_id`'s membership across ALL collections match the given
    /// id set: added where listed, removed everywhere else. Unknown ids in the
    /// set are ignored. Persists once, and only if anything changed.
    pub fn set_document_collections(
        &mut self,
        document_id: &str,
        collection_ids: &[Uuid],
    ) -> Result<()> {
        let mut changed = false;
        for collection in &mut self.collections {
            let wanted = collection_ids.contains(&collection.id);
            if wanted != collection.contains_document(document_id) {
                collection.toggle_document(document_id);
                changed = true;
            }
        }
        if changed {
            self.save()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::fixtures::ShelfFixture;
    use super::*;

    #[test]
    fn test_load_absent_key_is_empty() {
        let store = CollectionStore::load(MemBlobStore::new()).unwrap();
        assert!(store.collections().is_empty());
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut store = CollectionStore::load(MemBlobStore::new()).unwrap();

        assert_eq!(store.create("").unwrap(), None);
        assert_eq!(store.create("   \t ").unwrap(), None);
        assert!(store.collections().is_empty());
        // Rejection persists nothing
        assert_eq!(store.backend().read(COLLECTIONS_KEY).unwrap(), None);
    }

    #[test]
    fn test_create_trims_and_persists() {
        let mut store = CollectionStore::load(MemBlobStore::new()).unwrap();

        let id = store.create("  Tech  ").unwrap().unwrap();
        let c = store.find(id).unwrap();
        assert_eq!(c.name, "Tech");
        assert!(c.document_ids.is_empty());
        assert!(store.backend().read(COLLECTIONS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_store_order_is_insertion_order() {
        let fixture = ShelfFixture::new()
            .with_collection("B", &[])
            .with_collection("A", &[]);
        let names: Vec<&str> = fixture
            .store
            .collections()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut fixture = ShelfFixture::new().with_collection("Tech", &[]);
        let id = fixture.id_of("Tech");

        assert!(fixture.store.delete(id).unwrap());
        assert!(!fixture.store.delete(id).unwrap());
        assert!(fixture.store.collections().is_empty());
    }

    #[test]
    fn test_toggle_membership_unknown_collection() {
        let mut store = CollectionStore::load(MemBlobStore::new()).unwrap();
        let change = store.toggle_membership(Uuid::new_v4(), "doc1").unwrap();
        assert_eq!(change, None);
        // No-op writes nothing
        assert_eq!(store.backend().read(COLLECTIONS_KEY).unwrap(), None);
    }

    #[test]
    fn test_toggle_membership_roundtrip() {
        let mut fixture = ShelfFixture::new().with_collection("Tech", &[]);
        let id = fixture.id_of("Tech");

        let change = fixture.store.toggle_membership(id, "doc1").unwrap();
        assert_eq!(change, Some(MembershipChange::Added));
        assert_eq!(fixture.store.find(id).unwrap().document_ids, vec!["doc1"]);

        let change = fixture.store.toggle_membership(id, "doc1").unwrap();
        assert_eq!(change, Some(MembershipChange::Removed));
        assert!(fixture.store.find(id).unwrap().document_ids.is_empty());
    }

    #[test]
    fn test_set_document_collections() {
        let fixture = ShelfFixture::new()
            .with_collection("A", &["doc1"])
            .with_collection("B", &[])
            .with_collection("C", &["doc1"]);
        let mut store = fixture.store;

        let a = store.collections()[0].id;
        let b = store.collections()[1].id;

        // doc1 should end up in A and B only; C loses it.
        store.set_document_collections("doc1", &[a, b]).unwrap();

        assert!(store.collections()[0].contains_document("doc1"));
        assert!(store.collections()[1].contains_document("doc1"));
        assert!(!store.collections()[2].contains_document("doc1"));
    }

    #[test]
    fn test_set_document_collections_ignores_unknown_ids() {
        let fixture = ShelfFixture::new().with_collection("A", &[]);
        let mut store = fixture.store;
        let a = store.collections()[0].id;

        store
            .set_document_collections("doc1", &[a, Uuid::new_v4()])
            .unwrap();
        assert!(store.collections()[0].contains_document("doc1"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let fixture = ShelfFixture::new()
            .with_collection("Tech", &["doc1", "doc2"])
            .with_collection("News", &["doc2"]);
        let original: Vec<Collection> = fixture.store.collections().to_vec();

        // Reload from the same backend
        let backend = fixture.store.backend;
        let reloaded = CollectionStore::load(backend).unwrap();

        assert_eq!(reloaded.collections(), original.as_slice());
    }

    #[test]
    fn test_load_legacy_bare_array() {
        let backend = MemBlobStore::new();
        let legacy = serde_json::to_string(&vec![Collection::new("Old")]).unwrap();
        backend.seed(COLLECTIONS_KEY, &legacy);

        let store = CollectionStore::load(backend).unwrap();
        assert_eq!(store.collections().len(), 1);
        assert_eq!(store.collections()[0].name, "Old");
    }

    #[test]
    fn test_load_malformed_blob_is_error() {
        let backend = MemBlobStore::new();
        backend.seed(COLLECTIONS_KEY, "{not json");

        assert!(matches!(
            CollectionStore::load(backend),
            Err(ShelfError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_future_schema_version_is_error() {
        let backend = MemBlobStore::new();
        backend.seed(COLLECTIONS_KEY, r#"{"version": 99, "collections": []}"#);

        match CollectionStore::load(backend) {
            Err(ShelfError::Store(msg)) => assert!(msg.contains("version 99")),
            _ => panic!("Expected Store error"),
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let mut store = CollectionStore::load(MemBlobStore::new()).unwrap();
        store.backend().set_simulate_write_error(true);

        assert!(store.create("Tech").is_err());
    }
}
