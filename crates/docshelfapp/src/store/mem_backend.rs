use super::backend::BlobStore;
use crate::error::{Result, ShelfError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory blob store for testing.
///
/// Uses `RefCell` for interior mutability since docshelf is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the `BlobStore`
/// trait to use `&self` for all methods.
pub struct MemBlobStore {
    blobs: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBlobStore {
    fn default() -> Self {
        Self {
            blobs: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to seed a raw blob, bypassing the store's serializer.
    pub fn seed(&self, key: &str, value: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl BlobStore for MemBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let blobs = self.blobs.borrow();
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        let mut blobs = self.blobs.borrow_mut();
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::CollectionStore;
    use uuid::Uuid;

    /// Builder for a populated in-memory collection store.
    pub struct ShelfFixture {
        pub store: CollectionStore<MemBlobStore>,
    }

    impl Default for ShelfFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ShelfFixture {
        pub fn new() -> Self {
            Self {
                store: CollectionStore::load(MemBlobStore::new()).unwrap(),
            }
        }

        /// Adds a collection with the given name and member documents.
        pub fn with_collection(mut self, name: &str, docs: &[&str]) -> Self {
            let id = self.store.create(name).unwrap().unwrap();
            for doc in docs {
                self.store.toggle_membership(id, doc).unwrap();
            }
            self
        }

        /// Id of the collection with the given name. Panics if absent.
        pub fn id_of(&self, name: &str) -> Uuid {
            self.store
                .collections()
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.id)
                .unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_key() {
        let backend = MemBlobStore::new();
        assert_eq!(backend.read("collections").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let backend = MemBlobStore::new();
        backend.write("collections", "[]").unwrap();
        assert_eq!(backend.read("collections").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_write_replaces_prior_value() {
        let backend = MemBlobStore::new();
        backend.write("k", "first").unwrap();
        backend.write("k", "second").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_simulated_write_error() {
        let backend = MemBlobStore::new();
        backend.set_simulate_write_error(true);
        match backend.write("k", "v") {
            Err(ShelfError::Store(msg)) => assert!(msg.contains("Simulated")),
            _ => panic!("Expected Store error"),
        }
    }
}
