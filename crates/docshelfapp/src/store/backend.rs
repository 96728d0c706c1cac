use crate::error::Result;

/// Abstract interface for key-addressed blob storage.
///
/// This trait handles the "how" of persistence (filesystem vs memory), while
/// [`super::CollectionStore`] handles the "what" (the collection sequence and
/// its serialization contract).
pub trait BlobStore {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) if the key has never been written—an absent key is a
    /// normal first-run condition, not an error.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value.
    /// MUST be atomic from the caller's perspective (e.g. write to tmp then
    /// rename) so a partial write is never observable.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
