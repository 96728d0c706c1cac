use super::backend::BlobStore;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem blob store: each key is a `<key>.json` file under the root
/// directory. Writes go through a tmp file and rename so a crash mid-write
/// never leaves a torn blob behind.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl BlobStore for FsBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;

        let target = self.blob_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(ShelfError::Io)?;
        fs::rename(&tmp, target).map_err(ShelfError::Io)?;

        Ok(())
    }
}
