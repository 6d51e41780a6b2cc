use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use fjnotes_core::{FjnotesError, FjnotesResult};
use std::path::{Path, PathBuf};

/// File-backed key-value store
/// Each key maps to `<dir>/<key>.json`, written atomically
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> FjnotesResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(FjnotesError::Storage {
                key: key.to_string(),
                message: "keys may only contain letters, digits, '-', '_' and '.'".to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FjnotesResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            tracing::debug!("No stored value for '{}' at {}", key, path.display());
            return Ok(None);
        }
        AtomicWriter::read_all(&path).map(Some)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> FjnotesResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        AtomicWriter::write_atomic(&path, value)?;

        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> FjnotesResult<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
