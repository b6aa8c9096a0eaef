use alloc::string::{String, ToString};
use hashbrown::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not write {key:?} to storage: {reason}")]
pub struct StorageError {
    pub key: String,
    pub reason: String,
}

/// Persistent string storage keyed by name, such as browser local storage or shared preferences.
pub trait BlobStore {
    fn load_blob(&self, key: &str) -> Option<String>;
    fn save_blob(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: BlobStore + ?Sized> BlobStore for &mut S {
    fn load_blob(&self, key: &str) -> Option<String> {
        (**self).load_blob(key)
    }

    fn save_blob(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save_blob(key, value)
    }
}

/// In-memory [`BlobStore`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(mut self, key: &str, value: &str) -> Self {
        self.blobs.insert(key.to_string(), value.to_string());
        self
    }
}

impl BlobStore for MemoryStore {
    fn load_blob(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn save_blob(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
