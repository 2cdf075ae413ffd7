//! In-memory content store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use bytes::Bytes;

use super::{ContentStore, StoreError};

/// Content store backed by a map, counting reads.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    entries: Mutex<HashMap<String, Bytes>>,
    reads: AtomicUsize,
}

impl MemoryContentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` at `path`, replacing any previous content.
    pub fn insert(&self, path: impl Into<String>, data: impl Into<Bytes>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), data.into());
    }

    /// Removes the content at `path`.
    pub fn remove(&self, path: &str) -> Option<Bytes> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path)
    }

    /// Number of reads served so far.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn read(&self, path: &str) -> Result<Option<Bytes>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(path).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_inserted() {
        let store = MemoryContentStore::new();
        store.insert("/img/a.png", &b"png"[..]);
        assert_eq!(
            store.read("/img/a.png").await.unwrap(),
            Some(Bytes::from_static(b"png"))
        );
        assert_eq!(store.read("/img/missing.png").await.unwrap(), None);
        assert_eq!(store.read_count(), 2);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryContentStore::new();
        store.insert("/a", vec![1u8, 2, 3]);
        assert!(store.remove("/a").is_some());
        assert_eq!(store.read("/a").await.unwrap(), None);
    }
}
