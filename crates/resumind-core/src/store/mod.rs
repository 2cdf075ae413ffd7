//! Content store port and reference adapters.
//!
//! The content store holds previously uploaded documents and their rendered
//! previews, addressed by opaque paths.

mod directory;
mod memory;

use async_trait::async_trait;
use bytes::Bytes;

pub use directory::DirectoryContentStore;
pub use memory::MemoryContentStore;

/// Errors that can occur while reading from a content store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The path cannot be resolved inside the store.
    #[error("Invalid content path: {0}")]
    InvalidPath(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read access to remote content.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Reads the bytes stored at `path`.
    ///
    /// Returns `Ok(None)` when nothing (or nothing usable) is stored there.
    async fn read(&self, path: &str) -> Result<Option<Bytes>, StoreError>;
}
