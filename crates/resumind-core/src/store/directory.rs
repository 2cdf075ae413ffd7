//! Content store rooted in a local directory.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;

use super::{ContentStore, StoreError};

/// Reads content from files below a root directory.
///
/// Store paths are interpreted relative to the root; a leading `/` is
/// ignored and parent components are rejected.
#[derive(Debug, Clone)]
pub struct DirectoryContentStore {
    root: PathBuf,
}

impl DirectoryContentStore {
    /// Creates a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a store path to a file below the root.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPath`] for empty paths or paths escaping the root.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        let mut has_file = false;

        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    resolved.push(part);
                    has_file = true;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(StoreError::InvalidPath(path.to_string()));
                }
            }
        }

        if has_file {
            Ok(resolved)
        } else {
            Err(StoreError::InvalidPath(path.to_string()))
        }
    }
}

#[async_trait]
impl ContentStore for DirectoryContentStore {
    async fn read(&self, path: &str) -> Result<Option<Bytes>, StoreError> {
        let file = self.resolve(path)?;
        match tokio::fs::read(&file).await {
            Ok(data) if data.is_empty() => {
                tracing::debug!("Empty content at {:?}", file);
                Ok(None)
            }
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::create_dir_all(dir.path().join("images"))
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("images/r1.png"), b"png-bytes")
            .await
            .unwrap();

        let store = DirectoryContentStore::new(dir.path());
        let data = store.read("/images/r1.png").await.unwrap();
        assert_eq!(data, Some(Bytes::from_static(b"png-bytes")));
    }

    #[tokio::test]
    async fn test_missing_and_empty_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("empty.png"), b"").await.unwrap();

        let store = DirectoryContentStore::new(dir.path());
        assert_eq!(store.read("missing.png").await.unwrap(), None);
        assert_eq!(store.read("empty.png").await.unwrap(), None);
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let store = DirectoryContentStore::new("/srv/content");
        assert!(matches!(
            store.resolve("../etc/passwd"),
            Err(StoreError::InvalidPath(_))
        ));
        assert!(matches!(store.resolve("/"), Err(StoreError::InvalidPath(_))));
        assert_eq!(
            store.resolve("/a/./b.png").unwrap(),
            PathBuf::from("/srv/content/a/b.png")
        );
    }
}
