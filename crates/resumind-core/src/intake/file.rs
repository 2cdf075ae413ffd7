//! File candidates and the accept policy.

use std::path::{Path, PathBuf};

/// MIME type of accepted documents.
pub const PDF_MIME: &str = "application/pdf";

/// Largest accepted upload, inclusive (20 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// A file offered to the intake by a drop or a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    /// File name including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, empty when unknown.
    pub mime_type: String,
    /// Local path, when the file came from the filesystem.
    pub path: Option<PathBuf>,
}

impl DroppedFile {
    /// Creates a candidate from its metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            path: None,
        }
    }

    /// Builds a candidate from a local path, inferring the MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = if metadata.is_dir() {
            "inode/directory"
        } else {
            mime_for_name(&name)
        };

        Ok(Self {
            mime_type: mime_type.to_string(),
            size: metadata.len(),
            path: Some(path.to_path_buf()),
            name,
        })
    }

    /// Human-readable size, e.g. `1.5 MB`.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}

/// Infers a MIME type from a file name's extension.
#[must_use]
pub fn mime_for_name(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => PDF_MIME,
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Rules a candidate must satisfy to become the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptPolicy {
    /// The single accepted MIME type.
    pub mime_type: &'static str,
    /// Extension shown next to the MIME type in messages.
    pub extension: &'static str,
    /// Maximum size in bytes, inclusive.
    pub max_size: u64,
}

impl AcceptPolicy {
    /// PDF documents up to 20 MiB.
    #[must_use]
    pub const fn pdf() -> Self {
        Self {
            mime_type: PDF_MIME,
            extension: ".pdf",
            max_size: MAX_UPLOAD_BYTES,
        }
    }

    /// Hint shown on an empty drop surface.
    #[must_use]
    pub fn hint(&self) -> String {
        format!("PDF files only \u{2022} Max {}", format_size(self.max_size))
    }
}

impl Default for AcceptPolicy {
    fn default() -> Self {
        Self::pdf()
    }
}

/// Formats a byte count using base-1024 units and at most two decimals.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Display only
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(MAX_UPLOAD_BYTES), "20 MB");
        assert_eq!(format_size(25 * 1000 * 1000), "23.84 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_mime_for_name() {
        assert_eq!(mime_for_name("cv.pdf"), PDF_MIME);
        assert_eq!(mime_for_name("CV.PDF"), PDF_MIME);
        assert_eq!(mime_for_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_name("notes"), "application/octet-stream");
    }

    #[test]
    fn test_policy_hint() {
        assert_eq!(AcceptPolicy::pdf().hint(), "PDF files only \u{2022} Max 20 MB");
    }

    #[tokio::test]
    async fn from_path_reads_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        tokio::fs::write(&path, vec![0u8; 2048]).await.unwrap();

        let file = DroppedFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.size, 2048);
        assert_eq!(file.mime_type, PDF_MIME);
        assert_eq!(file.path.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn from_path_directory_is_not_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let file = DroppedFile::from_path(dir.path()).await.unwrap();
        assert_eq!(file.mime_type, "inode/directory");
    }

    #[tokio::test]
    async fn from_path_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DroppedFile::from_path(dir.path().join("nope.pdf")).await.is_err());
    }
}
