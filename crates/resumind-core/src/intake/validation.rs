//! Drop validation.

use super::file::{AcceptPolicy, DroppedFile, format_size};

/// Why a candidate was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// MIME type differs from the accepted one.
    InvalidType {
        /// The accepted MIME type.
        accepted: &'static str,
        /// The accepted extension.
        extension: &'static str,
    },
    /// File exceeds the size limit.
    TooLarge {
        /// The limit in bytes.
        max_size: u64,
    },
    /// More than one file was offered to a single-file intake.
    TooManyFiles,
}

impl RejectionReason {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidType { .. } => "file-invalid-type",
            Self::TooLarge { .. } => "file-too-large",
            Self::TooManyFiles => "too-many-files",
        }
    }

    /// Get human-readable error message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidType {
                accepted,
                extension,
            } => format!("File type must be {accepted} ({extension})"),
            Self::TooLarge { max_size } => {
                format!("File is larger than {}", format_size(*max_size))
            }
            Self::TooManyFiles => "Too many files".to_string(),
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RejectionReason {}

/// A rejected candidate and every reason it failed, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRejection {
    /// The rejected candidate.
    pub file: DroppedFile,
    /// Reasons, never empty.
    pub reasons: Vec<RejectionReason>,
}

/// Validates one drop attempt.
///
/// Only the first candidate can be accepted. Every further candidate is
/// rejected as [`RejectionReason::TooManyFiles`], listed after the first
/// candidate's own rejection.
#[must_use]
pub fn validate_drop(
    policy: &AcceptPolicy,
    candidates: Vec<DroppedFile>,
) -> (Option<DroppedFile>, Vec<FileRejection>) {
    let mut candidates = candidates.into_iter();
    let Some(first) = candidates.next() else {
        return (None, Vec::new());
    };

    let mut rejections = Vec::new();
    let reasons = check(policy, &first);
    let accepted = if reasons.is_empty() {
        Some(first)
    } else {
        rejections.push(FileRejection {
            file: first,
            reasons,
        });
        None
    };

    rejections.extend(candidates.map(|file| FileRejection {
        file,
        reasons: vec![RejectionReason::TooManyFiles],
    }));

    (accepted, rejections)
}

fn check(policy: &AcceptPolicy, file: &DroppedFile) -> Vec<RejectionReason> {
    let mut reasons = Vec::new();

    if file.mime_type != policy.mime_type {
        reasons.push(RejectionReason::InvalidType {
            accepted: policy.mime_type,
            extension: policy.extension,
        });
    }
    if file.size > policy.max_size {
        reasons.push(RejectionReason::TooLarge {
            max_size: policy.max_size,
        });
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{MAX_UPLOAD_BYTES, PDF_MIME};

    fn pdf(name: &str, size: u64) -> DroppedFile {
        DroppedFile::new(name, size, PDF_MIME)
    }

    #[test]
    fn test_accepts_pdf_under_limit() {
        let (accepted, rejections) = validate_drop(&AcceptPolicy::pdf(), vec![pdf("a.pdf", 10)]);
        assert_eq!(accepted, Some(pdf("a.pdf", 10)));
        assert!(rejections.is_empty());
    }

    #[test]
    fn test_reasons_in_check_order() {
        let file = DroppedFile::new("huge.png", MAX_UPLOAD_BYTES + 1, "image/png");
        let (accepted, rejections) = validate_drop(&AcceptPolicy::pdf(), vec![file]);
        assert!(accepted.is_none());
        assert_eq!(rejections.len(), 1);
        let codes: Vec<&str> = rejections[0].reasons.iter().map(RejectionReason::code).collect();
        assert_eq!(codes, ["file-invalid-type", "file-too-large"]);
    }

    #[test]
    fn test_extra_candidates_rejected_after_first() {
        let (accepted, rejections) = validate_drop(
            &AcceptPolicy::pdf(),
            vec![
                DroppedFile::new("a.txt", 1, "text/plain"),
                pdf("b.pdf", 1),
                pdf("c.pdf", 1),
            ],
        );
        assert!(accepted.is_none());
        assert_eq!(rejections.len(), 3);
        assert_eq!(rejections[0].file.name, "a.txt");
        assert_eq!(rejections[1].reasons, vec![RejectionReason::TooManyFiles]);
        assert_eq!(rejections[2].file.name, "c.pdf");
    }

    #[test]
    fn test_empty_drop() {
        let (accepted, rejections) = validate_drop(&AcceptPolicy::pdf(), Vec::new());
        assert!(accepted.is_none());
        assert!(rejections.is_empty());
    }

    #[test]
    fn test_messages() {
        let policy = AcceptPolicy::pdf();
        let (_, rejections) = validate_drop(
            &policy,
            vec![DroppedFile::new("big.pdf", MAX_UPLOAD_BYTES * 2, PDF_MIME)],
        );
        assert_eq!(rejections[0].reasons[0].message(), "File is larger than 20 MB");
        assert_eq!(
            RejectionReason::InvalidType {
                accepted: policy.mime_type,
                extension: policy.extension
            }
            .to_string(),
            "File type must be application/pdf (.pdf)"
        );
    }
}
