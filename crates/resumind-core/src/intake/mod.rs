//! Single-file upload intake.
//!
//! Accepts dropped or picked files, validates the first candidate against an
//! [`AcceptPolicy`], and reports every selection change to a
//! [`SelectionListener`].

mod file;
mod state;
mod validation;

pub use file::{AcceptPolicy, DroppedFile, MAX_UPLOAD_BYTES, PDF_MIME, format_size, mime_for_name};
pub use state::{ClickTarget, DragState, DropOutcome, Propagation, SelectionListener, UploadIntake};
pub use validation::{FileRejection, RejectionReason, validate_drop};
