//! Domain models shared by the intake, preview and session components.

mod resume;

pub use resume::{Feedback, ResumeId, ResumeSummary, load_catalog, parse_catalog};
