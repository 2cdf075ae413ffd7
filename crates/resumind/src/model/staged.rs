//! Consumer of the upload intake's selection.

use resumind_core::{DroppedFile, SelectionListener};
use tracing::info;

/// File staged for submission on the upload page.
#[derive(Debug, Default)]
pub struct StagedUpload {
    file: Option<DroppedFile>,
    changes: usize,
}

impl StagedUpload {
    /// The staged file.
    pub const fn file(&self) -> Option<&DroppedFile> {
        self.file.as_ref()
    }

    /// Number of selection reports received.
    pub const fn changes(&self) -> usize {
        self.changes
    }
}

impl SelectionListener for StagedUpload {
    fn on_file_selected(&mut self, file: Option<&DroppedFile>) {
        self.changes += 1;
        match file {
            Some(f) => info!("Staged {} ({})", f.name, f.display_size()),
            None => info!("Staged file removed"),
        }
        self.file = file.cloned();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use resumind_core::UploadIntake;

    use super::*;

    #[test]
    fn test_follows_intake_selection() {
        let mut intake = UploadIntake::new(StagedUpload::default());
        intake.drop_files(vec![DroppedFile::new("cv.pdf", 2048, "application/pdf")]);
        assert_eq!(intake.listener().file().unwrap().name, "cv.pdf");

        intake.clear();
        assert!(intake.listener().file().is_none());
        assert_eq!(intake.listener().changes(), 2);
    }
}
