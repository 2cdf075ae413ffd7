//! Upload intake state machine.

use tracing::debug;

use super::file::{AcceptPolicy, DroppedFile};
use super::validation::{FileRejection, validate_drop};

/// Receives every selection change of an [`UploadIntake`].
pub trait SelectionListener {
    /// Called once per selection change; `None` means the selection was cleared.
    fn on_file_selected(&mut self, file: Option<&DroppedFile>);
}

impl<F> SelectionListener for F
where
    F: FnMut(Option<&DroppedFile>),
{
    fn on_file_selected(&mut self, file: Option<&DroppedFile>) {
        self(file);
    }
}

/// Drag hover state of the drop surface. Presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Nothing hovering.
    #[default]
    Idle,
    /// Files are being dragged over the surface.
    Active,
}

/// Whether a click continues to the enclosing drop surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The click also reaches the drop surface.
    Continue,
    /// The click was consumed.
    Stop,
}

/// Element of the drop surface that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The surface itself.
    Surface,
    /// The clear control nested inside the surface.
    ClearControl,
}

/// Result of a drop attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    /// Whether the selection changed (and was reported).
    pub selection_changed: bool,
    /// Rejections recorded for this attempt.
    pub rejections: Vec<FileRejection>,
}

/// Single-file intake: current selection, last rejections, picker and drag state.
#[derive(Debug)]
pub struct UploadIntake<L> {
    policy: AcceptPolicy,
    selection: Option<DroppedFile>,
    rejections: Vec<FileRejection>,
    accepted_last: bool,
    drag: DragState,
    picker_open: bool,
    listener: L,
}

impl<L: SelectionListener> UploadIntake<L> {
    /// Creates an empty intake with the default PDF policy.
    pub fn new(listener: L) -> Self {
        Self::with_policy(AcceptPolicy::pdf(), listener)
    }

    /// Creates an empty intake with a custom policy.
    pub const fn with_policy(policy: AcceptPolicy, listener: L) -> Self {
        Self {
            policy,
            selection: None,
            rejections: Vec::new(),
            accepted_last: false,
            drag: DragState::Idle,
            picker_open: false,
            listener,
        }
    }

    /// The accept policy.
    pub const fn policy(&self) -> &AcceptPolicy {
        &self.policy
    }

    /// Current selection.
    pub const fn selection(&self) -> Option<&DroppedFile> {
        self.selection.as_ref()
    }

    /// Rejections of the last drop attempt.
    pub fn rejections(&self) -> &[FileRejection] {
        &self.rejections
    }

    /// The message shown to the user: first reason of the first rejection.
    ///
    /// Nothing is shown when the last attempt selected a file, even if extra
    /// candidates were turned away.
    pub fn rejection_message(&self) -> Option<String> {
        if self.accepted_last {
            return None;
        }
        self.rejections
            .first()
            .and_then(|r| r.reasons.first())
            .map(ToString::to_string)
    }

    /// Drag hover state.
    pub const fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether the picking surface is open.
    pub const fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// The selection consumer.
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    /// Files started hovering over the surface.
    pub const fn drag_enter(&mut self) {
        self.drag = DragState::Active;
    }

    /// Hovering files left the surface.
    pub const fn drag_leave(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Opens the picking surface.
    pub const fn open_picker(&mut self) {
        self.picker_open = true;
    }

    /// Closes the picking surface without a selection.
    pub const fn close_picker(&mut self) {
        self.picker_open = false;
    }

    /// Routes a click on the surface or its clear control.
    pub fn click(&mut self, target: ClickTarget) -> Propagation {
        match target {
            ClickTarget::ClearControl => self.clear(),
            ClickTarget::Surface => {
                self.open_picker();
                Propagation::Continue
            }
        }
    }

    /// Handles a drop or picker selection carrying candidate files.
    ///
    /// The first accepted candidate replaces the selection. When nothing is
    /// accepted the selection is kept and the rejections explain why.
    pub fn drop_files(&mut self, candidates: Vec<DroppedFile>) -> DropOutcome {
        self.drag = DragState::Idle;
        self.picker_open = false;

        let (accepted, rejections) = validate_drop(&self.policy, candidates);
        self.rejections = rejections;
        self.accepted_last = accepted.is_some();

        let selection_changed = match accepted {
            Some(file) if self.selection.as_ref() != Some(&file) => {
                debug!("Selected {} ({} bytes)", file.name, file.size);
                self.selection = Some(file);
                self.listener.on_file_selected(self.selection.as_ref());
                true
            }
            Some(_) => false,
            None => {
                if let Some(message) = self.rejection_message() {
                    debug!("Drop rejected: {}", message);
                }
                false
            }
        };

        DropOutcome {
            selection_changed,
            rejections: self.rejections.clone(),
        }
    }

    /// Clears the selection.
    ///
    /// Always consumes the click, so the picking surface stays closed.
    pub fn clear(&mut self) -> Propagation {
        self.rejections.clear();
        self.accepted_last = false;
        if self.selection.take().is_some() {
            debug!("Selection cleared");
            self.listener.on_file_selected(None);
        }
        Propagation::Stop
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::intake::{MAX_UPLOAD_BYTES, PDF_MIME, RejectionReason};
    use proptest::prelude::*;

    const MB: u64 = 1000 * 1000;

    type Reports = Vec<Option<String>>;

    #[derive(Default)]
    struct Recorder(Reports);

    impl SelectionListener for Recorder {
        fn on_file_selected(&mut self, file: Option<&DroppedFile>) {
            self.0.push(file.map(|f| f.name.clone()));
        }
    }

    fn pdf(name: &str, size: u64) -> DroppedFile {
        DroppedFile::new(name, size, PDF_MIME)
    }

    #[test]
    fn test_scenario_size_type_and_success() {
        let mut intake = UploadIntake::new(Recorder::default());

        let outcome = intake.drop_files(vec![pdf("big.pdf", 25 * MB)]);
        assert!(!outcome.selection_changed);
        assert!(intake.selection().is_none());
        assert_eq!(intake.rejections().len(), 1);
        assert_eq!(
            intake.rejections()[0].reasons,
            vec![RejectionReason::TooLarge {
                max_size: MAX_UPLOAD_BYTES
            }]
        );

        let outcome = intake.drop_files(vec![pdf("cv.pdf", MB)]);
        assert!(outcome.selection_changed);
        assert_eq!(intake.selection().unwrap().name, "cv.pdf");
        assert!(intake.rejections().is_empty());
        assert!(intake.rejection_message().is_none());

        intake.drop_files(vec![DroppedFile::new("cv.docx", MB, "application/msword")]);
        assert_eq!(intake.selection().unwrap().name, "cv.pdf");
        assert_eq!(intake.rejections().len(), 1);
        assert_eq!(intake.rejections()[0].reasons[0].code(), "file-invalid-type");
        assert_eq!(
            intake.rejection_message().as_deref(),
            Some("File type must be application/pdf (.pdf)")
        );

        assert_eq!(intake.listener().0, vec![Some("cv.pdf".to_string())]);
    }

    #[test]
    fn test_only_first_candidate_considered() {
        let mut intake = UploadIntake::new(Recorder::default());
        let outcome = intake.drop_files(vec![
            DroppedFile::new("photo.png", MB, "image/png"),
            pdf("cv.pdf", MB),
        ]);
        assert!(!outcome.selection_changed);
        assert!(intake.selection().is_none());
        assert_eq!(
            intake.rejection_message().as_deref(),
            Some("File type must be application/pdf (.pdf)")
        );

        let outcome = intake.drop_files(vec![pdf("first.pdf", MB), pdf("second.pdf", MB)]);
        assert!(outcome.selection_changed);
        assert_eq!(intake.selection().unwrap().name, "first.pdf");
        assert_eq!(outcome.rejections.len(), 1);
        assert_eq!(outcome.rejections[0].file.name, "second.pdf");
        assert!(intake.rejection_message().is_none());
        assert_eq!(intake.listener().0, vec![Some("first.pdf".to_string())]);
    }

    #[test]
    fn test_clear_discards_previous_rejections() {
        let mut intake = UploadIntake::new(Recorder::default());
        intake.drop_files(vec![pdf("cv.pdf", MB)]);
        intake.drop_files(vec![pdf("huge.pdf", MAX_UPLOAD_BYTES + 1)]);
        assert!(intake.rejection_message().is_some());

        intake.click(ClickTarget::ClearControl);
        assert!(intake.rejections().is_empty());
        assert!(intake.rejection_message().is_none());

        intake.drop_files(vec![DroppedFile::new("cv.docx", MB, "application/msword")]);
        intake.clear();
        assert!(intake.rejection_message().is_none());
    }

    #[test]
    fn test_clear_reports_none_and_keeps_picker_closed() {
        let mut intake = UploadIntake::new(Recorder::default());
        intake.drop_files(vec![pdf("cv.pdf", MB)]);

        let propagation = intake.click(ClickTarget::ClearControl);
        assert_eq!(propagation, Propagation::Stop);
        assert!(intake.selection().is_none());
        assert!(!intake.is_picker_open());
        assert_eq!(
            intake.listener().0,
            vec![Some("cv.pdf".to_string()), None]
        );
    }

    #[test]
    fn test_no_duplicate_reports() {
        let mut intake = UploadIntake::new(Recorder::default());
        intake.clear();
        intake.drop_files(vec![pdf("cv.pdf", MB)]);
        intake.drop_files(vec![pdf("cv.pdf", MB)]);
        intake.drop_files(vec![pdf("huge.pdf", MAX_UPLOAD_BYTES + 1)]);
        intake.drop_files(Vec::new());
        intake.clear();
        intake.clear();
        assert_eq!(
            intake.listener().0,
            vec![Some("cv.pdf".to_string()), None]
        );
    }

    #[test]
    fn test_surface_click_opens_picker_and_drop_closes_it() {
        let mut intake = UploadIntake::new(Recorder::default());
        assert_eq!(intake.click(ClickTarget::Surface), Propagation::Continue);
        assert!(intake.is_picker_open());
        intake.drag_enter();
        assert_eq!(intake.drag_state(), DragState::Active);
        intake.drop_files(vec![pdf("cv.pdf", 1)]);
        assert!(!intake.is_picker_open());
        assert_eq!(intake.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut intake = UploadIntake::new(|file: Option<&DroppedFile>| {
                seen.push(file.map(|f| f.size));
            });
            intake.drop_files(vec![pdf("cv.pdf", 42)]);
            intake.clear();
        }
        assert_eq!(seen, vec![Some(42), None]);
    }

    proptest! {
        #[test]
        fn prop_wrong_type_keeps_selection(
            mime in "[a-z]{1,10}/[a-z]{1,10}",
            size in 0u64..=MAX_UPLOAD_BYTES,
        ) {
            prop_assume!(mime != PDF_MIME);
            let mut intake = UploadIntake::new(Recorder::default());
            intake.drop_files(vec![pdf("kept.pdf", 1)]);
            intake.drop_files(vec![DroppedFile::new("x", size, mime)]);
            prop_assert_eq!(intake.selection().map(|f| f.name.as_str()), Some("kept.pdf"));
            prop_assert_eq!(intake.rejections().len(), 1);
            prop_assert!(intake.rejection_message().is_some());
        }

        #[test]
        fn prop_size_limit_inclusive(size in 0u64..=(2 * MAX_UPLOAD_BYTES)) {
            let mut intake = UploadIntake::new(Recorder::default());
            let outcome = intake.drop_files(vec![pdf("cv.pdf", size)]);
            prop_assert_eq!(outcome.selection_changed, size <= MAX_UPLOAD_BYTES);
        }

        #[test]
        fn prop_first_candidate_decides(
            first_ok in any::<bool>(),
            extra in 0usize..5,
        ) {
            let first = if first_ok {
                pdf("first.pdf", 1)
            } else {
                pdf("first.pdf", MAX_UPLOAD_BYTES + 1)
            };
            let mut candidates = vec![first];
            candidates.extend((0..extra).map(|i| pdf(&format!("extra{i}.pdf"), 1)));

            let mut intake = UploadIntake::new(Recorder::default());
            intake.drop_files(candidates);
            prop_assert_eq!(intake.selection().is_some(), first_ok);
            if let Some(file) = intake.selection() {
                prop_assert_eq!(file.name.as_str(), "first.pdf");
            }
            prop_assert_eq!(intake.rejections().len(), extra + usize::from(!first_ok));
        }
    }
}
