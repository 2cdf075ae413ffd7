//! Groups per-file window drop events into one drop attempt.
//!
//! The window reports a hover event for every file entering it, then one
//! drop event per file. A batch completes once as many files were dropped as
//! were hovered; when hover events are missing the shell flushes the batch
//! on a short timer instead.

use std::path::PathBuf;

/// Progress of the current batch after a drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropProgress {
    /// First file of a batch whose size is unknown; schedule a flush.
    Started,
    /// More files are expected.
    Pending,
    /// All hovered files arrived.
    Complete(Vec<PathBuf>),
}

/// Drop events collected so far.
#[derive(Debug, Default)]
pub struct DropBatch {
    hovered: usize,
    dropped: Vec<PathBuf>,
}

impl DropBatch {
    /// Records a file hovering over the window.
    pub const fn hover(&mut self) {
        self.hovered += 1;
    }

    /// Whether files are hovering over the window.
    pub const fn is_hovering(&self) -> bool {
        self.hovered > 0
    }

    /// Files left the window without being dropped.
    pub fn leave(&mut self) {
        self.hovered = 0;
        self.dropped.clear();
    }

    /// Records a dropped file.
    pub fn drop_path(&mut self, path: PathBuf) -> DropProgress {
        self.dropped.push(path);

        if self.hovered > 0 && self.dropped.len() >= self.hovered {
            self.hovered = 0;
            DropProgress::Complete(std::mem::take(&mut self.dropped))
        } else if self.dropped.len() == 1 {
            DropProgress::Started
        } else {
            DropProgress::Pending
        }
    }

    /// Completes the batch with whatever arrived.
    pub fn flush(&mut self) -> Option<Vec<PathBuf>> {
        self.hovered = 0;
        if self.dropped.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.dropped))
        }
    }
}
