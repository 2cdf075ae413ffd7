//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use std::path::PathBuf;

use bytes::Bytes;
use resumind_core::preview::ResolveTicket;
use resumind_core::session::CancelReason;
use resumind_core::{DroppedFile, ResumeSummary, Route};

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Navigate to a route.
    Navigate(Route),

    // Settings
    /// Settings loaded at startup.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings written.
    SettingsSaved(Result<(), String>),
    /// Switch between light and dark mode.
    ToggleTheme,

    // Session
    /// Initial session check finished.
    SessionChecked(bool),
    /// Sign-in button pressed.
    SignIn,
    /// Sign-in finished.
    SignedIn(Result<(), String>),
    /// Log-out trigger pressed.
    RequestLogout,
    /// Confirmation dismissed.
    CancelLogout(CancelReason),
    /// Confirmation accepted.
    ConfirmLogout,
    /// Sign-out finished, successfully or not.
    SignOutSettled(Result<(), String>),
    /// Sign Out pressed on the auth page.
    AuthPageSignOut,
    /// Sign-out started from the auth page finished.
    AuthPageSignedOut(Result<(), String>),
    /// Escape pressed.
    EscapePressed,

    // Resumes
    /// Resume catalog loaded.
    CatalogLoaded(Result<Vec<ResumeSummary>, String>),
    /// Preview bytes fetched for a card.
    PreviewFetched(ResolveTicket, Result<Option<Bytes>, String>),
    /// Retry a missing or failed preview.
    RetryPreview(resumind_core::ResumeId),

    // Upload intake
    /// A file entered the window.
    FileHovered,
    /// Hovering files left the window.
    FilesHoveredLeft,
    /// One file of a drop arrived.
    FileDropped(PathBuf),
    /// Timer expired for an incomplete drop batch.
    FlushDrop,
    /// Candidates built from dropped or picked paths.
    CandidatesReady(Vec<DroppedFile>),
    /// Click on the drop surface.
    SurfaceClicked,
    /// Click on the clear control of the staged file.
    ClearClicked,
    /// Picker path edited.
    PickerPathChanged(String),
    /// Picker path submitted.
    PickerSubmit,
    /// Picker closed without a selection.
    PickerCancel,

    /// Event with no effect.
    Ignored,
}
