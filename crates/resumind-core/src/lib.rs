//! # resumind-core
//!
//! Client-side core of the `Resumind` resume feedback application.
//!
//! This crate provides:
//! - Single-file PDF upload intake with validation
//! - Preview resolution from a remote content store, with one owned
//!   resource per view
//! - The session gate guarding sign-out behind a confirmation
//! - A layer stack owning scroll lock and key capture for modal surfaces
//! - Application routes and the sign-in page model
//! - Ports for the content store and authentication service, with
//!   in-memory and directory-backed adapters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod intake;
pub mod layer;
pub mod model;
pub mod preview;
pub mod route;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use intake::{
    AcceptPolicy, DroppedFile, FileRejection, RejectionReason, SelectionListener, UploadIntake,
};
pub use layer::{LayerStack, LayerToken};
pub use model::{Feedback, ResumeId, ResumeSummary};
pub use preview::{PreviewFactory, PreviewResolver, PreviewState};
pub use route::Route;
pub use session::{AuthService, ConfirmationState, SessionGate};
pub use store::{ContentStore, StoreError};
