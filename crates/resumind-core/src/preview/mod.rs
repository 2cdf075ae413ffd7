//! Remote content to local preview resolution.
//!
//! Each resume card is a *view* with one preview slot. Requesting a path
//! starts a resolution that is settled later with the content store result.
//! Slots own at most one live local resource, created through a
//! [`PreviewFactory`] and released through it when superseded, torn down, or
//! when the resolver is dropped.

mod resolver;

use bytes::Bytes;

pub use resolver::{PreviewResolver, PreviewState, ResolveTicket, SettleOutcome, fetch_preview};

/// Errors raised while turning fetched bytes into a local resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    /// The bytes are not a renderable image.
    #[error("Unsupported preview data: {0}")]
    Unsupported(String),
}

/// Creates and releases local preview resources.
pub trait PreviewFactory {
    /// The revocable local handle.
    type Resource;

    /// Creates a resource bound to `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot back a preview.
    fn create(&mut self, bytes: Bytes) -> Result<Self::Resource, PreviewError>;

    /// Releases a resource. Called exactly once per created resource.
    fn release(&mut self, resource: Self::Resource);
}
