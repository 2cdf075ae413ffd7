//! Preview resolver with per-view generations.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use super::PreviewFactory;
use crate::model::ResumeId;
use crate::store::{ContentStore, StoreError};

/// Rendering state of one view's preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState<R> {
    /// Waiting for the content store.
    Loading,
    /// Resource ready to render.
    Ready(R),
    /// The store has nothing at the requested path.
    Missing,
    /// Resolution failed.
    Failed(String),
}

impl<R> PreviewState<R> {
    /// The renderable resource, if ready.
    pub const fn resource(&self) -> Option<&R> {
        match self {
            Self::Ready(resource) => Some(resource),
            _ => None,
        }
    }

    /// Whether resolution is still pending.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// One pending resolution. Settling a ticket that is no longer the latest
/// for its view has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTicket {
    view: ResumeId,
    path: String,
    generation: u64,
}

impl ResolveTicket {
    /// The view being resolved.
    #[must_use]
    pub const fn view(&self) -> &ResumeId {
        &self.view
    }

    /// The requested content path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// What happened when a ticket was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The result was applied to the view.
    Committed,
    /// A newer request superseded the ticket; the result was discarded.
    Stale,
    /// The view was torn down before the result arrived.
    ViewGone,
}

#[derive(Debug)]
struct Slot<R> {
    path: String,
    generation: u64,
    state: PreviewState<R>,
}

/// Resolves preview resources for many views.
#[derive(Debug)]
pub struct PreviewResolver<F: PreviewFactory> {
    factory: F,
    slots: HashMap<ResumeId, Slot<F::Resource>>,
    next_generation: u64,
}

impl<F: PreviewFactory> PreviewResolver<F> {
    /// Creates a resolver with no views.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            slots: HashMap::new(),
            next_generation: 0,
        }
    }

    /// The resource factory.
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Requests the preview at `path` for `view`.
    ///
    /// Returns `None` when the view already shows or is loading the same
    /// path. Otherwise the previous resource is released, the view shows the
    /// loading placeholder, and the returned ticket must be fetched and
    /// settled.
    pub fn request(&mut self, view: &ResumeId, path: &str) -> Option<ResolveTicket> {
        if let Some(slot) = self.slots.get(view)
            && slot.path == path
        {
            return None;
        }
        Some(self.begin(view, path))
    }

    /// Requests the current path of a view again after it went missing or failed.
    pub fn retry(&mut self, view: &ResumeId) -> Option<ResolveTicket> {
        let slot = self.slots.get(view)?;
        if matches!(slot.state, PreviewState::Missing | PreviewState::Failed(_)) {
            let path = slot.path.clone();
            Some(self.begin(view, &path))
        } else {
            None
        }
    }

    fn begin(&mut self, view: &ResumeId, path: &str) -> ResolveTicket {
        let generation = self.next_generation;
        self.next_generation += 1;

        let previous = self.slots.insert(
            view.clone(),
            Slot {
                path: path.to_string(),
                generation,
                state: PreviewState::Loading,
            },
        );
        if let Some(slot) = previous {
            self.release_state(slot.state);
        }
        debug!("Resolving preview {} for {} (gen {})", path, view, generation);

        ResolveTicket {
            view: view.clone(),
            path: path.to_string(),
            generation,
        }
    }

    /// Applies a content store result.
    ///
    /// Only the latest ticket of a view may commit. Absent content becomes
    /// [`PreviewState::Missing`], errors become [`PreviewState::Failed`].
    pub fn settle<E: Display>(
        &mut self,
        ticket: &ResolveTicket,
        result: Result<Option<Bytes>, E>,
    ) -> SettleOutcome {
        let Some(slot) = self.slots.get(&ticket.view) else {
            debug!("Preview for {} settled after teardown", ticket.view);
            return SettleOutcome::ViewGone;
        };
        if slot.generation != ticket.generation {
            debug!(
                "Discarding stale preview {} for {} (gen {}, latest {})",
                ticket.path, ticket.view, ticket.generation, slot.generation
            );
            return SettleOutcome::Stale;
        }

        let state = match result {
            Ok(Some(bytes)) => match self.factory.create(bytes) {
                Ok(resource) => PreviewState::Ready(resource),
                Err(e) => {
                    warn!("Preview {} unusable: {}", ticket.path, e);
                    PreviewState::Failed(e.to_string())
                }
            },
            Ok(None) => {
                warn!("No content at {}", ticket.path);
                PreviewState::Missing
            }
            Err(e) => {
                warn!("Failed to fetch {}: {}", ticket.path, e);
                PreviewState::Failed(e.to_string())
            }
        };

        if let Some(slot) = self.slots.get_mut(&ticket.view) {
            let previous = std::mem::replace(&mut slot.state, state);
            self.release_state(previous);
        }
        SettleOutcome::Committed
    }

    /// Current state of a view.
    pub fn state(&self, view: &ResumeId) -> Option<&PreviewState<F::Resource>> {
        self.slots.get(view).map(|slot| &slot.state)
    }

    /// Tears down a view, releasing its resource. Returns `false` for unknown views.
    pub fn teardown(&mut self, view: &ResumeId) -> bool {
        match self.slots.remove(view) {
            Some(slot) => {
                self.release_state(slot.state);
                true
            }
            None => false,
        }
    }

    /// Tears down every view for which `keep` returns `false`.
    pub fn retain(&mut self, mut keep: impl FnMut(&ResumeId) -> bool) {
        let gone: Vec<ResumeId> = self.slots.keys().filter(|id| !keep(id)).cloned().collect();
        for view in gone {
            self.teardown(&view);
        }
    }

    /// Number of live resources across all views.
    pub fn live_resources(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot.state, PreviewState::Ready(_)))
            .count()
    }

    fn release_state(&mut self, state: PreviewState<F::Resource>) {
        if let PreviewState::Ready(resource) = state {
            self.factory.release(resource);
        }
    }
}

impl<F: PreviewFactory> Drop for PreviewResolver<F> {
    fn drop(&mut self) {
        let slots: Vec<_> = self.slots.drain().map(|(_, slot)| slot.state).collect();
        for state in slots {
            self.release_state(state);
        }
    }
}

/// Fetches the bytes for a ticket from the content store.
pub async fn fetch_preview(
    store: Arc<dyn ContentStore>,
    ticket: ResolveTicket,
) -> (ResolveTicket, Result<Option<Bytes>, StoreError>) {
    let result = store.read(&ticket.path).await;
    (ticket, result)
}
