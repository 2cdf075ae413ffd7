//! Top-layer stack for exclusive UI surfaces.
//!
//! Modal surfaces push a layer when they open and hold the returned
//! [`LayerToken`] while visible. While any layer is held the page scroll is
//! locked, and keyboard input is routed to the topmost layer only. Tokens
//! release their layer exactly once: explicitly via [`LayerToken::release`] or
//! implicitly on drop, so teardown on any path restores the page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Identity of a pushed layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

#[derive(Debug)]
struct Entry {
    id: LayerId,
    owner: &'static str,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    layers: Vec<Entry>,
}

/// Document-wide effects implied by the current stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentEffects {
    /// Page scrolling is disabled.
    pub scroll_locked: bool,
    /// Layer receiving keyboard input, if any.
    pub key_target: Option<LayerId>,
}

/// Shared stack of top-level layers. Cloning shares the same stack.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    inner: Arc<Mutex<Inner>>,
}

impl LayerStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pushes a new layer on top and returns its capability token.
    #[must_use = "dropping the token releases the layer immediately"]
    pub fn push(&self, owner: &'static str) -> LayerToken {
        let mut inner = self.lock();
        let id = LayerId(inner.next_id);
        inner.next_id += 1;
        inner.layers.push(Entry { id, owner });
        debug!(
            "Layer {:?} pushed by {} (depth {})",
            id,
            owner,
            inner.layers.len()
        );

        LayerToken {
            id,
            stack: Some(Arc::clone(&self.inner)),
        }
    }

    /// Number of held layers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.lock().layers.len()
    }

    /// Whether page scrolling is locked.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        !self.lock().layers.is_empty()
    }

    /// Layer that should receive keyboard input.
    #[must_use]
    pub fn key_target(&self) -> Option<LayerId> {
        self.lock().layers.last().map(|e| e.id)
    }

    /// Owner label of the topmost layer.
    #[must_use]
    pub fn top_owner(&self) -> Option<&'static str> {
        self.lock().layers.last().map(|e| e.owner)
    }

    /// Snapshot of the document-wide effects.
    #[must_use]
    pub fn effects(&self) -> DocumentEffects {
        let inner = self.lock();
        DocumentEffects {
            scroll_locked: !inner.layers.is_empty(),
            key_target: inner.layers.last().map(|e| e.id),
        }
    }
}

/// Capability for one pushed layer.
#[derive(Debug)]
pub struct LayerToken {
    id: LayerId,
    stack: Option<Arc<Mutex<Inner>>>,
}

impl LayerToken {
    /// The layer this token holds.
    #[must_use]
    pub const fn id(&self) -> LayerId {
        self.id
    }

    /// Whether the layer is still held.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.stack.is_some()
    }

    /// Whether this layer is the topmost one and receives keyboard input.
    #[must_use]
    pub fn is_top(&self) -> bool {
        self.stack.as_ref().is_some_and(|stack| {
            let inner = stack.lock().unwrap_or_else(PoisonError::into_inner);
            inner.layers.last().is_some_and(|e| e.id == self.id)
        })
    }

    /// Releases the layer. Returns `false` if it was already released.
    pub fn release(&mut self) -> bool {
        let Some(stack) = self.stack.take() else {
            return false;
        };
        let mut inner = stack.lock().unwrap_or_else(PoisonError::into_inner);
        inner.layers.retain(|e| e.id != self.id);
        debug!("Layer {:?} released (depth {})", self.id, inner.layers.len());
        true
    }
}

impl Drop for LayerToken {
    fn drop(&mut self) {
        self.release();
    }
}
