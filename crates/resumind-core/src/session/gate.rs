//! Sign-out confirmation state machine.

use std::fmt;

use tracing::{debug, info, warn};

use crate::layer::{DocumentEffects, LayerStack, LayerToken};
use crate::route::Route;

/// Phase of the sign-out confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationState {
    /// No confirmation visible.
    #[default]
    Idle,
    /// Confirmation surface shown.
    Open,
    /// Sign-out requested, waiting for the service.
    InFlight,
}

impl fmt::Display for ConfirmationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Open => "open",
            Self::InFlight => "in flight",
        };
        f.write_str(name)
    }
}

/// How the confirmation was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Escape key.
    Escape,
    /// Click on the background overlay.
    Overlay,
    /// Cancel button.
    Button,
}

/// A transition the gate does not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// Log-out requested without an authenticated session.
    #[error("Log out is only available to signed-in users")]
    NotAuthenticated,

    /// Action invalid in the current phase.
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        /// Attempted action.
        action: &'static str,
        /// Phase at the time.
        state: ConfirmationState,
    },
}

/// Navigation controls derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAffordances {
    /// Upload link.
    pub upload: bool,
    /// Log-out trigger.
    pub logout: bool,
}

impl NavAffordances {
    /// Upload is always offered; log out only to authenticated sessions.
    #[must_use]
    pub const fn for_session(authenticated: bool) -> Self {
        Self {
            upload: true,
            logout: authenticated,
        }
    }
}

const LAYER_OWNER: &str = "logout-confirmation";

/// Gate in front of the sign-out capability.
///
/// While [`ConfirmationState::Open`] the gate holds a layer on the shared
/// [`LayerStack`], which locks scrolling and routes keys to it. The layer is
/// released on every exit from `Open`, including [`SessionGate::teardown`]
/// and drop.
#[derive(Debug)]
pub struct SessionGate {
    layers: LayerStack,
    state: ConfirmationState,
    layer: Option<LayerToken>,
    last_error: Option<String>,
}

impl SessionGate {
    /// Creates an idle gate using `layers` for its global effects.
    #[must_use]
    pub const fn new(layers: LayerStack) -> Self {
        Self {
            layers,
            state: ConfirmationState::Idle,
            layer: None,
            last_error: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn state(&self) -> ConfirmationState {
        self.state
    }

    /// Whether the confirmation surface is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ConfirmationState::Open)
    }

    /// Message of the last failed sign-out.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Global effects currently in force.
    #[must_use]
    pub fn effects(&self) -> DocumentEffects {
        self.layers.effects()
    }

    /// Shows the confirmation.
    ///
    /// # Errors
    ///
    /// Fails if the session is not authenticated or the gate is not idle.
    pub fn request_logout(&mut self, authenticated: bool) -> Result<(), GateError> {
        if !authenticated {
            return Err(GateError::NotAuthenticated);
        }
        self.expect_state(ConfirmationState::Idle, "open the confirmation")?;

        self.layer = Some(self.layers.push(LAYER_OWNER));
        self.state = ConfirmationState::Open;
        debug!("Logout confirmation opened");
        Ok(())
    }

    /// Dismisses the confirmation without signing out.
    ///
    /// # Errors
    ///
    /// Fails unless the confirmation is open.
    pub fn cancel(&mut self, reason: CancelReason) -> Result<(), GateError> {
        self.expect_state(ConfirmationState::Open, "cancel")?;
        self.close();
        debug!("Logout confirmation cancelled ({:?})", reason);
        Ok(())
    }

    /// Handles an Escape press. Only acts when the confirmation holds the
    /// top layer; returns whether the key was consumed.
    pub fn handle_escape(&mut self) -> bool {
        let on_top = self.layer.as_ref().is_some_and(LayerToken::is_top);
        on_top && self.cancel(CancelReason::Escape).is_ok()
    }

    /// Confirms the sign-out. The caller then invokes the sign-out
    /// capability and reports back through [`SessionGate::settle_sign_out`].
    ///
    /// # Errors
    ///
    /// Fails unless the confirmation is open.
    pub fn confirm(&mut self) -> Result<(), GateError> {
        self.expect_state(ConfirmationState::Open, "confirm")?;
        self.close();
        self.state = ConfirmationState::InFlight;
        self.last_error = None;
        info!("Signing out");
        Ok(())
    }

    /// Completes the sign-out and returns where to navigate, whatever the
    /// outcome. Failures are kept as [`SessionGate::last_error`].
    ///
    /// # Errors
    ///
    /// Fails unless a sign-out is in flight.
    pub fn settle_sign_out<E: fmt::Display>(
        &mut self,
        outcome: Result<(), E>,
    ) -> Result<Route, GateError> {
        self.expect_state(ConfirmationState::InFlight, "settle a sign-out")?;
        self.state = ConfirmationState::Idle;

        if let Err(e) = outcome {
            warn!("Sign-out failed: {}", e);
            self.last_error = Some(e.to_string());
        }
        Ok(Route::post_logout())
    }

    /// Drops any open confirmation along with its global effects.
    pub fn teardown(&mut self) {
        if self.state != ConfirmationState::Idle {
            debug!("Session gate torn down while {}", self.state);
        }
        self.close();
        self.state = ConfirmationState::Idle;
    }

    fn close(&mut self) {
        if let Some(mut layer) = self.layer.take() {
            layer.release();
        }
        self.state = ConfirmationState::Idle;
    }

    fn expect_state(
        &self,
        expected: ConfirmationState,
        action: &'static str,
    ) -> Result<(), GateError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GateError::InvalidTransition {
                action,
                state: self.state,
            })
        }
    }
}
