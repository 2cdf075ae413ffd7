//! Authentication session and the sign-out confirmation gate.

mod auth;
mod gate;

pub use auth::{AuthError, AuthService, InMemoryAuthService};
pub use gate::{CancelReason, ConfirmationState, GateError, NavAffordances, SessionGate};
