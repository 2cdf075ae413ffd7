//! Authentication service port.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::info;

/// Errors reported by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Sign-out did not complete.
    #[error("Sign-out failed: {0}")]
    SignOut(String),
}

/// Remote authentication service.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Whether a session is currently authenticated.
    fn is_authenticated(&self) -> bool;

    /// Starts a session.
    async fn sign_in(&self) -> Result<(), AuthError>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// In-process authentication service.
#[derive(Debug, Default)]
pub struct InMemoryAuthService {
    authenticated: AtomicBool,
    fail_sign_out: AtomicBool,
    sign_in_calls: AtomicUsize,
    sign_out_calls: AtomicUsize,
}

impl InMemoryAuthService {
    /// Creates a service with the given initial session state.
    #[must_use]
    pub fn new(authenticated: bool) -> Self {
        Self {
            authenticated: AtomicBool::new(authenticated),
            ..Self::default()
        }
    }

    /// Makes subsequent sign-outs fail and leave the session in place.
    pub fn set_fail_sign_out(&self, fail: bool) {
        self.fail_sign_out.store(fail, Ordering::SeqCst);
    }

    /// Number of sign-in calls so far.
    #[must_use]
    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.load(Ordering::SeqCst)
    }

    /// Number of sign-out calls so far.
    #[must_use]
    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    async fn sign_in(&self) -> Result<(), AuthError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        self.authenticated.store(true, Ordering::SeqCst);
        info!("Signed in");
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(AuthError::SignOut("session could not be revoked".to_string()));
        }
        self.authenticated.store(false, Ordering::SeqCst);
        info!("Signed out");
        Ok(())
    }
}
