//! Sign-in page: deferred target and status text.

use std::borrow::Cow;

use url::form_urlencoded;

use super::Route;

/// Target used when the auth route carries no usable `next`.
pub const DEFAULT_NEXT: &str = "/dashboard";

/// Extracts the deferred target from an auth query string.
///
/// The value is decoded by the query parser and decoded once more, since
/// callers commonly pass an already encoded path. Anything that is not a
/// local absolute path falls back to [`DEFAULT_NEXT`].
pub(super) fn next_from_query(query: &str) -> String {
    let raw = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "next")
        .map(|(_, value)| value.into_owned());

    let Some(raw) = raw else {
        return DEFAULT_NEXT.to_string();
    };
    let decoded = urlencoding::decode(&raw).map_or_else(|_| raw.clone(), Cow::into_owned);

    if is_local_path(&decoded) {
        decoded
    } else {
        DEFAULT_NEXT.to_string()
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// What the auth page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session state not known yet.
    Loading,
    /// Session is authenticated.
    SignedIn,
    /// No session.
    SignedOut,
}

impl AuthStatus {
    /// Derives the status from the session.
    #[must_use]
    pub const fn from_session(loading: bool, authenticated: bool) -> Self {
        match (loading, authenticated) {
            (true, _) => Self::Loading,
            (false, true) => Self::SignedIn,
            (false, false) => Self::SignedOut,
        }
    }

    /// Status line.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Loading => "Authenticating securely...",
            Self::SignedIn => "Successfully signed in",
            Self::SignedOut => "Sign in to access your dashboard",
        }
    }

    /// Label of the action button, if any.
    #[must_use]
    pub const fn action_label(self) -> Option<&'static str> {
        match self {
            Self::Loading => None,
            Self::SignedIn => Some("Sign Out"),
            Self::SignedOut => Some("Sign In"),
        }
    }
}

/// State of the sign-in page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPage {
    next: String,
    notice: Option<String>,
}

impl AuthPage {
    /// Creates the page for a deferred target.
    #[must_use]
    pub fn new(next: impl Into<String>) -> Self {
        Self {
            next: next.into(),
            notice: None,
        }
    }

    /// Attaches a notice, e.g. a failed sign-out.
    #[must_use]
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    /// The decoded deferred target.
    #[must_use]
    pub fn next(&self) -> &str {
        &self.next
    }

    /// Notice shown above the status line.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Where to go once the session is authenticated.
    #[must_use]
    pub fn redirect(&self, authenticated: bool) -> Option<Route> {
        authenticated.then(|| Route::from_path(&self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResumeId;

    #[test]
    fn test_next_defaults() {
        assert_eq!(next_from_query(""), DEFAULT_NEXT);
        assert_eq!(next_from_query("other=1"), DEFAULT_NEXT);
    }

    #[test]
    fn test_next_is_decoded() {
        assert_eq!(next_from_query("next=/"), "/");
        assert_eq!(next_from_query("next=%2Fresume%2Fabc"), "/resume/abc");
        assert_eq!(next_from_query("next=%252Fupload"), "/upload");
    }

    #[test]
    fn test_non_local_targets_fall_back() {
        assert_eq!(next_from_query("next=https://evil.test/"), DEFAULT_NEXT);
        assert_eq!(next_from_query("next=//evil.test"), DEFAULT_NEXT);
        assert_eq!(next_from_query("next=upload"), DEFAULT_NEXT);
    }

    #[test]
    fn test_status_text() {
        let loading = AuthStatus::from_session(true, true);
        assert_eq!(loading.message(), "Authenticating securely...");
        assert_eq!(loading.action_label(), None);
        assert_eq!(AuthStatus::from_session(false, true).action_label(), Some("Sign Out"));
        assert_eq!(AuthStatus::from_session(false, false).action_label(), Some("Sign In"));
    }

    #[test]
    fn test_redirect_only_when_authenticated() {
        let page = AuthPage::new("/resume/r1");
        assert_eq!(page.redirect(false), None);
        assert_eq!(page.redirect(true), Some(Route::Resume(ResumeId::new("r1"))));
    }
}
