//! Application routes and the auth entry page.

mod auth;

pub use auth::{AuthPage, AuthStatus, DEFAULT_NEXT};

use std::fmt;

use crate::model::ResumeId;

/// A navigable location in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Resume list.
    Home,
    /// Upload form.
    Upload,
    /// Sign-in page with the deferred target.
    Auth {
        /// Local path to open once authenticated.
        next: String,
    },
    /// Detail of one submitted resume.
    Resume(ResumeId),
    /// Unknown location.
    NotFound(String),
}

impl Route {
    /// Destination after a sign-out attempt, whatever its outcome.
    #[must_use]
    pub fn post_logout() -> Self {
        Self::Auth {
            next: "/".to_string(),
        }
    }

    /// Parses a path with optional query string.
    #[must_use]
    pub fn from_path(location: &str) -> Self {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" | "/dashboard" => Self::Home,
            "/upload" => Self::Upload,
            "/auth" => Self::Auth {
                next: auth::next_from_query(query),
            },
            _ => match trimmed.strip_prefix("/resume/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Resume(ResumeId::new(id)),
                _ => Self::NotFound(location.to_string()),
            },
        }
    }

    /// Renders the route back into a location string.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Upload => "/upload".to_string(),
            Self::Auth { next } => {
                format!("/auth?next={}", urlencoding::encode(next).replace("%2F", "/"))
            }
            Self::Resume(id) => format!("/resume/{id}"),
            Self::NotFound(location) => location.clone(),
        }
    }

    /// Whether the route needs an authenticated session.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        matches!(self, Self::Home | Self::Upload | Self::Resume(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_logout_destination() {
        assert_eq!(Route::post_logout().to_path(), "/auth?next=/");
        assert_eq!(Route::from_path("/auth?next=/"), Route::post_logout());
    }

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/dashboard"), Route::Home);
        assert_eq!(Route::from_path("/upload/"), Route::Upload);
        assert_eq!(
            Route::from_path("/resume/abc"),
            Route::Resume(ResumeId::new("abc"))
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(
            Route::from_path("/settings"),
            Route::NotFound("/settings".to_string())
        );
        assert!(matches!(Route::from_path("/resume/"), Route::NotFound(_)));
        assert!(matches!(Route::from_path("/resume/a/b"), Route::NotFound(_)));
    }

    #[test]
    fn test_auth_target_round_trip_keeps_query_chars_encoded() {
        let route = Route::Auth {
            next: "/resume/a b?tab=1".to_string(),
        };
        let path = route.to_path();
        assert_eq!(path, "/auth?next=/resume/a%20b%3Ftab%3D1");
        assert_eq!(Route::from_path(&path), route);
    }

    #[test]
    fn test_requires_auth() {
        assert!(Route::Upload.requires_auth());
        assert!(Route::Home.requires_auth());
        assert!(!Route::NotFound("/x".to_string()).requires_auth());
        assert!(!Route::post_logout().requires_auth());
    }
}
