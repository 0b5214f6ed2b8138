//! Auth Session Manager
//!
//! Owns the bearer token and user id. The session lives in a pair of Leptos
//! signals provided via context, so every controller receives it explicitly
//! instead of reading ambient global storage; localStorage is only the
//! persistence layer behind `establish`/`clear`.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "user_id";

/// Authenticated session: opaque bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user_id: u32,
}

/// Session context signals, provided app-wide via Leptos context.
#[derive(Clone, Copy)]
pub struct SessionCtx {
    session: ReadSignal<Option<AuthSession>>,
    set_session: WriteSignal<Option<AuthSession>>,
}

impl SessionCtx {
    /// Create the context, hydrating from localStorage so a reload stays
    /// logged in.
    pub fn new() -> Self {
        let stored = load_stored_session();
        let (session, set_session) = signal(stored);
        Self {
            session,
            set_session,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.session.get_untracked().map(|s| s.token)
    }

    /// Persist and activate a freshly issued session.
    pub fn establish(&self, session: AuthSession) {
        let _ = LocalStorage::set(TOKEN_KEY, &session.token);
        let _ = LocalStorage::set(USER_ID_KEY, session.user_id);
        self.set_session.set(Some(session));
    }

    /// Clear token and user id unconditionally.
    pub fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_ID_KEY);
        self.set_session.set(None);
    }
}

fn load_stored_session() -> Option<AuthSession> {
    let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
    let user_id: u32 = LocalStorage::get(USER_ID_KEY).ok()?;
    Some(AuthSession { token, user_id })
}

/// Get the session context from Leptos context.
pub fn use_session() -> SessionCtx {
    expect_context::<SessionCtx>()
}

/// The one auth-header convention used by every request: `Authorization:
/// Bearer <token>`. No token means no credential field at all.
pub fn bearer_header(token: Option<&str>) -> Option<(&'static str, String)> {
    token.map(|t| ("Authorization", format!("Bearer {t}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_carries_token() {
        let header = bearer_header(Some("abc123")).unwrap();
        assert_eq!(header.0, "Authorization");
        assert_eq!(header.1, "Bearer abc123");
    }

    #[test]
    fn no_token_means_no_credential_field() {
        assert!(bearer_header(None).is_none());
    }
}
