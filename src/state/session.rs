// ============================================================================
// SESSION STATE - the only process-wide state of the app
// ============================================================================
// `init` reads durable storage once at startup. After that `set_token` is
// the only mutator and mirrors every change synchronously. Nothing here
// validates the token; the backend is the authority.
// ============================================================================

use thiserror::Error;

use crate::utils::storage::{StorageError, TokenStorage};

/// Snapshot of the current session, cheap to clone into views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SignIn(String),
    SignOut,
}

/// Outcome of a guard check on a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no session token present")]
pub struct Unauthenticated;

/// Single guard check used by every protected view.
pub fn require_token(session: &Session) -> Result<&str, Unauthenticated> {
    session.token().ok_or(Unauthenticated)
}

pub struct SessionStore<S: TokenStorage> {
    storage: S,
    session: Session,
}

impl<S: TokenStorage> SessionStore<S> {
    pub fn init(storage: S) -> Self {
        let session = Session::new(storage.load());
        if session.is_authenticated() {
            log::info!("🔑 Session restored from storage");
        }
        Self { storage, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Replaces the token and mirrors it into storage (write on `Some`,
    /// delete on `None`). The in-memory value changes even if storage fails.
    pub fn set_token(&mut self, token: Option<String>) -> Result<(), StorageError> {
        self.session = Session::new(token);
        match self.session.token() {
            Some(token) => self.storage.save(token),
            None => self.storage.remove(),
        }
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.set_token(None)
    }

    pub fn apply(&mut self, action: SessionAction) {
        let result = match action {
            SessionAction::SignIn(token) => {
                log::info!("✅ Signed in");
                self.set_token(Some(token))
            }
            SessionAction::SignOut => {
                log::info!("👋 Signed out");
                self.clear()
            }
        };
        if let Err(e) = result {
            log::error!("❌ Could not persist session: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::tests::ScriptedTransport;
    use crate::services::{ApiClient, Endpoint};
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn init_restores_persisted_token() {
        let store = SessionStore::init(MemoryStorage::with_token("token", "persisted"));
        assert_eq!(store.token(), Some("persisted"));
    }

    #[test]
    fn empty_persisted_value_is_no_session() {
        let store = SessionStore::init(MemoryStorage::with_token("token", ""));
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn sign_in_mirrors_token_into_storage() {
        let storage = MemoryStorage::new("token");
        let mut store = SessionStore::init(storage.clone());

        store.apply(SessionAction::SignIn("from-backend".to_string()));

        assert_eq!(store.token(), Some("from-backend"));
        assert_eq!(storage.get("token").as_deref(), Some("from-backend"));
    }

    #[test]
    fn sign_out_removes_storage_and_later_requests_carry_no_token() {
        let storage = MemoryStorage::with_token("token", "abc");
        let mut store = SessionStore::init(storage.clone());

        store.apply(SessionAction::SignOut);

        assert_eq!(storage.get("token"), None);
        assert_eq!(store.token(), None);

        let api = ApiClient::with_transport("https://api.test", ScriptedTransport::default());
        let login = api.request(&Endpoint::Login, store.token(), None).unwrap();
        assert_eq!(login.authorization, None);
        assert!(api
            .request(&Endpoint::MyListings, store.token(), None)
            .is_err());
    }

    #[test]
    fn guard_reports_missing_token() {
        assert_eq!(require_token(&Session::default()), Err(Unauthenticated));
        let session = Session::new(Some("t".to_string()));
        assert_eq!(require_token(&session), Ok("t"));
    }
}
