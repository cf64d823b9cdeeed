// ============================================================================
// USE SESSION STORE - owns the SessionStore for the whole app
// ============================================================================
// Called once by App. The resulting handle is passed down as a prop to
// every view that needs it.
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::state::{Session, SessionAction, SessionStore};
use crate::utils::storage::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    session: Session,
    dispatch: Callback<SessionAction>,
}

impl SessionHandle {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn sign_in(&self, token: String) {
        self.dispatch.emit(SessionAction::SignIn(token));
    }

    /// Local only; the backend is not told.
    pub fn sign_out(&self) {
        self.dispatch.emit(SessionAction::SignOut);
    }
}

#[hook]
pub fn use_session_store() -> SessionHandle {
    let store = use_mut_ref(|| {
        SessionStore::init(BrowserStorage::new(CONFIG.token_storage_key.clone()))
    });
    let session = use_state_eq(|| store.borrow().session().clone());

    let dispatch = {
        let store = store.clone();
        let session = session.clone();
        use_callback((), move |action: SessionAction, _| {
            let mut store = store.borrow_mut();
            store.apply(action);
            session.set(store.session().clone());
        })
    };

    SessionHandle {
        session: (*session).clone(),
        dispatch,
    }
}
