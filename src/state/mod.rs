pub mod session;

pub use session::{require_token, Session, SessionAction, SessionStore, Unauthenticated};
