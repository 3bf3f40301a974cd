#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use community::{MockCredentials, SessionError, SessionStore, User};
use leptos::prelude::*;

use crate::util::storage::BrowserStorage;

/// The app's session store: `localStorage` persistence over the demo
/// credential list.
pub type Session = SessionStore<BrowserStorage, MockCredentials>;

/// A fresh, uninitialized store. `App` calls `initialize` once mounted.
pub fn new_session() -> Session {
    SessionStore::new(BrowserStorage, MockCredentials::new())
}

/// Snapshot of the signed-in user. Tracks the signal.
pub fn current_user(session: RwSignal<Session>) -> Option<User> {
    session.with(|s| s.user().cloned())
}

pub fn is_authenticated(session: RwSignal<Session>) -> bool {
    session.with(Session::is_authenticated)
}

pub fn is_loading(session: RwSignal<Session>) -> bool {
    session.with(Session::is_loading)
}

/// Run a fallible session operation through the signal so subscribers see
/// the change.
pub fn apply<T>(
    session: RwSignal<Session>,
    op: impl FnOnce(&mut Session) -> Result<T, SessionError>,
) -> Result<T, SessionError> {
    session.try_update(op).unwrap_or(Err(SessionError::NotAuthenticated))
}
