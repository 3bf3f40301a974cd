//! Session store: the single owner of "who is the current user".
//!
//! SYSTEM CONTEXT
//! ==============
//! The client wraps one `SessionStore` in a reactive signal and provides it
//! through context; pages read it and invoke its operations. Nothing else
//! holds or mutates the current `User`.
//!
//! DESIGN
//! ======
//! Storage and credentials are injected so the same store runs against
//! `localStorage` in the browser and `MemoryStorage` in tests. Operations are
//! synchronous; callers wrap them in [`crate::latency::simulate`] to model
//! request latency, bracketing the wait with [`SessionStore::begin_request`]
//! so `is_loading()` reflects the pending request. Every identity change writes through to storage in the
//! same call. A failed write is logged and the in-memory state still wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::credentials::CredentialRepository;
use crate::model::{Credential, ProfileUpdate, RegisterData, User};
use crate::notice::Notice;
use crate::storage::{KeyValueStorage, SESSION_KEY};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("Email already registered")]
    EmailAlreadyRegistered,
    #[error("User not authenticated")]
    NotAuthenticated,
}

pub struct SessionStore<S, C> {
    storage: S,
    credentials: C,
    user: Option<User>,
    loading: bool,
}

impl<S: KeyValueStorage, C: CredentialRepository> SessionStore<S, C> {
    /// Create an uninitialized store. `is_loading()` stays true until
    /// [`Self::initialize`] runs.
    pub fn new(storage: S, credentials: C) -> Self {
        Self { storage, credentials, user: None, loading: true }
    }

    /// Adopt a previously persisted user, discarding a corrupt record.
    pub fn initialize(&mut self) {
        match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, "restored persisted session");
                    self.user = Some(user);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt session record");
                    self.clear_persisted();
                }
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "session storage unreadable"),
        }
        self.loading = false;
    }

    /// Mark a login, registration or profile request as in flight. The next
    /// completed operation clears the flag, whatever its outcome.
    pub fn begin_request(&mut self) {
        self.loading = true;
    }

    /// Sign in with an exact email/password match.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidCredentials`] when no account matches; state is
    /// left untouched.
    pub fn authenticate(&mut self, email: &str, password: &str) -> Result<User, SessionError> {
        self.loading = false;
        let Some(user) = self.credentials.find(email, password) else {
            tracing::info!("login rejected");
            return Err(SessionError::InvalidCredentials);
        };
        tracing::info!(user_id = %user.id, "login succeeded");
        self.adopt(user.clone());
        Ok(user)
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// [`SessionError::PasswordMismatch`] when the two password fields differ,
    /// checked before [`SessionError::EmailAlreadyRegistered`].
    pub fn register(&mut self, data: RegisterData) -> Result<User, SessionError> {
        self.loading = false;
        if data.password != data.confirm_password {
            return Err(SessionError::PasswordMismatch);
        }
        if self.credentials.contains_email(&data.email) {
            return Err(SessionError::EmailAlreadyRegistered);
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: data.email,
            name: data.name,
            specialization: data.specialization.filter(|s| !s.is_empty()),
            bar_number: data.bar_number.filter(|s| !s.is_empty()),
            experience: None,
            location: None,
            profile_image: None,
            is_admin: false,
        };
        self.credentials.insert(Credential { user: user.clone(), password: data.password });
        tracing::info!(user_id = %user.id, "registered new member");
        self.adopt(user.clone());
        Ok(user)
    }

    /// Drop the current user and its persisted record.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "logged out");
        }
        self.clear_persisted();
    }

    /// Merge `update` into the current user and persist it.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotAuthenticated`] when nobody is signed in.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<User, SessionError> {
        self.loading = false;
        let Some(user) = self.user.as_mut() else {
            return Err(SessionError::NotAuthenticated);
        };
        user.apply(update);
        let updated = user.clone();
        self.persist(&updated);
        Ok(updated)
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn adopt(&mut self, user: User) {
        self.persist(&user);
        self.user = Some(user);
    }

    fn persist(&self, user: &User) {
        let raw = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize session record");
                return;
            }
        };
        if let Err(e) = self.storage.set(SESSION_KEY, &raw) {
            tracing::warn!(error = %e, "failed to persist session record");
        }
    }

    fn clear_persisted(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "failed to remove session record");
        }
    }
}

// =============================================================================
// NOTICES
// =============================================================================

#[must_use]
pub fn login_notice(outcome: &Result<User, SessionError>) -> Notice {
    match outcome {
        Ok(user) => Notice::success("Login successful", format!("Welcome back, {}!", user.name)),
        Err(e) => Notice::error("Login failed", e.to_string()),
    }
}

#[must_use]
pub fn register_notice(outcome: &Result<User, SessionError>) -> Notice {
    match outcome {
        Ok(user) => Notice::success("Registration successful", format!("Welcome, {}!", user.name)),
        Err(e) => Notice::error("Registration failed", e.to_string()),
    }
}

#[must_use]
pub fn profile_notice(outcome: &Result<User, SessionError>) -> Notice {
    match outcome {
        Ok(_) => Notice::success("Profile updated", "Your profile has been updated successfully."),
        Err(e) => Notice::error("Update failed", e.to_string()),
    }
}

#[must_use]
pub fn logout_notice() -> Notice {
    Notice::info("Logged out successfully")
}
