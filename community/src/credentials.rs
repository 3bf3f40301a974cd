//! Credential lookup standing in for an auth backend.
//!
//! DESIGN
//! ======
//! The seeded accounts never change at runtime. Accounts created through
//! registration go into a separate overlay so they can sign in again during
//! the same process lifetime without mutating the seed list.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::model::{Credential, User};

/// Read/insert access to login credentials.
pub trait CredentialRepository {
    /// Exact match on both email and password. The returned user carries no
    /// password.
    fn find(&self, email: &str, password: &str) -> Option<User>;

    /// Whether any account already uses `email` (exact match).
    fn contains_email(&self, email: &str) -> bool;

    /// Register a new account.
    fn insert(&mut self, credential: Credential);
}

/// In-memory credential list seeded with the demo accounts.
#[derive(Clone, Debug)]
pub struct MockCredentials {
    seed: Vec<Credential>,
    registered: Vec<Credential>,
}

impl MockCredentials {
    #[must_use]
    pub fn new() -> Self {
        Self { seed: seed_credentials(), registered: Vec::new() }
    }

    #[cfg(test)]
    pub(crate) fn seed_len(&self) -> usize {
        self.seed.len()
    }

    fn all(&self) -> impl Iterator<Item = &Credential> {
        self.seed.iter().chain(self.registered.iter())
    }
}

impl Default for MockCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialRepository for MockCredentials {
    fn find(&self, email: &str, password: &str) -> Option<User> {
        self.all()
            .find(|c| c.user.email == email && c.password == password)
            .map(|c| c.user.clone())
    }

    fn contains_email(&self, email: &str) -> bool {
        self.all().any(|c| c.user.email == email)
    }

    fn insert(&mut self, credential: Credential) {
        self.registered.push(credential);
    }
}

fn seed_credentials() -> Vec<Credential> {
    vec![
        Credential {
            user: User {
                id: "1".to_owned(),
                email: "admin@legalaid.com".to_owned(),
                name: "Admin User".to_owned(),
                specialization: Some("Corporate Law".to_owned()),
                bar_number: Some("BAR12345".to_owned()),
                experience: Some(15),
                location: Some("New Delhi".to_owned()),
                profile_image: None,
                is_admin: true,
            },
            password: "admin123".to_owned(),
        },
        Credential {
            user: User {
                id: "2".to_owned(),
                email: "lawyer@legalaid.com".to_owned(),
                name: "John Doe".to_owned(),
                specialization: Some("Criminal Law".to_owned()),
                bar_number: Some("BAR67890".to_owned()),
                experience: Some(8),
                location: Some("Mumbai".to_owned()),
                profile_image: None,
                is_admin: false,
            },
            password: "lawyer123".to_owned(),
        },
    ]
}
