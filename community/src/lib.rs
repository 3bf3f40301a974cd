//! Domain core for the LegalAid Connect community platform.
//!
//! This crate owns everything the UI needs that is not rendering: the data
//! model, the session store and its storage seam, the mock repositories that
//! stand in for a backend, list filtering/sorting, form validation, display
//! formatting, route parsing, and toast notices. It has no browser
//! dependencies so it can be tested natively and reused by the SSR host.

pub mod credentials;
pub mod format;
pub mod forms;
pub mod latency;
pub mod listing;
pub mod model;
pub mod notice;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod session;
pub mod storage;

pub use credentials::{CredentialRepository, MockCredentials};
pub use latency::{Delay, NoDelay, simulate};
pub use model::{
    Author, Comment, Credential, Donation, ForumCategory, ForumTopic, LastReply, ProfileUpdate, RegisterData,
    RequestCategory, RequestStatus, SupportRequest, User,
};
pub use notice::{Notice, NoticeVariant};
pub use repository::{CommunityRepository, MockCommunity};
pub use routes::Route;
pub use session::{SessionError, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage, SESSION_KEY, StorageError};
