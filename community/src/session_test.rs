use super::*;
use crate::credentials::MockCredentials;
use crate::forms::ProfileForm;
use crate::latency::{LOGIN_LATENCY, NoDelay, simulate};
use crate::storage::{MemoryStorage, StorageError};

fn store() -> (SessionStore<MemoryStorage, MockCredentials>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone(), MockCredentials::new());
    store.initialize();
    (store, storage)
}

fn registration(password: &str, confirm: &str) -> RegisterData {
    RegisterData {
        name: "Asha Rao".to_owned(),
        email: "asha@legalaid.com".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
        specialization: Some("Family Law".to_owned()),
        bar_number: Some(String::new()),
    }
}

/// Storage whose writes always fail.
struct ReadOnlyStorage;

impl KeyValueStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }
    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// Initialize
// =============================================================

#[test]
fn new_store_is_loading_until_initialized() {
    let mut store = SessionStore::new(MemoryStorage::new(), MockCredentials::new());
    assert!(store.is_loading());
    store.initialize();
    assert!(!store.is_loading());
    assert!(!store.is_authenticated());
}

#[test]
fn begin_request_sets_loading_until_operation_completes() {
    let (mut store, _) = store();
    store.begin_request();
    assert!(store.is_loading());
    store.authenticate("lawyer@legalaid.com", "lawyer123").expect("login");
    assert!(!store.is_loading());

    store.begin_request();
    let user = store.update_profile(ProfileUpdate { name: Some("J. Doe".to_owned()), ..ProfileUpdate::default() });
    assert_eq!(user.map(|u| u.name), Ok("J. Doe".to_owned()));
    assert!(!store.is_loading());
}

#[test]
fn failed_operations_also_clear_loading() {
    let (mut store, _) = store();
    store.begin_request();
    assert_eq!(store.authenticate("lawyer@legalaid.com", "wrong"), Err(SessionError::InvalidCredentials));
    assert!(!store.is_loading());

    store.begin_request();
    assert_eq!(store.register(registration("secret1", "secret2")), Err(SessionError::PasswordMismatch));
    assert!(!store.is_loading());

    store.begin_request();
    assert_eq!(store.update_profile(ProfileUpdate::default()), Err(SessionError::NotAuthenticated));
    assert!(!store.is_loading());
}

#[test]
fn initialize_restores_persisted_user() {
    let raw = r#"{"id":"2","email":"lawyer@legalaid.com","name":"John Doe","isAdmin":false}"#;
    let storage = MemoryStorage::new().with_entry(SESSION_KEY, raw);
    let mut store = SessionStore::new(storage, MockCredentials::new());
    store.initialize();
    assert_eq!(store.user().map(|u| u.name.as_str()), Some("John Doe"));
}

#[test]
fn initialize_discards_corrupt_record() {
    let storage = MemoryStorage::new().with_entry(SESSION_KEY, "{not json");
    let mut store = SessionStore::new(storage.clone(), MockCredentials::new());
    store.initialize();
    assert!(store.user().is_none());
    assert!(!store.is_loading());
    assert_eq!(storage.get(SESSION_KEY).expect("get"), None);
}

// =============================================================
// Authenticate
// =============================================================

#[test]
fn authenticate_accepts_every_seeded_pair() {
    for (email, password) in [("admin@legalaid.com", "admin123"), ("lawyer@legalaid.com", "lawyer123")] {
        let (mut store, storage) = store();
        let user = store.authenticate(email, password).expect("login");
        assert_eq!(user.email, email);

        let raw = storage.get(SESSION_KEY).expect("get").expect("persisted");
        assert!(!raw.contains("password"));
        assert!(!raw.contains(password));
    }
}

#[test]
fn authenticate_lawyer_scenario() {
    let (mut store, _) = store();
    let user = futures::executor::block_on(simulate(&NoDelay, LOGIN_LATENCY, || {
        store.authenticate("lawyer@legalaid.com", "lawyer123")
    }))
    .expect("login");
    assert_eq!(user.name, "John Doe");
    assert!(!user.is_admin);
    assert!(store.is_authenticated());
    assert!(!store.is_admin());
}

#[test]
fn authenticate_failure_leaves_state_unchanged() {
    let (mut store, storage) = store();
    store.authenticate("admin@legalaid.com", "admin123").expect("login");
    let before = storage.get(SESSION_KEY).expect("get");

    for (email, password) in [("lawyer@legalaid.com", "wrong"), ("nobody@legalaid.com", "lawyer123"), ("", "")] {
        let err = store.authenticate(email, password).expect_err("should fail");
        assert_eq!(err, SessionError::InvalidCredentials);
    }

    assert!(store.is_admin());
    assert_eq!(storage.get(SESSION_KEY).expect("get"), before);
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_rejects_password_mismatch() {
    let (mut store, storage) = store();
    let err = store.register(registration("abc", "xyz")).expect_err("mismatch");
    assert_eq!(err, SessionError::PasswordMismatch);
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(SESSION_KEY).expect("get"), None);
}

#[test]
fn register_checks_mismatch_before_duplicate_email() {
    let (mut store, _) = store();
    let mut data = registration("abc", "xyz");
    data.email = "admin@legalaid.com".to_owned();
    assert_eq!(store.register(data), Err(SessionError::PasswordMismatch));
}

#[test]
fn register_rejects_seeded_email() {
    let (mut store, _) = store();
    let mut data = registration("secret", "secret");
    data.email = "lawyer@legalaid.com".to_owned();
    assert_eq!(store.register(data), Err(SessionError::EmailAlreadyRegistered));
    assert!(!store.is_authenticated());
}

#[test]
fn register_adopts_and_persists_new_member() {
    let (mut store, storage) = store();
    let user = store.register(registration("secret", "secret")).expect("register");
    assert_eq!(user.name, "Asha Rao");
    assert!(!user.is_admin);
    assert_eq!(user.specialization.as_deref(), Some("Family Law"));
    assert_eq!(user.bar_number, None);
    assert!(uuid::Uuid::parse_str(&user.id).is_ok());

    let raw = storage.get(SESSION_KEY).expect("get").expect("persisted");
    let persisted: User = serde_json::from_str(&raw).expect("parse");
    assert_eq!(persisted, user);
}

#[test]
fn registered_member_can_sign_in_again_after_logout() {
    let (mut store, _) = store();
    store.register(registration("secret", "secret")).expect("register");
    store.logout();
    let user = store.authenticate("asha@legalaid.com", "secret").expect("login");
    assert_eq!(user.name, "Asha Rao");
    assert_eq!(store.register(registration("secret", "secret")), Err(SessionError::EmailAlreadyRegistered));
}

// =============================================================
// Logout / UpdateProfile
// =============================================================

#[test]
fn logout_clears_user_and_record() {
    let (mut store, storage) = store();
    store.authenticate("lawyer@legalaid.com", "lawyer123").expect("login");
    store.logout();
    assert!(store.user().is_none());
    assert!(!store.is_admin());
    assert_eq!(storage.get(SESSION_KEY).expect("get"), None);
}

#[test]
fn update_profile_requires_authentication() {
    let (mut store, _) = store();
    let err = store.update_profile(ProfileUpdate::default()).expect_err("unauthenticated");
    assert_eq!(err, SessionError::NotAuthenticated);
    assert_eq!(err.to_string(), "User not authenticated");
}

#[test]
fn update_profile_merges_and_persists() {
    let (mut store, storage) = store();
    store.authenticate("lawyer@legalaid.com", "lawyer123").expect("login");
    let update = ProfileUpdate { location: Some(Some("Pune".to_owned())), ..ProfileUpdate::default() };
    let user = store.update_profile(update).expect("update");
    assert_eq!(user.location.as_deref(), Some("Pune"));
    assert_eq!(user.name, "John Doe");

    let raw = storage.get(SESSION_KEY).expect("get").expect("persisted");
    assert!(raw.contains("Pune"));
}

#[test]
fn clearing_location_through_profile_form_removes_it() {
    let (mut store, storage) = store();
    store.authenticate("lawyer@legalaid.com", "lawyer123").expect("login");
    let mut form = ProfileForm::from_user(store.user().expect("signed in"));
    assert_eq!(form.location, "Mumbai");
    form.location = String::new();
    let update = form.validate().expect("valid");
    let user = store.update_profile(update).expect("update");

    assert_eq!(user.location, None);
    assert_eq!(store.user().and_then(|u| u.location.clone()), None);
    assert_eq!(user.specialization.as_deref(), Some("Criminal Law"));

    let raw = storage.get(SESSION_KEY).expect("get").expect("persisted");
    assert!(!raw.contains("location"));
    let restored: User = serde_json::from_str(&raw).expect("decode");
    assert_eq!(restored.location, None);
}

#[test]
fn failed_storage_write_keeps_in_memory_session() {
    let mut store = SessionStore::new(ReadOnlyStorage, MockCredentials::new());
    store.initialize();
    store.authenticate("lawyer@legalaid.com", "lawyer123").expect("login");
    assert!(store.is_authenticated());
    store.logout();
    assert!(!store.is_authenticated());
}

// =============================================================
// Notices
// =============================================================

#[test]
fn login_notice_reports_outcome() {
    let (mut store, _) = store();
    let ok = store.authenticate("lawyer@legalaid.com", "lawyer123");
    let notice = login_notice(&ok);
    assert_eq!(notice.title, "Login successful");
    assert_eq!(notice.description.as_deref(), Some("Welcome back, John Doe!"));

    let err = login_notice(&Err(SessionError::InvalidCredentials));
    assert!(err.is_destructive());
    assert_eq!(err.description.as_deref(), Some("Invalid email or password"));
}

#[test]
fn register_notice_reports_mismatch_message() {
    let notice = register_notice(&Err(SessionError::PasswordMismatch));
    assert_eq!(notice.title, "Registration failed");
    assert_eq!(notice.description.as_deref(), Some("Passwords don't match"));
}
