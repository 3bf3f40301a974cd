use super::*;

#[test]
fn new_session_is_loading_and_anonymous() {
    let session = new_session();
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
}

#[test]
fn initialize_without_browser_storage_stays_anonymous() {
    let mut session = new_session();
    session.initialize();
    assert!(!session.is_loading());
    assert!(session.user().is_none());
}

#[test]
fn login_works_even_when_storage_is_unavailable() {
    let mut session = new_session();
    session.initialize();
    let user = session.authenticate("admin@legalaid.com", "admin123").expect("seeded admin");
    assert_eq!(user.name, "Admin User");
    assert!(session.is_admin());
}
