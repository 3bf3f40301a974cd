use super::*;

#[test]
fn find_matches_seeded_accounts() {
    let creds = MockCredentials::new();
    let admin = creds.find("admin@legalaid.com", "admin123").expect("admin");
    assert!(admin.is_admin);
    let lawyer = creds.find("lawyer@legalaid.com", "lawyer123").expect("lawyer");
    assert_eq!(lawyer.name, "John Doe");
}

#[test]
fn find_requires_exact_password_and_email() {
    let creds = MockCredentials::new();
    assert!(creds.find("lawyer@legalaid.com", "admin123").is_none());
    assert!(creds.find("LAWYER@legalaid.com", "lawyer123").is_none());
    assert!(creds.find("lawyer@legalaid.com", "").is_none());
}

#[test]
fn inserted_accounts_are_searchable_without_touching_seed() {
    let mut creds = MockCredentials::new();
    let user = User {
        id: "abc".to_owned(),
        email: "new@legalaid.com".to_owned(),
        name: "New Member".to_owned(),
        specialization: None,
        bar_number: None,
        experience: None,
        location: None,
        profile_image: None,
        is_admin: false,
    };
    creds.insert(Credential { user, password: "pw".to_owned() });

    assert!(creds.contains_email("new@legalaid.com"));
    assert_eq!(creds.find("new@legalaid.com", "pw").map(|u| u.name), Some("New Member".to_owned()));
    assert_eq!(creds.seed_len(), 2);
}
