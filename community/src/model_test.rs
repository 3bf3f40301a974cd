use super::*;
use time::macros::datetime;

fn lawyer() -> User {
    User {
        id: "2".to_owned(),
        email: "lawyer@legalaid.com".to_owned(),
        name: "John Doe".to_owned(),
        specialization: Some("Criminal Law".to_owned()),
        bar_number: Some("BAR67890".to_owned()),
        experience: Some(8),
        location: Some("Mumbai".to_owned()),
        profile_image: None,
        is_admin: false,
    }
}

#[test]
fn user_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(lawyer()).expect("serialize");
    assert_eq!(json["barNumber"], "BAR67890");
    assert_eq!(json["isAdmin"], false);
    assert!(json.get("profileImage").is_none());
    assert!(json.get("password").is_none());
}

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User =
        serde_json::from_str(r#"{"id":"9","email":"a@b.com","name":"A"}"#).expect("deserialize");
    assert_eq!(user.name, "A");
    assert!(!user.is_admin);
    assert_eq!(user.experience, None);
}

#[test]
fn apply_merges_only_present_fields() {
    let mut user = lawyer();
    user.apply(ProfileUpdate { location: Some(Some("Pune".to_owned())), experience: Some(9), ..ProfileUpdate::default() });
    assert_eq!(user.location.as_deref(), Some("Pune"));
    assert_eq!(user.experience, Some(9));
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.bar_number.as_deref(), Some("BAR67890"));
}

#[test]
fn apply_clears_fields_set_to_none() {
    let mut user = lawyer();
    user.apply(ProfileUpdate { bar_number: Some(None), ..ProfileUpdate::default() });
    assert_eq!(user.bar_number, None);
    assert_eq!(user.specialization.as_deref(), Some("Criminal Law"));
}

#[test]
fn request_category_parse_is_case_insensitive() {
    assert_eq!(RequestCategory::parse("financial"), Some(RequestCategory::Financial));
    assert_eq!(RequestCategory::parse(" Medical "), Some(RequestCategory::Medical));
    assert_eq!(RequestCategory::parse("all"), None);
}

#[test]
fn forum_category_parse_accepts_lowercase_tab_values() {
    assert_eq!(ForumCategory::parse("general discussion"), Some(ForumCategory::GeneralDiscussion));
    assert_eq!(ForumCategory::parse("court proceedings"), Some(ForumCategory::CourtProceedings));
    assert_eq!(ForumCategory::GeneralDiscussion.tab_label(), "General");
}

#[test]
fn status_serializes_with_spaced_label() {
    let json = serde_json::to_value(RequestStatus::InProgress).expect("serialize");
    assert_eq!(json, "In Progress");
}

#[test]
fn funding_requires_financial_category_and_goal() {
    let mut request = SupportRequest {
        id: "1".to_owned(),
        title: "t".to_owned(),
        category: RequestCategory::Financial,
        description: "first\n\nsecond".to_owned(),
        created_by: Author::new("3", "Amit Sharma"),
        created_at: datetime!(2023-04-20 0:00 UTC),
        updated_at: None,
        status: RequestStatus::Open,
        donations_received: Some(100),
        donations_goal: Some(400),
        recipient_name: None,
        recipient_relationship: None,
    };
    assert_eq!(request.funding(), Some((100, 400)));
    assert_eq!(request.paragraphs(), vec!["first", "second"]);

    request.category = RequestCategory::Legal;
    assert_eq!(request.funding(), None);
}

#[test]
fn anonymous_donor_name_is_hidden() {
    let donation = Donation {
        id: "2".to_owned(),
        amount: 25_000,
        message: None,
        created_at: datetime!(2023-04-21 11:45 UTC),
        created_by: Author::new("7", "Anonymous Donor"),
        is_anonymous: true,
    };
    assert_eq!(donation.donor_name(), "Anonymous");
}
