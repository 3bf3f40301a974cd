use super::*;

// =============================================================
// Login / Register
// =============================================================

#[test]
fn login_requires_email_and_password() {
    let form = LoginForm { email: "  ".to_owned(), password: "x".to_owned() };
    assert_eq!(form.validate(), Err(FormError::Required("Email")));

    let form = LoginForm { email: "lawyer@legalaid.com".to_owned(), password: String::new() };
    assert_eq!(form.validate(), Err(FormError::Required("Password")));
}

#[test]
fn login_rejects_malformed_email() {
    for bad in ["lawyer", "@legalaid.com", "lawyer@", "a@b@c"] {
        let form = LoginForm { email: bad.to_owned(), password: "pw".to_owned() };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
    }
}

#[test]
fn login_trims_email_but_not_password() {
    let form = LoginForm { email: " lawyer@legalaid.com ".to_owned(), password: " pw ".to_owned() };
    assert_eq!(form.validate(), Ok(("lawyer@legalaid.com".to_owned(), " pw ".to_owned())));
}

#[test]
fn register_passes_mismatched_passwords_through() {
    let form = RegisterForm {
        name: "Asha".to_owned(),
        email: "asha@legalaid.com".to_owned(),
        password: "abc".to_owned(),
        confirm_password: "xyz".to_owned(),
        specialization: String::new(),
        bar_number: " BAR1 ".to_owned(),
    };
    let data = form.validate().expect("valid form");
    assert_eq!(data.password, "abc");
    assert_eq!(data.confirm_password, "xyz");
    assert_eq!(data.specialization, None);
    assert_eq!(data.bar_number.as_deref(), Some("BAR1"));
}

#[test]
fn register_requires_confirmation() {
    let form = RegisterForm {
        name: "Asha".to_owned(),
        email: "asha@legalaid.com".to_owned(),
        password: "abc".to_owned(),
        ..RegisterForm::default()
    };
    assert_eq!(form.validate(), Err(FormError::Required("Confirm password")));
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_form_round_trips_user_fields() {
    let user = User {
        id: "2".to_owned(),
        email: "lawyer@legalaid.com".to_owned(),
        name: "John Doe".to_owned(),
        specialization: Some("Criminal Law".to_owned()),
        bar_number: None,
        experience: Some(8),
        location: Some("Mumbai".to_owned()),
        profile_image: None,
        is_admin: false,
    };
    let form = ProfileForm::from_user(&user);
    assert_eq!(form.experience, 8);
    assert_eq!(form.bar_number, "");

    let update = form.validate().expect("valid");
    assert_eq!(update.name.as_deref(), Some("John Doe"));
    assert_eq!(update.bar_number, Some(None));
    assert_eq!(update.location, Some(Some("Mumbai".to_owned())));
}

#[test]
fn profile_blank_optional_field_requests_clear() {
    let form = ProfileForm {
        name: "John Doe".to_owned(),
        location: "   ".to_owned(),
        specialization: "Criminal Law".to_owned(),
        ..ProfileForm::default()
    };
    let update = form.validate().expect("valid");
    assert_eq!(update.location, Some(None));
    assert_eq!(update.specialization, Some(Some("Criminal Law".to_owned())));
}

#[test]
fn profile_rejects_out_of_range_experience() {
    let form = ProfileForm { name: "A".to_owned(), experience: 51, ..ProfileForm::default() };
    assert_eq!(form.validate(), Err(FormError::InvalidExperience));
}

// =============================================================
// Donation
// =============================================================

#[test]
fn donation_defaults_to_one_thousand() {
    let form = DonationForm::default();
    assert_eq!(form.amount, "1000");
    assert!(form.is_quick_amount_selected(1000));
    assert_eq!(form.submit_label(false), "Donate ₹1,000");
    assert_eq!(form.submit_label(true), "Processing...");
}

#[test]
fn donation_quick_amount_replaces_amount() {
    let mut form = DonationForm::with_amount(5000);
    form.choose_quick_amount(10000);
    assert!(form.is_quick_amount_selected(10000));
    assert!(!form.is_quick_amount_selected(5000));
    assert_eq!(form.submit_label(false), "Donate ₹10,000");
}

#[test]
fn donation_requires_name_unless_anonymous() {
    let mut form = DonationForm { email: "d@legalaid.com".to_owned(), ..DonationForm::default() };
    assert_eq!(form.validate(), Err(FormError::Required("Name")));

    form.anonymous = true;
    let draft = form.validate().expect("anonymous donation");
    assert_eq!(draft.name, None);
    assert_eq!(draft.amount, 1000);
    assert_eq!(draft.kind, DonationKind::OneTime);
}

#[test]
fn donation_rejects_zero_and_garbage_amounts() {
    for bad in ["0", "", "abc", "-5", "12.5"] {
        let form = DonationForm {
            amount: bad.to_owned(),
            name: "N".to_owned(),
            email: "n@legalaid.com".to_owned(),
            ..DonationForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::InvalidAmount), "{bad}");
    }
}

#[test]
fn donation_kind_parses_select_values() {
    assert_eq!(DonationKind::parse("quarterly"), DonationKind::Quarterly);
    assert_eq!(DonationKind::parse("weekly"), DonationKind::OneTime);
}

// =============================================================
// Support request / Forum topic / Comment
// =============================================================

#[test]
fn support_request_requires_category() {
    let form = SupportRequestForm {
        title: "Help".to_owned(),
        description: "Details".to_owned(),
        ..SupportRequestForm::default()
    };
    assert_eq!(form.validate(), Err(FormError::Required("Request type")));
}

#[test]
fn financial_fields_only_apply_to_financial_requests() {
    let mut form = SupportRequestForm {
        title: "Help".to_owned(),
        category: Some(RequestCategory::Legal),
        description: "Details".to_owned(),
        amount: "5000".to_owned(),
        recipient_name: "Someone".to_owned(),
        recipient_relationship: "Self".to_owned(),
    };
    assert!(!form.shows_financial_fields());
    let draft = form.validate().expect("valid");
    assert_eq!(draft.target_amount, None);
    assert_eq!(draft.recipient_name, None);

    form.category = Some(RequestCategory::Financial);
    let draft = form.validate().expect("valid");
    assert_eq!(draft.target_amount, Some(5000));
    assert_eq!(draft.recipient_relationship.as_deref(), Some("Self"));
}

#[test]
fn financial_target_amount_is_optional_but_must_parse() {
    let mut form = SupportRequestForm {
        title: "Help".to_owned(),
        category: Some(RequestCategory::Financial),
        description: "Details".to_owned(),
        ..SupportRequestForm::default()
    };
    assert_eq!(form.validate().map(|d| d.target_amount), Ok(None));
    form.amount = "lots".to_owned();
    assert_eq!(form.validate(), Err(FormError::InvalidAmount));
}

#[test]
fn forum_topic_splits_tags() {
    let form = ForumTopicForm {
        title: "Billing".to_owned(),
        category: Some(ForumCategory::GeneralDiscussion),
        content: "How do you invoice?".to_owned(),
        tags: " billing, , practice management ,".to_owned(),
    };
    let draft = form.validate().expect("valid");
    assert_eq!(draft.tags, vec!["billing".to_owned(), "practice management".to_owned()]);
}

#[test]
fn blank_comment_is_rejected() {
    assert_eq!(validate_comment("   "), Err(FormError::Required("Comment")));
    assert_eq!(validate_comment(" thanks "), Ok("thanks".to_owned()));
}

#[test]
fn submission_guard_allows_one_in_flight() {
    let mut submission = Submission::default();
    assert!(submission.try_begin());
    assert!(submission.is_pending());
    assert!(!submission.try_begin());
    submission.finish();
    assert!(submission.try_begin());
}

#[test]
fn invalid_form_notice_is_destructive() {
    let notice = invalid_form_notice(&FormError::Required("Name"));
    assert!(notice.is_destructive());
    assert_eq!(notice.description.as_deref(), Some("Name is required"));
}
