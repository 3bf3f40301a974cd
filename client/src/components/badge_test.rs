use super::*;

#[test]
fn every_request_category_has_a_badge() {
    for category in RequestCategory::ALL {
        assert!(request_category_class(category).starts_with("badge "));
    }
    assert_eq!(request_category_class(RequestCategory::Medical), "badge badge--red");
}

#[test]
fn status_badges_distinguish_open_and_closed() {
    assert_ne!(status_class(RequestStatus::Open), status_class(RequestStatus::Closed));
}

#[test]
fn topic_badges_cover_all_categories() {
    for category in ForumCategory::ALL {
        assert!(topic_category_class(category).starts_with("badge "));
    }
}

#[test]
fn progress_style_is_capped() {
    assert_eq!(progress_style(24), "width: 24%");
    assert_eq!(progress_style(140), "width: 100%");
}
