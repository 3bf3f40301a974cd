use super::*;

#[test]
fn parse_and_path_agree() {
    let routes = [
        Route::Home,
        Route::About,
        Route::Login,
        Route::Register,
        Route::Profile,
        Route::SupportRequests,
        Route::NewSupportRequest,
        Route::SupportRequestDetail("3".to_owned()),
        Route::Forum,
        Route::NewForumTopic,
        Route::Donate,
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.path()), route);
    }
}

#[test]
fn new_is_not_a_request_id() {
    assert_eq!(Route::parse("/support-requests/new"), Route::NewSupportRequest);
    assert_eq!(Route::parse("/support-requests/42/"), Route::SupportRequestDetail("42".to_owned()));
}

#[test]
fn query_strings_are_ignored() {
    assert_eq!(Route::parse("/forum?sort=oldest"), Route::Forum);
    assert_eq!(Route::parse(""), Route::Home);
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(Route::parse("/admin"), Route::NotFound);
    assert_eq!(Route::parse("/forum/1/replies"), Route::NotFound);
}

#[test]
fn only_authoring_pages_require_auth() {
    assert!(Route::Profile.requires_auth());
    assert!(Route::NewSupportRequest.requires_auth());
    assert!(Route::NewForumTopic.requires_auth());
    assert!(!Route::SupportRequests.requires_auth());
    assert!(!Route::Donate.requires_auth());
    assert!(!Route::SupportRequestDetail("1".to_owned()).requires_auth());
}
