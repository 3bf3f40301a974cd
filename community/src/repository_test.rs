use super::*;
use crate::model::RequestCategory;

#[test]
fn mock_serves_seeded_collections() {
    let repo = MockCommunity::new();
    assert_eq!(repo.support_requests().len(), 6);
    assert_eq!(repo.forum_topics().len(), 8);
}

#[test]
fn support_request_lookup_by_id() {
    let repo = MockCommunity::new();
    let request = repo.support_request("1").expect("request 1");
    assert_eq!(request.category, RequestCategory::Financial);
    assert_eq!(request.recipient_name.as_deref(), Some("Mrs. Sunita Kumar"));
    assert_eq!(request.paragraphs().len(), 4);
    assert!(repo.support_request("99").is_none());
}

#[test]
fn comments_and_donations_are_scoped_to_request() {
    let repo = MockCommunity::new();
    assert_eq!(repo.comments_for("1").len(), 2);
    assert_eq!(repo.donations_for("1").len(), 3);
    assert!(repo.comments_for("2").is_empty());
    assert!(repo.donations_for("2").is_empty());
}

#[test]
fn exactly_one_topic_is_pinned() {
    let repo = MockCommunity::new();
    let pinned: Vec<_> = repo.forum_topics().into_iter().filter(|t| t.is_pinned).collect();
    assert_eq!(pinned.len(), 1);
    assert_eq!(pinned[0].title, "Discussion on the new Bar Council regulations");
}
