use super::*;
use crate::seed;

fn request_ids(requests: &[SupportRequest]) -> Vec<&str> {
    requests.iter().map(|r| r.id.as_str()).collect()
}

fn topic_ids(topics: &[ForumTopic]) -> Vec<&str> {
    topics.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// Support requests
// =============================================================

#[test]
fn all_category_with_empty_search_returns_everything_newest_first() {
    let out = list_requests(&seed::support_requests(), &RequestQuery::default());
    assert_eq!(request_ids(&out), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn specific_category_returns_matching_subset() {
    let source = seed::support_requests();
    let query = RequestQuery { category: CategoryFilter::parse_request("medical"), ..RequestQuery::default() };
    let out = list_requests(&source, &query);
    assert_eq!(request_ids(&out), vec!["2", "5"]);
    assert!(out.iter().all(|r| r.category == RequestCategory::Medical));
}

#[test]
fn category_and_search_are_conjunctive() {
    let source = seed::support_requests();
    let all = list_requests(&source, &RequestQuery { search: "FAMILY".to_owned(), ..RequestQuery::default() });
    let financial = list_requests(
        &source,
        &RequestQuery {
            category: CategoryFilter::Only(RequestCategory::Financial),
            search: "family".to_owned(),
            ..RequestQuery::default()
        },
    );
    assert!(financial.len() <= all.len());
    assert!(financial.iter().all(|r| r.category == RequestCategory::Financial));
    assert!(financial.iter().all(|r| all.contains(r)));
    assert_eq!(request_ids(&financial), vec!["1", "4"]);
}

#[test]
fn search_matches_description_text() {
    let query = RequestQuery { search: "heart surgery".to_owned(), ..RequestQuery::default() };
    let out = list_requests(&seed::support_requests(), &query);
    assert_eq!(request_ids(&out), vec!["5"]);
}

#[test]
fn oldest_sort_reverses_dates() {
    let query = RequestQuery { sort: RequestSort::Oldest, ..RequestQuery::default() };
    let out = list_requests(&seed::support_requests(), &query);
    assert_eq!(request_ids(&out), vec!["6", "5", "4", "3", "2", "1"]);
}

#[test]
fn funding_sorts_place_unfunded_requests_last() {
    let source = seed::support_requests();
    let most = list_requests(&source, &RequestQuery { sort: RequestSort::MostFunded, ..RequestQuery::default() });
    assert_eq!(request_ids(&most), vec!["5", "4", "1", "2", "6", "3"]);

    let least = list_requests(&source, &RequestQuery { sort: RequestSort::LeastFunded, ..RequestQuery::default() });
    assert_eq!(request_ids(&least), vec!["6", "2", "1", "4", "5", "3"]);
}

#[test]
fn sort_values_parse_with_default_fallback() {
    assert_eq!(RequestSort::parse("mostFunded"), RequestSort::MostFunded);
    assert_eq!(RequestSort::parse("bogus"), RequestSort::Newest);
    assert_eq!(TopicSort::parse("least_replies"), TopicSort::LeastReplies);
    assert_eq!(TopicSort::parse(""), TopicSort::Recent);
}

#[test]
fn unknown_category_value_selects_all() {
    assert_eq!(CategoryFilter::parse_request("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse_topic("everything"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse_topic("events"), CategoryFilter::Only(ForumCategory::Events));
}

// =============================================================
// Forum topics
// =============================================================

#[test]
fn bar_council_search_matches_pinned_topic() {
    let query = TopicQuery { search: "bar council".to_owned(), ..TopicQuery::default() };
    let out = list_topics(&seed::forum_topics(), &query);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Discussion on the new Bar Council regulations");
    assert!(out[0].is_pinned);
}

#[test]
fn tag_search_is_case_insensitive() {
    let query = TopicQuery { search: "Corporate LAW".to_owned(), ..TopicQuery::default() };
    let out = list_topics(&seed::forum_topics(), &query);
    assert_eq!(topic_ids(&out), vec!["6"]);
}

#[test]
fn pinned_topics_lead_for_every_sort_mode() {
    let mut source = seed::forum_topics();
    // Pin a second, older topic so the invariant is exercised with more than one.
    source[6].is_pinned = true;

    for sort in TopicSort::ALL {
        let out = list_topics(&source, &TopicQuery { sort, ..TopicQuery::default() });
        let first_unpinned = out.iter().position(|t| !t.is_pinned).expect("unpinned topics");
        assert_eq!(first_unpinned, 2, "sort {sort:?}");
        assert!(out[first_unpinned..].iter().all(|t| !t.is_pinned), "sort {sort:?}");
    }
}

#[test]
fn reply_sorts_order_unpinned_topics() {
    let source = seed::forum_topics();
    let most = list_topics(&source, &TopicQuery { sort: TopicSort::MostReplies, ..TopicQuery::default() });
    assert_eq!(topic_ids(&most), vec!["1", "5", "2", "8", "6", "7", "3", "4"]);

    let least = list_topics(&source, &TopicQuery { sort: TopicSort::LeastReplies, ..TopicQuery::default() });
    assert_eq!(topic_ids(&least), vec!["1", "4", "3", "7", "6", "8", "2", "5"]);
}

#[test]
fn category_filter_keeps_pinned_ordering() {
    let query = TopicQuery {
        category: CategoryFilter::Only(ForumCategory::Announcements),
        sort: TopicSort::Oldest,
        ..TopicQuery::default()
    };
    let out = list_topics(&seed::forum_topics(), &query);
    assert_eq!(topic_ids(&out), vec!["1", "8"]);
}
