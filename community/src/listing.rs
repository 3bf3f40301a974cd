//! Filtered, ordered views over support requests and forum topics.
//!
//! Filtering is a category predicate AND a case-insensitive substring search.
//! Sorting is stable, so ties keep source order. Pinned topics always lead.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::cmp::Ordering;

use crate::model::{ForumCategory, ForumTopic, RequestCategory, SupportRequest};

/// Category predicate: everything, or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq + Copy> CategoryFilter<C> {
    #[must_use]
    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl CategoryFilter<RequestCategory> {
    /// Parse a tab value. `"all"` and unknown values select everything.
    #[must_use]
    pub fn parse_request(raw: &str) -> Self {
        RequestCategory::parse(raw).map_or(Self::All, Self::Only)
    }
}

impl CategoryFilter<ForumCategory> {
    #[must_use]
    pub fn parse_topic(raw: &str) -> Self {
        ForumCategory::parse(raw).map_or(Self::All, Self::Only)
    }
}

// =============================================================================
// SORT MODES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestSort {
    #[default]
    Newest,
    Oldest,
    MostFunded,
    LeastFunded,
}

impl RequestSort {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::MostFunded, Self::LeastFunded];

    /// Select value used by the UI.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::MostFunded => "mostFunded",
            Self::LeastFunded => "leastFunded",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::MostFunded => "Most Funded",
            Self::LeastFunded => "Least Funded",
        }
    }

    /// Unknown values fall back to [`RequestSort::Newest`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopicSort {
    #[default]
    Recent,
    Oldest,
    MostReplies,
    LeastReplies,
}

impl TopicSort {
    pub const ALL: [Self; 4] = [Self::Recent, Self::Oldest, Self::MostReplies, Self::LeastReplies];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Oldest => "oldest",
            Self::MostReplies => "most_replies",
            Self::LeastReplies => "least_replies",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recent => "Most Recent",
            Self::Oldest => "Oldest First",
            Self::MostReplies => "Most Replies",
            Self::LeastReplies => "Least Replies",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == raw).unwrap_or_default()
    }
}

// =============================================================================
// QUERIES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestQuery {
    pub category: CategoryFilter<RequestCategory>,
    pub search: String,
    pub sort: RequestSort,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicQuery {
    pub category: CategoryFilter<ForumCategory>,
    pub search: String,
    pub sort: TopicSort,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Apply `query` to `requests`, returning a new ordered list.
#[must_use]
pub fn list_requests(requests: &[SupportRequest], query: &RequestQuery) -> Vec<SupportRequest> {
    let needle = query.search.to_lowercase();
    let mut out: Vec<SupportRequest> = requests
        .iter()
        .filter(|r| query.category.matches(r.category))
        .filter(|r| needle.is_empty() || contains_ci(&r.title, &needle) || contains_ci(&r.description, &needle))
        .cloned()
        .collect();
    out.sort_by(|a, b| compare_requests(a, b, query.sort));
    tracing::debug!(total = requests.len(), shown = out.len(), "filtered support requests");
    out
}

fn compare_requests(a: &SupportRequest, b: &SupportRequest, sort: RequestSort) -> Ordering {
    match sort {
        RequestSort::Newest => b.created_at.cmp(&a.created_at),
        RequestSort::Oldest => a.created_at.cmp(&b.created_at),
        RequestSort::MostFunded => compare_funding(a.donations_received, b.donations_received, true),
        RequestSort::LeastFunded => compare_funding(a.donations_received, b.donations_received, false),
    }
}

/// Requests without a donation total sort after funded ones in both directions.
fn compare_funding(a: Option<u64>, b: Option<u64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Apply `query` to `topics`, returning a new ordered list with pinned topics first.
#[must_use]
pub fn list_topics(topics: &[ForumTopic], query: &TopicQuery) -> Vec<ForumTopic> {
    let needle = query.search.to_lowercase();
    let mut out: Vec<ForumTopic> = topics
        .iter()
        .filter(|t| query.category.matches(t.category))
        .filter(|t| needle.is_empty() || contains_ci(&t.title, &needle) || t.tags.iter().any(|tag| contains_ci(tag, &needle)))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.is_pinned.cmp(&a.is_pinned).then_with(|| compare_topics(a, b, query.sort)));
    tracing::debug!(total = topics.len(), shown = out.len(), "filtered forum topics");
    out
}

fn compare_topics(a: &ForumTopic, b: &ForumTopic, sort: TopicSort) -> Ordering {
    match sort {
        TopicSort::Recent => b.created_at.cmp(&a.created_at),
        TopicSort::Oldest => a.created_at.cmp(&b.created_at),
        TopicSort::MostReplies => b.reply_count.cmp(&a.reply_count),
        TopicSort::LeastReplies => a.reply_count.cmp(&b.reply_count),
    }
}
