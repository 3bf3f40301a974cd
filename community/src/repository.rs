//! Read access to community content.
//!
//! ARCHITECTURE
//! ============
//! Pages depend on `CommunityRepository` rather than on the seed arrays, so a
//! networked implementation can replace `MockCommunity` without touching
//! presentation code.

#[cfg(test)]
#[path = "repository_test.rs"]
mod repository_test;

use crate::model::{Comment, Donation, ForumTopic, SupportRequest};
use crate::seed;

pub trait CommunityRepository {
    fn support_requests(&self) -> Vec<SupportRequest>;
    fn support_request(&self, id: &str) -> Option<SupportRequest>;
    fn comments_for(&self, request_id: &str) -> Vec<Comment>;
    fn donations_for(&self, request_id: &str) -> Vec<Donation>;
    fn forum_topics(&self) -> Vec<ForumTopic>;
}

/// Serves the fixed sample content.
#[derive(Clone, Debug)]
pub struct MockCommunity {
    requests: Vec<SupportRequest>,
    comments: Vec<(String, Comment)>,
    donations: Vec<(String, Donation)>,
    topics: Vec<ForumTopic>,
}

impl MockCommunity {
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests: seed::support_requests(),
            comments: seed::comments(),
            donations: seed::donations(),
            topics: seed::forum_topics(),
        }
    }
}

impl Default for MockCommunity {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityRepository for MockCommunity {
    fn support_requests(&self) -> Vec<SupportRequest> {
        self.requests.clone()
    }

    fn support_request(&self, id: &str) -> Option<SupportRequest> {
        self.requests.iter().find(|r| r.id == id).cloned()
    }

    fn comments_for(&self, request_id: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|(owner, _)| owner == request_id)
            .map(|(_, c)| c.clone())
            .collect()
    }

    fn donations_for(&self, request_id: &str) -> Vec<Donation> {
        self.donations
            .iter()
            .filter(|(owner, _)| owner == request_id)
            .map(|(_, d)| d.clone())
            .collect()
    }

    fn forum_topics(&self) -> Vec<ForumTopic> {
        self.topics.clone()
    }
}
