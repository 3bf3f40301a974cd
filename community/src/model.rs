//! Community data model.
//!
//! DESIGN
//! ======
//! `User` mirrors the JSON record persisted in browser storage, so its serde
//! shape (camelCase keys, optional fields omitted) is part of the external
//! interface. Content types (`SupportRequest`, `ForumTopic`, `Donation`,
//! `Comment`) are read-only views served by the repositories.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// USERS
// =============================================================================

/// The acting identity of a session. Never carries a password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_number: Option<String>,
    /// Years of practice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Merge the present fields of `update` into this record.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(specialization) = update.specialization {
            self.specialization = specialization;
        }
        if let Some(bar_number) = update.bar_number {
            self.bar_number = bar_number;
        }
        if let Some(experience) = update.experience {
            self.experience = Some(experience);
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(profile_image) = update.profile_image {
            self.profile_image = profile_image;
        }
    }
}

/// A user record paired with its login secret. Only credential repositories
/// hold these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub user: User,
    pub password: String,
}

/// Fields collected by the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub specialization: Option<String>,
    pub bar_number: Option<String>,
}

/// Partial profile edit. An outer `None` leaves the current value untouched;
/// `Some(None)` clears an optional field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub specialization: Option<Option<String>>,
    pub bar_number: Option<Option<String>>,
    pub experience: Option<u32>,
    pub location: Option<Option<String>>,
    pub profile_image: Option<Option<String>>,
}

/// Reference to the member who authored a piece of content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Author {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), image: None }
    }
}

// =============================================================================
// SUPPORT REQUESTS
// =============================================================================

/// Kind of assistance a support request asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestCategory {
    Financial,
    Legal,
    Medical,
    Other,
}

impl RequestCategory {
    pub const ALL: [Self; 4] = [Self::Financial, Self::Medical, Self::Legal, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::Legal => "Legal",
            Self::Medical => "Medical",
            Self::Other => "Other",
        }
    }

    /// Longer label used by the new-request form select.
    #[must_use]
    pub fn form_label(self) -> &'static str {
        match self {
            Self::Financial => "Financial Support",
            Self::Legal => "Legal Assistance",
            Self::Medical => "Medical Support",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup by label.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Lifecycle of a support request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Closed,
}

impl RequestStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Closed => "Closed",
        }
    }
}

/// A community-visible ask for assistance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportRequest {
    pub id: String,
    pub title: String,
    pub category: RequestCategory,
    pub description: String,
    pub created_by: Author,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    pub status: RequestStatus,
    /// Rupees donated so far.
    pub donations_received: Option<u64>,
    /// Rupees requested in total.
    pub donations_goal: Option<u64>,
    pub recipient_name: Option<String>,
    pub recipient_relationship: Option<String>,
}

impl SupportRequest {
    /// Donation totals, present only for financial requests with a goal.
    #[must_use]
    pub fn funding(&self) -> Option<(u64, u64)> {
        if self.category != RequestCategory::Financial {
            return None;
        }
        match (self.donations_received, self.donations_goal) {
            (Some(received), Some(goal)) if goal > 0 => Some((received, goal)),
            _ => None,
        }
    }

    /// Description split into display paragraphs on blank lines.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&str> {
        self.description.split("\n\n").map(str::trim).filter(|p| !p.is_empty()).collect()
    }
}

/// A monetary contribution to a support request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub amount: u64,
    pub message: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub created_by: Author,
    pub is_anonymous: bool,
}

impl Donation {
    /// Name to show for the donor, hiding anonymous donors.
    #[must_use]
    pub fn donor_name(&self) -> &str {
        if self.is_anonymous { "Anonymous" } else { &self.created_by.name }
    }
}

/// A comment left on a support request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub created_by: Author,
}

// =============================================================================
// FORUM
// =============================================================================

/// Forum board a topic is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForumCategory {
    #[serde(rename = "General Discussion")]
    GeneralDiscussion,
    #[serde(rename = "Legal Advice")]
    LegalAdvice,
    Career,
    #[serde(rename = "Court Proceedings")]
    CourtProceedings,
    Events,
    Announcements,
}

impl ForumCategory {
    pub const ALL: [Self; 6] = [
        Self::GeneralDiscussion,
        Self::LegalAdvice,
        Self::Career,
        Self::CourtProceedings,
        Self::Events,
        Self::Announcements,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralDiscussion => "General Discussion",
            Self::LegalAdvice => "Legal Advice",
            Self::Career => "Career",
            Self::CourtProceedings => "Court Proceedings",
            Self::Events => "Events",
            Self::Announcements => "Announcements",
        }
    }

    /// Short tab label.
    #[must_use]
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::GeneralDiscussion => "General",
            other => other.label(),
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Summary of the latest reply in a topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastReply {
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub author_name: String,
}

/// A discussion thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub id: String,
    pub title: String,
    pub category: ForumCategory,
    pub created_by: Author,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub reply_count: u32,
    pub last_reply: Option<LastReply>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}
