//! Badge and progress-bar helpers shared by cards and the detail page.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use community::{ForumCategory, RequestCategory, RequestStatus};
use leptos::prelude::*;

pub fn request_category_class(category: RequestCategory) -> &'static str {
    match category {
        RequestCategory::Financial => "badge badge--gold",
        RequestCategory::Legal => "badge badge--blue",
        RequestCategory::Medical => "badge badge--red",
        RequestCategory::Other => "badge badge--purple",
    }
}

pub fn status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Open => "badge badge--green",
        RequestStatus::InProgress => "badge badge--blue",
        RequestStatus::Completed => "badge badge--purple",
        RequestStatus::Closed => "badge badge--gray",
    }
}

pub fn topic_category_class(category: ForumCategory) -> &'static str {
    match category {
        ForumCategory::GeneralDiscussion => "badge badge--gray",
        ForumCategory::LegalAdvice => "badge badge--blue",
        ForumCategory::Career => "badge badge--green",
        ForumCategory::CourtProceedings => "badge badge--red",
        ForumCategory::Events => "badge badge--gold",
        ForumCategory::Announcements => "badge badge--purple",
    }
}

/// Inline width style for a progress fill.
pub fn progress_style(percent: u64) -> String {
    format!("width: {}%", percent.min(100))
}

#[component]
pub fn ProgressBar(percent: u64) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress__fill" style=progress_style(percent)></div>
        </div>
    }
}
