//! Card summarizing one support request in listings and previews.

use community::{RequestCategory, Route, SupportRequest, format};
use leptos::prelude::*;

use crate::components::badge::{ProgressBar, request_category_class, status_class};

/// A support request card. Previews link to the detail page and clamp the
/// description; the full variant offers the support button instead.
#[component]
pub fn SupportRequestCard(request: SupportRequest, #[prop(optional)] preview: bool) -> impl IntoView {
    let href = Route::SupportRequestDetail(request.id.clone()).path();
    let posted = format!(
        "Posted by {} · {}",
        request.created_by.name,
        format::relative_time(request.created_at, time::OffsetDateTime::now_utc())
    );
    let progress = request.funding().map(|(received, goal)| {
        let percent = format::progress_percent(received, goal);
        view! {
            <div class="card__progress">
                <div class="card__progress-label">
                    <span>"Donation Progress"</span>
                    <span>
                        {format!("{} of {} ({percent}%)", format::rupees(received), format::rupees(goal))}
                    </span>
                </div>
                <ProgressBar percent=percent/>
            </div>
        }
    });
    let is_financial = request.category == RequestCategory::Financial;

    view! {
        <article class="card">
            <header class="card__header">
                <div class="card__badges">
                    <span class=request_category_class(request.category)>{request.category.label()}</span>
                    <span class=status_class(request.status)>{request.status.label()}</span>
                </div>
                <h3 class="card__title" class:card__title--small=preview>
                    {if preview {
                        view! { <a href=href.clone()>{request.title.clone()}</a> }.into_any()
                    } else {
                        request.title.clone().into_any()
                    }}
                </h3>
                <p class="card__meta">{posted}</p>
            </header>
            <div class="card__body">
                <p class="card__description" class:card__description--clamped=preview>{request.description}</p>
                {progress}
            </div>
            <footer class="card__footer">
                {if preview {
                    view! { <a class="button button--outline button--block" href=href>"View Details"</a> }.into_any()
                } else if is_financial {
                    view! { <a class="button button--gold button--block" href=href>"Support This Request"</a> }.into_any()
                } else {
                    ().into_any()
                }}
            </footer>
        </article>
    }
}
