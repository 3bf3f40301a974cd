//! Support request listing with category tabs, search, and sort.

#[cfg(test)]
#[path = "support_requests_test.rs"]
mod support_requests_test;

use community::listing::{CategoryFilter, RequestQuery, RequestSort, list_requests};
use community::{RequestCategory, Route};
use leptos::prelude::*;

use crate::components::auth_prompt::JoinPrompt;
use crate::components::support_request_card::SupportRequestCard;
use crate::state::Community;
use crate::state::session::{Session, is_authenticated};

/// Category tabs in display order.
pub fn request_tabs() -> Vec<(CategoryFilter<RequestCategory>, &'static str)> {
    std::iter::once((CategoryFilter::All, "All Requests"))
        .chain(RequestCategory::ALL.into_iter().map(|c| (CategoryFilter::Only(c), c.label())))
        .collect()
}

/// Headline shown when the filtered list is empty.
pub fn empty_message(category: CategoryFilter<RequestCategory>) -> String {
    match category {
        CategoryFilter::All => "No support requests found".to_owned(),
        CategoryFilter::Only(c) => format!("No {} support requests found", c.label().to_lowercase()),
    }
}

#[component]
pub fn SupportRequestsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let community = expect_context::<Community>();
    let source = community.support_requests();

    let query = RwSignal::new(RequestQuery::default());
    let results = Memo::new(move |_| query.with(|q| list_requests(&source, q)));

    view! {
        <div class="page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"Support Requests"</h1>
                    <p class="page__subtitle">"Browse current requests for support from the legal community"</p>
                </div>
                <Show when=move || is_authenticated(session)>
                    <a class="button button--primary" href=Route::NewSupportRequest.path()>"Create Support Request"</a>
                </Show>
            </header>

            <div class="toolbar">
                <div class="tabs">
                    {request_tabs()
                        .into_iter()
                        .map(|(filter, label)| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || query.with(|q| q.category == filter)
                                    on:click=move |_| query.update(|q| q.category = filter)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="toolbar__controls">
                    <input
                        class="input"
                        type="search"
                        placeholder="Search requests..."
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                    />
                    <select
                        class="input"
                        aria-label="Sort requests"
                        prop:value=move || query.with(|q| q.sort.value())
                        on:change=move |ev| query.update(|q| q.sort = RequestSort::parse(&event_target_value(&ev)))
                    >
                        {RequestSort::ALL
                            .into_iter()
                            .map(|sort| view! { <option value=sort.value()>{sort.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <h3>{move || query.with(|q| empty_message(q.category))}</h3>
                        <p>"Try adjusting your search or filters"</p>
                    </div>
                }
            >
                <div class="grid grid--two">
                    <For
                        each=move || results.get()
                        key=|request| request.id.clone()
                        children=|request| view! { <SupportRequestCard request=request/> }
                    />
                </div>
            </Show>

            <Show when=move || !is_authenticated(session)>
                <JoinPrompt
                    title="Want to create a support request?"
                    message="You need to be a registered member to submit a support request."
                />
            </Show>
        </div>
    }
}
