//! Community forum listing. Pinned topics always lead.

#[cfg(test)]
#[path = "forum_test.rs"]
mod forum_test;

use community::listing::{CategoryFilter, TopicQuery, TopicSort, list_topics};
use community::{ForumCategory, Route};
use leptos::prelude::*;

use crate::components::auth_prompt::JoinPrompt;
use crate::components::forum_topic_card::ForumTopicCard;
use crate::state::Community;
use crate::state::session::{Session, is_authenticated};

pub fn topic_tabs() -> Vec<(CategoryFilter<ForumCategory>, &'static str)> {
    std::iter::once((CategoryFilter::All, "All Topics"))
        .chain(ForumCategory::ALL.into_iter().map(|c| (CategoryFilter::Only(c), c.tab_label())))
        .collect()
}

pub fn empty_message(category: CategoryFilter<ForumCategory>) -> &'static str {
    match category {
        CategoryFilter::All => "No topics found",
        CategoryFilter::Only(_) => "No topics found in this category",
    }
}

#[component]
pub fn ForumPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let community = expect_context::<Community>();
    let source = community.forum_topics();

    let query = RwSignal::new(TopicQuery::default());
    let results = Memo::new(move |_| query.with(|q| list_topics(&source, q)));

    view! {
        <div class="page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"Community Forum"</h1>
                    <p class="page__subtitle">"Discuss legal topics and connect with fellow professionals"</p>
                </div>
                <Show when=move || is_authenticated(session)>
                    <a class="button button--primary" href=Route::NewForumTopic.path()>"Create New Topic"</a>
                </Show>
            </header>

            <div class="toolbar">
                <div class="tabs tabs--scroll">
                    {topic_tabs()
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
                        placeholder="Search topics or tags..."
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                    />
                    <select
                        class="input"
                        aria-label="Sort topics"
                        prop:value=move || query.with(|q| q.sort.value())
                        on:change=move |ev| query.update(|q| q.sort = TopicSort::parse(&event_target_value(&ev)))
                    >
                        {TopicSort::ALL
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
                    </div>
                }
            >
                <div class="stack">
                    <For
                        each=move || results.get()
                        key=|topic| topic.id.clone()
                        children=|topic| view! { <ForumTopicCard topic=topic/> }
                    />
                </div>
            </Show>

            <Show when=move || !is_authenticated(session)>
                <JoinPrompt
                    title="Join the conversation"
                    message="You need to be a registered member to create topics and reply to discussions."
                />
            </Show>
        </div>
    }
}
