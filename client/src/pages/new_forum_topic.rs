//! Member-only page for starting a forum discussion.

use community::{ForumCategory, Route};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_prompt::MemberOnly;
use crate::components::badge::topic_category_class;
use crate::components::new_forum_topic_form::NewForumTopicForm;

const GUIDELINES: [&str; 5] = [
    "Be respectful and professional in all discussions.",
    "Stay on topic and pick the category that fits best.",
    "Do not share confidential client information.",
    "Cite sources when discussing laws, judgments, or regulations.",
    "Use tags so other members can find your topic.",
];

#[component]
pub fn NewForumTopicPage() -> impl IntoView {
    view! {
        <MemberOnly message="You need to be logged in to create forum topics. Please login or register to continue.">
            <NewForumTopicContent/>
        </MemberOnly>
    }
}

#[component]
fn NewForumTopicContent() -> impl IntoView {
    let navigate = use_navigate();
    let submitted = RwSignal::new(false);
    Effect::new(move || {
        if submitted.get() {
            navigate(&Route::Forum.path(), NavigateOptions::default());
        }
    });
    let on_success = Callback::new(move |()| submitted.set(true));

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Create New Topic"</h1>
                <p class="page__subtitle">"Start a new discussion in the community forum"</p>
            </header>
            <div class="layout-sidebar">
                <NewForumTopicForm on_success=on_success/>
                <aside class="stack">
                    <section class="panel">
                        <h2 class="panel__title">"Forum Guidelines"</h2>
                        <ul class="bullet-list">
                            {GUIDELINES.into_iter().map(|g| view! { <li>{g}</li> }).collect_view()}
                        </ul>
                    </section>
                    <section class="panel">
                        <h2 class="panel__title">"Popular Categories"</h2>
                        <div class="tags">
                            {ForumCategory::ALL
                                .into_iter()
                                .map(|c| view! { <span class=topic_category_class(c)>{c.label()}</span> })
                                .collect_view()}
                        </div>
                    </section>
                </aside>
            </div>
        </div>
    }
}
