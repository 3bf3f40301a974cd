//! Landing page: hero, feature overview, and previews of recent content.

use community::Route;
use leptos::prelude::*;

use crate::components::forum_topic_card::ForumTopicCard;
use crate::components::support_request_card::SupportRequestCard;
use crate::state::Community;
use crate::state::session::{Session, is_authenticated};

/// Number of requests and topics previewed on the landing page.
const PREVIEW_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let community = expect_context::<Community>();

    let recent_requests: Vec<_> = community.support_requests().into_iter().take(PREVIEW_COUNT).collect();
    let recent_topics: Vec<_> = community.forum_topics().into_iter().take(PREVIEW_COUNT).collect();

    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__inner">
                    <h1 class="hero__title">"Lawyers Supporting Lawyers"</h1>
                    <p class="hero__lead">
                        "A platform for legal professionals to connect, support, and secure the future of lawyers' families during difficult times."
                    </p>
                    <div class="button-row button-row--center">
                        <Show
                            when=move || is_authenticated(session)
                            fallback=|| view! {
                                <a class="button button--gold button--large" href=Route::Register.path()>
                                    "Join Our Community"
                                </a>
                            }
                        >
                            <a class="button button--gold button--large" href=Route::NewSupportRequest.path()>
                                "Create Support Request"
                            </a>
                        </Show>
                        <a class="button button--outline-light button--large" href=Route::SupportRequests.path()>
                            "View Support Requests"
                        </a>
                    </div>
                </div>
            </section>

            <section class="section">
                <h2 class="section__title section__title--center">"How We Support the Legal Community"</h2>
                <div class="grid grid--three">
                    <FeatureCard
                        title="Financial Support"
                        body="Providing financial assistance to families of lawyers who have passed away or are facing serious medical challenges."
                    />
                    <FeatureCard
                        title="Community Forum"
                        body="Connect with fellow legal professionals, share knowledge, and discuss important topics in the legal field."
                    />
                    <FeatureCard
                        title="Legal Aid"
                        body="Access to legal assistance and resources for lawyers and their families during challenging times."
                    />
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"Recent Support Requests"</h2>
                    <a class="button button--outline" href=Route::SupportRequests.path()>"View All Requests"</a>
                </div>
                <div class="grid grid--three">
                    {recent_requests
                        .into_iter()
                        .map(|request| view! { <SupportRequestCard request=request preview=true/> })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Recent Forum Discussions"</h2>
                    <a class="button button--outline" href=Route::Forum.path()>"Visit Forum"</a>
                </div>
                <div class="stack">
                    {recent_topics.into_iter().map(|topic| view! { <ForumTopicCard topic=topic/> }).collect_view()}
                </div>
                <Show when=move || is_authenticated(session)>
                    <div class="button-row button-row--center">
                        <a class="button button--primary" href=Route::NewForumTopic.path()>"Create New Topic"</a>
                    </div>
                </Show>
            </section>

            <section class="cta">
                <h2 class="cta__title">"Make a Difference Today"</h2>
                <p class="cta__body">
                    "Your contribution can help secure the future of a lawyer's family during their most difficult times."
                </p>
                <Show
                    when=move || is_authenticated(session)
                    fallback=|| view! {
                        <a class="button button--gold button--large" href=Route::Login.path()>"Login to Donate"</a>
                    }
                >
                    <a class="button button--gold button--large" href=Route::Donate.path()>"Make a Donation"</a>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <article class="feature">
            <h3 class="feature__title">{title}</h3>
            <p class="feature__body">{body}</p>
        </article>
    }
}
