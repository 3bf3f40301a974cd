use community::{ForumTopic, format};
use leptos::prelude::*;

use crate::components::badge::topic_category_class;

/// Forum topic summary with reply count, tags, and the latest reply.
#[component]
pub fn ForumTopicCard(topic: ForumTopic) -> impl IntoView {
    let now = time::OffsetDateTime::now_utc();
    let started = format!("Started by {} · {}", topic.created_by.name, format::relative_time(topic.created_at, now));
    let last_reply = match topic.last_reply {
        Some(reply) => view! {
            <span>
                "Last reply by "
                <strong>{reply.author_name}</strong>
                {format!(" {}", format::relative_time(reply.created_at, now))}
            </span>
        }
        .into_any(),
        None => view! { <span>"No replies yet"</span> }.into_any(),
    };
    let tags = (!topic.tags.is_empty()).then(|| {
        view! {
            <div class="tags">
                {topic.tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
        }
    });

    view! {
        <article class="card card--topic">
            <header class="card__header">
                <div class="card__badges">
                    <span class=topic_category_class(topic.category)>{topic.category.label()}</span>
                    <span class="card__replies" title="Replies">{format!("💬 {}", topic.reply_count)}</span>
                </div>
                <h3 class="card__title card__title--small">
                    {topic.is_pinned.then(|| view! { <span class="pinned">"PINNED"</span> })}
                    {topic.title}
                </h3>
                <p class="card__meta">{started}</p>
            </header>
            <div class="card__body">{tags}</div>
            <footer class="card__footer card__footer--muted">{last_reply}</footer>
        </article>
    }
}
