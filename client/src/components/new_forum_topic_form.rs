use community::ForumCategory;
use community::forms::{ForumTopicForm, Submission, forum_topic_notice, invalid_form_notice};
use leptos::prelude::*;

use crate::state::toasts::{ToastState, notify};

#[component]
pub fn NewForumTopicForm(on_success: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ForumTopicForm::default());
    let submission = RwSignal::new(Submission::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.with_untracked(ForumTopicForm::validate) {
            Ok(draft) => draft,
            Err(e) => {
                notify(toasts, invalid_form_notice(&e));
                return;
            }
        };
        if !submission.try_update(Submission::try_begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            community::simulate(
                &crate::util::delay::TimerDelay,
                community::latency::FORUM_TOPIC_LATENCY,
                move || log::info!("forum topic \"{}\" created with {} tags", draft.title, draft.tags.len()),
            )
            .await;
            submission.update(Submission::finish);
            notify(toasts, forum_topic_notice());
            on_success.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, on_success);
    };

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2 class="panel__title">"Create New Topic"</h2>
                <p class="panel__subtitle">"Start a new discussion in the community forum"</p>
            </header>
            <form class="form" on:submit=on_submit>
                <div class="field">
                    <label for="topic-title">"Topic Title"</label>
                    <input
                        id="topic-title"
                        class="input"
                        required=true
                        placeholder="Enter a clear, specific title for your topic"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="topic-category">"Category"</label>
                    <select
                        id="topic-category"
                        class="input"
                        required=true
                        on:change=move |ev| form.update(|f| f.category = ForumCategory::parse(&event_target_value(&ev)))
                    >
                        <option value="" selected=true>"Select a category"</option>
                        {ForumCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="field">
                    <label for="topic-content">"Content"</label>
                    <textarea
                        id="topic-content"
                        class="input"
                        rows="8"
                        required=true
                        placeholder="Provide details of your discussion topic..."
                        prop:value=move || form.with(|f| f.content.clone())
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="field">
                    <label for="topic-tags">"Tags (comma separated)"</label>
                    <input
                        id="topic-tags"
                        class="input"
                        placeholder="E.g., civil, supreme court, property law"
                        prop:value=move || form.with(|f| f.tags.clone())
                        on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev))
                    />
                </div>
                <div class="form__actions">
                    <button class="button button--primary" type="submit" disabled=move || submission.get().is_pending()>
                        {move || if submission.get().is_pending() { "Creating Topic..." } else { "Create Topic" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
