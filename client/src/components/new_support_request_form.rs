use community::forms::{
    RECIPIENT_RELATIONSHIPS, Submission, SupportRequestForm, invalid_form_notice, support_request_notice,
};
use community::RequestCategory;
use leptos::prelude::*;

use crate::state::toasts::{ToastState, notify};

/// Form for filing a new support request. Financial requests reveal the
/// target amount and recipient fields.
#[component]
pub fn NewSupportRequestForm(on_success: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(SupportRequestForm::default());
    let submission = RwSignal::new(Submission::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.with_untracked(SupportRequestForm::validate) {
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
                community::latency::SUPPORT_REQUEST_LATENCY,
                move || log::info!("support request \"{}\" ({}) submitted", draft.title, draft.category.label()),
            )
            .await;
            submission.update(Submission::finish);
            notify(toasts, support_request_notice());
            on_success.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, on_success);
    };

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2 class="panel__title">"Submit Support Request"</h2>
                <p class="panel__subtitle">"Create a new request for support from the legal community"</p>
            </header>
            <form class="form" on:submit=on_submit>
                <div class="field">
                    <label for="title">"Request Title"</label>
                    <input
                        id="title"
                        class="input"
                        required=true
                        placeholder="E.g., Support for family of Adv. Rajesh Kumar"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="request-type">"Request Type"</label>
                    <select
                        id="request-type"
                        class="input"
                        required=true
                        on:change=move |ev| form.update(|f| f.category = RequestCategory::parse(&event_target_value(&ev)))
                    >
                        <option value="" selected=true>"Select type of support needed"</option>
                        {RequestCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.label()>{c.form_label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="field">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="input"
                        rows="5"
                        required=true
                        placeholder="Please provide details about the support needed..."
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <Show when=move || form.with(SupportRequestForm::shows_financial_fields)>
                    <div class="field">
                        <label for="amount">"Target Amount (₹)"</label>
                        <input
                            id="amount"
                            class="input"
                            type="number"
                            placeholder="Amount needed (in INR)"
                            prop:value=move || form.with(|f| f.amount.clone())
                            on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="recipient-name">"Recipient Name"</label>
                        <input
                            id="recipient-name"
                            class="input"
                            placeholder="Name of the person/family receiving support"
                            prop:value=move || form.with(|f| f.recipient_name.clone())
                            on:input=move |ev| form.update(|f| f.recipient_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="recipient-relationship">"Relationship to Requester"</label>
                        <select
                            id="recipient-relationship"
                            class="input"
                            prop:value=move || form.with(|f| f.recipient_relationship.clone())
                            on:change=move |ev| form.update(|f| f.recipient_relationship = event_target_value(&ev))
                        >
                            <option value="">"Select relationship"</option>
                            {RECIPIENT_RELATIONSHIPS
                                .into_iter()
                                .map(|r| view! { <option value=r>{r}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </Show>
                <div class="form__actions">
                    <button class="button button--primary" type="submit" disabled=move || submission.get().is_pending()>
                        {move || if submission.get().is_pending() { "Submitting..." } else { "Submit Request" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
