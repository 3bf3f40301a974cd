//! Donation form used by the donate page and the request detail page.
//!
//! DESIGN
//! ======
//! Field state and validation live in `community::forms::DonationForm`; this
//! component binds inputs to it, runs the simulated payment delay, and hands
//! control back to the page through `on_success`.

use community::forms::{
    DEFAULT_DONATION_AMOUNT, DonationForm as DonationFields, DonationKind, QUICK_AMOUNTS, Submission, donation_notice,
    invalid_form_notice,
};
use community::format;
use leptos::prelude::*;

use crate::state::toasts::{ToastState, notify};

#[component]
pub fn DonationForm(
    #[prop(optional, into)] request_title: Option<String>,
    #[prop(default = DEFAULT_DONATION_AMOUNT)] default_amount: u64,
    on_success: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(DonationFields::with_amount(default_amount));
    let submission = RwSignal::new(Submission::default());

    let subtitle = match request_title {
        Some(title) => format!("Support \"{title}\" with your donation"),
        None => "Support the lawyer community with your donation".to_owned(),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.with_untracked(DonationFields::validate) {
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
            community::simulate(&crate::util::delay::TimerDelay, community::latency::DONATION_LATENCY, move || {
                log::info!("donation of {} ({}) processed", draft.amount, draft.kind.value());
            })
            .await;
            submission.update(Submission::finish);
            notify(toasts, donation_notice());
            on_success.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, on_success);
    };

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2 class="panel__title">"Make a Donation"</h2>
                <p class="panel__subtitle">{subtitle}</p>
            </header>
            <form class="form" on:submit=on_submit>
                <div class="field">
                    <label for="amount">"Donation Amount (₹)"</label>
                    <div class="chips">
                        {QUICK_AMOUNTS
                            .into_iter()
                            .map(|amount| {
                                view! {
                                    <button
                                        type="button"
                                        class="chip"
                                        class:chip--active=move || form.with(|f| f.is_quick_amount_selected(amount))
                                        on:click=move |_| form.update(|f| f.choose_quick_amount(amount))
                                    >
                                        {format::rupees_whole(amount)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <input
                        id="amount"
                        class="input input--large"
                        type="number"
                        min="1"
                        required=true
                        prop:value=move || form.with(|f| f.amount.clone())
                        on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="donation-type">"Donation Type"</label>
                    <select
                        id="donation-type"
                        class="input"
                        prop:value=move || form.with(|f| f.kind.value())
                        on:change=move |ev| form.update(|f| f.kind = DonationKind::parse(&event_target_value(&ev)))
                    >
                        {DonationKind::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="field">
                    <label for="donor-name">"Name"</label>
                    <input
                        id="donor-name"
                        class="input"
                        placeholder="Your full name"
                        prop:disabled=move || form.with(|f| f.anonymous)
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="donor-email">"Email"</label>
                    <input
                        id="donor-email"
                        class="input"
                        type="email"
                        required=true
                        placeholder="your.email@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="donor-message">"Message (Optional)"</label>
                    <textarea
                        id="donor-message"
                        class="input"
                        rows="3"
                        placeholder="Leave a message with your donation"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </div>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.anonymous)
                        on:change=move |ev| form.update(|f| f.anonymous = event_target_checked(&ev))
                    />
                    "Make this donation anonymous"
                </label>
                <button
                    class="button button--gold button--block"
                    type="submit"
                    disabled=move || submission.get().is_pending()
                >
                    {move || form.with(|f| f.submit_label(submission.get().is_pending()))}
                </button>
                <p class="form__note">
                    "Your donation helps provide financial security to families of lawyers in need."
                </p>
            </form>
        </section>
    }
}
