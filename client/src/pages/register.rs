//! Member registration page.

use community::Route;
use community::forms::{LEGAL_SPECIALIZATIONS, RegisterForm, Submission};
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::state::toasts::ToastState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let submission = RwSignal::new(Submission::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = match form.with_untracked(RegisterForm::validate) {
            Ok(data) => data,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        if !submission.try_update(Submission::try_begin).unwrap_or(false) {
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            session.update(crate::state::session::Session::begin_request);
            leptos::task::spawn_local(async move {
                let outcome = community::simulate(
                    &crate::util::delay::TimerDelay,
                    community::latency::REGISTER_LATENCY,
                    move || crate::state::session::apply(session, |s| s.register(data)),
                )
                .await;
                submission.update(Submission::finish);
                crate::state::toasts::notify(toasts, community::session::register_notice(&outcome));
                match outcome {
                    Ok(_) => navigate(&Route::Home.path(), NavigateOptions::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (data, session, toasts, &navigate);
    };

    view! {
        <div class="page page--narrow">
            <section class="panel">
                <header class="panel__header panel__header--center">
                    <h1 class="panel__title">"Register"</h1>
                    <p class="panel__subtitle">"Create an account to join our legal community"</p>
                </header>
                <form class="form" on:submit=on_submit>
                    {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
                    <div class="field">
                        <label for="name">"Full Name"</label>
                        <input
                            id="name"
                            class="input"
                            required=true
                            autofocus=true
                            placeholder="Adv. Full Name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            class="input"
                            type="email"
                            required=true
                            placeholder="your.email@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            class="input"
                            type="password"
                            required=true
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="confirm-password">"Confirm Password"</label>
                        <input
                            id="confirm-password"
                            class="input"
                            type="password"
                            required=true
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="specialization">"Legal Specialization"</label>
                        <select
                            id="specialization"
                            class="input"
                            prop:value=move || form.with(|f| f.specialization.clone())
                            on:change=move |ev| form.update(|f| f.specialization = event_target_value(&ev))
                        >
                            <option value="">"Select specialization"</option>
                            {LEGAL_SPECIALIZATIONS
                                .into_iter()
                                .map(|s| view! { <option value=s>{s}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="field">
                        <label for="bar-number">"Bar Council Number"</label>
                        <input
                            id="bar-number"
                            class="input"
                            placeholder="e.g. MH/1234/2010"
                            prop:value=move || form.with(|f| f.bar_number.clone())
                            on:input=move |ev| form.update(|f| f.bar_number = event_target_value(&ev))
                        />
                    </div>
                    <button
                        class="button button--primary button--block"
                        type="submit"
                        disabled=move || submission.get().is_pending()
                    >
                        {move || if submission.get().is_pending() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
                <footer class="panel__footer">
                    <p>"Already have an account? " <a href=Route::Login.path()>"Sign in"</a></p>
                </footer>
            </section>
        </div>
    }
}
