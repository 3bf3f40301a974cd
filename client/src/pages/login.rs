//! Sign-in page against the demo credential list.

use community::Route;
use community::forms::{LoginForm, Submission};
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::state::toasts::ToastState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let error = RwSignal::new(None::<String>);
    let submission = RwSignal::new(Submission::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = match form.with_untracked(LoginForm::validate) {
            Ok(fields) => fields,
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
                    community::latency::LOGIN_LATENCY,
                    move || crate::state::session::apply(session, |s| s.authenticate(&email, &password)),
                )
                .await;
                submission.update(Submission::finish);
                crate::state::toasts::notify(toasts, community::session::login_notice(&outcome));
                match outcome {
                    Ok(_) => navigate(&Route::Home.path(), NavigateOptions::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email, password, session, toasts, &navigate);
    };

    view! {
        <div class="page page--narrow">
            <section class="panel">
                <header class="panel__header panel__header--center">
                    <h1 class="panel__title">"Sign in"</h1>
                    <p class="panel__subtitle">"Enter your credentials to access your account"</p>
                </header>
                <form class="form" on:submit=on_submit>
                    {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
                    <div class="field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            class="input"
                            type="email"
                            required=true
                            autofocus=true
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
                    <button
                        class="button button--primary button--block"
                        type="submit"
                        disabled=move || submission.get().is_pending()
                    >
                        {move || if submission.get().is_pending() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <footer class="panel__footer">
                    <p>"Don't have an account? " <a href=Route::Register.path()>"Register here"</a></p>
                    <div class="demo-accounts">
                        <p>"For testing, use:"</p>
                        <p>"Admin: admin@legalaid.com / admin123"</p>
                        <p>"Lawyer: lawyer@legalaid.com / lawyer123"</p>
                    </div>
                </footer>
            </section>
        </div>
    }
}
