//! General donation page, open to guests.

use community::Route;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::donation_form::DonationForm;
use crate::state::session::{Session, is_authenticated, is_loading};

const IMPACT: [&str; 4] = [
    "Provides immediate financial relief to families of lawyers who have passed away.",
    "Covers medical expenses for lawyers facing serious illness.",
    "Funds education for children of deceased lawyers.",
    "Supports legal aid for lawyers facing professional hardship.",
];

#[component]
pub fn DonatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let submitted = RwSignal::new(false);
    Effect::new(move || {
        if submitted.get() {
            navigate(&Route::Home.path(), NavigateOptions::default());
        }
    });
    let on_success = Callback::new(move |()| submitted.set(true));

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Make a Donation"</h1>
                <p class="page__subtitle">"Support the lawyer community with your contribution"</p>
            </header>
            <Show when=move || !is_loading(session) && !is_authenticated(session)>
                <div class="alert">
                    <h3 class="alert__title">"Authentication Recommended"</h3>
                    <p class="alert__body">
                        "While you can make an anonymous donation without logging in, creating an account allows you to track your donations and receive updates."
                    </p>
                    <div class="button-row">
                        <a class="button button--outline" href=Route::Login.path()>"Login"</a>
                        <a class="button button--primary" href=Route::Register.path()>"Register"</a>
                    </div>
                </div>
            </Show>
            <div class="layout-sidebar">
                <DonationForm on_success=on_success/>
                <aside class="stack">
                    <section class="panel">
                        <h2 class="panel__title">"How Your Donation Helps"</h2>
                        <ul class="bullet-list">
                            {IMPACT.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    </section>
                    <blockquote class="panel testimonial">
                        <p>
                            "\"The support we received from the legal community after my husband's passing helped us through the most difficult time of our lives.\""
                        </p>
                        <footer>"Mrs. Sharma, wife of late Adv. R.K. Sharma"</footer>
                    </blockquote>
                    <section class="panel">
                        <h2 class="panel__title">"Have a specific cause?"</h2>
                        <p>"Browse individual support requests and donate directly to a family in need."</p>
                        <a class="button button--outline button--block" href=Route::SupportRequests.path()>
                            "View Support Requests"
                        </a>
                    </section>
                </aside>
            </div>
        </div>
    }
}
