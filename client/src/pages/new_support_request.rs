//! Member-only page for filing a new support request.

use community::Route;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_prompt::MemberOnly;
use crate::components::new_support_request_form::NewSupportRequestForm;

const GUIDELINES: [&str; 5] = [
    "Provide clear and accurate information about your situation.",
    "For financial requests, include a specific target amount and how the funds will be used.",
    "Attach relevant documentation when our team reaches out for verification.",
    "Be respectful and honest; requests are reviewed by community moderators.",
    "Update your request as your situation changes so donors stay informed.",
];

#[component]
pub fn NewSupportRequestPage() -> impl IntoView {
    view! {
        <MemberOnly message="You need to be logged in to create a support request. Please login or register to continue.">
            <NewSupportRequestContent/>
        </MemberOnly>
    }
}

#[component]
fn NewSupportRequestContent() -> impl IntoView {
    let navigate = use_navigate();
    let submitted = RwSignal::new(false);
    Effect::new(move || {
        if submitted.get() {
            navigate(&Route::SupportRequests.path(), NavigateOptions::default());
        }
    });
    let on_success = Callback::new(move |()| submitted.set(true));

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Create Support Request"</h1>
                <p class="page__subtitle">"Submit a request for support from the legal community"</p>
            </header>
            <div class="layout-sidebar">
                <NewSupportRequestForm on_success=on_success/>
                <aside class="stack">
                    <section class="panel">
                        <h2 class="panel__title">"Guidelines"</h2>
                        <ul class="bullet-list">
                            {GUIDELINES.into_iter().map(|g| view! { <li>{g}</li> }).collect_view()}
                        </ul>
                    </section>
                    <section class="panel">
                        <h2 class="panel__title">"Need Help?"</h2>
                        <p>"If you have questions about submitting a request, contact our support team at "
                            <a href="mailto:support@legalaid-connect.org">"support@legalaid-connect.org"</a>
                        </p>
                    </section>
                </aside>
            </div>
        </div>
    }
}
