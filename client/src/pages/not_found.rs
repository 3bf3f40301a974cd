//! Fallback page for paths that match no route.

use community::Route;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const SUGGESTIONS: [(Route, &str); 4] = [
    (Route::SupportRequests, "Support Requests"),
    (Route::Forum, "Forum"),
    (Route::About, "About Us"),
    (Route::Login, "Login"),
];

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        log::warn!("404: no route for {}", location.pathname.get());
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = location;

    view! {
        <div class="page page--narrow not-found">
            <p class="not-found__code">"404"</p>
            <h1 class="page__title">"Page Not Found"</h1>
            <p class="page__subtitle">"The page you are looking for doesn't exist or has been moved."</p>
            <a class="button button--primary" href=Route::Home.path()>"Return to Home"</a>
            <div class="not-found__suggestions">
                <p>"You might be looking for:"</p>
                <ul class="link-list">
                    {SUGGESTIONS
                        .into_iter()
                        .map(|(route, label)| view! { <li><a href=route.path()>{label}</a></li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
