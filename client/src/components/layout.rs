//! Page chrome: header navigation, footer, and the wrapper that places every
//! routed page between them.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use community::Route;
use community::session::logout_notice;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::{Session, is_authenticated};
use crate::state::toasts::{ToastState, notify};

/// Header links in display order. Member-only pages are hidden from guests.
pub fn nav_items(authenticated: bool) -> Vec<(Route, &'static str)> {
    [
        (Route::Home, "Home"),
        (Route::SupportRequests, "Support Requests"),
        (Route::Forum, "Forum"),
        (Route::About, "About"),
        (Route::Profile, "Profile"),
    ]
    .into_iter()
    .filter(|(route, _)| authenticated || !route.requires_auth())
    .collect()
}

/// Whether the header link for `route` should be highlighted at `pathname`.
/// Section links stay active on their sub-pages.
pub fn is_active(route: &Route, pathname: &str) -> bool {
    let current = Route::parse(pathname);
    match route {
        Route::SupportRequests => matches!(
            current,
            Route::SupportRequests | Route::NewSupportRequest | Route::SupportRequestDetail(_)
        ),
        Route::Forum => matches!(current, Route::Forum | Route::NewForumTopic),
        _ => current == *route,
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Header/>
            <main class="app__main">{children()}</main>
            <Footer/>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let menu_open = RwSignal::new(false);
    let pathname = use_location().pathname;

    let on_logout = move |_| {
        session.update(Session::logout);
        notify(toasts, logout_notice());
        menu_open.set(false);
    };

    view! {
        <header class="header">
            <div class="header__inner">
                <a class="header__brand" href=Route::Home.path()>
                    <svg class="header__logo" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                        <path d="M12 2L2 7l10 5 10-5-10-5z"></path>
                        <path d="M2 17l10 5 10-5"></path>
                        <path d="M2 12l10 5 10-5"></path>
                    </svg>
                    "LegalAid Connect"
                </a>
                <button
                    class="header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <nav class="header__nav" class:header__nav--open=move || menu_open.get()>
                    {move || {
                        nav_items(is_authenticated(session))
                            .into_iter()
                            .map(|(route, label)| {
                                let href = route.path();
                                view! {
                                    <a
                                        class="header__link"
                                        class:header__link--active=move || pathname.with(|p| is_active(&route, p))
                                        href=href
                                        on:click=move |_| menu_open.set(false)
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                    <Show
                        when=move || is_authenticated(session)
                        fallback=move || {
                            view! {
                                <a class="button button--outline-light" href=Route::Login.path()>"Login"</a>
                                <a class="button button--gold" href=Route::Register.path()>"Register"</a>
                            }
                        }
                    >
                        <button class="button button--ghost" on:click=on_logout>"Log out"</button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = time::OffsetDateTime::now_utc().year();
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div>
                    <h3 class="footer__brand">"LegalAid Connect"</h3>
                    <p>"Supporting the legal community and their families in times of need."</p>
                </div>
                <div>
                    <h3>"Links"</h3>
                    <ul>
                        <li><a href=Route::Home.path()>"Home"</a></li>
                        <li><a href=Route::About.path()>"About"</a></li>
                        <li><a href=Route::SupportRequests.path()>"Support Requests"</a></li>
                        <li><a href=Route::Forum.path()>"Forum"</a></li>
                    </ul>
                </div>
                <div>
                    <h3>"Support"</h3>
                    <ul>
                        <li><a href=Route::Donate.path()>"Donate"</a></li>
                        <li><a href="#">"FAQ"</a></li>
                        <li><a href="#">"Resources"</a></li>
                    </ul>
                </div>
                <div>
                    <h3>"Legal"</h3>
                    <ul>
                        <li><a href="#">"Privacy Policy"</a></li>
                        <li><a href="#">"Terms of Service"</a></li>
                        <li><a href="#">"Cookies Policy"</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer__copyright">{format!("© {year} LegalAid Connect. All rights reserved.")}</p>
        </footer>
    }
}
