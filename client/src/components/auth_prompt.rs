//! Prompts shown to guests in place of member-only content.

#[cfg(test)]
#[path = "auth_prompt_test.rs"]
mod auth_prompt_test;

use community::Route;
use leptos::prelude::*;

use crate::state::session::Session;

/// What a member-only page may render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// The persisted session has not been read yet, or a sign-in is pending.
    Loading,
    Member,
    Guest,
}

/// A signed-in member keeps access while a profile save is in flight.
pub fn access(session: &Session) -> Access {
    if session.is_authenticated() {
        Access::Member
    } else if session.is_loading() {
        Access::Loading
    } else {
        Access::Guest
    }
}

/// Renders `children` for signed-in members and [`AuthRequired`] for guests.
///
/// Access is memoized, so profile edits do not rebuild the guarded page.
#[component]
pub fn MemberOnly(message: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let gate = Memo::new(move |_| session.with(access));

    move || match gate.get() {
        Access::Loading => view! { <p class="page-loading">"Loading..."</p> }.into_any(),
        Access::Member => children().into_any(),
        Access::Guest => view! { <AuthRequired message=message/> }.into_any(),
    }
}

/// Alert-style block used by guarded pages.
#[component]
pub fn AuthRequired(message: &'static str) -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <div class="alert">
                <h3 class="alert__title">"Authentication Required"</h3>
                <p class="alert__body">{message}</p>
            </div>
            <div class="button-row button-row--center">
                <a class="button button--outline" href=Route::Login.path()>"Login"</a>
                <a class="button button--primary" href=Route::Register.path()>"Register Now"</a>
            </div>
        </div>
    }
}

/// Call-to-action panel at the bottom of listing pages.
#[component]
pub fn JoinPrompt(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="join-prompt">
            <h3 class="join-prompt__title">{title}</h3>
            <p>{message}</p>
            <div class="button-row button-row--center">
                <a class="button button--outline" href=Route::Login.path()>"Login"</a>
                <a class="button button--primary" href=Route::Register.path()>"Register Now"</a>
            </div>
        </div>
    }
}
