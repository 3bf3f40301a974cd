//! Root application component with routing and context providers.

use std::sync::Arc;

use community::MockCommunity;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::toaster::Toaster;
use crate::pages::{
    about::AboutPage, donate::DonatePage, forum::ForumPage, home::HomePage, login::LoginPage,
    new_forum_topic::NewForumTopicPage, new_support_request::NewSupportRequestPage, not_found::NotFoundPage,
    profile::ProfilePage, register::RegisterPage, support_request_detail::SupportRequestDetailPage,
    support_requests::SupportRequestsPage,
};
use crate::state::Community;
use crate::state::session::{Session, new_session};
use crate::state::toasts::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast, and content contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(new_session());
    let toasts = RwSignal::new(ToastState::default());
    let community: Community = Arc::new(MockCommunity::new());

    provide_context(session);
    provide_context(toasts);
    provide_context(community);

    // Runs once after hydration; SSR always renders the loading state.
    Effect::new(move || session.update(Session::initialize));

    view! {
        <Stylesheet id="leptos" href="/pkg/legalaid.css"/>
        <Title text="LegalAid Connect"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("support-requests") view=SupportRequestsPage/>
                    <Route
                        path=(StaticSegment("support-requests"), StaticSegment("new"))
                        view=NewSupportRequestPage
                    />
                    <Route
                        path=(StaticSegment("support-requests"), ParamSegment("id"))
                        view=SupportRequestDetailPage
                    />
                    <Route path=StaticSegment("forum") view=ForumPage/>
                    <Route path=(StaticSegment("forum"), StaticSegment("new")) view=NewForumTopicPage/>
                    <Route path=StaticSegment("donate") view=DonatePage/>
                </Routes>
            </Layout>
            <Toaster/>
        </Router>
    }
}
