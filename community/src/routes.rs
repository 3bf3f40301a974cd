//! Client route table.
//!
//! The Leptos router owns matching at runtime; this type gives the rest of
//! the app a typed name for each page so links, redirects and auth guards do
//! not repeat path literals.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Login,
    Register,
    Profile,
    SupportRequests,
    NewSupportRequest,
    SupportRequestDetail(String),
    Forum,
    NewForumTopic,
    Donate,
    NotFound,
}

impl Route {
    /// Resolve a location path. Trailing slashes and query strings are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["profile"] => Self::Profile,
            ["support-requests"] => Self::SupportRequests,
            ["support-requests", "new"] => Self::NewSupportRequest,
            ["support-requests", id] => Self::SupportRequestDetail((*id).to_owned()),
            ["forum"] => Self::Forum,
            ["forum", "new"] => Self::NewForumTopic,
            ["donate"] => Self::Donate,
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::About => "/about".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::SupportRequests => "/support-requests".to_owned(),
            Self::NewSupportRequest => "/support-requests/new".to_owned(),
            Self::SupportRequestDetail(id) => format!("/support-requests/{id}"),
            Self::Forum => "/forum".to_owned(),
            Self::NewForumTopic => "/forum/new".to_owned(),
            Self::Donate => "/donate".to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Pages that render a sign-in prompt instead of their content for guests.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Profile | Self::NewSupportRequest | Self::NewForumTopic)
    }
}
