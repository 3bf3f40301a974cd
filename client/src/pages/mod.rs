//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (reading the session and the
//! content repository from context, navigating after a form succeeds) and
//! delegates rendering details to `components`.

pub mod about;
pub mod donate;
pub mod forum;
pub mod home;
pub mod login;
pub mod new_forum_topic;
pub mod new_support_request;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod support_request_detail;
pub mod support_requests;
