//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, cards, and forms. Forms read the session
//! and toast signals from Leptos context and report success to their page
//! through a callback; cards are purely presentational.

pub mod auth_prompt;
pub mod avatar;
pub mod badge;
pub mod donation_form;
pub mod forum_topic_card;
pub mod layout;
pub mod new_forum_topic_form;
pub mod new_support_request_form;
pub mod support_request_card;
pub mod toaster;
