//! Toast stack for transient notices.
//!
//! Notices are pushed newest-first and each one removes itself after
//! [`TOAST_DURATION`]. The stack is bounded so a burst of submissions cannot
//! bury the page.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use std::time::Duration;

use community::Notice;
use leptos::prelude::*;

pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Maximum toasts shown at once; older ones are dropped.
pub const MAX_TOASTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Add a notice on top of the stack and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.insert(0, Toast { id, notice });
        self.items.truncate(MAX_TOASTS);
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Show `notice` and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|t| t.push(notice)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
