use leptos::prelude::*;

use crate::state::toasts::ToastState;

/// Fixed-position stack rendering the current toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let destructive = toast.notice.is_destructive();
                        view! {
                            <div class="toast" class:toast--destructive=destructive>
                                <div class="toast__title">{toast.notice.title}</div>
                                {toast.notice.description.map(|d| view! { <div class="toast__description">{d}</div> })}
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
