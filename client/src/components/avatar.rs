use community::format;
use leptos::prelude::*;

/// Round avatar: the image when one is set, otherwise the name's initials.
#[component]
pub fn Avatar(
    name: String,
    #[prop(optional)] image: Option<String>,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let initials = format::initials(&name);
    view! {
        <span class="avatar" class:avatar--large=large>
            {match image.filter(|src| !src.is_empty()) {
                Some(src) => view! { <img class="avatar__image" src=src alt=name/> }.into_any(),
                None => view! { <span class="avatar__fallback">{initials}</span> }.into_any(),
            }}
        </span>
    }
}
