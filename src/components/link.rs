use leptos::prelude::*;

use crate::models::is_external;

/// Anchor for booking forms and social links. Off-site targets open in a new
/// tab; in-page anchors such as `#booking` stay in place.
#[component]
pub fn ExternalLink(
    href: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let external = is_external(href);

    view! {
        <a
            href=href
            class=class
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}
