//! Page Transition Component
//!
//! Entry animation around the active page. The shell re-creates it on every
//! navigation, so the animation replays per page.

use leptos::prelude::*;

#[component]
pub fn PageTransition(
    /// Page key, exposed as `data-page` for styling
    page_key: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-transition" data-page=page_key>
            <div class="page-content">{children()}</div>
            <div class="page-glow glow-a"></div>
            <div class="page-glow glow-b"></div>
            <div class="page-glow glow-c"></div>
        </div>
    }
}
