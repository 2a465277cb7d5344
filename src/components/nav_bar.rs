//! Navigation Bar Component
//!
//! Brand, page menu (desktop and mobile), notifications and user badge.

use leptos::prelude::*;

use crate::components::NotificationPanel;
use crate::context::use_app_context;
use crate::store::{menu_items, store_toggle_mobile_menu, use_app_store, AppStateStoreFields};

/// Short label for narrow desktop widths ("Search & Filter" -> "Search")
fn short_label(label: &str) -> &str {
    label.split(' ').next().unwrap_or(label)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let desktop_menu = menu_items()
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let page = item.page.clone();
            let target = item.page.clone();
            let is_active = move || ctx.page() == page;
            let style = format!("animation-delay: {:.1}s", index as f64 * 0.1);
            view! {
                <button
                    class=move || if is_active() { "nav-item active" } else { "nav-item" }
                    style=style
                    on:click=move |_| ctx.navigate(target.clone())
                >
                    <span class="nav-icon">{item.icon}</span>
                    <span class="nav-label">{item.label}</span>
                    <span class="nav-label-short">{short_label(item.label)}</span>
                </button>
            }
        })
        .collect_view();

    let mobile_menu = move || {
        menu_items()
            .into_iter()
            .map(|item| {
                let page = item.page.clone();
                let target = item.page.clone();
                let is_active = move || ctx.page() == page;
                view! {
                    <button
                        class=move || if is_active() { "mobile-nav-item active" } else { "mobile-nav-item" }
                        on:click=move |_| ctx.navigate(target.clone())
                    >
                        <span class="nav-icon">{item.icon}</span>
                        <span>{item.label}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-row">
                <div class="navbar-left">
                    <div class="brand">
                        <div class="brand-logo">
                            <span>"🚆"</span>
                            <span class="brand-badge">"▣"</span>
                        </div>
                        <div>
                            <h1 class="brand-title">"QRail"</h1>
                            <p class="brand-subtitle">"Smart Railway Management"</p>
                        </div>
                    </div>
                    <div class="desktop-menu">{desktop_menu}</div>
                </div>

                <div class="navbar-right">
                    <NotificationPanel />
                    <span class="badge role-badge">"⚡ Inspector View"</span>
                    <div class="avatar">
                        <span>"JD"</span>
                        <span class="online-dot"></span>
                    </div>
                    <button class="icon-btn mobile-toggle" title="Menu" on:click=move |_| store_toggle_mobile_menu(&store)>
                        "☰"
                    </button>
                </div>
            </div>

            <Show when=move || store.mobile_menu_open().get()>
                <div class="mobile-menu">{mobile_menu}</div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("Search & Filter"), "Search");
        assert_eq!(short_label("Dashboard"), "Dashboard");
    }
}
