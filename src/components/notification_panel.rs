//! Notification Panel Component
//!
//! Bell button with an unread badge and a dropdown list of notifications.

use leptos::prelude::*;

use crate::store::{
    notification_badge, store_clear_notifications, store_dismiss_notification, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn NotificationPanel() -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);

    let notifications = move || store.notifications().get();

    view! {
        <div class="notification-panel">
            <button class="icon-btn bell" title="Notifications" on:click=move |_| set_open.update(|o| *o = !*o)>
                "🔔"
                {move || {
                    let list = notifications();
                    notification_badge(&list).map(|class| view! {
                        <span class=class>{list.len()}</span>
                    })
                }}
            </button>

            <Show when=move || open.get()>
                <div class="popover notification-popover">
                    <div class="popover-header">
                        <h4>"Notifications"</h4>
                        <Show when=move || !notifications().is_empty()>
                            <button class="btn ghost small" on:click=move |_| store_clear_notifications(&store)>
                                "Mark all read"
                            </button>
                        </Show>
                    </div>

                    <Show
                        when=move || !notifications().is_empty()
                        fallback=|| view! {
                            <div class="empty-state">
                                <span class="empty-icon">"🔔"</span>
                                <p>"No new notifications"</p>
                            </div>
                        }
                    >
                        <div class="notification-list">
                            <For
                                each=notifications
                                key=|n| n.id
                                children=move |n| {
                                    let id = n.id;
                                    view! {
                                        <div class=n.kind.class()>
                                            <span class="notification-icon">{n.kind.icon()}</span>
                                            <div class="notification-body">
                                                <p>{n.message.clone()}</p>
                                                <p class="muted small">{n.time.clone()}</p>
                                            </div>
                                            <button
                                                class="icon-btn small"
                                                title="Dismiss"
                                                on:click=move |_| store_dismiss_notification(&store, id)
                                            >
                                                "×"
                                            </button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>

                    <hr />
                    <button class="btn outline full small" on:click=move |_| set_open.set(false)>
                        "View All Notifications"
                    </button>
                </div>
            </Show>
        </div>
    }
}
