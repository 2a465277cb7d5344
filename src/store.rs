//! Global Application State Store
//!
//! Shell state (active page, mobile menu, notifications) with field-level
//! reactivity via reactive_stores. Pages keep their own data locally.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::mock_data;
use crate::models::{Notification, NotificationKind};

/// Page shown in the shell's content area
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    TrackMap,
    Scanner,
    Search,
    Reports,
    Users,
    Insights,
    Scheduler,
    /// Details for one fitting id; reached from other pages, never from the menu
    FittingDetails(String),
}

impl Page {
    /// Stable key for logging and transition keying
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::TrackMap => "track-map",
            Page::Scanner => "scanner",
            Page::Search => "search",
            Page::Reports => "reports",
            Page::Users => "users",
            Page::Insights => "insights",
            Page::Scheduler => "scheduler",
            Page::FittingDetails(_) => "fitting-details",
        }
    }
}

/// One navbar entry
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub page: Page,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Navbar entries in display order
pub fn menu_items() -> Vec<MenuItem> {
    [
        (Page::Dashboard, "Dashboard", "▦"),
        (Page::TrackMap, "Track Map", "⌖"),
        (Page::Scanner, "QR Scanner", "▣"),
        (Page::Search, "Search & Filter", "⌕"),
        (Page::Scheduler, "Maintenance", "🗓"),
        (Page::Insights, "AI Insights", "✦"),
        (Page::Reports, "Reports", "▤"),
        (Page::Users, "User Management", "👥"),
    ]
    .into_iter()
    .map(|(page, label, icon)| MenuItem { page, label, icon })
    .collect()
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active page
    pub page: Page,
    /// Mobile navigation drawer
    pub mobile_menu_open: bool,
    /// Unread notifications, newest first
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            notifications: mock_data::notifications(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Badge class for the notification bell; `None` hides the badge
pub fn notification_badge(notifications: &[Notification]) -> Option<&'static str> {
    if notifications.is_empty() {
        None
    } else if notifications.iter().any(|n| n.kind == NotificationKind::Critical) {
        Some("notification-count destructive")
    } else {
        Some("notification-count")
    }
}

// ========================
// Store Helper Functions
// ========================

/// Swap the active page and close the mobile menu
pub fn store_navigate(store: &AppStore, page: Page) {
    log::debug!(
        "[NAV] {} -> {}",
        store.page().get_untracked().key(),
        page.key()
    );
    store.page().set(page);
    store.mobile_menu_open().set(false);
}

pub fn store_toggle_mobile_menu(store: &AppStore) {
    store.mobile_menu_open().update(|open| *open = !*open);
}

/// Remove one notification by id
pub fn store_dismiss_notification(store: &AppStore, id: u32) {
    store.notifications().write().retain(|n| n.id != id);
}

/// "Mark all read"
pub fn store_clear_notifications(store: &AppStore) {
    store.notifications().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<&str> = menu_items().iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Track Map",
                "QR Scanner",
                "Search & Filter",
                "Maintenance",
                "AI Insights",
                "Reports",
                "User Management",
            ]
        );
        assert!(menu_items()
            .iter()
            .all(|m| !matches!(m.page, Page::FittingDetails(_))));
    }

    #[test]
    fn test_page_keys_unique() {
        let mut keys: Vec<&str> = menu_items().iter().map(|m| m.page.key()).collect();
        keys.push(Page::FittingDetails("RF-2301-A45".into()).key());
        let count = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), count);
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.page, Page::Dashboard);
        assert!(!state.mobile_menu_open);
        assert_eq!(state.notifications.len(), 3);
    }

    #[test]
    fn test_navigation_keeps_shell_state() {
        let store = Store::new(AppState::new());
        store.mobile_menu_open().set(true);

        store_navigate(&store, Page::Search);
        assert_eq!(store.page().get_untracked(), Page::Search);
        assert!(!store.mobile_menu_open().get_untracked());
        assert_eq!(store.notifications().get_untracked().len(), 3);

        store_navigate(&store, Page::FittingDetails("RF-2301-C78".into()));
        assert_eq!(
            store.page().get_untracked(),
            Page::FittingDetails("RF-2301-C78".into())
        );
        assert_eq!(store.notifications().get_untracked().len(), 3);
    }

    #[test]
    fn test_toggle_mobile_menu() {
        let store = Store::new(AppState::new());
        store_toggle_mobile_menu(&store);
        assert!(store.mobile_menu_open().get_untracked());
        store_toggle_mobile_menu(&store);
        assert!(!store.mobile_menu_open().get_untracked());
    }

    #[test]
    fn test_dismiss_and_clear_notifications() {
        let store = Store::new(AppState::new());
        store_dismiss_notification(&store, 1);
        let remaining: Vec<u32> = store
            .notifications()
            .get_untracked()
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(remaining, vec![2, 3]);

        store_dismiss_notification(&store, 42);
        assert_eq!(store.notifications().get_untracked().len(), 2);

        store_clear_notifications(&store);
        assert!(store.notifications().get_untracked().is_empty());
    }

    #[test]
    fn test_notification_badge() {
        let all = mock_data::notifications();
        assert_eq!(notification_badge(&all), Some("notification-count destructive"));
        assert_eq!(notification_badge(&all[1..]), Some("notification-count"));
        assert_eq!(notification_badge(&[]), None);
    }
}
