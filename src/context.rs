//! Application Context
//!
//! Navigation capability handed to pages via the Leptos Context API.

use leptos::prelude::*;

use crate::store::{store_navigate, AppStateStoreFields, AppStore, Page};

/// Lets a page switch the shell to another page
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Active page (tracked)
    pub fn page(&self) -> Page {
        self.store.page().get()
    }

    pub fn navigate(&self, page: Page) {
        store_navigate(&self.store, page);
    }

    /// Open the details page for `fitting_id`
    pub fn navigate_to_fitting(&self, fitting_id: &str) {
        self.navigate(Page::FittingDetails(fitting_id.to_string()));
    }
}

/// Get the navigation context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
