//! QRail App
//!
//! Splash gate, decorative backdrop, navigation bar and the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    FloatingQrCodes, NavBar, PageTransition, ParticleBackground, RailwayTrack, Train, WelcomeAnimation,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    AiInsights, Dashboard, FittingDetails, MaintenanceScheduler, QrScanner, Reports, SearchPanel,
    TrackMap, UserManagement,
};
use crate::store::{AppState, AppStateStoreFields, AppStore, Page};

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::TrackMap => view! { <TrackMap /> }.into_any(),
        Page::Scanner => view! { <QrScanner /> }.into_any(),
        Page::Search => view! { <SearchPanel /> }.into_any(),
        Page::Reports => view! { <Reports /> }.into_any(),
        Page::Users => view! { <UserManagement /> }.into_any(),
        Page::Insights => view! { <AiInsights /> }.into_any(),
        Page::Scheduler => view! { <MaintenanceScheduler /> }.into_any(),
        Page::FittingDetails(id) => view! { <FittingDetails fitting_id=id /> }.into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide config, store and navigation to all children
    provide_context(config);
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);
    provide_context(AppContext::new(store));

    let (splash_done, set_splash_done) = signal(false);

    view! {
        <Show
            when=move || splash_done.get()
            fallback=move || view! { <WelcomeAnimation on_complete=move |_| set_splash_done.set(true) /> }
        >
            <div class="app-shell">
                // Backdrop
                <div class="backdrop">
                    <ParticleBackground count=30 />
                    <FloatingQrCodes />
                    <div class="backdrop-track">
                        <RailwayTrack />
                    </div>
                    <div class="backdrop-train">
                        <Train />
                    </div>
                </div>

                <NavBar />

                <main class="main-content">
                    {move || {
                        let page = store.page().get();
                        let key = page.key();
                        view! {
                            <PageTransition page_key=key>
                                {render_page(page)}
                            </PageTransition>
                        }
                    }}
                </main>
            </div>
        </Show>
    }
}
