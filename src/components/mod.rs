//! UI Components
//!
//! Shell widgets and pieces shared by the pages.

mod card;
mod nav_bar;
mod notification_panel;
mod page_transition;
pub mod railway_graphics;
mod status_badge;
pub mod welcome_animation;

pub use card::{format_thousands, Card, StatCard};
pub use nav_bar::NavBar;
pub use notification_panel::NotificationPanel;
pub use page_transition::PageTransition;
pub use railway_graphics::{FloatingQrCodes, ParticleBackground, RailwayTrack, Train};
pub use status_badge::StatusBadge;
pub use welcome_animation::WelcomeAnimation;
