//! Pages
//!
//! One component per shell page.

mod ai_insights;
mod dashboard;
mod fitting_details;
mod maintenance_scheduler;
mod qr_scanner;
mod reports;
mod search_panel;
mod track_map;
mod user_management;

pub use ai_insights::AiInsights;
pub use dashboard::Dashboard;
pub use fitting_details::FittingDetails;
pub use maintenance_scheduler::MaintenanceScheduler;
pub use qr_scanner::QrScanner;
pub use reports::Reports;
pub use search_panel::SearchPanel;
pub use track_map::TrackMap;
pub use user_management::UserManagement;
