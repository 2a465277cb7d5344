//! Frontend Models
//!
//! Domain records for fittings, tasks, users and notifications.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fitting condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FittingStatus {
    Healthy,
    NeedsInspection,
    HighRisk,
    Critical,
}

impl FittingStatus {
    pub const ALL: [FittingStatus; 4] = [
        FittingStatus::Healthy,
        FittingStatus::NeedsInspection,
        FittingStatus::HighRisk,
        FittingStatus::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FittingStatus::Healthy => "healthy",
            FittingStatus::NeedsInspection => "needs-inspection",
            FittingStatus::HighRisk => "high-risk",
            FittingStatus::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FittingStatus::Healthy => "Healthy",
            FittingStatus::NeedsInspection => "Needs Inspection",
            FittingStatus::HighRisk => "High Risk",
            FittingStatus::Critical => "Critical",
        }
    }

    /// Lower-case badge text ("needs inspection")
    pub fn display(&self) -> String {
        self.as_str().replacen('-', " ", 1)
    }

    /// Marker color on the track map
    pub fn color(&self) -> &'static str {
        match self {
            FittingStatus::Healthy => "#22c55e",
            FittingStatus::NeedsInspection => "#f59e0b",
            FittingStatus::HighRisk => "#f97316",
            FittingStatus::Critical => "#ef4444",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            FittingStatus::Healthy => "badge status-healthy",
            FittingStatus::NeedsInspection => "badge status-needs-inspection",
            FittingStatus::HighRisk => "badge status-high-risk",
            FittingStatus::Critical => "badge status-critical",
        }
    }
}

/// Track hardware kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FittingType {
    #[serde(rename = "Rail Clip")]
    RailClip,
    Bolt,
    Plate,
    Anchor,
    Joint,
}

impl FittingType {
    pub const ALL: [FittingType; 5] = [
        FittingType::RailClip,
        FittingType::Bolt,
        FittingType::Plate,
        FittingType::Anchor,
        FittingType::Joint,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FittingType::RailClip => "Rail Clip",
            FittingType::Bolt => "Bolt",
            FittingType::Plate => "Plate",
            FittingType::Anchor => "Anchor",
            FittingType::Joint => "Joint",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == value)
    }
}

/// Running line a fitting sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    One,
    Two,
    Three,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::One, Track::Two, Track::Three];

    /// Label as it appears inside fitting locations ("Track 2")
    pub fn label(&self) -> &'static str {
        match self {
            Track::One => "Track 1",
            Track::Two => "Track 2",
            Track::Three => "Track 3",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == value)
    }
}

/// Risk band derived from a literal risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => RiskBand::Critical,
            60..=79 => RiskBand::High,
            40..=59 => RiskBand::Medium,
            _ => RiskBand::Low,
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            RiskBand::Critical => "risk-critical",
            RiskBand::High => "risk-high",
            RiskBand::Medium => "risk-medium",
            RiskBand::Low => "risk-low",
        }
    }
}

/// Fitting record as listed by search and export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fitting {
    pub id: String,
    pub fitting_type: FittingType,
    pub location: String,
    pub status: FittingStatus,
    pub install_date: NaiveDate,
    pub last_inspection: NaiveDate,
    pub risk_score: u8,
    pub next_inspection: NaiveDate,
}

impl Fitting {
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }

    /// Kilometre part of the location ("KM 245.3")
    pub fn km_marker(&self) -> &str {
        self.location.split(',').next().unwrap_or(&self.location).trim()
    }

    pub fn track(&self) -> Option<Track> {
        Track::ALL.into_iter().find(|t| self.location.contains(t.label()))
    }
}

/// Marker placement on the track map (600x400 viewbox)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

/// Technical data sheet values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specifications {
    pub weight: String,
    pub dimensions: String,
    pub torque_spec: String,
    pub temperature_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub date: NaiveDate,
    pub kind: String,
    pub technician: String,
    pub notes: String,
    pub status: String,
}

/// Everything the details page shows about one fitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingProfile {
    pub fitting: Fitting,
    pub detailed_location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub material: String,
    pub manufacturer: String,
    pub batch_number: String,
    pub specifications: Specifications,
    pub history: Vec<MaintenanceRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    Inspection,
    Maintenance,
    Replacement,
    Emergency,
}

impl TaskType {
    pub const ALL: [TaskType; 4] = [
        TaskType::Inspection,
        TaskType::Maintenance,
        TaskType::Replacement,
        TaskType::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Inspection => "inspection",
            TaskType::Maintenance => "maintenance",
            TaskType::Replacement => "replacement",
            TaskType::Emergency => "emergency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Inspection => "Inspection",
            TaskType::Maintenance => "Maintenance",
            TaskType::Replacement => "Replacement",
            TaskType::Emergency => "Emergency",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::Low => "badge priority-low",
            Priority::Medium => "badge priority-medium",
            Priority::High => "badge priority-high",
            Priority::Critical => "badge priority-critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
        }
    }

    pub fn display(&self) -> String {
        self.as_str().replacen('-', " ", 1)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "badge task-pending",
            TaskStatus::InProgress => "badge task-in-progress",
            TaskStatus::Completed => "badge task-completed",
            TaskStatus::Overdue => "badge task-overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub id: String,
    pub title: String,
    pub fitting_id: String,
    pub location: String,
    pub task_type: TaskType,
    pub priority: Priority,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub estimated_duration: String,
    pub status: TaskStatus,
    pub description: String,
}

/// Field crew member tasks can be assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Inspector,
    Auditor,
    Technician,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Inspector, Role::Auditor, Role::Technician];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Inspector => "inspector",
            Role::Auditor => "auditor",
            Role::Technician => "technician",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Inspector => "Inspector",
            Role::Auditor => "Auditor",
            Role::Technician => "Technician",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Full system access with user management capabilities",
            Role::Inspector => "Field inspection and maintenance recording",
            Role::Auditor => "Quality assurance and compliance monitoring",
            Role::Technician => "Field operations and basic data entry",
        }
    }

    pub fn capabilities(&self) -> &'static [&'static str] {
        match self {
            Role::Admin => &["Full Access", "User Management", "System Configuration"],
            Role::Inspector => &["QR Scanning", "Fitting Updates", "Reports Creation"],
            Role::Auditor => &["View All Data", "Audit Reports", "Compliance Checks"],
            Role::Technician => &["QR Scanning", "Status Updates", "Basic Reports"],
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::Admin => "badge role-admin",
            Role::Inspector => "badge role-inspector",
            Role::Auditor => "badge role-auditor",
            Role::Technician => "badge role-technician",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub last_active: String,
    pub status: UserStatus,
    pub permissions: Vec<String>,
}

/// One line in the system activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub user: String,
    pub action: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Critical,
    Warning,
    Info,
    Success,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Critical => "notification critical",
            NotificationKind::Warning => "notification warning",
            NotificationKind::Info => "notification info",
            NotificationKind::Success => "notification success",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Critical | NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
            NotificationKind::Success => "✓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Result card shown after a scan or manual lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub fitting_id: String,
    pub fitting_type: FittingType,
    pub location: String,
    pub status: FittingStatus,
    pub last_inspection: String,
    pub risk_score: u8,
    pub next_action: Option<String>,
}

/// Entry in the recent-scans list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub fitting_id: String,
    pub timestamp: String,
    pub status: FittingStatus,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(FittingStatus::NeedsInspection.as_str(), "needs-inspection");
        assert_eq!(FittingStatus::NeedsInspection.display(), "needs inspection");
        assert_eq!(FittingStatus::Critical.display(), "critical");
        assert_eq!(FittingStatus::parse("high-risk"), Some(FittingStatus::HighRisk));
        assert_eq!(FittingStatus::parse("all"), None);
    }

    #[test]
    fn test_status_serde_matches_wire_strings() {
        let json = serde_json::to_string(&FittingStatus::HighRisk).unwrap();
        assert_eq!(json, "\"high-risk\"");
        let t: FittingType = serde_json::from_str("\"Rail Clip\"").unwrap();
        assert_eq!(t, FittingType::RailClip);
    }

    #[test]
    fn test_risk_band_thresholds() {
        assert_eq!(RiskBand::from_score(85), RiskBand::Critical);
        assert_eq!(RiskBand::from_score(80), RiskBand::Critical);
        assert_eq!(RiskBand::from_score(79), RiskBand::High);
        assert_eq!(RiskBand::from_score(60), RiskBand::High);
        assert_eq!(RiskBand::from_score(45), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(39), RiskBand::Low);
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
    }

    #[test]
    fn test_fitting_location_parts() {
        let fitting = Fitting {
            id: "RF-2301-A45".to_string(),
            fitting_type: FittingType::RailClip,
            location: "KM 245.3, Track 1".to_string(),
            status: FittingStatus::Critical,
            install_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
            last_inspection: NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(),
            risk_score: 85,
            next_inspection: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
        };
        assert_eq!(fitting.km_marker(), "KM 245.3");
        assert_eq!(fitting.track(), Some(Track::One));
        assert_eq!(fitting.risk_band(), RiskBand::Critical);
    }

    #[test]
    fn test_task_status_display() {
        assert_eq!(TaskStatus::InProgress.display(), "in progress");
        assert_eq!(Priority::parse("critical"), Some(Priority::Critical));
        assert!(Priority::Critical > Priority::High);
    }

    #[test]
    fn test_role_lookup() {
        assert_eq!(Role::parse("auditor"), Some(Role::Auditor));
        assert_eq!(Role::Admin.name(), "Administrator");
        assert_eq!(Role::Technician.capabilities().len(), 3);
    }
}
