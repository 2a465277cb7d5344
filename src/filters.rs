//! Filters
//!
//! Linear predicates over the in-memory datasets, plus row selection.

use crate::models::{
    Fitting, FittingStatus, FittingType, Role, Track, User, UserStatus,
};

/// Select-box value meaning "no constraint"
pub const ALL: &str = "all";

/// Case-insensitive substring test; `needle` must already be lower-case
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Search-page filter
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FittingFilter {
    /// Matched against id, location and type
    pub search: String,
    pub fitting_type: Option<FittingType>,
    pub status: Option<FittingStatus>,
    pub track: Option<Track>,
}

impl FittingFilter {
    pub fn matches(&self, fitting: &Fitting) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(&fitting.id, &needle)
            || contains_ci(&fitting.location, &needle)
            || contains_ci(fitting.fitting_type.label(), &needle);
        let matches_type = self.fitting_type.map_or(true, |t| fitting.fitting_type == t);
        let matches_status = self.status.map_or(true, |s| fitting.status == s);
        let matches_track = self.track.map_or(true, |t| fitting.location.contains(t.label()));

        matches_search && matches_type && matches_status && matches_track
    }

    pub fn apply(&self, fittings: &[Fitting]) -> Vec<Fitting> {
        fittings.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

/// Track-map marker filter
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapFilter {
    /// Matched against id and location
    pub search: String,
    pub track: Option<Track>,
    pub critical_only: bool,
}

impl MapFilter {
    pub fn matches(&self, fitting: &Fitting) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(&fitting.id, &needle)
            || contains_ci(&fitting.location, &needle);
        let matches_track = self.track.map_or(true, |t| fitting.track() == Some(t));
        let matches_critical = !self.critical_only || fitting.status == FittingStatus::Critical;

        matches_search && matches_track && matches_critical
    }
}

/// User-management filter
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilter {
    /// Matched against name, email and department
    pub search: String,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(&user.name, &needle)
            || contains_ci(&user.email, &needle)
            || contains_ci(&user.department, &needle);
        let matches_role = self.role.map_or(true, |r| user.role == r);

        matches_search && matches_role
    }

    pub fn apply(&self, users: &[User]) -> Vec<User> {
        users.iter().filter(|u| self.matches(u)).cloned().collect()
    }
}

/// Parse a select-box value, treating "all" (or anything unknown) as no constraint
pub fn parse_choice<T>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    if value == ALL {
        None
    } else {
        parse(value)
    }
}

/// Count of fittings per status, in `FittingStatus::ALL` order
pub fn status_counts(fittings: &[Fitting]) -> Vec<(FittingStatus, usize)> {
    FittingStatus::ALL
        .into_iter()
        .map(|status| (status, fittings.iter().filter(|f| f.status == status).count()))
        .collect()
}

pub fn role_count(users: &[User], role: Role) -> usize {
    users.iter().filter(|u| u.role == role).count()
}

pub fn user_status_count(users: &[User], status: UserStatus) -> usize {
    users.iter().filter(|u| u.status == status).count()
}

/// Count line under the user search box
pub fn users_summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} users", shown, total)
}

/// "Rajesh Sharma" -> "RS"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Results line under the search box
pub fn results_summary(shown: usize, total: usize, selected: usize) -> String {
    let mut text = format!("Showing {} of {} fittings", shown, total);
    if selected > 0 {
        text.push_str(&format!(" ({} selected)", selected));
    }
    text
}

/// Checked rows in a results table, in the order they were checked
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Add `id` if absent, remove it if present
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// True when every visible row is checked (and there is at least one)
    pub fn covers(&self, visible: &[String]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.contains(id))
    }

    /// Header checkbox: clear when all visible rows are checked, else check exactly those rows
    pub fn toggle_all(&mut self, visible: &[String]) {
        if self.covers(visible) {
            self.clear();
        } else {
            self.ids = visible.to_vec();
        }
    }

    /// Selected fittings in catalog order
    pub fn pick(&self, fittings: &[Fitting]) -> Vec<Fitting> {
        fittings.iter().filter(|f| self.contains(&f.id)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    fn ids(fittings: &[Fitting]) -> Vec<&str> {
        fittings.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let all = mock_data::fittings();
        assert_eq!(FittingFilter::default().apply(&all).len(), 8);
    }

    #[test]
    fn test_search_matches_id_location_and_type_case_insensitive() {
        let all = mock_data::fittings();
        let by_id = FittingFilter { search: "rf-2301-c78".into(), ..Default::default() };
        assert_eq!(ids(&by_id.apply(&all)), vec!["RF-2301-C78"]);

        let by_location = FittingFilter { search: "km 3".into(), ..Default::default() };
        assert_eq!(ids(&by_location.apply(&all)), vec!["RF-2301-C78", "RF-2301-F56", "RF-2301-H91"]);

        let by_type = FittingFilter { search: "CLIP".into(), ..Default::default() };
        assert_eq!(ids(&by_type.apply(&all)), vec!["RF-2301-A45", "RF-2301-F56"]);
    }

    #[test]
    fn test_type_status_and_track_combine() {
        let all = mock_data::fittings();
        let filter = FittingFilter {
            fitting_type: Some(FittingType::Bolt),
            status: Some(FittingStatus::HighRisk),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), vec!["RF-2301-B12", "RF-2301-G23"]);

        let filter = FittingFilter { track: Some(Track::Three), ..filter };
        assert_eq!(ids(&filter.apply(&all)), vec!["RF-2301-G23"]);

        let healthy_track_two = FittingFilter {
            status: Some(FittingStatus::Healthy),
            track: Some(Track::Two),
            ..Default::default()
        };
        assert_eq!(ids(&healthy_track_two.apply(&all)), vec!["RF-2301-E89", "RF-2301-H91"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let all = mock_data::fittings();
        let filter = FittingFilter { search: "nonexistent".into(), ..Default::default() };
        assert!(filter.apply(&all).is_empty());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("all", FittingStatus::parse), None);
        assert_eq!(parse_choice("critical", FittingStatus::parse), Some(FittingStatus::Critical));
        assert_eq!(parse_choice("Track 2", Track::from_label), Some(Track::Two));
        assert_eq!(parse_choice("Rail Clip", FittingType::from_label), Some(FittingType::RailClip));
    }

    #[test]
    fn test_map_filter() {
        let all = mock_data::fittings();
        let visible = |f: &MapFilter| all.iter().filter(|x| f.matches(x)).count();
        assert_eq!(visible(&MapFilter::default()), 8);
        assert_eq!(visible(&MapFilter { track: Some(Track::One), ..Default::default() }), 3);
        assert_eq!(visible(&MapFilter { critical_only: true, ..Default::default() }), 1);
        assert_eq!(visible(&MapFilter { search: "km 1".into(), ..Default::default() }), 3);
        // Type is not searchable on the map
        assert_eq!(visible(&MapFilter { search: "bolt".into(), ..Default::default() }), 0);
    }

    #[test]
    fn test_status_counts_match_legend() {
        let counts = status_counts(&mock_data::fittings());
        assert_eq!(
            counts,
            vec![
                (FittingStatus::Healthy, 3),
                (FittingStatus::NeedsInspection, 2),
                (FittingStatus::HighRisk, 2),
                (FittingStatus::Critical, 1),
            ]
        );
    }

    #[test]
    fn test_user_filter() {
        let users = mock_data::users();
        let by_department = UserFilter { search: "track maint".into(), role: None };
        assert_eq!(by_department.apply(&users).len(), 2);

        let by_email = UserFilter { search: "AMIT.KUMAR@".into(), role: None };
        assert_eq!(by_email.apply(&users)[0].name, "Amit Kumar");

        let inspectors = UserFilter { search: String::new(), role: Some(Role::Inspector) };
        assert_eq!(inspectors.apply(&users).len(), 2);

        let none = UserFilter { search: "sharma".into(), role: Some(Role::Auditor) };
        assert!(none.apply(&users).is_empty());
    }

    #[test]
    fn test_role_count() {
        let users = mock_data::users();
        assert_eq!(role_count(&users, Role::Admin), 1);
        assert_eq!(role_count(&users, Role::Inspector), 2);
    }

    #[test]
    fn test_user_status_counts() {
        let mut users = mock_data::users();
        assert_eq!(user_status_count(&users, UserStatus::Active), 4);
        assert_eq!(user_status_count(&users, UserStatus::Inactive), 1);

        users.retain(|u| u.status == UserStatus::Active);
        assert_eq!(user_status_count(&users, UserStatus::Inactive), 0);
        assert_eq!(user_status_count(&[], UserStatus::Active), 0);
    }

    #[test]
    fn test_users_summary() {
        let users = mock_data::users();
        let inspectors = UserFilter { search: String::new(), role: Some(Role::Inspector) };
        let shown = inspectors.apply(&users).len();
        assert_eq!(users_summary(shown, users.len()), "Showing 2 of 5 users");
    }

    #[test]
    fn test_whitespace_search_is_no_constraint() {
        let all = mock_data::fittings();
        let blank = FittingFilter { search: "   ".into(), ..Default::default() };
        assert_eq!(blank.apply(&all).len(), all.len());

        let users = mock_data::users();
        let blank = UserFilter { search: "\t ".into(), role: None };
        assert_eq!(blank.apply(&users).len(), users.len());

        let padded = FittingFilter { search: "  rf-2301-b12 ".into(), ..Default::default() };
        assert_eq!(ids(&padded.apply(&all)), vec!["RF-2301-B12"]);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Rajesh Sharma"), "RS");
        assert_eq!(initials("sunita gupta"), "SG");
        assert_eq!(initials("  Kumar   Singh "), "KS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(8, 8, 0), "Showing 8 of 8 fittings");
        assert_eq!(results_summary(3, 8, 2), "Showing 3 of 8 fittings (2 selected)");
    }

    #[test]
    fn test_selection_toggle_updates_count() {
        let mut selection = Selection::default();
        selection.toggle("RF-2301-A45");
        selection.toggle("RF-2301-B12");
        assert_eq!(selection.len(), 2);
        selection.toggle("RF-2301-A45");
        assert_eq!(selection.len(), 1);
        assert!(!selection.contains("RF-2301-A45"));
        assert!(selection.contains("RF-2301-B12"));
    }

    #[test]
    fn test_select_all_toggles() {
        let visible: Vec<String> = vec!["A".into(), "B".into(), "C".into()];
        let mut selection = Selection::default();
        assert!(!selection.covers(&visible));

        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 3);
        assert!(selection.covers(&visible));

        selection.toggle_all(&visible);
        assert!(selection.is_empty());

        // Partial selection becomes full selection
        selection.toggle("B");
        selection.toggle_all(&visible);
        assert_eq!(selection.ids(), visible.as_slice());
    }

    #[test]
    fn test_select_all_on_empty_results_is_unchecked() {
        let mut selection = Selection::default();
        assert!(!selection.covers(&[]));
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_pick_keeps_catalog_order() {
        let all = mock_data::fittings();
        let mut selection = Selection::default();
        selection.toggle("RF-2301-H91");
        selection.toggle("RF-2301-A45");
        assert_eq!(ids(&selection.pick(&all)), vec!["RF-2301-A45", "RF-2301-H91"]);
    }
}
