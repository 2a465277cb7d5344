//! Maintenance Schedule
//!
//! Date queries over maintenance tasks and the month grid behind the calendar view.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::models::{MaintenanceTask, Priority, TaskStatus, TaskType};

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an `<input type="date">` value
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn tasks_on(tasks: &[MaintenanceTask], date: NaiveDate) -> Vec<MaintenanceTask> {
    tasks.iter().filter(|t| t.due_date == date).cloned().collect()
}

/// Pending tasks due today or later, soonest first
pub fn upcoming(tasks: &[MaintenanceTask], today: NaiveDate) -> Vec<MaintenanceTask> {
    let mut list: Vec<MaintenanceTask> = tasks
        .iter()
        .filter(|t| t.due_date >= today && t.status == TaskStatus::Pending)
        .cloned()
        .collect();
    list.sort_by_key(|t| t.due_date);
    list
}

fn is_overdue(task: &MaintenanceTask, today: NaiveDate) -> bool {
    task.due_date < today && task.status != TaskStatus::Completed
}

/// Unfinished tasks whose due date has passed
pub fn overdue(tasks: &[MaintenanceTask], today: NaiveDate) -> Vec<MaintenanceTask> {
    tasks.iter().filter(|t| is_overdue(t, today)).cloned().collect()
}

/// Critical or overdue tasks, in list order
pub fn urgent(tasks: &[MaintenanceTask], today: NaiveDate) -> Vec<MaintenanceTask> {
    tasks
        .iter()
        .filter(|t| t.priority == Priority::Critical || is_overdue(t, today))
        .cloned()
        .collect()
}

pub fn urgent_badge(task: &MaintenanceTask) -> String {
    if task.status == TaskStatus::Overdue {
        "OVERDUE".to_string()
    } else {
        task.priority.as_str().to_uppercase()
    }
}

/// Header counters of the scheduler page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStats {
    pub upcoming: usize,
    pub overdue: usize,
    pub completed: usize,
    pub in_progress: usize,
}

pub fn quick_stats(tasks: &[MaintenanceTask], today: NaiveDate) -> QuickStats {
    let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
    QuickStats {
        upcoming: upcoming(tasks, today).len(),
        overdue: overdue(tasks, today).len(),
        completed: count(TaskStatus::Completed),
        in_progress: count(TaskStatus::InProgress),
    }
}

/// In-progress tasks assigned to `member`
pub fn active_task_count(tasks: &[MaintenanceTask], member: &str) -> usize {
    tasks
        .iter()
        .filter(|t| t.assignee == member && t.status == TaskStatus::InProgress)
        .count()
}

/// Team availability badge: "2 active" or "Available"
pub fn availability(tasks: &[MaintenanceTask], member: &str) -> String {
    match active_task_count(tasks, member) {
        0 => "Available".to_string(),
        n => format!("{} active", n),
    }
}

/// Dot class for a calendar day, `None` when nothing is due
pub fn day_marker(tasks: &[MaintenanceTask], date: NaiveDate) -> Option<&'static str> {
    let mut due = tasks.iter().filter(|t| t.due_date == date).peekable();
    due.peek()?;
    if due.any(|t| t.priority == Priority::Critical) {
        Some("day-dot critical")
    } else {
        Some("day-dot")
    }
}

// ========================
// Calendar
// ========================

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let start = month_start(month);
    let shifted = if delta >= 0 {
        start.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        start.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(start)
}

/// "September 2024"
pub fn month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Whole weeks (Sunday first) covering the month; padding cells are `None`
pub fn month_grid(month: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = month_start(month);
    let offset = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
    cells.extend(
        first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(Some),
    );
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells
        .chunks(7)
        .map(|chunk| {
            let mut week = [None; 7];
            week.copy_from_slice(chunk);
            week
        })
        .collect()
}

// ========================
// New task
// ========================

/// Contents of the "Schedule Task" dialog
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub fitting_id: String,
    pub location: String,
    pub task_type: TaskType,
    pub priority: Priority,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_duration: String,
    pub description: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            fitting_id: String::new(),
            location: String::new(),
            task_type: TaskType::Inspection,
            priority: Priority::Medium,
            assignee: String::new(),
            due_date: None,
            estimated_duration: String::new(),
            description: String::new(),
        }
    }
}

impl TaskDraft {
    pub fn is_ready(&self) -> bool {
        !self.title.trim().is_empty() && !self.fitting_id.trim().is_empty()
    }

    /// Build a pending task; a missing due date defaults to `today`
    pub fn into_task(self, id: String, today: NaiveDate) -> MaintenanceTask {
        MaintenanceTask {
            id,
            title: self.title.trim().to_string(),
            fitting_id: self.fitting_id.trim().to_string(),
            location: self.location.trim().to_string(),
            task_type: self.task_type,
            priority: self.priority,
            assignee: self.assignee,
            due_date: self.due_date.unwrap_or(today),
            estimated_duration: self.estimated_duration.trim().to_string(),
            status: TaskStatus::Pending,
            description: self.description.trim().to_string(),
        }
    }
}

/// Next numeric id after the largest existing one
pub fn next_task_id(tasks: &[MaintenanceTask]) -> String {
    let max = tasks.iter().filter_map(|t| t.id.parse::<u32>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ids(tasks: &[MaintenanceTask]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_tasks_on_date() {
        let tasks = mock_data::maintenance_tasks();
        assert_eq!(ids(&tasks_on(&tasks, d(2024, 9, 15))), vec!["1"]);
        assert!(tasks_on(&tasks, d(2024, 9, 16)).is_empty());
    }

    #[test]
    fn test_upcoming_sorted_and_pending_only() {
        let tasks = mock_data::maintenance_tasks();
        assert_eq!(ids(&upcoming(&tasks, d(2024, 9, 14))), vec!["1", "2", "3"]);
        assert_eq!(ids(&upcoming(&tasks, d(2024, 9, 16))), vec!["2", "3"]);
        // Due today still counts
        assert_eq!(ids(&upcoming(&tasks, d(2024, 9, 20))), vec!["3"]);
        assert!(upcoming(&tasks, d(2024, 9, 21)).is_empty());
    }

    #[test]
    fn test_upcoming_sorts_by_due_date() {
        let mut tasks = mock_data::maintenance_tasks();
        tasks.reverse();
        assert_eq!(ids(&upcoming(&tasks, d(2024, 9, 1))), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_overdue_excludes_completed() {
        let tasks = mock_data::maintenance_tasks();
        assert_eq!(ids(&overdue(&tasks, d(2024, 9, 14))), vec!["5"]);
        assert_eq!(ids(&overdue(&tasks, d(2024, 9, 16))), vec!["1", "5"]);
        assert!(overdue(&tasks, d(2024, 9, 1)).is_empty());
    }

    #[test]
    fn test_urgent_is_critical_or_overdue() {
        let tasks = mock_data::maintenance_tasks();
        assert_eq!(ids(&urgent(&tasks, d(2024, 9, 1))), vec!["1", "4"]);
        assert_eq!(ids(&urgent(&tasks, d(2024, 9, 14))), vec!["1", "4", "5"]);
        assert_eq!(ids(&urgent(&tasks, d(2024, 9, 19))), vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn test_urgent_badge() {
        let mut task = mock_data::maintenance_tasks().remove(0);
        assert_eq!(urgent_badge(&task), "CRITICAL");
        task.status = TaskStatus::Overdue;
        assert_eq!(urgent_badge(&task), "OVERDUE");
        task.status = TaskStatus::Pending;
        task.priority = Priority::Medium;
        assert_eq!(urgent_badge(&task), "MEDIUM");
    }

    #[test]
    fn test_quick_stats() {
        let tasks = mock_data::maintenance_tasks();
        let stats = quick_stats(&tasks, d(2024, 9, 14));
        assert_eq!(
            stats,
            QuickStats { upcoming: 3, overdue: 1, completed: 1, in_progress: 1 }
        );
    }

    #[test]
    fn test_availability() {
        let tasks = mock_data::maintenance_tasks();
        assert_eq!(availability(&tasks, "Priya Patel"), "1 active");
        assert_eq!(availability(&tasks, "Kumar Singh"), "Available");
        assert_eq!(active_task_count(&tasks, "Nobody"), 0);
    }

    #[test]
    fn test_day_marker() {
        let tasks = mock_data::maintenance_tasks();
        assert_eq!(day_marker(&tasks, d(2024, 9, 15)), Some("day-dot critical"));
        assert_eq!(day_marker(&tasks, d(2024, 9, 18)), Some("day-dot"));
        assert_eq!(day_marker(&tasks, d(2024, 9, 19)), None);
    }

    #[test]
    fn test_month_grid_starts_on_sunday() {
        // 1 Sep 2024 is a Sunday
        let grid = month_grid(d(2024, 9, 17));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][0], Some(d(2024, 9, 1)));
        assert_eq!(grid[4][1], Some(d(2024, 9, 30)));
        assert_eq!(grid[4][2], None);
    }

    #[test]
    fn test_month_grid_pads_leading_days() {
        // 1 Oct 2024 is a Tuesday
        let grid = month_grid(d(2024, 10, 1));
        assert_eq!(grid[0][0], None);
        assert_eq!(grid[0][1], None);
        assert_eq!(grid[0][2], Some(d(2024, 10, 1)));
        let days = grid.iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(days, 31);
    }

    #[test]
    fn test_month_grid_exact_four_weeks() {
        // February 2026 starts on Sunday and has 28 days
        let grid = month_grid(d(2026, 2, 10));
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().flatten().all(Option::is_some));
    }

    #[test]
    fn test_shift_month_across_years() {
        assert_eq!(shift_month(d(2024, 12, 25), 1), d(2025, 1, 1));
        assert_eq!(shift_month(d(2024, 1, 31), -1), d(2023, 12, 1));
        assert_eq!(shift_month(d(2024, 3, 31), 0), d(2024, 3, 1));
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(d(2024, 9, 1)), "September 2024");
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-09-15"), Some(d(2024, 9, 15)));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15/09/2024"), None);
    }

    #[test]
    fn test_draft_requires_title_and_fitting() {
        let mut draft = TaskDraft::default();
        assert!(!draft.is_ready());
        draft.title = "Replace clip".into();
        assert!(!draft.is_ready());
        draft.fitting_id = "   ".into();
        assert!(!draft.is_ready());
        draft.fitting_id = "RF-2301-A45".into();
        assert!(draft.is_ready());
    }

    #[test]
    fn test_draft_into_task() {
        let draft = TaskDraft {
            title: " Replace clip ".into(),
            fitting_id: "RF-2301-A45".into(),
            priority: Priority::High,
            ..Default::default()
        };
        let task = draft.into_task("6".into(), d(2024, 9, 14));
        assert_eq!(task.title, "Replace clip");
        assert_eq!(task.due_date, d(2024, 9, 14));
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_next_task_id() {
        assert_eq!(next_task_id(&mock_data::maintenance_tasks()), "6");
        assert_eq!(next_task_id(&[]), "1");
    }
}
