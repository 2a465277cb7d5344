//! Maintenance Scheduler Page
//!
//! Calendar and list views over maintenance tasks, urgent queue, team
//! availability and the schedule-task dialog.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::Card;
use crate::export::{download_or_log, schedule_csv, CSV_MIME, SCHEDULE_FILE};
use crate::mock_data;
use crate::models::{MaintenanceTask, Priority, TaskType};
use crate::schedule::{
    availability, day_marker, month_grid, month_start, month_title, next_task_id, parse_input_date,
    quick_stats, shift_month, tasks_on, today, urgent, urgent_badge, TaskDraft, WEEKDAY_HEADERS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Calendar,
    List,
}

fn type_icon(task_type: TaskType) -> &'static str {
    match task_type {
        TaskType::Inspection => "🔍",
        TaskType::Maintenance => "🔧",
        TaskType::Replacement => "♻",
        TaskType::Emergency => "⚠",
    }
}

fn priority_badge(priority: Priority) -> impl IntoView {
    view! { <span class=priority.badge_class()>{priority.as_str()}</span> }
}

/// Compact row under the calendar
fn day_task_row(task: MaintenanceTask) -> impl IntoView {
    view! {
        <div class="list-row column">
            <div class="row">
                <span>{type_icon(task.task_type)}</span>
                <span class="small strong">{task.title.clone()}</span>
                {priority_badge(task.priority)}
            </div>
            <p class="muted tiny">
                {format!("{} • {} • {}", task.location, task.estimated_duration, task.assignee)}
            </p>
        </div>
    }
}

/// Full card in the list view
fn task_card(task: MaintenanceTask) -> impl IntoView {
    view! {
        <div class="list-row column">
            <div class="row-between">
                <div class="row">
                    <span>{type_icon(task.task_type)}</span>
                    <h4>{task.title.clone()}</h4>
                    {priority_badge(task.priority)}
                </div>
                <span class=task.status.badge_class()>{task.status.display()}</span>
            </div>
            <div class="grid cols-2 small">
                <span>"📍 " {task.location.clone()}</span>
                <span>"👤 " {task.assignee.clone()}</span>
                <span>"📅 " {task.due_date.format("%Y-%m-%d").to_string()}</span>
                <span>"⏱ " {task.estimated_duration.clone()}</span>
            </div>
            <p class="muted small">{task.description.clone()}</p>
        </div>
    }
}

#[component]
pub fn MaintenanceScheduler() -> impl IntoView {
    let today = today();
    let tasks = RwSignal::new(mock_data::maintenance_tasks());
    let team = mock_data::team();
    let assignees: Vec<String> = team.iter().map(|m| m.name.clone()).collect();

    let (view_mode, set_view_mode) = signal(ViewMode::Calendar);
    let (month, set_month) = signal(month_start(today));
    let (selected_date, set_selected_date) = signal(Some(today));
    let (dialog_open, set_dialog_open) = signal(false);
    let draft = RwSignal::new(TaskDraft::default());

    let stats = move || tasks.with(|t| quick_stats(t, today));

    let close_dialog = move || {
        set_dialog_open.set(false);
        draft.set(TaskDraft::default());
    };

    let create_task = move |_| {
        let current = draft.get_untracked();
        if !current.is_ready() {
            return;
        }
        tasks.update(|list| {
            let task = current.into_task(next_task_id(list), today);
            log::info!("[SCHEDULER] scheduled {} for {}", task.title, task.due_date);
            list.push(task);
        });
        close_dialog();
    };

    let export_schedule = move |_| {
        download_or_log(SCHEDULE_FILE, CSV_MIME, &tasks.with_untracked(|t| schedule_csv(t)));
    };

    let calendar_cell = move |day: Option<NaiveDate>| match day {
        None => view! { <div class="day-cell empty"></div> }.into_any(),
        Some(date) => {
            let class = move || {
                if selected_date.get() == Some(date) {
                    "day-cell selected"
                } else if date == today {
                    "day-cell today"
                } else {
                    "day-cell"
                }
            };
            view! {
                <button class=class on:click=move |_| set_selected_date.set(Some(date))>
                    {date.format("%-d").to_string()}
                    {move || tasks.with(|t| day_marker(t, date)).map(|dot| view! { <span class=dot></span> })}
                </button>
            }
            .into_any()
        }
    };

    let calendar_view = move || {
        let weeks = month_grid(month.get());
        view! {
            <Card title="Calendar View" description="Click on a date to view scheduled tasks">
                <div class="calendar-layout">
                    <div class="calendar">
                        <div class="row-between">
                            <button class="btn ghost small" title="Previous month" on:click=move |_| set_month.update(|m| *m = shift_month(*m, -1))>
                                "‹"
                            </button>
                            <span class="strong">{month_title(month.get_untracked())}</span>
                            <button class="btn ghost small" title="Next month" on:click=move |_| set_month.update(|m| *m = shift_month(*m, 1))>
                                "›"
                            </button>
                        </div>
                        <div class="calendar-grid">
                            {WEEKDAY_HEADERS.iter().map(|d| view! { <div class="day-header">{*d}</div> }).collect_view()}
                            {weeks.into_iter().flat_map(|week| week.into_iter().map(calendar_cell)).collect_view()}
                        </div>
                    </div>

                    <div class="grow">
                        {move || match selected_date.get() {
                            None => view! { <p class="muted small">"Select a date"</p> }.into_any(),
                            Some(date) => {
                                let due = tasks.with(|t| tasks_on(t, date));
                                view! {
                                    <h4>{format!("Tasks for {}", date.format("%Y-%m-%d"))}</h4>
                                    <div class="stack">
                                        {if due.is_empty() {
                                            view! { <p class="muted small">"No tasks scheduled for this date"</p> }.into_any()
                                        } else {
                                            due.into_iter().map(day_task_row).collect_view().into_any()
                                        }}
                                    </div>
                                }
                                .into_any()
                            }
                        }}
                    </div>
                </div>
            </Card>
        }
    };

    let list_view = move || {
        view! {
            <Card title="All Tasks" description="Complete list of maintenance tasks">
                <div class="stack">
                    {move || tasks.get().into_iter().map(task_card).collect_view()}
                </div>
            </Card>
        }
    };

    let urgent_list = move || {
        tasks
            .with(|t| urgent(t, today))
            .into_iter()
            .map(|task| {
                let badge = urgent_badge(&task);
                view! {
                    <div class="urgent-task">
                        <h5>{task.title}</h5>
                        <p class="muted tiny">{task.location}</p>
                        <div class="row-between">
                            <span class="tiny">{task.assignee}</span>
                            <span class="badge destructive tiny">{badge}</span>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let team_list = team
        .into_iter()
        .map(|member| {
            let name = member.name.clone();
            let status = move || tasks.with(|t| availability(t, &name));
            view! {
                <div class="row">
                    <span class="avatar small">{member.avatar.clone()}</span>
                    <div class="grow">
                        <p class="small strong">{member.name.clone()}</p>
                        <p class="muted tiny">{member.role.clone()}</p>
                    </div>
                    <span class="badge outline">{status}</span>
                </div>
            }
        })
        .collect_view();

    let mode_button = move |mode: ViewMode, label: &'static str| {
        view! {
            <button
                class=move || if view_mode.get() == mode { "btn" } else { "btn outline" }
                on:click=move |_| set_view_mode.set(mode)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page maintenance-scheduler">
            <Card title="Maintenance Scheduler" description="Schedule, assign, and track maintenance tasks for railway fittings">
                <div class="toolbar">
                    <div class="row">
                        {mode_button(ViewMode::Calendar, "📅 Calendar")}
                        {mode_button(ViewMode::List, "☰ List")}
                    </div>
                    <button class="btn" on:click=move |_| set_dialog_open.set(true)>"+ Schedule Task"</button>
                </div>

                <div class="grid cols-4 centered">
                    <div>
                        <p class="stat-value text-blue">{move || stats().upcoming}</p>
                        <p class="muted small">"Upcoming Tasks"</p>
                    </div>
                    <div>
                        <p class="stat-value text-red">{move || stats().overdue}</p>
                        <p class="muted small">"Overdue Tasks"</p>
                    </div>
                    <div>
                        <p class="stat-value text-green">{move || stats().completed}</p>
                        <p class="muted small">"Completed This Month"</p>
                    </div>
                    <div>
                        <p class="stat-value text-purple">{move || stats().in_progress}</p>
                        <p class="muted small">"In Progress"</p>
                    </div>
                </div>
            </Card>

            <Show when=move || dialog_open.get()>
                <div class="dialog-backdrop">
                    <div class="dialog wide">
                        <h3>"Schedule New Maintenance Task"</h3>
                        <p class="muted small">"Create a new maintenance task for a railway fitting"</p>
                        <div class="grid cols-2">
                            <input
                                type="text"
                                class="input"
                                placeholder="Task Title"
                                prop:value=move || draft.get().title
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.title = value);
                                }
                            />
                            <input
                                type="text"
                                class="input mono"
                                placeholder="Fitting ID (e.g., RF-2301-A45)"
                                prop:value=move || draft.get().fitting_id
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.fitting_id = value);
                                }
                            />
                            <input
                                type="text"
                                class="input"
                                placeholder="Location"
                                prop:value=move || draft.get().location
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.location = value);
                                }
                            />
                            <select
                                class="select"
                                prop:value=move || draft.get().task_type.as_str()
                                on:change=move |ev| {
                                    if let Some(t) = TaskType::parse(&event_target_value(&ev)) {
                                        draft.update(|d| d.task_type = t);
                                    }
                                }
                            >
                                {TaskType::ALL.into_iter().map(|t| view! {
                                    <option value=t.as_str()>{t.label()}</option>
                                }).collect_view()}
                            </select>
                            <select
                                class="select"
                                prop:value=move || draft.get().priority.as_str()
                                on:change=move |ev| {
                                    if let Some(p) = Priority::parse(&event_target_value(&ev)) {
                                        draft.update(|d| d.priority = p);
                                    }
                                }
                            >
                                {Priority::ALL.into_iter().map(|p| view! {
                                    <option value=p.as_str()>{p.label()}</option>
                                }).collect_view()}
                            </select>
                            <select
                                class="select"
                                prop:value=move || draft.get().assignee
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.assignee = value);
                                }
                            >
                                <option value="">"Assign to"</option>
                                {assignees.iter().map(|name| view! {
                                    <option value=name.clone()>{name.clone()}</option>
                                }).collect_view()}
                            </select>
                            <input
                                type="date"
                                class="input"
                                on:change=move |ev| {
                                    let due = parse_input_date(&event_target_value(&ev));
                                    draft.update(|d| d.due_date = due);
                                }
                            />
                            <input
                                type="text"
                                class="input"
                                placeholder="Estimated Duration"
                                prop:value=move || draft.get().estimated_duration
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.estimated_duration = value);
                                }
                            />
                        </div>
                        <textarea
                            class="input"
                            placeholder="Task Description"
                            prop:value=move || draft.get().description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.description = value);
                            }
                        ></textarea>
                        <div class="row">
                            <button class="btn grow" disabled=move || !draft.get().is_ready() on:click=create_task>
                                "Create Task"
                            </button>
                            <button class="btn outline" on:click=move |_| close_dialog()>"Cancel"</button>
                        </div>
                    </div>
                </div>
            </Show>

            <div class="grid cols-3">
                <div class="span-2">
                    {move || match view_mode.get() {
                        ViewMode::Calendar => calendar_view().into_any(),
                        ViewMode::List => list_view().into_any(),
                    }}
                </div>

                <div class="stack">
                    <Card title="Urgent Tasks" description="Tasks requiring immediate attention" class="urgent">
                        <div class="stack">{urgent_list}</div>
                    </Card>
                    <Card title="Team Status" description="Current team availability">
                        <div class="stack">{team_list}</div>
                    </Card>
                    <Card title="Quick Actions">
                        <div class="stack">
                            <button class="btn outline full" on:click=export_schedule>"📅 Export Schedule"</button>
                        </div>
                    </Card>
                </div>
            </div>
        </div>
    }
}
