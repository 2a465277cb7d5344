//! Reports Page
//!
//! Report generation controls, maintenance and cost charts, quick-report grid.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos_charts::{BarChart, LineChart, PieChart, Series, Slice};

use crate::components::Card;
use crate::export::{
    download_or_log, maintenance_csv, report_csv_name, report_pdf_name, CSV_MIME, MOCK_PDF_CONTENT, PDF_MIME,
};
use crate::mock_data;
use crate::models::ReportType;
use crate::schedule::{parse_input_date, today};

const DEFAULT_REPORT: &str = "maintenance-summary";

/// Trigger text of the date range picker
pub fn range_label(from: Option<NaiveDate>, to: Option<NaiveDate>) -> &'static str {
    if from.is_some() || to.is_some() {
        "Custom Range"
    } else {
        "Select dates"
    }
}

/// Look up a report type, falling back to a generic title for unknown ids
pub fn report_title(types: &[ReportType], id: &str) -> &'static str {
    types.iter().find(|r| r.id == id).map(|r| r.name).unwrap_or("Report")
}

#[component]
pub fn Reports() -> impl IntoView {
    let types = StoredValue::new(mock_data::report_types());
    let (selected, set_selected) = signal(DEFAULT_REPORT.to_string());
    let (range_from, set_range_from) = signal(None::<NaiveDate>);
    let (range_to, set_range_to) = signal(None::<NaiveDate>);
    let (picker_open, set_picker_open) = signal(false);

    let selected_type = move || {
        let id = selected.get();
        types.with_value(|t| t.iter().find(|r| r.id == id).copied())
    };

    let generate_pdf = move |_| {
        let id = selected.get_untracked();
        let title = types.with_value(|t| report_title(t, &id));
        log::info!(
            "[REPORTS] generating {} at {}",
            title,
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        download_or_log(&report_pdf_name(&id, today()), PDF_MIME, MOCK_PDF_CONTENT);
    };

    let export_csv = move |_| {
        let id = selected.get_untracked();
        download_or_log(&report_csv_name(&id), CSV_MIME, &maintenance_csv(&mock_data::maintenance_by_month()));
    };

    let monthly = mock_data::maintenance_by_month();
    let monthly_categories: Vec<String> = monthly.iter().map(|m| m.month.to_string()).collect();
    let monthly_series = vec![
        Series::new("preventive", "#22c55e", monthly.iter().map(|m| m.preventive as f64)),
        Series::new("corrective", "#f59e0b", monthly.iter().map(|m| m.corrective as f64)),
        Series::new("emergency", "#ef4444", monthly.iter().map(|m| m.emergency as f64)),
    ];

    let risk_slices: Vec<Slice> = mock_data::risk_distribution()
        .into_iter()
        .map(|s| Slice::new(s.name, s.value as f64, s.color))
        .collect();

    let costs = mock_data::cost_trends();
    let cost_categories: Vec<String> = costs.iter().map(|c| c.month.to_string()).collect();
    let cost_series = vec![
        Series::new("maintenance", "#3b82f6", costs.iter().map(|c| c.maintenance as f64)),
        Series::new("replacement", "#ef4444", costs.iter().map(|c| c.replacement as f64)),
    ];

    let quick_reports = move || {
        types.with_value(|t| {
            t.iter()
                .map(|report| {
                    let id = report.id;
                    let class = move || {
                        if selected.get() == id {
                            "card quick-report clickable selected"
                        } else {
                            "card quick-report clickable"
                        }
                    };
                    view! {
                        <div class=class on:click=move |_| set_selected.set(id.to_string())>
                            <p class="strong">{report.name}</p>
                            <p class="muted small">{report.description}</p>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let statistics = mock_data::report_statistics()
        .into_iter()
        .map(|m| view! {
            <div class="metric">
                <p class="stat-value">{m.value}</p>
                <p class="muted small">{m.label}</p>
                <span class="badge outline">{m.tag}</span>
            </div>
        })
        .collect_view();

    view! {
        <div class="page reports">
            <Card title="Generate Reports" description="Create comprehensive reports for maintenance, compliance, and analysis">
                <div class="stack">
                    <div class="grid cols-3">
                        <label class="field">
                            <span class="small">"Report Type"</span>
                            <select
                                class="select"
                                prop:value=move || selected.get()
                                on:change=move |ev| set_selected.set(event_target_value(&ev))
                            >
                                {types.with_value(|t| t.iter().map(|r| view! {
                                    <option value=r.id>{r.name}</option>
                                }).collect_view())}
                            </select>
                        </label>

                        <div class="field">
                            <span class="small">"Date Range"</span>
                            <button class="btn outline full" on:click=move |_| set_picker_open.update(|o| *o = !*o)>
                                "📅 " {move || range_label(range_from.get(), range_to.get())}
                            </button>
                            <Show when=move || picker_open.get()>
                                <div class="popover date-range">
                                    <label class="field">
                                        <span class="small">"From"</span>
                                        <input
                                            type="date"
                                            class="input"
                                            on:change=move |ev| set_range_from.set(parse_input_date(&event_target_value(&ev)))
                                        />
                                    </label>
                                    <label class="field">
                                        <span class="small">"To"</span>
                                        <input
                                            type="date"
                                            class="input"
                                            on:change=move |ev| set_range_to.set(parse_input_date(&event_target_value(&ev)))
                                        />
                                    </label>
                                </div>
                            </Show>
                        </div>

                        <div class="field">
                            <span class="small">"Actions"</span>
                            <div class="row">
                                <button class="btn grow" on:click=generate_pdf>"⬇ Generate PDF"</button>
                                <button class="btn outline" on:click=export_csv>"Export CSV"</button>
                            </div>
                        </div>
                    </div>

                    {move || selected_type().map(|r| view! {
                        <div class="info-strip small">
                            <strong>{format!("{}:", r.name)}</strong>
                            " "
                            {r.description}
                        </div>
                    })}
                </div>
            </Card>

            <div class="grid cols-2">
                <Card title="Maintenance Activities by Month" description="Breakdown of maintenance types">
                    <BarChart categories=monthly_categories series=monthly_series stacked=true />
                </Card>
                <Card title="Risk Distribution" description="Current risk levels across all fittings">
                    <PieChart slices=risk_slices />
                </Card>
            </div>

            <Card title="Cost Analysis Trends" description="Monthly maintenance and replacement costs">
                <LineChart categories=cost_categories series=cost_series />
            </Card>

            <div class="grid cols-3">{quick_reports}</div>

            <Card title="Report Statistics">
                <div class="grid cols-4">{statistics}</div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 1);
        assert_eq!(range_label(None, None), "Select dates");
        assert_eq!(range_label(day, None), "Custom Range");
        assert_eq!(range_label(None, day), "Custom Range");
        assert_eq!(range_label(day, day), "Custom Range");
    }

    #[test]
    fn test_report_title() {
        let types = mock_data::report_types();
        assert_eq!(report_title(&types, DEFAULT_REPORT), "Maintenance Summary");
        assert_eq!(report_title(&types, "cost-analysis"), "Cost Analysis");
        assert_eq!(report_title(&types, "nope"), "Report");
    }
}
