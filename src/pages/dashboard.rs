//! Dashboard Page
//!
//! Network-wide overview: headline stats, failure and age charts,
//! maintenance trend, critical fittings and risk zones.

use leptos::prelude::*;
use leptos_charts::{BarChart, LineChart, PieChart, ProgressBar, Series, Slice};

use crate::components::{format_thousands, Card, StatCard};
use crate::context::use_app_context;
use crate::mock_data;
use crate::store::Page;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let stats = mock_data::overview_stats();

    let failures = mock_data::failure_stats();
    let failure_categories: Vec<String> = failures.iter().map(|f| f.name.to_string()).collect();
    let failure_series = vec![Series::new(
        "Failures",
        "#ef4444",
        failures.iter().map(|f| f.failures as f64),
    )];

    let age_slices: Vec<Slice> = mock_data::age_distribution()
        .into_iter()
        .map(|s| Slice::new(s.name, s.value as f64, s.color))
        .collect();

    let trend = mock_data::maintenance_trend();
    let trend_categories: Vec<String> = trend.iter().map(|t| t.month.to_string()).collect();
    let trend_series = vec![
        Series::new("scheduled", "#3b82f6", trend.iter().map(|t| t.scheduled as f64)),
        Series::new("completed", "#22c55e", trend.iter().map(|t| t.completed as f64)),
        Series::new("emergency", "#ef4444", trend.iter().map(|t| t.emergency as f64)),
    ];

    let critical = mock_data::critical_fittings()
        .into_iter()
        .map(|f| {
            let id = f.id;
            let badge = if f.risk == "Critical" { "badge destructive" } else { "badge secondary" };
            view! {
                <div class="list-row clickable" on:click=move |_| ctx.navigate_to_fitting(id)>
                    <div class="row-between">
                        <span class="mono small">{f.id}</span>
                        <span class=badge>{f.risk}</span>
                    </div>
                    <div class="muted small">"📍 " {f.location}</div>
                    <p class="muted small">"Last inspected: " {f.last_inspection}</p>
                </div>
            }
        })
        .collect_view();

    let zones = mock_data::risk_zones()
        .into_iter()
        .map(|z| view! {
            <div class="risk-zone">
                <div class="row-between small">
                    <span>{z.label}</span>
                    <span>{format!("{}%", z.percent)}</span>
                </div>
                <ProgressBar value={z.percent as f64} class=z.class />
                <p class="muted small">{format!("{} sections", z.sections)}</p>
            </div>
        })
        .collect_view();

    view! {
        <div class="page dashboard">
            <div class="grid cols-4">
                <StatCard
                    title="Total Fittings"
                    value=format_thousands(stats.total_fittings)
                    caption="Across all tracks"
                    icon="▦"
                    tone="tone-blue"
                />
                <StatCard
                    title="Critical Alerts"
                    value=stats.critical_alerts.to_string()
                    caption="Require immediate attention"
                    icon="⚠"
                    tone="tone-red"
                />
                <StatCard
                    title="Due Inspections"
                    value=stats.due_inspections.to_string()
                    caption="This week"
                    icon="⏱"
                    tone="tone-amber"
                />
                <StatCard
                    title="Maintenance Complete"
                    value=format!("{}%", stats.completed_maintenance)
                    caption="This month"
                    icon="🔧"
                    tone="tone-green"
                />
            </div>

            <div class="grid cols-2">
                <Card title="Failure Analysis by Component Type" description="Number of failures in the last 6 months">
                    <BarChart categories=failure_categories series=failure_series />
                </Card>
                <Card title="Fitting Age Distribution" description="Distribution by installation age">
                    <PieChart slices=age_slices />
                </Card>
            </div>

            <div class="grid cols-3">
                <Card title="Maintenance Trends" description="Monthly maintenance activities" class="span-2">
                    <LineChart categories=trend_categories series=trend_series />
                </Card>
                <Card title="Critical Fittings" description="Requiring immediate attention">
                    <div class="stack">
                        {critical}
                        <button class="btn outline full small" on:click=move |_| ctx.navigate(Page::Search)>
                            "View All Critical Fittings"
                        </button>
                    </div>
                </Card>
            </div>

            <Card title="Risk Zone Overview" description="Track sections categorized by risk level">
                <div class="grid cols-3">{zones}</div>
            </Card>
        </div>
    }
}
