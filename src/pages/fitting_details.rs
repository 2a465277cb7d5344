//! Fitting Details Page
//!
//! Full profile of a single fitting: identity, QR tag, risk, specifications
//! and maintenance history.

use leptos::prelude::*;
use leptos_charts::ProgressBar;

use crate::components::{Card, StatusBadge};
use crate::context::use_app_context;
use crate::export::{download_or_log, fitting_report_name, profile_csv, CSV_MIME};
use crate::mock_data;
use crate::qr;
use crate::store::Page;

#[component]
pub fn FittingDetails(fitting_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let profile = mock_data::fitting_profile(&fitting_id);
    let fitting = profile.fitting.clone();
    let band = fitting.risk_band();

    let export_profile = {
        let profile = profile.clone();
        move |_| {
            download_or_log(&fitting_report_name(&profile.fitting.id), CSV_MIME, &profile_csv(&profile));
        }
    };

    let specs = [
        ("Weight", profile.specifications.weight.clone()),
        ("Dimensions", profile.specifications.dimensions.clone()),
        ("Torque Spec", profile.specifications.torque_spec.clone()),
        ("Temperature Range", profile.specifications.temperature_range.clone()),
        ("Material", profile.material.clone()),
        ("Manufacturer", profile.manufacturer.clone()),
        ("Batch Number", profile.batch_number.clone()),
    ]
    .into_iter()
    .map(|(label, value)| view! {
        <div class="spec-row">
            <span class="muted small">{label}</span>
            <span class="small">{value}</span>
        </div>
    })
    .collect_view();

    let history = profile
        .history
        .iter()
        .map(|record| {
            let date = record.date.format("%Y-%m-%d").to_string();
            view! {
                <div class="timeline-entry">
                    <span class="timeline-dot"></span>
                    <div class="timeline-body">
                        <div class="row-between">
                            <span class="strong">{record.kind.clone()}</span>
                            <span class="badge outline">{record.status.clone()}</span>
                        </div>
                        <p class="muted small">{format!("{} · {}", date, record.technician)}</p>
                        <p class="small">{record.notes.clone()}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page fitting-details">
            <div class="toolbar">
                <button class="btn ghost small" on:click=move |_| ctx.navigate(Page::Dashboard)>
                    "← Back to Dashboard"
                </button>
                <div class="toolbar-right">
                    <button class="btn outline small" on:click=move |_| ctx.navigate(Page::TrackMap)>
                        "📍 View on Map"
                    </button>
                    <button class="btn small" on:click=export_profile>
                        "⬇ Export Report"
                    </button>
                </div>
            </div>

            <div class="grid cols-3">
                <Card title=fitting.id.clone() description=fitting.fitting_type.label() class="span-2">
                    <div class="details-header">
                        <img class="qr-image" src=qr::placeholder_data_uri() alt="Fitting QR code" />
                        <div class="stack">
                            <StatusBadge status=fitting.status upper=true />
                            <p class="small">"📍 " {profile.detailed_location.clone()}</p>
                            <p class="muted small mono">
                                {format!("{:.4}, {:.4}", profile.latitude, profile.longitude)}
                            </p>
                        </div>
                    </div>

                    <div class="grid cols-3 date-grid">
                        <div>
                            <p class="muted small">"Installed"</p>
                            <p>{fitting.install_date.format("%Y-%m-%d").to_string()}</p>
                        </div>
                        <div>
                            <p class="muted small">"Last Inspection"</p>
                            <p>{fitting.last_inspection.format("%Y-%m-%d").to_string()}</p>
                        </div>
                        <div>
                            <p class="muted small">"Next Inspection"</p>
                            <p>{fitting.next_inspection.format("%Y-%m-%d").to_string()}</p>
                        </div>
                    </div>
                </Card>

                <Card title="Risk Assessment" description="AI-computed failure risk">
                    <div class="stack">
                        <div class="row-between">
                            <span>"Risk Score"</span>
                            <span class=band.text_class()>{format!("{}%", fitting.risk_score)}</span>
                        </div>
                        <ProgressBar value={fitting.risk_score as f64} />
                    </div>
                </Card>
            </div>

            <div class="grid cols-3">
                <Card title="Specifications">
                    <div class="stack">{specs}</div>
                </Card>
                <Card title="Maintenance History" description="Most recent first" class="span-2">
                    <div class="timeline">{history}</div>
                </Card>
            </div>

            <Card title="Quick Actions">
                <div class="grid cols-3">
                    <button class="btn outline" on:click=move |_| ctx.navigate(Page::Scheduler)>
                        "📅 Schedule Inspection"
                    </button>
                    <button class="btn outline" on:click=move |_| ctx.navigate(Page::Reports)>
                        "📄 Generate Report"
                    </button>
                    <button class="btn outline" on:click=move |_| ctx.navigate(Page::TrackMap)>
                        "🗺 View on Map"
                    </button>
                </div>
            </Card>
        </div>
    }
}
