//! Search & Filter Page
//!
//! Filterable fitting table with row selection and CSV export.

use leptos::prelude::*;

use crate::components::{Card, StatusBadge};
use crate::context::use_app_context;
use crate::export::{download_or_log, fittings_csv, CSV_MIME, SEARCH_RESULTS_FILE};
use crate::filters::{parse_choice, results_summary, status_counts, FittingFilter, Selection, ALL};
use crate::mock_data;
use crate::models::{Fitting, FittingStatus, FittingType, Track};
use crate::store::Page;

fn stop(ev: web_sys::MouseEvent) {
    ev.stop_propagation();
}

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = StoredValue::new(mock_data::fittings());
    let total = catalog.with_value(|c| c.len());
    // Quick filter cards read worst status first
    let quick_counts: Vec<(FittingStatus, usize)> =
        catalog.with_value(|c| status_counts(c)).into_iter().rev().collect();

    let filter = RwSignal::new(FittingFilter::default());
    let selection = RwSignal::new(Selection::default());
    let (show_advanced, set_show_advanced) = signal(false);

    let filtered = Memo::new(move |_| {
        let current = filter.get();
        catalog.with_value(|c| current.apply(c))
    });
    let visible_ids = move || filtered.get().iter().map(|f| f.id.clone()).collect::<Vec<_>>();

    let export_filtered = move |_| {
        download_or_log(SEARCH_RESULTS_FILE, CSV_MIME, &fittings_csv(&filtered.get_untracked()));
    };
    let export_selected = move |_| {
        let picked = catalog.with_value(|c| selection.get_untracked().pick(c));
        download_or_log(SEARCH_RESULTS_FILE, CSV_MIME, &fittings_csv(&picked));
    };

    let quick_cards = quick_counts
        .into_iter()
        .map(|(status, count)| {
            let dot = format!("background-color: {}", status.color());
            view! {
                <div class="card quick-filter clickable" on:click=move |_| filter.update(|f| f.status = Some(status))>
                    <div class="row-between">
                        <div>
                            <p class="muted small">{status.label()}</p>
                            <p class="stat-value">{count}</p>
                        </div>
                        <span class="legend-dot" style=dot></span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let row = move |fitting: Fitting| {
        let row_id = fitting.id.clone();
        let check_id = fitting.id.clone();
        let toggle_id = fitting.id.clone();
        let view_id = fitting.id.clone();
        let band = fitting.risk_band();
        let is_critical = fitting.status == FittingStatus::Critical;
        view! {
            <tr class="clickable" on:click=move |_| ctx.navigate_to_fitting(&row_id)>
                <td on:click=stop>
                    <input
                        type="checkbox"
                        prop:checked=move || selection.get().contains(&check_id)
                        on:change=move |_| selection.update(|s| s.toggle(&toggle_id))
                    />
                </td>
                <td class="mono">{fitting.id.clone()}</td>
                <td>{fitting.fitting_type.label()}</td>
                <td>"📍 " {fitting.location.clone()}</td>
                <td><StatusBadge status=fitting.status /></td>
                <td><span class=band.text_class()>{format!("{}/100", fitting.risk_score)}</span></td>
                <td>{fitting.last_inspection.format("%Y-%m-%d").to_string()}</td>
                <td>"📅 " {fitting.next_inspection.format("%Y-%m-%d").to_string()}</td>
                <td on:click=stop>
                    <button class="btn ghost small" on:click=move |_| ctx.navigate_to_fitting(&view_id)>"View"</button>
                    {is_critical.then(|| view! { <span class="risk-critical" title="Critical">"⚠"</span> })}
                </td>
            </tr>
        }
    };

    view! {
        <div class="page search-panel">
            <Card title="Search & Filter Fittings" description="Find specific fittings by ID, location, type, or condition">
                <div class="stack">
                    <div class="toolbar">
                        <input
                            type="text"
                            class="input grow"
                            placeholder="Search by fitting ID, location, or type..."
                            prop:value=move || filter.get().search
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.search = value);
                            }
                        />
                        <button class="btn outline" on:click=move |_| set_show_advanced.update(|s| *s = !*s)>
                            "⚙ Filters"
                        </button>
                        <button class="btn outline" on:click=export_filtered>
                            "⬇ Export"
                        </button>
                    </div>

                    <Show when=move || show_advanced.get()>
                        <div class="grid cols-3 filter-panel">
                            <label class="field">
                                <span class="small">"Fitting Type"</span>
                                <select
                                    class="select"
                                    prop:value=move || filter.get().fitting_type.map(|t| t.label()).unwrap_or(ALL)
                                    on:change=move |ev| {
                                        let choice = parse_choice(&event_target_value(&ev), FittingType::from_label);
                                        filter.update(|f| f.fitting_type = choice);
                                    }
                                >
                                    <option value=ALL>"All Types"</option>
                                    {FittingType::ALL.into_iter().map(|t| view! {
                                        <option value=t.label()>{t.label()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                            <label class="field">
                                <span class="small">"Status"</span>
                                <select
                                    class="select"
                                    prop:value=move || filter.get().status.map(|s| s.as_str()).unwrap_or(ALL)
                                    on:change=move |ev| {
                                        let choice = parse_choice(&event_target_value(&ev), FittingStatus::parse);
                                        filter.update(|f| f.status = choice);
                                    }
                                >
                                    <option value=ALL>"All Statuses"</option>
                                    {FittingStatus::ALL.into_iter().map(|s| view! {
                                        <option value=s.as_str()>{s.label()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                            <label class="field">
                                <span class="small">"Track"</span>
                                <select
                                    class="select"
                                    prop:value=move || filter.get().track.map(|t| t.label()).unwrap_or(ALL)
                                    on:change=move |ev| {
                                        let choice = parse_choice(&event_target_value(&ev), Track::from_label);
                                        filter.update(|f| f.track = choice);
                                    }
                                >
                                    <option value=ALL>"All Tracks"</option>
                                    {Track::ALL.into_iter().map(|t| view! {
                                        <option value=t.label()>{t.label()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                        </div>
                    </Show>

                    <div class="row-between muted small">
                        <span>{move || results_summary(filtered.get().len(), total, selection.get().len())}</span>
                        <Show when=move || !selection.get().is_empty()>
                            <div class="row">
                                <button class="btn outline small" on:click=export_selected>"Bulk Export"</button>
                                <button class="btn outline small" on:click=move |_| ctx.navigate(Page::Scheduler)>
                                    "Schedule Inspections"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </Card>

            <Card title="Search Results" description="Click on any fitting to view detailed information">
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th class="w-12">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selection.get().covers(&visible_ids())
                                        on:change=move |_| {
                                            let visible = visible_ids();
                                            selection.update(|s| s.toggle_all(&visible));
                                        }
                                    />
                                </th>
                                <th>"Fitting ID"</th>
                                <th>"Type"</th>
                                <th>"Location"</th>
                                <th>"Status"</th>
                                <th>"Risk Score"</th>
                                <th>"Last Inspection"</th>
                                <th>"Next Inspection"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || filtered.get() key=|f| f.id.clone() children=row />
                        </tbody>
                    </table>
                </div>
            </Card>

            <div class="grid cols-4">{quick_cards}</div>
        </div>
    }
}
