//! Track Map Page
//!
//! Schematic of the three running lines with a marker per fitting.

use leptos::prelude::*;

use crate::components::Card;
use crate::config::{use_config, ZoomConfig};
use crate::context::use_app_context;
use crate::export::{download_or_log, map_csv, CSV_MIME, MAP_DATA_FILE};
use crate::filters::{parse_choice, status_counts, MapFilter, ALL};
use crate::mock_data;
use crate::models::{Fitting, MapPosition, Track};

/// Pair fittings with their map position; fittings without one are not drawn
pub fn place_markers(fittings: Vec<Fitting>, positions: &[(&str, MapPosition)]) -> Vec<(Fitting, MapPosition)> {
    fittings
        .into_iter()
        .filter_map(|f| {
            let pos = positions.iter().find(|(id, _)| *id == f.id).map(|(_, p)| *p)?;
            Some((f, pos))
        })
        .collect()
}

/// Last dash-separated segment of an id ("RF-2301-A45" -> "A45")
pub fn marker_label(id: &str) -> &str {
    id.rsplit('-').next().unwrap_or(id)
}

const RAIL_ROWS: [u32; 6] = [150, 160, 200, 210, 250, 260];

#[component]
pub fn TrackMap() -> impl IntoView {
    let ctx = use_app_context();
    let zoom_config = use_config().zoom;

    let catalog = mock_data::fittings();
    let legend = status_counts(&catalog);
    let markers = StoredValue::new(place_markers(catalog, &mock_data::map_positions()));

    let (zoom, set_zoom) = signal(zoom_config.initial);
    let filter = RwSignal::new(MapFilter::default());

    let visible = move || {
        let current = filter.get();
        markers.with_value(|all| {
            all.iter()
                .filter(|(f, _)| current.matches(f))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let export_map = move |_| {
        let rows = visible();
        download_or_log(MAP_DATA_FILE, CSV_MIME, &map_csv(&rows));
    };

    let legend_view = legend
        .into_iter()
        .map(|(status, count)| {
            let style = format!("background-color: {}", status.color());
            view! {
                <div class="legend-item">
                    <span class="legend-dot" style=style></span>
                    <span class="small">{format!("{} ({})", status.label(), count)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page track-map">
            <Card title="Interactive Track Map" description="Click a fitting marker to open its details">
                <div class="toolbar">
                    <input
                        type="text"
                        class="input w-64"
                        placeholder="Search by fitting ID or location..."
                        prop:value=move || filter.get().search
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.search = value);
                        }
                    />
                    <select
                        class="select"
                        on:change=move |ev| {
                            let track = parse_choice(&event_target_value(&ev), Track::from_label);
                            filter.update(|f| f.track = track);
                        }
                    >
                        <option value=ALL>"All Tracks"</option>
                        {Track::ALL.into_iter().map(|t| view! {
                            <option value=t.label()>{t.label()}</option>
                        }).collect_view()}
                    </select>
                    <div class="zoom-controls">
                        <button class="btn outline small" title="Zoom Out" on:click=move |_| set_zoom.update(|z| *z = zoom_config.zoom_out(*z))>
                            "−"
                        </button>
                        <span class="small zoom-label">{move || ZoomConfig::label(zoom.get())}</span>
                        <button class="btn outline small" title="Zoom In" on:click=move |_| set_zoom.update(|z| *z = zoom_config.zoom_in(*z))>
                            "+"
                        </button>
                    </div>
                </div>

                <div class="legend">{legend_view}</div>

                <div class="map-frame">
                    <svg
                        class="map-canvas"
                        width="100%"
                        height="400"
                        viewBox="0 0 600 400"
                        style=move || format!("transform: scale({}); transform-origin: center", zoom.get())
                    >
                        <g>
                            {RAIL_ROWS.into_iter().map(|y| view! {
                                <line x1="50" y1=y x2="550" y2=y stroke="#374151" stroke-width="8" />
                            }).collect_view()}
                            {(0..20u32).map(|i| view! {
                                <rect x={50 + i * 25} y="130" width="4" height="150" fill="#8b5cf6" />
                            }).collect_view()}
                        </g>

                        <For
                            each=visible
                            key=|(f, _)| f.id.clone()
                            children=move |(fitting, pos)| {
                                let id = fitting.id.clone();
                                let label = marker_label(&fitting.id).to_string();
                                view! {
                                    <g class="map-marker">
                                        <circle
                                            cx=pos.x
                                            cy=pos.y
                                            r="8"
                                            fill=fitting.status.color()
                                            stroke="#ffffff"
                                            stroke-width="2"
                                            on:click=move |_| ctx.navigate_to_fitting(&id)
                                        />
                                        <text x=pos.x y={pos.y - 15.0} text-anchor="middle" class="marker-label">
                                            {label}
                                        </text>
                                    </g>
                                }
                            }
                        />

                        {(0..6u32).map(|i| view! {
                            <text x={100 + i * 80} y="100" text-anchor="middle" class="km-label">
                                {format!("KM {}", 150 + i * 50)}
                            </text>
                        }).collect_view()}
                    </svg>
                </div>
            </Card>

            <div class="grid cols-3">
                <Card title="Track Section Status">
                    <div class="stack">
                        <div class="row-between"><span>"Total Sections"</span><span class="badge outline">"15"</span></div>
                        <div class="row-between"><span>"Active Monitoring"</span><span class="badge success">"12"</span></div>
                        <div class="row-between"><span>"Requires Attention"</span><span class="badge destructive">"3"</span></div>
                    </div>
                </Card>
                <Card title="Recent Activity">
                    <div class="stack small">
                        <div class="activity-line"><span class="dot green"></span>"Inspection completed at KM 245"</div>
                        <div class="activity-line"><span class="dot yellow"></span>"New fitting installed at KM 312"</div>
                        <div class="activity-line"><span class="dot red"></span>"Alert: High vibration detected"</div>
                    </div>
                </Card>
                <Card title="Quick Actions">
                    <div class="stack">
                        <button class="btn outline full small" disabled=true title="Route planning is not available yet">
                            "📍 Generate Route Plan"
                        </button>
                        <button
                            class=move || if filter.get().critical_only { "btn full small" } else { "btn outline full small" }
                            on:click=move |_| filter.update(|f| f.critical_only = !f.critical_only)
                        >
                            {move || if filter.get().critical_only { "Show All Fittings" } else { "Filter Critical Fittings" }}
                        </button>
                        <button class="btn outline full small" on:click=export_map>
                            "Export Map Data"
                        </button>
                    </div>
                </Card>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_fitting_is_placed() {
        let markers = place_markers(mock_data::fittings(), &mock_data::map_positions());
        assert_eq!(markers.len(), mock_data::fittings().len());
        assert_eq!(markers[0].0.id, "RF-2301-A45");
        assert_eq!(markers[0].1, MapPosition { x: 150.0, y: 120.0 });
    }

    #[test]
    fn test_unplaced_fitting_is_skipped() {
        let markers = place_markers(mock_data::fittings(), &[("RF-2301-C78", MapPosition { x: 1.0, y: 2.0 })]);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].0.id, "RF-2301-C78");
    }

    #[test]
    fn test_marker_label() {
        assert_eq!(marker_label("RF-2301-A45"), "A45");
        assert_eq!(marker_label("X"), "X");
    }
}
