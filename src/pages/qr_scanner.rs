//! QR Scanner Page
//!
//! Simulated camera scan, manual id entry, image upload and scan history.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::{Card, StatusBadge};
use crate::config::use_config;
use crate::context::use_app_context;
use crate::mock_data::{self, QUICK_LOOKUP_IDS};
use crate::models::ScanResult;
use crate::scanner::{
    add_to_inspection_list, manual_lookup, push_history, record_for, status_banner, timestamp_now,
};
use crate::store::Page;

#[component]
pub fn QrScanner() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let scan_delay = config.scan_delay_ms;
    let upload_delay = config.upload_delay_ms;
    let history_cap = config.scan_history_cap;

    let (scanning, set_scanning) = signal(false);
    let (result, set_result) = signal(None::<ScanResult>);
    let (history, set_history) = signal(mock_data::scan_history());
    let (manual_id, set_manual_id) = signal(String::new());
    let (inspection_list, set_inspection_list) = signal(Vec::<String>::new());
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let start_scan = move |_| {
        set_scanning.set(true);
        log::debug!("[SCANNER] scanning for {} ms", scan_delay);
        Timeout::new(scan_delay, move || {
            let scanned = mock_data::mock_scan_result();
            let record = record_for(&scanned, timestamp_now());
            // Page left before the scan resolved
            if set_scanning.try_set(false).is_some() {
                return;
            }
            set_result.set(Some(scanned));
            set_history.update(|h| push_history(h, record, history_cap));
            log::info!("[SCANNER] scan complete");
        })
        .forget();
    };

    let lookup = move || {
        if let Some(found) = manual_lookup(&manual_id.get_untracked()) {
            log::debug!("[SCANNER] manual lookup {}", found.fitting_id);
            set_result.set(Some(found));
            set_manual_id.set(String::new());
        }
    };

    let on_file_chosen = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let chosen = input.files().map(|files| files.length() > 0).unwrap_or(false);
        if !chosen {
            return;
        }
        input.set_value("");
        log::debug!("[SCANNER] processing uploaded image");
        Timeout::new(upload_delay, move || {
            if set_result.try_set(Some(mock_data::mock_scan_result())).is_some() {
                return;
            }
            log::info!("[SCANNER] upload resolved");
        })
        .forget();
    };

    let open_file_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let add_to_list = move |id: String| {
        set_inspection_list.update(|list| {
            if add_to_inspection_list(list, &id) {
                log::info!("[SCANNER] {} added to inspection list", id);
            } else {
                log::debug!("[SCANNER] {} already on inspection list", id);
            }
        });
    };

    let quick_ids = QUICK_LOOKUP_IDS
        .into_iter()
        .map(|id| view! {
            <button class="btn outline small mono" on:click=move |_| ctx.navigate_to_fitting(id)>
                {id}
            </button>
        })
        .collect_view();

    let result_card = move || {
        result.get().map(|r| {
            let details_id = r.fitting_id.clone();
            let list_id = r.fitting_id.clone();
            let banner = status_banner(&r);
            view! {
                <Card title="Scan Result" description="Fitting information retrieved">
                    <div class="stack">
                        <div class="row-between">
                            <span class="mono strong">{r.fitting_id.clone()}</span>
                            <span class=r.status.badge_class()>{banner}</span>
                        </div>
                        <div class="grid cols-2 small">
                            <div><span class="muted">"Type: "</span>{r.fitting_type.label()}</div>
                            <div><span class="muted">"Location: "</span>{r.location.clone()}</div>
                            <div><span class="muted">"Last Inspection: "</span>{r.last_inspection.clone()}</div>
                            <div><span class="muted">"Risk Score: "</span>{format!("{}%", r.risk_score)}</div>
                        </div>
                        {r.next_action.clone().map(|action| view! {
                            <div class="alert destructive small">"⚠ " {action}</div>
                        })}
                        <div class="grid cols-2">
                            <button class="btn" on:click=move |_| ctx.navigate_to_fitting(&details_id)>
                                "View Full Details"
                            </button>
                            <button class="btn outline" on:click=move |_| ctx.navigate(Page::Scheduler)>
                                "Schedule Maintenance"
                            </button>
                            <button class="btn outline" on:click=move |_| ctx.navigate(Page::Reports)>
                                "Generate Report"
                            </button>
                            <button class="btn outline" on:click=move |_| add_to_list(list_id.clone())>
                                "Add to Inspection List"
                            </button>
                        </div>
                    </div>
                </Card>
            }
        })
    };

    view! {
        <div class="page qr-scanner">
            <div class="grid cols-2">
                <Card title="QR Code Scanner" description="Point the camera at a fitting tag">
                    <div class="stack">
                        <div class=move || if scanning.get() { "scan-viewport active" } else { "scan-viewport" }>
                            <Show
                                when=move || scanning.get()
                                fallback=|| view! {
                                    <div class="scan-idle">
                                        <span class="scan-icon">"▣"</span>
                                        <p class="muted small">"Camera ready"</p>
                                    </div>
                                }
                            >
                                <div class="scan-line"></div>
                                <p class="small">"Scanning..."</p>
                            </Show>
                        </div>
                        <button class="btn full" disabled=move || scanning.get() on:click=start_scan>
                            {move || if scanning.get() { "Scanning..." } else { "📷 Start Scanning" }}
                        </button>
                        <button class="btn outline full" on:click=open_file_picker>
                            "⬆ Upload Image"
                        </button>
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            node_ref=file_input
                            on:change=on_file_chosen
                        />
                    </div>
                </Card>

                <Card title="Manual Entry" description="Type a fitting ID">
                    <div class="stack">
                        <div class="row">
                            <input
                                type="text"
                                class="input mono"
                                placeholder="e.g. RF-2301-A45"
                                prop:value=move || manual_id.get()
                                on:input=move |ev| set_manual_id.set(event_target_value(&ev))
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        lookup();
                                    }
                                }
                            />
                            <button
                                class="btn"
                                disabled=move || manual_id.get().trim().is_empty()
                                on:click=move |_| lookup()
                            >
                                "Search"
                            </button>
                        </div>
                        <p class="muted small">"Quick lookup"</p>
                        <div class="grid cols-2">{quick_ids}</div>
                        <Show when=move || !inspection_list.get().is_empty()>
                            <p class="small">
                                {move || format!("Inspection list: {}", inspection_list.get().join(", "))}
                            </p>
                        </Show>
                    </div>
                </Card>
            </div>

            {result_card}

            <Card title="Recent Scans" description="Latest scans from this device">
                <div class="stack">
                    {move || history.get().into_iter().map(|record| {
                        let id = record.fitting_id.clone();
                        view! {
                            <div class="list-row clickable" on:click=move |_| ctx.navigate_to_fitting(&id)>
                                <div>
                                    <p class="mono small">{record.fitting_id.clone()}</p>
                                    <p class="muted small">{format!("{} · {}", record.location, record.timestamp)}</p>
                                </div>
                                <StatusBadge status=record.status />
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Card>
        </div>
    }
}
