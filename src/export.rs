//! CSV Export
//!
//! Builds CSV text in memory and hands it to the browser as a download.

use std::borrow::Cow;

use chrono::NaiveDate;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{AppError, AppResult};
use crate::mock_data::MonthlyMaintenance;
use crate::models::{Fitting, FittingProfile, MaintenanceTask, MapPosition};

pub const CSV_MIME: &str = "text/csv";
pub const PDF_MIME: &str = "application/pdf";

pub const SEARCH_RESULTS_FILE: &str = "fitting_search_results.csv";
pub const MAP_DATA_FILE: &str = "track_map_fittings.csv";
pub const SCHEDULE_FILE: &str = "maintenance_schedule.csv";

/// Body of the placeholder PDF report
pub const MOCK_PDF_CONTENT: &str = "Mock PDF report content";

pub const FITTING_HEADER: [&str; 8] = [
    "ID",
    "Type",
    "Location",
    "Status",
    "Install Date",
    "Last Inspection",
    "Risk Score",
    "Next Inspection",
];

pub const MAINTENANCE_HEADER: [&str; 4] = [
    "Month",
    "Preventive Maintenance",
    "Corrective Maintenance",
    "Emergency Repairs",
];

const SCHEDULE_HEADER: [&str; 10] = [
    "ID",
    "Title",
    "Fitting ID",
    "Location",
    "Type",
    "Priority",
    "Assignee",
    "Due Date",
    "Estimated Duration",
    "Status",
];

const MAP_HEADER: [&str; 7] = ["ID", "KM", "Track", "Status", "Risk Score", "X", "Y"];

/// Quote a field containing a comma, quote or line break
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn join_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header line plus one line per row, separated by `\n`
pub fn to_csv<I>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut lines = vec![join_row(header)];
    lines.extend(rows.into_iter().map(|row| join_row(&row)));
    lines.join("\n")
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn fittings_csv(fittings: &[Fitting]) -> String {
    to_csv(
        &FITTING_HEADER,
        fittings.iter().map(|f| {
            vec![
                f.id.clone(),
                f.fitting_type.label().to_string(),
                f.location.clone(),
                f.status.as_str().to_string(),
                iso(f.install_date),
                iso(f.last_inspection),
                f.risk_score.to_string(),
                iso(f.next_inspection),
            ]
        }),
    )
}

pub fn maintenance_csv(months: &[MonthlyMaintenance]) -> String {
    to_csv(
        &MAINTENANCE_HEADER,
        months.iter().map(|m| {
            vec![
                m.month.to_string(),
                m.preventive.to_string(),
                m.corrective.to_string(),
                m.emergency.to_string(),
            ]
        }),
    )
}

pub fn schedule_csv(tasks: &[MaintenanceTask]) -> String {
    to_csv(
        &SCHEDULE_HEADER,
        tasks.iter().map(|t| {
            vec![
                t.id.clone(),
                t.title.clone(),
                t.fitting_id.clone(),
                t.location.clone(),
                t.task_type.as_str().to_string(),
                t.priority.as_str().to_string(),
                t.assignee.clone(),
                iso(t.due_date),
                t.estimated_duration.clone(),
                t.status.as_str().to_string(),
            ]
        }),
    )
}

pub fn map_csv(markers: &[(Fitting, MapPosition)]) -> String {
    to_csv(
        &MAP_HEADER,
        markers.iter().map(|(f, pos)| {
            vec![
                f.id.clone(),
                f.km_marker().to_string(),
                f.track().map(|t| t.label()).unwrap_or_default().to_string(),
                f.status.as_str().to_string(),
                f.risk_score.to_string(),
                pos.x.to_string(),
                pos.y.to_string(),
            ]
        }),
    )
}

/// Two-column field/value sheet for one fitting, history appended
pub fn profile_csv(profile: &FittingProfile) -> String {
    let f = &profile.fitting;
    let spec = &profile.specifications;
    let mut rows: Vec<Vec<String>> = [
        ("ID", f.id.clone()),
        ("Type", f.fitting_type.label().to_string()),
        ("Location", profile.detailed_location.clone()),
        ("Status", f.status.as_str().to_string()),
        ("Risk Score", f.risk_score.to_string()),
        ("Install Date", iso(f.install_date)),
        ("Last Inspection", iso(f.last_inspection)),
        ("Next Inspection", iso(f.next_inspection)),
        ("Material", profile.material.clone()),
        ("Manufacturer", profile.manufacturer.clone()),
        ("Batch Number", profile.batch_number.clone()),
        ("Weight", spec.weight.clone()),
        ("Dimensions", spec.dimensions.clone()),
        ("Torque Spec", spec.torque_spec.clone()),
        ("Temperature Range", spec.temperature_range.clone()),
        ("Latitude", profile.latitude.to_string()),
        ("Longitude", profile.longitude.to_string()),
    ]
    .into_iter()
    .map(|(field, value)| vec![field.to_string(), value])
    .collect();

    rows.extend(profile.history.iter().map(|record| {
        vec![
            format!("Maintenance {}", iso(record.date)),
            format!("{} by {}: {}", record.kind, record.technician, record.notes),
        ]
    }));

    to_csv(&["Field", "Value"], rows)
}

/// "maintenance-summary-2024-09-14.pdf"
pub fn report_pdf_name(report_id: &str, date: NaiveDate) -> String {
    format!("{}-{}.pdf", report_id, iso(date))
}

pub fn report_csv_name(report_id: &str) -> String {
    format!("{}.csv", report_id)
}

pub fn fitting_report_name(fitting_id: &str) -> String {
    format!("{}_report.csv", fitting_id)
}

/// Offer `content` as a file download through a temporary object URL
pub fn download(filename: &str, mime: &str, content: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let document = window.document().ok_or(AppError::NoDocument)?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| AppError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;

    log::info!("[EXPORT] {} ({} bytes)", filename, content.len());
    Ok(())
}

/// Download and log instead of propagating; for click handlers
pub fn download_or_log(filename: &str, mime: &str, content: &str) {
    if let Err(e) = download(filename, mime, content) {
        log::error!("[EXPORT] {} failed: {}", filename, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("RF-2301-A45"), "RF-2301-A45");
        assert_eq!(escape_field("KM 245.3, Track 1"), "\"KM 245.3, Track 1\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_to_csv_header_only() {
        assert_eq!(to_csv(&["A", "B"], Vec::<Vec<String>>::new()), "A,B");
    }

    #[test]
    fn test_fittings_csv() {
        let csv = fittings_csv(&mock_data::fittings());
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(
            lines[0],
            "ID,Type,Location,Status,Install Date,Last Inspection,Risk Score,Next Inspection"
        );
        assert_eq!(
            lines[1],
            "RF-2301-A45,Rail Clip,\"KM 245.3, Track 1\",critical,2021-03-15,2024-08-20,85,2024-10-15"
        );
    }

    #[test]
    fn test_fittings_csv_empty_selection() {
        assert_eq!(fittings_csv(&[]).lines().count(), 1);
    }

    #[test]
    fn test_maintenance_csv() {
        let csv = maintenance_csv(&mock_data::maintenance_by_month());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Month,Preventive Maintenance,Corrective Maintenance,Emergency Repairs"
        );
        assert_eq!(lines[1], "Jan,45,12,3");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_schedule_csv() {
        let csv = schedule_csv(&mock_data::maintenance_tasks());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[5].starts_with("5,Anchor Bolt Tightening,RF-2301-E89,\"KM 189.2, Track 2\",maintenance,medium"));
        assert!(lines[5].ends_with("2024-09-12,2 hours,in-progress"));
    }

    #[test]
    fn test_map_csv() {
        let fitting = mock_data::fittings().remove(0);
        let csv = map_csv(&[(fitting, MapPosition { x: 150.0, y: 120.0 })]);
        assert_eq!(csv.lines().next(), Some("ID,KM,Track,Status,Risk Score,X,Y"));
        assert_eq!(csv.lines().nth(1), Some("RF-2301-A45,KM 245.3,Track 1,critical,85,150,120"));
    }

    #[test]
    fn test_map_csv_without_track() {
        let mut fitting = mock_data::fittings().remove(0);
        fitting.location = "KM 12.0".to_string();
        let csv = map_csv(&[(fitting, MapPosition { x: 1.0, y: 2.0 })]);
        assert_eq!(csv.lines().nth(1), Some("RF-2301-A45,KM 12.0,,critical,85,1,2"));
    }

    #[test]
    fn test_profile_csv_has_history() {
        let csv = profile_csv(&mock_data::fitting_profile("RF-2301-C78"));
        assert!(csv.starts_with("Field,Value\nID,RF-2301-C78\n"));
        assert_eq!(csv.lines().filter(|l| l.starts_with("Maintenance ")).count(), 4);
    }

    #[test]
    fn test_file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 14).unwrap();
        assert_eq!(report_pdf_name("risk-assessment", date), "risk-assessment-2024-09-14.pdf");
        assert_eq!(report_csv_name("cost-analysis"), "cost-analysis.csv");
        assert_eq!(fitting_report_name("RF-2301-A45"), "RF-2301-A45_report.csv");
    }
}
