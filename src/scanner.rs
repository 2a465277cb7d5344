//! Scan Simulation
//!
//! Result and history bookkeeping for the simulated QR scanner.

use chrono::Local;

use crate::mock_data;
use crate::models::{ScanRecord, ScanResult};

/// Wall-clock timestamp in the history list's format
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

pub fn record_for(result: &ScanResult, timestamp: String) -> ScanRecord {
    ScanRecord {
        fitting_id: result.fitting_id.clone(),
        timestamp,
        status: result.status,
        location: result.location.clone(),
    }
}

/// Prepend `record`, keeping at most `cap` entries
pub fn push_history(history: &mut Vec<ScanRecord>, record: ScanRecord, cap: usize) {
    history.insert(0, record);
    history.truncate(cap);
}

/// Manual lookup: blank input yields nothing, anything else the canned result under that id
pub fn manual_lookup(input: &str) -> Option<ScanResult> {
    let id = input.trim();
    if id.is_empty() {
        return None;
    }
    Some(ScanResult {
        fitting_id: id.to_string(),
        ..mock_data::mock_scan_result()
    })
}

/// Badge text on the result card ("NEEDS INSPECTION")
pub fn status_banner(result: &ScanResult) -> String {
    result.status.display().to_uppercase()
}

/// Add a fitting to the session inspection list once
pub fn add_to_inspection_list(list: &mut Vec<String>, id: &str) -> bool {
    if list.iter().any(|existing| existing == id) {
        return false;
    }
    list.push(id.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FittingStatus;

    fn record(id: &str) -> ScanRecord {
        ScanRecord {
            fitting_id: id.to_string(),
            timestamp: "2024-09-09 15:00".to_string(),
            status: FittingStatus::Healthy,
            location: "KM 1.0".to_string(),
        }
    }

    #[test]
    fn test_push_history_prepends() {
        let mut history = mock_data::scan_history();
        push_history(&mut history, record("NEW"), 5);
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].fitting_id, "NEW");
        assert_eq!(history[1].fitting_id, "RF-2301-A45");
    }

    #[test]
    fn test_push_history_never_exceeds_cap() {
        let mut history = mock_data::scan_history();
        for i in 0..10 {
            push_history(&mut history, record(&format!("S{}", i)), 5);
            assert!(history.len() <= 5);
        }
        let ids: Vec<&str> = history.iter().map(|r| r.fitting_id.as_str()).collect();
        assert_eq!(ids, vec!["S9", "S8", "S7", "S6", "S5"]);
    }

    #[test]
    fn test_record_for_uses_result_fields() {
        let result = mock_data::mock_scan_result();
        let rec = record_for(&result, "now".to_string());
        assert_eq!(rec.fitting_id, "RF-2301-A45");
        assert_eq!(rec.status, FittingStatus::Critical);
        assert_eq!(rec.location, "KM 245.3, Track 1");
        assert_eq!(rec.timestamp, "now");
    }

    #[test]
    fn test_manual_lookup_trims_and_rejects_blank() {
        assert!(manual_lookup("").is_none());
        assert!(manual_lookup("   ").is_none());

        let result = manual_lookup("  RF-2301-Z99 ").unwrap();
        assert_eq!(result.fitting_id, "RF-2301-Z99");
        assert_eq!(result.risk_score, 85);
        assert_eq!(result.next_action.as_deref(), Some("Immediate replacement required"));
    }

    #[test]
    fn test_status_banner() {
        let mut result = mock_data::mock_scan_result();
        assert_eq!(status_banner(&result), "CRITICAL");
        result.status = FittingStatus::NeedsInspection;
        assert_eq!(status_banner(&result), "NEEDS INSPECTION");
    }

    #[test]
    fn test_inspection_list_deduplicates() {
        let mut list = Vec::new();
        assert!(add_to_inspection_list(&mut list, "RF-2301-A45"));
        assert!(!add_to_inspection_list(&mut list, "RF-2301-A45"));
        assert!(add_to_inspection_list(&mut list, "RF-2301-B12"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), "2024-09-09 14:30".len());
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
    }
}
