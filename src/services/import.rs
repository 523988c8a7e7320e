//! JSON and roster CSV import

use crate::model::roster::RosterEntry;
use crate::model::state::{new_id, StateSnapshot};
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::Path;

/// Parse a full-state JSON snapshot
///
/// Parse failures all surface as the one user-facing message; the caller
/// aborts the import and leaves state unchanged.
pub fn parse_state_json(text: &str) -> Result<StateSnapshot, String> {
    serde_json::from_str(text).map_err(|_| "Invalid file".to_string())
}

/// Read and parse a full-state JSON snapshot from disk
pub fn load_state_snapshot<P: AsRef<Path>>(path: P) -> Result<StateSnapshot, String> {
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("Could not read {}: {}", path.as_ref().display(), e))?;
    parse_state_json(&contents)
}

/// Parse roster rows from CSV text
///
/// The header row is matched case-insensitively against `name`, `role`, and
/// `contact`; other columns are ignored. A row with no name gets "Unknown".
/// Rows the CSV reader cannot decode are skipped.
pub fn parse_roster_csv(text: &str) -> Vec<RosterEntry> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let (name_col, role_col, contact_col) = match reader.headers() {
        Ok(headers) => {
            let position = |wanted: &str| {
                headers
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(wanted))
            };
            (position("name"), position("role"), position("contact"))
        }
        Err(_) => return Vec::new(),
    };

    let column = |record: &csv::StringRecord, col: Option<usize>| {
        col.and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
            .to_string()
    };

    let mut entries = Vec::new();
    for record in reader.records().flatten() {
        let name = column(&record, name_col);
        let name = if name.is_empty() {
            "Unknown".to_string()
        } else {
            name
        };
        entries.push(RosterEntry::new(
            new_id(),
            name,
            column(&record, role_col),
            column(&record, contact_col),
        ));
    }
    entries
}

/// Read and parse roster rows from a CSV file on disk
pub fn load_roster_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, String> {
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("Could not read {}: {}", path.as_ref().display(), e))?;
    Ok(parse_roster_csv(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppState;
    use crate::services::export;

    #[test]
    fn test_json_export_import_round_trip() {
        let mut state = AppState::seeded();
        state.add_roster_entry("Alex", "DJ").unwrap();
        state.add_budget_item("Speakers", 120.0).unwrap();

        let json = serde_json::to_string_pretty(&state).unwrap();
        let snapshot = parse_state_json(&json).unwrap();

        let mut restored = AppState::default();
        restored.apply_snapshot(snapshot);
        assert_eq!(restored, state);
    }

    #[test]
    fn test_invalid_json_reports_invalid_file() {
        assert_eq!(parse_state_json("{oops").unwrap_err(), "Invalid file");
        assert_eq!(parse_state_json("").unwrap_err(), "Invalid file");
    }

    #[test]
    fn test_roster_csv_headers_are_case_insensitive() {
        let entries = parse_roster_csv("Name,ROLE,Contact\nAlex,DJ,alex@example.com\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Alex");
        assert_eq!(entries[0].role, "DJ");
        assert_eq!(entries[0].contact, "alex@example.com");
    }

    #[test]
    fn test_roster_csv_missing_name_defaults_to_unknown() {
        let entries = parse_roster_csv("name,role\n,Security\nSam,Door\n");
        assert_eq!(entries[0].name, "Unknown");
        assert_eq!(entries[0].role, "Security");
        assert_eq!(entries[1].name, "Sam");
    }

    #[test]
    fn test_roster_csv_ignores_unknown_columns() {
        let entries = parse_roster_csv("shirt_size,name\nL,Alex\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Alex");
        assert_eq!(entries[0].role, "");
    }

    #[test]
    fn test_quoted_export_line_survives_reimport() {
        let mut state = AppState::default();
        state.add_roster_entry("Dana \"DJ\" Lee", "Music").unwrap();

        let csv = export::roster_csv(&state.roster).unwrap();
        assert!(csv.contains("\"Dana \"\"DJ\"\" Lee\""));

        let entries = parse_roster_csv(&csv);
        assert_eq!(entries[0].name, "Dana \"DJ\" Lee");
        assert_eq!(entries[0].role, "Music");
    }

    #[test]
    fn test_empty_csv_yields_no_entries() {
        assert!(parse_roster_csv("").is_empty());
        assert!(parse_roster_csv("name,role,contact\n").is_empty());
    }
}
