//! CSV and JSON export
//!
//! CSV exports double-quote every field (embedded quotes are doubled), one
//! header row plus one row per record. The JSON export is the full state,
//! pretty-printed, under the same file name the web planner uses so the two
//! apps can swap exports.

use crate::model::budget::format_amount;
use crate::model::{AppState, BudgetItem, RosterEntry, Tab, Task};
use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

pub const TASKS_CSV_FILE: &str = "tasks.csv";
pub const ROSTER_CSV_FILE: &str = "roster.csv";
pub const BUDGET_CSV_FILE: &str = "budget.csv";
pub const JSON_EXPORT_FILE: &str = "grills_games_export.json";

fn to_csv(headers: &[&str], rows: Vec<Vec<String>>) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn tasks_csv(tasks: &[Task]) -> Result<String> {
    let rows = tasks
        .iter()
        .map(|t| {
            vec![
                t.task.clone(),
                t.category.clone(),
                t.owner.clone(),
                t.status.to_string(),
                t.deadline.clone(),
            ]
        })
        .collect();
    to_csv(&["task", "category", "owner", "status", "deadline"], rows)
}

pub fn roster_csv(roster: &[RosterEntry]) -> Result<String> {
    let rows = roster
        .iter()
        .map(|r| vec![r.name.clone(), r.role.clone(), r.contact.clone()])
        .collect();
    to_csv(&["name", "role", "contact"], rows)
}

pub fn budget_csv(budget: &[BudgetItem]) -> Result<String> {
    let rows = budget
        .iter()
        .map(|b| {
            vec![
                b.item.clone(),
                b.category.clone(),
                format_amount(b.estimated),
                format_amount(b.actual),
            ]
        })
        .collect();
    to_csv(&["item", "category", "estimated", "actual"], rows)
}

/// Write the CSV for one collection tab into `dir`, returning the file path
pub fn export_tab_csv(state: &AppState, tab: Tab, dir: &Path) -> Result<PathBuf> {
    let (file, contents) = match tab {
        Tab::Tasks => (TASKS_CSV_FILE, tasks_csv(&state.tasks)?),
        Tab::Roster => (ROSTER_CSV_FILE, roster_csv(&state.roster)?),
        Tab::Budget => (BUDGET_CSV_FILE, budget_csv(&state.budget)?),
    };
    let path = dir.join(file);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write the full state as pretty-printed JSON into `dir`
pub fn export_json(state: &AppState, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(JSON_EXPORT_FILE);
    fs::write(&path, serde_json::to_string_pretty(state)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;

    #[test]
    fn test_tasks_csv_quotes_every_field() {
        let mut state = AppState::default();
        state.add_task("Order ice | Catering | Pat | 2025-11-01").unwrap();

        let csv = tasks_csv(&state.tasks).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"task\",\"category\",\"owner\",\"status\",\"deadline\""
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"Order ice\",\"Catering\",\"Pat\",\"Pending\",\"2025-11-01\""
        );
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        let mut state = AppState::default();
        let id = state.add_task("Hang the \"WELCOME\" banner").unwrap();
        state.update_status(&id, TaskStatus::Done);

        let csv = tasks_csv(&state.tasks).unwrap();
        assert!(csv.contains("\"Hang the \"\"WELCOME\"\" banner\""));
    }

    #[test]
    fn test_budget_csv_formats_amounts_without_trailing_zero() {
        let mut state = AppState::default();
        let id = state.add_budget_item("Speakers", 120.0).unwrap();
        state.update_actual(&id, 90.5);

        let csv = budget_csv(&state.budget).unwrap();
        assert!(csv.contains("\"Speakers\",\"General\",\"120\",\"90.5\""));
    }

    #[test]
    fn test_export_files_land_in_target_dir() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::seeded();

        let csv_path = export_tab_csv(&state, Tab::Tasks, dir.path()).unwrap();
        assert_eq!(csv_path.file_name().unwrap(), TASKS_CSV_FILE);
        assert!(csv_path.exists());

        let json_path = export_json(&state, dir.path()).unwrap();
        assert_eq!(json_path.file_name().unwrap(), JSON_EXPORT_FILE);
        let round_trip: AppState =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(round_trip, state);
    }
}
