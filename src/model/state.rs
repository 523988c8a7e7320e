//! Application state - the single object that persistence, import, and
//! export all operate on
//!
//! Field names and enum spellings follow the JSON shape produced by the web
//! version of the planner, so saved slots and exports are interchangeable.

use super::budget::{BudgetItem, BudgetTotals};
use super::roster::RosterEntry;
use super::task::{QuickEntry, Task, TaskStatus};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Generate a collection-unique entry id
pub fn new_id() -> String {
    format!("id_{}", Uuid::new_v4().simple())
}

/// The whole planning state: event date plus the three managed collections
///
/// This is the unit of persistence and the unit of JSON import/export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(rename = "eventDate", default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub budget: Vec<BudgetItem>,
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

impl AppState {
    /// Sample state used when no saved slot exists yet
    pub fn seeded() -> AppState {
        AppState {
            event_date: Some("2025-11-14".to_string()),
            tasks: vec![
                Task {
                    id: new_id(),
                    task: "Confirm DJ lineup".to_string(),
                    category: "Entertainment".to_string(),
                    owner: "Team A".to_string(),
                    status: TaskStatus::InProgress,
                    deadline: "2025-10-30".to_string(),
                },
                Task {
                    id: new_id(),
                    task: "Design promo flyer".to_string(),
                    category: "Marketing".to_string(),
                    owner: "Design".to_string(),
                    status: TaskStatus::Done,
                    deadline: "2025-10-25".to_string(),
                },
            ],
            budget: Vec::new(),
            roster: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tasks
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a task parsed from the quick-entry shorthand
    ///
    /// Returns the new task's id, or `None` when the input was blank.
    pub fn add_task(&mut self, raw: &str) -> Option<String> {
        let entry = QuickEntry::parse(raw)?;
        let id = new_id();
        self.tasks.push(Task {
            id: id.clone(),
            task: entry.task,
            category: entry.category,
            owner: entry.owner,
            status: TaskStatus::Pending,
            deadline: entry.deadline,
        });
        Some(id)
    }

    /// Overwrite a task's status; no-op if the id is unknown
    pub fn update_status(&mut self, id: &str, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }
    }

    pub fn delete_task(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Drop every task marked Done, keeping the rest in order
    pub fn clear_done(&mut self) {
        self.tasks.retain(|t| t.status != TaskStatus::Done);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Roster
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a roster entry; a name is required
    pub fn add_roster_entry(&mut self, name: &str, role: &str) -> Result<String, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Add a name".to_string());
        }
        let id = new_id();
        self.roster.push(RosterEntry::new(
            id.clone(),
            name.to_string(),
            role.trim().to_string(),
            String::new(),
        ));
        Ok(id)
    }

    pub fn delete_roster_entry(&mut self, id: &str) {
        self.roster.retain(|r| r.id != id);
    }

    /// Append already-built entries (CSV import); the caller persists once
    /// after the whole batch
    pub fn append_roster(&mut self, entries: Vec<RosterEntry>) {
        self.roster.extend(entries);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Budget
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a budget line; an item name is required, actual starts at 0
    pub fn add_budget_item(&mut self, name: &str, estimate: f64) -> Result<String, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Add an item".to_string());
        }
        let id = new_id();
        self.budget.push(BudgetItem {
            id: id.clone(),
            item: name.to_string(),
            category: "General".to_string(),
            estimated: estimate,
            actual: 0.0,
        });
        Ok(id)
    }

    pub fn update_estimate(&mut self, id: &str, value: f64) {
        if let Some(item) = self.budget.iter_mut().find(|b| b.id == id) {
            item.estimated = value;
        }
    }

    pub fn update_actual(&mut self, id: &str, value: f64) {
        if let Some(item) = self.budget.iter_mut().find(|b| b.id == id) {
            item.actual = value;
        }
    }

    pub fn delete_budget_item(&mut self, id: &str) {
        self.budget.retain(|b| b.id != id);
    }

    pub fn budget_totals(&self) -> BudgetTotals {
        BudgetTotals::of(&self.budget)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event date / import
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_event_date(&mut self, date: Option<String>) {
        self.event_date = date;
    }

    /// Merge an imported snapshot: each of the four top-level fields present
    /// in the file replaces the current value wholesale, fields missing from
    /// the file are left alone
    pub fn apply_snapshot(&mut self, snapshot: StateSnapshot) {
        if let Some(event_date) = snapshot.event_date {
            self.event_date = event_date;
        }
        if let Some(tasks) = snapshot.tasks {
            self.tasks = tasks;
        }
        if let Some(budget) = snapshot.budget {
            self.budget = budget;
        }
        if let Some(roster) = snapshot.roster {
            self.roster = roster;
        }
    }
}

/// Partial state parsed from a JSON import
///
/// The outer `Option` distinguishes "field absent from the file" from
/// "field present"; for `event_date` the inner `Option` additionally carries
/// an explicit `null` (which clears the date).
#[derive(Debug, Default, Deserialize)]
pub struct StateSnapshot {
    #[serde(rename = "eventDate", default, deserialize_with = "double_option")]
    pub event_date: Option<Option<String>>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(default)]
    pub budget: Option<Vec<BudgetItem>>,
    #[serde(default)]
    pub roster: Option<Vec<RosterEntry>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task_grows_by_one_with_fresh_id() {
        let mut state = AppState::seeded();
        let before = state.tasks.len();

        let id = state.add_task("Order ice | Catering | Pat | 2025-11-01").unwrap();

        assert_eq!(state.tasks.len(), before + 1);
        assert_eq!(state.tasks.iter().filter(|t| t.id == id).count(), 1);
        let task = state.tasks.last().unwrap();
        assert_eq!(task.task, "Order ice");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_add_task_rejects_blank_input() {
        let mut state = AppState::default();
        assert_eq!(state.add_task("   "), None);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_delete_task_removes_exactly_one() {
        let mut state = AppState::default();
        let id = state.add_task("A").unwrap();
        state.add_task("B").unwrap();

        state.delete_task(&id);
        assert_eq!(state.tasks.len(), 1);
        assert!(state.tasks.iter().all(|t| t.id != id));

        // Unknown id is a no-op
        state.delete_task("id_missing");
        assert_eq!(state.tasks.len(), 1);
    }

    #[test]
    fn test_update_status_missing_id_is_noop() {
        let mut state = AppState::default();
        let id = state.add_task("A").unwrap();
        state.update_status("id_missing", TaskStatus::Done);
        assert_eq!(state.tasks[0].status, TaskStatus::Pending);
        state.update_status(&id, TaskStatus::Done);
        assert_eq!(state.tasks[0].status, TaskStatus::Done);
    }

    #[test]
    fn test_clear_done_keeps_survivors_in_order() {
        let mut state = AppState::default();
        for (name, status) in [
            ("a", TaskStatus::Done),
            ("b", TaskStatus::Pending),
            ("c", TaskStatus::Done),
            ("d", TaskStatus::InProgress),
        ] {
            let id = state.add_task(name).unwrap();
            state.update_status(&id, status);
        }

        state.clear_done();

        let names: Vec<&str> = state.tasks.iter().map(|t| t.task.as_str()).collect();
        assert_eq!(names, vec!["b", "d"]);
    }

    #[test]
    fn test_add_roster_entry_requires_name() {
        let mut state = AppState::default();
        assert!(state.add_roster_entry("  ", "DJ").is_err());
        assert!(state.roster.is_empty());

        state.add_roster_entry("Alex", "DJ").unwrap();
        assert_eq!(state.roster.len(), 1);
        assert_eq!(state.roster[0].contact, "");
    }

    #[test]
    fn test_add_budget_item_requires_name_and_zeroes_actual() {
        let mut state = AppState::default();
        assert!(state.add_budget_item("", 50.0).is_err());

        state.add_budget_item("Speakers", 120.0).unwrap();
        let item = &state.budget[0];
        assert_eq!(item.category, "General");
        assert_eq!(item.estimated, 120.0);
        assert_eq!(item.actual, 0.0);
    }

    #[test]
    fn test_budget_updates_by_id() {
        let mut state = AppState::default();
        let id = state.add_budget_item("Speakers", 120.0).unwrap();

        state.update_estimate(&id, 150.0);
        state.update_actual(&id, 90.0);
        assert_eq!(state.budget[0].estimated, 150.0);
        assert_eq!(state.budget[0].actual, 90.0);

        state.update_actual("id_missing", 999.0);
        assert_eq!(state.budget[0].actual, 90.0);
    }

    #[test]
    fn test_snapshot_merge_leaves_missing_fields_alone() {
        let mut state = AppState::seeded();
        let tasks_before = state.tasks.clone();

        let snapshot: StateSnapshot =
            serde_json::from_str(r#"{"roster":[{"id":"id_r1","name":"Alex"}]}"#).unwrap();
        state.apply_snapshot(snapshot);

        assert_eq!(state.tasks, tasks_before);
        assert_eq!(state.event_date.as_deref(), Some("2025-11-14"));
        assert_eq!(state.roster.len(), 1);
    }

    #[test]
    fn test_snapshot_null_event_date_clears_it() {
        let mut state = AppState::seeded();
        let snapshot: StateSnapshot = serde_json::from_str(r#"{"eventDate":null}"#).unwrap();
        state.apply_snapshot(snapshot);
        assert_eq!(state.event_date, None);
    }

    #[test]
    fn test_state_serializes_with_web_field_names() {
        let state = AppState::seeded();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"eventDate\""));
        assert!(json.contains("\"In Progress\""));
    }
}
