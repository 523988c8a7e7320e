//! Data models for tasks and the quick-entry shorthand

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task
///
/// Serialized exactly as the display strings ("Pending", "In Progress",
/// "Done") so saved files stay compatible with exports from the web app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    /// Cycle to the next status (Pending → In Progress → Done → Pending)
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single planning task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub task: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub status: TaskStatus,
    /// Due date as YYYY-MM-DD; empty means no deadline
    #[serde(default)]
    pub deadline: String,
}

/// Fields parsed from the quick-entry shorthand, before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct QuickEntry {
    pub task: String,
    pub category: String,
    pub owner: String,
    pub deadline: String,
}

impl QuickEntry {
    /// Parse the quick-entry shorthand: up to four `|`-separated fields
    /// (task | category | owner | deadline)
    ///
    /// This is a convenience input format, not a general parser. Missing or
    /// empty fields fall back to "New Task" / "General" / "Unassigned" / "".
    /// Returns `None` when the whole input is blank.
    pub fn parse(raw: &str) -> Option<QuickEntry> {
        if raw.trim().is_empty() {
            return None;
        }

        let mut parts = raw.split('|').map(str::trim);
        let field = |part: Option<&str>, fallback: &str| {
            let value = part.unwrap_or("");
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        Some(QuickEntry {
            task: field(parts.next(), "New Task"),
            category: field(parts.next(), "General"),
            owner: field(parts.next(), "Unassigned"),
            deadline: field(parts.next(), ""),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_entry_all_fields() {
        let entry = QuickEntry::parse("Book venue | Logistics | Sam | 2025-10-01").unwrap();
        assert_eq!(entry.task, "Book venue");
        assert_eq!(entry.category, "Logistics");
        assert_eq!(entry.owner, "Sam");
        assert_eq!(entry.deadline, "2025-10-01");
    }

    #[test]
    fn test_quick_entry_defaults_for_missing_fields() {
        let entry = QuickEntry::parse("Book venue").unwrap();
        assert_eq!(entry.task, "Book venue");
        assert_eq!(entry.category, "General");
        assert_eq!(entry.owner, "Unassigned");
        assert_eq!(entry.deadline, "");
    }

    #[test]
    fn test_quick_entry_empty_middle_field() {
        let entry = QuickEntry::parse("Book venue || Sam").unwrap();
        assert_eq!(entry.category, "General");
        assert_eq!(entry.owner, "Sam");
    }

    #[test]
    fn test_quick_entry_blank_input() {
        assert_eq!(QuickEntry::parse(""), None);
        assert_eq!(QuickEntry::parse("   "), None);
    }

    #[test]
    fn test_status_cycle() {
        assert_eq!(TaskStatus::Pending.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.next(), TaskStatus::Pending);
    }

    #[test]
    fn test_status_serializes_as_display_strings() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let parsed: TaskStatus = serde_json::from_str("\"Done\"").unwrap();
        assert_eq!(parsed, TaskStatus::Done);
    }
}
