//! UI state - presentation types separate from the planning data

/// Collection tabs in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tasks,
    Roster,
    Budget,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Tasks, Tab::Roster, Tab::Budget]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Tasks => "Tasks",
            Tab::Roster => "Roster",
            Tab::Budget => "Budget",
        }
    }
}
