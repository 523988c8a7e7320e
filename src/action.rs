//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::modal::{AmountField, ImportKind};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for the countdown refresh
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next item in the list
    NextItem,
    /// Move to previous item in the list
    PrevItem,
    /// Move to next collection tab
    NextTab,
    /// Move to previous collection tab
    PrevTab,
    /// Jump to first item
    FirstItem,
    /// Jump to last item
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open reset confirmation dialog
    OpenResetDialog,
    /// Open keyboard shortcut help
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current confirmation dialog
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Tasks
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the quick-entry prompt for a new task
    OpenTaskEntry,
    /// Create a task from quick-entry input
    SubmitTaskEntry(String),
    /// Cycle the selected task's status
    CycleStatus,
    /// Remove all tasks marked Done
    ClearDone,

    // ─────────────────────────────────────────────────────────────────────────
    // Roster
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the new roster entry form
    OpenRosterForm,
    /// Create a roster entry from the form fields
    SubmitRosterForm { name: String, role: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Budget
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the new budget line form
    OpenBudgetForm,
    /// Create a budget line from the form fields
    SubmitBudgetForm { item: String, estimate: String },
    /// Open the amount editor for the selected budget line
    OpenAmountEdit(AmountField),
    /// Overwrite one amount of a budget line
    SubmitAmountEdit {
        id: String,
        field: AmountField,
        value: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Shared entry operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Delete the selected entry of the active tab
    DeleteEntry,

    // ─────────────────────────────────────────────────────────────────────────
    // Event date
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the event date prompt
    OpenEventDate,
    /// Set (or clear, when blank) the event date
    SubmitEventDate(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────
    /// Explicitly save the current state
    SaveState,
    /// Clear the slot and reseed sample data
    ResetState,

    // ─────────────────────────────────────────────────────────────────────────
    // Import / Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Export the active tab as CSV into the working directory
    ExportCsv,
    /// Export the full state as JSON into the working directory
    ExportJson,
    /// Open a file path prompt for an import
    OpenImport(ImportKind),
    /// Run an import from the given path
    SubmitImport { kind: ImportKind, path: String },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenResetDialog => write!(f, "OpenResetDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::OpenTaskEntry => write!(f, "OpenTaskEntry"),
            Action::SubmitTaskEntry(raw) => write!(f, "SubmitTaskEntry({})", raw),
            Action::CycleStatus => write!(f, "CycleStatus"),
            Action::ClearDone => write!(f, "ClearDone"),
            Action::OpenRosterForm => write!(f, "OpenRosterForm"),
            Action::SubmitRosterForm { name, .. } => write!(f, "SubmitRosterForm({})", name),
            Action::OpenBudgetForm => write!(f, "OpenBudgetForm"),
            Action::SubmitBudgetForm { item, .. } => write!(f, "SubmitBudgetForm({})", item),
            Action::OpenAmountEdit(field) => write!(f, "OpenAmountEdit({})", field.label()),
            Action::SubmitAmountEdit { id, field, value } => {
                write!(f, "SubmitAmountEdit({}, {}, {})", id, field.label(), value)
            }
            Action::DeleteEntry => write!(f, "DeleteEntry"),
            Action::OpenEventDate => write!(f, "OpenEventDate"),
            Action::SubmitEventDate(date) => write!(f, "SubmitEventDate({})", date),
            Action::SaveState => write!(f, "SaveState"),
            Action::ResetState => write!(f, "ResetState"),
            Action::ExportCsv => write!(f, "ExportCsv"),
            Action::ExportJson => write!(f, "ExportJson"),
            Action::OpenImport(_) => write!(f, "OpenImport"),
            Action::SubmitImport { path, .. } => write!(f, "SubmitImport({})", path),
        }
    }
}
