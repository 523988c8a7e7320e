//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. It owns the planning state and the persistent store; every
//! mutating action runs mutate → save before the next frame is drawn.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_form, draw_prompt, draw_home_screen, HelpDialog, HomeComponent, HomeRenderContext,
    QuitDialog, ResetDialog,
};
use crate::model::budget::{coerce_amount, format_amount};
use crate::model::countdown::{countdown_label, event_date_label, parse_event_date};
use crate::model::modal::{AmountField, ImportKind, Modal, ModalStack};
use crate::model::{AppState, Tab};
use crate::services::{self, StateStore};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::env;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// The planning data; the unit of persistence and import/export
    pub state: AppState,

    /// The persistent slot behind `state`
    pub store: StateStore,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub reset_dialog: ResetDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    /// Create the app against the default slot in the home directory
    pub fn new() -> Result<App> {
        Ok(App::with_store(StateStore::at_default_slot()?))
    }

    /// Create the app against a specific slot, hydrating state from it
    pub fn with_store(store: StateStore) -> App {
        let (state, warning) = store.load();
        let mut app = App {
            state,
            store,
            modals: ModalStack::new(),
            should_quit: false,
            error: warning,
            status_message: None,
            home: HomeComponent::new(),
            quit_dialog: QuitDialog,
            reset_dialog: ResetDialog,
            help_dialog: HelpDialog::default(),
        };
        let len = app.tab_len(app.home.active_tab);
        app.home.select_first(len);
        app
    }

    fn tab_len(&self, tab: Tab) -> usize {
        match tab {
            Tab::Tasks => self.state.tasks.len(),
            Tab::Roster => self.state.roster.len(),
            Tab::Budget => self.state.budget.len(),
        }
    }

    /// Id of the selected entry on the active tab
    fn selected_id(&self) -> Option<String> {
        let index = self.home.selected_index()?;
        match self.home.active_tab {
            Tab::Tasks => self.state.tasks.get(index).map(|t| t.id.clone()),
            Tab::Roster => self.state.roster.get(index).map(|r| r.id.clone()),
            Tab::Budget => self.state.budget.get(index).map(|b| b.id.clone()),
        }
    }

    /// Write the full state back to the slot, surfacing failures
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.state) {
            self.error = Some(format!("Could not save: {}", e));
        }
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        // Any real user action replaces the previous notice
        if !matches!(action, Action::Tick | Action::Resize(_, _)) {
            self.error = None;
            self.status_message = None;
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            // The countdown is derived at draw time, so a tick needs no work
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => {
                let len = self.tab_len(self.home.active_tab);
                self.home.next(len);
            }
            Action::PrevItem => {
                let len = self.tab_len(self.home.active_tab);
                self.home.previous(len);
            }
            Action::NextTab => {
                let state = &self.state;
                self.home.next_tab(|tab| match tab {
                    Tab::Tasks => state.tasks.len(),
                    Tab::Roster => state.roster.len(),
                    Tab::Budget => state.budget.len(),
                });
            }
            Action::PrevTab => {
                let state = &self.state;
                self.home.previous_tab(|tab| match tab {
                    Tab::Tasks => state.tasks.len(),
                    Tab::Roster => state.roster.len(),
                    Tab::Budget => state.budget.len(),
                });
            }
            Action::FirstItem => {
                let len = self.tab_len(self.home.active_tab);
                self.home.select_first(len);
            }
            Action::LastItem => {
                let len = self.tab_len(self.home.active_tab);
                self.home.select_last(len);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenResetDialog => {
                self.modals.push(Modal::ResetConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::ResetConfirm) {
                    self.modals.pop();
                    return Ok(Some(Action::ResetState));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Tasks
            // ─────────────────────────────────────────────────────────────────
            Action::OpenTaskEntry => {
                self.modals.push(Modal::TaskEntry {
                    input: String::new(),
                });
            }
            Action::SubmitTaskEntry(raw) => {
                self.modals.pop();
                if self.state.add_task(&raw).is_some() {
                    self.persist();
                    self.home.select_last(self.state.tasks.len());
                    self.notify("Task added");
                }
            }
            Action::CycleStatus => {
                if let Some(id) = self.selected_id() {
                    if let Some(task) = self.state.tasks.iter().find(|t| t.id == id) {
                        let next = task.status.next();
                        self.state.update_status(&id, next);
                        self.persist();
                    }
                }
            }
            Action::ClearDone => {
                self.state.clear_done();
                self.persist();
                self.home.clamp_selection(self.state.tasks.len());
                self.notify("Cleared done tasks");
            }

            // ─────────────────────────────────────────────────────────────────
            // Roster
            // ─────────────────────────────────────────────────────────────────
            Action::OpenRosterForm => {
                self.modals.push(Modal::RosterForm {
                    name: String::new(),
                    role: String::new(),
                    focus: crate::model::modal::FormFocus::First,
                });
            }
            Action::SubmitRosterForm { name, role } => {
                match self.state.add_roster_entry(&name, &role) {
                    Ok(_) => {
                        self.modals.pop();
                        self.persist();
                        self.home.select_last(self.state.roster.len());
                        self.notify("Roster entry added");
                    }
                    // Validation failed: keep the form open so it can be fixed
                    Err(message) => self.error = Some(message),
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Budget
            // ─────────────────────────────────────────────────────────────────
            Action::OpenBudgetForm => {
                self.modals.push(Modal::BudgetForm {
                    item: String::new(),
                    estimate: String::new(),
                    focus: crate::model::modal::FormFocus::First,
                });
            }
            Action::SubmitBudgetForm { item, estimate } => {
                match self.state.add_budget_item(&item, coerce_amount(&estimate)) {
                    Ok(_) => {
                        self.modals.pop();
                        self.persist();
                        self.home.select_last(self.state.budget.len());
                        self.notify("Budget line added");
                    }
                    Err(message) => self.error = Some(message),
                }
            }
            Action::OpenAmountEdit(field) => {
                if let Some(index) = self.home.selected_index() {
                    if let Some(item) = self.state.budget.get(index) {
                        let current = match field {
                            AmountField::Estimated => item.estimated,
                            AmountField::Actual => item.actual,
                        };
                        self.modals.push(Modal::AmountEdit {
                            id: item.id.clone(),
                            field,
                            input: format_amount(current),
                        });
                    }
                }
            }
            Action::SubmitAmountEdit { id, field, value } => {
                self.modals.pop();
                let amount = coerce_amount(&value);
                match field {
                    AmountField::Estimated => self.state.update_estimate(&id, amount),
                    AmountField::Actual => self.state.update_actual(&id, amount),
                }
                self.persist();
            }

            // ─────────────────────────────────────────────────────────────────
            // Shared entry operations
            // ─────────────────────────────────────────────────────────────────
            Action::DeleteEntry => {
                if let Some(id) = self.selected_id() {
                    match self.home.active_tab {
                        Tab::Tasks => self.state.delete_task(&id),
                        Tab::Roster => self.state.delete_roster_entry(&id),
                        Tab::Budget => self.state.delete_budget_item(&id),
                    }
                    self.persist();
                    let len = self.tab_len(self.home.active_tab);
                    self.home.clamp_selection(len);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Event date
            // ─────────────────────────────────────────────────────────────────
            Action::OpenEventDate => {
                self.modals.push(Modal::EventDate {
                    input: self.state.event_date.clone().unwrap_or_default(),
                });
            }
            Action::SubmitEventDate(input) => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    self.modals.pop();
                    self.state.set_event_date(None);
                    self.persist();
                    self.notify("Event date cleared");
                } else if parse_event_date(trimmed).is_some() {
                    self.modals.pop();
                    self.state.set_event_date(Some(trimmed.to_string()));
                    self.persist();
                    self.notify("Event date set");
                } else {
                    self.error = Some("Enter the date as YYYY-MM-DD".to_string());
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Persistence
            // ─────────────────────────────────────────────────────────────────
            Action::SaveState => {
                self.persist();
                if self.error.is_none() {
                    self.notify("Saved");
                }
            }
            Action::ResetState => {
                if let Err(e) = self.store.reset() {
                    self.error = Some(format!("Could not reset: {}", e));
                    return Ok(None);
                }
                let (state, warning) = self.store.load();
                self.state = state;
                self.error = warning;
                let len = self.tab_len(self.home.active_tab);
                self.home.select_first(len);
                if self.error.is_none() {
                    self.notify("Reset to sample data");
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Import / Export
            // ─────────────────────────────────────────────────────────────────
            Action::ExportCsv => {
                let result = env::current_dir().map_err(|e| e.to_string()).and_then(|dir| {
                    services::export_tab_csv(&self.state, self.home.active_tab, &dir)
                        .map_err(|e| e.to_string())
                });
                match result {
                    Ok(path) => self.notify(format!("Exported {}", path.display())),
                    Err(message) => self.error = Some(format!("Export failed: {}", message)),
                }
            }
            Action::ExportJson => {
                let result = env::current_dir().map_err(|e| e.to_string()).and_then(|dir| {
                    services::export_json(&self.state, &dir).map_err(|e| e.to_string())
                });
                match result {
                    Ok(path) => self.notify(format!("Exported {}", path.display())),
                    Err(message) => self.error = Some(format!("Export failed: {}", message)),
                }
            }
            Action::OpenImport(kind) => {
                self.modals.push(Modal::ImportPath {
                    kind,
                    input: String::new(),
                });
            }
            Action::SubmitImport { kind, path } => {
                self.modals.pop();
                match kind {
                    ImportKind::StateJson => match services::load_state_snapshot(&path) {
                        Ok(snapshot) => {
                            self.state.apply_snapshot(snapshot);
                            self.persist();
                            let len = self.tab_len(self.home.active_tab);
                            self.home.clamp_selection(len);
                            self.notify("Imported");
                        }
                        Err(message) => self.error = Some(message),
                    },
                    ImportKind::RosterCsv => match services::load_roster_csv(&path) {
                        Ok(entries) => {
                            let count = entries.len();
                            self.state.append_roster(entries);
                            self.persist();
                            self.home.clamp_selection(self.state.roster.len());
                            self.notify(format!("Imported {} roster entries", count));
                        }
                        Err(message) => self.error = Some(message),
                    },
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let today = Local::now().date_naive();
        let countdown = countdown_label(self.state.event_date.as_deref(), today);
        let event_date_line = event_date_label(self.state.event_date.as_deref());

        let ctx = HomeRenderContext {
            state: &self.state,
            countdown: &countdown,
            event_date_line: event_date_line.as_deref(),
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };
        draw_home_screen(frame, area, &mut self.home, &ctx)?;

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::ResetConfirm => self.reset_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
            Modal::TaskEntry { input } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::SubmitTaskEntry(input.clone())),
                    KeyCode::Backspace => {
                        if let Some(Modal::TaskEntry { input }) = self.modals.top_mut() {
                            input.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::TaskEntry { input }) = self.modals.top_mut() {
                            input.push(c);
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
            Modal::EventDate { input } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::SubmitEventDate(input.clone())),
                    KeyCode::Backspace => {
                        if let Some(Modal::EventDate { input }) = self.modals.top_mut() {
                            input.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::EventDate { input }) = self.modals.top_mut() {
                            input.push(c);
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
            Modal::RosterForm { name, role, .. } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::SubmitRosterForm {
                        name: name.clone(),
                        role: role.clone(),
                    }),
                    KeyCode::Tab | KeyCode::BackTab => {
                        if let Some(Modal::RosterForm { focus, .. }) = self.modals.top_mut() {
                            *focus = focus.toggle();
                        }
                        None
                    }
                    KeyCode::Backspace => {
                        if let Some(Modal::RosterForm { name, role, focus }) = self.modals.top_mut()
                        {
                            match focus {
                                crate::model::modal::FormFocus::First => name.pop(),
                                crate::model::modal::FormFocus::Second => role.pop(),
                            };
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::RosterForm { name, role, focus }) = self.modals.top_mut()
                        {
                            match focus {
                                crate::model::modal::FormFocus::First => name.push(c),
                                crate::model::modal::FormFocus::Second => role.push(c),
                            }
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
            Modal::BudgetForm { item, estimate, .. } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::SubmitBudgetForm {
                        item: item.clone(),
                        estimate: estimate.clone(),
                    }),
                    KeyCode::Tab | KeyCode::BackTab => {
                        if let Some(Modal::BudgetForm { focus, .. }) = self.modals.top_mut() {
                            *focus = focus.toggle();
                        }
                        None
                    }
                    KeyCode::Backspace => {
                        if let Some(Modal::BudgetForm {
                            item,
                            estimate,
                            focus,
                        }) = self.modals.top_mut()
                        {
                            match focus {
                                crate::model::modal::FormFocus::First => item.pop(),
                                crate::model::modal::FormFocus::Second => estimate.pop(),
                            };
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::BudgetForm {
                            item,
                            estimate,
                            focus,
                        }) = self.modals.top_mut()
                        {
                            match focus {
                                crate::model::modal::FormFocus::First => item.push(c),
                                crate::model::modal::FormFocus::Second => estimate.push(c),
                            }
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
            Modal::AmountEdit { id, field, input } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::SubmitAmountEdit {
                        id: id.clone(),
                        field: *field,
                        value: input.clone(),
                    }),
                    KeyCode::Backspace => {
                        if let Some(Modal::AmountEdit { input, .. }) = self.modals.top_mut() {
                            input.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::AmountEdit { input, .. }) = self.modals.top_mut() {
                            input.push(c);
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
            Modal::ImportPath { kind, input } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::SubmitImport {
                        kind: *kind,
                        path: input.clone(),
                    }),
                    KeyCode::Backspace => {
                        if let Some(Modal::ImportPath { input, .. }) = self.modals.top_mut() {
                            input.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::ImportPath { input, .. }) = self.modals.top_mut() {
                            input.push(c);
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::ResetConfirm => self.reset_dialog.draw(frame, area)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
            Modal::TaskEntry { input } => draw_prompt(
                frame,
                area,
                "New Task",
                "task | category | owner | deadline   Enter to add, Esc to cancel",
                input,
            ),
            Modal::EventDate { input } => draw_prompt(
                frame,
                area,
                "Event Date",
                "YYYY-MM-DD, blank clears   Enter to set, Esc to cancel",
                input,
            ),
            Modal::RosterForm { name, role, focus } => draw_form(
                frame,
                area,
                "New Roster Entry",
                [("Name", name.as_str()), ("Role", role.as_str())],
                *focus == crate::model::modal::FormFocus::Second,
            ),
            Modal::BudgetForm {
                item,
                estimate,
                focus,
            } => draw_form(
                frame,
                area,
                "New Budget Line",
                [("Item", item.as_str()), ("Estimate", estimate.as_str())],
                *focus == crate::model::modal::FormFocus::Second,
            ),
            Modal::AmountEdit { field, input, .. } => draw_prompt(
                frame,
                area,
                &format!("Edit {} Amount", field.label()),
                "Enter to save, Esc to cancel",
                input,
            ),
            Modal::ImportPath { kind, input } => {
                let title = match kind {
                    ImportKind::StateJson => "Import JSON",
                    ImportKind::RosterCsv => "Import Roster CSV",
                };
                draw_prompt(
                    frame,
                    area,
                    title,
                    "Path to the file   Enter to import, Esc to cancel",
                    input,
                )
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use tempfile::{tempdir, TempDir};

    fn test_app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        (App::with_store(store), dir)
    }

    #[test]
    fn test_startup_seeds_sample_data_and_selects_first() {
        let (app, _dir) = test_app();
        assert_eq!(app.state.tasks.len(), 2);
        assert_eq!(app.home.selected_index(), Some(0));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_submit_task_entry_persists_immediately() {
        let (mut app, _dir) = test_app();

        app.update(Action::OpenTaskEntry).unwrap();
        app.update(Action::SubmitTaskEntry("Order ice | Catering".to_string()))
            .unwrap();

        assert_eq!(app.state.tasks.len(), 3);
        assert!(app.modals.is_empty());

        let (on_disk, _) = app.store.load();
        assert_eq!(on_disk, app.state);
    }

    #[test]
    fn test_cycle_status_updates_selected_task() {
        let (mut app, _dir) = test_app();
        // First seeded task starts In Progress
        app.update(Action::CycleStatus).unwrap();
        assert_eq!(app.state.tasks[0].status, TaskStatus::Done);
    }

    #[test]
    fn test_delete_entry_clamps_selection() {
        let (mut app, _dir) = test_app();
        app.update(Action::LastItem).unwrap();

        app.update(Action::DeleteEntry).unwrap();
        assert_eq!(app.state.tasks.len(), 1);
        assert_eq!(app.home.selected_index(), Some(0));
    }

    #[test]
    fn test_empty_roster_name_keeps_form_open_with_error() {
        let (mut app, _dir) = test_app();
        app.update(Action::NextTab).unwrap();
        app.update(Action::OpenRosterForm).unwrap();

        app.update(Action::SubmitRosterForm {
            name: "  ".to_string(),
            role: "DJ".to_string(),
        })
        .unwrap();

        assert!(app.error.is_some());
        assert!(!app.modals.is_empty());
        assert!(app.state.roster.is_empty());
    }

    #[test]
    fn test_invalid_event_date_is_rejected() {
        let (mut app, _dir) = test_app();
        app.update(Action::OpenEventDate).unwrap();
        app.update(Action::SubmitEventDate("next friday".to_string()))
            .unwrap();

        assert!(app.error.is_some());
        assert_eq!(app.state.event_date.as_deref(), Some("2025-11-14"));

        app.update(Action::SubmitEventDate("2026-01-31".to_string()))
            .unwrap();
        assert_eq!(app.state.event_date.as_deref(), Some("2026-01-31"));
    }

    #[test]
    fn test_import_missing_file_reports_error_and_leaves_state() {
        let (mut app, dir) = test_app();
        let before = app.state.clone();

        app.update(Action::SubmitImport {
            kind: ImportKind::StateJson,
            path: dir.path().join("nope.json").to_string_lossy().to_string(),
        })
        .unwrap();

        assert!(app.error.is_some());
        assert_eq!(app.state, before);
    }

    #[test]
    fn test_import_invalid_json_reports_invalid_file() {
        let (mut app, dir) = test_app();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{oops").unwrap();

        app.update(Action::SubmitImport {
            kind: ImportKind::StateJson,
            path: path.to_string_lossy().to_string(),
        })
        .unwrap();

        assert_eq!(app.error.as_deref(), Some("Invalid file"));
    }

    #[test]
    fn test_reset_reseeds_sample_data() {
        let (mut app, _dir) = test_app();
        app.update(Action::SubmitTaskEntry("extra".to_string()))
            .unwrap();
        assert_eq!(app.state.tasks.len(), 3);

        let follow_up = app.update(Action::ConfirmModal).unwrap();
        assert_eq!(follow_up, None); // no reset dialog open, nothing happens

        app.update(Action::OpenResetDialog).unwrap();
        let follow_up = app.update(Action::ConfirmModal).unwrap();
        assert_eq!(follow_up, Some(Action::ResetState));
        app.update(Action::ResetState).unwrap();

        assert_eq!(app.state.tasks.len(), 2);
        assert!(app.store.path().exists());
    }
}
