//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `AppState` - The planning data (event date, tasks, roster, budget)
//! - `ModalStack` - Modal overlay management
//! - `Tab` - Presentation state for the collection tabs
//! - Countdown derivation helpers

pub mod budget;
pub mod countdown;
pub mod modal;
pub mod roster;
pub mod state;
pub mod task;
pub mod ui;

// Re-export commonly used types
pub use budget::{BudgetItem, BudgetTotals};
pub use roster::RosterEntry;
pub use state::{AppState, StateSnapshot};
pub use task::{Task, TaskStatus};
pub use ui::Tab;
