//! I/O services
//!
//! This module contains everything that touches the filesystem:
//! - The persistent state slot (load / save / reset)
//! - CSV and JSON export
//! - JSON and roster CSV import

pub mod export;
pub mod import;
pub mod store;

pub use export::{export_json, export_tab_csv};
pub use import::{load_roster_csv, load_state_snapshot};
pub use store::StateStore;
