//! Data model for roster entries

use serde::{Deserialize, Serialize};

/// A participant on the event roster
///
/// `attendance` and `notes` are stored for compatibility with imported files
/// but are not edited anywhere in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub attendance: String,
    #[serde(default)]
    pub notes: String,
}

impl RosterEntry {
    pub fn new(id: String, name: String, role: String, contact: String) -> RosterEntry {
        RosterEntry {
            id,
            name,
            role,
            contact,
            attendance: String::new(),
            notes: String::new(),
        }
    }
}
