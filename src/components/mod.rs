//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod help_dialog;
pub mod home;
pub mod input_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod reset_dialog;

pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use input_dialog::{draw_form, draw_prompt};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use reset_dialog::ResetDialog;
