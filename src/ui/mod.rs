//! UI layer: line-oriented screens and navigation between them.

mod channel_list_screen;
mod login_screen;
mod messages_screen;
mod navigation;
pub mod shell;
pub mod terminal;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
