//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod create_channel;
pub mod event_stream;
pub mod login;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
