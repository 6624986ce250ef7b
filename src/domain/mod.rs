//! Domain layer: core entities and business rules.

pub mod channel;
pub mod events;
pub mod menu;
pub mod message;
pub mod user;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
