//! Domain layer: core entities and business rules.

pub mod display_list;
pub mod events;
pub mod message;
pub mod message_input_state;
pub mod room;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
