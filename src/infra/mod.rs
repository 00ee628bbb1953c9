//! Infrastructure layer: adapters for config, logging, and errors.

pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
