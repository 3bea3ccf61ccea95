//! CLI output using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod reporter;

#[cfg(feature = "tui")]
pub use reporter::PlanReporter;
