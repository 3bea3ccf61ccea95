//! jsinit core - flag resolution for JavaScript project scaffolding
//!
//! This library turns the command line of the `jsinit` binary into a
//! `SelectionRecord`: a target path plus the resolved state of each tooling
//! feature (ESLint, Prettier, Jest, Husky, lint-staged). The record is then
//! handed to a `Provisioner`, which is responsible for every side effect.
//!
//! # Architecture
//!
//! - **Layer 1: Resolution** - Pure lexing and resolution of the argument vector
//! - **Layer 2: Hand-off** - `ProductConfig` trait, `Provisioner` trait and `ProvisionPlan`
//! - **Layer 3: CLI Interface** - Usage text, `run`, and an optional cliclack plan reporter
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based `PlanReporter`
//!
//! # Example Usage
//!
//! ```ignore
//! use jsinit_core::{flags, FeatureToggle};
//!
//! let selection = flags::resolve(["-e", "../shared/.eslintrc", "my-app"])?;
//! assert_eq!(selection.config_path(FeatureToggle::Eslint), Some("../shared/.eslintrc"));
//! assert!(!selection.is_enabled(FeatureToggle::Jest));
//! ```

pub mod config;
pub mod error;
pub mod flags;
pub mod product;
pub mod provision;
pub mod runner;
pub mod usage;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::PackageManager;
pub use error::{ExitStatus, ResolveError, UsageError};
pub use flags::{resolve, FeatureToggle, SelectionRecord, ToggleState};
pub use product::ProductConfig;
pub use provision::{ProvisionPlan, Provisioner};
pub use runner::run;
