//! Flag grammar and resolution
//!
//! This module provides:
//! - The feature toggle catalogue and resolved toggle states
//! - Lexing of the argument vector into typed tokens
//! - Resolution into a `SelectionRecord`, including default enablement

pub mod grammar;
pub mod lexer;
pub mod resolver;
pub mod selection;
pub mod toggle;

pub use resolver::resolve;
pub use selection::{SelectionBuilder, SelectionRecord};
pub use toggle::{FeatureToggle, ToggleState};
