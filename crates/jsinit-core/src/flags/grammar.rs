//! Flag table and name lookup
//!
//! Long names follow getopt_long: an exact match wins, otherwise any
//! unique prefix selects the flag (`--hu` is `--husky`).

use super::toggle::FeatureToggle;
use crate::error::UsageError;

/// A recognized flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Help,
    Toggle(FeatureToggle),
}

impl Flag {
    pub fn long_name(&self) -> &'static str {
        match self {
            Flag::Help => "help",
            Flag::Toggle(toggle) => toggle.long_flag(),
        }
    }

    /// Whether the flag accepts an optional inline value
    pub fn takes_value(&self) -> bool {
        matches!(self, Flag::Toggle(_))
    }
}

/// Every flag in the grammar, help first
fn all_flags() -> impl Iterator<Item = Flag> {
    let toggles = FeatureToggle::ALL.into_iter().map(Flag::Toggle);
    std::iter::once(Flag::Help).chain(toggles)
}

/// Look up a single-letter flag
pub fn lookup_short(c: char) -> Option<Flag> {
    if c == 'h' {
        return Some(Flag::Help);
    }
    FeatureToggle::ALL
        .into_iter()
        .find(|t| t.short_flag() == Some(c))
        .map(Flag::Toggle)
}

/// Look up a long flag by full name or unique prefix
pub fn lookup_long(name: &str) -> Result<Flag, UsageError> {
    if name.is_empty() {
        return Err(UsageError::UnknownFlag {
            flag: "--".to_string(),
        });
    }

    if let Some(flag) = all_flags().find(|f| f.long_name() == name) {
        return Ok(flag);
    }

    let candidates: Vec<Flag> = all_flags()
        .filter(|f| f.long_name().starts_with(name))
        .collect();

    match candidates.as_slice() {
        [flag] => Ok(*flag),
        [] => Err(UsageError::UnknownFlag {
            flag: format!("--{}", name),
        }),
        many => Err(UsageError::AmbiguousFlag {
            prefix: name.to_string(),
            candidates: many
                .iter()
                .map(|f| format!("--{}", f.long_name()))
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
