//! Feature toggles and their resolved states

use std::fmt;

/// Tooling features a project can be initialized with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureToggle {
    Eslint,
    Prettier,
    Jest,
    Husky,
    LintStaged,
}

impl FeatureToggle {
    /// Every toggle, in the order they appear in usage text
    pub const ALL: [FeatureToggle; 5] = [
        FeatureToggle::Eslint,
        FeatureToggle::Prettier,
        FeatureToggle::Jest,
        FeatureToggle::Husky,
        FeatureToggle::LintStaged,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FeatureToggle::Eslint => "ESLint",
            FeatureToggle::Prettier => "Prettier",
            FeatureToggle::Jest => "Jest",
            FeatureToggle::Husky => "Husky",
            FeatureToggle::LintStaged => "lint-staged",
        }
    }

    /// Long flag name, without the leading `--`
    pub fn long_flag(&self) -> &'static str {
        match self {
            FeatureToggle::Eslint => "eslint",
            FeatureToggle::Prettier => "prettier",
            FeatureToggle::Jest => "jest",
            FeatureToggle::Husky => "husky",
            FeatureToggle::LintStaged => "lint-staged",
        }
    }

    /// Single-letter short flag. Husky has none: `-h` belongs to help.
    pub fn short_flag(&self) -> Option<char> {
        match self {
            FeatureToggle::Eslint => Some('e'),
            FeatureToggle::Prettier => Some('p'),
            FeatureToggle::Jest => Some('j'),
            FeatureToggle::Husky => None,
            FeatureToggle::LintStaged => Some('l'),
        }
    }

    /// npm package installed as a dev dependency when enabled
    pub fn package(&self) -> &'static str {
        match self {
            FeatureToggle::Eslint => "eslint",
            FeatureToggle::Prettier => "prettier",
            FeatureToggle::Jest => "jest",
            FeatureToggle::Husky => "husky",
            FeatureToggle::LintStaged => "lint-staged",
        }
    }

    /// Config file generated when no existing config is supplied
    pub fn default_config_file(&self) -> &'static str {
        match self {
            FeatureToggle::Eslint => ".eslintrc.json",
            FeatureToggle::Prettier => ".prettierrc",
            FeatureToggle::Jest => "jest.config.js",
            FeatureToggle::Husky => ".husky/pre-commit",
            FeatureToggle::LintStaged => ".lintstagedrc",
        }
    }
}

impl fmt::Display for FeatureToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolved state of a single toggle
///
/// A config path can only be carried by an enabled toggle, so the
/// "disabled with a path" combination is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleState {
    /// Not requested
    Disabled,
    /// Enabled with a generated default config
    Generate,
    /// Enabled, reusing the config at the given path
    Reuse(String),
}

impl ToggleState {
    /// Build the enabled state for an optional inline value.
    /// An empty value is treated as no value.
    pub fn enabled_with(config_path: Option<String>) -> Self {
        match config_path {
            Some(path) if !path.is_empty() => ToggleState::Reuse(path),
            _ => ToggleState::Generate,
        }
    }

    pub fn enabled(&self) -> bool {
        !matches!(self, ToggleState::Disabled)
    }

    pub fn config_path(&self) -> Option<&str> {
        match self {
            ToggleState::Reuse(path) => Some(path),
            _ => None,
        }
    }
}
