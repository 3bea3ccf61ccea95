//! Package manager preference

use std::fmt;

/// Package managers the install instructions can be written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Parse a package manager name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            "bun" => Some(PackageManager::Bun),
            _ => None,
        }
    }

    /// Command line adding the given packages as dev dependencies
    pub fn add_dev_command(&self, packages: &[&str]) -> String {
        let prefix = match self {
            PackageManager::Npm => "npm install --save-dev",
            PackageManager::Yarn => "yarn add --dev",
            PackageManager::Pnpm => "pnpm add --save-dev",
            PackageManager::Bun => "bun add --dev",
        };
        format!("{} {}", prefix, packages.join(" "))
    }

    /// Command line running a package.json script
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Yarn => format!("yarn {}", script),
            other => format!("{} run {}", other.command(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Outcome of reading the preference: the manager to use, and the raw
/// value if it was set but not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerChoice {
    pub manager: PackageManager,
    pub unrecognized: Option<String>,
}

impl PackageManagerChoice {
    /// Interpret a raw preference value. Unset or blank means npm.
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Self {
                manager: PackageManager::default(),
                unrecognized: None,
            },
            Some(raw) => match PackageManager::parse(raw) {
                Some(manager) => Self {
                    manager,
                    unrecognized: None,
                },
                None => Self {
                    manager: PackageManager::default(),
                    unrecognized: Some(raw.to_string()),
                },
            },
        }
    }
}

/// Read the package manager preference from the named environment variable
pub fn package_manager_from_env(var: &str) -> PackageManagerChoice {
    let value = std::env::var(var).ok();
    PackageManagerChoice::from_value(value.as_deref())
}
