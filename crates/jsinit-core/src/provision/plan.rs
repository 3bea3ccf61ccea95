//! Side-effect-free description of what provisioning a selection involves

use crate::config::PackageManager;
use crate::flags::{FeatureToggle, SelectionRecord, ToggleState};

/// Where a tool's config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Write the default config to this file in the project
    Generate(&'static str),
    /// Reuse an existing config file
    Reuse(String),
}

/// One enabled tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTool {
    pub toggle: FeatureToggle,
    pub package: &'static str,
    pub config: ConfigSource,
}

/// Everything a provisioner needs to know, derived from a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionPlan {
    pub target_path: String,
    pub package_manager: PackageManager,
    pub tools: Vec<PlannedTool>,
    /// Advisory messages about the combination of tools
    pub notes: Vec<String>,
}

impl ProvisionPlan {
    pub fn from_selection(selection: &SelectionRecord, package_manager: PackageManager) -> Self {
        let tools: Vec<PlannedTool> = selection
            .toggles()
            .filter_map(|(toggle, state)| {
                let config = match state {
                    ToggleState::Disabled => return None,
                    ToggleState::Generate => ConfigSource::Generate(toggle.default_config_file()),
                    ToggleState::Reuse(path) => ConfigSource::Reuse(path.clone()),
                };
                Some(PlannedTool {
                    toggle,
                    package: toggle.package(),
                    config,
                })
            })
            .collect();

        let mut notes = Vec::new();
        if selection.is_enabled(FeatureToggle::LintStaged)
            && !selection.is_enabled(FeatureToggle::Husky)
        {
            notes.push(format!(
                "{} is enabled without {}; nothing will run it on commit",
                FeatureToggle::LintStaged,
                FeatureToggle::Husky
            ));
        }

        Self {
            target_path: selection.target_path().to_string(),
            package_manager,
            tools,
            notes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn packages(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.package).collect()
    }

    /// Dev-dependency install command, if there is anything to install
    pub fn install_command(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.package_manager.add_dev_command(&self.packages()))
    }
}
