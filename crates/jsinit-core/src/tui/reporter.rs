//! Provisioner that reports the plan with cliclack instead of acting on it

use crate::config::{package_manager_from_env, PackageManagerChoice};
use crate::flags::{FeatureToggle, SelectionRecord};
use crate::product::ProductConfig;
use crate::provision::{ConfigSource, PlannedTool, ProvisionPlan, Provisioner};
use anyhow::Result;

/// Prints what provisioning the selection involves
pub struct PlanReporter<C: ProductConfig> {
    config: C,
    package_manager: PackageManagerChoice,
}

impl<C: ProductConfig> PlanReporter<C> {
    pub fn new(config: C, package_manager: PackageManagerChoice) -> Self {
        Self {
            config,
            package_manager,
        }
    }

    /// Create a reporter with the package manager read from the product's env var
    pub fn from_env(config: C) -> Self {
        let package_manager = package_manager_from_env(config.package_manager_env());
        Self::new(config, package_manager)
    }
}

impl<C: ProductConfig> Provisioner for PlanReporter<C> {
    fn provision(&mut self, selection: SelectionRecord) -> Result<()> {
        cliclack::intro(self.config.display_name())?;

        if let Some(raw) = &self.package_manager.unrecognized {
            cliclack::log::warning(format!(
                "Unknown package manager '{}' in {}, using {}",
                raw,
                self.config.package_manager_env(),
                self.package_manager.manager
            ))?;
        }

        let plan = ProvisionPlan::from_selection(&selection, self.package_manager.manager);

        cliclack::log::info(format!("Target: {}", plan.target_path))?;

        for tool in &plan.tools {
            cliclack::log::success(describe_tool(tool))?;
        }

        let skipped = skipped_tools(&selection);
        if !skipped.is_empty() {
            cliclack::log::info(format!("Skipped: {}", skipped.join(", ")))?;
        }

        for note in &plan.notes {
            cliclack::log::warning(note)?;
        }

        if let Some(cmd) = plan.install_command() {
            cliclack::log::info(format!("Dev dependencies: {}", cmd))?;
        }

        print_next_steps(&self.config, &selection, &plan)?;

        Ok(())
    }
}

fn describe_tool(tool: &PlannedTool) -> String {
    match &tool.config {
        ConfigSource::Generate(file) => {
            format!("{}: generate {}", tool.toggle.display_name(), file)
        }
        ConfigSource::Reuse(path) => {
            format!("{}: reuse {}", tool.toggle.display_name(), path)
        }
    }
}

fn skipped_tools(selection: &SelectionRecord) -> Vec<&'static str> {
    FeatureToggle::ALL
        .into_iter()
        .filter(|t| !selection.is_enabled(*t))
        .map(|t| t.display_name())
        .collect()
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    selection: &SelectionRecord,
    plan: &ProvisionPlan,
) -> Result<()> {
    let steps = config.next_steps(selection, plan.package_manager);

    if !steps.is_empty() {
        println!();
        println!("  Next steps");
        println!();

        for (i, step) in steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step);
        }
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::resolve;

    #[test]
    fn test_describe_generated_and_reused() {
        let generated = PlannedTool {
            toggle: FeatureToggle::Jest,
            package: "jest",
            config: ConfigSource::Generate("jest.config.js"),
        };
        assert_eq!(describe_tool(&generated), "Jest: generate jest.config.js");

        let reused = PlannedTool {
            toggle: FeatureToggle::Prettier,
            package: "prettier",
            config: ConfigSource::Reuse("../.prettierrc".to_string()),
        };
        assert_eq!(describe_tool(&reused), "Prettier: reuse ../.prettierrc");
    }

    #[test]
    fn test_skipped_tools_in_opt_in_mode() {
        let selection = resolve(["-e", "-j", "app"]).unwrap();
        assert_eq!(
            skipped_tools(&selection),
            vec!["Prettier", "Husky", "lint-staged"]
        );
    }
}
