//! jsinit CLI - JavaScript project scaffolding with lint, format and test tooling

use jsinit_core::tui::PlanReporter;
use jsinit_core::{FeatureToggle, PackageManager, ProductConfig, SelectionRecord};
use std::process::ExitCode;

/// jsinit product configuration
#[derive(Clone)]
pub struct JsInitConfig;

impl ProductConfig for JsInitConfig {
    fn name(&self) -> &'static str {
        "jsinit"
    }

    fn display_name(&self) -> &'static str {
        "jsinit"
    }

    fn cli_description(&self) -> &'static str {
        "Initialize a JavaScript project with ESLint, Prettier, Jest, Husky and lint-staged"
    }

    fn package_manager_env(&self) -> &'static str {
        "JSINIT_PACKAGE_MANAGER"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/jsinit/jsinit#readme"
    }

    fn next_steps(&self, selection: &SelectionRecord, pm: PackageManager) -> Vec<String> {
        let mut steps = vec![format!("cd {}", selection.target_path())];

        if selection.is_enabled(FeatureToggle::Husky) {
            let hooks = "git init (Husky installs its hooks into a git repository)";
            steps.push(hooks.to_string());
        }
        if selection.is_enabled(FeatureToggle::Eslint) {
            steps.push(pm.run_script("lint"));
        }
        if selection.is_enabled(FeatureToggle::Prettier) {
            steps.push(pm.run_script("format"));
        }
        if selection.is_enabled(FeatureToggle::Jest) {
            steps.push(pm.run_script("test"));
        }

        steps
    }
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = JsInitConfig;
    let mut reporter = PlanReporter::from_env(config.clone());

    let status = jsinit_core::run(&config, std::env::args_os().skip(1), &mut reporter);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    status.into()
}
