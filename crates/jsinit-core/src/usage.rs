//! Usage and help text, built from the toggle catalogue

use crate::error::UsageError;
use crate::flags::FeatureToggle;
use crate::product::ProductConfig;
use colored::Colorize;

/// Spelling of a toggle flag in the synopsis, e.g. `-e|--eslint[=path]`
fn flag_spelling(toggle: FeatureToggle) -> String {
    match toggle.short_flag() {
        Some(c) => format!("-{}[path]|--{}[=path]", c, toggle.long_flag()),
        None => format!("--{}[=path]", toggle.long_flag()),
    }
}

/// One-line synopsis
pub fn synopsis<C: ProductConfig>(config: &C) -> String {
    let flags: Vec<String> = FeatureToggle::ALL
        .iter()
        .map(|t| format!("[{}]", flag_spelling(*t)))
        .collect();
    format!(
        "{} {} [-h|--help] [--] <target-path>",
        config.name(),
        flags.join(" ")
    )
}

/// Full help text
pub fn render_help<C: ProductConfig>(config: &C) -> String {
    let mut out = String::new();
    out.push_str(config.cli_description());
    out.push_str("\n\n");
    out.push_str(&format!("{} {}\n\n", "Usage:".bold(), synopsis(config)));

    out.push_str(&format!("{}\n", "Arguments:".bold()));
    out.push_str("  <target-path>  Directory to initialize\n\n");

    out.push_str(&format!("{}\n", "Options:".bold()));
    for toggle in FeatureToggle::ALL {
        out.push_str(&format!(
            "  {:<32} Set up {} (reuse the config at <path> if given, else generate {})\n",
            flag_spelling(toggle),
            toggle.display_name(),
            toggle.default_config_file()
        ));
    }
    out.push_str(&format!("  {:<32} Print help\n\n", "-h|--help"));

    out.push_str(
        "With no tool flags every tool is set up with a generated config.\n\
         Naming any tool flag sets up only the named tools.\n",
    );
    out.push_str(&format!(
        "\nPackage manager: set {} to npm, yarn, pnpm or bun (default npm).\n",
        config.package_manager_env()
    ));
    out.push_str(&format!("Docs: {}\n", config.docs_url()));
    out
}

/// Message for a usage error, followed by the synopsis
pub fn render_usage_error<C: ProductConfig>(config: &C, err: &UsageError) -> String {
    format!(
        "{} {}\n\n{} {}\n\nRun '{} --help' for more information.\n",
        "error:".red().bold(),
        err,
        "Usage:".bold(),
        synopsis(config),
        config.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageManager;
    use crate::flags::SelectionRecord;

    #[derive(Clone)]
    struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "jsinit"
        }
        fn display_name(&self) -> &'static str {
            "jsinit"
        }
        fn cli_description(&self) -> &'static str {
            "test description"
        }
        fn package_manager_env(&self) -> &'static str {
            "TEST_PM"
        }
        fn docs_url(&self) -> &'static str {
            "https://example.invalid/docs"
        }
        fn next_steps(&self, _: &SelectionRecord, _: PackageManager) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_synopsis_lists_every_toggle() {
        let text = synopsis(&TestConfig);
        assert!(text.starts_with("jsinit "));
        assert!(text.contains("[-e[path]|--eslint[=path]]"));
        assert!(text.contains("[--husky[=path]]"));
        assert!(text.contains("[-l[path]|--lint-staged[=path]]"));
        assert!(text.ends_with("<target-path>"));
    }

    #[test]
    fn test_help_mentions_env_and_defaults() {
        let text = render_help(&TestConfig);
        assert!(text.contains("TEST_PM"));
        assert!(text.contains("jest.config.js"));
        assert!(text.contains("-h|--help"));
    }

    #[test]
    fn test_usage_error_includes_message() {
        let text = render_usage_error(&TestConfig, &UsageError::MissingTarget);
        assert!(text.contains("missing target path"));
        assert!(text.contains("jsinit --help"));
    }
}
