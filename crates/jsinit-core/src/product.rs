//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to define its identity and the
//! text shown around the resolved selection.

use crate::config::PackageManager;
use crate::flags::SelectionRecord;

/// Configuration trait for the CLI product
///
/// Defines:
/// - Product identity (name, display name)
/// - Where the package manager preference is read from
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used as the command name in usage text)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable name for overriding the package manager
    fn package_manager_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after provisioning
    fn next_steps(
        &self,
        selection: &SelectionRecord,
        package_manager: PackageManager,
    ) -> Vec<String>;
}
