//! Entry point tying resolution, usage output and the provisioner together

use crate::error::{ExitStatus, ResolveError};
use crate::flags;
use crate::product::ProductConfig;
use crate::provision::Provisioner;
use crate::usage;
use colored::Colorize;
use std::ffi::OsString;

/// Resolve `args` (program name excluded) and hand the selection to
/// `provisioner`. Help and usage errors are printed here and the
/// provisioner is not called.
pub fn run<C, P, I, T>(config: &C, args: I, provisioner: &mut P) -> ExitStatus
where
    C: ProductConfig,
    P: Provisioner,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let selection = match flags::resolve(args) {
        Ok(selection) => selection,
        Err(err) => {
            match &err {
                ResolveError::HelpRequested => print!("{}", usage::render_help(config)),
                ResolveError::Usage(usage_err) => {
                    eprint!("{}", usage::render_usage_error(config, usage_err))
                }
            }
            return err.exit_status();
        }
    };

    match provisioner.provision(selection) {
        Ok(()) => ExitStatus::Success,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitStatus::Failure
        }
    }
}
