//! Hand-off of a resolved selection to whatever performs the side effects

pub mod plan;

use crate::flags::SelectionRecord;
use anyhow::Result;

pub use plan::{ConfigSource, PlannedTool, ProvisionPlan};

/// Consumes a resolved selection and materializes it.
///
/// Takes the record by value: each selection is provisioned once.
pub trait Provisioner {
    fn provision(&mut self, selection: SelectionRecord) -> Result<()>;
}
