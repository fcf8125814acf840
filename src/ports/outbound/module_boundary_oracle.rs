use crate::reporting::domain::Gav;
use crate::shared::Result;
use std::path::Path;

/// ModuleBoundaryOracle port deciding whether a coordinate is one of the
/// project's own modules
///
/// The working copy is only read, never modified.
pub trait ModuleBoundaryOracle: Send + Sync {
    /// Whether `gav` is built by a manifest inside `working_copy`
    fn is_module(&self, working_copy: &Path, gav: &Gav) -> Result<bool>;
}
