//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the compilation pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints over the metadata
/// - `BuildPhase` - walks the discovered roots into a projection graph
/// - `AggregatePhase` - synthesizes the service endpoint
///
/// Custom phases run after the built-in ones.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics, snapshots and plugin hooks).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues are
    /// recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
