//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A plugin that hooks into the compilation pipeline.
///
/// Plugins receive callbacks before and after each phase, with mutable
/// access to the context.
///
/// # Example
///
/// ```ignore
/// struct GraphSizePlugin;
///
/// impl Plugin for GraphSizePlugin {
///     fn name(&self) -> &'static str { "graph-size" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         if let Some(graph) = &ctx.graph {
///             println!("{}: {} nodes", phase, graph.len());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
