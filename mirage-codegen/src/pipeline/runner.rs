//! Pipeline orchestrator.

use eyre::Result;
use mirage_metadata::Metadata;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{AggregatePhase, BuildPhase, LintInfo, ValidatePhase},
};
use crate::ProjectionOptions;

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, build, aggregate) followed by any
/// user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(SnapshotPlugin::new())
///     .run(metadata, options)?;
/// let graph = ctx.graph()?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase (e.g. with a custom lint set).
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Names and descriptions of every phase, in run order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        let builtin: [&dyn Phase; 3] = [&self.validate, &BuildPhase, &AggregatePhase];
        builtin
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
            .map(|p| p.info())
            .collect()
    }

    /// Lints run by the validate phase.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.validate.lint_info()
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally; validation fails when a
    /// lint reported an error.
    pub fn run(&self, metadata: Metadata, options: ProjectionOptions) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(metadata, options);

        let builtin_phases: [&dyn Phase; 3] = [&self.validate, &BuildPhase, &AggregatePhase];
        for phase in builtin_phases
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
        {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run only the validate phase, keeping errors as diagnostics.
    pub fn check(&self, metadata: Metadata, options: ProjectionOptions) -> CompilationContext {
        let mut ctx = CompilationContext::new(metadata, options);
        self.validate.collect(&mut ctx);
        ctx
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
