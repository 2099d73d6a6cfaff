//! Compilation context passed through pipeline phases.

use eyre::Result;
use mirage_ir::ProjectionGraph;
use mirage_metadata::Metadata;

use super::diagnostic::{Diagnostic, Severity};
use crate::ProjectionOptions;

/// State carried through the pipeline.
#[derive(Debug)]
pub struct CompilationContext {
    pub metadata: Metadata,
    pub options: ProjectionOptions,
    /// The projection graph (populated by the build phase).
    pub graph: Option<ProjectionGraph>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(metadata: Metadata, options: ProjectionOptions) -> Self {
        Self {
            metadata,
            options,
            graph: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The projection graph, or an error if the build phase has not run.
    pub fn graph(&self) -> Result<&ProjectionGraph> {
        self.graph
            .as_ref()
            .ok_or_else(|| eyre::eyre!("projection graph not built - did the build phase run?"))
    }

    /// Take the projection graph out of the context.
    pub fn take_graph(&mut self) -> Result<ProjectionGraph> {
        self.graph
            .take()
            .ok_or_else(|| eyre::eyre!("projection graph not built - did the build phase run?"))
    }
}
