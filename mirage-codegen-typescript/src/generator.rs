//! TypeScript declaration generator.

use std::path::Path;

use eyre::Result;
use mirage_codegen::{
    ProjectionOptions,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use mirage_core::{GeneratedFile, WriteResult};
use mirage_ir::ProjectionGraph;
use tracing::debug;

use crate::{
    ast::needs_stub,
    files::{DeclarationsTs, StubsTs},
};

/// Renders a projection graph into a declarations file and an optional stubs file.
pub struct Generator {
    graph: ProjectionGraph,
    options: ProjectionOptions,
    /// Name of the projected assembly, for the file header.
    source: String,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    pub fn new(graph: ProjectionGraph, options: ProjectionOptions, source: impl Into<String>) -> Self {
        Self {
            graph,
            options,
            source: source.into(),
        }
    }

    /// Create a generator from a pipeline run.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        let graph = ctx.take_graph()?;
        Ok(Self::new(graph, ctx.options, ctx.metadata.assembly.name))
    }

    pub fn graph(&self) -> &ProjectionGraph {
        &self.graph
    }

    fn declarations(&self) -> DeclarationsTs<'_> {
        DeclarationsTs::new(&self.graph, &self.options, &self.source)
    }

    /// The stubs file, when configured and at least one class needs a subclass.
    fn stubs(&self) -> Option<StubsTs<'_>> {
        let path = self.options.stubs.as_deref()?;
        if !self.graph.rendered_classes().any(|(_, node)| needs_stub(node)) {
            debug!("no class needs a subclass stub");
            return None;
        }
        Some(StubsTs::new(&self.graph, path))
    }

    /// Preview generated files without writing to disk.
    fn preview_files(&self) -> Vec<PreviewFile> {
        let mut files = vec![PreviewFile {
            path: self.options.output.display().to_string(),
            content: self.declarations().render(),
        }];
        if let Some(stubs) = self.stubs() {
            files.push(PreviewFile {
                path: stubs.path(Path::new("")).display().to_string(),
                content: stubs.render(),
            });
        }
        files
    }

    /// Write all files under `output_dir`.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        let declarations = self.declarations();
        record(&mut result, declarations.path(output_dir), declarations.write(output_dir)?);

        if let Some(stubs) = self.stubs() {
            record(&mut result, stubs.path(output_dir), stubs.write(output_dir)?);
        }
        Ok(result)
    }
}

fn record(result: &mut GenerateResult, path: std::path::PathBuf, outcome: WriteResult) {
    debug!(path = %path.display(), ?outcome, "output file");
    match outcome {
        WriteResult::Written => result.written.push(path),
        WriteResult::Skipped => result.skipped.push(path),
    }
}
