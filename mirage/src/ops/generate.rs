//! Generate operation - declarations from metadata.

use std::path::Path;

use eyre::{Context, Result};
use mirage_codegen::{ProjectionOptions, pipeline::Pipeline};
use mirage_codegen_typescript::{Generator, LanguageCodegen};
use mirage_metadata::Metadata;
use tracing::info;

use super::summarize;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory that relative output paths resolve against.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the metadata and renders the declarations file and,
/// when configured, the stubs file.
pub fn generate(
    metadata: Metadata,
    options: ProjectionOptions,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let assembly = metadata.assembly.name.clone();
    let ctx = Pipeline::new()
        .run(metadata, options)
        .wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx.warnings().map(ToString::to_string).collect();
    let summary = summarize(ctx.graph()?);

    let generator = Generator::from_context(ctx)?;
    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let outcome = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to write declarations")?;
        info!(written = outcome.written.len(), skipped = outcome.skipped.len(), "generation finished");
        GenerationResult::Written(WrittenResult {
            written: outcome.written,
            skipped: outcome.skipped,
        })
    };

    Ok(GenerateReport {
        assembly,
        warnings,
        summary,
        result,
    })
}
