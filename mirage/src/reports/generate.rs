//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    GraphSummary,
    output::{Output, Report},
};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Name of the projected assembly.
    pub assembly: String,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    pub summary: GraphSummary,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of declaration generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    /// Files written on this run.
    pub written: Vec<PathBuf>,
    /// Existing files left untouched (hand-edited stubs).
    pub skipped: Vec<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&self.assembly);
        self.summary.render(out);

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(&path.display().to_string());
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Kept (already exists)");
            for path in &written.skipped {
                out.list_item(&path.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            assembly: "Contoso".into(),
            warnings: vec!["warning: type 'Contoso.Missing' is not declared".into()],
            summary: GraphSummary {
                namespaces: 1,
                classes: 2,
                services: 0,
                endpoint: None,
            },
            result,
        }
    }

    #[test]
    fn test_written_lists_files() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Written(WrittenResult {
            written: vec![PathBuf::from("contoso.ts")],
            skipped: vec![PathBuf::from("contoso.partial.ts")],
        }))
        .render(&mut out);

        let text = out.text();
        assert!(text.starts_with("warning: type 'Contoso.Missing' is not declared\nContoso\n"));
        assert!(text.contains("Declarations: 2"));
        assert!(text.contains("Written:\n  + contoso.ts"));
        assert!(text.contains("Kept (already exists):\n  - contoso.partial.ts"));
        assert!(!text.contains("Endpoint"));
    }

    #[test]
    fn test_preview_prints_contents() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Preview(vec![PreviewFile {
            path: "contoso.ts".into(),
            content: "namespace Contoso {}".into(),
        }]))
        .render(&mut out);

        assert!(out.text().contains("-- contoso.ts --\nnamespace Contoso {}"));
        assert!(out.text().ends_with("1 files would be generated"));
    }
}
