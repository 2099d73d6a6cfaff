//! Inspect command report data structures.

use std::path::PathBuf;

use mirage_ir::ProjectionGraph;

use super::{
    GraphSummary,
    output::{Output, Report},
};

/// Report data from graph inspection.
#[derive(Debug)]
pub struct InspectReport {
    /// Path to the metadata file.
    pub config_path: PathBuf,
    /// Pipeline phases, in run order.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    pub summary: GraphSummary,
    /// Non-empty namespaces, in render order.
    pub namespaces: Vec<NamespaceInfo>,
    /// Services exposed by the endpoint.
    pub endpoint_services: Vec<String>,
    /// Where phase snapshots were written, if requested.
    pub snapshot_dir: Option<PathBuf>,
    /// The finished graph, for `--json`.
    pub graph: ProjectionGraph,
}

/// Information about a pipeline phase.
#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

/// Information about a validation lint.
#[derive(Debug)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct NamespaceInfo {
    pub name: String,
    pub classes: Vec<ClassInfo>,
}

/// One rendered declaration.
#[derive(Debug)]
pub struct ClassInfo {
    /// Name as rendered (with the `Base` suffix when split).
    pub declared_name: String,
    pub kind: String,
    /// Enum members, or properties, methods and constructors.
    pub members: usize,
    /// A hand-authored subclass is expected.
    pub needs_stub: bool,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Mirage Projection");
        out.newline();
        out.key_value("Input", &self.config_path.display().to_string());
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section("Summary");
        self.summary.render(out);
        out.newline();

        for namespace in &self.namespaces {
            out.section(&namespace.name);
            for class in &namespace.classes {
                let stub = if class.needs_stub { ", stub" } else { "" };
                out.key_value_indented(
                    &class.declared_name,
                    &format!("{} ({} members{})", class.kind, class.members, stub),
                );
            }
            out.newline();
        }

        if !self.endpoint_services.is_empty() {
            out.section("Endpoint Services");
            for service in &self.endpoint_services {
                out.list_item(service);
            }
            out.newline();
        }

        if let Some(dir) = &self.snapshot_dir {
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
        }
    }
}
