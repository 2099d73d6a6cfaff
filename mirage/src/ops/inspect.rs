//! Inspect operation - the projection graph and the pipeline that builds it.

use std::path::Path;

use eyre::{Context, Result};
use mirage_codegen::{
    ProjectionOptions,
    pipeline::{Pipeline, SnapshotPlugin},
};
use mirage_ir::ProjectionGraph;
use mirage_metadata::Metadata;

use super::summarize;
use crate::reports::{ClassInfo, InspectReport, LintInfo, NamespaceInfo, PhaseInfo};

/// Execute the inspect operation.
///
/// Runs the pipeline, optionally writing a snapshot after each phase, and
/// describes the resulting graph.
pub fn inspect(
    metadata: Metadata,
    options: ProjectionOptions,
    config_path: &Path,
    snapshots: Option<&Path>,
) -> Result<InspectReport> {
    let mut pipeline = Pipeline::new();
    if let Some(dir) = snapshots {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();
    let lints = pipeline
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let mut ctx = pipeline
        .run(metadata, options)
        .wrap_err("Pipeline failed")?;
    let graph = ctx.take_graph()?;

    Ok(InspectReport {
        config_path: config_path.to_path_buf(),
        phases,
        lints,
        summary: summarize(&graph),
        namespaces: namespaces(&graph),
        endpoint_services: endpoint_services(&graph),
        snapshot_dir: snapshots.map(Path::to_path_buf),
        graph,
    })
}

fn namespaces(graph: &ProjectionGraph) -> Vec<NamespaceInfo> {
    graph
        .namespaces()
        .map(|ns| NamespaceInfo {
            name: if ns.is_global() {
                "(global)".to_string()
            } else {
                ns.qualified_name.clone()
            },
            classes: graph
                .namespace_classes(ns)
                .map(|(_, node)| ClassInfo {
                    declared_name: node.declared_name(),
                    kind: node.kind.as_str().to_string(),
                    members: if node.is_enum() {
                        node.members.len()
                    } else {
                        node.properties.len() + node.methods.len() + node.constructors.len()
                    },
                    needs_stub: node.needs_base_layer() && !node.is_enum(),
                })
                .collect(),
        })
        .filter(|ns: &NamespaceInfo| !ns.classes.is_empty())
        .collect()
}

fn endpoint_services(graph: &ProjectionGraph) -> Vec<String> {
    graph
        .endpoint()
        .map(|endpoint| {
            endpoint
                .services
                .iter()
                .map(|&id| graph.get(id).qualified_name.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;

    const METADATA: &str = r#"
        [assembly]
        name = "Contoso"

        [[types]]
        name = "Contoso.Color"
        kind = "enum"
        members = ["Red", "Green"]

        [[types]]
        name = "Contoso.Api.ItemsController"
        markers = ["js-service"]
        methods = [{ name = "List", route = "items" }]
    "#;

    fn run(snapshots: Option<&Path>) -> InspectReport {
        let metadata = Metadata::from_str(METADATA).unwrap();
        let options = ProjectionOptions::from_metadata(&metadata);
        inspect(metadata, options, Path::new("mirage.toml"), snapshots).unwrap()
    }

    #[test]
    fn test_describes_namespaces_and_endpoint() {
        let report = run(None);
        let names: Vec<_> = report.namespaces.iter().map(|ns| ns.name.as_str()).collect();
        assert_eq!(names, vec!["Contoso", "Contoso.Api"]);
        assert_eq!(report.namespaces[0].classes[0].kind, "enum");
        assert_eq!(report.namespaces[0].classes[0].members, 2);
        assert_eq!(report.endpoint_services, vec!["Contoso.Api.ItemsController"]);
        assert_eq!(report.phases[0].name, "validate");
    }

    #[test]
    fn test_writes_phase_snapshots() {
        let temp = TempDir::new().unwrap();
        let report = run(Some(temp.path()));
        assert_eq!(report.snapshot_dir.as_deref(), Some(temp.path()));
        for phase in ["validate", "build", "aggregate"] {
            assert!(temp.path().join(format!("{}.json", phase)).exists());
        }
    }
}
