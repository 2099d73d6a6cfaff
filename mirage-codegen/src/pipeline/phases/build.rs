//! Build phase - projects the metadata into a graph.

use eyre::Result;

use crate::{
    docs::MetadataDocs,
    graph_builder::GraphBuilder,
    pipeline::{CompilationContext, Phase},
};

/// Phase that walks every discovered root into the projection graph.
///
/// Documentation is attached only when comments are enabled.
pub struct BuildPhase;

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Walk discovered roots into a projection graph"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let docs = MetadataDocs::new(&ctx.metadata);
        let mut builder = GraphBuilder::new(&ctx.metadata);
        if ctx.options.comments {
            builder = builder.with_docs(&docs);
        }
        let output = builder.build();

        tracing::debug!(
            classes = output.graph.rendered_classes().count(),
            namespaces = output.graph.namespaces().count(),
            "built projection graph"
        );
        for diagnostic in output.diagnostics {
            ctx.add_diagnostic(diagnostic);
        }
        ctx.graph = Some(output.graph);
        Ok(())
    }
}
