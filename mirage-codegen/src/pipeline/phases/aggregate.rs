//! Aggregate phase - synthesizes the service endpoint.

use eyre::Result;

use crate::{
    endpoint,
    pipeline::{CompilationContext, Phase},
};

/// Phase that groups every generated service under one endpoint class.
pub struct AggregatePhase;

impl Phase for AggregatePhase {
    fn name(&self) -> &'static str {
        "aggregate"
    }

    fn description(&self) -> &'static str {
        "Group generated services under one endpoint"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(graph) = ctx.graph.as_mut() else {
            eyre::bail!("projection graph not built - did the build phase run?");
        };
        if let Some(endpoint) = endpoint::aggregate(graph) {
            graph.set_endpoint(endpoint);
        }
        Ok(())
    }
}
