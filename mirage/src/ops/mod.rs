//! Core operations.
//!
//! This module contains the business logic for mirage commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod inspect;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use inspect::inspect;
use mirage_ir::ProjectionGraph;

use crate::reports::GraphSummary;

/// Count what a projection graph will render.
pub(crate) fn summarize(graph: &ProjectionGraph) -> GraphSummary {
    GraphSummary {
        namespaces: graph
            .namespaces()
            .filter(|ns| graph.namespace_classes(ns).next().is_some())
            .count(),
        classes: graph.rendered_classes().count(),
        services: graph.services().count(),
        endpoint: graph
            .endpoint()
            .map(|endpoint| endpoint.class.qualified_name.clone()),
    }
}
