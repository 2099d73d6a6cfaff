//! Projection graph types for the mirage type projector.
//!
//! This crate holds the language-agnostic result of projecting a host object
//! model: resolved types, class nodes with their members, and the namespace
//! tree they are registered in.
//!
//! # Architecture
//!
//! ```text
//! mirage.toml → mirage-metadata (parsing) → mirage-codegen (graph builder) → ProjectionGraph → render
//! ```
//!
//! Every node is created during a single build pass and is read-only once
//! rendering starts.

mod builtin;
mod class;
mod graph;
mod member;
mod type_node;

pub use builtin::Builtin;
pub use class::{ClassFlags, ClassId, ClassKind, ClassNode, EnumMemberNode};
pub use graph::{EndpointNode, NamespaceNode, ProjectionGraph};
pub use member::{
    MethodNode, MethodShape, ParameterNode, PropertyNode, PropertyVariant, RpcCall, Statement,
};
pub use type_node::TypeNode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_serializes_to_json() {
        let mut graph = ProjectionGraph::new();
        let mut node = ClassNode::new("App.Person", ClassKind::Class);
        node.properties.push(
            PropertyNode::new(
                "Name",
                TypeNode::builtin(Builtin::String),
                PropertyVariant::Simple,
            )
            .with_default(Some("''".into())),
        );
        let id = graph.insert("App.Person", node);
        graph.register(id);

        let json = serde_json::to_value(&graph).unwrap();
        let person = &json["classes"][1];
        assert_eq!(person["qualified_name"], "App.Person");
        assert_eq!(person["properties"][0]["variant"], "simple");
        assert_eq!(person["properties"][0]["ty"]["kind"], "primitive");
        assert_eq!(json["index"]["App.Person"], 1);
    }
}
