//! The service endpoint block.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::{EndpointNode, ProjectionGraph};

use super::namespace::Namespace;

/// The endpoint class, rendered in its own namespace block after every other declaration.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    graph: &'a ProjectionGraph,
    node: &'a EndpointNode,
}

impl<'a> Endpoint<'a> {
    pub fn new(graph: &'a ProjectionGraph, node: &'a EndpointNode) -> Self {
        Self { graph, node }
    }
}

impl Renderable for Endpoint<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        Namespace::single(self.graph, self.node.namespace(), &self.node.class).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use mirage_codegen::builder::CodeBuilder;
    use mirage_ir::{
        ClassKind, ClassNode, MethodNode, ParameterNode, PropertyNode, PropertyVariant,
        Statement, TypeNode,
    };

    use super::*;

    #[test]
    fn test_endpoint_block() {
        let mut graph = ProjectionGraph::new();
        let base = graph.insert(
            "Services.EndpointBase",
            ClassNode::external("Services.EndpointBase"),
        );
        let items = graph.insert(
            "App.Api.ItemsController",
            ClassNode::new("App.Api.ItemsController", ClassKind::WebService),
        );

        let mut class = ClassNode::new("App.Endpoint", ClassKind::Default);
        class.parent = base;
        class.properties.push(PropertyNode::new(
            "items",
            TypeNode::class_ref(items, "App.Api.ItemsController", None),
            PropertyVariant::Simple,
        ));
        class.constructors.push(
            MethodNode::constructor(vec![ParameterNode::new("proxy", TypeNode::any())]).with_body(
                vec![
                    Statement::SuperCall { args: vec![] },
                    Statement::Construct {
                        property: "items".into(),
                        type_name: "App.Api.ItemsController".into(),
                        args: vec!["proxy".into()],
                    },
                ],
            ),
        );
        let endpoint = EndpointNode {
            class,
            services: vec![items],
        };

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Endpoint::new(&graph, &endpoint));
        assert_eq!(
            builder.build(),
            "namespace App {\n\
             \x20 export class Endpoint extends Services.EndpointBase {\n\
             \x20   constructor(proxy: any) {\n\
             \x20     super();\n\
             \x20     this.items = new App.Api.ItemsController(proxy);\n\
             \x20   }\n\
             \n\
             \x20   items: App.Api.ItemsController;\n\
             \n\
             \x20   static TypeDescriptor: Type = { Name: 'Endpoint', FullName: 'App.Endpoint', Parent: 'Services.EndpointBase' };\n\
             \x20 }\n\
             }\n"
        );
    }
}
