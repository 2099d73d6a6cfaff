//! Interface declarations for definition-only classes.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::{ClassNode, ProjectionGraph};

use super::{
    class::{interface_names, separate, type_params},
    method::Method,
    property::Property,
};

/// A projected host interface: member signatures only, no type descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Interface<'a> {
    graph: &'a ProjectionGraph,
    node: &'a ClassNode,
    exported: bool,
}

impl<'a> Interface<'a> {
    pub fn new(graph: &'a ProjectionGraph, node: &'a ClassNode) -> Self {
        Self {
            graph,
            node,
            exported: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn header(&self) -> String {
        let mut header = format!(
            "{}interface {}{}",
            if self.exported { "export " } else { "" },
            self.node.declared_name(),
            type_params(&self.node.type_params)
        );
        let extends = interface_names(self.graph, &self.node.interfaces);
        if !extends.is_empty() {
            header.push_str(" extends ");
            header.push_str(&extends);
        }
        header
    }
}

impl Renderable for Interface<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.node.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }

        let name = self.node.declared_name();
        let properties: Vec<CodeFragment> = self
            .node
            .properties
            .iter()
            .flat_map(|p| Property::new(p, &name).signature_only().to_fragments())
            .collect();
        let methods: Vec<CodeFragment> = self
            .node
            .methods
            .iter()
            .flat_map(|m| Method::new(m).to_fragments())
            .collect();

        let groups: Vec<Vec<CodeFragment>> = [properties, methods]
            .into_iter()
            .filter(|g| !g.is_empty())
            .collect();
        if groups.is_empty() {
            fragments.push(CodeFragment::line(format!("{} {{}}", self.header())));
        } else {
            fragments.push(CodeFragment::braced(
                format!("{} {{", self.header()),
                separate(groups),
            ));
        }
        fragments
    }
}
