//! Namespace blocks.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::{ClassNode, NamespaceNode, ProjectionGraph};

use super::{class::Class, enumeration::Enum, interface::Interface};

/// A namespace and the declarations registered in it.
///
/// The global namespace renders its declarations unwrapped and unexported.
#[derive(Debug, Clone)]
pub struct Namespace<'a> {
    graph: &'a ProjectionGraph,
    qualified_name: &'a str,
    classes: Vec<&'a ClassNode>,
}

impl<'a> Namespace<'a> {
    pub fn new(graph: &'a ProjectionGraph, namespace: &'a NamespaceNode) -> Self {
        Self {
            graph,
            qualified_name: &namespace.qualified_name,
            classes: graph
                .namespace_classes(namespace)
                .map(|(_, node)| node)
                .collect(),
        }
    }

    /// A namespace holding a single synthesized class.
    pub fn single(graph: &'a ProjectionGraph, qualified_name: &'a str, class: &'a ClassNode) -> Self {
        Self {
            graph,
            qualified_name,
            classes: vec![class],
        }
    }

    pub fn is_global(&self) -> bool {
        self.qualified_name.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn declarations(&self) -> Vec<CodeFragment> {
        let exported = !self.is_global();
        let mut fragments = Vec::new();
        for (i, node) in self.classes.iter().enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::blank());
            }
            fragments.extend(declaration(self.graph, node, exported));
        }
        fragments
    }
}

impl Renderable for Namespace<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_global() {
            return self.declarations();
        }
        vec![CodeFragment::braced(
            format!("namespace {} {{", self.qualified_name),
            self.declarations(),
        )]
    }
}

/// Dispatch a node to its declaration kind.
pub fn declaration(graph: &ProjectionGraph, node: &ClassNode, exported: bool) -> Vec<CodeFragment> {
    if node.is_enum() {
        let decl = Enum::new(node);
        return (if exported { decl } else { decl.private() }).to_fragments();
    }
    if node.is_definition_only() {
        let decl = Interface::new(graph, node);
        return (if exported { decl } else { decl.private() }).to_fragments();
    }
    let decl = Class::new(graph, node);
    (if exported { decl } else { decl.private() }).to_fragments()
}
