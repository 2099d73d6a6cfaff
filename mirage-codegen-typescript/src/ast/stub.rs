//! Hand-authored subclass stubs.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::{ClassNode, NamespaceNode, ProjectionGraph};

use super::class::type_params;

/// Check if a node is rendered under its `Base` name and needs a stub.
pub fn needs_stub(node: &ClassNode) -> bool {
    node.is_rendered() && !node.is_enum() && node.needs_base_layer()
}

/// `export class Name extends NameBase {}` for a class rendered under its `Base` name.
#[derive(Debug, Clone, Copy)]
pub struct Stub<'a> {
    node: &'a ClassNode,
    exported: bool,
}

impl<'a> Stub<'a> {
    pub fn new(node: &'a ClassNode) -> Self {
        Self {
            node,
            exported: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for Stub<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params = type_params(&self.node.type_params);
        let keyword = if self.node.is_definition_only() {
            "interface"
        } else {
            "class"
        };
        vec![CodeFragment::line(format!(
            "{}{} {}{} extends {}{} {{}}",
            if self.exported { "export " } else { "" },
            keyword,
            self.node.name,
            params,
            self.node.declared_name(),
            params
        ))]
    }
}

/// The stubs of one namespace.
#[derive(Debug, Clone)]
pub struct StubBlock<'a> {
    qualified_name: &'a str,
    classes: Vec<&'a ClassNode>,
}

impl<'a> StubBlock<'a> {
    pub fn new(graph: &'a ProjectionGraph, namespace: &'a NamespaceNode) -> Self {
        Self {
            qualified_name: &namespace.qualified_name,
            classes: graph
                .namespace_classes(namespace)
                .map(|(_, node)| node)
                .filter(|node| needs_stub(node))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Renderable for StubBlock<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.qualified_name.is_empty() {
            return self
                .classes
                .iter()
                .flat_map(|node| Stub::new(node).private().to_fragments())
                .collect();
        }
        vec![CodeFragment::braced(
            format!("namespace {} {{", self.qualified_name),
            self.classes
                .iter()
                .flat_map(|node| Stub::new(node).to_fragments())
                .collect(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use mirage_codegen::builder::CodeBuilder;
    use mirage_ir::ClassKind;

    use super::*;

    fn render(stub: Stub<'_>) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&stub);
        builder.build()
    }

    #[test]
    fn test_stub_extends_base_layer() {
        let mut node = ClassNode::new("App.Shell", ClassKind::ViewModel);
        node.flags.is_base_layer = true;
        assert_eq!(
            render(Stub::new(&node)),
            "export class Shell extends ShellBase {}\n"
        );
    }

    #[test]
    fn test_interface_stub() {
        let mut node = ClassNode::new("App.INamed", ClassKind::Interface);
        node.flags.is_base_layer = true;
        assert_eq!(
            render(Stub::new(&node)),
            "export interface INamed extends INamedBase {}\n"
        );
    }

    #[test]
    fn test_stub_block_skips_complete_classes() {
        let mut graph = ProjectionGraph::new();
        let mut shell = ClassNode::new("App.Shell", ClassKind::ViewModel);
        shell.flags.is_base_layer = true;
        let shell = graph.insert("App.Shell", shell);
        let person = graph.insert("App.Person", ClassNode::new("App.Person", ClassKind::Class));
        graph.register(shell);
        graph.register(person);

        let block = StubBlock::new(&graph, graph.namespace("App").unwrap());
        assert!(!block.is_empty());
        let mut builder = CodeBuilder::typescript();
        builder.emit(&block);
        assert_eq!(
            builder.build(),
            "namespace App {\n  export class Shell extends ShellBase {}\n}\n"
        );
    }

    #[test]
    fn test_generic_stub() {
        let mut node = ClassNode::new("Page", ClassKind::Class);
        node.flags.generate_template = true;
        node.type_params = vec!["T".into()];
        assert_eq!(
            render(Stub::new(&node).private()),
            "class Page<T> extends PageBase<T> {}\n"
        );
    }
}
