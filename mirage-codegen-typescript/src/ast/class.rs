//! Class declarations.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::{ClassId, ClassNode, ProjectionGraph};

use super::{constructor::Constructor, method::Method, property::Property};

/// A generated class with its members and trailing type descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Class<'a> {
    graph: &'a ProjectionGraph,
    node: &'a ClassNode,
    exported: bool,
}

impl<'a> Class<'a> {
    pub fn new(graph: &'a ProjectionGraph, node: &'a ClassNode) -> Self {
        Self {
            graph,
            node,
            exported: true,
        }
    }

    /// Render without `export` (classes in the global namespace).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn parent(&self) -> Option<String> {
        if self.node.parent == ClassId::OBJECT {
            return None;
        }
        let parent = &self.graph.get(self.node.parent).qualified_name;
        if self.node.parent_args.is_empty() {
            Some(parent.clone())
        } else {
            Some(format!("{}<{}>", parent, join_types(&self.node.parent_args)))
        }
    }

    fn header(&self) -> String {
        let mut header = format!(
            "{}class {}{}",
            if self.exported { "export " } else { "" },
            self.node.declared_name(),
            type_params(&self.node.type_params)
        );
        if let Some(parent) = self.parent() {
            header.push_str(" extends ");
            header.push_str(&parent);
        }
        let interfaces = interface_names(self.graph, &self.node.interfaces);
        if !interfaces.is_empty() {
            header.push_str(" implements ");
            header.push_str(&interfaces);
        }
        header.push_str(" {");
        header
    }

    /// `static TypeDescriptor: Type = { Name: 'N', FullName: 'A.N', Parent: 'A.P' };`
    fn type_descriptor(&self) -> CodeFragment {
        CodeFragment::line(format!(
            "static TypeDescriptor: Type = {{ Name: '{}', FullName: '{}', Parent: '{}' }};",
            self.node.name,
            self.node.qualified_name,
            self.graph.get(self.node.parent).qualified_name
        ))
    }

    fn body(&self, owner: &str) -> Vec<CodeFragment> {
        let mut groups: Vec<Vec<CodeFragment>> = Vec::new();
        for ctor in &self.node.constructors {
            groups.push(Constructor::new(ctor).to_fragments());
        }
        let properties: Vec<CodeFragment> = self
            .node
            .properties
            .iter()
            .flat_map(|p| Property::new(p, owner).to_fragments())
            .collect();
        if !properties.is_empty() {
            groups.push(properties);
        }
        for method in &self.node.methods {
            groups.push(Method::new(method).to_fragments());
        }
        groups.push(vec![self.type_descriptor()]);
        separate(groups)
    }
}

impl Renderable for Class<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let owner = self.node.declared_name();
        let mut fragments = Vec::new();
        if let Some(doc) = &self.node.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }
        fragments.push(CodeFragment::braced(self.header(), self.body(&owner)));
        fragments.extend(
            self.node
                .properties
                .iter()
                .flat_map(|p| Property::new(p, &owner).prototype_fragments()),
        );
        fragments
    }
}

/// `<T, U>`, or nothing.
pub(crate) fn type_params(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}

pub(crate) fn interface_names(graph: &ProjectionGraph, ids: &[ClassId]) -> String {
    ids.iter()
        .map(|&id| graph.get(id).qualified_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_types(types: &[mirage_ir::TypeNode]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Flatten member groups with a blank line between groups.
pub(crate) fn separate(groups: Vec<Vec<CodeFragment>>) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();
    for (i, group) in groups.into_iter().enumerate() {
        if i > 0 {
            fragments.push(CodeFragment::blank());
        }
        fragments.extend(group);
    }
    fragments
}

#[cfg(test)]
mod tests {
    use mirage_codegen::builder::CodeBuilder;
    use mirage_ir::{
        Builtin, ClassKind, MethodNode, MethodShape, PropertyNode, PropertyVariant, Statement,
        TypeNode,
    };

    use super::*;

    fn render(class: Class<'_>) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&class);
        builder.build()
    }

    fn person() -> ClassNode {
        let mut node = ClassNode::new("App.Person", ClassKind::Class);
        node.properties = vec![
            PropertyNode::new("Name", TypeNode::builtin(Builtin::String), PropertyVariant::Simple)
                .with_default(Some("''".into())),
            PropertyNode::new("Age", TypeNode::builtin(Builtin::Number), PropertyVariant::Simple)
                .with_default(Some("0".into())),
        ];
        node.constructors = vec![MethodNode::constructor(vec![])];
        node
    }

    #[test]
    fn test_data_class() {
        let graph = ProjectionGraph::new();
        let node = person();
        assert_eq!(
            render(Class::new(&graph, &node)),
            "export class Person {\n\
             \x20 constructor() {}\n\
             \n\
             \x20 Name: string = '';\n\
             \x20 Age: number = 0;\n\
             \n\
             \x20 static TypeDescriptor: Type = { Name: 'Person', FullName: 'App.Person', Parent: 'Object' };\n\
             }\n"
        );
    }

    #[test]
    fn test_parent_and_interfaces() {
        let mut graph = ProjectionGraph::new();
        let entity = graph.insert("App.Entity", ClassNode::new("App.Entity", ClassKind::Class));
        let named = graph.insert("App.INamed", ClassNode::new("App.INamed", ClassKind::Interface));
        let mut node = person();
        node.parent = entity;
        node.interfaces = vec![named];

        let code = render(Class::new(&graph, &node));
        assert!(code.starts_with("export class Person extends App.Entity implements App.INamed {"));
        assert!(code.contains("Parent: 'App.Entity'"));
    }

    #[test]
    fn test_generic_parent_and_type_params() {
        let mut graph = ProjectionGraph::new();
        let page = graph.insert("App.Page", ClassNode::new("App.Page", ClassKind::Class));
        let mut node = ClassNode::new("App.Results", ClassKind::Class);
        node.type_params = vec!["T".into()];
        node.parent = page;
        node.parent_args = vec![TypeNode::builtin(Builtin::String)];

        let code = render(Class::new(&graph, &node));
        assert!(code.starts_with("export class Results<T> extends App.Page<string> {"));
    }

    #[test]
    fn test_base_layer_name_and_stub_body() {
        let graph = ProjectionGraph::new();
        let mut node = person();
        node.methods.push(
            MethodNode::new("save", MethodShape::VirtualStub, TypeNode::void()).with_body(vec![
                Statement::Throw {
                    message: "Method save not implemented".into(),
                },
            ]),
        );
        let code = render(Class::new(&graph, &node));
        assert!(code.starts_with("export class PersonBase {"));
        assert!(code.contains("  save(): void {\n    throw new Error(\"Method save not implemented\");\n  }\n"));
    }

    #[test]
    fn test_attached_prototype_follows_class() {
        let graph = ProjectionGraph::new();
        let mut node = person();
        node.properties.push(
            PropertyNode::new("Count", TypeNode::builtin(Builtin::Number), PropertyVariant::Attached)
                .with_default(Some("0".into())),
        );
        let code = render(Class::new(&graph, &node).private());
        assert!(code.starts_with("class Person {"));
        assert!(code.contains("  declare Count: number;\n"));
        assert!(code.ends_with("}\nPerson.prototype.Count = 0;\n"));
    }
}
