//! Property declarations in all their variants.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::{PropertyNode, PropertyVariant};

/// A class or interface member backed by a [`PropertyNode`].
#[derive(Debug, Clone, Copy)]
pub struct Property<'a> {
    node: &'a PropertyNode,
    /// Declared name of the owning class, for prototype assignments.
    owner: &'a str,
    signature_only: bool,
}

impl<'a> Property<'a> {
    pub fn new(node: &'a PropertyNode, owner: &'a str) -> Self {
        Self {
            node,
            owner,
            signature_only: false,
        }
    }

    /// Render as an interface member: `N: T;`.
    pub fn signature_only(mut self) -> Self {
        self.signature_only = true;
        self
    }

    fn name(&self) -> &str {
        &self.node.name
    }

    fn ty(&self) -> String {
        self.node.ty.to_string()
    }

    fn store(&self) -> String {
        format!("this.${}", self.name())
    }

    fn getter(&self) -> CodeFragment {
        CodeFragment::line(format!(
            "get {}(): {} {{ return {}(); }}",
            self.name(),
            self.ty(),
            self.store()
        ))
    }

    fn setter(&self) -> CodeFragment {
        CodeFragment::line(format!(
            "set {}(value: {}) {{ {}(value); }}",
            self.name(),
            self.ty(),
            self.store()
        ))
    }

    fn not_implemented(&self) -> String {
        format!("throw new Error(\"Not implemented: {}\");", self.name())
    }

    fn field(&self) -> String {
        match &self.node.default {
            Some(default) => format!("{}: {} = {};", self.name(), self.ty(), default),
            None => format!("{}: {};", self.name(), self.ty()),
        }
    }

    fn observable(&self, factory: &str, type_arg: String) -> Vec<CodeFragment> {
        let init = self.node.default.as_deref().unwrap_or_default();
        vec![
            CodeFragment::line(format!(
                "protected ${} = ko.{}<{}>({});",
                self.name(),
                factory,
                type_arg,
                init
            )),
            self.getter(),
            self.setter(),
        ]
    }

    /// The store reads every tracked input, then defers to `evaluate<Name>()`.
    fn dependent(&self) -> Vec<CodeFragment> {
        let evaluate = format!("evaluate{}", self.name());
        let mut read: Vec<CodeFragment> = self
            .node
            .dependencies
            .iter()
            .map(|dep| CodeFragment::line(format!("this.{};", dep)))
            .collect();
        read.push(CodeFragment::line(format!("return this.{}();", evaluate)));

        let store = if self.node.defer_evaluation {
            CodeFragment::block(
                format!("protected ${} = ko.computed<{}>({{", self.name(), self.ty()),
                vec![
                    CodeFragment::block("read: () => {", read, Some("},".to_string())),
                    CodeFragment::line("deferEvaluation: true,"),
                ],
                Some("});".to_string()),
            )
        } else {
            CodeFragment::block(
                format!("protected ${} = ko.pureComputed<{}>(() => {{", self.name(), self.ty()),
                read,
                Some("});".to_string()),
            )
        };

        vec![
            store,
            self.getter(),
            CodeFragment::line(format!(
                "protected {}(): {} {{ throw new Error(\"Not implemented: {}\"); }}",
                evaluate,
                self.ty(),
                evaluate
            )),
        ]
    }

    /// Lines emitted after the owning class: `Owner.prototype.N = d;`.
    pub fn prototype_fragments(&self) -> Vec<CodeFragment> {
        match (&self.node.variant, &self.node.default) {
            (PropertyVariant::Attached, Some(default)) => vec![CodeFragment::line(format!(
                "{}.prototype.{} = {};",
                self.owner,
                self.name(),
                default
            ))],
            _ => Vec::new(),
        }
    }
}

impl Renderable for Property<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.node.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }

        if self.signature_only {
            fragments.push(CodeFragment::line(format!("{}: {};", self.name(), self.ty())));
            return fragments;
        }

        match self.node.variant {
            PropertyVariant::Simple => fragments.push(CodeFragment::line(self.field())),
            PropertyVariant::Static | PropertyVariant::Constant => {
                fragments.push(CodeFragment::line(format!("static {}", self.field())))
            }
            PropertyVariant::ReadOnly => fragments.push(CodeFragment::line(format!(
                "get {}(): {} {{ {} }}",
                self.name(),
                self.ty(),
                self.not_implemented()
            ))),
            PropertyVariant::WriteOnly => fragments.push(CodeFragment::line(format!(
                "set {}(value: {}) {{ {} }}",
                self.name(),
                self.ty(),
                self.not_implemented()
            ))),
            PropertyVariant::Inline => {
                fragments.push(CodeFragment::line(inline_declaration(self.node)))
            }
            PropertyVariant::Assignment => {
                fragments.push(CodeFragment::line(assignment(self.node)))
            }
            PropertyVariant::Observable => {
                fragments.extend(self.observable("observable", self.ty()))
            }
            PropertyVariant::ObservableCollection => {
                let element = self
                    .node
                    .ty
                    .element()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "any".to_string());
                fragments.extend(self.observable("observableArray", element))
            }
            PropertyVariant::Dependent => fragments.extend(self.dependent()),
            PropertyVariant::Attached => {
                fragments.push(CodeFragment::line(format!(
                    "declare {}: {};",
                    self.name(),
                    self.ty()
                )))
            }
        }
        fragments
    }
}

/// `n: T = d`, `n?: T` or `n: T`.
pub fn inline_declaration(node: &PropertyNode) -> String {
    if node.optional {
        return format!("{}?: {}", node.name, node.ty);
    }
    match &node.default {
        Some(default) => format!("{}: {} = {}", node.name, node.ty, default),
        None => format!("{}: {}", node.name, node.ty),
    }
}

/// An object-literal member: `n: v`, or the shorthand `n`.
pub fn assignment(node: &PropertyNode) -> String {
    match &node.default {
        Some(value) if !node.is_shorthand() => format!("{}: {}", node.name, value),
        _ => node.name.clone(),
    }
}

/// An object literal: `{}`, `{id}` or `{id, kind: _kind}`.
pub fn object_literal(members: &[PropertyNode]) -> String {
    let members: Vec<String> = members.iter().map(assignment).collect();
    format!("{{{}}}", members.join(", "))
}

#[cfg(test)]
mod tests {
    use mirage_codegen::builder::CodeBuilder;
    use mirage_ir::{Builtin, TypeNode};

    use super::*;

    fn render(property: Property<'_>) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&property);
        builder.build()
    }

    fn node(name: &str, builtin: Builtin, variant: PropertyVariant) -> PropertyNode {
        PropertyNode::new(name, TypeNode::builtin(builtin), variant)
    }

    #[test]
    fn test_simple_with_default() {
        let p = node("Name", Builtin::String, PropertyVariant::Simple).with_default(Some("''".into()));
        assert_eq!(render(Property::new(&p, "Person")), "Name: string = '';\n");
    }

    #[test]
    fn test_simple_without_default() {
        let p = node("Age", Builtin::Number, PropertyVariant::Simple);
        assert_eq!(render(Property::new(&p, "Person")), "Age: number;\n");
    }

    #[test]
    fn test_constant_is_static() {
        let p = node("MaxAge", Builtin::Number, PropertyVariant::Constant)
            .with_default(Some("120".into()));
        assert_eq!(render(Property::new(&p, "Person")), "static MaxAge: number = 120;\n");
    }

    #[test]
    fn test_read_only_getter_throws() {
        let p = node("Id", Builtin::Number, PropertyVariant::ReadOnly);
        let code = render(Property::new(&p, "Person"));
        assert_eq!(
            code,
            "get Id(): number { throw new Error(\"Not implemented: Id\"); }\n"
        );
        assert!(!code.contains("set "));
    }

    #[test]
    fn test_write_only_has_no_getter() {
        let p = node("Secret", Builtin::String, PropertyVariant::WriteOnly);
        let code = render(Property::new(&p, "Person"));
        assert!(code.starts_with("set Secret(value: string)"));
        assert!(!code.contains("get "));
    }

    #[test]
    fn test_observable_accessors() {
        let p = node("Title", Builtin::String, PropertyVariant::Observable)
            .with_default(Some("''".into()));
        assert_eq!(
            render(Property::new(&p, "Shell")),
            "protected $Title = ko.observable<string>('');\n\
             get Title(): string { return this.$Title(); }\n\
             set Title(value: string) { this.$Title(value); }\n"
        );
    }

    #[test]
    fn test_observable_collection_uses_element_type() {
        let p = PropertyNode::new(
            "Tags",
            TypeNode::array(TypeNode::builtin(Builtin::String)),
            PropertyVariant::ObservableCollection,
        )
        .with_default(Some("[]".into()));
        let code = render(Property::new(&p, "Shell"));
        assert!(code.contains("protected $Tags = ko.observableArray<string>([]);"));
        assert!(code.contains("get Tags(): Array<string> { return this.$Tags(); }"));
    }

    #[test]
    fn test_dependent_reads_inputs() {
        let mut p = node("FullName", Builtin::String, PropertyVariant::Dependent);
        p.dependencies = vec!["First".into(), "Last".into()];
        assert_eq!(
            render(Property::new(&p, "Shell")),
            "protected $FullName = ko.pureComputed<string>(() => {\n\
             \x20 this.First;\n\
             \x20 this.Last;\n\
             \x20 return this.evaluateFullName();\n\
             });\n\
             get FullName(): string { return this.$FullName(); }\n\
             protected evaluateFullName(): string { throw new Error(\"Not implemented: evaluateFullName\"); }\n"
        );
    }

    #[test]
    fn test_deferred_dependent() {
        let mut p = node("Total", Builtin::Number, PropertyVariant::Dependent);
        p.defer_evaluation = true;
        let code = render(Property::new(&p, "Cart"));
        assert!(code.contains("protected $Total = ko.computed<number>({\n  read: () => {\n    return this.evaluateTotal();\n  },\n  deferEvaluation: true,\n});"));
    }

    #[test]
    fn test_attached_is_declared_and_prototyped() {
        let p = node("Count", Builtin::Number, PropertyVariant::Attached).with_default(Some("0".into()));
        let property = Property::new(&p, "Person");
        assert_eq!(render(property), "declare Count: number;\n");
        assert_eq!(
            property.prototype_fragments(),
            vec![CodeFragment::line("Person.prototype.Count = 0;")]
        );
    }

    #[test]
    fn test_signature_only() {
        let p = node("Name", Builtin::String, PropertyVariant::Simple);
        assert_eq!(render(Property::new(&p, "INamed").signature_only()), "Name: string;\n");
    }

    #[test]
    fn test_object_literal() {
        assert_eq!(object_literal(&[]), "{}");
        let members = vec![
            PropertyNode::assignment("id", "id"),
            PropertyNode::assignment("delete", "_delete"),
        ];
        assert_eq!(object_literal(&members), "{id, delete: _delete}");
    }

    #[test]
    fn test_doc_precedes_member() {
        let mut p = node("Name", Builtin::String, PropertyVariant::Simple);
        p.doc = Some("The display name.".into());
        assert_eq!(
            render(Property::new(&p, "Person")),
            "/** The display name. */\nName: string;\n"
        );
    }
}
