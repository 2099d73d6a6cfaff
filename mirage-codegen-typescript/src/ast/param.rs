//! Parameter lists.

use mirage_codegen::language::TYPESCRIPT;
use mirage_ir::ParameterNode;

use super::property::inline_declaration;

/// A method or constructor parameter.
///
/// Reserved words are escaped (`delete` -> `_delete`) wherever the parameter
/// is bound or read.
#[derive(Debug, Clone, Copy)]
pub struct Param<'a> {
    node: &'a ParameterNode,
}

impl<'a> Param<'a> {
    pub fn new(node: &'a ParameterNode) -> Self {
        Self { node }
    }

    /// The binding name.
    pub fn binding(&self) -> String {
        binding(&self.node.name)
    }

    /// `name: T`, `name?: T` or `name: T = d`.
    pub fn declaration(&self) -> String {
        let mut inline = self.node.to_inline();
        inline.name = self.binding();
        inline_declaration(&inline)
    }
}

/// The binding name of a parameter.
pub fn binding(name: &str) -> String {
    TYPESCRIPT.safe_name(name)
}

/// Render a comma-separated parameter list.
pub fn param_list(params: &[ParameterNode]) -> String {
    params
        .iter()
        .map(|p| Param::new(p).declaration())
        .collect::<Vec<_>>()
        .join(", ")
}
