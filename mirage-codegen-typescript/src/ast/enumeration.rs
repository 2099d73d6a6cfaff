//! Enum declarations.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::ClassNode;

/// `export enum N { A = 0, ... }`. Enums carry no type descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Enum<'a> {
    node: &'a ClassNode,
    exported: bool,
}

impl<'a> Enum<'a> {
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

impl Renderable for Enum<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.node.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }
        let header = format!(
            "{}enum {}",
            if self.exported { "export " } else { "" },
            self.node.name
        );
        if self.node.members.is_empty() {
            fragments.push(CodeFragment::line(format!("{} {{}}", header)));
        } else {
            fragments.push(CodeFragment::braced(
                format!("{} {{", header),
                self.node
                    .members
                    .iter()
                    .map(|m| CodeFragment::line(format!("{} = {},", m.name, m.value)))
                    .collect(),
            ));
        }
        fragments
    }
}
