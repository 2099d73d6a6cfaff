//! Methods in every call shape.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::{MethodNode, MethodShape};

use super::{
    param::{binding, param_list},
    statement::statement,
};

/// A class or interface method backed by a [`MethodNode`].
#[derive(Debug, Clone, Copy)]
pub struct Method<'a> {
    node: &'a MethodNode,
}

impl<'a> Method<'a> {
    pub fn new(node: &'a MethodNode) -> Self {
        Self { node }
    }

    fn signature(&self) -> String {
        format!(
            "{}({}): {}",
            self.node.name,
            param_list(&self.node.params),
            self.node.returns
        )
    }
}

impl Renderable for Method<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = method_doc(self.node) {
            fragments.push(doc);
        }

        let node = self.node;
        if node.shape == MethodShape::SocketClientCall && node.is_event {
            fragments.push(CodeFragment::line(format!(
                "{} = new Services.Event();",
                node.name
            )));
        } else if node.signature_only {
            fragments.push(CodeFragment::line(format!("{};", self.signature())));
        } else {
            fragments.push(body_block(self.signature(), node));
        }
        fragments
    }
}

/// `header {` body `}`, collapsed to `header {}` when the body is empty.
pub(crate) fn body_block(header: String, node: &MethodNode) -> CodeFragment {
    if node.body.is_empty() {
        CodeFragment::line(format!("{} {{}}", header))
    } else {
        CodeFragment::braced(
            format!("{} {{", header),
            node.body.iter().map(statement).collect(),
        )
    }
}

/// JSDoc with the method summary and a `@param` tag per documented parameter.
pub(crate) fn method_doc(node: &MethodNode) -> Option<CodeFragment> {
    let mut lines: Vec<String> = node
        .doc
        .as_deref()
        .map(|doc| doc.lines().map(str::to_string).collect())
        .unwrap_or_default();

    let tags: Vec<String> = node
        .params
        .iter()
        .filter_map(|p| {
            p.doc
                .as_ref()
                .map(|doc| format!("@param {} {}", binding(&p.name), doc))
        })
        .collect();
    if !tags.is_empty() && !lines.is_empty() {
        lines.push(String::new());
    }
    lines.extend(tags);

    if lines.is_empty() {
        None
    } else {
        Some(CodeFragment::jsdoc_lines(lines))
    }
}
