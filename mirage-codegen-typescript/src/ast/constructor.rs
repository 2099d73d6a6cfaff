//! Constructors.

use mirage_codegen::builder::{CodeFragment, Renderable};
use mirage_ir::MethodNode;

use super::{
    method::{body_block, method_doc},
    param::param_list,
};

#[derive(Debug, Clone, Copy)]
pub struct Constructor<'a> {
    node: &'a MethodNode,
}

impl<'a> Constructor<'a> {
    pub fn new(node: &'a MethodNode) -> Self {
        Self { node }
    }
}

impl Renderable for Constructor<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("constructor({})", param_list(&self.node.params));
        let mut fragments: Vec<CodeFragment> = method_doc(self.node).into_iter().collect();
        fragments.push(body_block(header, self.node));
        fragments
    }
}
