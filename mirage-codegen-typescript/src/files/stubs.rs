//! The subclass stubs file.

use std::path::{Path, PathBuf};

use mirage_core::{FileRules, GeneratedFile};
use mirage_ir::ProjectionGraph;

use crate::{ast::StubBlock, code_file::CodeFile};

/// One subclass per `Base`-named class, written once and then left to its authors.
pub struct StubsTs<'a> {
    graph: &'a ProjectionGraph,
    path: &'a Path,
}

impl<'a> StubsTs<'a> {
    pub fn new(graph: &'a ProjectionGraph, path: &'a Path) -> Self {
        Self { graph, path }
    }
}

impl GeneratedFile for StubsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        let blocks = self
            .graph
            .namespaces()
            .map(|ns| StubBlock::new(self.graph, ns))
            .filter(|block| !block.is_empty());
        CodeFile::new()
            .header("Hand-authored subclasses of the generated declarations.")
            .add_all(blocks)
            .render()
    }
}
