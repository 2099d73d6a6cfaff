//! The declarations file.

use std::path::{Path, PathBuf};

use mirage_codegen::ProjectionOptions;
use mirage_core::{FileRules, GeneratedFile};
use mirage_ir::ProjectionGraph;
use tracing::debug;

use crate::{
    ast::{Endpoint, Namespace, Prelude},
    code_file::CodeFile,
};

/// Every generated namespace, followed by the endpoint block. Always overwritten.
pub struct DeclarationsTs<'a> {
    graph: &'a ProjectionGraph,
    options: &'a ProjectionOptions,
    source: &'a str,
}

impl<'a> DeclarationsTs<'a> {
    pub fn new(graph: &'a ProjectionGraph, options: &'a ProjectionOptions, source: &'a str) -> Self {
        Self {
            graph,
            options,
            source,
        }
    }
}

impl GeneratedFile for DeclarationsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.options.output)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let mut file = CodeFile::new()
            .header(format!("Generated by mirage from {}.", self.source))
            .header("Changes to this file are overwritten on the next run.");
        if self.options.prelude {
            file = file.add(Prelude);
        }

        for namespace in self.graph.namespaces() {
            let block = Namespace::new(self.graph, namespace);
            if block.is_empty() {
                continue;
            }
            debug!(namespace = %namespace.qualified_name, "rendering namespace");
            file = file.add(block);
        }

        if let Some(endpoint) = self.graph.endpoint() {
            debug!(endpoint = %endpoint.class.qualified_name, "rendering endpoint");
            file = file.add(Endpoint::new(self.graph, endpoint));
        }
        file.render()
    }
}
