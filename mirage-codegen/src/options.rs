//! Options shared by the engine and the generators.

use std::path::PathBuf;

use mirage_metadata::Metadata;

/// Resolved output options: the metadata `[output]` table with command-line overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Declarations file.
    pub output: PathBuf,
    /// Subclass stubs file.
    pub stubs: Option<PathBuf>,
    /// Attach documentation to generated nodes and render it as JSDoc.
    pub comments: bool,
    /// Emit the prelude of runtime helper types.
    pub prelude: bool,
}

impl ProjectionOptions {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            output: metadata.output_path(),
            stubs: metadata.output.stubs.clone(),
            comments: metadata.output.comments,
            prelude: metadata.output.prelude,
        }
    }
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("out.ts"),
            stubs: None,
            comments: false,
            prelude: true,
        }
    }
}
