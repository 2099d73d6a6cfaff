//! Lint trait for metadata validation.

use mirage_metadata::Metadata;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the metadata for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the metadata and add any diagnostics.
    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
