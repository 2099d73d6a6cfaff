//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for target language generators.
///
/// A generator renders one projection graph into one or more files.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write all files, resolving relative output paths against `root`
    fn generate(&self, root: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already exist (hand-authored stubs)
    pub skipped: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Output path as configured
    pub path: String,
    /// File content
    pub content: String,
}
