//! Test utilities for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command, str::FromStr};

use eyre::Result;
use mirage_ir::ProjectionGraph;
use mirage_metadata::Metadata;

use crate::{ProjectionOptions, pipeline::Pipeline};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code type-checks.
pub trait CompileChecker {
    /// Check the project in the given directory.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// TypeScript checker using `tsc --noEmit` against the directory's `tsconfig.json`.
pub struct TypeScriptChecker;

impl CompileChecker for TypeScriptChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("npx")
            .args(["tsc", "--noEmit"])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run tsc: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "tsc --noEmit failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Parse metadata from an inline TOML string.
///
/// # Panics
///
/// Panics if the metadata is invalid.
pub fn parse_metadata(content: &str) -> Metadata {
    Metadata::from_str(content).expect("Failed to parse test metadata")
}

/// Run the default pipeline and return the finished graph.
///
/// # Panics
///
/// Panics if the pipeline fails.
pub fn project(content: &str) -> ProjectionGraph {
    let metadata = parse_metadata(content);
    let options = ProjectionOptions::from_metadata(&metadata);
    let mut ctx = Pipeline::new()
        .run(metadata, options)
        .expect("pipeline should succeed");
    ctx.take_graph().expect("graph should be built")
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_runs_all_phases() {
        let graph = project(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.ItemsController"
            markers = ["js-service"]
            methods = [{ name = "List", route = "items" }]
            "#,
        );
        assert!(graph.lookup("Contoso.ItemsController").is_some());
        assert!(graph.endpoint().is_some());
    }

    #[test]
    fn test_assert_content_eq_matches() {
        assert_content_eq("a\nb", "a\nb");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb", "a\nc");
    }

    #[test]
    fn test_generate_to_temp() {
        let dir = generate_to_temp(|path| {
            std::fs::write(path.join("out.ts"), "export {};")?;
            Ok(())
        })
        .unwrap();
        assert!(dir.path().join("out.ts").exists());
    }
}
