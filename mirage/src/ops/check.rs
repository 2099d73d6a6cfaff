//! Check operation - metadata validation.

use std::path::Path;

use eyre::{Context, Result};
use mirage_codegen::{
    ProjectionOptions,
    pipeline::{Diagnostic, Pipeline, Severity},
};
use mirage_metadata::Metadata;

use super::summarize;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the lints; when none of them reports an error, runs the whole
/// pipeline too so that graph-building diagnostics and a summary are included.
pub fn check(metadata: Metadata, config_path: &Path) -> Result<CheckReport> {
    let options = ProjectionOptions::from_metadata(&metadata);
    let pipeline = Pipeline::new();

    let linted = pipeline.check(metadata.clone(), options.clone());
    let (diagnostics, summary) = if linted.has_errors() {
        (linted.diagnostics, None)
    } else {
        let ctx = pipeline
            .run(metadata, options)
            .wrap_err("Validation failed")?;
        let summary = summarize(ctx.graph()?);
        (ctx.diagnostics, Some(summary))
    };

    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
        summary,
    };
    for diag in &diagnostics {
        let msg = message(diag);
        match diag.severity {
            Severity::Error => report.errors.push(msg),
            Severity::Warning => report.warnings.push(msg),
            Severity::Info => report.infos.push(msg),
        }
    }
    Ok(report)
}

fn message(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("[{}] {}\n  --> {}", diag.phase, diag.message, loc),
        None => format!("[{}] {}", diag.phase, diag.message),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn check_str(content: &str) -> CheckReport {
        let metadata = Metadata::from_str(content).unwrap();
        check(metadata, Path::new("mirage.toml")).unwrap()
    }

    #[test]
    fn test_valid_metadata_has_summary() {
        let report = check_str(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            markers = ["js-class"]
            properties = [{ name = "Name", type = "string" }]
            "#,
        );
        assert!(report.is_valid());
        let summary = report.summary.expect("summary for valid metadata");
        assert_eq!(summary.classes, 1);
        assert_eq!(summary.namespaces, 1);
        assert_eq!(summary.endpoint, None);
    }

    #[test]
    fn test_lint_errors_skip_the_build() {
        let report = check_str(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            markers = ["js-class"]
            properties = [
                { name = "Name", type = "string" },
                { name = "Name", type = "string" },
            ]
            "#,
        );
        assert!(!report.is_valid());
        assert!(report.errors[0].starts_with("[validate] property 'Name' conflicts"));
        assert!(report.summary.is_none());
    }
}
