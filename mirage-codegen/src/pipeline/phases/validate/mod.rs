//! Validate phase - runs lints on the metadata.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateMemberLint, IdentifierNamingLint, MarkerPlacementLint, MissingRouteLint,
    UnresolvedReferenceLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the metadata using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateMemberLint),
                Box::new(UnresolvedReferenceLint),
                Box::new(IdentifierNamingLint),
                Box::new(MarkerPlacementLint),
                Box::new(MissingRouteLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run all lints, recording their findings without failing.
    pub fn collect(&self, ctx: &mut CompilationContext) {
        for lint in &self.lints {
            let mut findings = Vec::new();
            lint.check(&ctx.metadata, &mut findings);
            tracing::debug!(lint = lint.name(), findings = findings.len(), "ran lint");
            for diagnostic in findings {
                ctx.add_diagnostic(diagnostic);
            }
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check metadata integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.collect(ctx);

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use mirage_metadata::Metadata;

    use super::*;
    use crate::{ProjectionOptions, pipeline::Diagnostic};

    fn context(content: &str) -> CompilationContext {
        let metadata = Metadata::from_str(content).expect("Failed to parse test metadata");
        CompilationContext::new(metadata, ProjectionOptions::default())
    }

    fn minimal() -> CompilationContext {
        context(
            r#"
            [assembly]
            name = "Contoso"
            "#,
        )
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx = minimal();
        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = context(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            markers = ["js-class"]
            properties = [{ name = "Team", type = "Contoso.Team" }]
            "#,
        );

        let phase = ValidatePhase::empty().with_lint(UnresolvedReferenceLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        let phase = ValidatePhase::new();
        assert_eq!(
            phase.lint_names(),
            vec![
                "duplicate-member",
                "unresolved-reference",
                "identifier-naming",
                "marker-placement",
                "missing-route",
            ]
        );
        assert!(phase.lint_info().iter().all(|l| !l.description.is_empty()));
        assert!(ValidatePhase::empty().lint_names().is_empty());
    }

    #[test]
    fn test_collect_does_not_fail() {
        let mut ctx = context(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            properties = [
                { name = "Name", type = "string" },
                { name = "Name", type = "string" },
            ]
            "#,
        );
        ValidatePhase::new().collect(&mut ctx);
        assert_eq!(ctx.error_count(), 1);
    }
}
