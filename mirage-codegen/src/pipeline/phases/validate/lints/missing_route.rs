//! Lint for web service methods without a route template.

use mirage_metadata::Metadata;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes web service methods that are not projected.
///
/// A method without a route template is skipped by the build, which is
/// usually intended for helpers, so this is informational.
pub struct MissingRouteLint;

impl Lint for MissingRouteLint {
    fn name(&self) -> &'static str {
        "missing-route"
    }

    fn description(&self) -> &'static str {
        "Note web service methods without a route template"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        let services = metadata
            .types
            .iter()
            .filter(|ty| metadata.in_boundary(ty) && metadata.is_web_service(ty));
        for ty in services {
            for method in ty.methods.iter().filter(|m| m.route.is_none()) {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!("method '{}' has no route template and is skipped", method.name),
                    )
                    .at(format!("{}.{}", ty.name, method.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::pipeline::Severity;

    #[test]
    fn test_reports_unrouted_methods() {
        let metadata = Metadata::from_str(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.ItemsController"
            base = "ControllerBase"
            methods = [{ name = "Get", route = "items" }, { name = "Helper" }]

            [[types]]
            name = "Contoso.Person"
            methods = [{ name = "Helper" }]
            "#,
        )
        .expect("Failed to parse test metadata");

        let mut diagnostics = Vec::new();
        MissingRouteLint.check(&metadata, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Info);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("Contoso.ItemsController.Helper")
        );
    }
}
