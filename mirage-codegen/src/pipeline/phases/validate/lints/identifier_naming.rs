//! Lint for names that cannot be rendered as TypeScript identifiers.

use mirage_metadata::{Metadata, TypeDecl};

use super::super::Lint;
use crate::{language::TYPESCRIPT, pipeline::Diagnostic};

/// Lint that checks declared names against TypeScript identifier rules.
///
/// A name that is not an identifier is an error. Reserved words are an error
/// for type and namespace names and a warning for parameters, which are
/// rendered with a `_` prefix.
pub struct IdentifierNamingLint;

impl Lint for IdentifierNamingLint {
    fn name(&self) -> &'static str {
        "identifier-naming"
    }

    fn description(&self) -> &'static str {
        "Check declared names are valid TypeScript identifiers"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        for ty in metadata.types.iter().filter(|ty| metadata.in_boundary(ty)) {
            check_type(ty, diagnostics);
        }
    }
}

fn check_type(ty: &TypeDecl, diagnostics: &mut Vec<Diagnostic>) {
    for segment in ty.name.split('.') {
        if !TYPESCRIPT.is_identifier(segment) || TYPESCRIPT.is_reserved(segment) {
            diagnostics.push(invalid("type name segment", segment, ty.name.clone()));
        }
    }

    let members = ty
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .chain(ty.constants.iter().map(|c| c.name.as_str()))
        .chain(ty.methods.iter().map(|m| m.name.as_str()))
        .chain(ty.members.iter().map(|m| m.name()));
    for name in members {
        if !TYPESCRIPT.is_identifier(name) {
            diagnostics.push(invalid("member", name, format!("{}.{}", ty.name, name)));
        }
    }

    let params = ty
        .methods
        .iter()
        .flat_map(|m| m.params.iter().map(move |p| (m.name.as_str(), p)))
        .chain(
            ty.constructors
                .iter()
                .flat_map(|c| c.params.iter().map(|p| ("constructor", p))),
        );
    for (owner, param) in params {
        let location = format!("{}.{}", ty.name, owner);
        if !TYPESCRIPT.is_identifier(&param.name) {
            diagnostics.push(invalid("parameter", &param.name, location));
        } else if TYPESCRIPT.is_reserved(&param.name) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "parameter '{}' is a reserved word; it is renamed to '{}'",
                        param.name,
                        TYPESCRIPT.safe_name(&param.name)
                    ),
                )
                .at(location),
            );
        }
    }
}

fn invalid(what: &str, name: &str, location: String) -> Diagnostic {
    Diagnostic::error(
        "validate",
        format!("{} '{}' is not a valid TypeScript identifier", what, name),
    )
    .at(location)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn check(content: &str) -> Vec<Diagnostic> {
        let metadata = Metadata::from_str(content).expect("Failed to parse test metadata");
        let mut diagnostics = Vec::new();
        IdentifierNamingLint.check(&metadata, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_names() {
        let diagnostics = check(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Models.Person"
            properties = [{ name = "First_Name", type = "string" }]
            methods = [{ name = "Save", params = [{ name = "force", type = "bool" }] }]
            "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_member_is_error() {
        let diagnostics = check(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            properties = [{ name = "first-name", type = "string" }]
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("Contoso.Person.first-name")
        );
    }

    #[test]
    fn test_reserved_type_name_is_error() {
        let diagnostics = check(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.class"
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
    }

    #[test]
    fn test_reserved_parameter_is_warning() {
        let diagnostics = check(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Api"
            methods = [{ name = "Remove", params = [{ name = "delete", type = "bool" }] }]
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("'_delete'"));
    }
}
