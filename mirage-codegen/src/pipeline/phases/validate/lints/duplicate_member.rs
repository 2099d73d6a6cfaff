//! Lint for duplicate member detection.

use indexmap::IndexMap;
use mirage_core::to_camel_case;
use mirage_metadata::{Metadata, TypeDecl};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on members that would render under the same name.
///
/// Properties and constants share one scope. Methods render camelCased, so
/// `Name()` does not clash with a `Name` property but `name()` does.
pub struct DuplicateMemberLint;

impl Lint for DuplicateMemberLint {
    fn name(&self) -> &'static str {
        "duplicate-member"
    }

    fn description(&self) -> &'static str {
        "Detect members that would render under the same name"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        for ty in &metadata.types {
            check_type(ty, diagnostics);
        }
    }
}

fn check_type(ty: &TypeDecl, diagnostics: &mut Vec<Diagnostic>) {
    let mut seen: IndexMap<String, &'static str> = IndexMap::new();

    let fields = ty
        .properties
        .iter()
        .map(|p| (p.name.clone(), "property"))
        .chain(ty.constants.iter().map(|c| (c.name.clone(), "constant")));
    let methods = ty
        .methods
        .iter()
        .map(|m| (to_camel_case(&m.name), "method"));

    for (name, kind) in fields.chain(methods) {
        match seen.get(&name) {
            Some(first) => diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!(
                        "{} '{}' conflicts with {} of the same name in '{}'",
                        kind, name, first, ty.name
                    ),
                )
                .at(format!("{}.{}", ty.name, name)),
            ),
            None => {
                seen.insert(name, kind);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn check(content: &str) -> Vec<Diagnostic> {
        let metadata = Metadata::from_str(content).expect("Failed to parse test metadata");
        let mut diagnostics = Vec::new();
        DuplicateMemberLint.check(&metadata, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_duplicates() {
        let diagnostics = check(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            properties = [{ name = "Name", type = "string" }]
            methods = [{ name = "Name" }]
            constants = [{ name = "Max", value = 1 }]
            "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_property() {
        let diagnostics = check(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            properties = [
                { name = "Name", type = "string" },
                { name = "Name", type = "int" },
            ]
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("Contoso.Person.Name"));
    }

    #[test]
    fn test_method_clashes_with_lowercase_property() {
        let diagnostics = check(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            properties = [{ name = "save", type = "bool" }]
            methods = [{ name = "Save" }]
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("method 'save'"));
    }

    #[test]
    fn test_overloads_are_duplicates() {
        let diagnostics = check(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Api"
            methods = [{ name = "Find" }, { name = "Find", params = [{ name = "id", type = "int" }] }]
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
    }
}
