//! Lint for type references that project as `any`.

use mirage_metadata::{HostType, Metadata, TypeDecl};

use super::super::Lint;
use crate::{pipeline::Diagnostic, registry};

/// Lint that warns about type names that are neither builtin nor declared.
///
/// Such references collapse to `any`. Names in well-known host library
/// namespaces (`System.`, `Microsoft.`, `FSharp.`) are expected to be foreign
/// and are not reported.
pub struct UnresolvedReferenceLint;

impl Lint for UnresolvedReferenceLint {
    fn name(&self) -> &'static str {
        "unresolved-reference"
    }

    fn description(&self) -> &'static str {
        "Warn about type references that are neither builtin nor declared"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        for ty in metadata.types.iter().filter(|ty| metadata.in_boundary(ty)) {
            for (location, expr) in type_references(ty) {
                let mut names = Vec::new();
                collect_names(expr, &mut names);
                for name in names {
                    if is_resolved(metadata, ty, name) {
                        continue;
                    }
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("type '{}' is not declared; it projects as 'any'", name),
                        )
                        .at(location.clone()),
                    );
                }
            }
        }
    }
}

fn is_resolved(metadata: &Metadata, owner: &TypeDecl, name: &str) -> bool {
    owner.generic_params.iter().any(|p| p == name)
        || registry::is_known(name)
        || registry::is_host_library(name)
        || metadata.find(name).is_some()
}

/// Every type expression of a declaration with the location it appears at.
fn type_references(ty: &TypeDecl) -> Vec<(String, &HostType)> {
    let mut refs = Vec::new();
    if let Some(base) = &ty.base {
        refs.push((ty.name.clone(), base));
    }
    for iface in &ty.interfaces {
        refs.push((ty.name.clone(), iface));
    }
    for prop in &ty.properties {
        refs.push((format!("{}.{}", ty.name, prop.name), &prop.ty));
    }
    for method in &ty.methods {
        let location = format!("{}.{}", ty.name, method.name);
        if let Some(returns) = &method.returns {
            refs.push((location.clone(), returns));
        }
        for param in &method.params {
            refs.push((location.clone(), &param.ty));
        }
    }
    for ctor in &ty.constructors {
        for param in &ctor.params {
            refs.push((format!("{}.constructor", ty.name), &param.ty));
        }
    }
    refs
}

fn collect_names<'a>(ty: &'a HostType, names: &mut Vec<&'a str>) {
    match ty {
        HostType::Named { name, args } => {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
            for arg in args {
                collect_names(arg, names);
            }
        }
        HostType::Array(inner) | HostType::ByRef(inner) | HostType::Nullable(inner) => {
            collect_names(inner, names)
        }
        HostType::Union(cases) => {
            for case in cases {
                collect_names(case, names);
            }
        }
    }
}
