//! Lint for markers that have no effect where they are used.

use mirage_metadata::{Marked, Marker, MarkerTarget, Metadata, TypeDecl};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about markers that are ignored by the projection.
///
/// A marker placed on the wrong kind of declaration is reported, as are
/// `dependent` on a writable property and `synchronous` outside a socket
/// contract.
pub struct MarkerPlacementLint;

impl Lint for MarkerPlacementLint {
    fn name(&self) -> &'static str {
        "marker-placement"
    }

    fn description(&self) -> &'static str {
        "Warn about markers that have no effect where they are used"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        for ty in &metadata.types {
            check_type(metadata, ty, diagnostics);
        }
    }
}

fn check_type(metadata: &Metadata, ty: &TypeDecl, diagnostics: &mut Vec<Diagnostic>) {
    check_targets(ty, MarkerTarget::Type, ty.name.clone(), diagnostics);

    for prop in &ty.properties {
        let location = format!("{}.{}", ty.name, prop.name);
        check_targets(prop, MarkerTarget::Property, location.clone(), diagnostics);
        if prop.has(Marker::Dependent) && prop.write {
            diagnostics.push(no_effect(
                Marker::Dependent,
                "on a writable property",
                location,
            ));
        }
    }

    let socket_contract = metadata.is_socket_service(ty)
        || ty.has(Marker::ServiceContract)
        || is_callback_contract(metadata, ty);
    for method in &ty.methods {
        let location = format!("{}.{}", ty.name, method.name);
        check_targets(method, MarkerTarget::Method, location.clone(), diagnostics);
        if method.has(Marker::Synchronous) && !socket_contract {
            diagnostics.push(no_effect(
                Marker::Synchronous,
                "outside a socket contract",
                location,
            ));
        }
    }

    for ctor in &ty.constructors {
        let location = format!("{}.constructor", ty.name);
        check_targets(ctor, MarkerTarget::Constructor, location, diagnostics);
    }
    for constant in &ty.constants {
        let location = format!("{}.{}", ty.name, constant.name);
        check_targets(constant, MarkerTarget::Constant, location, diagnostics);
    }
}

fn is_callback_contract(metadata: &Metadata, ty: &TypeDecl) -> bool {
    metadata.types.iter().any(|t| {
        t.callback
            .as_deref()
            .and_then(|c| metadata.find(c))
            .is_some_and(|c| c.name == ty.name)
    })
}

fn check_targets(
    decl: &impl Marked,
    target: MarkerTarget,
    location: String,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for marker in decl.markers() {
        if !marker.applies_to(target) {
            diagnostics.push(no_effect(
                *marker,
                &format!("on a {}", target.as_str()),
                location.clone(),
            ));
        }
    }
}

fn no_effect(marker: Marker, place: &str, location: String) -> Diagnostic {
    Diagnostic::warning(
        "validate",
        format!("marker '{}' has no effect {}", marker, place),
    )
    .at(location)
}
