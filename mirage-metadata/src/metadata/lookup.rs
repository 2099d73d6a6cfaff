//! Type lookup, boundary checks and root discovery.

use super::Metadata;
use crate::{Marked, Marker, TypeDecl, simple_name};

/// Why a type was selected as a projection root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Enum,
    ViewModel,
    DataClass,
    WebService,
    SocketService,
}

impl RootKind {
    /// All root predicates in discovery order.
    pub const ALL: [RootKind; 5] = [
        RootKind::Enum,
        RootKind::ViewModel,
        RootKind::DataClass,
        RootKind::WebService,
        RootKind::SocketService,
    ];
}

impl Metadata {
    /// Resolve a type name: exact qualified name first, then a unique simple-name match.
    pub fn find(&self, name: &str) -> Option<&TypeDecl> {
        if let Some(&i) = self.by_name.get(name) {
            return Some(&self.types[i]);
        }
        match self.by_simple_name.get(name).map(Vec::as_slice) {
            Some([i]) => Some(&self.types[*i]),
            _ => None,
        }
    }

    /// The assembly that declares `ty`.
    pub fn assembly_of<'a>(&'a self, ty: &'a TypeDecl) -> &'a str {
        ty.assembly.as_deref().unwrap_or(&self.assembly.name)
    }

    /// Check if `ty` is declared in the boundary assembly or one of its includes.
    pub fn in_boundary(&self, ty: &TypeDecl) -> bool {
        let assembly = self.assembly_of(ty);
        assembly == self.assembly.name || self.assembly.include.iter().any(|a| a == assembly)
    }

    /// Base type names of `ty`, nearest first. Stops at the first undeclared base.
    pub fn base_names<'a>(&'a self, ty: &'a TypeDecl) -> Vec<&'a str> {
        let mut names = Vec::new();
        let mut current = ty;
        while let Some(base) = current.base.as_ref().and_then(|b| b.name()) {
            if names.contains(&base) || names.len() > self.types.len() {
                break;
            }
            names.push(base);
            match self.find(base) {
                Some(next) => current = next,
                None => break,
            }
        }
        names
    }

    pub fn is_view_model(&self, ty: &TypeDecl) -> bool {
        ty.has(Marker::JsViewModel)
    }

    pub fn is_data_class(&self, ty: &TypeDecl) -> bool {
        ty.has_any(&[Marker::JsClass, Marker::DataContract])
    }

    /// Enums, or classes of constants explicitly projected as enums.
    pub fn is_enum(&self, ty: &TypeDecl) -> bool {
        ty.is_enum() || ty.has(Marker::JsEnum)
    }

    /// A web service is marked, or derives from the configured controller base.
    pub fn is_web_service(&self, ty: &TypeDecl) -> bool {
        if ty.is_interface() || ty.is_value_type() {
            return false;
        }
        if ty.has(Marker::JsService) {
            return true;
        }
        if ty.is_abstract {
            return false;
        }
        let controller = simple_name(&self.assembly.controller_base);
        self.base_names(ty)
            .iter()
            .any(|base| simple_name(base) == controller)
    }

    /// A socket service declares the host side of a remote contract.
    pub fn is_socket_service(&self, ty: &TypeDecl) -> bool {
        !ty.is_interface()
            && !ty.is_value_type()
            && ty.has_any(&[Marker::JsSocketService, Marker::ServiceContract])
    }

    /// Check if `ty` matches a root predicate.
    pub fn matches_root(&self, ty: &TypeDecl, kind: RootKind) -> bool {
        match kind {
            RootKind::Enum => self.is_enum(ty),
            RootKind::ViewModel => self.is_view_model(ty),
            RootKind::DataClass => self.is_data_class(ty),
            RootKind::WebService => self.is_web_service(ty),
            RootKind::SocketService => self.is_socket_service(ty),
        }
    }

    /// Boundary types matching each root predicate, in predicate then declaration order.
    ///
    /// A type matching several predicates appears once per predicate.
    pub fn roots(&self) -> Vec<(&TypeDecl, RootKind)> {
        RootKind::ALL
            .iter()
            .flat_map(|&kind| {
                self.types
                    .iter()
                    .filter(move |ty| self.in_boundary(ty) && self.matches_root(ty, kind))
                    .map(move |ty| (ty, kind))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn metadata(content: &str) -> Metadata {
        Metadata::from_str(content).expect("Failed to parse metadata")
    }

    #[test]
    fn test_find_exact_and_simple_name() {
        let md = metadata(
            r#"
            [assembly]
            name = "App"

            [[types]]
            name = "App.Models.Person"

            [[types]]
            name = "App.Models.Item"

            [[types]]
            name = "App.Other.Item"
            "#,
        );
        assert!(md.find("App.Models.Person").is_some());
        assert_eq!(md.find("Person").unwrap().name, "App.Models.Person");
        // ambiguous simple name
        assert!(md.find("Item").is_none());
        assert!(md.find("App.Other.Item").is_some());
        assert!(md.find("Missing").is_none());
    }

    #[test]
    fn test_boundary() {
        let md = metadata(
            r#"
            [assembly]
            name = "App"
            include = ["App.Models"]

            [[types]]
            name = "App.Person"

            [[types]]
            name = "App.Models.Item"
            assembly = "App.Models"

            [[types]]
            name = "System.Uri"
            assembly = "System"
            "#,
        );
        assert!(md.in_boundary(md.find("App.Person").unwrap()));
        assert!(md.in_boundary(md.find("App.Models.Item").unwrap()));
        assert!(!md.in_boundary(md.find("System.Uri").unwrap()));
    }

    #[test]
    fn test_web_service_through_controller_base() {
        let md = metadata(
            r#"
            [assembly]
            name = "App"

            [[types]]
            name = "App.ApiController"
            base = "Microsoft.AspNetCore.Mvc.ControllerBase"

            [[types]]
            name = "App.ItemsController"
            base = "App.ApiController"

            [[types]]
            name = "App.Plain"
            "#,
        );
        assert!(md.is_web_service(md.find("App.ItemsController").unwrap()));
        assert!(md.is_web_service(md.find("App.ApiController").unwrap()));
        assert!(!md.is_web_service(md.find("App.Plain").unwrap()));
    }

    #[test]
    fn test_abstract_controller_is_not_a_web_service() {
        let md = metadata(
            r#"
            [assembly]
            name = "App"

            [[types]]
            name = "App.ApiController"
            abstract = true
            base = "Microsoft.AspNetCore.Mvc.ControllerBase"

            [[types]]
            name = "App.ItemsController"
            base = "App.ApiController"

            [[types]]
            name = "App.AdminController"
            abstract = true
            markers = ["js-service"]
            "#,
        );
        assert!(!md.is_web_service(md.find("App.ApiController").unwrap()));
        assert!(md.is_web_service(md.find("App.ItemsController").unwrap()));
        assert!(md.is_web_service(md.find("App.AdminController").unwrap()));
    }

    #[test]
    fn test_base_names_stops_on_cycle() {
        let md = metadata(
            r#"
            [assembly]
            name = "App"

            [[types]]
            name = "App.A"
            base = "App.B"

            [[types]]
            name = "App.B"
            base = "App.A"
            "#,
        );
        let names = md.base_names(md.find("App.A").unwrap());
        assert_eq!(names, vec!["App.B", "App.A"]);
    }

    #[test]
    fn test_roots_in_predicate_order() {
        let md = metadata(
            r#"
            [assembly]
            name = "App"

            [[types]]
            name = "App.Person"
            markers = ["js-class"]

            [[types]]
            name = "App.Color"
            kind = "enum"
            members = ["Red"]

            [[types]]
            name = "App.Chat"
            markers = ["js-socket-service"]

            [[types]]
            name = "App.Shell"
            markers = ["js-view-model"]

            [[types]]
            name = "Lib.Foreign"
            assembly = "Lib"
            markers = ["js-class"]
            "#,
        );
        let roots: Vec<_> = md
            .roots()
            .into_iter()
            .map(|(ty, kind)| (ty.name.as_str(), kind))
            .collect();
        assert_eq!(
            roots,
            vec![
                ("App.Color", RootKind::Enum),
                ("App.Shell", RootKind::ViewModel),
                ("App.Person", RootKind::DataClass),
                ("App.Chat", RootKind::SocketService),
            ]
        );
    }
}
