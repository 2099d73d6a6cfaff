//! The service endpoint aggregator.

use mirage_core::{lower_first, strip_suffix_ignore_case};
use mirage_ir::{
    ClassId, ClassKind, ClassNode, EndpointNode, MethodNode, ParameterNode, ProjectionGraph,
    PropertyNode, PropertyVariant, Statement, TypeNode,
};
use tracing::debug;

use crate::graph_builder::ENDPOINT_BASE;

/// Synthesize the endpoint over every generated service class.
///
/// The endpoint lives in the longest namespace prefix shared by all services
/// and exposes one property per service. Returns `None` when the graph has no
/// services.
pub fn aggregate(graph: &ProjectionGraph) -> Option<EndpointNode> {
    let services: Vec<(ClassId, &ClassNode)> = graph.services().collect();
    if services.is_empty() {
        return None;
    }

    let namespace = common_namespace(services.iter().map(|(_, s)| s.namespace.as_str()));
    let qualified = if namespace.is_empty() {
        "Endpoint".to_string()
    } else {
        format!("{}.Endpoint", namespace)
    };
    debug!(endpoint = %qualified, services = services.len(), "aggregating services");

    let mut class = ClassNode::new(&qualified, ClassKind::Default);
    class.parent = graph.lookup(ENDPOINT_BASE).unwrap_or(ClassId::OBJECT);

    let mut body = vec![Statement::SuperCall { args: Vec::new() }];
    for (id, service) in &services {
        let name = unique_name(&class.properties, &property_name(&service.name));
        body.push(Statement::Construct {
            property: name.clone(),
            type_name: service.qualified_name.clone(),
            args: vec!["proxy".to_string()],
        });
        class.properties.push(PropertyNode::new(
            name,
            TypeNode::class_ref(*id, service.qualified_name.clone(), None),
            PropertyVariant::Simple,
        ));
    }

    let ctor = MethodNode::constructor(vec![ParameterNode::new("proxy", TypeNode::any())])
        .with_body(body);
    class.constructors.push(ctor);

    Some(EndpointNode {
        class,
        services: services.into_iter().map(|(id, _)| id).collect(),
    })
}

/// `ItemsController` -> `items`
fn property_name(service: &str) -> String {
    lower_first(strip_suffix_ignore_case(service, "Controller"))
}

fn unique_name(existing: &[PropertyNode], base: &str) -> String {
    let taken = |name: &str| existing.iter().any(|p| p.name == name);
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}{}", base, n))
        .find(|name| !taken(name))
        .unwrap_or_else(|| base.to_string())
}

/// The longest dotted prefix shared by all namespaces.
fn common_namespace<'a>(mut namespaces: impl Iterator<Item = &'a str>) -> String {
    let Some(first) = namespaces.next() else {
        return String::new();
    };
    let mut common: Vec<&str> = first.split('.').filter(|s| !s.is_empty()).collect();
    for ns in namespaces {
        let shared = common
            .iter()
            .zip(ns.split('.'))
            .take_while(|(a, b)| *a == b)
            .count();
        common.truncate(shared);
    }
    common.join(".")
}
