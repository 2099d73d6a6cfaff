//! The projection graph: an arena of class nodes, an identity index and a namespace tree.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{ClassId, ClassKind, ClassNode};

/// A namespace grouping generated classes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NamespaceNode {
    /// Last segment of the qualified name (empty for the global namespace).
    pub name: String,
    pub qualified_name: String,
    /// Qualified names of child namespaces, in creation order.
    pub children: Vec<String>,
    /// Classes in registration order.
    pub classes: Vec<ClassId>,
}

impl NamespaceNode {
    fn new(qualified_name: &str) -> Self {
        Self {
            name: qualified_name
                .rsplit('.')
                .next()
                .unwrap_or_default()
                .to_string(),
            qualified_name: qualified_name.to_string(),
            children: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn is_global(&self) -> bool {
        self.qualified_name.is_empty()
    }
}

/// The composite accessor over all generated service classes.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointNode {
    pub class: ClassNode,
    /// Services in discovery order.
    pub services: Vec<ClassId>,
}

impl EndpointNode {
    pub fn namespace(&self) -> &str {
        &self.class.namespace
    }
}

/// All nodes produced by one projection run.
///
/// Nodes are committed to the identity index when they are allocated, before
/// their members are generated, so cyclic references resolve to the node in
/// progress.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionGraph {
    classes: Vec<ClassNode>,
    index: IndexMap<String, ClassId>,
    namespaces: IndexMap<String, NamespaceNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint: Option<EndpointNode>,
}

impl Default for ProjectionGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity key of the `Object` sentinel. Not a valid host type name.
const OBJECT_KEY: &str = "<object>";

impl ProjectionGraph {
    /// Create a graph holding only the root `Object` sentinel.
    pub fn new() -> Self {
        let mut object = ClassNode::new("Object", ClassKind::Default);
        object.flags.is_primitive = true;

        let mut index = IndexMap::new();
        index.insert(OBJECT_KEY.to_string(), ClassId::OBJECT);

        let mut namespaces = IndexMap::new();
        namespaces.insert(String::new(), NamespaceNode::new(""));

        Self {
            classes: vec![object],
            index,
            namespaces,
            endpoint: None,
        }
    }

    /// Look up a node by type identity.
    pub fn lookup(&self, key: &str) -> Option<ClassId> {
        self.index.get(key).copied()
    }

    /// Allocate a node and commit it to the index under `key`.
    ///
    /// Returns the existing node when `key` is already committed.
    pub fn insert(&mut self, key: impl Into<String>, node: ClassNode) -> ClassId {
        let key = key.into();
        if let Some(id) = self.lookup(&key) {
            return id;
        }
        let id = ClassId::new(self.classes.len());
        self.classes.push(node);
        self.index.insert(key, id);
        id
    }

    pub fn get(&self, id: ClassId) -> &ClassNode {
        &self.classes[id.index()]
    }

    pub fn get_mut(&mut self, id: ClassId) -> &mut ClassNode {
        &mut self.classes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if no node produces output.
    pub fn is_empty(&self) -> bool {
        self.rendered_classes().next().is_none()
    }

    /// All nodes with their ids, in allocation order.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassNode)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, node)| (ClassId::new(i), node))
    }

    /// Nodes that produce output, in allocation order.
    pub fn rendered_classes(&self) -> impl Iterator<Item = (ClassId, &ClassNode)> {
        self.classes().filter(|(_, node)| node.is_rendered())
    }

    /// Register a finished node under its namespace, creating missing ancestors.
    pub fn register(&mut self, id: ClassId) {
        let namespace = self.get(id).namespace.clone();
        self.ensure_namespace(&namespace);
        if let Some(ns) = self.namespaces.get_mut(&namespace)
            && !ns.classes.contains(&id)
        {
            ns.classes.push(id);
        }
    }

    fn ensure_namespace(&mut self, qualified_name: &str) {
        if self.namespaces.contains_key(qualified_name) {
            return;
        }
        let parent = qualified_name
            .rsplit_once('.')
            .map(|(parent, _)| parent)
            .unwrap_or("");
        self.ensure_namespace(parent);
        if let Some(parent) = self.namespaces.get_mut(parent) {
            parent.children.push(qualified_name.to_string());
        }
        self.namespaces
            .insert(qualified_name.to_string(), NamespaceNode::new(qualified_name));
    }

    /// Namespaces in creation order, global first.
    pub fn namespaces(&self) -> impl Iterator<Item = &NamespaceNode> {
        self.namespaces.values()
    }

    pub fn namespace(&self, qualified_name: &str) -> Option<&NamespaceNode> {
        self.namespaces.get(qualified_name)
    }

    /// Classes registered in a namespace that produce output.
    pub fn namespace_classes<'a>(
        &'a self,
        namespace: &'a NamespaceNode,
    ) -> impl Iterator<Item = (ClassId, &'a ClassNode)> + 'a {
        namespace
            .classes
            .iter()
            .map(|&id| (id, self.get(id)))
            .filter(|(_, node)| node.is_rendered())
    }

    pub fn endpoint(&self) -> Option<&EndpointNode> {
        self.endpoint.as_ref()
    }

    pub fn set_endpoint(&mut self, endpoint: EndpointNode) {
        self.ensure_namespace(endpoint.namespace());
        self.endpoint = Some(endpoint);
    }

    /// Generated service classes in allocation order.
    pub fn services(&self) -> impl Iterator<Item = (ClassId, &ClassNode)> {
        self.rendered_classes()
            .filter(|(_, node)| node.kind.is_service())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_has_object_root() {
        let graph = ProjectionGraph::new();
        assert_eq!(graph.lookup(OBJECT_KEY), Some(ClassId::OBJECT));
        assert_eq!(graph.lookup("Object"), None);
        assert!(graph.get(ClassId::OBJECT).flags.is_primitive);
        assert!(graph.is_empty());
        assert_eq!(graph.rendered_classes().count(), 0);
    }

    #[test]
    fn test_insert_is_idempotent_per_key() {
        let mut graph = ProjectionGraph::new();
        let a = graph.insert("App.Person", ClassNode::new("App.Person", ClassKind::Class));
        let b = graph.insert("App.Person", ClassNode::new("App.Person", ClassKind::Class));
        assert_eq!(a, b);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_type_named_object_is_not_the_root() {
        let mut graph = ProjectionGraph::new();
        let id = graph.insert("Object", ClassNode::new("Object", ClassKind::Class));
        assert_ne!(id, ClassId::OBJECT);
        assert!(!graph.get(id).flags.is_primitive);
        assert!(graph.get(ClassId::OBJECT).flags.is_primitive);
    }

    #[test]
    fn test_register_creates_ancestor_namespaces() {
        let mut graph = ProjectionGraph::new();
        let id = graph.insert(
            "App.Models.Person",
            ClassNode::new("App.Models.Person", ClassKind::Class),
        );
        graph.register(id);
        graph.register(id);

        let names: Vec<_> = graph.namespaces().map(|ns| ns.qualified_name.as_str()).collect();
        assert_eq!(names, vec!["", "App", "App.Models"]);
        assert_eq!(graph.namespace("App").unwrap().children, vec!["App.Models"]);
        assert_eq!(graph.namespace("App.Models").unwrap().classes, vec![id]);
        assert_eq!(graph.namespace("App.Models").unwrap().name, "Models");
    }

    #[test]
    fn test_external_nodes_are_not_rendered() {
        let mut graph = ProjectionGraph::new();
        let id = graph.insert(
            "Services.ProxyBase",
            ClassNode::external("Services.ProxyBase"),
        );
        graph.register(id);
        let ns = graph.namespace("Services").unwrap();
        assert_eq!(graph.namespace_classes(ns).count(), 0);
    }
}
