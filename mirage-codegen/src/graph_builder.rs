//! The type graph builder.
//!
//! Walks the discovered roots and everything they reference into a
//! [`ProjectionGraph`]. Each host type is generated at most once: its node is
//! committed to the graph index before its members are walked, so a type that
//! refers back to itself resolves to the node in progress.

use mirage_core::{quote_single, to_camel_case, toml_value_to_string};
use mirage_ir::{
    Builtin, ClassId, ClassKind, ClassNode, EnumMemberNode, MethodNode, MethodShape,
    ParameterNode, ProjectionGraph, PropertyNode, PropertyVariant, Statement, TypeNode,
};
use mirage_metadata::{
    ConstantDecl, HostType, Marked, Marker, MethodDecl, Metadata, ParamDecl, TypeDecl,
};
use tracing::{debug, warn};

use crate::{
    classify::{self, PropertyTraits, SocketSide},
    docs::{DocKey, DocSource},
    mapper::{ClassGenerator, TypeMapper},
    pipeline::Diagnostic,
    route,
};

/// Runtime base of every service proxy.
pub const PROXY_BASE: &str = "Services.ProxyBase";
/// Runtime base of web service proxies; constructed with the transport handle.
pub const WEB_SERVICE_BASE: &str = "Services.WebServiceBase";
/// Runtime base of socket service proxies; constructed with the transport handle.
pub const SOCKET_PROXY_BASE: &str = "Services.SocketProxyBase";
/// Runtime base of the endpoint aggregator.
pub const ENDPOINT_BASE: &str = "Services.EndpointBase";

const PHASE: &str = "build";

/// The result of a build: the graph and the non-fatal issues met on the way.
#[derive(Debug)]
pub struct BuildOutput {
    pub graph: ProjectionGraph,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds the projection graph for one metadata file.
pub struct GraphBuilder<'m> {
    metadata: &'m Metadata,
    docs: Option<&'m dyn DocSource>,
    graph: ProjectionGraph,
    diagnostics: Vec<Diagnostic>,
}

impl<'m> GraphBuilder<'m> {
    pub fn new(metadata: &'m Metadata) -> Self {
        let mut graph = ProjectionGraph::new();
        seed_runtime(&mut graph);
        Self {
            metadata,
            docs: None,
            graph,
            diagnostics: Vec::new(),
        }
    }

    /// Attach documentation to the generated nodes.
    pub fn with_docs(mut self, docs: &'m dyn DocSource) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Generate every root type, in discovery order.
    pub fn build(mut self) -> BuildOutput {
        let metadata = self.metadata;
        for (decl, root) in metadata.roots() {
            debug!(root = %decl.name, predicate = ?root, "discovered root");
            self.generate_class(decl);
        }
        BuildOutput {
            graph: self.graph,
            diagnostics: self.diagnostics,
        }
    }

    /// Generate the node for `decl`, or return the one already committed.
    pub fn generate_class(&mut self, decl: &TypeDecl) -> ClassId {
        if let Some(id) = self.graph.lookup(&decl.name) {
            return id;
        }

        let kind = self.class_kind(decl);
        debug!(r#type = %decl.name, kind = kind.as_str(), "generating type");

        let mut node = ClassNode::new(&decl.name, kind);
        node.type_params = decl.generic_params.clone();
        node.flags.is_base_layer = decl.has(Marker::BaseClass);
        node.flags.generate_template = decl.has(Marker::GenerateTemplate);
        node.doc = self.doc(DocKey::Type(&decl.name));
        let id = self.graph.insert(decl.name.clone(), node);

        match kind {
            ClassKind::Enum => self.fill_enum(id, decl),
            ClassKind::WebService => self.fill_web_service(id, decl),
            ClassKind::SocketService => self.fill_socket_service(id, decl),
            _ => self.fill_class(id, decl),
        }

        self.graph.register(id);
        id
    }

    fn class_kind(&self, decl: &TypeDecl) -> ClassKind {
        let metadata = self.metadata;
        if metadata.is_enum(decl) {
            ClassKind::Enum
        } else if metadata.is_view_model(decl) {
            ClassKind::ViewModel
        } else if metadata.is_data_class(decl) {
            ClassKind::Class
        } else if decl.is_interface() {
            ClassKind::Interface
        } else if metadata.is_web_service(decl) {
            ClassKind::WebService
        } else if metadata.is_socket_service(decl) {
            ClassKind::SocketService
        } else {
            ClassKind::Default
        }
    }

    fn resolve(&mut self, ty: &HostType, type_params: &[String]) -> TypeNode {
        TypeMapper::new(self.metadata)
            .with_type_params(type_params)
            .resolve(ty, self)
    }

    fn doc(&self, key: DocKey<'_>) -> Option<String> {
        let docs = self.docs?;
        let doc = docs.lookup(key);
        if doc.is_none() {
            debug!(?key, "no documentation");
        }
        doc
    }

    fn fill_enum(&mut self, id: ClassId, decl: &TypeDecl) {
        let members = if decl.is_enum() {
            decl.enum_values()
                .into_iter()
                .map(|(name, value)| EnumMemberNode {
                    name: name.to_string(),
                    value,
                })
                .collect()
        } else {
            // A class of constants projected as an enum
            let mut members = Vec::new();
            for constant in &decl.constants {
                match constant.value.as_integer() {
                    Some(value) => members.push(EnumMemberNode {
                        name: constant.name.clone(),
                        value,
                    }),
                    None => self.drop_constant(decl, constant, "is not an integer"),
                }
            }
            members
        };
        self.graph.get_mut(id).members = members;
    }

    fn fill_class(&mut self, id: ClassId, decl: &TypeDecl) {
        let metadata = self.metadata;
        let type_params = decl.generic_params.clone();
        let definition_only = decl.is_interface();
        let view_model = metadata.is_view_model(decl);

        let (parent, parent_args) = self.resolve_parent(decl, &type_params);

        let mut interfaces = Vec::new();
        for iface in &decl.interfaces {
            if let Some(name) = iface.name()
                && let Some(iface_decl) = metadata.find(name)
                && iface_decl.is_interface()
                && metadata.in_boundary(iface_decl)
            {
                let iface_id = self.generate_class(iface_decl);
                if self.graph.get(iface_id).is_definition_only() && !interfaces.contains(&iface_id) {
                    interfaces.push(iface_id);
                }
            }
        }

        let mut properties = Vec::new();
        if !definition_only {
            for constant in &decl.constants {
                if !constant.literal {
                    debug!(constant = %constant.name, "skipping non-literal constant");
                    continue;
                }
                match self.constant_property(decl, constant) {
                    Some(property) => properties.push(property),
                    None => self.drop_constant(decl, constant, "has no literal form"),
                }
            }
        }

        let mut hooks = Vec::new();
        for prop in &decl.properties {
            if prop.has(Marker::Ignore) {
                continue;
            }
            let ty = self.resolve(&prop.ty, &type_params);
            let variant = classify::property_variant(PropertyTraits {
                read: prop.read,
                write: prop.write,
                is_static: prop.is_static,
                observable: prop.has(Marker::Observable),
                dependent: prop.has(Marker::Dependent),
                collection: prop.has(Marker::ObservableCollection),
                attached: prop.has(Marker::Attached),
                array_typed: ty.is_array(),
                value_typed: classify::is_value_typed(&ty),
                owner_view_model: view_model,
                owner_definition_only: definition_only,
            });

            let mut node = PropertyNode::new(&prop.name, ty, variant);
            if !definition_only && classify::renders_default(variant) {
                node.default = classify::default_literal(prop.default.as_ref(), &node.ty);
            }
            if variant == PropertyVariant::Dependent {
                node.dependencies = prop.depends_on.clone();
                node.defer_evaluation = prop.has(Marker::DeferEvaluation);
            }
            node.watched = !definition_only && prop.has(Marker::NotifyChange);
            node.doc = self.doc(DocKey::Member {
                ty: &decl.name,
                member: &prop.name,
            });
            if node.watched {
                if !variant.is_reactive() {
                    self.diagnostics.push(
                        Diagnostic::warning(
                            PHASE,
                            format!(
                                "property '{}' is watched but renders as {}",
                                prop.name,
                                variant.as_str()
                            ),
                        )
                        .at(format!("{}.{}", decl.name, prop.name)),
                    );
                }
                hooks.push(change_hook(&node));
            }
            properties.push(node);
        }

        let mut methods = hooks;
        for method in &decl.methods {
            let remote = method.has_any(&[Marker::JsMethod, Marker::OperationContract]);
            if definition_only || remote {
                let stub = self.virtual_method(decl, method, definition_only, &type_params);
                methods.push(stub);
            }
        }

        let mut constructors = Vec::new();
        if !definition_only {
            for ctor in decl
                .constructors
                .iter()
                .filter(|c| c.has(Marker::FunctionConstructor))
            {
                let params = self.parameters(decl, "constructor", &ctor.params, &type_params);
                let mut node = MethodNode::constructor(params);
                node.doc = ctor.doc.clone().filter(|_| self.docs.is_some());
                constructors.push(node);
            }
            if constructors.is_empty() {
                constructors.push(MethodNode::constructor(Vec::new()));
            }
        }

        let node = self.graph.get_mut(id);
        node.parent = parent;
        node.parent_args = parent_args;
        node.interfaces = interfaces;
        node.properties = properties;
        node.methods = methods;
        node.constructors = constructors;
        self.synthesize_constructor_bodies(id);
    }

    /// The parent node: a boundary reference class, or the `Object` root.
    fn resolve_parent(&mut self, decl: &TypeDecl, type_params: &[String]) -> (ClassId, Vec<TypeNode>) {
        if decl.is_interface() {
            return (ClassId::OBJECT, Vec::new());
        }
        let Some(HostType::Named { name, args }) = decl.base.as_ref() else {
            return (ClassId::OBJECT, Vec::new());
        };
        let metadata = self.metadata;
        match metadata.find(name) {
            Some(base)
                if metadata.in_boundary(base)
                    && !base.is_value_type()
                    && !base.is_interface()
                    && !metadata.is_enum(base) =>
            {
                let args = args
                    .iter()
                    .map(|arg| self.resolve(arg, type_params))
                    .collect();
                (self.generate_class(base), args)
            }
            _ => (ClassId::OBJECT, Vec::new()),
        }
    }

    fn constant_property(&self, decl: &TypeDecl, constant: &ConstantDecl) -> Option<PropertyNode> {
        let literal = toml_value_to_string(&constant.value)?;
        let (ty, default) = if constant.has(Marker::JsConstruct) {
            (TypeNode::builtin(Builtin::Function), literal)
        } else {
            match &constant.value {
                toml::Value::String(_) => (TypeNode::builtin(Builtin::String), quote_single(&literal)),
                toml::Value::Integer(_) => (TypeNode::builtin(Builtin::Number), literal),
                toml::Value::Float(_) => (TypeNode::builtin(Builtin::Decimal), literal),
                toml::Value::Boolean(_) => (TypeNode::builtin(Builtin::Boolean), literal),
                _ => return None,
            }
        };
        let mut node =
            PropertyNode::new(&constant.name, ty, PropertyVariant::Constant).with_default(Some(default));
        node.doc = self.doc(DocKey::Member {
            ty: &decl.name,
            member: &constant.name,
        });
        Some(node)
    }

    fn drop_constant(&mut self, decl: &TypeDecl, constant: &ConstantDecl, reason: &str) {
        let location = format!("{}.{}", decl.name, constant.name);
        warn!(constant = %location, reason, "dropping constant");
        self.diagnostics.push(
            Diagnostic::warning(PHASE, format!("constant '{}' {}; skipped", constant.name, reason))
                .at(location),
        );
    }

    fn virtual_method(
        &mut self,
        decl: &TypeDecl,
        method: &MethodDecl,
        signature_only: bool,
        type_params: &[String],
    ) -> MethodNode {
        let name = to_camel_case(&method.name);
        let returns = self.resolve(&method.return_type(), type_params);
        let params = self.parameters(decl, &method.name, &method.params, type_params);

        let mut node = MethodNode::new(&name, MethodShape::VirtualStub, returns).with_params(params);
        node.signature_only = signature_only;
        if !signature_only {
            node.body = vec![Statement::Throw {
                message: format!("Method {} not implemented", name),
            }];
        }
        node.doc = self.method_doc(decl, method);
        node
    }

    fn fill_web_service(&mut self, id: ClassId, decl: &TypeDecl) {
        let prefix = route::route_prefix(decl.route.as_deref(), decl.simple_name());

        let mut methods = Vec::new();
        for method in &decl.methods {
            let Some(route) = method.route.as_deref() else {
                debug!(service = %decl.name, method = %method.name, "no route template; skipped");
                continue;
            };
            let params = self.parameters(decl, &method.name, &method.params, &[]);
            let returns = self.resolve(&method.return_type(), &[]);
            let url = route::action_url(&prefix, route, decl.simple_name(), &method.name);
            let body = vec![Statement::ServiceRequest {
                verb: method.verb.unwrap_or_default().as_str().to_string(),
                url,
                policy: method.policy.clone().unwrap_or_default(),
                args: params.iter().map(|p| p.name.clone()).collect(),
                payload: params
                    .iter()
                    .map(|p| PropertyNode::assignment(&p.name, &p.name))
                    .collect(),
                returns_value: !returns.is_void(),
            }];

            let mut node = MethodNode::new(to_camel_case(&method.name), MethodShape::WebCall, returns)
                .with_params(params)
                .with_body(body);
            node.doc = self.method_doc(decl, method);
            methods.push(node);
        }

        let prefix_property = PropertyNode::new(
            "prefix",
            TypeNode::builtin(Builtin::String),
            PropertyVariant::Static,
        )
        .with_default(Some(quote_single(&prefix)));

        let parent = self.runtime(WEB_SERVICE_BASE);
        let node = self.graph.get_mut(id);
        node.parent = parent;
        node.route_prefix = Some(prefix);
        node.properties = vec![prefix_property];
        node.methods = methods;
        node.constructors = vec![proxy_constructor()];
        self.synthesize_constructor_bodies(id);
    }

    fn fill_socket_service(&mut self, id: ClassId, decl: &TypeDecl) {
        let metadata = self.metadata;
        let mut methods = Vec::new();

        for method in decl.methods.iter().filter(|m| is_remote_callable(m, decl)) {
            let node = self.socket_method(decl, method, SocketSide::Host);
            methods.push(node);
        }

        if let Some(callback) = decl.callback.as_deref() {
            match metadata.find(callback) {
                Some(contract) => {
                    for method in contract.methods.iter().filter(|m| is_remote_callable(m, contract)) {
                        let node = self.socket_method(contract, method, SocketSide::Client);
                        methods.push(node);
                    }
                }
                None => debug!(service = %decl.name, callback, "callback contract not declared"),
            }
        }

        let parent = self.runtime(SOCKET_PROXY_BASE);
        let node = self.graph.get_mut(id);
        node.parent = parent;
        node.methods = methods;
        node.constructors = vec![proxy_constructor()];
        self.synthesize_constructor_bodies(id);
    }

    fn socket_method(&mut self, owner: &TypeDecl, method: &MethodDecl, side: SocketSide) -> MethodNode {
        let declared = self.resolve(&method.return_type(), &[]);
        let inner = if declared.is(Builtin::Promise) || declared.is(Builtin::Observable) {
            declared.first_arg().cloned()
        } else {
            None
        };
        let returns = classify::socket_return(declared, inner, method.has(Marker::Synchronous));
        let params = self.parameters(owner, &method.name, &method.params, &[]);
        let name = to_camel_case(&method.name);

        let mut node = MethodNode::new(&name, classify::socket_shape(side), returns).with_params(params);
        match side {
            SocketSide::Host => {
                node.body = vec![Statement::Rpc {
                    call: classify::rpc_call(&node.returns),
                    method: name.clone(),
                    returns: node.returns.clone(),
                }];
            }
            SocketSide::Client => {
                node.is_event = method.has(Marker::JsEvent);
                if !node.is_event {
                    node.body = vec![Statement::Throw {
                        message: format!("Method {} not implemented", name),
                    }];
                }
            }
        }
        node.doc = self.method_doc(owner, method);
        node
    }

    fn parameters(
        &mut self,
        owner: &TypeDecl,
        member: &str,
        params: &[ParamDecl],
        type_params: &[String],
    ) -> Vec<ParameterNode> {
        let mut nodes = Vec::with_capacity(params.len());
        for param in params {
            let (ty, by_ref) = param.ty.unwrap_by_ref();
            let (ty, nullable) = ty.unwrap_nullable();
            let by_ref = by_ref || param.out;

            let mut resolved = self.resolve(ty, type_params);
            if by_ref {
                resolved = TypeNode::builtin_generic(Builtin::ByRef, vec![resolved]);
            }
            let mut node = ParameterNode::new(&param.name, resolved);
            node.by_ref = by_ref;
            node.default = param
                .default
                .as_ref()
                .and_then(|d| classify::default_literal(Some(d), &node.ty));
            node.optional = nullable && node.default.is_none();
            node.doc = self.doc(DocKey::Param {
                ty: &owner.name,
                method: member,
                param: &param.name,
            });
            nodes.push(node);
        }
        nodes
    }

    fn method_doc(&self, owner: &TypeDecl, method: &MethodDecl) -> Option<String> {
        self.doc(DocKey::Member {
            ty: &owner.name,
            member: &method.name,
        })
    }

    fn runtime(&self, name: &str) -> ClassId {
        self.graph.lookup(name).unwrap_or(ClassId::OBJECT)
    }

    fn synthesize_constructor_bodies(&mut self, id: ClassId) {
        let node = self.graph.get(id);
        let parent = self.graph.get(node.parent);
        let base: Option<Vec<Vec<String>>> = (!parent.flags.is_primitive).then(|| {
            parent
                .constructors
                .iter()
                .map(|c| c.params.iter().map(|p| p.name.clone()).collect())
                .collect()
        });

        let bodies: Vec<Vec<Statement>> = node
            .constructors
            .iter()
            .map(|ctor| classify::constructor_body(node, &ctor.params, base.as_deref()))
            .collect();

        let node = self.graph.get_mut(id);
        for (ctor, body) in node.constructors.iter_mut().zip(bodies) {
            ctor.body = body;
        }
    }
}

impl ClassGenerator for GraphBuilder<'_> {
    fn generate(&mut self, decl: &TypeDecl) -> ClassId {
        self.generate_class(decl)
    }
}

/// Seed the external runtime bases. They are referenced but never rendered.
fn seed_runtime(graph: &mut ProjectionGraph) {
    let proxy = graph.insert(PROXY_BASE, ClassNode::external(PROXY_BASE));
    for name in [WEB_SERVICE_BASE, SOCKET_PROXY_BASE] {
        let mut node = ClassNode::external(name);
        node.parent = proxy;
        node.constructors.push(proxy_constructor());
        graph.insert(name, node);
    }
    let mut endpoint = ClassNode::external(ENDPOINT_BASE);
    endpoint.constructors.push(MethodNode::constructor(Vec::new()));
    graph.insert(ENDPOINT_BASE, endpoint);
}

fn proxy_constructor() -> MethodNode {
    MethodNode::constructor(vec![ParameterNode::new("proxy", TypeNode::any())])
}

/// `On<Name>Change(value: T): void {}`
fn change_hook(property: &PropertyNode) -> MethodNode {
    MethodNode::new(
        format!("On{}Change", property.name),
        MethodShape::Plain,
        TypeNode::void(),
    )
    .with_params(vec![ParameterNode::new("value", property.ty.clone())])
}

fn is_remote_callable(method: &MethodDecl, owner: &TypeDecl) -> bool {
    owner.has(Marker::ServiceContract)
        || method.has_any(&[Marker::JsMethod, Marker::OperationContract, Marker::JsEvent])
}
