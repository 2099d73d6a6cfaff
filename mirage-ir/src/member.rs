//! Property, method and parameter nodes.

use serde::Serialize;

use crate::TypeNode;

/// How a property is emitted.
///
/// The plain-field variants (`Simple`, `Static`, `Constant`, `ReadOnly`,
/// `WriteOnly`, `Inline`, `Assignment`, `Attached`) and the reactive variants
/// (`Observable`, `Dependent`, `ObservableCollection`) coexist: a reactive
/// property is an accessor pair over a store, not a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyVariant {
    Simple,
    Static,
    ReadOnly,
    WriteOnly,
    Constant,
    /// A parameter or type-literal member.
    Inline,
    /// A member of an object literal.
    Assignment,
    Observable,
    Dependent,
    ObservableCollection,
    /// Shared through the prototype, emitted once per class.
    Attached,
}

impl PropertyVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyVariant::Simple => "simple",
            PropertyVariant::Static => "static",
            PropertyVariant::ReadOnly => "read-only",
            PropertyVariant::WriteOnly => "write-only",
            PropertyVariant::Constant => "constant",
            PropertyVariant::Inline => "inline",
            PropertyVariant::Assignment => "assignment",
            PropertyVariant::Observable => "observable",
            PropertyVariant::Dependent => "dependent",
            PropertyVariant::ObservableCollection => "observable-collection",
            PropertyVariant::Attached => "attached",
        }
    }

    /// Variants backed by a reactive store (`this.$Name`).
    pub fn is_reactive(&self) -> bool {
        matches!(
            self,
            PropertyVariant::Observable
                | PropertyVariant::Dependent
                | PropertyVariant::ObservableCollection
        )
    }

    /// Variants declared on the class rather than per instance.
    pub fn is_static(&self) -> bool {
        matches!(self, PropertyVariant::Static | PropertyVariant::Constant)
    }

    /// Check if a constructor parameter may assign to a property of this variant.
    pub fn is_assignable(&self) -> bool {
        !matches!(
            self,
            PropertyVariant::Static
                | PropertyVariant::Constant
                | PropertyVariant::Attached
                | PropertyVariant::ReadOnly
                | PropertyVariant::Dependent
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyNode {
    pub name: String,
    pub ty: TypeNode,
    pub variant: PropertyVariant,
    /// Default literal; for `Assignment` the assigned expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Tracked inputs of a dependent property.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub defer_evaluation: bool,
    /// Emits an `On<Name>Change` hook.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub watched: bool,
    /// Optional parameter (`n?: T`).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl PropertyNode {
    pub fn new(name: impl Into<String>, ty: TypeNode, variant: PropertyVariant) -> Self {
        Self {
            name: name.into(),
            ty,
            variant,
            default: None,
            dependencies: Vec::new(),
            defer_evaluation: false,
            watched: false,
            optional: false,
            doc: None,
        }
    }

    /// An object-literal member `name: value`.
    pub fn assignment(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut node = Self::new(name, TypeNode::any(), PropertyVariant::Assignment);
        node.default = Some(value.into());
        node
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }

    /// Check if an assignment can use the `{ name }` shorthand.
    pub fn is_shorthand(&self) -> bool {
        self.variant == PropertyVariant::Assignment
            && self.default.as_deref().is_none_or(|v| v == self.name)
    }
}

/// How a method is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodShape {
    Plain,
    Constructor,
    WebCall,
    /// Host side of a socket contract: forwards to the RPC transport.
    SocketHostCall,
    /// Client side of a socket contract: an event, or left to a subclass.
    SocketClientCall,
    /// Left to a subclass (throwing body) or a bare interface signature.
    VirtualStub,
}

impl MethodShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodShape::Plain => "plain",
            MethodShape::Constructor => "constructor",
            MethodShape::WebCall => "web-call",
            MethodShape::SocketHostCall => "socket-host-call",
            MethodShape::SocketClientCall => "socket-client-call",
            MethodShape::VirtualStub => "virtual-stub",
        }
    }
}

/// The transport helper a socket host method forwards to, chosen from its return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RpcCall {
    /// Observable return: `rpcCallStream`.
    Stream,
    /// Void return: `rpcCall`.
    FireAndForget,
    /// Any other return: `rpcCallReturn`.
    Value,
}

impl RpcCall {
    pub fn helper(&self) -> &'static str {
        match self {
            RpcCall::Stream => "rpcCallStream",
            RpcCall::FireAndForget => "rpcCall",
            RpcCall::Value => "rpcCallReturn",
        }
    }
}

/// A statement in a generated method or constructor body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    /// `super(args);`
    SuperCall { args: Vec<String> },
    Comment { text: String },
    /// Forward changes of a reactive store to the property's change hook.
    Subscribe { property: String },
    /// `if (param !== null) this.property = param;`
    AssignIfPresent { param: String, property: String },
    /// `this.property = new TypeName(args);`
    Construct {
        property: String,
        type_name: String,
        args: Vec<String>,
    },
    /// Forward to the socket transport.
    Rpc {
        call: RpcCall,
        method: String,
        returns: TypeNode,
    },
    /// `return this.serviceRequest(verb, url, policy, ...args, {payload});`
    ServiceRequest {
        verb: String,
        /// Template literal body with `${param}` placeholders.
        url: String,
        policy: String,
        args: Vec<String>,
        payload: Vec<PropertyNode>,
        returns_value: bool,
    },
    /// `throw new Error("message");`
    Throw { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParameterNode {
    pub name: String,
    pub ty: TypeNode,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    /// Passed by reference (`ref`/`out`).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub by_ref: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl ParameterNode {
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            by_ref: false,
            default: None,
            doc: None,
        }
    }

    /// The parameter as an inline declaration.
    pub fn to_inline(&self) -> PropertyNode {
        let mut node = PropertyNode::new(&self.name, self.ty.clone(), PropertyVariant::Inline);
        node.default = self.default.clone();
        node.optional = self.optional;
        node.doc = self.doc.clone();
        node
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodNode {
    pub name: String,
    pub params: Vec<ParameterNode>,
    pub returns: TypeNode,
    pub shape: MethodShape,
    /// Render only the signature.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub signature_only: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_event: bool,
    pub body: Vec<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl MethodNode {
    pub fn new(name: impl Into<String>, shape: MethodShape, returns: TypeNode) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns,
            shape,
            signature_only: false,
            is_event: false,
            body: Vec::new(),
            doc: None,
        }
    }

    /// A constructor node.
    pub fn constructor(params: Vec<ParameterNode>) -> Self {
        let mut node = Self::new("constructor", MethodShape::Constructor, TypeNode::void());
        node.params = params;
        node
    }

    pub fn with_params(mut self, params: Vec<ParameterNode>) -> Self {
        self.params = params;
        self
    }

    pub fn with_body(mut self, body: Vec<Statement>) -> Self {
        self.body = body;
        self
    }

    /// Methods a hand-authored subclass is expected to override.
    pub fn is_overridable(&self) -> bool {
        match self.shape {
            MethodShape::VirtualStub => true,
            MethodShape::SocketClientCall => !self.is_event,
            _ => false,
        }
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Builtin;

    #[test]
    fn test_assignment_shorthand() {
        assert!(PropertyNode::assignment("id", "id").is_shorthand());
        assert!(!PropertyNode::assignment("id", "other").is_shorthand());
        let simple = PropertyNode::new("id", TypeNode::any(), PropertyVariant::Simple);
        assert!(!simple.is_shorthand());
    }

    #[test]
    fn test_reactive_variants() {
        assert!(PropertyVariant::Observable.is_reactive());
        assert!(PropertyVariant::Dependent.is_reactive());
        assert!(PropertyVariant::ObservableCollection.is_reactive());
        assert!(!PropertyVariant::Simple.is_reactive());
        assert!(!PropertyVariant::Attached.is_reactive());
    }

    #[test]
    fn test_parameter_to_inline() {
        let mut param = ParameterNode::new("count", TypeNode::builtin(Builtin::Number));
        param.optional = true;
        let inline = param.to_inline();
        assert_eq!(inline.variant, PropertyVariant::Inline);
        assert!(inline.optional);
        assert_eq!(inline.name, "count");
    }

    #[test]
    fn test_overridable_methods() {
        let stub = MethodNode::new("save", MethodShape::VirtualStub, TypeNode::void());
        assert!(stub.is_overridable());

        let mut event = MethodNode::new("joined", MethodShape::SocketClientCall, TypeNode::void());
        event.is_event = true;
        assert!(!event.is_overridable());
        event.is_event = false;
        assert!(event.is_overridable());

        let host = MethodNode::new("send", MethodShape::SocketHostCall, TypeNode::void());
        assert!(!host.is_overridable());
    }

    #[test]
    fn test_rpc_helpers() {
        assert_eq!(RpcCall::Stream.helper(), "rpcCallStream");
        assert_eq!(RpcCall::FireAndForget.helper(), "rpcCall");
        assert_eq!(RpcCall::Value.helper(), "rpcCallReturn");
    }
}
