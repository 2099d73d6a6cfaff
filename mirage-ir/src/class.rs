//! Class nodes.

use serde::Serialize;

use crate::{MethodNode, MethodShape, PropertyNode, PropertyVariant, TypeNode};

/// Index of a class node in the projection graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClassId(usize);

impl ClassId {
    /// The root `Object` sentinel every class ultimately derives from.
    pub const OBJECT: ClassId = ClassId(0);

    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// What a class node was generated as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Default,
    Enum,
    /// Data class.
    Class,
    Interface,
    ViewModel,
    WebService,
    SocketService,
}

impl ClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Default => "default",
            ClassKind::Enum => "enum",
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::ViewModel => "view-model",
            ClassKind::WebService => "web-service",
            ClassKind::SocketService => "socket-service",
        }
    }

    pub fn is_service(&self) -> bool {
        matches!(self, ClassKind::WebService | ClassKind::SocketService)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassFlags {
    /// A target-side root such as `Object`; constructors do not call `super` on it.
    pub is_primitive: bool,
    pub is_enum: bool,
    /// A projected interface: members are signatures only.
    pub definition_only: bool,
    /// Explicitly marked to render under the `Base`-suffixed name.
    pub is_base_layer: bool,
    /// Provided by the target runtime; never rendered.
    pub is_external: bool,
    /// A hand-authored subclass stub is requested.
    pub generate_template: bool,
}

/// An enum member with its numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMemberNode {
    pub name: String,
    pub value: i64,
}

/// One generated class, enum or interface.
#[derive(Debug, Clone, Serialize)]
pub struct ClassNode {
    /// Simple name.
    pub name: String,
    pub qualified_name: String,
    /// Namespace the node is registered under (empty for the global namespace).
    pub namespace: String,
    pub kind: ClassKind,
    pub parent: ClassId,
    /// Type arguments when the parent is a generic instantiation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parent_args: Vec<TypeNode>,
    pub interfaces: Vec<ClassId>,
    pub type_params: Vec<String>,
    pub properties: Vec<PropertyNode>,
    pub methods: Vec<MethodNode>,
    pub constructors: Vec<MethodNode>,
    pub members: Vec<EnumMemberNode>,
    pub flags: ClassFlags,
    /// Route prefix of a web service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl ClassNode {
    pub fn new(qualified_name: impl Into<String>, kind: ClassKind) -> Self {
        let qualified_name = qualified_name.into();
        let (namespace, name) = match qualified_name.rsplit_once('.') {
            Some((ns, name)) => (ns.to_string(), name.to_string()),
            None => (String::new(), qualified_name.clone()),
        };
        Self {
            name,
            qualified_name,
            namespace,
            kind,
            parent: ClassId::OBJECT,
            parent_args: Vec::new(),
            interfaces: Vec::new(),
            type_params: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            members: Vec::new(),
            flags: ClassFlags {
                is_enum: kind == ClassKind::Enum,
                definition_only: kind == ClassKind::Interface,
                ..ClassFlags::default()
            },
            route_prefix: None,
            doc: None,
        }
    }

    /// A runtime-provided node that is referenced but never rendered.
    pub fn external(qualified_name: impl Into<String>) -> Self {
        let mut node = Self::new(qualified_name, ClassKind::Default);
        node.flags.is_external = true;
        node
    }

    pub fn is_enum(&self) -> bool {
        self.flags.is_enum
    }

    pub fn is_definition_only(&self) -> bool {
        self.flags.definition_only
    }

    pub fn is_rendered(&self) -> bool {
        !self.flags.is_external && !self.flags.is_primitive
    }

    /// Check if the class needs a hand-authored subclass to be complete.
    ///
    /// Overridable methods and read-only or write-only properties are left
    /// unimplemented by the generated layer. A requested template stub
    /// extends the generated layer too.
    pub fn needs_base_layer(&self) -> bool {
        if self.flags.is_base_layer || self.flags.generate_template {
            return true;
        }
        if self.flags.definition_only {
            return false;
        }
        let overridable_method = self.methods.iter().any(MethodNode::is_overridable);
        let partial_property = self.properties.iter().any(|p| {
            matches!(
                p.variant,
                PropertyVariant::ReadOnly | PropertyVariant::WriteOnly | PropertyVariant::Dependent
            )
        });
        overridable_method || partial_property
    }

    /// The declared name: bare, or `Base`-suffixed when a subclass is expected.
    pub fn declared_name(&self) -> String {
        if self.needs_base_layer() {
            format!("{}Base", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Find a property by exact name.
    pub fn property(&self, name: &str) -> Option<&PropertyNode> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Methods with the given shape.
    pub fn methods_of(&self, shape: MethodShape) -> impl Iterator<Item = &MethodNode> {
        self.methods.iter().filter(move |m| m.shape == shape)
    }
}
