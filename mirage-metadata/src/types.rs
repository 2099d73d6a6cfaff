//! Declarations of host types and their members.

use serde::Deserialize;

use crate::{HostType, Marked, Marker};

fn default_true() -> bool {
    true
}

/// The host-side shape of a declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    /// A value type. Value types other than enums are opaque on the target side.
    Struct,
    Enum,
    Interface,
}

/// A declared host type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    /// Qualified name; the namespace is everything before the last dot.
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    /// Abstract classes are never discovered as web services through the controller base.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Declaring assembly (defaults to the boundary assembly).
    pub assembly: Option<String>,
    pub base: Option<HostType>,
    #[serde(default)]
    pub interfaces: Vec<HostType>,
    #[serde(default)]
    pub generic_params: Vec<String>,
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Route prefix of a web service.
    pub route: Option<String>,
    /// Callback contract of a socket service.
    pub callback: Option<String>,
    pub doc: Option<String>,
    /// Enum members.
    #[serde(default)]
    pub members: Vec<EnumMember>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[serde(default)]
    pub constants: Vec<ConstantDecl>,
}

impl TypeDecl {
    /// The namespace part of the qualified name (empty for the global namespace).
    pub fn namespace(&self) -> &str {
        self.name.rsplit_once('.').map(|(ns, _)| ns).unwrap_or("")
    }

    /// The simple name without namespace.
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Enums and structs are value types.
    pub fn is_value_type(&self) -> bool {
        matches!(self.kind, TypeKind::Struct | TypeKind::Enum)
    }

    /// Enum members with their numeric values.
    ///
    /// A member without an explicit value takes the previous value plus one.
    pub fn enum_values(&self) -> Vec<(&str, i64)> {
        let mut next = 0;
        self.members
            .iter()
            .map(|member| {
                let value = member.value().unwrap_or(next);
                next = value + 1;
                (member.name(), value)
            })
            .collect()
    }

    /// Find a declared property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDecl> {
        self.properties.iter().find(|p| p.name == name)
    }
}

impl Marked for TypeDecl {
    fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// The simple name part of a qualified name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, n)| n).unwrap_or(name)
}

/// An enum member, written either as a bare name or with an explicit value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnumMember {
    Name(String),
    Valued { name: String, value: i64 },
}

impl EnumMember {
    pub fn name(&self) -> &str {
        match self {
            EnumMember::Name(name) => name,
            EnumMember::Valued { name, .. } => name,
        }
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            EnumMember::Name(_) => None,
            EnumMember::Valued { value, .. } => Some(*value),
        }
    }
}

/// A declared property.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: HostType,
    /// Read capability.
    #[serde(default = "default_true")]
    pub read: bool,
    /// Write capability.
    #[serde(default = "default_true")]
    pub write: bool,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Tracked inputs of a dependent property.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Explicit default value.
    pub default: Option<toml::Value>,
    pub doc: Option<String>,
}

impl Marked for PropertyDecl {
    fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// HTTP verb of a web method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    #[default]
    #[serde(alias = "get")]
    Get,
    #[serde(alias = "post")]
    Post,
    #[serde(alias = "put")]
    Put,
    #[serde(alias = "delete")]
    Delete,
    #[serde(alias = "patch")]
    Patch,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
        }
    }
}

/// A declared method.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,
    /// Return type (`void` when omitted).
    pub returns: Option<HostType>,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    /// Route template of a web method.
    pub route: Option<String>,
    pub verb: Option<HttpVerb>,
    /// Authorization policy passed to the request helper.
    pub policy: Option<String>,
    pub doc: Option<String>,
}

impl MethodDecl {
    /// The declared return type, `void` when omitted.
    pub fn return_type(&self) -> HostType {
        self.returns
            .clone()
            .unwrap_or_else(|| HostType::named("void"))
    }
}

impl Marked for MethodDecl {
    fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// A declared method or constructor parameter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: HostType,
    pub default: Option<toml::Value>,
    /// Output parameter (passed by reference).
    #[serde(default)]
    pub out: bool,
    pub doc: Option<String>,
}

/// A declared constructor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    pub doc: Option<String>,
}

impl Marked for ConstructorDecl {
    fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// A declared public static field.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantDecl {
    pub name: String,
    pub value: toml::Value,
    /// Whether the field is a compile-time literal. Non-literal fields are not projected.
    #[serde(default = "default_true")]
    pub literal: bool,
    #[serde(default)]
    pub markers: Vec<Marker>,
    pub doc: Option<String>,
}

impl Marked for ConstantDecl {
    fn markers(&self) -> &[Marker] {
        &self.markers
    }
}
