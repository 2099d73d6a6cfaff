//! The type mapper: host type expressions to [`TypeNode`]s.

use mirage_ir::{Builtin, ClassId, TypeNode};
use mirage_metadata::{HostType, Metadata, TypeDecl};

use crate::registry;

/// The seam through which the mapper asks for class nodes.
///
/// Implemented by the graph builder; `generate` must be idempotent per type.
pub trait ClassGenerator {
    fn generate(&mut self, decl: &TypeDecl) -> ClassId;
}

/// Resolves host types in the scope of one declaring type.
pub struct TypeMapper<'m> {
    metadata: &'m Metadata,
    /// Generic parameters in scope; they resolve to `any`.
    type_params: &'m [String],
}

impl<'m> TypeMapper<'m> {
    pub fn new(metadata: &'m Metadata) -> Self {
        Self {
            metadata,
            type_params: &[],
        }
    }

    pub fn with_type_params(mut self, type_params: &'m [String]) -> Self {
        self.type_params = type_params;
        self
    }

    /// Resolve a host type, generating class nodes for the boundary types it references.
    ///
    /// First match wins:
    /// 1. by-reference types and generic instantiations
    /// 2. builtin primitives
    /// 3. arrays
    /// 4. bare builtin generic definitions
    /// 5. enumerations
    /// 6. foreign and value types collapse to `any`
    /// 7. boundary classes and interfaces
    pub fn resolve(&self, ty: &HostType, generator: &mut impl ClassGenerator) -> TypeNode {
        match ty {
            HostType::ByRef(inner) => {
                TypeNode::builtin_generic(Builtin::ByRef, vec![self.resolve(inner, generator)])
            }
            HostType::Named { name, args } if !args.is_empty() => {
                self.resolve_instantiation(name, args, generator)
            }
            HostType::Nullable(inner) => TypeNode::nullable(self.resolve(inner, generator)),
            HostType::Union(cases) => TypeNode::Union {
                cases: cases.iter().map(|c| self.resolve(c, generator)).collect(),
            },
            HostType::Array(element) => {
                if matches!(element.name(), Some("byte" | "System.Byte")) {
                    TypeNode::builtin(Builtin::ByteArray)
                } else {
                    TypeNode::array(self.resolve(element, generator))
                }
            }
            HostType::Named { name, .. } => self.resolve_named(name, generator),
        }
    }

    fn resolve_instantiation(
        &self,
        name: &str,
        args: &[HostType],
        generator: &mut impl ClassGenerator,
    ) -> TypeNode {
        let resolved: Vec<TypeNode> = args.iter().map(|a| self.resolve(a, generator)).collect();

        if let Some(builtin) = registry::lookup_generic(name) {
            return match builtin {
                Builtin::Nullable => match resolved.into_iter().next() {
                    Some(inner) => TypeNode::nullable(inner),
                    None => TypeNode::any(),
                },
                Builtin::Array => {
                    TypeNode::array(resolved.into_iter().next().unwrap_or_else(TypeNode::any))
                }
                b if b.is_generic() => TypeNode::builtin_generic(b, resolved),
                b => TypeNode::builtin(b),
            };
        }

        match self.metadata.find(name) {
            Some(decl) if self.is_projected(decl) => {
                let base = self.class_ref(decl, generator);
                TypeNode::generic(base, resolved)
            }
            _ => TypeNode::any(),
        }
    }

    fn resolve_named(&self, name: &str, generator: &mut impl ClassGenerator) -> TypeNode {
        if self.type_params.iter().any(|p| p == name) {
            return TypeNode::any();
        }
        if let Some(node) = registry::lookup(name) {
            return node;
        }
        if let Some(builtin) = registry::lookup_generic(name) {
            return match builtin {
                Builtin::Array => TypeNode::array(TypeNode::any()),
                Builtin::Nullable => TypeNode::nullable(TypeNode::any()),
                b if b.is_generic() => TypeNode::builtin_generic(b, vec![TypeNode::any()]),
                b => TypeNode::builtin(b),
            };
        }

        let Some(decl) = self.metadata.find(name) else {
            return TypeNode::any();
        };
        if self.metadata.is_enum(decl) {
            return self.class_ref(decl, generator);
        }
        if !self.is_projected(decl) {
            return TypeNode::any();
        }
        self.class_ref(decl, generator)
    }

    /// Boundary reference types.
    fn is_projected(&self, decl: &TypeDecl) -> bool {
        self.metadata.in_boundary(decl) && !decl.is_value_type()
    }

    fn class_ref(&self, decl: &TypeDecl, generator: &mut impl ClassGenerator) -> TypeNode {
        let id = generator.generate(decl);
        let default = if self.metadata.is_enum(decl) {
            enum_default(decl)
        } else {
            None
        };
        TypeNode::class_ref(id, decl.name.clone(), default)
    }
}

/// `Full.Name.FirstMember`, from enum members or, for a class of constants, its first constant.
pub fn enum_default(decl: &TypeDecl) -> Option<String> {
    let first = decl
        .members
        .first()
        .map(|m| m.name())
        .or_else(|| decl.constants.first().map(|c| c.name.as_str()))?;
    Some(format!("{}.{}", decl.name, first))
}
