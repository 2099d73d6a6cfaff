//! Resolved target types.

use serde::Serialize;

use crate::{Builtin, ClassId};

/// A resolved target type.
///
/// Class references carry their rendered name, so two nodes resolved from the
/// same host type render identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeNode {
    Primitive { builtin: Builtin },
    /// An array of the element type.
    Array { element: Box<TypeNode> },
    /// A generic instantiation.
    Generic {
        base: Box<TypeNode>,
        args: Vec<TypeNode>,
    },
    Nullable { inner: Box<TypeNode> },
    Union { cases: Vec<TypeNode> },
    /// A reference to a generated class or enum.
    ClassRef {
        id: ClassId,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
}

impl TypeNode {
    pub fn builtin(builtin: Builtin) -> Self {
        Self::Primitive { builtin }
    }

    pub fn any() -> Self {
        Self::builtin(Builtin::Any)
    }

    pub fn void() -> Self {
        Self::builtin(Builtin::Void)
    }

    pub fn array(element: TypeNode) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    pub fn generic(base: TypeNode, args: Vec<TypeNode>) -> Self {
        Self::Generic {
            base: Box::new(base),
            args,
        }
    }

    /// A generic instantiation of a builtin such as `Promise<T>`.
    pub fn builtin_generic(builtin: Builtin, args: Vec<TypeNode>) -> Self {
        Self::generic(Self::builtin(builtin), args)
    }

    pub fn nullable(inner: TypeNode) -> Self {
        Self::Nullable {
            inner: Box::new(inner),
        }
    }

    pub fn class_ref(id: ClassId, name: impl Into<String>, default: Option<String>) -> Self {
        Self::ClassRef {
            id,
            name: name.into(),
            default,
        }
    }

    /// The builtin at the head of this type, looking through generic instantiations.
    pub fn head_builtin(&self) -> Option<Builtin> {
        match self {
            Self::Primitive { builtin } => Some(*builtin),
            Self::Array { .. } => Some(Builtin::Array),
            Self::Generic { base, .. } => base.head_builtin(),
            Self::Nullable { .. } => Some(Builtin::Nullable),
            _ => None,
        }
    }

    /// Check if this type is `builtin` or an instantiation of it.
    pub fn is(&self, builtin: Builtin) -> bool {
        self.head_builtin() == Some(builtin)
    }

    pub fn is_void(&self) -> bool {
        self.is(Builtin::Void)
    }

    /// Arrays, including list-shaped generic collections.
    pub fn is_array(&self) -> bool {
        self.is(Builtin::Array)
    }

    /// The element type of an array.
    pub fn element(&self) -> Option<&TypeNode> {
        match self {
            Self::Array { element } => Some(element),
            Self::Generic { base, args } if base.is(Builtin::Array) => args.first(),
            _ => None,
        }
    }

    /// The single type argument of a generic instantiation.
    pub fn first_arg(&self) -> Option<&TypeNode> {
        match self {
            Self::Generic { args, .. } => args.first(),
            Self::Array { element } => Some(element),
            Self::Nullable { inner } => Some(inner),
            _ => None,
        }
    }

    /// The canonical default literal of this type.
    ///
    /// Generic instantiations take the default of their definition.
    pub fn default_literal(&self) -> Option<String> {
        match self {
            Self::Primitive { builtin } => builtin.default_literal().map(str::to_string),
            Self::Array { .. } => Builtin::Array.default_literal().map(str::to_string),
            Self::Generic { base, .. } => base.default_literal(),
            Self::Nullable { .. } | Self::Union { .. } => Some("null".to_string()),
            Self::ClassRef { default, .. } => {
                Some(default.clone().unwrap_or_else(|| "null".to_string()))
            }
        }
    }

    /// The leaf types this type depends on, in first-seen order.
    ///
    /// A generic instantiation depends on its arguments only.
    pub fn dependencies(&self) -> Vec<&TypeNode> {
        let mut deps = Vec::new();
        self.collect_dependencies(&mut deps);
        deps
    }

    fn collect_dependencies<'a>(&'a self, deps: &mut Vec<&'a TypeNode>) {
        match self {
            Self::Primitive { .. } | Self::ClassRef { .. } => {
                if !deps.contains(&self) {
                    deps.push(self);
                }
            }
            Self::Array { element } => element.collect_dependencies(deps),
            Self::Generic { args, .. } => {
                for arg in args {
                    arg.collect_dependencies(deps);
                }
            }
            Self::Nullable { inner } => inner.collect_dependencies(deps),
            Self::Union { cases } => {
                for case in cases {
                    case.collect_dependencies(deps);
                }
            }
        }
    }

    /// Generated classes this type references.
    pub fn class_refs(&self) -> Vec<ClassId> {
        let mut ids = Vec::new();
        self.collect_class_refs(&mut ids);
        ids
    }

    fn collect_class_refs(&self, ids: &mut Vec<ClassId>) {
        match self {
            Self::ClassRef { id, .. } => {
                if !ids.contains(id) {
                    ids.push(*id);
                }
            }
            Self::Primitive { .. } => {}
            Self::Array { element } => element.collect_class_refs(ids),
            Self::Generic { base, args } => {
                base.collect_class_refs(ids);
                for arg in args {
                    arg.collect_class_refs(ids);
                }
            }
            Self::Nullable { inner } => inner.collect_class_refs(ids),
            Self::Union { cases } => {
                for case in cases {
                    case.collect_class_refs(ids);
                }
            }
        }
    }
}

impl std::fmt::Display for TypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive { builtin } => write!(f, "{}", builtin),
            Self::Array { element } => write!(f, "Array<{}>", element),
            Self::Generic { base, args } => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            Self::Nullable { inner } => write!(f, "Nullable<{}>", inner),
            Self::Union { cases } => {
                for (i, case) in cases.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", case)?;
                }
                Ok(())
            }
            Self::ClassRef { name, .. } => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> TypeNode {
        TypeNode::class_ref(ClassId::new(4), "App.Person", None)
    }

    #[test]
    fn test_generic_renders_without_spaces() {
        let map = TypeNode::builtin_generic(
            Builtin::Map,
            vec![TypeNode::builtin(Builtin::String), person()],
        );
        assert_eq!(map.to_string(), "Map<string,App.Person>");
    }

    #[test]
    fn test_generic_dependencies_are_union_of_args() {
        let a = person();
        let b = TypeNode::array(TypeNode::builtin(Builtin::Number));
        let map = TypeNode::builtin_generic(Builtin::Map, vec![a.clone(), b.clone()]);

        let mut expected = a.dependencies();
        expected.extend(b.dependencies());
        assert_eq!(map.dependencies(), expected);
        assert!(!map.dependencies().contains(&&TypeNode::builtin(Builtin::Map)));
    }

    #[test]
    fn test_dependencies_deduplicated() {
        let union = TypeNode::Union {
            cases: vec![person(), TypeNode::array(person())],
        };
        assert_eq!(union.dependencies(), vec![&person()]);
        assert_eq!(union.to_string(), "App.Person | Array<App.Person>");
    }

    #[test]
    fn test_generic_default_comes_from_definition() {
        let list = TypeNode::builtin_generic(Builtin::Array, vec![person()]);
        assert_eq!(list.default_literal().as_deref(), Some("[]"));
        let promise = TypeNode::builtin_generic(Builtin::Promise, vec![person()]);
        assert_eq!(promise.default_literal().as_deref(), Some("null"));
        assert!(list.is_array());
        assert_eq!(list.element(), Some(&person()));
    }

    #[test]
    fn test_enum_ref_default() {
        let color = TypeNode::class_ref(ClassId::new(5), "App.Color", Some("App.Color.Red".into()));
        assert_eq!(color.default_literal().as_deref(), Some("App.Color.Red"));
        assert_eq!(person().default_literal().as_deref(), Some("null"));
    }

    #[test]
    fn test_class_refs_include_generic_base() {
        let page = TypeNode::generic(
            TypeNode::class_ref(ClassId::new(7), "App.Page", None),
            vec![person()],
        );
        assert_eq!(page.class_refs(), vec![ClassId::new(7), ClassId::new(4)]);
        assert_eq!(page.to_string(), "App.Page<App.Person>");
    }
}
