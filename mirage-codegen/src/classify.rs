//! Member classifiers: pure decisions over declared capabilities.

use mirage_core::{quote_single, toml_value_to_string};
use mirage_ir::{
    Builtin, ClassNode, MethodShape, ParameterNode, PropertyVariant, RpcCall, Statement, TypeNode,
};
use mirage_metadata::simple_name;

/// Everything the property classifier looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyTraits {
    pub read: bool,
    pub write: bool,
    pub is_static: bool,
    pub observable: bool,
    pub dependent: bool,
    pub collection: bool,
    pub attached: bool,
    /// The resolved type is an array or list.
    pub array_typed: bool,
    /// The resolved type is a string, number, boolean, date or enum.
    pub value_typed: bool,
    pub owner_view_model: bool,
    pub owner_definition_only: bool,
}

/// Pick a property's variant. First matching rule wins.
pub fn property_variant(t: PropertyTraits) -> PropertyVariant {
    if t.owner_definition_only {
        return PropertyVariant::Simple;
    }
    if !t.read {
        return PropertyVariant::WriteOnly;
    }
    if !t.write {
        if t.owner_view_model || t.dependent {
            return PropertyVariant::Dependent;
        }
        return PropertyVariant::ReadOnly;
    }
    if t.is_static {
        return PropertyVariant::Static;
    }
    // Collections are checked first: a view-model array is never a plain observable.
    if t.collection || (t.array_typed && t.owner_view_model) {
        return PropertyVariant::ObservableCollection;
    }
    if t.observable || t.owner_view_model {
        return PropertyVariant::Observable;
    }
    if t.attached && t.value_typed {
        return PropertyVariant::Attached;
    }
    PropertyVariant::Simple
}

/// Variants that render an initializer.
pub fn renders_default(variant: PropertyVariant) -> bool {
    matches!(
        variant,
        PropertyVariant::Simple
            | PropertyVariant::Static
            | PropertyVariant::Constant
            | PropertyVariant::Observable
            | PropertyVariant::ObservableCollection
            | PropertyVariant::Attached
    )
}

/// Check if a resolved type is value-like for the prototype-sharing rule.
pub fn is_value_typed(ty: &TypeNode) -> bool {
    match ty {
        TypeNode::Primitive { builtin } => matches!(
            builtin,
            Builtin::String | Builtin::Number | Builtin::Decimal | Builtin::Boolean | Builtin::Date
        ),
        TypeNode::ClassRef { default, .. } => default.is_some(),
        _ => false,
    }
}

/// The default literal of a property.
///
/// An explicit default wins over the type's canonical literal: booleans
/// render bare, enum-typed defaults render `Type.Member`, strings on
/// string-typed properties are quoted, anything else renders its string form.
pub fn default_literal(explicit: Option<&toml::Value>, ty: &TypeNode) -> Option<String> {
    let Some(value) = explicit else {
        return ty.default_literal();
    };
    let target = match ty {
        TypeNode::Nullable { inner } => inner.as_ref(),
        other => other,
    };
    match (value, target) {
        (toml::Value::Boolean(b), _) => Some(b.to_string()),
        (toml::Value::String(member), TypeNode::ClassRef { name, default: Some(_), .. }) => {
            Some(format!("{}.{}", name, simple_name(member)))
        }
        (toml::Value::String(s), TypeNode::Primitive { builtin })
            if matches!(builtin, Builtin::String | Builtin::Date | Builtin::Any) =>
        {
            Some(quote_single(s))
        }
        (other, _) => toml_value_to_string(other),
    }
}

/// Which side of a socket contract a member is projected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketSide {
    /// The class declaring the contract.
    Host,
    /// The callback contract implemented by the caller.
    Client,
}

pub fn socket_shape(side: SocketSide) -> MethodShape {
    match side {
        SocketSide::Host => MethodShape::SocketHostCall,
        SocketSide::Client => MethodShape::SocketClientCall,
    }
}

/// The transport helper for a resolved socket return type.
pub fn rpc_call(returns: &TypeNode) -> RpcCall {
    if returns.is(Builtin::Observable) {
        RpcCall::Stream
    } else if returns.is_void() {
        RpcCall::FireAndForget
    } else {
        RpcCall::Value
    }
}

/// Shape the declared return of a socket member.
///
/// `declared` is the resolved declared type; `inner` its payload when it is
/// an async or observable container. A container is kept as declared unless
/// `synchronous`, in which case the payload is returned bare. Any other
/// non-void return is wrapped in a promise, `synchronous` or not.
pub fn socket_return(declared: TypeNode, inner: Option<TypeNode>, synchronous: bool) -> TypeNode {
    if declared.is_void() {
        return declared;
    }
    match inner {
        Some(inner) if synchronous => inner,
        Some(_) => declared,
        None => TypeNode::builtin_generic(Builtin::Promise, vec![declared]),
    }
}

/// Synthesize a constructor body.
///
/// `base_constructors` holds the parameter names of each parent constructor,
/// or `None` when the parent is a primitive root that takes no `super` call.
/// The parent constructor forwarded to is the largest one whose parameter
/// names all appear among `params`.
pub fn constructor_body(
    class: &ClassNode,
    params: &[ParameterNode],
    base_constructors: Option<&[Vec<String>]>,
) -> Vec<Statement> {
    let mut body = Vec::new();
    let own: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();

    if let Some(base) = base_constructors {
        let args = base
            .iter()
            .filter(|names| names.iter().all(|n| own.contains(&n.as_str())))
            .max_by_key(|names| names.len())
            .cloned()
            .unwrap_or_default();
        body.push(Statement::SuperCall { args });
    }

    for property in &class.properties {
        if property.watched && property.variant != PropertyVariant::Attached {
            body.push(Statement::Subscribe {
                property: property.name.clone(),
            });
        }
    }

    let assignments: Vec<Statement> = params
        .iter()
        .filter_map(|param| {
            class
                .properties
                .iter()
                .find(|p| p.variant.is_assignable() && p.name.eq_ignore_ascii_case(&param.name))
                .map(|p| Statement::AssignIfPresent {
                    param: param.name.clone(),
                    property: p.name.clone(),
                })
        })
        .collect();
    if !assignments.is_empty() {
        body.push(Statement::Comment {
            text: format!("set properties in {}", class.name),
        });
        body.extend(assignments);
    }
    body
}

#[cfg(test)]
mod tests {
    use mirage_ir::{ClassId, ClassKind, PropertyNode};

    use super::*;

    fn rw() -> PropertyTraits {
        PropertyTraits {
            read: true,
            write: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_property_is_simple() {
        assert_eq!(property_variant(rw()), PropertyVariant::Simple);
    }

    #[test]
    fn test_definition_only_wins() {
        let t = PropertyTraits {
            owner_definition_only: true,
            write: false,
            ..rw()
        };
        assert_eq!(property_variant(t), PropertyVariant::Simple);
    }

    #[test]
    fn test_capability_variants() {
        assert_eq!(
            property_variant(PropertyTraits { read: false, ..rw() }),
            PropertyVariant::WriteOnly
        );
        assert_eq!(
            property_variant(PropertyTraits { write: false, ..rw() }),
            PropertyVariant::ReadOnly
        );
        assert_eq!(
            property_variant(PropertyTraits {
                write: false,
                dependent: true,
                ..rw()
            }),
            PropertyVariant::Dependent
        );
        assert_eq!(
            property_variant(PropertyTraits {
                write: false,
                owner_view_model: true,
                ..rw()
            }),
            PropertyVariant::Dependent
        );
    }

    #[test]
    fn test_reactive_variants() {
        assert_eq!(
            property_variant(PropertyTraits {
                owner_view_model: true,
                ..rw()
            }),
            PropertyVariant::Observable
        );
        assert_eq!(
            property_variant(PropertyTraits {
                observable: true,
                ..rw()
            }),
            PropertyVariant::Observable
        );
        assert_eq!(
            property_variant(PropertyTraits {
                owner_view_model: true,
                array_typed: true,
                ..rw()
            }),
            PropertyVariant::ObservableCollection
        );
        assert_eq!(
            property_variant(PropertyTraits {
                collection: true,
                ..rw()
            }),
            PropertyVariant::ObservableCollection
        );
    }

    #[test]
    fn test_attached_requires_value_type() {
        let attached = PropertyTraits {
            attached: true,
            value_typed: true,
            ..rw()
        };
        assert_eq!(property_variant(attached), PropertyVariant::Attached);
        let reference = PropertyTraits {
            value_typed: false,
            ..attached
        };
        assert_eq!(property_variant(reference), PropertyVariant::Simple);
    }

    #[test]
    fn test_static_property() {
        assert_eq!(
            property_variant(PropertyTraits {
                is_static: true,
                ..rw()
            }),
            PropertyVariant::Static
        );
    }

    #[test]
    fn test_default_literals() {
        let string = TypeNode::builtin(Builtin::String);
        let number = TypeNode::builtin(Builtin::Number);
        let color = TypeNode::class_ref(
            ClassId::new(3),
            "Contoso.Color",
            Some("Contoso.Color.Red".into()),
        );

        assert_eq!(default_literal(None, &string).as_deref(), Some("''"));
        assert_eq!(default_literal(None, &color).as_deref(), Some("Contoso.Color.Red"));
        assert_eq!(default_literal(None, &TypeNode::void()), None);

        let text = toml::Value::String("it's".into());
        assert_eq!(
            default_literal(Some(&text), &string).as_deref(),
            Some("'it\\'s'")
        );
        let flag = toml::Value::Boolean(true);
        assert_eq!(
            default_literal(Some(&flag), &TypeNode::builtin(Builtin::Boolean)).as_deref(),
            Some("true")
        );
        let member = toml::Value::String("Color.Green".into());
        assert_eq!(
            default_literal(Some(&member), &color).as_deref(),
            Some("Contoso.Color.Green")
        );
        let count = toml::Value::Integer(7);
        assert_eq!(default_literal(Some(&count), &number).as_deref(), Some("7"));
    }

    #[test]
    fn test_rpc_call_from_return_shape() {
        let stream =
            TypeNode::builtin_generic(Builtin::Observable, vec![TypeNode::builtin(Builtin::String)]);
        assert_eq!(rpc_call(&stream), RpcCall::Stream);
        assert_eq!(rpc_call(&TypeNode::void()), RpcCall::FireAndForget);
        let promise =
            TypeNode::builtin_generic(Builtin::Promise, vec![TypeNode::builtin(Builtin::Number)]);
        assert_eq!(rpc_call(&promise), RpcCall::Value);
    }

    #[test]
    fn test_socket_return() {
        let number = TypeNode::builtin(Builtin::Number);
        let task = TypeNode::builtin_generic(Builtin::Promise, vec![number.clone()]);

        assert_eq!(
            socket_return(number.clone(), None, false).to_string(),
            "Promise<number>"
        );
        assert_eq!(
            socket_return(number.clone(), None, true).to_string(),
            "Promise<number>"
        );
        assert_eq!(
            socket_return(task.clone(), Some(number.clone()), false),
            task
        );
        assert_eq!(socket_return(task, Some(number.clone()), true), number);
        assert!(socket_return(TypeNode::void(), None, false).is_void());
    }

    fn person() -> ClassNode {
        let mut class = ClassNode::new("Contoso.Person", ClassKind::ViewModel);
        let mut name = PropertyNode::new(
            "Name",
            TypeNode::builtin(Builtin::String),
            PropertyVariant::Observable,
        );
        name.watched = true;
        class.properties.push(name);
        class.properties.push(PropertyNode::new(
            "Count",
            TypeNode::builtin(Builtin::Number),
            PropertyVariant::Static,
        ));
        class
    }

    fn params(names: &[&str]) -> Vec<ParameterNode> {
        names
            .iter()
            .map(|n| ParameterNode::new(*n, TypeNode::any()))
            .collect()
    }

    #[test]
    fn test_constructor_body_on_primitive_parent() {
        let body = constructor_body(&person(), &params(&["name", "count"]), None);
        assert_eq!(
            body,
            vec![
                Statement::Subscribe {
                    property: "Name".into()
                },
                Statement::Comment {
                    text: "set properties in Person".into()
                },
                Statement::AssignIfPresent {
                    param: "name".into(),
                    property: "Name".into()
                },
            ]
        );
    }

    #[test]
    fn test_watched_properties_subscribe_unless_attached() {
        let mut class = ClassNode::new("Contoso.Gauge", ClassKind::Class);
        for (name, variant) in [
            ("Level", PropertyVariant::Simple),
            ("Peak", PropertyVariant::ReadOnly),
            ("Unit", PropertyVariant::Attached),
        ] {
            let mut property = PropertyNode::new(name, TypeNode::builtin(Builtin::Number), variant);
            property.watched = true;
            class.properties.push(property);
        }

        let body = constructor_body(&class, &[], None);
        assert_eq!(
            body,
            vec![
                Statement::Subscribe {
                    property: "Level".into()
                },
                Statement::Subscribe {
                    property: "Peak".into()
                },
            ]
        );
    }

    #[test]
    fn test_constructor_forwards_largest_matching_base() {
        let base = vec![
            vec![],
            vec!["name".to_string()],
            vec!["name".to_string(), "age".to_string()],
        ];
        let body = constructor_body(&person(), &params(&["name"]), Some(&base));
        assert_eq!(
            body[0],
            Statement::SuperCall {
                args: vec!["name".into()]
            }
        );

        let body = constructor_body(&person(), &params(&["other"]), Some(&base[1..]));
        assert_eq!(body[0], Statement::SuperCall { args: vec![] });
    }
}
