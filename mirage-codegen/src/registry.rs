//! The builtin type registry: host type keys mapped to target builtins.
//!
//! The table is built once on first use and never mutated. A miss means the
//! key is not a builtin; it is not an error.

use std::sync::LazyLock;

use indexmap::IndexMap;
use mirage_ir::{Builtin, TypeNode};
use mirage_metadata::simple_name;

/// Non-generic host types.
static PRIMITIVES: LazyLock<IndexMap<&'static str, Builtin>> = LazyLock::new(|| {
    let mut table = IndexMap::new();
    let mut add = |keys: &[&'static str], builtin: Builtin| {
        for key in keys {
            table.insert(*key, builtin);
        }
    };

    add(
        &[
            "string",
            "System.String",
            "char",
            "System.Char",
            "Guid",
            "System.Guid",
            "Uri",
            "System.Uri",
            "TimeSpan",
            "System.TimeSpan",
        ],
        Builtin::String,
    );
    add(
        &[
            "byte",
            "System.Byte",
            "sbyte",
            "System.SByte",
            "short",
            "System.Int16",
            "ushort",
            "System.UInt16",
            "int",
            "System.Int32",
            "uint",
            "System.UInt32",
            "long",
            "System.Int64",
            "ulong",
            "System.UInt64",
        ],
        Builtin::Number,
    );
    add(
        &[
            "float",
            "System.Single",
            "double",
            "System.Double",
            "decimal",
            "System.Decimal",
        ],
        Builtin::Decimal,
    );
    add(&["bool", "System.Boolean"], Builtin::Boolean);
    add(
        &[
            "DateTime",
            "System.DateTime",
            "DateTimeOffset",
            "System.DateTimeOffset",
        ],
        Builtin::Date,
    );
    add(&["object", "System.Object", "dynamic"], Builtin::Any);
    add(
        &[
            "Action",
            "System.Action",
            "Delegate",
            "System.Delegate",
            "MulticastDelegate",
            "System.MulticastDelegate",
        ],
        Builtin::Function,
    );
    add(&["void", "System.Void", "Unit"], Builtin::Void);
    add(&["Array", "System.Array"], Builtin::Array);
    add(&["ArrayBuffer", "byte[]"], Builtin::ByteArray);
    add(
        &[
            "IActionResult",
            "ActionResult",
            "Microsoft.AspNetCore.Mvc.IActionResult",
            "Microsoft.AspNetCore.Mvc.ActionResult",
        ],
        Builtin::ApiResult,
    );
    add(&["DataTable", "System.Data.DataTable"], Builtin::DataTable);
    table
});

/// Generic definitions, keyed by simple name.
static GENERICS: LazyLock<IndexMap<&'static str, Builtin>> = LazyLock::new(|| {
    let mut table = IndexMap::new();
    let mut add = |keys: &[&'static str], builtin: Builtin| {
        for key in keys {
            table.insert(*key, builtin);
        }
    };

    add(&["IEnumerable"], Builtin::Enumerable);
    add(
        &[
            "List",
            "IList",
            "ICollection",
            "IReadOnlyList",
            "IReadOnlyCollection",
            "ObservableCollection",
            "FSharpList",
        ],
        Builtin::Array,
    );
    add(
        &[
            "Dictionary",
            "IDictionary",
            "IReadOnlyDictionary",
            "FSharpMap",
        ],
        Builtin::Map,
    );
    add(&["HashSet", "ISet", "FSharpSet"], Builtin::Set);
    add(&["Queue"], Builtin::Queue);
    add(&["Task", "ValueTask", "FSharpAsync"], Builtin::Promise);
    add(&["Nullable", "FSharpOption"], Builtin::Nullable);
    add(&["IObservable"], Builtin::Observable);
    add(&["ActionResult"], Builtin::ApiResult);
    add(&["Func"], Builtin::Function);
    table
});

/// Namespaces whose generic definitions are matched by simple name.
const HOST_NAMESPACES: &[&str] = &["System.", "Microsoft.", "FSharp."];

/// Look up a non-generic host type.
pub fn lookup(key: &str) -> Option<TypeNode> {
    lookup_builtin(key).map(TypeNode::builtin)
}

/// The builtin for a non-generic host type key.
pub fn lookup_builtin(key: &str) -> Option<Builtin> {
    PRIMITIVES.get(key).copied()
}

/// The builtin a generic definition maps to (`List` and `System.Collections.Generic.List` alike).
pub fn lookup_generic(definition: &str) -> Option<Builtin> {
    if let Some(builtin) = GENERICS.get(definition) {
        return Some(*builtin);
    }
    if is_host_library(definition) {
        return GENERICS.get(simple_name(definition)).copied();
    }
    None
}

/// Check if a name lives in a well-known host library namespace.
pub fn is_host_library(name: &str) -> bool {
    HOST_NAMESPACES.iter().any(|ns| name.starts_with(ns))
}

/// Check if a type name is known to the registry in either table.
pub fn is_known(name: &str) -> bool {
    lookup_builtin(name).is_some() || lookup_generic(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_lookup() {
        assert_eq!(lookup_builtin("string"), Some(Builtin::String));
        assert_eq!(lookup_builtin("System.Guid"), Some(Builtin::String));
        assert_eq!(lookup_builtin("long"), Some(Builtin::Number));
        assert_eq!(lookup_builtin("double"), Some(Builtin::Decimal));
        assert_eq!(lookup_builtin("DateTimeOffset"), Some(Builtin::Date));
        assert_eq!(lookup_builtin("object"), Some(Builtin::Any));
        assert_eq!(lookup_builtin("Action"), Some(Builtin::Function));
        assert_eq!(lookup("void"), Some(TypeNode::void()));
    }

    #[test]
    fn test_unknown_key_is_not_builtin() {
        assert_eq!(lookup("Contoso.Person"), None);
        assert_eq!(lookup_generic("Contoso.Page"), None);
        assert!(!is_known("Person"));
    }

    #[test]
    fn test_generic_lookup_by_simple_name() {
        assert_eq!(lookup_generic("List"), Some(Builtin::Array));
        assert_eq!(
            lookup_generic("System.Collections.Generic.Dictionary"),
            Some(Builtin::Map)
        );
        assert_eq!(
            lookup_generic("System.Threading.Tasks.Task"),
            Some(Builtin::Promise)
        );
        assert_eq!(lookup_generic("IObservable"), Some(Builtin::Observable));
        assert_eq!(lookup_generic("Contoso.List"), None);
    }

    #[test]
    fn test_canonical_defaults() {
        let default = |key: &str| lookup(key).and_then(|t| t.default_literal());
        assert_eq!(default("string").as_deref(), Some("''"));
        assert_eq!(default("int").as_deref(), Some("0"));
        assert_eq!(default("bool").as_deref(), Some("false"));
        assert_eq!(default("DateTime").as_deref(), Some("null"));
        assert_eq!(default("Action").as_deref(), Some("function() {}"));
        assert_eq!(default("void"), None);
    }
}
