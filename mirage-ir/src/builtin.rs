//! The closed vocabulary of well-known target types.

use serde::Serialize;

/// A well-known target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Builtin {
    String,
    Number,
    /// Floating point; renders as `number` with a `0.0` default.
    Decimal,
    Boolean,
    Date,
    /// The opaque "any object" sentinel.
    Any,
    Function,
    Void,
    Array,
    ByteArray,
    ByRef,
    Enumerable,
    Map,
    Set,
    Queue,
    Promise,
    ApiResult,
    Observable,
    DataTable,
    Nullable,
}

impl Builtin {
    /// The target type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Builtin::String => "string",
            Builtin::Number | Builtin::Decimal => "number",
            Builtin::Boolean => "boolean",
            Builtin::Date => "Date",
            Builtin::Any => "any",
            Builtin::Function => "Function",
            Builtin::Void => "void",
            Builtin::Array => "Array",
            Builtin::ByteArray => "ArrayBuffer",
            Builtin::ByRef => "ByRef",
            Builtin::Enumerable => "IEnumerable",
            Builtin::Map => "Map",
            Builtin::Set => "Set",
            Builtin::Queue => "collections.Queue",
            Builtin::Promise => "Promise",
            Builtin::ApiResult => "ApiResult",
            Builtin::Observable => "Rx.Observable",
            Builtin::DataTable => "DataTable",
            Builtin::Nullable => "Nullable",
        }
    }

    /// The canonical default literal. `None` only for `void`.
    pub fn default_literal(&self) -> Option<&'static str> {
        match self {
            Builtin::String => Some("''"),
            Builtin::Number => Some("0"),
            Builtin::Decimal => Some("0.0"),
            Builtin::Boolean => Some("false"),
            Builtin::Function => Some("function() {}"),
            Builtin::Array => Some("[]"),
            Builtin::Void => None,
            _ => Some("null"),
        }
    }

    /// Builtins that take type arguments.
    pub fn is_generic(&self) -> bool {
        matches!(
            self,
            Builtin::Array
                | Builtin::ByRef
                | Builtin::Enumerable
                | Builtin::Map
                | Builtin::Set
                | Builtin::Queue
                | Builtin::Promise
                | Builtin::Observable
                | Builtin::Nullable
        )
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_literals() {
        assert_eq!(Builtin::String.default_literal(), Some("''"));
        assert_eq!(Builtin::Number.default_literal(), Some("0"));
        assert_eq!(Builtin::Boolean.default_literal(), Some("false"));
        assert_eq!(Builtin::Date.default_literal(), Some("null"));
        assert_eq!(Builtin::Any.default_literal(), Some("null"));
        assert_eq!(Builtin::Nullable.default_literal(), Some("null"));
        assert_eq!(Builtin::Array.default_literal(), Some("[]"));
        assert_eq!(Builtin::Function.default_literal(), Some("function() {}"));
        assert_eq!(Builtin::Void.default_literal(), None);
    }

    #[test]
    fn test_decimal_renders_as_number() {
        assert_eq!(Builtin::Decimal.type_name(), "number");
        assert_eq!(Builtin::Decimal.default_literal(), Some("0.0"));
    }
}
