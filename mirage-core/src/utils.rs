//! Shared string helpers for projection and rendering.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a member name to camelCase (e.g., "GetItem" -> "getItem", "get_item" -> "getItem")
pub fn to_camel_case(s: &str) -> String {
    lower_first(&to_pascal_case(s))
}

/// Lowercase only the first character (e.g., "Items" -> "items")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Remove `suffix` from the end of `s`, ignoring ASCII case.
///
/// The name is returned unchanged when it is the suffix itself.
pub fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> &'a str {
    if s.len() > suffix.len() && s.is_char_boundary(s.len() - suffix.len()) {
        let (head, tail) = s.split_at(s.len() - suffix.len());
        if tail.eq_ignore_ascii_case(suffix) {
            return head;
        }
    }
    s
}

/// Wrap a string in single quotes, escaping backslashes, quotes and line breaks.
pub fn quote_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Convert a scalar TOML value to its string form.
///
/// Returns `None` for values that have no literal form (arrays, tables, datetimes).
pub fn toml_value_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(float_literal(*f)),
        toml::Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A float as a JavaScript number literal.
fn float_literal(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("IsActive"), "IsActive");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("GetItem"), "getItem");
        assert_eq!(to_camel_case("get_item"), "getItem");
        assert_eq!(to_camel_case("send"), "send");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Items"), "items");
        assert_eq!(lower_first("URL"), "uRL");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_strip_suffix_ignore_case() {
        assert_eq!(strip_suffix_ignore_case("ItemsController", "Controller"), "Items");
        assert_eq!(strip_suffix_ignore_case("Itemscontroller", "Controller"), "Items");
        assert_eq!(strip_suffix_ignore_case("Controller", "Controller"), "Controller");
        assert_eq!(strip_suffix_ignore_case("Chat", "Controller"), "Chat");
    }

    #[test]
    fn test_quote_single() {
        assert_eq!(quote_single(""), "''");
        assert_eq!(quote_single("abc"), "'abc'");
        assert_eq!(quote_single("it's"), "'it\\'s'");
        assert_eq!(quote_single("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_toml_value_to_string() {
        assert_eq!(
            toml_value_to_string(&toml::Value::String("hello".to_string())),
            Some("hello".to_string())
        );
        assert_eq!(
            toml_value_to_string(&toml::Value::Integer(42)),
            Some("42".to_string())
        );
        assert_eq!(
            toml_value_to_string(&toml::Value::Boolean(true)),
            Some("true".to_string())
        );
        assert_eq!(toml_value_to_string(&toml::Value::Array(vec![])), None);
    }

    #[test]
    fn test_float_literals() {
        let float = |f: f64| toml_value_to_string(&toml::Value::Float(f));
        assert_eq!(float(1.5).as_deref(), Some("1.5"));
        assert_eq!(float(f64::INFINITY).as_deref(), Some("Infinity"));
        assert_eq!(float(f64::NEG_INFINITY).as_deref(), Some("-Infinity"));
        assert_eq!(float(f64::NAN).as_deref(), Some("NaN"));
    }
}
