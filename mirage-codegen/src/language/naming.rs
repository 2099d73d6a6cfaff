//! Naming conventions for target languages.

/// Language-specific naming rules.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word used as a parameter (e.g., "class" -> "_class")
    pub escape_reserved: fn(&str) -> String,
}

/// TypeScript naming: reserved words used as bindings get a `_` prefix.
pub const TYPESCRIPT: NamingConvention = NamingConvention {
    reserved_words: TYPESCRIPT_RESERVED,
    escape_reserved: escape_underscore,
};

const TYPESCRIPT_RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with", "implements", "interface", "let", "package",
    "private", "protected", "public", "static", "yield", "await",
];

fn escape_underscore(name: &str) -> String {
    format!("_{}", name)
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Check if `name` is a plain identifier: a letter, `_` or `$`, then letters, digits, `_` or `$`.
    pub fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
            _ => return false,
        }
        chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    }
}
