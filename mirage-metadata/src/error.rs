use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for metadata operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the metadata file content and name so validation code can build
/// spanned errors without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of the `nth` quoted occurrence of `name` in the source.
    pub fn find_span(&self, name: &str, nth: usize) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", name);
        self.src
            .match_indices(&quoted)
            .nth(nth)
            .map(|(offset, _)| SourceSpan::from((offset + 1, name.len())))
    }

    /// Create a parse error from a toml error.
    ///
    /// Type expressions are parsed during deserialization, so their failures
    /// arrive here as toml errors and are split out into their own variant.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        if source.message().starts_with("invalid type expression") {
            return Box::new(Error::InvalidTypeExpression {
                src: self.named_source(),
                span,
                message: source.message().to_string(),
            });
        }
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a duplicate type error pointing at both declarations.
    pub fn duplicate_type_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            first_span: self.find_span(&name, 0),
            second_span: self.find_span(&name, 1),
            name,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(mirage::io),
        help("pass the metadata file with '--metadata <path>'")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse metadata")]
    #[diagnostic(code(mirage::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(
        code(mirage::invalid_type_expression),
        help("type expressions look like 'string', 'List<Item>', 'int?', 'Item[]' or 'ref int'")
    )]
    InvalidTypeExpression {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("type '{name}' is declared more than once")]
    #[diagnostic(
        code(mirage::duplicate_type),
        help("qualified type names must be unique across all assemblies")
    )]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(mirage::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_span_nth_occurrence() {
        let ctx = SourceContext::new(
            "name = \"A.Person\"\nname = \"A.Person\"\n",
            "mirage.toml",
        );
        let first = ctx.find_span("A.Person", 0).unwrap();
        let second = ctx.find_span("A.Person", 1).unwrap();
        assert_eq!(first.offset(), 8);
        assert_eq!(first.len(), 8);
        assert!(second.offset() > first.offset());
        assert!(ctx.find_span("A.Person", 2).is_none());
    }

    #[test]
    fn test_duplicate_type_error_message() {
        let ctx = SourceContext::new("name = \"X\"\nname = \"X\"\n", "mirage.toml");
        let err = ctx.duplicate_type_error("X");
        assert_eq!(err.to_string(), "type 'X' is declared more than once");
    }
}
