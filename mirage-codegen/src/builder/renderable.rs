//! Render-tree protocol: nodes produce [`CodeFragment`]s instead of writing text.
//!
//! Rendering runs in two passes. The declaration pass produces each node's
//! text, children before the parent's closing line. The reference pass runs
//! after every declaration has been emitted and is reserved for wiring that
//! does not depend on declaration order; nodes produce nothing there unless
//! they override [`Renderable::to_reference_fragments`].

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (a newline is appended).
    Line(String),
    Blank,
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A JSDoc comment; one line renders as `/** text */`.
    JsDoc(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(header, body, Some("}".to_string()))
    }

    /// A JSDoc comment split on line breaks.
    pub fn jsdoc(text: impl AsRef<str>) -> Self {
        Self::JsDoc(text.as_ref().lines().map(str::to_string).collect())
    }

    /// A JSDoc comment from prepared lines (e.g. a summary and `@param` tags).
    pub fn jsdoc_lines(lines: Vec<String>) -> Self {
        Self::JsDoc(lines)
    }
}

/// A render-tree node.
pub trait Renderable {
    /// Declaration pass.
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Reference pass, run after all declarations.
    fn to_reference_fragments(&self) -> Vec<CodeFragment> {
        Vec::new()
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }

    fn to_reference_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_reference_fragments()
    }
}
