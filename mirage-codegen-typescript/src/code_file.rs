//! CodeFile abstraction for structured TypeScript file generation.
//!
//! A file is a header comment followed by body elements. Body elements are
//! rendered in two passes: every declaration first, then every reference
//! fragment.

use mirage_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a generated TypeScript file.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .header("Generated by mirage")
///     .add(Prelude)
///     .add(Namespace::new(&graph, ns))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
    references: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `//` comment line to the file header.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.push(&node);
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.push(&node);
        }
        self
    }

    fn push(&mut self, node: &impl Renderable) {
        let fragments = node.to_fragments();
        if !fragments.is_empty() {
            self.body.push(fragments);
        }
        let references = node.to_reference_fragments();
        if !references.is_empty() {
            self.references.push(references);
        }
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for line in &self.header {
            builder.push_line(&format!("// {}", line));
        }

        let sections = self.body.iter().chain(&self.references);
        for (i, fragments) in sections.enumerate() {
            if i > 0 || !self.header.is_empty() {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str);

    impl Renderable for Line {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line(self.0)]
        }
    }

    struct Wired;

    impl Renderable for Wired {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line("class A {}")]
        }

        fn to_reference_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line("A.link = B;")]
        }
    }

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_header_only() {
        let file = CodeFile::new().header("Generated by mirage");
        assert_eq!(file.render(), "// Generated by mirage\n");
    }

    #[test]
    fn test_blank_lines_between_body() {
        let file = CodeFile::new()
            .header("Generated by mirage")
            .add(Line("const a = 1;"))
            .add(Line("const b = 2;"));
        assert_eq!(
            file.render(),
            "// Generated by mirage\n\nconst a = 1;\n\nconst b = 2;\n"
        );
    }

    #[test]
    fn test_references_follow_all_declarations() {
        let file = CodeFile::new().add(Wired).add(Line("class B {}"));
        assert_eq!(
            file.render(),
            "class A {}\n\nclass B {}\n\nA.link = B;\n"
        );
    }

    #[test]
    fn test_nested_indent() {
        struct Block;
        impl Renderable for Block {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::braced("namespace App {", vec![CodeFragment::line("x;")])]
            }
        }
        let file = CodeFile::new().add(Block);
        assert_eq!(file.render(), "namespace App {\n  x;\n}\n");
    }
}
