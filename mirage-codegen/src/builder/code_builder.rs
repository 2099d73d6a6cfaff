//! Code builder for generating properly indented declarations.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented code from render-tree nodes.
///
/// # Example
///
/// ```
/// use mirage_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
///
/// struct Color;
///
/// impl Renderable for Color {
///     fn to_fragments(&self) -> Vec<CodeFragment> {
///         vec![CodeFragment::braced(
///             "export enum Color {",
///             vec![CodeFragment::line("Red = 0,")],
///         )]
///     }
/// }
///
/// let mut builder = CodeBuilder::typescript();
/// builder.emit(&Color);
/// assert_eq!(builder.build(), "export enum Color {\n  Red = 0,\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    fn push_dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Add a JSDoc comment: `/** text */` for one line, a starred block otherwise.
    fn push_jsdoc(&mut self, lines: &[String]) {
        match lines {
            [] => {}
            [single] => {
                self.write_indent();
                self.buffer.push_str("/** ");
                self.buffer.push_str(single);
                self.buffer.push_str(" */\n");
            }
            _ => {
                self.push_line("/**");
                for line in lines {
                    self.write_indent();
                    if line.is_empty() {
                        self.buffer.push_str(" *\n");
                    } else {
                        self.buffer.push_str(" * ");
                        self.buffer.push_str(line);
                        self.buffer.push('\n');
                    }
                }
                self.push_line(" */");
            }
        }
    }

    /// Emit the declaration pass of a render-tree node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::JsDoc(lines) => {
                self.push_jsdoc(&lines);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fragments(Vec<CodeFragment>);

    impl Renderable for Fragments {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            self.0.clone()
        }
    }

    fn render(fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&Fragments(fragments));
        builder.build()
    }

    #[test]
    fn test_basic_line() {
        assert_eq!(render(vec![CodeFragment::line("let x = 1;")]), "let x = 1;\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = render(vec![CodeFragment::braced(
            "namespace App {",
            vec![CodeFragment::braced(
                "export class Person {",
                vec![CodeFragment::line("Age: number = 0;")],
            )],
        )]);
        assert_eq!(
            code,
            "namespace App {\n  export class Person {\n    Age: number = 0;\n  }\n}\n"
        );
    }

    #[test]
    fn test_block_with_custom_close() {
        let code = render(vec![CodeFragment::block(
            "Count = {",
            vec![CodeFragment::line("read: 1,")],
            Some("};".to_string()),
        )]);
        assert_eq!(code, "Count = {\n  read: 1,\n};\n");
    }

    #[test]
    fn test_single_line_jsdoc() {
        let code = render(vec![
            CodeFragment::jsdoc("A person"),
            CodeFragment::line("export class Person {}"),
        ]);
        assert_eq!(code, "/** A person */\nexport class Person {}\n");
    }

    #[test]
    fn test_multi_line_jsdoc() {
        let code = render(vec![CodeFragment::braced(
            "export class Store {",
            vec![CodeFragment::jsdoc_lines(vec![
                "Find an item".to_string(),
                String::new(),
                "@param id the key".to_string(),
            ])],
        )]);
        assert_eq!(
            code,
            "export class Store {\n  /**\n   * Find an item\n   *\n   * @param id the key\n   */\n}\n"
        );
    }

    #[test]
    fn test_blank_fragment() {
        let code = render(vec![
            CodeFragment::line("a;"),
            CodeFragment::blank(),
            CodeFragment::line("b;"),
        ]);
        assert_eq!(code, "a;\n\nb;\n");
    }
}
