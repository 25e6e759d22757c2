//! Code builder utility for generating properly indented code.

/// One indent level of C#.
const INDENT: &str = "    ";

/// Builder for indented source text.
///
/// Lines always end with `\n`. Blank lines carry no indentation. Each level
/// indents by four spaces.
///
/// # Example
///
/// ```
/// use pocogen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// builder
///     .push_line("class Foo")
///     .push_line("{")
///     .push_indent()
///     .push_line("public int Bar { get; set; }")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "class Foo\n{\n    public int Bar { get; set; }\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indentation level zero.
    pub fn csharp() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a brace-delimited block: `header`, `{`, the indented body, `}`.
    pub fn push_braced<F>(&mut self, header: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_line("{").push_indent();
        body(self);
        self.push_dedent().push_line("}")
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
