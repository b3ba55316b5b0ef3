//! # Source IR
//!
//! A generated file is a flat list of top-level [`Item`]s. Emitters build an
//! [`Artifact`]; only the renderer turns it into text.
//!
//! ```text
//! Packed + metadata → Emitter → Artifact (Vec<Item>) → Renderer → String
//! ```
//!
//! Keeping data arrays as typed [`Item::Array`] values (not pre-formatted
//! strings) means hex formatting happens in exactly one place.

use crate::mode::ElementType;

/// A top-level construct in a generated C/C++ file.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// `// text`
    Comment(String),

    /// `#include <header>`
    Include(String),

    /// `#define name value`
    Define { name: String, value: String },

    /// Empty line.
    Blank,

    /// `const <type> name[] PROGMEM = { ... };`
    Array {
        name: String,
        element: ElementType,
        values: Vec<u32>,
        per_line: usize,
    },

    /// Bare hex listing without a declaration.
    Listing {
        element: ElementType,
        values: Vec<u32>,
        per_line: usize,
    },

    /// `decl = {` + indented lines + `};` for struct initializers.
    Initializer { decl: String, lines: Vec<String> },

    /// A single verbatim line (global declarations, constants).
    Line(String),

    /// `signature {` + body + `}`
    Function { signature: String, body: CodeBlock },
}

/// Statement lines with brace-aware indentation.
///
/// ```
/// use spritepack::codegen::ir::CodeBlock;
///
/// let mut block = CodeBlock::new();
/// block.open("for (int i = 0; i < 3; i++)");
/// block.line("f(i);");
/// block.close();
///
/// assert_eq!(
///     block.lines(),
///     &["for (int i = 0; i < 3; i++) {", "  f(i);", "}"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    lines: Vec<String>,
    depth: usize,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement at the current depth. Empty strings stay empty.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", "  ".repeat(self.depth), text));
        }
        self
    }

    /// Append several statements at the current depth.
    pub fn extend<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for l in lines {
            self.line(l);
        }
        self
    }

    /// `head {` and indent.
    pub fn open(&mut self, head: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", head.as_ref()));
        self.depth += 1;
        self
    }

    /// Dedent and `}`.
    pub fn close(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }

    /// Append another block, nested at the current depth.
    pub fn append(&mut self, other: &CodeBlock) -> &mut Self {
        self.extend(other.lines.iter())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A complete generated file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artifact {
    pub items: Vec<Item>,
}

impl Artifact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.push(Item::Comment(text.into()));
    }

    pub fn blank(&mut self) {
        self.push(Item::Blank);
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.push(Item::Line(text.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut block = CodeBlock::new();
        block.open("void f()");
        block.open("if (x)");
        block.line("y();");
        block.close();
        block.line("");
        block.close();

        assert_eq!(
            block.lines(),
            &["void f() {", "  if (x) {", "    y();", "  }", "", "}"]
        );
    }

    #[test]
    fn test_append_reindents() {
        let mut inner = CodeBlock::new();
        inner.open("while (1)").line("tick();").close();

        let mut outer = CodeBlock::new();
        outer.open("void loop()").append(&inner).close();

        assert_eq!(
            outer.lines(),
            &["void loop() {", "  while (1) {", "    tick();", "  }", "}"]
        );
    }

    #[test]
    fn test_close_never_underflows() {
        let mut block = CodeBlock::new();
        block.close();
        assert_eq!(block.lines(), &["}"]);
    }
}
