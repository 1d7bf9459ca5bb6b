//! Ordered, indentation-aware text accumulator.
//!
//! All emitters append to one shared [`LineBuffer`]; its serialized form is
//! the generated document. Nested blocks are written through
//! [`LineBuffer::indented`], which scopes the indentation level so every
//! increment is paired with a decrement on every exit path.

/// Growable list of output lines plus the current indentation level.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
    indent: usize,
}

const INDENT: &str = "  ";

impl LineBuffer {
    /// Create an empty buffer at indentation level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text at the current indentation level. Multi-line input is
    /// split and each line indented individually; empty lines stay empty.
    pub fn append(&mut self, text: &str) {
        for line in text.split('\n') {
            if line.is_empty() {
                self.lines.push(String::new());
            } else {
                self.lines.push(format!("{}{}", INDENT.repeat(self.indent), line));
            }
        }
    }

    /// Append one blank separator line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Run `f` with the indentation level raised by one. The level is
    /// restored afterwards regardless of how `f` returns.
    pub fn indented<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.indent += 1;
        let out = f(self);
        self.indent -= 1;
        out
    }

    /// Serialize the accumulated lines, joined by newlines.
    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}
