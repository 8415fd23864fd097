//! Indentation-aware text accumulation.

use super::{Indent, IndentContext};

/// Append-only text buffer with scoped, nested indentation.
///
/// Indentation is applied to the start of each [`write`](Self::write), not
/// to every line of the text. A [`child`](Self::child) stream shares the
/// parent's depth but owns its own buffer; nothing is ever merged back
/// automatically.
///
/// # Example
///
/// ```
/// use shapegen_codegen::builder::{CodeStream, Indent};
///
/// let mut out = CodeStream::new(Indent::Spaces(4));
/// out.write_block(
///     "function f() {\n",
///     |out| {
///         out.write("return 1;\n");
///     },
///     "}\n",
/// );
///
/// assert_eq!(out.value(), "function f() {\n    return 1;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeStream {
    indent: IndentContext,
    buffer: String,
}

impl CodeStream {
    /// Create a root stream with its own indentation context.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent: IndentContext::new(indent),
            buffer: String::new(),
        }
    }

    /// Create an empty stream sharing this stream's indentation context.
    pub fn child(&self) -> Self {
        Self {
            indent: self.indent.clone(),
            buffer: String::new(),
        }
    }

    /// Append `text` prefixed by the current indentation.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(&self.indent.prefix());
        self.buffer.push_str(text);
        self
    }

    /// Write `prefix`, run `body` one level deeper, then write `suffix`.
    ///
    /// The depth is restored and the suffix written whatever `body` returns.
    pub fn write_block<R>(
        &mut self,
        prefix: &str,
        body: impl FnOnce(&mut Self) -> R,
        suffix: &str,
    ) -> R {
        self.write(prefix);
        let result = self.indent_block(body);
        self.write(suffix);
        result
    }

    /// Run `body` one level deeper.
    pub fn indent_block<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.indent.increase();
        let result = body(self);
        self.indent.decrease();
        result
    }

    /// Append raw text with no indentation.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Take the buffered text, leaving the stream empty.
    pub fn value(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current indentation depth, shared with parent and children.
    pub fn depth(&self) -> usize {
        self.indent.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_indents_only_the_start() {
        let mut out = CodeStream::new(Indent::Spaces(2));
        out.indent_block(|out| {
            out.write("a\nb\n");
        });
        assert_eq!(out.value(), "  a\nb\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut out = CodeStream::default();
        out.write_block(
            "if(x) {\n",
            |out| {
                out.write_block(
                    "if(y) {\n",
                    |out| {
                        out.write("z;\n");
                    },
                    "}\n",
                );
            },
            "}\n",
        );
        assert_eq!(out.value(), "if(x) {\n    if(y) {\n        z;\n    }\n}\n");
        assert_eq!(out.depth(), 0);
    }

    #[test]
    fn test_child_shares_depth_not_buffer() {
        let mut parent = CodeStream::new(Indent::Tab);
        parent.indent_block(|parent| {
            let mut child = parent.child();
            child.write("x");
            assert_eq!(child.value(), "\tx");
            assert!(parent.is_empty());
        });
    }

    #[test]
    fn test_value_drains() {
        let mut out = CodeStream::default();
        out.append("abc");
        assert_eq!(out.value(), "abc");
        assert_eq!(out.value(), "");
    }

    #[test]
    fn test_block_restores_depth_on_error() {
        let mut out = CodeStream::default();
        let result: Result<(), &str> = out.write_block("{\n", |_| Err("boom"), "}\n");
        assert!(result.is_err());
        assert_eq!(out.depth(), 0);
        assert_eq!(out.as_str(), "{\n}\n");
    }
}
