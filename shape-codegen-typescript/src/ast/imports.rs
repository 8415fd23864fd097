//! TypeScript import builder.

use shapegen_codegen::builder::CodeStream;

/// Builder for a named-import block.
///
/// Renders one symbol per line:
///
/// ```text
/// import {
///     IAttachment,
/// } from '../../test/Attachment';
/// ```
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Write the import block to a stream.
    pub fn write(&self, out: &mut CodeStream) {
        out.write_block(
            "import {\n",
            |out| {
                for name in &self.named {
                    out.write(&format!("{},\n", name));
                }
            },
            "}",
        );
        out.append(&format!(" from '{}';\n", self.from));
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut out = CodeStream::default();
        self.write(&mut out);
        out.value()
    }
}
