use codeblock_protocol::DiagnosticCategory;
use serde::{Deserialize, Serialize};

/// A half-open span of bytes within one virtual file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Symbol information at a position, as reported by the engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickInfo {
    /// Display text; an empty string means "nothing useful to show"
    pub text: String,

    /// Attached documentation, if any
    pub docs: Option<String>,
}

impl QuickInfo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            docs: None,
        }
    }

    #[must_use]
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }
}

/// A raw diagnostic in engine coordinates (offsets within one file)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    /// Numeric code assigned by the engine
    pub code: u32,

    /// Severity bucket
    pub category: DiagnosticCategory,

    /// Message text; may contain a chain of lines for nested messages
    pub message: String,

    /// File the diagnostic points at; `None` for engine-wide notices
    pub file: Option<String>,

    /// Byte offset within that file
    pub start: Option<usize>,

    /// Length of the offending span
    pub length: Option<usize>,
}

/// One output produced by compiling a virtual file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmittedFile {
    /// Output file name, e.g. `index.js` or `index.d.ts`
    pub name: String,

    /// Emitted text
    pub text: String,
}

impl EmittedFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Extension of the emitted file, without the dot
    #[must_use]
    pub fn extension(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_end() {
        assert_eq!(TextSpan::new(4, 3).end(), 7);
    }

    #[test]
    fn emitted_file_extension() {
        assert_eq!(EmittedFile::new("index.js", "").extension(), "js");
        assert_eq!(EmittedFile::new("index.d.ts", "").extension(), "ts");
        assert_eq!(EmittedFile::new("LICENSE", "").extension(), "LICENSE");
    }
}
