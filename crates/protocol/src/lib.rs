//! Shared data model for rendered code samples.
//!
//! Everything a caller gets back from the rendering pipeline lives here:
//! highlight spans, symbol queries, per-identifier quick info, rendered
//! diagnostics, and the top-level [`RenderResult`]. All records carry
//! positions expressed as byte offsets into the *final* returned code
//! string; the pipeline guarantees that a position either indexes into
//! that string or the record is dropped.

use serde::{Deserialize, Serialize};

/// A span of the rendered code the author asked to emphasize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    /// Byte offset into the final code string
    pub position: usize,

    /// Length of the emphasized span in bytes
    pub length: usize,

    /// Free text from the directive tail, trimmed (may be empty)
    pub description: String,

    /// Line index of the directive in the original annotated sample
    pub source_line: usize,
}

/// A resolved symbol query (`^?` directive).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Byte offset of the queried symbol in the final code string
    pub position: usize,

    /// Column of the caret within the directive line
    pub offset: usize,

    /// Line index of the directive in the original annotated sample
    pub source_line: usize,

    /// Display text from the analysis engine, or a placeholder when the
    /// engine had nothing to say about the position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Documentation attached to the symbol, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// Quick info attached to an interesting identifier in the sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StaticQuickInfo {
    /// Display text for the symbol
    pub text: String,

    /// Documentation attached to the symbol, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,

    /// Byte offset into the final code string
    pub position: usize,

    /// Length of the identifier in bytes
    pub length: usize,

    /// 0-based line within the final code string
    pub line: usize,

    /// 0-based column within that line
    pub character: usize,
}

/// Severity bucket reported by the analysis engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Suggestion,
    Message,
}

impl DiagnosticCategory {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
            Self::Message => "message",
        }
    }
}

/// A diagnostic from the analysis engine, re-expressed in the
/// coordinate space of the final code string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDiagnostic {
    /// Flattened, HTML-escaped message text
    pub rendered_message: String,

    /// Stable identifier, derived from code and span
    pub id: String,

    /// Severity bucket
    pub category: DiagnosticCategory,

    /// Numeric diagnostic code assigned by the engine
    pub code: u32,

    /// Byte offset into the final code string, when the diagnostic
    /// points at a span (engine-wide diagnostics carry no span)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Length of the offending span in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// 0-based line within the final code string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// 0-based column within that line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<usize>,
}

impl RenderedDiagnostic {
    /// Stable id for a diagnostic, unique per (code, span) pair.
    #[must_use]
    pub fn make_id(code: u32, position: Option<usize>, length: Option<usize>) -> String {
        format!(
            "err-{code}-{}-{}",
            position.unwrap_or(0),
            length.unwrap_or(0)
        )
    }
}

/// The complete output of rendering one annotated sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    /// The final user-visible code, directives stripped, optionally
    /// truncated at the cut marker
    pub code: String,

    /// Extension of the final code (changes under emit substitution)
    pub extension: String,

    /// Emphasized spans
    pub highlights: Vec<Highlight>,

    /// Quick info for interesting identifiers
    pub static_quick_infos: Vec<StaticQuickInfo>,

    /// Resolved symbol queries
    pub queries: Vec<Query>,

    /// Diagnostics surfaced as data (never pipeline failures)
    pub errors: Vec<RenderedDiagnostic>,

    /// Shareable link encoding the original annotated sample
    pub playground_url: String,
}
