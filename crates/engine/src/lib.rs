//! # Codeblock Engine Interface
//!
//! The seam between the rendering pipeline and a source-analysis
//! engine. The pipeline never parses or type-checks the sample's
//! language itself; it asks an [`AnalysisEngine`] for symbol
//! information, diagnostics, and compiled output, and maps the answers
//! back onto the rendered code.
//!
//! Implementations are expected to be synchronous and single-threaded:
//! the pipeline updates a document and then queries it, in that order,
//! with no concurrent callers. [`DocumentRegistry`] gives implementors
//! the version bookkeeping that ordering relies on.

mod config;
mod documents;
mod error;
mod schema;
mod types;

pub use config::{EngineConfig, OptionValue};
pub use documents::{Document, DocumentRegistry};
pub use error::{EngineError, Result};
pub use schema::{OptionDecl, OptionKind, OptionSchema};
pub use types::{Diagnostic, EmittedFile, QuickInfo, TextSpan};

/// A source-analysis engine consumed by the rendering pipeline.
///
/// File arguments name virtual files previously registered through
/// [`update_document`](Self::update_document); queries against a name
/// the engine has never seen return empty results rather than failing.
pub trait AnalysisEngine {
    /// The closed table of options this engine accepts
    fn option_schema(&self) -> &OptionSchema;

    /// Apply a configuration snapshot. Cached analysis for affected
    /// files must be invalidated before the next query.
    fn configure(&mut self, config: &EngineConfig);

    /// Register or replace a virtual file's content at a version
    fn update_document(&mut self, name: &str, content: &str, version: u32);

    /// Symbol display text and docs at a byte offset within a file
    fn quick_info_at(&self, file: &str, position: usize) -> Option<QuickInfo>;

    /// Spans of identifiers worth annotating (not every token)
    fn identifier_spans(&self, file: &str) -> Vec<TextSpan>;

    /// Type-level diagnostics for a file
    fn semantic_diagnostics(&self, file: &str) -> Vec<Diagnostic>;

    /// Parse-level diagnostics for a file
    fn syntactic_diagnostics(&self, file: &str) -> Vec<Diagnostic>;

    /// Compiled outputs for a file
    fn emit_output(&self, file: &str) -> Vec<EmittedFile>;
}
