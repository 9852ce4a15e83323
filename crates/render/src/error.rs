use thiserror::Error;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that abort a render; there are no partial results
#[derive(Error, Debug)]
pub enum RenderError {
    /// The raw sample failed input validation
    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    /// A directive failed to resolve
    #[error("Markup error: {0}")]
    Markup(#[from] codeblock_markup::MarkupError),

    /// Emit substitution was requested but the named output is absent
    #[error("Emitted file '{requested}' not found. Available: {available}")]
    MissingEmittedFile { requested: String, available: String },

    /// Diagnostics occurred that the sample did not declare expected
    #[error("Unexpected diagnostics ({codes}):\n{details}")]
    UnexpectedDiagnostics { codes: String, details: String },
}
