use thiserror::Error;

/// Result type for markup operations
pub type Result<T> = std::result::Result<T, MarkupError>;

/// Errors that can occur while resolving directives
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MarkupError {
    /// An engine-configuration directive failed schema validation
    #[error("Option error: {0}")]
    Option(#[from] codeblock_engine::EngineError),
}
