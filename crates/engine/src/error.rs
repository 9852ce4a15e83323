use thiserror::Error;

/// Result type for engine configuration operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while validating options against the engine's schema
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A directive named a setting absent from the schema
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// A valued directive supplied a value outside an enumeration
    #[error("Invalid value '{value}' for option '{option}'. Allowed: {allowed}")]
    InvalidEnumValue {
        option: String,
        value: String,
        allowed: String,
    },

    /// A valued directive supplied text that does not coerce to the
    /// declared primitive type
    #[error("Option '{option}' expects {expected}, got '{value}'")]
    InvalidValue {
        option: String,
        expected: &'static str,
        value: String,
    },
}
