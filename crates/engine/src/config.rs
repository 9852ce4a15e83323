use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A typed option value produced by schema coercion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(i64),
    String(String),
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Get the boolean payload, if this is a boolean
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the numeric payload, if this is a number
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string payload, if this is a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// An immutable snapshot of engine settings.
///
/// Built once by the option resolver and handed to
/// [`AnalysisEngine::configure`](crate::AnalysisEngine::configure);
/// a "change" means building a new value, never mutating a shared one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    settings: BTreeMap<String, OptionValue>,
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option under its canonical (schema-declared) name
    pub fn set(&mut self, name: impl Into<String>, value: OptionValue) {
        self.settings.insert(name.into(), value);
    }

    /// Builder-style variant of [`set`](Self::set)
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.set(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.settings.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v))
    }
}
