use crate::config::OptionValue;
use crate::error::{EngineError, Result};

/// Declared shape of one engine option.
///
/// The schema is a closed tagged-variant table resolved once when the
/// engine is constructed; coercion is a pure function over it.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    Bool,
    Number,
    String,

    /// Comma-separated list; each element coerced per the inner kind
    List(Box<OptionKind>),

    /// Closed table mapping lower-cased keys to numeric values
    Enum(Vec<(String, i64)>),
}

impl OptionKind {
    /// Build an enum kind from `(key, value)` pairs; keys are stored
    /// lower-cased since lookups are case-insensitive
    pub fn enumeration<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self::Enum(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v))
                .collect(),
        )
    }

    /// Build a list kind over an element kind
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }
}

/// One named option in the engine's schema
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDecl {
    pub name: String,
    pub kind: OptionKind,
}

impl OptionDecl {
    pub fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The full set of options an engine accepts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSchema {
    decls: Vec<OptionDecl>,
}

impl OptionSchema {
    #[must_use]
    pub fn new(decls: Vec<OptionDecl>) -> Self {
        Self { decls }
    }

    /// Builder-style registration
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, kind: OptionKind) -> Self {
        self.decls.push(OptionDecl::new(name, kind));
        self
    }

    /// Look up a declaration by name, case-insensitively
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&OptionDecl> {
        self.decls
            .iter()
            .find(|decl| decl.name.eq_ignore_ascii_case(name))
    }

    /// Coerce directive text into a typed value for a named option.
    ///
    /// Fails with [`EngineError::UnknownOption`] when the name matches
    /// no declaration, and with a descriptive error when the text does
    /// not fit the declared kind.
    pub fn coerce(&self, name: &str, raw: &str) -> Result<OptionValue> {
        let decl = self
            .lookup(name)
            .ok_or_else(|| EngineError::UnknownOption(name.to_string()))?;
        coerce_value(&decl.name, &decl.kind, raw)
    }
}

fn coerce_value(option: &str, kind: &OptionKind, raw: &str) -> Result<OptionValue> {
    match kind {
        OptionKind::Bool => match raw.trim().to_lowercase().as_str() {
            "true" => Ok(OptionValue::Bool(true)),
            "false" => Ok(OptionValue::Bool(false)),
            _ => Err(EngineError::InvalidValue {
                option: option.to_string(),
                expected: "a boolean",
                value: raw.to_string(),
            }),
        },
        OptionKind::Number => raw
            .trim()
            .parse::<i64>()
            .map(OptionValue::Number)
            .map_err(|_| EngineError::InvalidValue {
                option: option.to_string(),
                expected: "a number",
                value: raw.to_string(),
            }),
        OptionKind::String => Ok(OptionValue::String(raw.to_string())),
        OptionKind::List(element) => raw
            .split(',')
            .map(|part| coerce_value(option, element, part.trim()))
            .collect::<Result<Vec<_>>>()
            .map(OptionValue::List),
        OptionKind::Enum(table) => {
            let key = raw.trim().to_lowercase();
            table
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| OptionValue::Number(*value))
                .ok_or_else(|| EngineError::InvalidEnumValue {
                    option: option.to_string(),
                    value: raw.to_string(),
                    allowed: table
                        .iter()
                        .map(|(name, _)| name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema() -> OptionSchema {
        OptionSchema::default()
            .with("strict", OptionKind::Bool)
            .with("maxErrors", OptionKind::Number)
            .with("outDir", OptionKind::String)
            .with(
                "target",
                OptionKind::enumeration([("es5", 1), ("es2015", 2), ("esnext", 99)]),
            )
            .with(
                "lib",
                OptionKind::list(OptionKind::enumeration([("dom", 0), ("es2015", 2)])),
            )
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let schema = schema();
        assert!(schema.lookup("STRICT").is_some());
        assert!(schema.lookup("Target").is_some());
        assert!(schema.lookup("bogus").is_none());
    }

    #[test]
    fn coerces_primitives() {
        let schema = schema();
        assert_eq!(
            schema.coerce("strict", "true").unwrap(),
            OptionValue::Bool(true)
        );
        assert_eq!(
            schema.coerce("maxErrors", "25").unwrap(),
            OptionValue::Number(25)
        );
        assert_eq!(
            schema.coerce("outDir", "dist/out").unwrap(),
            OptionValue::String("dist/out".to_string())
        );
    }

    #[test]
    fn coerces_enum_through_value_table() {
        let schema = schema();
        assert_eq!(
            schema.coerce("target", "ES2015").unwrap(),
            OptionValue::Number(2)
        );
    }

    #[test]
    fn coerces_lists_elementwise() {
        let schema = schema();
        assert_eq!(
            schema.coerce("lib", "DOM, ES2015").unwrap(),
            OptionValue::List(vec![OptionValue::Number(0), OptionValue::Number(2)])
        );
    }

    #[test]
    fn unknown_option_names_the_offender() {
        let err = schema().coerce("bogus", "1").unwrap_err();
        assert_eq!(err, EngineError::UnknownOption("bogus".to_string()));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn invalid_enum_value_lists_allowed_keys() {
        let err = schema().coerce("target", "es9000").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("es9000"));
        assert!(message.contains("es5, es2015, esnext"));
    }

    #[test]
    fn invalid_number_is_descriptive() {
        let err = schema().coerce("maxErrors", "lots").unwrap_err();
        assert!(err.to_string().contains("a number"));
    }
}
