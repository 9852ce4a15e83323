use crate::error::Result;
use codeblock_engine::{EngineConfig, EngineError, OptionSchema};
use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved directive name consumed by the file splitter, never by the
/// engine-configuration pass
pub const FILENAME_OPTION: &str = "filename";

static BOOLEAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//\s?@(\w+)\s*$").unwrap());
static VALUED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//\s?@(\w+):\s?(.+)$").unwrap());

/// Pipeline-behavior toggles, distinct from engine configuration.
///
/// Unrecognized names are deliberately left in the buffer (lenient) so
/// they fall through to the strict engine-configuration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandbookOptions {
    /// Suppress diagnostics collection
    pub no_errors: bool,

    /// Suppress per-identifier quick info
    pub no_static_semantic_info: bool,

    /// Substitute compiled output for the source
    pub show_emit: bool,

    /// Which emitted output to show under `show_emit`
    pub show_emitted_file: String,

    /// Diagnostic codes the sample declares as expected
    pub errors: Vec<u32>,

    /// Skip unexpected-diagnostic validation
    pub no_error_validation: bool,
}

impl Default for HandbookOptions {
    fn default() -> Self {
        Self {
            no_errors: false,
            no_static_semantic_info: false,
            show_emit: false,
            show_emitted_file: "index.js".to_string(),
            errors: Vec::new(),
            no_error_validation: false,
        }
    }
}

impl HandbookOptions {
    /// Apply one directive; returns false when the name is not a
    /// handbook option (the line then stays in the buffer)
    fn set(&mut self, name: &str, raw: &str) -> bool {
        match name {
            "noErrors" => self.no_errors = parse_flag(raw),
            "noStaticSemanticInfo" => self.no_static_semantic_info = parse_flag(raw),
            "showEmit" => self.show_emit = parse_flag(raw),
            "noErrorValidation" => self.no_error_validation = parse_flag(raw),
            "showEmittedFile" => self.show_emitted_file = raw.to_string(),
            "errors" => self.errors = parse_error_codes(raw),
            _ => return false,
        }
        true
    }
}

fn parse_flag(raw: &str) -> bool {
    raw.trim() != "false"
}

fn parse_error_codes(raw: &str) -> Vec<u32> {
    raw.split_whitespace()
        .filter_map(|token| match token.parse() {
            Ok(code) => Some(code),
            Err(_) => {
                log::warn!("Ignoring non-numeric expected error code '{token}'");
                None
            }
        })
        .collect()
}

fn parse_directive(line: &str) -> Option<(String, String)> {
    if let Some(caps) = VALUED_RE.captures(line) {
        Some((caps[1].to_string(), caps[2].to_string()))
    } else {
        BOOLEAN_RE
            .captures(line)
            .map(|caps| (caps[1].to_string(), "true".to_string()))
    }
}

/// Lenient pass: consume directives naming handbook options, leave
/// everything else (including unknown names) in the buffer.
pub fn resolve_handbook_options(lines: Vec<String>) -> (Vec<String>, HandbookOptions) {
    let mut options = HandbookOptions::default();
    let mut kept = Vec::with_capacity(lines.len());

    for line in lines {
        let consumed = parse_directive(&line)
            .is_some_and(|(name, raw)| options.set(&name, &raw));
        if !consumed {
            kept.push(line);
        }
    }

    (kept, options)
}

/// Strict pass: every remaining directive except `filename` must match
/// the engine's option schema; the coerced values form an immutable
/// [`EngineConfig`] snapshot. Matched lines are deleted.
pub fn resolve_engine_config(
    lines: Vec<String>,
    schema: &OptionSchema,
) -> Result<(Vec<String>, EngineConfig)> {
    let mut config = EngineConfig::new();
    let mut kept = Vec::with_capacity(lines.len());

    for line in lines {
        match parse_directive(&line) {
            Some((name, _)) if name.eq_ignore_ascii_case(FILENAME_OPTION) => kept.push(line),
            Some((name, raw)) => {
                let canonical = schema
                    .lookup(&name)
                    .map(|decl| decl.name.clone())
                    .ok_or_else(|| EngineError::UnknownOption(name.clone()))?;
                let value = schema.coerce(&name, &raw)?;
                log::debug!("Engine option {canonical} = {value:?}");
                config.set(canonical, value);
            }
            None => kept.push(line),
        }
    }

    Ok((kept, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkupError;
    use codeblock_engine::{OptionKind, OptionValue};
    use pretty_assertions::assert_eq;

    fn lines(code: &str) -> Vec<String> {
        code.split('\n').map(String::from).collect()
    }

    fn schema() -> OptionSchema {
        OptionSchema::default()
            .with("strict", OptionKind::Bool)
            .with(
                "target",
                OptionKind::enumeration([("es5", 1), ("es2015", 2)]),
            )
    }

    #[test]
    fn boolean_and_valued_handbook_directives() {
        let (kept, options) = resolve_handbook_options(lines(
            "// @noErrors\n// @showEmittedFile: out.js\nconst a = 1",
        ));
        assert!(options.no_errors);
        assert_eq!(options.show_emitted_file, "out.js");
        assert_eq!(kept, vec!["const a = 1".to_string()]);
    }

    #[test]
    fn errors_list_is_split_on_spaces() {
        let (_, options) = resolve_handbook_options(lines("// @errors: 2304 2345\nlet x = y"));
        assert_eq!(options.errors, vec![2304, 2345]);
    }

    #[test]
    fn non_numeric_error_codes_are_skipped() {
        let (_, options) = resolve_handbook_options(lines("// @errors: 2304 nope 7"));
        assert_eq!(options.errors, vec![2304, 7]);
    }

    #[test]
    fn unrecognized_names_fall_through() {
        let (kept, _) = resolve_handbook_options(lines("// @strict\nconst a = 1"));
        assert_eq!(
            kept,
            vec!["// @strict".to_string(), "const a = 1".to_string()]
        );
    }

    #[test]
    fn value_may_contain_colons() {
        let (_, options) =
            resolve_handbook_options(lines("// @showEmittedFile: dir: with colons.js"));
        assert_eq!(options.show_emitted_file, "dir: with colons.js");
    }

    #[test]
    fn engine_pass_coerces_against_schema() {
        let (kept, config) =
            resolve_engine_config(lines("// @strict\n// @target: ES2015\nconst a = 1"), &schema())
                .unwrap();
        assert_eq!(kept, vec!["const a = 1".to_string()]);
        assert_eq!(config.get("strict"), Some(&OptionValue::Bool(true)));
        assert_eq!(config.get("target"), Some(&OptionValue::Number(2)));
    }

    #[test]
    fn engine_pass_preserves_filename_directives() {
        let (kept, config) =
            resolve_engine_config(lines("// @filename: b.ts\nconst b = 2"), &schema()).unwrap();
        assert_eq!(kept.len(), 2);
        assert!(config.is_empty());
    }

    #[test]
    fn unknown_engine_option_fails_naming_it() {
        let err = resolve_engine_config(lines("// @bogus: 1"), &schema()).unwrap_err();
        let MarkupError::Option(inner) = err;
        assert_eq!(inner, EngineError::UnknownOption("bogus".to_string()));
    }

    #[test]
    fn invalid_enum_value_fails() {
        let err = resolve_engine_config(lines("// @target: es9000"), &schema()).unwrap_err();
        assert!(err.to_string().contains("es5, es2015"));
    }

    #[test]
    fn option_lookup_is_case_insensitive() {
        let (_, config) = resolve_engine_config(lines("// @STRICT"), &schema()).unwrap();
        // Stored under the canonical schema name.
        assert_eq!(config.get("strict"), Some(&OptionValue::Bool(true)));
    }
}
