use codeblock_protocol::Highlight;
use once_cell::sync::Lazy;
use regex::Regex;

// Caret directives may carry a comment prefix (`//   ^?`) or stand on
// their own (`   ^?`); the caret column is always counted from the
// start of the full line.
static QUERY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(?://)?\s*\^\?\s*$").unwrap());
static HIGHLIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(?://)?\s*\^+( .*)?$").unwrap());

/// A `^?` directive awaiting symbol resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPoint {
    /// Byte offset of the queried symbol within the directive-free buffer
    pub position: usize,

    /// Column of the caret within the directive line
    pub offset: usize,

    /// Line index of the directive in the buffer handed to the extractor
    pub source_line: usize,
}

/// Output of one extraction pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The surviving lines, order and content untouched
    pub lines: Vec<String>,

    /// Highlight directives, positioned within the surviving buffer
    pub highlights: Vec<Highlight>,

    /// Query directives, positioned within the surviving buffer
    pub queries: Vec<QueryPoint>,
}

impl Extraction {
    /// The directive-free buffer as a single string
    #[must_use]
    pub fn stripped(&self) -> String {
        self.lines.join("\n")
    }
}

/// Remove highlight and query directive lines from a line sequence.
///
/// Implemented as a fold that builds a fresh output vector: surviving
/// lines advance a running content offset by `len + 1` (the removed
/// newline); directive lines are recorded at the current offset and
/// dropped without advancing it, so every recorded position indexes
/// into the directive-free result. Running the extractor over its own
/// output is a no-op.
pub fn strip_markup<I>(lines: I) -> Extraction
where
    I: IntoIterator<Item = String>,
{
    let mut out = Extraction::default();
    let mut content_offset = 0;

    for (index, line) in lines.into_iter().enumerate() {
        if QUERY_RE.is_match(&line) {
            let column = line.find('^').unwrap_or(0);
            out.queries.push(QueryPoint {
                position: content_offset + column,
                offset: column,
                source_line: index,
            });
        } else if let Some(caps) = HIGHLIGHT_RE.captures(&line) {
            let first = line.find('^').unwrap_or(0);
            let run = line[first..].bytes().take_while(|&b| b == b'^').count();
            let description = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            out.highlights.push(Highlight {
                position: content_offset + first,
                length: run,
                description,
                source_line: index,
            });
        } else {
            content_offset += line.len() + 1;
            out.lines.push(line);
        }
    }

    out
}
