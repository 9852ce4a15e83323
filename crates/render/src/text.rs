//! Small text conversions applied to engine output before it reaches
//! the caller.

/// Escape text for embedding in HTML attribute or element context
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Collapse a (possibly nested, multi-line) diagnostic message chain
/// into one line
#[must_use]
pub fn flatten_message(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The characters immediately around a byte offset, for debugging
/// authorship mistakes in query directives
#[must_use]
pub fn string_around(content: &str, position: usize) -> String {
    let start = position.saturating_sub(1);
    let end = (position + 2).min(content.len());
    content
        .get(start..end)
        .map(|s| s.replace('\n', "\\n"))
        .unwrap_or_default()
}
