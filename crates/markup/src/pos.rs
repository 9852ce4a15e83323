/// Translate a byte offset into a 0-based (line, character) pair.
///
/// Offsets past the end of the buffer clamp to the final position.
#[must_use]
pub fn line_character(content: &str, position: usize) -> (usize, usize) {
    let clamped = position.min(content.len());
    let prefix = &content[..clamped];
    let line = prefix.bytes().filter(|&b| b == b'\n').count();
    let character = clamped - prefix.rfind('\n').map_or(0, |at| at + 1);
    (line, character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_positions() {
        assert_eq!(line_character("abc\ndef", 0), (0, 0));
        assert_eq!(line_character("abc\ndef", 2), (0, 2));
    }

    #[test]
    fn later_line_positions() {
        assert_eq!(line_character("abc\ndef", 4), (1, 0));
        assert_eq!(line_character("abc\ndef", 6), (1, 2));
    }

    #[test]
    fn newline_belongs_to_its_line() {
        assert_eq!(line_character("abc\ndef", 3), (0, 3));
    }

    #[test]
    fn past_the_end_clamps() {
        assert_eq!(line_character("abc", 99), (0, 3));
        assert_eq!(line_character("", 5), (0, 0));
    }
}
