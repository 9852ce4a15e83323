use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Fragment base the encoded sample is appended to
pub const PLAYGROUND_BASE: &str = "https://play.codeblock.dev/#code/";

/// Build a shareable link from the original annotated sample.
///
/// The original text (directives included) is encoded, so opening the
/// link reproduces the author's sample, not the rendered output.
#[must_use]
pub fn share_url(sample: &str) -> String {
    format!("{PLAYGROUND_BASE}{}", URL_SAFE_NO_PAD.encode(sample))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_the_sample_url_safely() {
        let url = share_url("const a = \"?&=\"");
        assert!(url.starts_with(PLAYGROUND_BASE));
        let encoded = &url[PLAYGROUND_BASE.len()..];
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn round_trips() {
        let sample = "// @noErrors\nconst a = 1\n//    ^?";
        let url = share_url(sample);
        let encoded = &url[PLAYGROUND_BASE.len()..];
        let decoded = URL_SAFE_NO_PAD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), sample);
    }
}
