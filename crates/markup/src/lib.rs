//! # Codeblock Markup
//!
//! The directive-extraction and position-remapping pipeline behind
//! rendered code samples. Authors write directives in comments; this
//! crate strips them, splits the sample into named virtual files, and
//! keeps every recorded byte offset valid across the successive text
//! mutations (directive stripping, multi-file splitting, cut
//! truncation).
//!
//! ## Directive grammar
//!
//! | Directive | Shape | Effect |
//! |---|---|---|
//! | boolean config | `// @name` | sets option `name` = true |
//! | valued config | `// @name: value` | sets option `name` = value |
//! | filename marker | `// @filename: ` | begins a new virtual file |
//! | highlight | carets, optional text | marks a span |
//! | query | `^?` alone | requests symbol info |
//! | cut marker | `// ---cut---` | truncates visible output |
//!
//! Handbook options are resolved leniently (unknown names fall through);
//! engine-configuration options are resolved strictly against the
//! engine's schema, and an unknown name there is a hard failure.

mod cut;
mod error;
mod extract;
mod options;
mod pos;
mod split;

pub use cut::{find_cut, shift_position, CUT_MARKER};
pub use error::{MarkupError, Result};
pub use extract::{strip_markup, Extraction, QueryPoint};
pub use options::{
    resolve_engine_config, resolve_handbook_options, HandbookOptions, FILENAME_OPTION,
};
pub use pos::line_character;
pub use split::{split_files, FileRegistry, SplitFile, VirtualFile, FILENAME_MARKER};

/// Split a sample into its logical lines (plain `\n` separation).
#[must_use]
pub fn sample_lines(code: &str) -> Vec<String> {
    code.split('\n').map(String::from).collect()
}
