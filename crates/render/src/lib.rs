//! # Codeblock Render
//!
//! The orchestrator that turns an annotated sample into a
//! [`RenderResult`]: strip options, split into virtual files, feed the
//! files to a source-analysis engine, resolve queries and quick info,
//! collect diagnostics, optionally substitute compiled output, and
//! truncate at the cut marker, keeping every reported position valid
//! against the final code string throughout.
//!
//! ```text
//! annotated sample
//!     │
//!     ├──> validate
//!     ├──> handbook options (lenient)
//!     ├──> engine configuration (strict, schema-checked)
//!     ├──> split into virtual files, strip caret directives
//!     ├──> engine: quick info, diagnostics, emit
//!     ├──> emit substitution / cut truncation
//!     └──> RenderResult with remapped positions
//! ```

mod error;
mod playground;
mod render;
mod text;
mod validate;

pub use error::{RenderError, Result};
pub use playground::{share_url, PLAYGROUND_BASE};
pub use render::render;
pub use text::{escape_html, flatten_message};
pub use validate::check_sample;

pub use codeblock_protocol::{
    DiagnosticCategory, Highlight, Query, RenderResult, RenderedDiagnostic, StaticQuickInfo,
};
