//! Byte-offset primitives for token positions.
//!
//! Token offsets are plain byte offsets ([`TextSize`], [`TextRange`]).
//! [`LineIndex`] converts them to line/column pairs for consumers that
//! report positions (editors, diagnostics). This module has NO dependencies
//! on other corn-syntax modules.

mod line_index;

pub use line_index::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
