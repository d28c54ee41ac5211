//! Shipped grammar tables for the Corn language variants.
//!
//! Two dialects share the single classifier; only the data differs:
//!
//! - [`corn`]: the full dialect, with memory/encapsulation/module keywords,
//!   sized numeric and string types, built-ins, doc-markup hash comments,
//!   and the detailed numeric literal rules.
//! - [`corn_lite`]: the C-like subset, with a smaller vocabulary, no
//!   built-ins, plain hash comments, and one catch-all numeric pattern.

pub mod corn;
pub mod corn_lite;
