//! # corn-syntax
//!
//! Lexical classification engine for Corn syntax highlighting.
//!
//! The crate separates grammar *data* from the classification *algorithm*:
//! each Corn dialect is described by an immutable [`GrammarSpec`] (keyword
//! vocabularies plus comment/number/string rules), and one shared tokenizer
//! turns a spec and an input text into an ordered, gap-free sequence of
//! scope-tagged [`Token`]s for a downstream renderer.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! registry  → named GrammarSpec lookup for the rendering collaborator
//!   ↓
//! languages → the Corn variant tables (data only)
//!   ↓
//! lexer     → Scope, Token, the single-pass classifier
//!   ↓
//! grammar   → GrammarSpec, rule types, builder + validation
//!   ↓
//! text      → LineIndex, byte-offset primitives (text-size)
//! ```

// ============================================================================
// MODULES (dependency order: text → grammar → lexer → languages → registry)
// ============================================================================

/// Byte-offset primitives: LineIndex, LineCol, TextRange re-exports
pub mod text;

/// Grammar descriptions: GrammarSpec, rule types, builder + validation
pub mod grammar;

/// The classifier: Scope, Token, single-pass tokenizer
pub mod lexer;

/// Shipped Corn variant tables
pub mod languages;

/// Variant name → GrammarSpec registry
pub mod registry;

// Re-export commonly needed items
pub use grammar::{CommentRule, GrammarBuilder, GrammarError, GrammarSpec, StringRule};
pub use lexer::{Scope, Token, tokenize};
pub use registry::LanguageRegistry;

// Re-export foundation types
pub use text::{LineCol, LineIndex, TextRange, TextSize};
