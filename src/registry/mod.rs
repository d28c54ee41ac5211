//! Variant name → [`GrammarSpec`] registry.
//!
//! The rendering collaborator selects a grammar by name; the classifier
//! itself never touches the registry. A process-wide default registry,
//! pre-seeded with the shipped Corn variants, is available via [`global`].

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use parking_lot::RwLock;
use smol_str::SmolStr;
use tracing::debug;

use crate::grammar::GrammarSpec;
use crate::languages::{corn, corn_lite};

/// Insertion-ordered mapping from variant name to grammar.
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    specs: IndexMap<SmolStr, Arc<GrammarSpec>>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-seeded with the shipped Corn variants.
    pub fn with_builtin_variants() -> Self {
        let mut registry = Self::new();
        registry.register(corn::NAME, corn::grammar());
        registry.register(corn_lite::NAME, corn_lite::grammar());
        registry
    }

    /// Register a grammar under `name`, replacing any previous
    /// registration of the same name.
    pub fn register(&mut self, name: &str, spec: GrammarSpec) {
        debug!(name, "registering language variant");
        self.specs.insert(SmolStr::new(name), Arc::new(spec));
    }

    /// Look up a variant by name.
    ///
    /// Unknown names return `None`; variant selection stays the caller's
    /// configuration concern.
    pub fn get(&self, name: &str) -> Option<Arc<GrammarSpec>> {
        self.specs.get(name).cloned()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Process-wide default registry, seeded with the shipped variants.
pub fn global() -> &'static RwLock<LanguageRegistry> {
    static GLOBAL: OnceLock<RwLock<LanguageRegistry>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(LanguageRegistry::with_builtin_variants()))
}
