//! Read-only index of token lists by language code

use crate::error::{Result, TokenError};
use crate::source::{DatasetSource, EmbeddedSource};
use crate::types::{LanguageCode, TokenList};
use log::debug;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

static EMBEDDED_REGISTRY: OnceLock<Arc<Registry>> = OnceLock::new();

/// Token lists keyed by language code
///
/// Built once from a [`DatasetSource`] and never modified afterwards, so it
/// can be shared between threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    languages: BTreeMap<LanguageCode, TokenList>,
}

impl Registry {
    /// Build a registry by loading every dataset from `source`
    pub fn from_source(source: &dyn DatasetSource) -> Result<Self> {
        let mut languages = BTreeMap::new();

        for (code, list) in source.load()? {
            if languages.contains_key(&code) {
                return Err(TokenError::DuplicateLanguage {
                    code: code.to_string(),
                });
            }
            languages.insert(code, list);
        }

        let registry = Self { languages };
        debug!(
            "Loaded {} languages ({} entries) from {}",
            registry.len(),
            registry.entry_count(),
            source.describe()
        );
        Ok(registry)
    }

    /// Registry over the bundled datasets, built on first access
    ///
    /// # Panics
    ///
    /// Panics if the bundled datasets fail to load. They are validated by the
    /// test suite, so this indicates a broken build.
    pub fn embedded() -> Arc<Registry> {
        EMBEDDED_REGISTRY
            .get_or_init(|| {
                let registry = Registry::from_source(&EmbeddedSource)
                    .unwrap_or_else(|e| panic!("Failed to load embedded token datasets: {e}"));
                Arc::new(registry)
            })
            .clone()
    }

    /// Token list for a language, if present
    pub fn get(&self, code: &str) -> Option<&TokenList> {
        self.languages.get(code)
    }

    /// Whether a dataset exists for the language
    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// Known language codes, sorted
    pub fn codes(&self) -> impl Iterator<Item = &LanguageCode> {
        self.languages.keys()
    }

    /// Iterate over `(code, list)` pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &TokenList)> {
        self.languages.iter()
    }

    /// Number of languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// True when no datasets were loaded
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Total number of entries across all languages
    pub fn entry_count(&self) -> usize {
        self.languages.values().map(TokenList::len).sum()
    }
}
