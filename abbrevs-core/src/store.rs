//! Token lookup by language code

use crate::error::Result;
use crate::registry::Registry;
use crate::source::DatasetSource;
use crate::types::{LanguageCode, TokenList};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result of a [`TokenStore::get_tokens`] call
///
/// Serializes as a JSON array for a single language, and as an object keyed
/// by language code for all languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tokens {
    /// Tokens for one requested language
    Language(TokenList),
    /// Tokens for every known language
    All(BTreeMap<LanguageCode, TokenList>),
}

impl Tokens {
    /// The single-language list, if this is one
    pub fn as_language(&self) -> Option<&TokenList> {
        match self {
            Tokens::Language(list) => Some(list),
            Tokens::All(_) => None,
        }
    }

    /// The all-languages map, if this is one
    pub fn as_all(&self) -> Option<&BTreeMap<LanguageCode, TokenList>> {
        match self {
            Tokens::Language(_) => None,
            Tokens::All(map) => Some(map),
        }
    }
}

/// Lookup front end over a [`Registry`]
///
/// Every returned list is a fresh copy; callers may mutate it freely.
#[derive(Debug, Clone)]
pub struct TokenStore {
    registry: Arc<Registry>,
}

impl TokenStore {
    /// Wrap an existing registry
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Store over the bundled datasets
    pub fn embedded() -> Self {
        Self::new(Registry::embedded())
    }

    /// Load a registry from `source` and wrap it
    pub fn from_source(source: &dyn DatasetSource) -> Result<Self> {
        Ok(Self::new(Arc::new(Registry::from_source(source)?)))
    }

    /// Underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Tokens for one language, or for all languages when `language` is `None`
    ///
    /// Singleton entries are dropped unless `include_singletons` is set. A
    /// well-formed code with no dataset yields an empty list.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidArgument`](crate::TokenError::InvalidArgument)
    /// when `language` is not exactly 2 characters.
    pub fn get_tokens(&self, language: Option<&str>, include_singletons: bool) -> Result<Tokens> {
        match language {
            Some(code) => self.tokens(code, include_singletons).map(Tokens::Language),
            None => Ok(Tokens::All(self.all_tokens(include_singletons))),
        }
    }

    /// Tokens for one language
    pub fn tokens(&self, language: &str, include_singletons: bool) -> Result<TokenList> {
        let code = LanguageCode::new(language)?;
        Ok(self
            .registry
            .get(code.as_str())
            .map(|list| list.select(include_singletons))
            .unwrap_or_default())
    }

    /// Tokens for every known language
    pub fn all_tokens(&self, include_singletons: bool) -> BTreeMap<LanguageCode, TokenList> {
        self.registry
            .iter()
            .map(|(code, list)| (code.clone(), list.select(include_singletons)))
            .collect()
    }

    /// Known language codes, sorted
    pub fn languages(&self) -> Vec<LanguageCode> {
        self.registry.codes().cloned().collect()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::embedded()
    }
}
