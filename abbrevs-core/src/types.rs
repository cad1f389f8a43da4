//! Core data model: language codes, token entries and token lists

use crate::error::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// ISO 639-1 language code
///
/// Always exactly 2 characters. Codes are kept as supplied, so `"en"` and
/// `"EN"` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Required length of a code, in characters
    pub const LEN: usize = 2;

    /// Validate and wrap a language code
    pub fn new(code: &str) -> Result<Self> {
        let len = code.chars().count();
        if len != Self::LEN {
            return Err(TokenError::invalid_argument(format!(
                "language code must be a 2 letter ISO 639-1 code, got {code:?} ({len} characters)"
            )));
        }
        Ok(Self(code.to_string()))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Alternate written forms of one abbreviation, e.g. `["Street", "St"]`
///
/// Never empty. An entry with a single variant is a singleton: it cannot be
/// used for substitution but is still useful for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TokenEntry(Vec<String>);

impl TokenEntry {
    /// Build an entry from its variants
    pub fn new<I, S>(variants: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
        if variants.is_empty() {
            return Err(TokenError::invalid_argument(
                "token entry needs at least one variant",
            ));
        }
        Ok(Self(variants))
    }

    /// Build a singleton entry
    pub fn singleton(variant: impl Into<String>) -> Self {
        Self(vec![variant.into()])
    }

    /// All variants, in dataset order
    pub fn variants(&self) -> &[String] {
        &self.0
    }

    /// Number of variants (at least 1)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the entry has exactly one variant
    pub fn is_singleton(&self) -> bool {
        self.0.len() < 2
    }
}

impl TryFrom<Vec<String>> for TokenEntry {
    type Error = TokenError;

    fn try_from(value: Vec<String>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TokenEntry> for Vec<String> {
    fn from(entry: TokenEntry) -> Self {
        entry.0
    }
}

/// Ordered token entries for one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenList(Vec<TokenEntry>);

impl TokenList {
    /// Create a list, keeping the given order
    pub fn new(entries: Vec<TokenEntry>) -> Self {
        Self(entries)
    }

    /// Copy of this list with every singleton entry removed
    ///
    /// Relative order of the remaining entries is unchanged.
    pub fn without_singletons(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|entry| !entry.is_singleton())
                .cloned()
                .collect(),
        )
    }

    /// Copy of the list, optionally filtered
    pub(crate) fn select(&self, include_singletons: bool) -> Self {
        if include_singletons {
            self.clone()
        } else {
            self.without_singletons()
        }
    }

    /// Number of singleton entries in the list
    pub fn singleton_count(&self) -> usize {
        self.0.iter().filter(|entry| entry.is_singleton()).count()
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, TokenEntry> {
        self.0.iter()
    }

    /// Entries as a slice
    pub fn entries(&self) -> &[TokenEntry] {
        &self.0
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TokenEntry>> for TokenList {
    fn from(entries: Vec<TokenEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<TokenEntry> for TokenList {
    fn from_iter<T: IntoIterator<Item = TokenEntry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenList {
    type Item = TokenEntry;
    type IntoIter = std::vec::IntoIter<TokenEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a TokenEntry;
    type IntoIter = std::slice::Iter<'a, TokenEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
