//! Per-language abbreviation token lists
//!
//! Each supported language (keyed by its ISO 639-1 code) has an ordered list
//! of token entries. An entry groups the alternate spellings of one
//! abbreviation, such as `["Street", "St"]`. Entries with a single variant are
//! singletons; they are excluded from lookups unless explicitly requested.
//!
//! ```
//! use abbrevs_core::{get_tokens, Tokens};
//!
//! let en = get_tokens(Some("en"), false).unwrap();
//! assert!(matches!(en, Tokens::Language(ref list) if !list.is_empty()));
//!
//! // Unknown languages are empty, malformed codes are errors
//! assert!(get_tokens(Some("xx"), false).unwrap().as_language().unwrap().is_empty());
//! assert!(get_tokens(Some("english"), false).is_err());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod registry;
pub mod source;
pub mod store;
pub mod types;

pub use error::{Result, TokenError};
pub use registry::Registry;
pub use source::{DatasetFormat, DatasetSource, DirectorySource, EmbeddedSource, MemorySource};
pub use store::{TokenStore, Tokens};
pub use types::{LanguageCode, TokenEntry, TokenList};

/// Look up tokens in the bundled datasets
///
/// Returns one language's list when `language` is given, otherwise a map of
/// every bundled language. See [`TokenStore::get_tokens`].
pub fn get_tokens(language: Option<&str>, include_singletons: bool) -> Result<Tokens> {
    TokenStore::embedded().get_tokens(language, include_singletons)
}
