//! Dataset sources
//!
//! A source produces raw `(code, list)` pairs once; the [`Registry`](crate::Registry)
//! takes care of indexing them. Dataset files are normalized here so nothing
//! downstream has to guess the shape of an entry.

use crate::error::{Result, TokenError};
use crate::types::{LanguageCode, TokenEntry, TokenList};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Provider of per-language token lists
pub trait DatasetSource {
    /// Load every dataset the source knows about
    fn load(&self) -> Result<Vec<(LanguageCode, TokenList)>>;

    /// Human readable description, used in logs and CLI output
    fn describe(&self) -> String;
}

/// One element of a dataset array: a variant group or a bare string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Group(Vec<String>),
    Bare(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDataset {
    entries: Vec<RawEntry>,
}

/// Dataset file formats understood by [`DirectorySource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Top-level JSON array, e.g. `[["Street", "St"], ["Alley"]]`
    Json,
    /// TOML table with an `entries` array
    Toml,
}

impl DatasetFormat {
    /// Format for a file extension, if it is a dataset file
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(DatasetFormat::Json),
            "toml" => Some(DatasetFormat::Toml),
            _ => None,
        }
    }
}

fn normalize(language: &str, raw: Vec<RawEntry>) -> Result<TokenList> {
    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            RawEntry::Group(variants) if variants.is_empty() => Err(TokenError::dataset(
                language,
                format!("entry {index} has no variants"),
            )),
            RawEntry::Group(variants) => TokenEntry::new(variants),
            RawEntry::Bare(variant) => Ok(TokenEntry::singleton(variant)),
        })
        .collect()
}

/// Parse dataset content into a normalized token list
///
/// Bare strings become singleton entries. Empty groups, non-string variants
/// and non-array documents are rejected.
pub fn parse_dataset(language: &str, content: &str, format: DatasetFormat) -> Result<TokenList> {
    let raw = match format {
        DatasetFormat::Json => serde_json::from_str::<Vec<RawEntry>>(content)
            .map_err(|e| TokenError::dataset(language, e.to_string()))?,
        DatasetFormat::Toml => {
            toml::from_str::<TomlDataset>(content)
                .map_err(|e| TokenError::dataset(language, e.to_string()))?
                .entries
        }
    };
    normalize(language, raw)
}

macro_rules! embed_token_dataset {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

/// Datasets bundled with the crate
const EMBEDDED_DATASETS: [(&str, &str); 8] = [
    embed_token_dataset!("de", "../tokens/de.json"),
    embed_token_dataset!("en", "../tokens/en.json"),
    embed_token_dataset!("es", "../tokens/es.json"),
    embed_token_dataset!("fr", "../tokens/fr.json"),
    embed_token_dataset!("it", "../tokens/it.json"),
    embed_token_dataset!("nl", "../tokens/nl.json"),
    embed_token_dataset!("pt", "../tokens/pt.json"),
    embed_token_dataset!("sv", "../tokens/sv.json"),
];

/// The token datasets compiled into this crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl DatasetSource for EmbeddedSource {
    fn load(&self) -> Result<Vec<(LanguageCode, TokenList)>> {
        EMBEDDED_DATASETS
            .iter()
            .map(|(code, content)| {
                let list = parse_dataset(code, content, DatasetFormat::Json)?;
                Ok((LanguageCode::new(code)?, list))
            })
            .collect()
    }

    fn describe(&self) -> String {
        "embedded datasets".to_string()
    }
}

/// A directory of `<code>.json` / `<code>.toml` files, read once
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source for the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this source reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dataset_files(&self) -> Result<Vec<(PathBuf, DatasetFormat)>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let format = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(DatasetFormat::from_extension);
            match format {
                Some(format) => files.push((path, format)),
                None => debug!("Ignoring non-dataset file {}", path.display()),
            }
        }
        // read_dir order is platform dependent
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

impl DatasetSource for DirectorySource {
    fn load(&self) -> Result<Vec<(LanguageCode, TokenList)>> {
        let mut datasets = Vec::new();

        for (path, format) in self.dataset_files()? {
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();

            let code = match LanguageCode::new(stem) {
                Ok(code) => code,
                Err(e) => {
                    warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };

            let content = fs::read_to_string(&path)?;
            let list = parse_dataset(stem, &content, format)?;
            debug!(
                "Loaded {} entries for '{code}' from {}",
                list.len(),
                path.display()
            );
            datasets.push((code, list));
        }

        Ok(datasets)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// Datasets supplied directly by the caller
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    datasets: Vec<(LanguageCode, TokenList)>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset
    pub fn with(mut self, code: LanguageCode, list: TokenList) -> Self {
        self.datasets.push((code, list));
        self
    }
}

impl DatasetSource for MemorySource {
    fn load(&self) -> Result<Vec<(LanguageCode, TokenList)>> {
        Ok(self.datasets.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory datasets", self.datasets.len())
    }
}
