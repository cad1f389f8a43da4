//! Output formatting module

use abbrevs_core::Tokens;
use anyhow::Result;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a lookup result
    fn write_tokens(&mut self, tokens: &Tokens) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array (one language) or object keyed by code (all languages)
    Json,
    /// One entry per line, variants separated by " | "
    Text,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Text];

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }

    /// Build a formatter for this format
    pub fn formatter<'a, W: Write + 'a>(
        &self,
        writer: W,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        }
    }
}
