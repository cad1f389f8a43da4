//! Tokens command implementation

use super::{open_store, DataArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the tokens command
#[derive(Debug, Args)]
pub struct TokensArgs {
    /// 2 letter ISO 639-1 language code (default: all languages)
    #[arg(value_name = "LANG")]
    pub language: Option<String>,

    /// Include single-variant entries
    #[arg(short, long, overrides_with = "no_singletons")]
    pub singletons: bool,

    /// Exclude single-variant entries, even if the config file includes them
    #[arg(long, overrides_with = "singletons")]
    pub no_singletons: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Emit compact JSON instead of pretty printed
    #[arg(long, overrides_with = "pretty")]
    pub compact: bool,

    /// Pretty print JSON, even if the config file disables it
    #[arg(long, overrides_with = "compact")]
    pub pretty: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub data: DataArgs,
}

impl TokensArgs {
    /// Execute the tokens command, writing to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(stdout.lock())
    }

    /// Execute the tokens command, writing to `out`
    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;

        let data_dir = self.data.data_dir.as_ref().or(config.data.directory.as_ref());
        let store = open_store(data_dir.map(PathBuf::as_path))?;

        let include_singletons = self.include_singletons(config.output.include_singletons);
        let pretty = self.pretty_json(config.output.pretty_json);

        log::info!(
            "Looking up {} (singletons: {include_singletons})",
            self.language.as_deref().unwrap_or("all languages")
        );

        let tokens = store
            .get_tokens(self.language.as_deref(), include_singletons)
            .map_err(|e| CliError::LookupError(e.to_string()))?;

        let mut formatter = self.format.formatter(out, pretty);
        formatter.write_tokens(&tokens)?;
        formatter.finish()
    }

    /// Singleton setting after applying command-line flags to `configured`
    fn include_singletons(&self, configured: bool) -> bool {
        if self.singletons {
            true
        } else if self.no_singletons {
            false
        } else {
            configured
        }
    }

    /// JSON pretty printing after applying command-line flags to `configured`
    fn pretty_json(&self, configured: bool) -> bool {
        if self.compact {
            false
        } else if self.pretty {
            true
        } else {
            configured
        }
    }
}
