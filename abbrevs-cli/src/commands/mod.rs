//! CLI command implementations

use crate::error::CliError;
use abbrevs_core::{DirectorySource, TokenStore};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

pub mod list;
pub mod tokens;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print token lists for one language or for all languages
    Tokens(tokens::TokensArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Check that a directory of token datasets loads cleanly
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokens(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Where token data is read from
#[derive(Debug, Clone, Default, Args)]
pub struct DataArgs {
    /// Directory of <code>.json / <code>.toml datasets (default: bundled data)
    #[arg(short, long, value_name = "DIR", env = "ABBREVS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Open a store over `data_dir`, or over the bundled datasets
pub fn open_store(data_dir: Option<&Path>) -> Result<TokenStore> {
    let Some(dir) = data_dir else {
        log::debug!("Using embedded token datasets");
        return Ok(TokenStore::embedded());
    };

    if !dir.is_dir() {
        return Err(CliError::DataDirNotFound(dir.display().to_string()).into());
    }

    log::info!("Loading token datasets from {}", dir.display());
    TokenStore::from_source(&DirectorySource::new(dir))
        .with_context(|| format!("Failed to load token datasets from {}", dir.display()))
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
