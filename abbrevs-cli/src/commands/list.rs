//! List command implementation

use super::{open_store, DataArgs};
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List language codes that have a dataset
    Languages(DataArgs),

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command, writing to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock())
    }

    /// Execute the list command, writing to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Languages(data) => {
                let store = open_store(data.data_dir.as_deref())?;
                for code in store.languages() {
                    writeln!(out, "{code}")?;
                }
            }
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    writeln!(out, "{}", format.as_str())?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
