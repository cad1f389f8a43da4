//! Validate command implementation

use abbrevs_core::{DirectorySource, Registry};
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Directory of token datasets to validate
    #[arg(short, long, value_name = "DIR", required = true)]
    pub data_dir: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock())
    }

    /// Execute the validate command, writing the report to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "Validating token datasets: {}",
            self.data_dir.display()
        )?;

        match Registry::from_source(&DirectorySource::new(&self.data_dir)) {
            Ok(registry) => {
                writeln!(out, "✓ Datasets are valid!")?;
                writeln!(out, "  Languages: {}", registry.len())?;
                for (code, list) in registry.iter() {
                    writeln!(
                        out,
                        "  {code}: {} entries ({} singletons)",
                        list.len(),
                        list.singleton_count()
                    )?;
                }
                Ok(())
            }
            Err(e) => {
                writeln!(out, "✗ Datasets are invalid!")?;
                writeln!(out, "  Error: {e}")?;
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
