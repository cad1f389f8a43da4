use abbrevs_cli::commands::{init_logging, Commands};
use abbrevs_cli::CliResult;
use clap::Parser;

/// Query per-language abbreviation token lists
#[derive(Debug, Parser)]
#[command(name = "abbrevs", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);
    cli.command.execute()
}
