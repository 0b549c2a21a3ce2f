//! revline - reverse the lines of text files

use clap::Parser;
use revline_cli::{commands::Commands, exit_code, CliResult};
use std::process::ExitCode;

/// Reverse the order of lines in text, like `tac`
#[derive(Debug, Parser)]
#[command(name = "revline", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn run(cli: Cli) -> CliResult<()> {
    cli.command.execute()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", revline_cli::error::render(&err));
            ExitCode::from(exit_code(&err))
        }
    }
}
