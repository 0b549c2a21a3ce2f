//! CLI command implementations

use crate::{error::CliResult, output::OutputFormat};
use clap::{Subcommand, ValueEnum};

pub mod generate_config;
pub mod reverse;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reverse the line order of files, text or standard input
    Reverse(reverse::ReverseArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List commonly used encoding labels
    Encodings,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Reverse(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed for this listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .map(|format| format!("{:<10} {}\n", format.name(), format.description()))
                .collect(),
            ListCommands::Encodings => revline_api::COMMON_ENCODINGS
                .iter()
                .map(|label| format!("{label}\n"))
                .collect(),
        }
    }
}
