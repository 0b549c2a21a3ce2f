//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        std::fs::write(&self.output, generate_template(&CliConfig::default()))
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!(
            "Use it with: revline reverse -c {} -i <FILE>",
            self.output.display()
        );
        Ok(())
    }
}

/// Commented TOML template holding `config`'s values
pub fn generate_template(config: &CliConfig) -> String {
    format!(
        r#"# revline configuration
# Command-line flags override the values below.

[processing]
# Encoding of input files (any WHATWG label, see `revline list encodings`)
encoding = "{encoding}"
# Read unit in KB; inputs smaller than this are reversed in memory
chunk_size_kb = {chunk}
# Largest accepted input in MB
max_input_mb = {max}

[output]
# text, json, markdown or steps
default_format = "{format}"
pretty_json = {pretty}
# Show the original text in json and markdown output
include_original = {original}

[performance]
# Worker threads for multi-file runs (0 = one per CPU)
worker_threads = {threads}
"#,
        encoding = config.processing.encoding,
        chunk = config.processing.chunk_size_kb,
        max = config.processing.max_input_mb,
        format = config.output.default_format,
        pretty = config.output.pretty_json,
        original = config.output.include_original,
        threads = config.performance.worker_threads,
    )
}
