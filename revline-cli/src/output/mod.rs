//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use revline_api::Output;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for one input
    fn format_output(&mut self, output: &Output) -> Result<()>;

    /// Finalize output (e.g., emit the collected JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod steps;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use steps::StepsFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Reversed text only
    Text,
    /// Full result as JSON
    Json,
    /// Markdown report with steps and text
    Markdown,
    /// Step log with highlighted entries marked
    Steps,
}

impl OutputFormat {
    /// Parse a format name as written in a configuration file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// Name as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Steps => "steps",
        }
    }

    /// One-line description for `list formats`
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "Reversed text only (default)",
            OutputFormat::Json => "Full result with steps and metadata",
            OutputFormat::Markdown => "Report with steps, text and metadata",
            OutputFormat::Steps => "Step log, highlighted steps marked with *",
        }
    }
}

/// Presentation switches shared by the formatters
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// Show the original text alongside the reversal
    pub include_original: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            include_original: true,
        }
    }
}

/// Create the formatter for `format` writing to `writer`, for a run over
/// `inputs` inputs
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    options: OutputOptions,
    inputs: usize,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            inputs > 1,
            options.pretty_json,
            options.include_original,
        )),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer, options.include_original))
        }
        OutputFormat::Steps => Box::new(StepsFormatter::new(writer)),
    }
}
