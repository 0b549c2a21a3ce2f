//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use revline_api::Output;
use std::io::Write;

/// Plain text formatter - outputs the reversed text of each input
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_output(&mut self, output: &Output) -> Result<()> {
        writeln!(self.writer, "{}", output.transformed)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
