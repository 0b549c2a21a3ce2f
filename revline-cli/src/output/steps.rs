//! Step log output formatter

use super::OutputFormatter;
use anyhow::Result;
use revline_api::Output;
use std::io::Write;

/// Steps formatter - prints the step log, marking highlighted steps with `*`
pub struct StepsFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> StepsFormatter<W> {
    /// Create a new steps formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for StepsFormatter<W> {
    fn format_output(&mut self, output: &Output) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        self.written += 1;

        let highlighted = output.highlighted_steps();
        for (i, step) in output.steps.iter().enumerate() {
            let marker = if highlighted.contains(&i) { '*' } else { ' ' };
            writeln!(self.writer, "{marker} {step}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
