//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use revline_api::Output;
use std::io::Write;

/// Markdown formatter - one section per input with steps and text
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_original: bool,
    total_lines: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_original: bool) -> Self {
        Self {
            writer,
            include_original,
            total_lines: 0,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn code_block(&mut self, text: &str) -> Result<()> {
        let fence = fence_for(text);
        writeln!(self.writer, "{fence}")?;
        writeln!(self.writer, "{text}")?;
        writeln!(self.writer, "{fence}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Shortest backtick fence that does not occur in `text`
fn fence_for(text: &str) -> String {
    let mut fence = "```".to_string();
    while text.contains(&fence) {
        fence.push('`');
    }
    fence
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_output(&mut self, output: &Output) -> Result<()> {
        self.total_lines += output.line_count;

        writeln!(self.writer, "## {}", output.source)?;
        writeln!(self.writer)?;

        let highlighted = output.highlighted_steps();
        for (i, step) in output.steps.iter().enumerate() {
            if highlighted.contains(&i) {
                writeln!(self.writer, "{}. **{}**", i + 1, step)?;
            } else {
                writeln!(self.writer, "{}. {}", i + 1, step)?;
            }
        }
        writeln!(self.writer)?;

        if self.include_original {
            writeln!(self.writer, "### Original")?;
            writeln!(self.writer)?;
            self.code_block(&output.original)?;
        }

        writeln!(self.writer, "### Reversed")?;
        writeln!(self.writer)?;
        self.code_block(&output.transformed)?;

        let meta = &output.metadata;
        writeln!(
            self.writer,
            "*{} lines, {} bytes, {} in {} ms*",
            output.line_count, meta.original_size_bytes, meta.method, meta.processing_time_ms
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total lines reversed: {}*", self.total_lines)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample;

    fn render(include_original: bool) -> String {
        let mut formatter = MarkdownFormatter::new(Vec::new(), include_original);
        formatter.format_output(&sample()).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_sections_and_highlights() {
        let text = render(true);
        assert!(text.starts_with("## direct text\n"));
        assert!(text.contains("1. **Source: direct text**"));
        assert!(text.contains("2. Method: in-memory"));
        assert!(text.contains("### Original\n\n```\nfirst\nsecond\nthird\n```"));
        assert!(text.contains("### Reversed\n\n```\nthird\nsecond\nfirst\n```"));
        assert!(text.ends_with("---\n*Total lines reversed: 3*\n"));
    }

    #[test]
    fn test_original_can_be_left_out() {
        assert!(!render(false).contains("### Original"));
    }

    #[test]
    fn test_fence_avoids_content_backticks() {
        assert_eq!(fence_for("plain"), "```");
        assert_eq!(fence_for("has ``` inside"), "````");
    }
}
