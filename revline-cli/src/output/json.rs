//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use revline_api::Output;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - one object for a single input, an array otherwise
///
/// The shape follows the number of inputs in the run, not the number that
/// succeeded.
pub struct JsonFormatter<W: Write> {
    writer: W,
    multi: bool,
    pretty: bool,
    include_original: bool,
    outputs: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, multi: bool, pretty: bool, include_original: bool) -> Self {
        Self {
            writer,
            multi,
            pretty,
            include_original,
            outputs: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_output(&mut self, output: &Output) -> Result<()> {
        let mut value = serde_json::to_value(output)?;
        if !self.include_original {
            if let Some(object) = value.as_object_mut() {
                object.remove("original");
            }
        }
        self.outputs.push(value);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = if self.multi {
            Value::Array(std::mem::take(&mut self.outputs))
        } else {
            self.outputs.pop().unwrap_or(Value::Null)
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample;

    fn render(formatter: JsonFormatter<Vec<u8>>) -> Value {
        serde_json::from_slice(&formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_single_output_is_an_object() {
        let mut formatter = JsonFormatter::new(Vec::new(), false, false, true);
        formatter.format_output(&sample()).unwrap();
        formatter.finish().unwrap();

        let value = render(formatter);
        assert_eq!(value["transformed"], "third\nsecond\nfirst");
        assert_eq!(value["original"], "first\nsecond\nthird");
        assert_eq!(value["lineCount"], 3);
        assert_eq!(value["metadata"]["method"], "in-memory");
    }

    #[test]
    fn test_multiple_outputs_form_an_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true, true, true);
        formatter.format_output(&sample()).unwrap();
        formatter.format_output(&sample()).unwrap();
        formatter.finish().unwrap();

        let value = render(formatter);
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_multi_input_run_with_one_success_is_still_an_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true, false, true);
        formatter.format_output(&sample()).unwrap();
        formatter.finish().unwrap();

        let value = render(formatter);
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["lineCount"], 3);
    }

    #[test]
    fn test_original_can_be_left_out() {
        let mut formatter = JsonFormatter::new(Vec::new(), false, false, false);
        formatter.format_output(&sample()).unwrap();
        formatter.finish().unwrap();

        let value = render(formatter);
        assert!(value.get("original").is_none());
        assert!(value.get("transformed").is_some());
    }
}
