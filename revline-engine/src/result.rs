//! Result records returned by the engine

use crate::executor::Method;
use std::time::Duration;

/// Everything a call produces
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult {
    /// The original text, or a placeholder naming its size for streamed input
    pub original: String,
    /// Lines of the original in reverse order
    pub transformed: String,
    /// Step log for display
    pub steps: Vec<String>,
    /// Number of logical lines
    pub line_count: usize,
    /// Where the input came from
    pub source: String,
    /// Size and timing accounting
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingMetadata {
    /// Input size in bytes under the configured encoding
    pub original_size_bytes: u64,
    /// Time spent splitting, reversing and joining
    pub processing_time: Duration,
    /// Method that was used
    pub method: Method,
    /// Number of chunks processed
    pub chunks_processed: usize,
}

impl ProcessingMetadata {
    /// Processing time in whole milliseconds
    pub fn processing_time_ms(&self) -> u64 {
        u64::try_from(self.processing_time.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Stand-in for the original text of large inputs
pub fn original_placeholder(size_bytes: u64) -> String {
    format!(
        "[Large input: {} - original content not retained]",
        human_size(size_bytes)
    )
}

/// Render a byte count as B, KiB, MiB or GiB
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1023), "1023 B");
        assert_eq!(human_size(1024), "1.00 KiB");
        assert_eq!(human_size(64 * 1024 + 512), "64.50 KiB");
        assert_eq!(human_size(3 * 1024 * 1024), "3.00 MiB");
        assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5.00 GiB");
    }

    #[test]
    fn test_placeholder_names_size() {
        assert_eq!(
            original_placeholder(2 * 1024 * 1024),
            "[Large input: 2.00 MiB - original content not retained]"
        );
    }

    #[test]
    fn test_processing_time_ms() {
        let metadata = ProcessingMetadata {
            original_size_bytes: 0,
            processing_time: Duration::from_micros(2_500),
            method: Method::InMemory,
            chunks_processed: 1,
        };
        assert_eq!(metadata.processing_time_ms(), 2);
    }
}
