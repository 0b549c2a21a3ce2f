//! Human-readable step log
//!
//! The steps describe what a call did and give worked examples of where
//! original lines end up. They are display data only; nothing downstream
//! parses them beyond [`is_highlight`].

use crate::executor::Method;

/// Marker present in the source line
pub const SOURCE_MARKER: &str = "Source:";
/// Marker present in the total line
pub const TOTAL_MARKER: &str = "Total lines:";
/// Marker present in the completion line
pub const COMPLETE_MARKER: &str = "Reversal complete";
/// Header announcing the reversal section
pub const REVERSAL_HEADER: &str = "=== Applying line reversal ===";
/// Stands in for skipped worked examples
pub const ELLIPSIS: &str = "...";

const LEADING_EXAMPLES: usize = 3;
const EXHAUSTIVE_LIMIT: usize = 6;

/// Build the step log for a finished reversal
pub fn build_steps(line_count: usize, source: &str, method: Method) -> Vec<String> {
    let mut steps = vec![
        format!("{SOURCE_MARKER} {source}"),
        format!("Method: {method}"),
        format!("{TOTAL_MARKER} {line_count}"),
        REVERSAL_HEADER.to_string(),
    ];

    let leading = line_count.min(LEADING_EXAMPLES);
    for i in 1..=leading {
        steps.push(example(line_count, i));
    }

    if line_count > EXHAUSTIVE_LIMIT {
        steps.push(ELLIPSIS.to_string());
        steps.push(example(line_count, line_count - 1));
        steps.push(example(line_count, line_count));
    } else {
        for i in leading + 1..=line_count {
            steps.push(example(line_count, i));
        }
    }

    steps.push(COMPLETE_MARKER.to_string());
    steps.push(format!("Summary: {line_count} lines reversed"));
    steps
}

/// Whether a step deserves emphasis when displayed
pub fn is_highlight(step: &str) -> bool {
    [SOURCE_MARKER, TOTAL_MARKER, COMPLETE_MARKER]
        .iter()
        .any(|marker| step.contains(marker))
}

/// Output line `i` holds original line `n - i + 1`
fn example(line_count: usize, i: usize) -> String {
    format!(
        "Line {} (original) → Line {} (result)",
        line_count - i + 1,
        i
    )
}
