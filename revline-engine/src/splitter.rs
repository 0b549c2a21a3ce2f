//! Line splitting, reversal and reassembly
//!
//! A logical line is a maximal run of text between `\n` delimiters. `\r` is an
//! ordinary character and stays attached to whatever line it appears in.
//!
//! Both the whole-text path and the chunked path follow split semantics: the
//! fragment after the last `\n` is always a line, even when empty. So `""`
//! is one empty line and `"a\n"` is the two lines `"a"` and `""`. Under that
//! rule reversing twice gives back the input exactly.

use crate::error::Result;

/// Line delimiter
pub const LINE_SEPARATOR: char = '\n';

/// Output of a reversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversal {
    /// Lines joined in reverse order
    pub transformed: String,
    /// Number of logical lines in the input
    pub line_count: usize,
}

/// Incremental splitter for text that arrives in chunks
///
/// Chunk boundaries do not have to line up with line boundaries: whatever
/// follows the last `\n` of a chunk is carried over and prefixed to the next
/// one.
#[derive(Debug, Default)]
pub struct LineSplitter {
    lines: Vec<String>,
    carry: String,
}

impl LineSplitter {
    /// Create an empty splitter
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk, in arrival order
    pub fn push(&mut self, chunk: &str) {
        let mut rest = chunk;
        while let Some(pos) = rest.find(LINE_SEPARATOR) {
            let head = &rest[..pos];
            if self.carry.is_empty() {
                self.lines.push(head.to_string());
            } else {
                self.carry.push_str(head);
                self.lines.push(std::mem::take(&mut self.carry));
            }
            rest = &rest[pos + LINE_SEPARATOR.len_utf8()..];
        }
        self.carry.push_str(rest);
    }

    /// Flush the trailing fragment and return all lines in input order
    pub fn finish(mut self) -> Vec<String> {
        self.lines.push(self.carry);
        self.lines
    }
}

/// Split text into logical lines, in input order
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(LINE_SEPARATOR).collect()
}

/// Join lines in reverse order with a single `\n` between them
pub fn join_reversed<S: AsRef<str>>(lines: &[S]) -> String {
    let content: usize = lines.iter().map(|line| line.as_ref().len()).sum();
    let mut out = String::with_capacity(content + lines.len().saturating_sub(1));

    for (i, line) in lines.iter().rev().enumerate() {
        if i > 0 {
            out.push(LINE_SEPARATOR);
        }
        out.push_str(line.as_ref());
    }

    out
}

/// Reverse the lines of a complete in-memory text
pub fn reverse_lines(text: &str) -> Reversal {
    let lines = split_lines(text);
    Reversal {
        transformed: join_reversed(&lines),
        line_count: lines.len(),
    }
}

/// Reverse the lines of text delivered as an ordered sequence of chunks
///
/// The first chunk error stops consumption and is returned as-is.
pub fn reverse_chunks<I, S>(chunks: I) -> Result<Reversal>
where
    I: IntoIterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let mut splitter = LineSplitter::new();
    for chunk in chunks {
        splitter.push(chunk?.as_ref());
    }

    let lines = splitter.finish();
    Ok(Reversal {
        transformed: join_reversed(&lines),
        line_count: lines.len(),
    })
}
