//! Execution paths for line reversal

use crate::{config::ProcessingOptions, error::Result, splitter::Reversal};
use std::fmt;
use std::io::Read;
use std::time::Duration;

pub mod in_memory;
pub mod streaming;

pub use in_memory::InMemoryExecutor;
pub use streaming::StreamingExecutor;

/// Processing method used for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Whole input and line array held at once
    InMemory,
    /// Input read and split in bounded chunks
    Streaming,
}

impl Method {
    /// Name as it appears in metadata and step logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::InMemory => "in-memory",
            Method::Streaming => "streaming",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "in-memory" => Ok(Method::InMemory),
            "streaming" => Ok(Method::Streaming),
            other => Err(format!("unknown method '{other}'")),
        }
    }
}

/// Pick a method from the input size
///
/// Inputs strictly smaller than the threshold stay in memory.
pub fn select_method(size_bytes: u64, threshold: usize) -> Method {
    if size_bytes < threshold as u64 {
        Method::InMemory
    } else {
        Method::Streaming
    }
}

/// Where an executor reads its input from
pub enum Source<'a> {
    /// Text already decoded in memory
    Text(&'a str),
    /// Undecoded bytes read sequentially, exactly once
    Stream {
        /// The byte source
        reader: &'a mut dyn Read,
        /// Label used in error messages
        label: &'a str,
    },
}

/// Outcome of running an executor
#[derive(Debug)]
pub struct Execution {
    /// Reversed text and line count
    pub reversal: Reversal,
    /// Text decoded from a stream source, kept only by the in-memory path
    pub decoded: Option<String>,
    /// Bytes consumed from a stream source (zero for text sources)
    pub bytes_read: u64,
    /// Number of chunks the input was processed in
    pub chunks: usize,
    /// Time spent splitting, reversing and joining
    pub elapsed: Duration,
}

/// A way of turning a source into reversed text
pub trait Executor: Send + Sync {
    /// Reverse the lines of `source`
    fn execute(&self, source: Source<'_>, options: &ProcessingOptions) -> Result<Execution>;

    /// The method this executor implements
    fn method(&self) -> Method;
}
