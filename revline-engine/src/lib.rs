//! Line reversal engine
//!
//! Reverses the order of lines in a text (what `tac` does), either holding
//! the whole input in memory or streaming it in bounded chunks depending on
//! its size, and reports a step log plus size and timing metadata.
//!
//! # Example
//!
//! ```rust
//! use revline_engine::{LineReverser, Method};
//!
//! let reverser = LineReverser::default();
//! let result = reverser.process_text("first\nsecond\nthird").unwrap();
//!
//! assert_eq!(result.transformed, "third\nsecond\nfirst");
//! assert_eq!(result.line_count, 3);
//! assert_eq!(result.metadata.method, Method::InMemory);
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;
pub mod result;
pub mod splitter;
pub mod trace;

// Re-export key types
pub use config::{ProcessingOptions, ProcessingOptionsBuilder, COMMON_ENCODINGS};
pub use error::{EngineError, ErrorKind, Result};
pub use executor::{select_method, Method};
pub use input::Input;
pub use processor::LineReverser;
pub use result::{ProcessingMetadata, ProcessingResult};
pub use splitter::{reverse_chunks, reverse_lines, LineSplitter, Reversal};
pub use trace::{build_steps, is_highlight};
