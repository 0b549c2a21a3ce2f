//! In-memory execution path

use crate::{
    chunker::decode_all,
    config::ProcessingOptions,
    error::{EngineError, Result},
    executor::{Execution, Executor, Method, Source},
    splitter::reverse_lines,
};
use std::io::Read;
use std::time::Instant;

/// Holds the whole input and its lines at once
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryExecutor;

impl Executor for InMemoryExecutor {
    fn execute(&self, source: Source<'_>, options: &ProcessingOptions) -> Result<Execution> {
        match source {
            Source::Text(text) => {
                let start = Instant::now();
                let reversal = reverse_lines(text);
                Ok(Execution {
                    reversal,
                    decoded: None,
                    bytes_read: 0,
                    chunks: 1,
                    elapsed: start.elapsed(),
                })
            }
            Source::Stream { reader, label } => {
                let limit = options.max_input_size();
                let mut bytes = Vec::new();
                reader
                    .take(limit.saturating_add(1))
                    .read_to_end(&mut bytes)
                    .map_err(|e| EngineError::unreadable(label, e))?;

                let bytes_read = bytes.len() as u64;
                options.check_size(bytes_read)?;
                let text = decode_all(&bytes, options.encoding(), label)?;
                drop(bytes);

                let start = Instant::now();
                let reversal = reverse_lines(&text);
                Ok(Execution {
                    reversal,
                    decoded: Some(text),
                    bytes_read,
                    chunks: 1,
                    elapsed: start.elapsed(),
                })
            }
        }
    }

    fn method(&self) -> Method {
        Method::InMemory
    }
}
