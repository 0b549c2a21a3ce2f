//! Streaming execution path

use crate::{
    chunker::{text_chunks, ChunkReader},
    config::ProcessingOptions,
    error::{EngineError, Result},
    executor::{Execution, Executor, Method, Source},
    splitter::reverse_chunks,
};
use std::time::{Duration, Instant};

/// Reads and splits input in bounded chunks
///
/// Chunks are consumed strictly in arrival order. Only the split lines are
/// buffered; the reversed output needs all of them before it can be built.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingExecutor;

impl Executor for StreamingExecutor {
    fn execute(&self, source: Source<'_>, options: &ProcessingOptions) -> Result<Execution> {
        let start = Instant::now();
        let mut chunks = 0usize;
        let mut excluded = Duration::ZERO;

        let (reversal, bytes_read) = match source {
            Source::Text(text) => {
                let pieces = text_chunks(text, options.chunk_size())
                    .inspect(|_| chunks += 1)
                    .map(Ok::<_, EngineError>);
                (reverse_chunks(pieces)?, 0)
            }
            Source::Stream { reader, label } => {
                let mut reader = ChunkReader::new(reader, label, options);
                // Reads and decoding are interleaved with splitting; keep them
                // out of the reported time
                let mut reading = Duration::ZERO;
                let timed = std::iter::from_fn(|| {
                    let read_start = Instant::now();
                    let chunk = reader.next();
                    reading += read_start.elapsed();
                    chunk
                });
                let reversal = reverse_chunks(timed)?;
                chunks = reader.chunks_read();
                excluded = reading;
                (reversal, reader.bytes_read())
            }
        };

        log::trace!(
            "streamed {} chunks into {} lines",
            chunks,
            reversal.line_count
        );

        Ok(Execution {
            reversal,
            decoded: None,
            bytes_read,
            chunks,
            elapsed: start.elapsed().saturating_sub(excluded),
        })
    }

    fn method(&self) -> Method {
        Method::Streaming
    }
}
