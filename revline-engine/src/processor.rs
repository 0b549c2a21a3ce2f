//! Line reverser: method selection, dispatch and result assembly

use crate::{
    chunker::encoded_len,
    config::ProcessingOptions,
    error::{EngineError, Result},
    executor::{
        select_method, Execution, Executor, InMemoryExecutor, Method, Source, StreamingExecutor,
    },
    input::Input,
    result::{original_placeholder, ProcessingMetadata, ProcessingResult},
    trace::build_steps,
};
use std::fs::{self, File};
use std::io;

/// Main entry point for line reversal
///
/// Holds only immutable options; every call is independent, so one
/// reverser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LineReverser {
    options: ProcessingOptions,
    in_memory: InMemoryExecutor,
    streaming: StreamingExecutor,
}

impl LineReverser {
    /// Create a reverser with the given options
    pub fn new(options: ProcessingOptions) -> Self {
        Self {
            options,
            in_memory: InMemoryExecutor,
            streaming: StreamingExecutor,
        }
    }

    /// The options every call runs with
    pub fn options(&self) -> &ProcessingOptions {
        &self.options
    }

    /// Process input with the method picked from its size
    pub fn process(&self, input: Input) -> Result<ProcessingResult> {
        self.run(input, None)
    }

    /// Process input with a specific method regardless of its size
    pub fn process_with_method(&self, input: Input, method: Method) -> Result<ProcessingResult> {
        self.run(input, Some(method))
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<ProcessingResult> {
        self.process(Input::from_text(text))
    }

    fn executor(&self, method: Method) -> &dyn Executor {
        match method {
            Method::InMemory => &self.in_memory,
            Method::Streaming => &self.streaming,
        }
    }

    fn execute(&self, method: Method, source: Source<'_>) -> Result<Execution> {
        let executor = self.executor(method);
        log::trace!("running the {} executor", executor.method());
        executor.execute(source, &self.options)
    }

    fn choose(&self, size: Option<u64>, forced: Option<Method>) -> Method {
        let method = forced.unwrap_or_else(|| match size {
            Some(size) => select_method(size, self.options.chunk_size()),
            None => Method::Streaming,
        });
        log::debug!(
            "selected {} for {:?} bytes (threshold {}, forced: {})",
            method,
            size,
            self.options.chunk_size(),
            forced.is_some()
        );
        method
    }

    fn run(&self, input: Input, forced: Option<Method>) -> Result<ProcessingResult> {
        let label = input.label();

        match input {
            Input::Text { text, .. } => {
                let size = encoded_len(&text, self.options.encoding(), &label)?;
                self.options.check_size(size)?;
                let method = self.choose(Some(size), forced);
                let execution = self.execute(method, Source::Text(&text))?;
                Ok(self.assemble(execution, method, label, size, Some(text)))
            }
            Input::Bytes { bytes, .. } => {
                let size = bytes.len() as u64;
                self.options.check_size(size)?;
                let method = self.choose(Some(size), forced);
                self.run_stream(&mut bytes.as_slice(), method, label)
            }
            Input::File(path) => {
                let shown = path.display().to_string();
                let metadata = fs::metadata(&path).map_err(|e| open_error(&shown, e))?;
                if !metadata.is_file() {
                    return Err(EngineError::SourceUnreadable {
                        name: shown,
                        reason: "not a regular file".to_string(),
                    });
                }
                if metadata.len() == 0 {
                    return Err(EngineError::EmptySource { name: shown });
                }
                self.options.check_size(metadata.len())?;

                let method = self.choose(Some(metadata.len()), forced);
                let mut file = File::open(&path).map_err(|e| open_error(&shown, e))?;
                self.run_stream(&mut file, method, label)
            }
            Input::Reader {
                mut reader,
                size_hint,
                ..
            } => {
                if let Some(hint) = size_hint {
                    self.options.check_size(hint)?;
                }
                let method = self.choose(size_hint, forced);
                self.run_stream(&mut reader, method, label)
            }
        }
    }

    fn run_stream(
        &self,
        reader: &mut dyn io::Read,
        method: Method,
        label: String,
    ) -> Result<ProcessingResult> {
        let mut execution = self.execute(
            method,
            Source::Stream {
                reader,
                label: &label,
            },
        )?;
        let size = execution.bytes_read;
        let decoded = execution.decoded.take();
        Ok(self.assemble(execution, method, label, size, decoded))
    }

    fn assemble(
        &self,
        execution: Execution,
        method: Method,
        source: String,
        size: u64,
        original: Option<String>,
    ) -> ProcessingResult {
        let Execution {
            reversal,
            chunks,
            elapsed,
            ..
        } = execution;

        log::debug!(
            "{}: {} lines, {} bytes, {} chunks via {} in {:?}",
            source,
            reversal.line_count,
            size,
            chunks,
            method,
            elapsed
        );

        let original = match (method, original) {
            (Method::InMemory, Some(text)) => text,
            _ => original_placeholder(size),
        };

        ProcessingResult {
            original,
            steps: build_steps(reversal.line_count, &source, method),
            transformed: reversal.transformed,
            line_count: reversal.line_count,
            source,
            metadata: ProcessingMetadata {
                original_size_bytes: size,
                processing_time: elapsed,
                method,
                chunks_processed: chunks,
            },
        }
    }
}

fn open_error(name: &str, err: io::Error) -> EngineError {
    if err.kind() == io::ErrorKind::NotFound {
        EngineError::SourceNotFound {
            name: name.to_string(),
        }
    } else {
        EngineError::unreadable(name, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Cursor;

    fn small_chunks(size: usize) -> LineReverser {
        LineReverser::new(
            ProcessingOptions::builder()
                .chunk_size(size)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_small_text_stays_in_memory() {
        let result = LineReverser::default().process_text("a\nb\nc").unwrap();
        assert_eq!(result.transformed, "c\nb\na");
        assert_eq!(result.original, "a\nb\nc");
        assert_eq!(result.line_count, 3);
        assert_eq!(result.source, "direct text");
        assert_eq!(result.metadata.method, Method::InMemory);
        assert_eq!(result.metadata.original_size_bytes, 5);
        assert_eq!(result.steps[0], "Source: direct text");
    }

    #[test]
    fn test_text_at_threshold_streams_with_placeholder() {
        let result = small_chunks(5).process_text("a\nb\nc").unwrap();
        assert_eq!(result.metadata.method, Method::Streaming);
        assert_eq!(result.transformed, "c\nb\na");
        assert_eq!(
            result.original,
            "[Large input: 5 B - original content not retained]"
        );
        assert_eq!(result.metadata.chunks_processed, 1);
    }

    #[test]
    fn test_forced_method() {
        let result = LineReverser::default()
            .process_with_method(Input::from_text("x\ny"), Method::Streaming)
            .unwrap();
        assert_eq!(result.metadata.method, Method::Streaming);
        assert_eq!(result.steps[1], "Method: streaming");
        assert_eq!(result.transformed, "y\nx");
    }

    #[test]
    fn test_bytes_input() {
        let result = LineReverser::default()
            .process(Input::from_bytes(b"1\n2".to_vec(), "upload"))
            .unwrap();
        assert_eq!(result.source, "upload");
        assert_eq!(result.original, "1\n2");
        assert_eq!(result.transformed, "2\n1");
        assert_eq!(result.metadata.original_size_bytes, 3);
    }

    #[test]
    fn test_reader_without_hint_streams() {
        let result = LineReverser::default()
            .process(Input::from_reader(Cursor::new(b"x\ny\n".to_vec()), None))
            .unwrap();
        assert_eq!(result.metadata.method, Method::Streaming);
        assert_eq!(result.metadata.original_size_bytes, 4);
        assert_eq!(result.line_count, 3);
    }

    #[test]
    fn test_size_ceiling_on_text() {
        let reverser = LineReverser::new(
            ProcessingOptions::builder()
                .max_input_size(3)
                .build()
                .unwrap(),
        );
        let err = reverser.process_text("abcd").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SizeExceeded);
        assert!(reverser.process_text("abc").is_ok());
    }

    #[test]
    fn test_size_ceiling_on_reader_hint() {
        let reverser = LineReverser::new(
            ProcessingOptions::builder()
                .max_input_size(3)
                .build()
                .unwrap(),
        );
        let err = reverser
            .process(Input::from_reader(Cursor::new(vec![]), Some(10)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SizeExceeded);
    }

    #[test]
    fn test_text_size_under_configured_encoding() {
        let reverser = |label: &str| {
            LineReverser::new(
                ProcessingOptions::builder()
                    .encoding(label)
                    .build()
                    .unwrap(),
            )
        };

        let result = reverser("utf-16le").process_text("ab\ncd").unwrap();
        assert_eq!(result.metadata.original_size_bytes, 10);
        assert_eq!(result.transformed, "cd\nab");

        let result = reverser("latin1").process_text("café").unwrap();
        assert_eq!(result.metadata.original_size_bytes, 4);

        let err = reverser("latin1").process_text("日").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_utf16_size_drives_method_and_ceiling() {
        // 3 characters are 6 bytes in UTF-16
        let options = ProcessingOptions::builder()
            .encoding("utf-16be")
            .chunk_size(5)
            .build()
            .unwrap();
        let result = LineReverser::new(options).process_text("a\nb").unwrap();
        assert_eq!(result.metadata.method, Method::Streaming);

        let options = ProcessingOptions::builder()
            .encoding("utf-16be")
            .max_input_size(5)
            .build()
            .unwrap();
        let err = LineReverser::new(options).process_text("a\nb").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SizeExceeded);
    }

    #[test]
    fn test_executor_dispatch() {
        let reverser = LineReverser::default();
        for method in [Method::InMemory, Method::Streaming] {
            assert_eq!(reverser.executor(method).method(), method);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = LineReverser::default()
            .process(Input::from_file("/nonexistent/revline/input.txt"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceNotFound);
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = LineReverser::default()
            .process(Input::from_file(dir.path()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnreadable);
    }
}
