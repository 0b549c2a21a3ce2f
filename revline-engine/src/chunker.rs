//! Chunked reading and decoding
//!
//! [`ChunkReader`] pulls fixed-size byte reads from a source and decodes each
//! with a persistent decoder, so a multi-byte sequence cut by a read boundary
//! is completed by the next read. [`text_chunks`] cuts text that is already in
//! memory into pieces on UTF-8 character boundaries.

use crate::{
    config::ProcessingOptions,
    error::{EngineError, Result},
};
use encoding_rs::{Decoder, DecoderResult, Encoding, EncoderResult, UTF_16BE, UTF_16LE, UTF_8};
use std::io::{self, Read};

/// Decodes a byte stream into text chunks, one read at a time
pub struct ChunkReader<R> {
    reader: R,
    decoder: Decoder,
    buffer: Vec<u8>,
    label: String,
    limit: u64,
    bytes_read: u64,
    chunks_read: usize,
    finished: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Create a reader over `reader` using the chunk size, encoding and
    /// size ceiling from `options`
    pub fn new(reader: R, label: impl Into<String>, options: &ProcessingOptions) -> Self {
        Self {
            reader,
            decoder: options.encoding().new_decoder_without_bom_handling(),
            buffer: vec![0u8; options.chunk_size()],
            label: label.into(),
            limit: options.max_input_size(),
            bytes_read: 0,
            chunks_read: 0,
            finished: false,
        }
    }

    /// Bytes consumed from the source so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Non-empty reads performed so far
    pub fn chunks_read(&self) -> usize {
        self.chunks_read
    }

    fn next_chunk(&mut self) -> Result<Option<String>> {
        if self.finished {
            return Ok(None);
        }

        let n = loop {
            match self.reader.read(&mut self.buffer) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(EngineError::unreadable(self.label.as_str(), e)),
            }
        };

        self.bytes_read += n as u64;
        if self.bytes_read > self.limit {
            return Err(EngineError::SizeExceeded {
                size: self.bytes_read,
                limit: self.limit,
            });
        }

        let last = n == 0;
        let text = decode_chunk(&mut self.decoder, &self.buffer[..n], last, &self.label)?;

        if last {
            self.finished = true;
            // Only a flushed partial sequence could produce text here
            return Ok(if text.is_empty() { None } else { Some(text) });
        }

        self.chunks_read += 1;
        log::trace!(
            "{}: chunk {} ({} bytes, {} total)",
            self.label,
            self.chunks_read,
            n,
            self.bytes_read
        );
        Ok(Some(text))
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_chunk() {
            Ok(chunk) => chunk.map(Ok),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn decode_chunk(decoder: &mut Decoder, bytes: &[u8], last: bool, label: &str) -> Result<String> {
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .ok_or_else(|| EngineError::Internal("decode buffer size overflow".to_string()))?;
    let mut text = String::with_capacity(capacity);

    let (result, _) = decoder.decode_to_string_without_replacement(bytes, &mut text, last);
    match result {
        DecoderResult::InputEmpty => Ok(text),
        DecoderResult::Malformed(_, _) => Err(not_text(label, decoder.encoding())),
        DecoderResult::OutputFull => Err(EngineError::Internal(format!(
            "decode buffer too small while reading {label}"
        ))),
    }
}

/// Decode a complete byte buffer in one pass
pub fn decode_all(bytes: &[u8], encoding: &'static Encoding, label: &str) -> Result<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| not_text(label, encoding))
}

/// Byte length of `text` once encoded with `encoding`
///
/// Text the encoding cannot represent is rejected rather than counted with
/// substitutes.
pub fn encoded_len(text: &str, encoding: &'static Encoding, label: &str) -> Result<u64> {
    if encoding == UTF_8 {
        return Ok(text.len() as u64);
    }
    // encoding_rs encoders only ever produce UTF-8 for the UTF-16 family
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Ok(text.encode_utf16().count() as u64 * 2);
    }

    let mut encoder = encoding.new_encoder();
    let mut buffer = [0u8; 4096];
    let mut rest = text;
    let mut total = 0u64;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(rest, &mut buffer, true);
        total += written as u64;
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => return Ok(total),
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(c) => {
                return Err(EngineError::invalid_input(format!(
                    "{label} contains {c:?}, which {} cannot represent",
                    encoding.name()
                )))
            }
        }
    }
}

fn not_text(label: &str, encoding: &'static Encoding) -> EngineError {
    EngineError::invalid_input(format!("{label} is not valid {} text", encoding.name()))
}

/// Iterator over pieces of `text` of at most `size` bytes
///
/// A piece is only longer than `size` when a single character is.
pub fn text_chunks(text: &str, size: usize) -> TextChunks<'_> {
    TextChunks {
        rest: text,
        size: size.max(1),
    }
}

/// See [`text_chunks`]
#[derive(Debug, Clone)]
pub struct TextChunks<'a> {
    rest: &'a str,
    size: usize,
}

impl<'a> Iterator for TextChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let mut end = self.size.min(self.rest.len());
        while !self.rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            // First character is wider than the chunk size
            end = self.rest.chars().next().map_or(self.rest.len(), char::len_utf8);
        }

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
