//! Input abstraction for line reversal
//!
//! Transport layers hand the engine either text they already hold or a byte
//! source (uploaded bytes, a file path, any reader) plus a label describing
//! where it came from.

use std::io::Read;
use std::path::{Path, PathBuf};

/// Label used for text supplied directly by the caller
pub const DIRECT_TEXT_LABEL: &str = "direct text";

/// Unified input abstraction
pub enum Input {
    /// Text already decoded
    Text {
        /// The text itself
        text: String,
        /// Human-readable origin
        label: String,
    },
    /// Raw bytes in the configured encoding
    Bytes {
        /// The bytes
        bytes: Vec<u8>,
        /// Human-readable origin
        label: String,
    },
    /// File path to read from
    File(PathBuf),
    /// Sequential byte stream (stdin, pipes, sockets)
    Reader {
        /// The stream; dropped once the call returns
        reader: Box<dyn Read + Send>,
        /// Expected size in bytes, if known
        size_hint: Option<u64>,
        /// Human-readable origin
        label: String,
    },
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text { text, label } => f
                .debug_struct("Text")
                .field("label", label)
                .field("len", &text.len())
                .finish(),
            Input::Bytes { bytes, label } => f
                .debug_struct("Bytes")
                .field("label", label)
                .field("len", &format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader {
                size_hint, label, ..
            } => f
                .debug_struct("Reader")
                .field("label", label)
                .field("size_hint", size_hint)
                .finish(),
        }
    }
}

impl Input {
    /// Create input from text typed or pasted by a user
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text {
            text: text.into(),
            label: DIRECT_TEXT_LABEL.to_string(),
        }
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>, label: impl Into<String>) -> Self {
        Input::Bytes {
            bytes,
            label: label.into(),
        }
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R, size_hint: Option<u64>) -> Self {
        Input::Reader {
            reader: Box::new(reader),
            size_hint,
            label: "stream".to_string(),
        }
    }

    /// Replace the source label (ignored for files, which are labelled by name)
    pub fn with_label(mut self, new_label: impl Into<String>) -> Self {
        match &mut self {
            Input::Text { label, .. }
            | Input::Bytes { label, .. }
            | Input::Reader { label, .. } => *label = new_label.into(),
            Input::File(_) => {}
        }
        self
    }

    /// Human-readable label of where the input came from
    pub fn label(&self) -> String {
        match self {
            Input::Text { label, .. } | Input::Bytes { label, .. } | Input::Reader { label, .. } => {
                label.clone()
            }
            Input::File(path) => file_label(path),
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::from_text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}
