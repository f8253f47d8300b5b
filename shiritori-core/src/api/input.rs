//! Input abstraction for the processing API

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::api::Error;

/// Unified input abstraction for various data sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the input into bytes, refusing anything over `limit`
    pub fn read_bytes(self, limit: usize) -> Result<Vec<u8>, Error> {
        let bytes = match self {
            Input::Text(text) => text.into_bytes(),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => File::open(&path)
                .and_then(|file| read_limited(file, limit))
                .map_err(|e| {
                    Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
                })?,
            Input::Reader(reader) => read_limited(reader, limit).map_err(|e| {
                Error::Infrastructure(format!("Failed to read from reader: {}", e))
            })?,
        };

        if bytes.len() > limit {
            return Err(Error::InputTooLarge {
                size: bytes.len(),
                limit,
            });
        }

        Ok(bytes)
    }

    /// Get text content from input
    ///
    /// Content that is not valid UTF-8 is not text and yields `None`.
    pub fn read_text(self, limit: usize) -> Result<Option<String>, Error> {
        let bytes = self.read_bytes(limit)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                log::debug!("input is not valid UTF-8, treating as absent: {}", e);
                Ok(None)
            }
        }
    }
}

/// Read at most one byte past `limit` so oversized sources are detected
/// without loading them whole
fn read_limited(reader: impl Read, limit: usize) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buffer)?;
    Ok(buffer)
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}
