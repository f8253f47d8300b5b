//! File reading utilities

use anyhow::{Context, Result};
use shiritori_core::Input;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// File reader for configuration and message input
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a message file, refusing files larger than `limit` bytes
    ///
    /// Returns `None` when the file is not valid UTF-8.
    pub fn read_message(path: &Path, limit: usize) -> Result<Option<String>> {
        let text = Input::from_file(path)
            .read_text(limit)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        if text.is_none() {
            log::warn!("{} is not valid UTF-8, treating it as empty", path.display());
        }
        Ok(text)
    }

    /// Read a message from a stream such as stdin
    pub fn read_stream(
        reader: impl Read + Send + Sync + 'static,
        limit: usize,
    ) -> Result<Option<String>> {
        let text = Input::from_reader(reader)
            .read_text(limit)
            .map_err(CliError::from)
            .context("Failed to read standard input")?;

        if text.is_none() {
            log::warn!("standard input is not valid UTF-8, treating it as empty");
        }
        Ok(text)
    }
}
