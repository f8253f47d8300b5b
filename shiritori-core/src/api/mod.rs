//! Processing API for shiritori-core
//!
//! Wraps the chain search with input sources, size limits, batch processing
//! and result metadata. Used by the CLI and by library consumers who need
//! more than the joined sequence.

mod config;
mod error;
mod input;
mod output;
mod processor;

#[cfg(test)]
mod tests;

pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{ChainMatch, Output, ProcessingMetadata};
pub use processor::ChainProcessor;
