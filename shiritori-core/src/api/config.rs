//! Configuration API for chain processing

use crate::api::Error;

/// Default configuration constants
pub mod defaults {
    /// Largest input accepted by `ChainProcessor::process` (64MB)
    pub const MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

    /// Minimum batch size before messages are spread across threads
    pub const PARALLEL_THRESHOLD: usize = 64;
}

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) max_input_bytes: usize,
    pub(crate) threads: Option<usize>, // None = all available threads
    pub(crate) parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: defaults::MAX_INPUT_BYTES,
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Largest accepted input in bytes
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Worker threads for batch processing, `None` meaning all cores
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Minimum batch size for parallel processing
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_input_bytes == 0 {
            return Err(Error::Configuration(
                "max_input_bytes must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_input_bytes: Option<usize>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input size limit in bytes
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = Some(bytes);
        self
    }

    /// Set the number of worker threads for batches
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the batch size at which processing goes parallel
    pub fn parallel_threshold(mut self, messages: usize) -> Self {
        self.parallel_threshold = Some(messages);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let config = Config {
            max_input_bytes: self
                .max_input_bytes
                .unwrap_or(defaults::MAX_INPUT_BYTES),
            threads: self.threads,
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults::PARALLEL_THRESHOLD),
        };

        config.validate()?;
        Ok(config)
    }
}
