//! Main chain processor implementation

use std::time::Instant;

use crate::api::{Config, Error, Input, Output};
use crate::domain::ChainSequenceFinder;

/// Chain processor with input handling and batch support
#[derive(Debug, Clone, Default)]
pub struct ChainProcessor {
    finder: ChainSequenceFinder,
    config: Config,
}

impl ChainProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            finder: ChainSequenceFinder::new(),
            config,
        })
    }

    /// Process input and return the longest chain
    ///
    /// Fails only when the input cannot be read or exceeds the configured
    /// size limit. Input that is not valid UTF-8 produces an empty result.
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();
        log::debug!("processing {:?}", input);

        match input.read_text(self.config.max_input_bytes)? {
            Some(text) => {
                let outcome = self.finder.scan(&text);
                Ok(Output::from_scan(outcome, &text, start.elapsed()))
            }
            None => Ok(Output::empty(start.elapsed())),
        }
    }

    /// Process a text message directly
    pub fn process_text(&self, text: &str) -> Output {
        let start = Instant::now();
        let outcome = self.finder.scan(text);
        Output::from_scan(outcome, text, start.elapsed())
    }

    /// Process independent messages, one output per message in input order
    ///
    /// Batches at or above the configured threshold run on a thread pool when
    /// the `parallel` feature is enabled. Results match sequential processing.
    pub fn process_batch<S>(&self, messages: &[S]) -> Result<Vec<Output>, Error>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        if messages.len() >= self.config.parallel_threshold && messages.len() > 1 {
            return self.process_batch_parallel(messages);
        }

        log::debug!("processing batch of {} messages sequentially", messages.len());
        Ok(messages
            .iter()
            .map(|message| self.process_text(message.as_ref()))
            .collect())
    }

    #[cfg(feature = "parallel")]
    fn process_batch_parallel<S>(&self, messages: &[S]) -> Result<Vec<Output>, Error>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads.unwrap_or_else(num_cpus::get))
            .thread_name(|i| format!("shiritori-worker-{i}"))
            .build()
            .map_err(|e| Error::Parallel(e.to_string()))?;

        log::debug!(
            "processing batch of {} messages on {} threads",
            messages.len(),
            pool.current_num_threads()
        );

        Ok(pool.install(|| {
            messages
                .par_iter()
                .map(|message| self.process_text(message.as_ref()))
                .collect()
        }))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
