//! Find command implementation

use anyhow::{Context, Result};
use clap::Args;
use shiritori_core::{ChainProcessor, Config};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, split_messages, FileReader, Message};
use crate::output::{create_formatter, ChainRecord, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the find command
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Message to search directly, may be repeated
    #[arg(short, long, value_name = "MESSAGE")]
    pub text: Vec<String>,

    /// Treat every line of the input files as a separate message
    #[arg(long)]
    pub per_line: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from configuration, otherwise text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SHIRITORI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Force parallel processing even for small batches
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting word-chain search");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let format = self.resolve_format(&config)?;
        let processor = self.build_processor(&config)?;
        let messages = self.collect_messages(&config)?;

        log::info!("Searching {} message(s)", messages.len());
        let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
        let outputs = processor
            .process_batch(&texts)
            .map_err(CliError::from)?;

        let mut formatter = create_formatter(format, self.open_writer()?, &config.output);
        let mut chains_found = 0;
        for (message, output) in messages.iter().zip(&outputs) {
            if output.has_chain() {
                chains_found += 1;
            }
            let record = ChainRecord::new(message, output, config.output.include_metadata);
            formatter.format_record(&record)?;
        }
        formatter.finish()?;

        log::info!(
            "Found chains in {} of {} message(s)",
            chains_found,
            messages.len()
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                CliConfig::load(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    fn build_processor(&self, config: &CliConfig) -> Result<ChainProcessor> {
        let parallel_threshold = if self.parallel {
            1
        } else {
            config.performance.parallel_threshold
        };

        let mut builder = Config::builder()
            .max_input_bytes(config.max_input_bytes())
            .parallel_threshold(parallel_threshold);
        if let Some(threads) = self.threads.or(config.worker_threads()) {
            builder = builder.threads(threads);
        }

        let core_config = builder.build().map_err(CliError::from)?;
        Ok(ChainProcessor::with_config(core_config).map_err(CliError::from)?)
    }

    fn collect_messages(&self, config: &CliConfig) -> Result<Vec<Message>> {
        let per_line = self.per_line || config.processing.per_line;
        let limit = config.max_input_bytes();
        let mut messages: Vec<Message> = self
            .text
            .iter()
            .map(|text| Message {
                source: "<text>".to_string(),
                line: None,
                text: text.clone(),
            })
            .collect();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                let source = path.display().to_string();
                let content = FileReader::read_message(path, limit)?.unwrap_or_default();
                messages.extend(split_messages(&source, &content, per_line));
                progress.file_completed(&source);
            }
            progress.finish();
        } else if self.text.is_empty() {
            log::debug!("Reading from standard input");
            let content = FileReader::read_stream(io::stdin(), limit)?.unwrap_or_default();
            messages.extend(split_messages("<stdin>", &content, per_line));
        }

        Ok(messages)
    }

    fn open_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}
