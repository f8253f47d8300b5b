//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for processing:");
        println!(
            "   shiritori find -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            r#"# Shiritori CLI configuration
#
# [processing]
#   per_line            treat every line as a separate message
#   max_input_mb        largest accepted input per file or stream
# [output]
#   default_format      text, json or markdown
#   include_metadata    add scan statistics to JSON records
#   pretty_json         indent JSON output
# [performance]
#   parallel_threshold  messages needed before processing goes parallel
#   worker_threads      0 uses every available core

{body}"#
        ))
    }
}
