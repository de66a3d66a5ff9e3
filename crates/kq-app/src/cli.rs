use std::path::PathBuf;

use clap::Parser;
use kq_config::{Config, ConfigError};
use kq_types::Script;

#[derive(Parser, Debug)]
#[command(name = "kanjiquest")]
#[command(about = "Quiz yourself on one random entry from your vocab files")]
#[command(version)]
pub struct Cli {
    /// Format string describing one vocab line (default: %c#%a/%i^%h^%k^%r%d^|%e/)
    #[arg(short = 'v', long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// JSON config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Script shown first: reading, logograph, mnemonic or english
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: Option<Script>,

    /// Frame width in terminal columns
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Characters kept per field
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Title shown above the quiz
    #[arg(long)]
    pub title: Option<String>,

    /// Seed for a reproducible pick
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render the first view and exit
    #[arg(long)]
    pub once: bool,

    /// Validate the format and vocab files, print a summary and exit
    #[arg(long)]
    pub check: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log progress while loading
    #[arg(long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Vocab files, read in order
    #[arg(required = true, value_name = "VOCABFILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Defaults, then config file, then environment, then flags
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env();

        if let Some(format) = &self.format {
            config.format.format = format.clone();
        }
        if let Some(capacity) = self.capacity {
            config.format.field_capacity = capacity;
        }
        if let Some(title) = &self.title {
            config.ui.title = title.clone();
        }
        if let Some(width) = self.width {
            config.ui.width = width;
        }
        if let Some(script) = self.script {
            config.ui.initial_script = script;
        }

        config.validate()?;
        Ok(config)
    }

    /// Default log filter when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}
