//! Command-line interface.
//!
//! Flags override values from the optional TOML file; `--url` appends plain
//! GET checks after the ones the file defines.

use std::path::PathBuf;

use clap::Parser;

use crate::check::CheckSpec;
use crate::config::{load_config, validate_config, ConfigError, WaitForConfig};

#[derive(Debug, Parser)]
#[command(name = "waitfor")]
#[command(about = "Wait until HTTP endpoints report ready", long_about = None)]
pub struct Cli {
    /// TOML file with checks and settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL to GET until it returns 200 (repeatable)
    #[arg(short, long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Overall deadline in seconds
    #[arg(short, long)]
    pub timeout_seconds: Option<u64>,

    /// Delay between rounds in milliseconds
    #[arg(short = 'i', long)]
    pub check_every_millis: Option<u64>,

    /// Skip all checks and exit successfully
    #[arg(long)]
    pub skip: bool,

    /// Only report round starts, passed checks and the result
    #[arg(short, long)]
    pub quiet: bool,

    /// Also log every response body
    #[arg(long)]
    pub chatty: bool,
}

impl Cli {
    /// Load the config file, if any, and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<WaitForConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => WaitForConfig::default(),
        };

        config
            .checks
            .extend(self.urls.iter().map(|url| CheckSpec::get(url.as_str())));
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(interval) = self.check_every_millis {
            config.check_every_millis = interval;
        }
        config.skip |= self.skip;
        config.quiet |= self.quiet;
        config.chatty |= self.chatty;

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
