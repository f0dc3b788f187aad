pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_input_exists, validate_non_empty_string, validate_path, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use toml_config::{LookupSettings, TomlConfig};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "recall-etl")]
#[command(about = "Look up NHTSA recall campaigns listed in a CSV file and write the details to CSV")]
pub struct CliConfig {
    /// Input CSV file with NHTSA IDs
    #[arg(short, long)]
    pub input: String,

    /// Output CSV file for detailed results
    #[arg(short, long)]
    pub output: String,

    /// Enable debug mode to see API responses
    #[arg(short, long)]
    pub debug: bool,

    /// Optional TOML file with a [lookup] table
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the lookup endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the pause after each request, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl CliConfig {
    /// Merges the optional config file with command-line overrides.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut lookup = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.lookup,
            None => LookupSettings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            lookup.endpoint = endpoint.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            lookup.request_delay_ms = delay_ms;
        }

        Ok(RunConfig {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            debug: self.debug,
            lookup,
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub debug: bool,
    pub lookup: LookupSettings,
}

impl RunConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            debug: false,
            lookup: LookupSettings::default(),
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_url("endpoint", &self.lookup.endpoint)?;
        validate_non_empty_string("query_param", &self.lookup.query_param)?;
        validate_non_empty_string("id_column", &self.lookup.id_column)?;
        validate_input_exists(&self.input_path)
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn api_endpoint(&self) -> &str {
        &self.lookup.endpoint
    }

    fn query_param(&self) -> &str {
        &self.lookup.query_param
    }

    fn id_column(&self) -> &str {
        &self.lookup.id_column
    }

    fn user_agent(&self) -> &str {
        &self.lookup.user_agent
    }

    fn request_delay(&self) -> Duration {
        Duration::from_millis(self.lookup.request_delay_ms)
    }

    fn debug(&self) -> bool {
        self.debug
    }
}
