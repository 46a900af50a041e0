//! Configuration for the processor demo.
//!
//! Layers merge in order: defaults, the TOML file, `PROCESSOR_DEMO_*`
//! environment variables, then command-line flags. Later layers win.

use std::path::PathBuf;

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use operation_result::{OperationError, OperationResult};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration file consulted when `--config` is absent.
pub const CONFIG_FILE: &str = ".processor_demo.toml";
/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PROCESSOR_DEMO_";

/// Merged settings driving a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of steps in the batch, numbered from 1.
    pub steps: u32,
    /// Steps that report failure instead of a value.
    pub failing_steps: Vec<u32>,
    /// Errors each failing step reports.
    pub errors_per_failure: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            steps: 3,
            failing_steps: Vec::new(),
            errors_per_failure: 1,
        }
    }
}

impl DemoConfig {
    /// Check the settings, reporting every problem rather than the first.
    #[must_use]
    pub fn validate(&self) -> OperationResult<()> {
        let mut result = OperationResult::new();
        if self.steps == 0 {
            result.add_error(OperationError::new("steps must be greater than zero"));
        }
        result.add_errors(
            self.failing_steps
                .iter()
                .filter(|step| !(1..=self.steps).contains(*step))
                .map(|step| {
                    OperationError::new(format!(
                        "failing step {step} is outside 1..={}",
                        self.steps
                    ))
                }),
        );
        if self.errors_per_failure == 0 && !self.failing_steps.is_empty() {
            result.add_error(OperationError::new(
                "errors per failure must be greater than zero when steps fail",
            ));
        }
        result
    }
}

/// Command-line surface exposed by the demo.
#[derive(Debug, Default, Parser, Serialize)]
#[command(
    name = "processor-demo",
    bin_name = "processor-demo",
    about = "Runs a batch of steps and reports every error they produce",
    version
)]
pub struct CommandLine {
    /// Overrides the configuration file path.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
    /// Number of steps to run.
    #[arg(long, value_name = "COUNT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Marks a step as failing; repeat for several steps.
    #[arg(long = "fail", value_name = "STEP")]
    #[serde(rename = "failing_steps", skip_serializing_if = "Vec::is_empty")]
    pub fail: Vec<u32>,
    /// Number of errors each failing step reports.
    #[arg(long, value_name = "COUNT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors_per_failure: Option<u32>,
}

/// Build the layered figment for `cli` without extracting it.
#[must_use]
pub fn figment_for(cli: &CommandLine) -> Figment {
    let file = cli
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    Figment::from(Serialized::defaults(DemoConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(cli))
}

/// Load the merged configuration for `cli`.
///
/// # Errors
///
/// Returns [`crate::error::DemoError::Configuration`] when a layer cannot be
/// read or the merged values do not deserialise.
pub fn load_config(cli: &CommandLine) -> Result<DemoConfig> {
    let config: DemoConfig = figment_for(cli).extract()?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}
