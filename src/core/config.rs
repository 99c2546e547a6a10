//! Run configuration
//!
//! A run needs three paths: the building to score, the blueprint it was built
//! against, and where the report goes. They can come from a TOML file, from the
//! command line, or both; command-line values win.
//!
//! ```toml
//! building = "inputs/building.txt"
//! blueprint = "inputs/blueprint.txt"
//! output = "scoring-results.txt"
//! format = "json"
//! log_filter = "blueprints_scoring=debug"
//! ```

use super::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What the CLI prints to stdout once the report is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nothing beyond the report file
    #[default]
    Text,
    /// The score summary as pretty JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ScoringError::Config(format!(
                "unknown output format '{}', expected text or json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub building: Option<PathBuf>,
    pub blueprint: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Read config file {}", path.display());
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay `overrides` onto this config. Set fields in `overrides` win.
    pub fn merge(mut self, overrides: AppConfig) -> Self {
        if overrides.building.is_some() {
            self.building = overrides.building;
        }
        if overrides.blueprint.is_some() {
            self.blueprint = overrides.blueprint;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        if overrides.format.is_some() {
            self.format = overrides.format;
        }
        if overrides.log_filter.is_some() {
            self.log_filter = overrides.log_filter;
        }
        self
    }

    /// Output format, text unless set
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Check that every path a run needs is present
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("building", self.building.is_none()),
            ("blueprint", self.blueprint.is_none()),
            ("output", self.output.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(ScoringError::Config(format!(
                "missing required path(s): {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}
