//! One scoring run: load the inputs, score, write the report

use crate::blueprint::BlueprintReader;
use crate::building::BuildingReader;
use crate::core::config::AppConfig;
use crate::core::error::{Result, ScoringError};
use crate::scoring::{ReportWriter, ScoreSummary, ScoringResult};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ScoringApp {
    building_path: PathBuf,
    blueprint_path: PathBuf,
    output_path: PathBuf,
}

impl ScoringApp {
    pub fn new(
        building_path: impl Into<PathBuf>,
        blueprint_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            building_path: building_path.into(),
            blueprint_path: blueprint_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Build from a validated config
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        match (&config.building, &config.blueprint, &config.output) {
            (Some(building), Some(blueprint), Some(output)) => {
                Ok(Self::new(building, blueprint, output))
            }
            _ => Err(ScoringError::Config("missing required paths".into())),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run the whole pipeline and return the scores that were reported
    pub fn run(&self) -> Result<ScoreSummary> {
        let blueprint = BlueprintReader::load(&self.blueprint_path)?;
        tracing::info!("Loaded blueprint {}", blueprint);

        let building = BuildingReader::load(&self.building_path)?;
        tracing::info!(
            dice = building.num_dice(),
            height = building.height(),
            "Loaded building from {}",
            self.building_path.display()
        );

        let result = ScoringResult::new(&blueprint, &building);
        let summary = result.summary();
        if summary.violations.has_violations() {
            tracing::warn!("Building breaks the rules: {}", summary.violations);
        }

        ReportWriter::new(&result).write(&self.output_path)?;
        tracing::info!(total = summary.total, "Scoring complete");

        Ok(summary)
    }
}
