//! Blueprints Scoring - command line entry point
//!
//! Scores one building against one blueprint and writes the text report.

use blueprints_scoring::app::ScoringApp;
use blueprints_scoring::core::config::{AppConfig, OutputFormat};
use blueprints_scoring::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "blueprints_scoring=info";
const VERBOSE_LOG_FILTER: &str = "blueprints_scoring=debug";

/// Score a Blueprints building against its blueprint
#[derive(Parser, Debug)]
#[command(name = "blueprints-scoring")]
#[command(about = "Score a dice building against a blueprint and write the report")]
struct Args {
    /// Building file, in the grid layout the report prints
    #[arg(long)]
    building: Option<PathBuf>,

    /// Blueprint file: three lines such as X1, 31, 1X
    #[arg(long)]
    blueprint: Option<PathBuf>,

    /// Where to write the scoring report
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML file supplying any of the above; flags win
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stdout format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> AppConfig {
        AppConfig {
            building: self.building.clone(),
            blueprint: self.blueprint.clone(),
            output: self.output.clone(),
            format: self.format,
            log_filter: self.verbose.then(|| VERBOSE_LOG_FILTER.to_string()),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Config is read before logging starts so it can choose the filter
    let config = match &args.config {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    };
    let config = config.map(|config| config.merge(args.overrides()));

    let filter = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match config.and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<()> {
    let app = ScoringApp::from_config(config)?;
    let summary = app.run()?;

    if config.output_format() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Total score {} written to {}",
            summary.total,
            app.output_path().display()
        );
    }
    Ok(())
}
