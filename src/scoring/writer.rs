//! Write scoring reports to disk

use super::report::ReportFormatter;
use super::result::ScoringResult;
use crate::core::error::Result;
use std::path::Path;

pub struct ReportWriter<'r, 'a> {
    result: &'r ScoringResult<'a>,
}

impl<'r, 'a> ReportWriter<'r, 'a> {
    pub fn new(result: &'r ScoringResult<'a>) -> Self {
        Self { result }
    }

    /// Render the report and write it to `path`, replacing any existing file
    pub fn write(&self, path: &Path) -> Result<()> {
        let report = ReportFormatter::format(self.result);
        std::fs::write(path, report)?;
        tracing::info!("Wrote scoring report to {}", path.display());
        Ok(())
    }
}
