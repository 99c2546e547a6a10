//! Load blueprints from text files

use super::Blueprint;
use crate::core::error::Result;
use std::path::Path;

pub struct BlueprintReader;

impl BlueprintReader {
    /// Load a blueprint file: three lines of two characters each
    pub fn load(path: &Path) -> Result<Blueprint> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Read blueprint file {}", path.display());
        Self::parse(&content)
    }

    /// Parse the file form: exactly three rows. Trailing blank lines and `\r`
    /// are ignored; a blank line between rows is not.
    pub fn parse(content: &str) -> Result<Blueprint> {
        let rows: Vec<&str> = content.trim_end().lines().map(str::trim_end).collect();
        Blueprint::from_rows(rows.as_slice())
    }
}
