//! Load buildings from their text encoding
//!
//! The encoding is the grid the scoring report prints: three row blocks
//! separated by `==+==`, each block listing its levels from the top down as
//! `CC|CC`, where `CC` is a die such as `G5` or `--` for no die.

use super::{Building, Die};
use crate::core::error::{Result, ScoringError};
use crate::core::rules::ROWS;
use std::path::Path;

/// Printed in place of the grid for a building with no dice
pub const EMPTY_BUILDING_MARKER: &str = "<< EMPTY BUILDING >>";

/// Separator between row blocks
pub const ROW_SEPARATOR: &str = "==+==";

/// Placeholder for a level with no die
pub const NO_DIE: &str = "--";

pub struct BuildingReader;

impl BuildingReader {
    /// Load a building from a file on disk
    pub fn load(path: &Path) -> Result<Building> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Read building file {}", path.display());
        Self::parse(&content)
    }

    /// Parse a building from its text encoding
    pub fn parse(content: &str) -> Result<Building> {
        let lines: Vec<(usize, &str)> = content
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim_end()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let mut building = Building::new();

        if lines.is_empty() {
            return Ok(building);
        }
        if lines.len() == 1 && lines[0].1 == EMPTY_BUILDING_MARKER {
            return Ok(building);
        }

        let blocks: Vec<&[(usize, &str)]> = lines.split(|(_, line)| *line == ROW_SEPARATOR).collect();
        if blocks.len() != ROWS {
            return Err(ScoringError::InvalidBuilding {
                line: lines[lines.len() - 1].0,
                reason: format!("expected {} row blocks, found {}", ROWS, blocks.len()),
            });
        }

        for (index, block) in blocks.iter().enumerate() {
            Self::parse_block(&mut building, index + 1, block)?;
        }

        Ok(building)
    }

    /// Parse one row block, listed top level first
    fn parse_block(building: &mut Building, row: usize, block: &[(usize, &str)]) -> Result<()> {
        let mut columns: [Vec<(usize, Option<Die>)>; 2] = [Vec::new(), Vec::new()];

        for &(line_number, line) in block.iter().rev() {
            let (left, right) = Self::split_line(line_number, line)?;
            columns[0].push((line_number, Self::parse_cell(line_number, left)?));
            columns[1].push((line_number, Self::parse_cell(line_number, right)?));
        }

        for (col_index, column) in columns.into_iter().enumerate() {
            let mut gap_seen = false;
            for (line_number, cell) in column {
                match cell {
                    Some(die) if gap_seen => {
                        return Err(ScoringError::InvalidBuilding {
                            line: line_number,
                            reason: format!("die {} has no die beneath it", die),
                        });
                    }
                    Some(die) => building.add(die, row, col_index + 1)?,
                    None => gap_seen = true,
                }
            }
        }

        Ok(())
    }

    fn split_line(line_number: usize, line: &str) -> Result<(&str, &str)> {
        match line.split_once('|') {
            Some((left, right)) if left.len() == 2 && right.len() == 2 => Ok((left, right)),
            _ => Err(ScoringError::InvalidBuilding {
                line: line_number,
                reason: format!("'{}' is not of the form CC|CC", line),
            }),
        }
    }

    fn parse_cell(line_number: usize, cell: &str) -> Result<Option<Die>> {
        if cell == NO_DIE {
            return Ok(None);
        }
        cell.parse::<Die>()
            .map(Some)
            .map_err(|e| ScoringError::InvalidBuilding {
                line: line_number,
                reason: e.to_string(),
            })
    }
}
