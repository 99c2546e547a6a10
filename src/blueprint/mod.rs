//! Blueprints - the target stack height for each cell of the building
//!
//! A blueprint is written as three rows of two characters. Each character is
//! a digit giving the required stack height, or `X` where nothing may be built.

pub mod reader;

pub use reader::BlueprintReader;

use crate::core::error::{Result, ScoringError};
use crate::core::rules::{COLS, ROWS};
use std::fmt;
use std::str::FromStr;

/// Marks a cell where construction is forbidden
pub const FORBIDDEN_CELL: char = 'X';

/// Immutable 3x2 grid of target heights. A target of 0 forbids construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    targets: [[u8; COLS]; ROWS],
    rows: [String; ROWS],
}

impl Blueprint {
    /// Build a blueprint from its three text rows
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != ROWS {
            return Err(ScoringError::InvalidBlueprint(format!(
                "expected {} rows, found {}",
                ROWS,
                rows.len()
            )));
        }

        let mut targets = [[0u8; COLS]; ROWS];
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != COLS {
                return Err(ScoringError::InvalidBlueprint(format!(
                    "row {} '{}' must be exactly {} characters",
                    row_index + 1,
                    row,
                    COLS
                )));
            }
            for (col_index, &cell) in cells.iter().enumerate() {
                targets[row_index][col_index] = Self::parse_target(cell).ok_or_else(|| {
                    ScoringError::InvalidBlueprint(format!(
                        "row {} has '{}', expected a digit 1-9 or '{}'",
                        row_index + 1,
                        cell,
                        FORBIDDEN_CELL
                    ))
                })?;
            }
        }

        Ok(Self {
            targets,
            rows: [
                rows[0].as_ref().to_string(),
                rows[1].as_ref().to_string(),
                rows[2].as_ref().to_string(),
            ],
        })
    }

    fn parse_target(cell: char) -> Option<u8> {
        match cell {
            FORBIDDEN_CELL => Some(0),
            '1'..='9' => cell.to_digit(10).map(|d| d as u8),
            _ => None,
        }
    }

    /// Required height at (row, col); 0 means nothing may be placed there.
    ///
    /// Returns `None` outside the grid.
    pub fn height_target_at(&self, row: usize, col: usize) -> Option<usize> {
        if !(1..=ROWS).contains(&row) || !(1..=COLS).contains(&col) {
            return None;
        }
        Some(self.targets[row - 1][col - 1] as usize)
    }

    /// Whether construction is forbidden at (row, col)
    pub fn is_forbidden(&self, row: usize, col: usize) -> bool {
        self.height_target_at(row, col) == Some(0)
    }

    /// The three rows as written
    pub fn rows(&self) -> &[String; ROWS] {
        &self.rows
    }
}

/// Parses the compact form `X1 31 1X`, or the three-line file form
impl FromStr for Blueprint {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        Self::from_rows(rows.as_slice())
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.join(" "))
    }
}
