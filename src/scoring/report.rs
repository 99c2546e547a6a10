//! Fixed-layout text report for a scoring result
//!
//! ```text
//! X1
//! 31
//! 1X
//!
//! --|--
//! --|W3
//! ==+==
//! ...
//!
//! +-----------+----+
//! | glass     |  5 |
//! ...
//! +===========+====+
//! | total     | 27 |
//! +-----------+----+
//!
//! Rule violations: NONE
//! ```

use super::result::ScoringResult;
use crate::building::reader::{EMPTY_BUILDING_MARKER, NO_DIE, ROW_SEPARATOR};
use crate::building::{Building, Material};
use crate::core::rules::ROWS;

const TABLE_BORDER: &str = "+-----------+----+";
const TABLE_TOTAL_BORDER: &str = "+===========+====+";
const BONUS_LABEL: &str = "**bonus**";
const TOTAL_LABEL: &str = "total";

pub struct ReportFormatter;

impl ReportFormatter {
    /// Render the full report. Every line ends with a newline.
    pub fn format(result: &ScoringResult<'_>) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.extend(result.blueprint().rows().iter().cloned());
        lines.push(String::new());
        lines.extend(Self::grid_lines(result.building()));
        lines.push(String::new());
        lines.extend(Self::table_lines(result));
        lines.push(String::new());
        lines.push(Self::violations_line(result));

        let mut report = String::new();
        for line in &lines {
            report.push_str(line);
            report.push('\n');
        }
        report
    }

    /// The building drawn level by level, or the empty marker
    pub fn grid_lines(building: &Building) -> Vec<String> {
        if building.is_empty() {
            return vec![EMPTY_BUILDING_MARKER.to_string()];
        }

        let height = building.height();
        let mut lines = Vec::new();

        for row in 1..=ROWS {
            if row > 1 {
                lines.push(ROW_SEPARATOR.to_string());
            }
            for level in (1..=height).rev() {
                lines.push(format!(
                    "{}|{}",
                    Self::cell_text(building, row, 1, level),
                    Self::cell_text(building, row, 2, level)
                ));
            }
        }

        lines
    }

    fn cell_text(building: &Building, row: usize, col: usize, level: usize) -> String {
        building
            .die_at(row, col, level)
            .map(|die| die.to_string())
            .unwrap_or_else(|| NO_DIE.to_string())
    }

    /// The bordered score table
    pub fn table_lines(result: &ScoringResult<'_>) -> Vec<String> {
        let mut lines = vec![TABLE_BORDER.to_string()];

        for material in Material::ALL {
            lines.push(Self::table_row(material.name(), result.score_for(material)));
        }
        lines.push(Self::table_row(BONUS_LABEL, result.bonus_score()));
        lines.push(TABLE_TOTAL_BORDER.to_string());
        lines.push(Self::table_row(TOTAL_LABEL, result.total_score()));
        lines.push(TABLE_BORDER.to_string());

        lines
    }

    fn table_row(label: &str, value: u32) -> String {
        format!("| {:<9} |{:>3} |", label, value)
    }

    pub fn violations_line(result: &ScoringResult<'_>) -> String {
        let violations = result.violations();
        if violations.has_violations() {
            format!("Rule violations: {}", violations)
        } else {
            "Rule violations: NONE".to_string()
        }
    }
}
