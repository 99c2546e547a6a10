//! Scoring layer - combining a building with a blueprint and reporting it

pub mod report;
pub mod result;
pub mod writer;

pub use report::ReportFormatter;
pub use result::{ScoreSummary, ScoringResult};
pub use writer::ReportWriter;
