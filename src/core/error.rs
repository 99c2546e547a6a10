use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Cell out of bounds: row {row}, col {col} (expected row 1-3, col 1-2)")]
    CellOutOfBounds { row: usize, col: usize },

    #[error("Invalid die: {0}")]
    InvalidDie(String),

    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Invalid building at line {line}: {reason}")]
    InvalidBuilding { line: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
