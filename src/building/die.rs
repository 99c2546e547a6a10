//! Dice and their materials

use crate::core::error::{Result, ScoringError};
use crate::core::rules::{MAX_FACE, MIN_FACE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material a die is made of; decides how it scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Glass,
    Recycled,
    Stone,
    Wood,
}

impl Material {
    /// All materials in report order
    pub const ALL: [Material; 4] = [
        Material::Glass,
        Material::Recycled,
        Material::Stone,
        Material::Wood,
    ];

    /// One-letter code used in the text encodings
    pub fn code(&self) -> char {
        match self {
            Material::Glass => 'G',
            Material::Recycled => 'R',
            Material::Stone => 'S',
            Material::Wood => 'W',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'G' => Some(Material::Glass),
            'R' => Some(Material::Recycled),
            'S' => Some(Material::Stone),
            'W' => Some(Material::Wood),
            _ => None,
        }
    }

    /// Lowercase name as it appears in the score table
    pub fn name(&self) -> &'static str {
        match self {
            Material::Glass => "glass",
            Material::Recycled => "recycled",
            Material::Stone => "stone",
            Material::Wood => "wood",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placed die. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDie")]
pub struct Die {
    material: Material,
    face: u8,
}

/// Wire form of a die before its face is checked
#[derive(Deserialize)]
struct UncheckedDie {
    material: Material,
    face: u8,
}

impl TryFrom<UncheckedDie> for Die {
    type Error = ScoringError;

    fn try_from(die: UncheckedDie) -> Result<Self> {
        Die::new(die.material, die.face)
    }
}

impl Die {
    /// Create a die, rejecting faces outside 1-6
    pub fn new(material: Material, face: u8) -> Result<Self> {
        if !(MIN_FACE..=MAX_FACE).contains(&face) {
            return Err(ScoringError::InvalidDie(format!(
                "face {} outside {}-{}",
                face, MIN_FACE, MAX_FACE
            )));
        }
        Ok(Self { material, face })
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn face(&self) -> u8 {
        self.face
    }

    pub fn is(&self, material: Material) -> bool {
        self.material == material
    }
}

/// Parses the canonical two-character form, e.g. `W3`
impl FromStr for Die {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (Some(code), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ScoringError::InvalidDie(format!(
                "'{}' is not a material code followed by a face",
                s
            )));
        };

        let material = Material::from_code(code).ok_or_else(|| {
            ScoringError::InvalidDie(format!("unknown material code '{}' in '{}'", code, s))
        })?;
        let face = digit
            .to_digit(10)
            .ok_or_else(|| ScoringError::InvalidDie(format!("face '{}' in '{}' is not a digit", digit, s)))?;

        Die::new(material, face as u8)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.material.code(), self.face)
    }
}
