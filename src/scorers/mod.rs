//! Material scorers
//!
//! Each material has its own scoring rule. All of them share one precondition:
//! a building with any rule violation scores 0 for every material.

mod glass;
mod recycled;
mod stone;
mod wood;

pub use glass::GlassScorer;
pub use recycled::RecycledScorer;
pub use stone::StoneScorer;
pub use wood::WoodScorer;

use crate::building::{Building, Material};

/// Scores the dice of one material in a building
pub trait Scorer {
    fn material(&self) -> Material;

    /// Score ignoring validity; only called for valid buildings
    fn score_valid(&self, building: &Building) -> u32;

    /// Score for the building, 0 if it breaks any rule
    fn score(&self, building: &Building) -> u32 {
        if !building.is_valid() {
            return 0;
        }
        self.score_valid(building)
    }
}

/// The scorer for a material
pub fn scorer_for(material: Material) -> &'static dyn Scorer {
    match material {
        Material::Glass => &GlassScorer,
        Material::Recycled => &RecycledScorer,
        Material::Stone => &StoneScorer,
        Material::Wood => &WoodScorer,
    }
}
