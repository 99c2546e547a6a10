//! Glass: every glass die scores its face value

use super::Scorer;
use crate::building::{Building, Material};

pub struct GlassScorer;

impl Scorer for GlassScorer {
    fn material(&self) -> Material {
        Material::Glass
    }

    fn score_valid(&self, building: &Building) -> u32 {
        building
            .all(Material::Glass)
            .iter()
            .map(|die| die.face() as u32)
            .sum()
    }
}
