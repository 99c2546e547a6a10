//! Recycled: points depend only on how many recycled dice the building holds

use super::Scorer;
use crate::building::{Building, Material};
use crate::core::rules::recycled_points;

pub struct RecycledScorer;

impl Scorer for RecycledScorer {
    fn material(&self) -> Material {
        Material::Recycled
    }

    fn score_valid(&self, building: &Building) -> u32 {
        recycled_points(building.all(Material::Recycled).len())
    }
}
