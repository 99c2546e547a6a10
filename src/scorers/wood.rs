//! Wood: a wood die scores 2 for each way it touches other dice
//!
//! +2 if a die sits directly beneath it, +2 more if that die is wood, and +2
//! for every edge-adjacent cell with a die on the same level.

use super::Scorer;
use crate::building::{Building, CellPos, Material};
use crate::core::rules::WOOD_POINTS_PER_CONDITION;

pub struct WoodScorer;

impl WoodScorer {
    /// Number of scoring conditions a wood die at `pos`/`level` satisfies
    fn conditions_met(building: &Building, pos: CellPos, level: usize) -> u32 {
        let mut met = 0;

        if let Some(beneath) = building.die_at(pos.row, pos.col, level - 1) {
            met += 1;
            if beneath.is(Material::Wood) {
                met += 1;
            }
        }

        met += pos
            .neighbours()
            .filter(|n| building.die_at(n.row, n.col, level).is_some())
            .count() as u32;

        met
    }
}

impl Scorer for WoodScorer {
    fn material(&self) -> Material {
        Material::Wood
    }

    fn score_valid(&self, building: &Building) -> u32 {
        let mut score = 0;
        for (pos, stack) in building.cells() {
            for (level, die) in stack.levels() {
                if die.is(Material::Wood) {
                    score += WOOD_POINTS_PER_CONDITION * Self::conditions_met(building, pos, level);
                }
            }
        }
        score
    }
}
