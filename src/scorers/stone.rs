//! Stone: each stone die scores more the higher up it sits

use super::Scorer;
use crate::building::{Building, Material};
use crate::core::rules::stone_points;

pub struct StoneScorer;

impl Scorer for StoneScorer {
    fn material(&self) -> Material {
        Material::Stone
    }

    fn score_valid(&self, building: &Building) -> u32 {
        building
            .cells()
            .flat_map(|(_, stack)| stack.levels())
            .filter(|(_, die)| die.is(Material::Stone))
            .map(|(level, _)| stone_points(level))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_one_stone_scores_2() {
        for &(row, col) in &ALL_CELLS {
            assert_eq!(StoneScorer.score(&building_of(&[(row, col, "S6")])), 2);
        }
    }

    #[test]
    fn test_no_stone_scores_0() {
        for (&(row, col), text) in ALL_CELLS.iter().zip(["W4", "G1", "R6", "R2", "G3", "W5"]) {
            assert_eq!(StoneScorer.score(&building_of(&[(row, col, text)])), 0);
        }
    }

    #[test]
    fn test_two_stone_stacked_score_5() {
        for &(row, col) in &ALL_CELLS {
            let building = building_of(&[(row, col, "S6"), (row, col, "S6")]);
            assert_eq!(StoneScorer.score(&building), 5);
        }
    }

    #[test]
    fn test_stone_on_other_material_scores_3() {
        for &(row, col) in &ALL_CELLS {
            let building = building_of(&[(row, col, "G1"), (row, col, "S6")]);
            assert_eq!(StoneScorer.score(&building), 3);
        }
    }

    #[test]
    fn test_stone_under_other_material_scores_2() {
        for &(row, col) in &ALL_CELLS {
            let building = building_of(&[(row, col, "S6"), (row, col, "W6")]);
            assert_eq!(StoneScorer.score(&building), 2);
        }
    }

    #[test]
    fn test_stone_on_third_level_scores_5() {
        let building = building_of(&[(2, 1, "G5"), (2, 1, "R5"), (2, 1, "S6")]);
        assert_eq!(StoneScorer.score(&building), 5);
    }

    #[test]
    fn test_six_high_stone_stack_scores_34() {
        for &(row, col) in &ALL_CELLS {
            let placements: Vec<_> = (0..6).map(|_| (row, col, "S6")).collect();
            assert_eq!(StoneScorer.score(&building_of(&placements)), 34);
        }
    }

    #[test]
    fn test_six_single_stones_score_12() {
        let placements: Vec<_> = ALL_CELLS.iter().map(|&(row, col)| (row, col, "S6")).collect();
        assert_eq!(StoneScorer.score(&building_of(&placements)), 12);
    }

    #[test]
    fn test_three_double_stacks_score_15() {
        let building = building_of(&[
            (1, 1, "S6"),
            (1, 1, "S6"),
            (2, 2, "S6"),
            (2, 2, "S6"),
            (3, 1, "S6"),
            (3, 1, "S6"),
        ]);
        assert_eq!(StoneScorer.score(&building), 15);
    }

    #[test]
    fn test_invalid_building_scores_0() {
        assert_eq!(StoneScorer.score(&building_of(&[(3, 2, "S4"), (3, 2, "S3")])), 0);
        assert_eq!(StoneScorer.score(&overlarge_stack("S6")), 0);
        assert_eq!(StoneScorer.score(&overlarge_spread("S6")), 0);
    }
}
