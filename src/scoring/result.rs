//! Scores for a building measured against a blueprint

use crate::blueprint::Blueprint;
use crate::building::{Building, Material};
use crate::core::rules::EXACT_MATCH_BONUS;
use crate::scorers::scorer_for;
use crate::violations::{Violation, ViolationList};
use serde::{Deserialize, Serialize};

/// Combines a blueprint and a building. Nothing is cached; every query is
/// computed from the two inputs.
#[derive(Debug, Clone, Copy)]
pub struct ScoringResult<'a> {
    blueprint: &'a Blueprint,
    building: &'a Building,
}

impl<'a> ScoringResult<'a> {
    pub fn new(blueprint: &'a Blueprint, building: &'a Building) -> Self {
        Self { blueprint, building }
    }

    pub fn blueprint(&self) -> &'a Blueprint {
        self.blueprint
    }

    pub fn building(&self) -> &'a Building {
        self.building
    }

    /// The building's own violations plus `INVALID_PLACEMENT` when a die sits
    /// on a cell the blueprint forbids
    pub fn violations(&self) -> ViolationList {
        let mut violations = self.building.violations();

        let misplaced = self
            .building
            .cells()
            .any(|(pos, stack)| !stack.is_empty() && self.blueprint.is_forbidden(pos.row, pos.col));
        if misplaced {
            violations.add(Violation::InvalidPlacement);
        }

        violations
    }

    /// Score for one material; 0 whenever any violation is present,
    /// including an invalid placement
    pub fn score_for(&self, material: Material) -> u32 {
        if self.violations().has_violations() {
            return 0;
        }
        scorer_for(material).score(self.building)
    }

    pub fn glass_score(&self) -> u32 {
        self.score_for(Material::Glass)
    }

    pub fn recycled_score(&self) -> u32 {
        self.score_for(Material::Recycled)
    }

    pub fn stone_score(&self) -> u32 {
        self.score_for(Material::Stone)
    }

    pub fn wood_score(&self) -> u32 {
        self.score_for(Material::Wood)
    }

    /// Bonus for a violation-free building whose every stack height equals
    /// the blueprint target. All or nothing.
    pub fn bonus_score(&self) -> u32 {
        if self.violations().has_violations() {
            return 0;
        }

        let exact = self.building.cells().all(|(pos, stack)| {
            self.blueprint.height_target_at(pos.row, pos.col) == Some(stack.height())
        });

        if exact {
            EXACT_MATCH_BONUS
        } else {
            0
        }
    }

    /// Sum of the four material scores and the bonus
    pub fn total_score(&self) -> u32 {
        Material::ALL
            .iter()
            .map(|&material| self.score_for(material))
            .sum::<u32>()
            + self.bonus_score()
    }

    /// Snapshot of every score, suitable for serialization
    pub fn summary(&self) -> ScoreSummary {
        let summary = ScoreSummary {
            glass: self.glass_score(),
            recycled: self.recycled_score(),
            stone: self.stone_score(),
            wood: self.wood_score(),
            bonus: self.bonus_score(),
            total: self.total_score(),
            violations: self.violations(),
        };

        tracing::debug!(
            glass = summary.glass,
            recycled = summary.recycled,
            stone = summary.stone,
            wood = summary.wood,
            bonus = summary.bonus,
            total = summary.total,
            violations = %summary.violations,
            "Scored building"
        );

        summary
    }
}

/// Owned copy of a scoring result's numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub glass: u32,
    pub recycled: u32,
    pub stone: u32,
    pub wood: u32,
    pub bonus: u32,
    pub total: u32,
    pub violations: ViolationList,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::Die;

    fn building_of(placements: &[(usize, usize, &str)]) -> Building {
        let mut building = Building::new();
        for &(row, col, text) in placements {
            let die: Die = text.parse().unwrap();
            building.add(die, row, col).unwrap();
        }
        building
    }

    fn blueprint(text: &str) -> Blueprint {
        text.parse().unwrap()
    }

    // ------------------------------------------------------------------
    // Bonus
    // ------------------------------------------------------------------

    #[test]
    fn test_bonus_given_if_all_spaces_filled_exactly() {
        let blueprint = blueprint("1X 21 1X");
        let building = building_of(&[(1, 1, "W1"), (2, 1, "G2"), (2, 1, "G3"), (2, 2, "R5"), (3, 1, "S2")]);

        assert_eq!(ScoringResult::new(&blueprint, &building).bonus_score(), 6);
    }

    #[test]
    fn test_bonus_not_given_if_a_space_is_overfilled() {
        let blueprint = blueprint("1X 21 1X");
        let building = building_of(&[(1, 1, "W1"), (2, 1, "G5"), (2, 1, "G5"), (2, 1, "R5"), (3, 1, "S2")]);

        assert_eq!(ScoringResult::new(&blueprint, &building).bonus_score(), 0);
    }

    #[test]
    fn test_bonus_not_given_if_a_space_is_underfilled() {
        let blueprint = blueprint("1X 21 1X");
        let building = building_of(&[(1, 1, "W1"), (2, 1, "G2"), (3, 1, "S2")]);

        assert_eq!(ScoringResult::new(&blueprint, &building).bonus_score(), 0);
    }

    #[test]
    fn test_bonus_not_given_when_exact_but_descending() {
        let blueprint = blueprint("1X 21 1X");
        let building = building_of(&[(1, 1, "W1"), (2, 1, "G5"), (2, 1, "G1"), (2, 2, "R5"), (3, 1, "S2")]);

        assert_eq!(ScoringResult::new(&blueprint, &building).bonus_score(), 0);
    }

    #[test]
    fn test_bonus_not_given_for_empty_building_on_nonempty_blueprint() {
        let blueprint = blueprint("X1 31 1X");
        let building = Building::new();

        assert_eq!(ScoringResult::new(&blueprint, &building).bonus_score(), 0);
    }

    #[test]
    fn test_bonus_given_for_empty_building_on_all_forbidden_blueprint() {
        let blueprint = blueprint("XX XX XX");
        let building = Building::new();

        assert_eq!(ScoringResult::new(&blueprint, &building).bonus_score(), 6);
    }

    // ------------------------------------------------------------------
    // Material scores
    // ------------------------------------------------------------------

    #[test]
    fn test_valid_building_reports_normal_scores() {
        let blueprint = blueprint("11 11 11");

        let glass = building_of(&[(1, 2, "G2"), (3, 2, "G6")]);
        assert_eq!(ScoringResult::new(&blueprint, &glass).glass_score(), 8);

        let recycled = building_of(&[(1, 2, "R2"), (3, 2, "R6")]);
        assert_eq!(ScoringResult::new(&blueprint, &recycled).recycled_score(), 5);

        let blueprint = self::blueprint("22 11 11");
        let stone = building_of(&[(1, 2, "S2"), (1, 2, "S6")]);
        assert_eq!(ScoringResult::new(&blueprint, &stone).stone_score(), 5);

        let wood = building_of(&[(1, 2, "W2"), (1, 2, "W6")]);
        assert_eq!(ScoringResult::new(&blueprint, &wood).wood_score(), 4);
    }

    #[test]
    fn test_every_violation_kind_zeroes_every_material() {
        let cases = [
            ("21 11 11", vec![(1, 1, 6), (1, 1, 2)]),
            ("11 11 12", vec![(1, 1, 6), (1, 2, 2), (2, 1, 6), (2, 2, 2), (3, 1, 6), (3, 2, 2), (3, 2, 6)]),
            ("71 11 12", vec![(1, 1, 1), (1, 2, 2), (2, 1, 3), (2, 2, 4), (3, 1, 5), (3, 2, 6), (3, 2, 6)]),
            ("1X 11 12", vec![(1, 1, 1), (1, 2, 2)]),
        ];

        for (text, faces) in cases {
            let blueprint = blueprint(text);
            for material in Material::ALL {
                let mut building = Building::new();
                for &(row, col, face) in &faces {
                    building.add(Die::new(material, face).unwrap(), row, col).unwrap();
                }

                let result = ScoringResult::new(&blueprint, &building);
                assert!(result.violations().has_violations());
                assert_eq!(result.score_for(material), 0, "{} on {}", material, text);
            }
        }
    }

    #[test]
    fn test_invalid_placement_alone_zeroes_scores() {
        let blueprint = blueprint("1X 11 12");
        let building = building_of(&[(1, 1, "G1"), (1, 2, "G2")]);

        assert!(building.is_valid());
        let result = ScoringResult::new(&blueprint, &building);
        assert_eq!(result.violations().to_string(), "[INVALID_PLACEMENT]");
        assert_eq!(result.glass_score(), 0);
        assert_eq!(result.total_score(), 0);
    }

    // ------------------------------------------------------------------
    // Violations
    // ------------------------------------------------------------------

    #[test]
    fn test_no_violations_for_empty_or_valid_building() {
        let blueprint = blueprint("77 77 77");
        let empty = Building::new();
        let valid = building_of(&[(1, 1, "G3"), (3, 2, "W3")]);

        assert!(!ScoringResult::new(&blueprint, &empty).violations().has_violations());
        assert!(!ScoringResult::new(&blueprint, &valid).violations().has_violations());
    }

    #[test]
    fn test_building_violations_pass_through() {
        let blueprint = blueprint("77 77 77");

        let descending = building_of(&[(1, 2, "S5"), (1, 2, "R4")]);
        assert_eq!(
            ScoringResult::new(&blueprint, &descending).violations().to_string(),
            "[DESCENDING_DICE]"
        );

        let overlarge = building_of(&[
            (1, 1, "S5"),
            (1, 1, "R5"),
            (2, 2, "S5"),
            (2, 2, "R5"),
            (3, 1, "S5"),
            (3, 1, "R5"),
            (3, 1, "G6"),
        ]);
        assert_eq!(
            ScoringResult::new(&blueprint, &overlarge).violations().to_string(),
            "[BUILDING_OVERLARGE]"
        );

        let tall: Vec<_> = ["S5", "R5", "S5", "R5", "S5", "R5", "G6"]
            .iter()
            .map(|&text| (1, 1, text))
            .collect();
        let tall = building_of(&tall);
        assert_eq!(
            ScoringResult::new(&blueprint, &tall).violations().to_string(),
            "[BUILDING_OVERLARGE, STACK_OVERLARGE]"
        );
    }

    #[test]
    fn test_invalid_placement_on_each_forbidden_cell() {
        let blueprint = blueprint("X3 3X XX");
        for (row, col) in [(1, 1), (2, 2), (3, 1), (3, 2)] {
            let building = building_of(&[(row, col, "S3")]);
            assert_eq!(
                ScoringResult::new(&blueprint, &building).violations().to_string(),
                "[INVALID_PLACEMENT]"
            );
        }
    }

    #[test]
    fn test_invalid_placement_merges_with_building_violations() {
        let blueprint = blueprint("33 3X 33");
        let building = building_of(&[
            (1, 1, "S5"),
            (1, 1, "R5"),
            (2, 2, "S5"),
            (2, 2, "R5"),
            (3, 1, "S5"),
            (3, 1, "R5"),
            (3, 1, "G6"),
        ]);
        assert_eq!(
            ScoringResult::new(&blueprint, &building).violations().to_string(),
            "[BUILDING_OVERLARGE, INVALID_PLACEMENT]"
        );

        let blueprint = self::blueprint("X1 11 11");
        let tall: Vec<_> = ["S5", "R5", "S5", "R5", "S5", "R5", "G6"]
            .iter()
            .map(|&text| (1, 1, text))
            .collect();
        let tall = building_of(&tall);
        assert_eq!(
            ScoringResult::new(&blueprint, &tall).violations().to_string(),
            "[BUILDING_OVERLARGE, INVALID_PLACEMENT, STACK_OVERLARGE]"
        );
    }

    // ------------------------------------------------------------------
    // Totals
    // ------------------------------------------------------------------

    #[test]
    fn test_summary_of_example_building() {
        let blueprint = blueprint("X1 31 1X");
        let building = building_of(&[
            (1, 2, "W3"),
            (2, 1, "G5"),
            (2, 1, "R5"),
            (2, 1, "S6"),
            (2, 2, "W4"),
            (3, 1, "R1"),
        ]);

        let summary = ScoringResult::new(&blueprint, &building).summary();

        assert_eq!(
            summary,
            ScoreSummary {
                glass: 5,
                recycled: 5,
                stone: 5,
                wood: 6,
                bonus: 6,
                total: 27,
                violations: ViolationList::new(),
            }
        );
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let blueprint = blueprint("X1 11 11");
        let building = building_of(&[(1, 1, "G3")]);

        let json = serde_json::to_value(ScoringResult::new(&blueprint, &building).summary()).unwrap();

        assert_eq!(json["total"], 0);
        assert_eq!(json["violations"][0], "INVALID_PLACEMENT");
    }
}
