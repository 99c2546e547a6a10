//! Game rule constants - grid geometry, limits and point tables in one place
//!
//! These are fixed by the rules of the game and are not configurable.

// Grid geometry
pub const ROWS: usize = 3;
pub const COLS: usize = 2;

// Size limits
pub const MAX_STACK_HEIGHT: usize = 6;
pub const MAX_BUILDING_DICE: usize = 6;

// Die faces
pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

/// Points for the number of recycled dice in the building, indexed by count.
/// Counts above 6 use the last entry.
pub const RECYCLED_POINTS: [u32; 7] = [0, 2, 5, 10, 15, 20, 30];

/// Points for a stone die by level (index 0 is level 1).
/// Levels above 4 use the last entry.
pub const STONE_LEVEL_POINTS: [u32; 4] = [2, 3, 5, 8];

/// Points a wood die earns per satisfied condition
pub const WOOD_POINTS_PER_CONDITION: u32 = 2;

/// Flat bonus for matching every blueprint target exactly
pub const EXACT_MATCH_BONUS: u32 = 6;

/// Recycled points for a given number of recycled dice
pub fn recycled_points(count: usize) -> u32 {
    RECYCLED_POINTS[count.min(RECYCLED_POINTS.len() - 1)]
}

/// Stone points for a die at a 1-based level
pub fn stone_points(level: usize) -> u32 {
    let index = level.saturating_sub(1).min(STONE_LEVEL_POINTS.len() - 1);
    STONE_LEVEL_POINTS[index]
}
