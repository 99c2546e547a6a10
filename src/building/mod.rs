//! Building layer - dice, stacks and the 3x2 building grid

pub mod die;
pub mod reader;
pub mod stack;

pub use die::{Die, Material};
pub use reader::BuildingReader;
pub use stack::DiceStack;

use crate::core::error::{Result, ScoringError};
use crate::core::rules::{COLS, MAX_BUILDING_DICE, ROWS};
use crate::violations::{Violation, ViolationList};

/// A 1-based grid coordinate, row 1-3 and column 1-2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if (1..=ROWS).contains(&row) && (1..=COLS).contains(&col) {
            Ok(Self { row, col })
        } else {
            Err(ScoringError::CellOutOfBounds { row, col })
        }
    }

    /// Every cell in row-major order
    pub fn all() -> impl Iterator<Item = CellPos> {
        (1..=ROWS).flat_map(|row| (1..=COLS).map(move |col| CellPos { row, col }))
    }

    /// Cells sharing an edge with this one
    pub fn neighbours(&self) -> impl Iterator<Item = CellPos> {
        let CellPos { row, col } = *self;
        let candidates = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        candidates
            .into_iter()
            .filter_map(|(row, col)| CellPos::new(row, col).ok())
    }
}

/// Fixed 3x2 grid of dice stacks.
///
/// `Clone` deep-copies every stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Building {
    stacks: [[DiceStack; COLS]; ROWS],
}

impl Building {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a die on top of the stack at (row, col).
    ///
    /// Coordinates outside the grid are rejected and nothing is added.
    pub fn add(&mut self, die: Die, row: usize, col: usize) -> Result<()> {
        let pos = CellPos::new(row, col)?;
        self.stacks[pos.row - 1][pos.col - 1].add(die);
        Ok(())
    }

    /// Stack at (row, col), or `None` outside the grid
    pub fn stack(&self, row: usize, col: usize) -> Option<&DiceStack> {
        let pos = CellPos::new(row, col).ok()?;
        Some(self.stack_at(pos))
    }

    pub fn stack_at(&self, pos: CellPos) -> &DiceStack {
        &self.stacks[pos.row - 1][pos.col - 1]
    }

    /// Die at (row, col, level), or `None` if nothing is there
    pub fn die_at(&self, row: usize, col: usize, level: usize) -> Option<&Die> {
        self.stack(row, col)?.die_at(level)
    }

    /// Every cell with its stack, row-major
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, &DiceStack)> + '_ {
        CellPos::all().map(move |pos| (pos, self.stack_at(pos)))
    }

    /// Height of the tallest stack
    pub fn height(&self) -> usize {
        self.cells().map(|(_, stack)| stack.height()).max().unwrap_or(0)
    }

    pub fn num_dice(&self) -> usize {
        self.cells().map(|(_, stack)| stack.height()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_dice() == 0
    }

    /// Every die of the given material, in row-major then bottom-up order
    pub fn all(&self, material: Material) -> Vec<Die> {
        self.cells()
            .flat_map(|(_, stack)| stack.levels().map(|(_, die)| *die))
            .filter(|die| die.is(material))
            .collect()
    }

    pub fn violations(&self) -> ViolationList {
        let mut violations = ViolationList::new();

        for (_, stack) in self.cells() {
            violations.merge(&stack.violations());
        }

        if self.num_dice() > MAX_BUILDING_DICE {
            violations.add(Violation::BuildingOverlarge);
        }

        violations
    }

    pub fn is_valid(&self) -> bool {
        !self.violations().has_violations()
    }
}
