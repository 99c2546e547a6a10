//! A single pile of dice at one grid cell

use super::die::Die;
use crate::core::rules::MAX_STACK_HEIGHT;
use crate::violations::{Violation, ViolationList};
use std::fmt;

/// Dice stacked bottom to top. Level 1 is the bottom die.
///
/// `Clone` copies the dice, so a clone never observes later `add`s on the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceStack {
    dice: Vec<Die>,
}

impl DiceStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a die on top of the stack
    pub fn add(&mut self, die: Die) {
        self.dice.push(die);
    }

    /// Die at a 1-based level, or `None` if there is no die there
    pub fn die_at(&self, level: usize) -> Option<&Die> {
        level.checked_sub(1).and_then(|index| self.dice.get(index))
    }

    pub fn height(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Copy of the dice, bottom first
    pub fn dice(&self) -> Vec<Die> {
        self.dice.clone()
    }

    /// Iterate `(level, die)` pairs from the bottom up
    pub fn levels(&self) -> impl Iterator<Item = (usize, &Die)> + '_ {
        self.dice.iter().enumerate().map(|(index, die)| (index + 1, die))
    }

    pub fn violations(&self) -> ViolationList {
        let mut violations = ViolationList::new();

        if self.height() > MAX_STACK_HEIGHT {
            violations.add(Violation::StackOverlarge);
        }

        if self
            .dice
            .windows(2)
            .any(|pair| pair[1].face() < pair[0].face())
        {
            violations.add(Violation::DescendingDice);
        }

        violations
    }

    pub fn is_valid(&self) -> bool {
        !self.violations().has_violations()
    }
}

/// Renders as `[G2 R5]`
impl fmt::Display for DiceStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, die) in self.dice.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", die)?;
        }
        f.write_str("]")
    }
}
