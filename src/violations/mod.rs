//! Rule violations and the ordered violation set
//!
//! Violations are data, not errors: they are collected while inspecting a
//! stack or building and reported alongside the scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A breach of the building rules.
///
/// Declaration order is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Violation {
    /// More than six dice in the whole building
    BuildingOverlarge,
    /// A die sits on a die with a higher face
    DescendingDice,
    /// A die occupies a cell the blueprint forbids
    InvalidPlacement,
    /// More than six dice in a single stack
    StackOverlarge,
}

impl Violation {
    pub fn name(&self) -> &'static str {
        match self {
            Violation::BuildingOverlarge => "BUILDING_OVERLARGE",
            Violation::DescendingDice => "DESCENDING_DICE",
            Violation::InvalidPlacement => "INVALID_PLACEMENT",
            Violation::StackOverlarge => "STACK_OVERLARGE",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deduplicated set of violations, always iterated in canonical order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationList {
    violations: BTreeSet<Violation>,
}

impl ViolationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation; adding one that is already present is a no-op
    pub fn add(&mut self, violation: Violation) {
        self.violations.insert(violation);
    }

    /// Union another list into this one
    pub fn merge(&mut self, other: &ViolationList) {
        self.violations.extend(other.violations.iter().copied());
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Violation> + '_ {
        self.violations.iter().copied()
    }
}

impl FromIterator<Violation> for ViolationList {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl Extend<Violation> for ViolationList {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}

/// Renders as `[K1, K2]`, or `[]` when empty
impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, violation) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", violation)?;
        }
        f.write_str("]")
    }
}
