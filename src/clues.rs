//! Clue numbers printed around the puzzle
//!
//! Static configuration supplied by the caller. Comparison only - nothing
//! here searches for a layout.

use serde::{Deserialize, Serialize};

use crate::consts::INTERIOR_SIZE;
use crate::sim::{Dot, DotValues, Side};

type SideClues = [Option<u64>; INTERIOR_SIZE];

/// Clue for each dot, per side, indexed by offset - 1
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClueSet {
    #[serde(default)]
    pub top: SideClues,
    #[serde(default)]
    pub left: SideClues,
    #[serde(default)]
    pub right: SideClues,
    #[serde(default)]
    pub bottom: SideClues,
}

/// How a clued dot compares with its current value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueStatus {
    /// No laser has reached this dot yet
    Pending { dot: Dot, expected: u64 },
    Satisfied { dot: Dot, value: u64 },
    Conflict { dot: Dot, expected: u64, actual: u64 },
}

impl ClueStatus {
    pub fn dot(&self) -> Dot {
        match *self {
            ClueStatus::Pending { dot, .. }
            | ClueStatus::Satisfied { dot, .. }
            | ClueStatus::Conflict { dot, .. } => dot,
        }
    }
}

impl ClueSet {
    /// Jane Street "Hall of Mirrors 3" (March 2025)
    #[rustfmt::skip]
    pub fn hall_of_mirrors_3() -> Self {
        Self {
            top: [None, None, Some(112), None, Some(48), Some(3087), Some(9), None, None, Some(1)],
            left: [None, None, None, Some(27), None, None, None, Some(12), Some(225), None],
            right: [None, Some(4), Some(27), None, None, None, Some(16), None, None, None],
            bottom: [Some(2025), None, None, Some(12), Some(64), Some(5), None, Some(405), None, None],
        }
    }

    fn side(&self, side: Side) -> &SideClues {
        match side {
            Side::Top => &self.top,
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
        }
    }

    pub fn clue_at(&self, dot: Dot) -> Option<u64> {
        self.side(dot.side())[(dot.offset() - 1) as usize]
    }

    /// Clued dots in index order
    pub fn clued_dots(&self) -> impl Iterator<Item = (Dot, u64)> + '_ {
        Dot::all().filter_map(|dot| self.clue_at(dot).map(|c| (dot, c)))
    }

    /// Status of every clued dot against the current values
    pub fn check(&self, values: &DotValues) -> Vec<ClueStatus> {
        self.clued_dots()
            .map(|(dot, expected)| match values.value_at(dot) {
                None => ClueStatus::Pending { dot, expected },
                Some(value) if value == expected => ClueStatus::Satisfied { dot, value },
                Some(actual) => ClueStatus::Conflict {
                    dot,
                    expected,
                    actual,
                },
            })
            .collect()
    }

    /// True once every clued dot carries its clue
    pub fn is_satisfied(&self, values: &DotValues) -> bool {
        self.check(values)
            .iter()
            .all(|s| matches!(s, ClueStatus::Satisfied { .. }))
    }
}
