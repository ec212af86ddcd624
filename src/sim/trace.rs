//! Laser path tracing
//!
//! A ray enters from a border dot, advances one cell per step, reflects off
//! mirrors and stops at the first border dot it reaches. The path is recorded
//! as straight-line segment lengths; the dot value is their product.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, Direction, Dot};
use super::grid::GridState;
use crate::consts::DEFAULT_MAX_TRACE_STEPS;
use crate::error::{EngineError, Result};

/// One unit of laser travel: the position reached and the direction moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub from: Coord,
    pub to: Coord,
    pub direction: Direction,
}

/// A completed trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracePath {
    pub entry: Dot,
    pub exit: Dot,
    /// Straight-run lengths in travel order (always at least one, all positive)
    pub segments: Vec<u32>,
    /// Unit steps in travel order, for drawing
    pub steps: Vec<PathStep>,
}

impl TracePath {
    /// Product of the segment lengths
    pub fn value(&self) -> Result<u64> {
        self.segments
            .iter()
            .try_fold(1u64, |acc, &len| acc.checked_mul(u64::from(len)))
            .ok_or(EngineError::ValueOverflow)
    }

    /// Total distance travelled
    pub fn length(&self) -> u32 {
        self.segments.iter().sum()
    }

    /// Number of reflections along the path
    pub fn reflections(&self) -> usize {
        self.segments.len() - 1
    }
}

/// Traces rays through a grid without modifying it
#[derive(Debug, Clone, Copy)]
pub struct LaserTracer<'a> {
    grid: &'a GridState,
    max_steps: usize,
}

impl<'a> LaserTracer<'a> {
    pub fn new(grid: &'a GridState) -> Self {
        Self {
            grid,
            max_steps: DEFAULT_MAX_TRACE_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Fire a laser from `entry` and follow it to the exit dot
    pub fn trace(&self, entry: Dot) -> Result<TracePath> {
        let mut pos = entry.coord();
        let mut direction = entry.inward_direction();
        let mut last_direction: Option<Direction> = None;
        let mut current_segment_length = 0u32;
        let mut segments = Vec::new();
        let mut steps = Vec::new();

        for _ in 0..self.max_steps {
            // A direction change closes the run walked so far
            if last_direction.is_some_and(|last| last != direction) {
                segments.push(current_segment_length);
                current_segment_length = 0;
            }
            last_direction = Some(direction);

            let next = pos.step(direction);
            steps.push(PathStep {
                from: pos,
                to: next,
                direction,
            });
            pos = next;
            current_segment_length += 1;

            if let Ok(exit) = Dot::try_from(pos) {
                segments.push(current_segment_length);
                log::debug!(
                    "laser {} -> {} segments {:?}",
                    entry,
                    exit,
                    segments
                );
                return Ok(TracePath {
                    entry,
                    exit,
                    segments,
                    steps,
                });
            }

            direction = self.grid.mirror_at(pos).reflect(direction);
        }

        log::warn!(
            "laser from {} still inside the grid after {} steps",
            entry,
            self.max_steps
        );
        Err(EngineError::NonTerminatingPath {
            entry: entry.coord(),
            steps: self.max_steps,
        })
    }
}
