//! Puzzle session: the engine object the presentation layer talks to
//!
//! Owns the mirror grid, the dot values and the lasers fired since the last
//! reset. Every command either fully succeeds or leaves all three untouched.

use std::collections::BTreeMap;

use super::coord::{Cell, Dot};
use super::dots::DotValues;
use super::grid::GridState;
use super::mirror::MirrorKind;
use super::trace::{LaserTracer, TracePath};
use crate::consts::DEFAULT_MAX_TRACE_STEPS;
use crate::error::Result;

/// Result of firing a dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// First fire: the laser was traced and both endpoints received a value
    Traced {
        entry_value: u64,
        exit: Dot,
        exit_value: u64,
    },
    /// Dot had already been fired: every laser and dot value was cleared
    Cleared,
}

/// A single user action, as delivered by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlaceOrCycle(Cell),
    Remove(Cell),
    Fire(Dot),
    ClearLasers,
    ClearAll,
}

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Mirror(MirrorKind),
    Fire(FireOutcome),
    Cleared,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: GridState,
    values: DotValues,
    /// Lasers keyed by the dot they were fired from
    lasers: BTreeMap<Dot, TracePath>,
    max_trace_steps: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_grid(GridState::new())
    }

    /// Start from an existing mirror layout
    pub fn with_grid(grid: GridState) -> Self {
        Self {
            grid,
            values: DotValues::new(),
            lasers: BTreeMap::new(),
            max_trace_steps: DEFAULT_MAX_TRACE_STEPS,
        }
    }

    pub fn with_max_trace_steps(mut self, max_trace_steps: usize) -> Self {
        self.max_trace_steps = max_trace_steps;
        self
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn values(&self) -> &DotValues {
        &self.values
    }

    pub fn mirror_at(&self, cell: Cell) -> MirrorKind {
        self.grid.mirror_at(cell)
    }

    pub fn value_at(&self, dot: Dot) -> Option<u64> {
        self.values.value_at(dot)
    }

    /// Lasers fired since the last reset, in dot order
    pub fn lasers(&self) -> impl Iterator<Item = &TracePath> {
        self.lasers.values()
    }

    pub fn is_fired(&self, dot: Dot) -> bool {
        self.lasers.contains_key(&dot)
    }

    /// Dispatch a command
    pub fn apply(&mut self, command: Command) -> Result<Response> {
        match command {
            Command::PlaceOrCycle(cell) => self.place_or_cycle(cell).map(Response::Mirror),
            Command::Remove(cell) => {
                self.remove(cell);
                Ok(Response::Mirror(MirrorKind::Empty))
            }
            Command::Fire(dot) => self.fire(dot).map(Response::Fire),
            Command::ClearLasers => {
                self.clear_lasers();
                Ok(Response::Cleared)
            }
            Command::ClearAll => {
                self.clear_all();
                Ok(Response::Cleared)
            }
        }
    }

    /// Cycle the mirror in `cell`. Any change invalidates the current results.
    pub fn place_or_cycle(&mut self, cell: Cell) -> Result<MirrorKind> {
        let kind = self.grid.place_or_cycle(cell)?;
        self.clear_lasers();
        Ok(kind)
    }

    pub fn remove(&mut self, cell: Cell) {
        self.grid.remove(cell);
        self.clear_lasers();
    }

    /// Fire a laser from `dot`, or clear everything if it was already fired
    pub fn fire(&mut self, dot: Dot) -> Result<FireOutcome> {
        if self.lasers.contains_key(&dot) {
            self.clear_lasers();
            return Ok(FireOutcome::Cleared);
        }

        let path = LaserTracer::new(&self.grid)
            .with_max_steps(self.max_trace_steps)
            .trace(dot)?;
        let value = self.values.assign(dot, &path)?;
        let exit = path.exit;
        self.lasers.insert(dot, path);

        Ok(FireOutcome::Traced {
            entry_value: value,
            exit,
            exit_value: value,
        })
    }

    /// Drop every laser and dot value, keeping the mirrors
    pub fn clear_lasers(&mut self) {
        self.lasers.clear();
        self.values.clear_all_dot_values();
    }

    /// Back to an empty grid with no values
    pub fn clear_all(&mut self) {
        self.grid.clear_all();
        self.clear_lasers();
        log::info!("Session cleared");
    }
}
