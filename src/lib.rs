//! Hall of Mirrors - laser reflection engine for the grid puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (mirror grid, laser tracing, dot values)
//! - `clues`: Static clue numbers and comparison against traced values
//! - `settings`: JSON configuration
//! - `error`: Engine error type

pub mod clues;
pub mod error;
pub mod settings;
pub mod sim;

pub use clues::{ClueSet, ClueStatus};
pub use error::{EngineError, Result};
pub use settings::Settings;
pub use sim::{Cell, Dot, FireOutcome, GridState, MirrorKind, Session};

/// Grid configuration constants
pub mod consts {
    /// Side length of the addressable grid (interior plus border ring)
    pub const GRID_SIZE: i32 = 12;
    /// First interior row/column
    pub const INTERIOR_MIN: i32 = 1;
    /// Last interior row/column
    pub const INTERIOR_MAX: i32 = 10;
    /// Interior cells per side
    pub const INTERIOR_SIZE: usize = 10;
    /// Number of entry/exit dots on the border ring
    pub const DOT_COUNT: usize = 40;

    /// Step bound for a single trace. Every (cell, direction) state can be
    /// visited at most once by a terminating ray, so this is never hit on a
    /// real grid.
    pub const DEFAULT_MAX_TRACE_STEPS: usize = 4 * (GRID_SIZE * GRID_SIZE) as usize;
}
