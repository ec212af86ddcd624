//! Deterministic simulation module
//!
//! All engine logic lives here. This module must be pure and deterministic:
//! - Tracing only reads the grid
//! - Seeded RNG only
//! - Stable iteration order (dots by index, cells row-major)
//! - No rendering or platform dependencies

pub mod coord;
pub mod dots;
pub mod grid;
pub mod layout;
pub mod mirror;
pub mod session;
pub mod trace;

pub use coord::{Cell, Coord, Direction, Dot, Side, is_border_dot, is_interior};
pub use dots::DotValues;
pub use grid::GridState;
pub use layout::scatter;
pub use mirror::MirrorKind;
pub use session::{Command, FireOutcome, Response, Session};
pub use trace::{LaserTracer, PathStep, TracePath};
