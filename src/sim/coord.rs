//! Grid coordinates
//!
//! The addressable space is a 12×12 matrix. Rows/columns 1..=10 are the
//! interior where mirrors live; row/column 0 and 11 form the border ring that
//! carries the 40 entry/exit dots. Corners are never addressable.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::EngineError;

/// True if `(row, col)` is one of the 100 mirror cells
#[inline]
pub fn is_interior(row: i32, col: i32) -> bool {
    (INTERIOR_MIN..=INTERIOR_MAX).contains(&row) && (INTERIOR_MIN..=INTERIOR_MAX).contains(&col)
}

/// True if `(row, col)` is one of the 40 border dots (corners excluded)
#[inline]
pub fn is_border_dot(row: i32, col: i32) -> bool {
    let edge = |v: i32| v == 0 || v == GRID_SIZE - 1;
    let inner = |v: i32| (INTERIOR_MIN..=INTERIOR_MAX).contains(&v);
    (edge(row) && inner(col)) || (inner(row) && edge(col))
}

/// Travel direction of a laser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as (x = column, y = row)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A raw position in the 12×12 space (may be interior, border or corner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position one unit further along `direction`
    pub fn step(self, direction: Direction) -> Self {
        let d = direction.delta();
        Self {
            row: self.row + d.y,
            col: self.col + d.x,
        }
    }

    /// The four orthogonal neighbours (up, down, left, right)
    pub fn neighbors(self) -> [Coord; 4] {
        [
            self.step(Direction::Up),
            self.step(Direction::Down),
            self.step(Direction::Left),
            self.step(Direction::Right),
        ]
    }

    pub fn is_interior(self) -> bool {
        is_interior(self.row, self.col)
    }

    pub fn is_border_dot(self) -> bool {
        is_border_dot(self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An interior mirror cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct Cell(Coord);

impl Cell {
    pub fn new(row: i32, col: i32) -> Result<Self, EngineError> {
        if is_interior(row, col) {
            Ok(Self(Coord::new(row, col)))
        } else {
            Err(EngineError::InvalidCell { row, col })
        }
    }

    pub fn row(self) -> i32 {
        self.0.row
    }

    pub fn col(self) -> i32 {
        self.0.col
    }

    pub fn coord(self) -> Coord {
        self.0
    }

    /// Iterate all 100 cells in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (INTERIOR_MIN..=INTERIOR_MAX).flat_map(|row| {
            (INTERIOR_MIN..=INTERIOR_MAX).map(move |col| Cell(Coord::new(row, col)))
        })
    }
}

impl TryFrom<Coord> for Cell {
    type Error = EngineError;

    fn try_from(coord: Coord) -> Result<Self, Self::Error> {
        Cell::new(coord.row, coord.col)
    }
}

impl From<Cell> for Coord {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Border side a dot sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Right, Side::Bottom];

    /// Direction a laser travels when fired from this side
    pub fn inward(self) -> Direction {
        match self {
            Side::Top => Direction::Down,
            Side::Left => Direction::Right,
            Side::Right => Direction::Left,
            Side::Bottom => Direction::Up,
        }
    }
}

/// A border entry/exit point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct Dot(Coord);

impl Dot {
    pub fn new(row: i32, col: i32) -> Result<Self, EngineError> {
        if is_border_dot(row, col) {
            Ok(Self(Coord::new(row, col)))
        } else {
            Err(EngineError::InvalidDot { row, col })
        }
    }

    /// Dot on `side` at `offset` (1..=10) along that side
    pub fn on_side(side: Side, offset: i32) -> Result<Self, EngineError> {
        let last = GRID_SIZE - 1;
        match side {
            Side::Top => Dot::new(0, offset),
            Side::Left => Dot::new(offset, 0),
            Side::Right => Dot::new(offset, last),
            Side::Bottom => Dot::new(last, offset),
        }
    }

    pub fn row(self) -> i32 {
        self.0.row
    }

    pub fn col(self) -> i32 {
        self.0.col
    }

    pub fn coord(self) -> Coord {
        self.0
    }

    pub fn side(self) -> Side {
        let last = GRID_SIZE - 1;
        if self.0.row == 0 {
            Side::Top
        } else if self.0.col == 0 {
            Side::Left
        } else if self.0.col == last {
            Side::Right
        } else {
            Side::Bottom
        }
    }

    /// Position along the dot's side (1..=10)
    pub fn offset(self) -> i32 {
        match self.side() {
            Side::Top | Side::Bottom => self.0.col,
            Side::Left | Side::Right => self.0.row,
        }
    }

    /// Initial laser direction when fired from this dot
    pub fn inward_direction(self) -> Direction {
        self.side().inward()
    }

    /// Stable index in 0..DOT_COUNT: top, left, right, bottom, each ascending
    pub fn index(self) -> usize {
        let side = match self.side() {
            Side::Top => 0,
            Side::Left => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        };
        side * INTERIOR_SIZE + (self.offset() - INTERIOR_MIN) as usize
    }

    /// Iterate all 40 dots in index order
    pub fn all() -> impl Iterator<Item = Dot> {
        Side::ALL.into_iter().flat_map(|side| {
            (INTERIOR_MIN..=INTERIOR_MAX).filter_map(move |offset| Dot::on_side(side, offset).ok())
        })
    }
}

impl TryFrom<Coord> for Dot {
    type Error = EngineError;

    fn try_from(coord: Coord) -> Result<Self, Self::Error> {
        Dot::new(coord.row, coord.col)
    }
}

impl From<Dot> for Coord {
    fn from(dot: Dot) -> Self {
        dot.0
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
