//! Mirror occupancy for the 10×10 interior
//!
//! Enforces the adjacency invariant: no two mirrors may share an edge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::coord::{Cell, Coord};
use super::mirror::MirrorKind;
use crate::consts::*;
use crate::error::{EngineError, Result};

/// Mirror placement for every interior cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GridState {
    cells: [[MirrorKind; INTERIOR_SIZE]; INTERIOR_SIZE],
}

impl GridState {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn slot(cell: Cell) -> (usize, usize) {
        (
            (cell.row() - INTERIOR_MIN) as usize,
            (cell.col() - INTERIOR_MIN) as usize,
        )
    }

    fn set(&mut self, cell: Cell, kind: MirrorKind) {
        let (r, c) = Self::slot(cell);
        self.cells[r][c] = kind;
    }

    /// Mirror at a position. Border and out-of-range coordinates are never mirrors.
    pub fn mirror_at(&self, at: impl Into<Coord>) -> MirrorKind {
        match Cell::try_from(at.into()) {
            Ok(cell) => {
                let (r, c) = Self::slot(cell);
                self.cells[r][c]
            }
            Err(_) => MirrorKind::Empty,
        }
    }

    /// True if none of the cell's four orthogonal neighbours holds a mirror
    pub fn neighbors_clear(&self, cell: Cell) -> bool {
        cell.coord()
            .neighbors()
            .iter()
            .all(|&n| !self.mirror_at(n).is_mirror())
    }

    /// Advance the cell through Empty → UpRight → UpLeft → Empty.
    ///
    /// Returns the new kind, or `AdjacencyViolation` (grid unchanged) if a
    /// neighbour holds a mirror. Cycling UpLeft back to Empty is a removal
    /// and is never blocked.
    pub fn place_or_cycle(&mut self, cell: Cell) -> Result<MirrorKind> {
        let current = self.mirror_at(cell);
        if current == MirrorKind::UpLeft {
            self.remove(cell);
            return Ok(MirrorKind::Empty);
        }
        if !self.neighbors_clear(cell) {
            return Err(EngineError::AdjacencyViolation {
                row: cell.row(),
                col: cell.col(),
            });
        }
        let next = current.next();
        self.set(cell, next);
        log::debug!("cell {} -> {:?}", cell, next);
        Ok(next)
    }

    /// Put `kind` directly into the cell, subject to the adjacency invariant
    pub fn place(&mut self, cell: Cell, kind: MirrorKind) -> Result<()> {
        if kind.is_mirror() && !self.neighbors_clear(cell) {
            return Err(EngineError::AdjacencyViolation {
                row: cell.row(),
                col: cell.col(),
            });
        }
        self.set(cell, kind);
        Ok(())
    }

    /// Force the cell to Empty
    pub fn remove(&mut self, cell: Cell) {
        self.set(cell, MirrorKind::Empty);
    }

    /// Reset every interior cell to Empty
    pub fn clear_all(&mut self) {
        self.cells = [[MirrorKind::Empty; INTERIOR_SIZE]; INTERIOR_SIZE];
    }

    /// Iterate placed mirrors in row-major order
    pub fn mirrors(&self) -> impl Iterator<Item = (Cell, MirrorKind)> + '_ {
        Cell::all()
            .map(|cell| (cell, self.mirror_at(cell)))
            .filter(|(_, kind)| kind.is_mirror())
    }

    pub fn mirror_count(&self) -> usize {
        self.mirrors().count()
    }

    pub fn is_empty(&self) -> bool {
        self.mirror_count() == 0
    }

    /// Parse a 10-line layout of `.`, `\` and `/`
    pub fn from_layout(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != INTERIOR_SIZE {
            return Err(EngineError::Layout(format!(
                "expected {} rows, found {}",
                INTERIOR_SIZE,
                rows.len()
            )));
        }

        let mut grid = Self::new();
        for (r, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != INTERIOR_SIZE {
                return Err(EngineError::Layout(format!(
                    "row {} has {} columns, expected {}",
                    r + 1,
                    width,
                    INTERIOR_SIZE
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                let kind = MirrorKind::from_glyph(ch).ok_or_else(|| {
                    EngineError::Layout(format!("unknown character {:?} in row {}", ch, r + 1))
                })?;
                let cell = Cell::new(r as i32 + INTERIOR_MIN, c as i32 + INTERIOR_MIN)?;
                grid.place(cell, kind)?;
            }
        }
        Ok(grid)
    }

    /// Render as a 10-line layout (inverse of `from_layout`)
    pub fn to_layout(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|k| k.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for GridState {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_layout(s)
    }
}

impl TryFrom<String> for GridState {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_layout(&s)
    }
}

impl From<GridState> for String {
    fn from(grid: GridState) -> Self {
        grid.to_layout()
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_layout())
    }
}
