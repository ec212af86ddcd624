//! Mirror kinds and reflection rules

use serde::{Deserialize, Serialize};

use super::coord::Direction;

/// Contents of an interior cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MirrorKind {
    #[default]
    Empty,
    /// `\` - top-left corner to bottom-right corner
    UpRight,
    /// `/` - bottom-left corner to top-right corner
    UpLeft,
}

impl MirrorKind {
    /// Next state in the placement cycle: Empty → UpRight → UpLeft → Empty
    pub fn next(self) -> Self {
        match self {
            MirrorKind::Empty => MirrorKind::UpRight,
            MirrorKind::UpRight => MirrorKind::UpLeft,
            MirrorKind::UpLeft => MirrorKind::Empty,
        }
    }

    pub fn is_mirror(self) -> bool {
        self != MirrorKind::Empty
    }

    /// Direction a ray leaves this cell in, given the direction it entered with
    pub fn reflect(self, direction: Direction) -> Direction {
        use Direction::*;
        match (self, direction) {
            (MirrorKind::Empty, d) => d,
            (MirrorKind::UpRight, Right) | (MirrorKind::UpLeft, Left) => Down,
            (MirrorKind::UpRight, Down) | (MirrorKind::UpLeft, Up) => Right,
            (MirrorKind::UpRight, Up) | (MirrorKind::UpLeft, Down) => Left,
            (MirrorKind::UpRight, Left) | (MirrorKind::UpLeft, Right) => Up,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            MirrorKind::Empty => '.',
            MirrorKind::UpRight => '\\',
            MirrorKind::UpLeft => '/',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' => Some(MirrorKind::Empty),
            '\\' => Some(MirrorKind::UpRight),
            '/' => Some(MirrorKind::UpLeft),
            _ => None,
        }
    }
}
