//! Values recorded on the border dots

use serde::{Deserialize, Serialize};

use super::coord::Dot;
use super::trace::TracePath;
use crate::consts::DOT_COUNT;
use crate::error::Result;

/// The number shown next to each of the 40 dots (unset until a laser hits it)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotValues {
    values: Vec<Option<u64>>,
}

impl Default for DotValues {
    fn default() -> Self {
        Self::new()
    }
}

impl DotValues {
    pub fn new() -> Self {
        Self {
            values: vec![None; DOT_COUNT],
        }
    }

    pub fn value_at(&self, dot: Dot) -> Option<u64> {
        self.values[dot.index()]
    }

    /// Write the path's segment product to both of its endpoints.
    ///
    /// Returns the value written. On overflow nothing is written.
    pub fn assign(&mut self, entry: Dot, path: &TracePath) -> Result<u64> {
        let value = path.value()?;
        self.values[entry.index()] = Some(value);
        self.values[path.exit.index()] = Some(value);
        Ok(value)
    }

    /// Reset every dot to unset
    pub fn clear_all_dot_values(&mut self) {
        self.values.fill(None);
    }

    /// Dots that currently carry a value, in index order
    pub fn iter(&self) -> impl Iterator<Item = (Dot, u64)> + '_ {
        Dot::all().filter_map(|dot| self.value_at(dot).map(|v| (dot, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::GridState;
    use crate::sim::trace::LaserTracer;

    #[test]
    fn test_assign_writes_both_ends() {
        let grid = GridState::new();
        let entry = Dot::new(4, 0).unwrap();
        let path = LaserTracer::new(&grid).trace(entry).unwrap();

        let mut values = DotValues::new();
        assert_eq!(values.assign(entry, &path).unwrap(), 11);
        assert_eq!(values.value_at(entry), Some(11));
        assert_eq!(values.value_at(Dot::new(4, 11).unwrap()), Some(11));
        assert_eq!(values.iter().count(), 2);
    }

    #[test]
    fn test_assign_overwrites() {
        let mut values = DotValues::new();
        let entry = Dot::new(0, 2).unwrap();
        let exit = Dot::new(11, 2).unwrap();
        let mut path = TracePath {
            entry,
            exit,
            segments: vec![11],
            steps: Vec::new(),
        };
        values.assign(entry, &path).unwrap();
        path.segments = vec![2, 3];
        values.assign(entry, &path).unwrap();
        assert_eq!(values.value_at(entry), Some(6));
        assert_eq!(values.value_at(exit), Some(6));
    }

    #[test]
    fn test_clear() {
        let grid = GridState::new();
        let mut values = DotValues::new();
        for entry in [Dot::new(0, 1).unwrap(), Dot::new(5, 0).unwrap()] {
            let path = LaserTracer::new(&grid).trace(entry).unwrap();
            values.assign(entry, &path).unwrap();
        }
        assert!(!values.is_empty());
        values.clear_all_dot_values();
        assert!(values.is_empty());
        values.clear_all_dot_values();
        assert_eq!(values, DotValues::new());
    }
}
