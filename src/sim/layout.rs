//! Seeded random mirror layouts
//!
//! Scatters mirrors over an empty grid while respecting the adjacency rule.
//! Same seed, same layout.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::coord::Cell;
use super::grid::GridState;
use super::mirror::MirrorKind;
use crate::consts::{INTERIOR_MAX, INTERIOR_MIN};

/// Try `attempts` random placements; occupied or blocked cells are skipped
pub fn scatter(seed: u64, attempts: usize) -> GridState {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut grid = GridState::new();

    for _ in 0..attempts {
        let row = rng.random_range(INTERIOR_MIN..=INTERIOR_MAX);
        let col = rng.random_range(INTERIOR_MIN..=INTERIOR_MAX);
        let kind = if rng.random_bool(0.5) {
            MirrorKind::UpRight
        } else {
            MirrorKind::UpLeft
        };
        let Ok(cell) = Cell::new(row, col) else {
            continue;
        };
        if grid.mirror_at(cell).is_mirror() {
            continue;
        }
        // Blocked placements are expected here and simply skipped
        let _ = grid.place(cell, kind);
    }

    log::debug!(
        "scattered {} mirrors from seed {}",
        grid.mirror_count(),
        seed
    );
    grid
}
