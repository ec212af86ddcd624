//! Property and scenario tests for the reflection engine.
//!
//! Invariants covered:
//! - The adjacency rule holds after any sequence of placement commands.
//! - Rejected placements leave the grid untouched.
//! - Firing an exit dot retraces the path backwards with the same value.
//! - Every dot is the exit of exactly one other dot (traces pair up).
//! - `clear_all` is idempotent.
//! - The published Hall of Mirrors 3 solution satisfies every clue.

use proptest::prelude::*;

use hall_of_mirrors::clues::ClueSet;
use hall_of_mirrors::sim::{
    Cell, Dot, FireOutcome, GridState, LaserTracer, MirrorKind, Session, scatter,
};
use hall_of_mirrors::EngineError;

const SOLUTION: &str = r"
..\...\..\
........\.
/.../../..
../......\
....../...
./..\..\..
/.\../../.
...\......
..../././.
/..../....
";

fn assert_no_adjacent_mirrors(grid: &GridState) {
    for (cell, _) in grid.mirrors() {
        assert!(grid.neighbors_clear(cell), "mirror at {} touches another", cell);
    }
}

#[test]
fn solution_layout_satisfies_every_clue() {
    let grid = GridState::from_layout(SOLUTION).unwrap();
    let mut session = Session::with_grid(grid);
    let clues = ClueSet::hall_of_mirrors_3();

    for (dot, _) in clues.clued_dots() {
        if session.value_at(dot).is_none() {
            session.fire(dot).unwrap();
        }
    }
    assert!(clues.is_satisfied(session.values()));
}

#[test]
fn solution_layout_known_paths() {
    let grid = GridState::from_layout(SOLUTION).unwrap();
    let tracer = LaserTracer::new(&grid);

    let path = tracer.trace(Dot::new(0, 6).unwrap()).unwrap();
    assert_eq!(path.segments, vec![7, 3, 3, 7, 7]);
    assert_eq!(path.exit, Dot::new(11, 10).unwrap());
    assert_eq!(path.value().unwrap(), 3087);

    let path = tracer.trace(Dot::new(11, 1).unwrap()).unwrap();
    assert_eq!(path.segments, vec![1, 5, 3, 3, 5, 9]);
    assert_eq!(path.exit, Dot::new(2, 0).unwrap());
    assert_eq!(path.value().unwrap(), 2025);

    let path = tracer.trace(Dot::new(0, 4).unwrap()).unwrap();
    assert_eq!(path.segments, vec![8, 7]);
    assert_eq!(path.exit, Dot::new(8, 11).unwrap());
}

#[test]
fn toggle_off_clears_unrelated_pairs() {
    let grid = GridState::from_layout(SOLUTION).unwrap();
    let mut session = Session::with_grid(grid);
    let a = Dot::new(0, 3).unwrap();
    let b = Dot::new(7, 11).unwrap();
    session.fire(a).unwrap();
    session.fire(b).unwrap();
    assert_eq!(session.value_at(Dot::new(11, 7).unwrap()), Some(16));

    assert_eq!(session.fire(a).unwrap(), FireOutcome::Cleared);
    for dot in Dot::all() {
        assert_eq!(session.value_at(dot), None);
    }
}

#[test]
fn placement_guard_only_blocks_new_mirrors() {
    let mut session = Session::new();
    let c = Cell::new(6, 6).unwrap();
    assert_eq!(session.place_or_cycle(c).unwrap(), MirrorKind::UpRight);
    assert!(session.place_or_cycle(Cell::new(6, 7).unwrap()).is_err());
    assert_eq!(session.place_or_cycle(c).unwrap(), MirrorKind::UpLeft);
    assert_eq!(session.place_or_cycle(c).unwrap(), MirrorKind::Empty);
    assert!(session.grid().is_empty());
}

fn interior() -> impl Strategy<Value = Cell> {
    (1i32..=10, 1i32..=10).prop_map(|(r, c)| Cell::new(r, c).unwrap())
}

fn any_dot() -> impl Strategy<Value = Dot> {
    (0usize..40).prop_map(|i| Dot::all().nth(i).unwrap())
}

proptest! {
    #[test]
    fn random_placements_keep_adjacency_invariant(
        cells in proptest::collection::vec(interior(), 0..200),
    ) {
        let mut grid = GridState::new();
        for cell in cells {
            let before = grid.clone();
            match grid.place_or_cycle(cell) {
                Ok(kind) => prop_assert_eq!(grid.mirror_at(cell), kind),
                Err(EngineError::AdjacencyViolation { .. }) => prop_assert_eq!(&grid, &before),
                Err(e) => prop_assert!(false, "unexpected error {}", e),
            }
            assert_no_adjacent_mirrors(&grid);
        }
    }

    #[test]
    fn exit_dot_retraces_path(seed in any::<u64>(), attempts in 0usize..120, entry in any_dot()) {
        let grid = scatter(seed, attempts);
        let tracer = LaserTracer::new(&grid);
        let forward = tracer.trace(entry).unwrap();
        let back = tracer.trace(forward.exit).unwrap();

        prop_assert_eq!(back.exit, entry);
        let mut reversed = forward.segments.clone();
        reversed.reverse();
        prop_assert_eq!(&back.segments, &reversed);
        prop_assert_eq!(back.value().unwrap(), forward.value().unwrap());
        prop_assert!(forward.segments.iter().all(|&s| s > 0));
    }

    #[test]
    fn traces_pair_up_every_dot(seed in any::<u64>(), attempts in 0usize..120) {
        let grid = scatter(seed, attempts);
        let tracer = LaserTracer::new(&grid);
        for entry in Dot::all() {
            let path = tracer.trace(entry).unwrap();
            prop_assert_ne!(path.exit, entry);
            prop_assert_eq!(tracer.trace(path.exit).unwrap().exit, entry);
        }
    }

    #[test]
    fn session_fire_matches_tracer(seed in any::<u64>(), entry in any_dot()) {
        let grid = scatter(seed, 60);
        let expected = LaserTracer::new(&grid).trace(entry).unwrap();
        let mut session = Session::with_grid(grid);
        let outcome = session.fire(entry).unwrap();
        let value = expected.value().unwrap();
        prop_assert_eq!(outcome, FireOutcome::Traced {
            entry_value: value,
            exit: expected.exit,
            exit_value: value,
        });
        prop_assert_eq!(session.value_at(entry), Some(value));
        prop_assert_eq!(session.value_at(expected.exit), Some(value));
    }

    #[test]
    fn clear_all_is_idempotent(seed in any::<u64>(), entry in any_dot()) {
        let mut session = Session::with_grid(scatter(seed, 50));
        session.fire(entry).unwrap();
        session.clear_all();
        let once_grid = session.grid().clone();
        let once_values = session.values().clone();
        session.clear_all();
        prop_assert_eq!(session.grid(), &once_grid);
        prop_assert_eq!(session.values(), &once_values);
        prop_assert!(session.grid().is_empty());
        prop_assert!(session.values().is_empty());
    }
}
