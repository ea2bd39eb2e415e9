use std::collections::{BTreeSet, VecDeque};

use broadside::{
    computer_strategy, generate_grid, get_strategy, place, Coordinate, Grid, Orientation, Ship,
    StrategyState,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn c(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

fn queue(coords: &[(usize, usize)]) -> VecDeque<Coordinate> {
    coords.iter().map(|&(x, y)| c(x, y)).collect()
}

fn grid_with_ship_row() -> Grid {
    let mut grid = generate_grid(8, 8);
    place(&mut grid, &Ship::new("Cruiser", 3), c(0, 0), Orientation::Horizontal).unwrap();
    grid
}

#[test]
fn pending_neighbours_do_not_trigger_a_new_sweep() {
    let mut rng = SmallRng::seed_from_u64(4);
    let state = StrategyState {
        next: queue(&[(2, 3)]),
        plan: VecDeque::new(),
        last_try: None,
    };
    let state = computer_strategy(&mut rng, Some(state), Some(&generate_grid(8, 8)));
    assert_eq!(state.last_try, Some(c(2, 3)));
    assert!(state.plan.is_empty());
    assert!(state.next.is_empty());
}

#[test]
fn no_grid_returns_state_unchanged() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(computer_strategy(&mut rng, None, None), StrategyState::default());

    let input = StrategyState::with_plan([c(3, 3)]);
    assert_eq!(computer_strategy(&mut rng, Some(input.clone()), None), input);
}

#[test]
fn builds_a_plan_when_idle() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = generate_grid(8, 8);
    let out = computer_strategy(&mut rng, Some(StrategyState::new()), Some(&grid));
    assert_eq!(out.plan.len(), 63);
    assert!(out.next.is_empty());
    let tried = out.last_try.unwrap();
    assert!(!out.plan.contains(&tried));
}

#[test]
fn fires_the_planned_cell() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = generate_grid(8, 8);
    let state = StrategyState::with_plan([c(0, 0), c(1, 1)]);
    let out = computer_strategy(&mut rng, Some(state), Some(&grid));
    assert_eq!(
        out,
        StrategyState {
            next: VecDeque::new(),
            plan: queue(&[(1, 1)]),
            last_try: Some(c(0, 0)),
        }
    );
}

#[test]
fn changes_tack_after_a_hit() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = grid_with_ship_row();
    let state = StrategyState::with_plan([c(0, 0), c(1, 1), c(2, 2)]);
    let out = computer_strategy(&mut rng, Some(state), Some(&grid));
    assert_eq!(
        out,
        StrategyState {
            next: queue(&[(1, 0), (0, 1)]),
            plan: queue(&[(1, 1), (2, 2)]),
            last_try: Some(c(0, 0)),
        }
    );
}

#[test]
fn next_takes_priority_and_stacks_at_front() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = grid_with_ship_row();
    let state = StrategyState {
        next: queue(&[(1, 0), (0, 1)]),
        plan: queue(&[(1, 1), (2, 2)]),
        last_try: Some(c(0, 0)),
    };
    let out = computer_strategy(&mut rng, Some(state), Some(&grid));
    assert_eq!(out.last_try, Some(c(1, 0)));
    // neighbours of (1, 0) ahead of the older entry, duplicates kept
    assert_eq!(out.next, queue(&[(2, 0), (0, 0), (1, 1), (0, 1)]));
    assert_eq!(out.plan, queue(&[(1, 1), (2, 2)]));
}

#[test]
fn miss_leaves_next_alone() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = grid_with_ship_row();
    let state = StrategyState {
        next: queue(&[(0, 1), (5, 5)]),
        plan: queue(&[(7, 7)]),
        last_try: Some(c(0, 0)),
    };
    let out = computer_strategy(&mut rng, Some(state), Some(&grid));
    assert_eq!(out.last_try, Some(c(0, 1)));
    assert_eq!(out.next, queue(&[(5, 5)]));
    assert_eq!(out.plan, queue(&[(7, 7)]));
}

#[test]
fn discovered_segments_are_not_expanded_again() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut grid = grid_with_ship_row();
    grid.cell_mut(c(0, 0)).unwrap().is_discovered = true;
    let state = StrategyState::with_plan([c(0, 0), c(4, 4)]);
    let out = computer_strategy(&mut rng, Some(state), Some(&grid));
    assert_eq!(out.last_try, Some(c(0, 0)));
    assert!(out.next.is_empty());
}

#[test]
fn empty_grid_yields_no_target() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = Grid::from_rows(Vec::new());
    let out = computer_strategy(&mut rng, None, Some(&grid));
    assert_eq!(out.last_try, None);
    assert!(out.is_idle());
}

#[test]
fn get_strategy_without_grid_is_empty() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(get_strategy(&mut rng, None).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sweep_covers_every_cell_once(seed in any::<u64>(), w in 1usize..16, h in 1usize..16) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = generate_grid(w, h);
        let sweep = get_strategy(&mut rng, Some(&grid));
        prop_assert_eq!(sweep.len(), w * h);

        let unique: BTreeSet<_> = sweep.iter().copied().collect();
        let expected: BTreeSet<_> = grid.coordinates().collect();
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn plan_only_shrinks_while_next_is_empty(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = generate_grid(10, 10);
        let mut state = computer_strategy(&mut rng, None, Some(&grid));
        for _ in 0..20 {
            let before = state.plan.len();
            state = computer_strategy(&mut rng, Some(state), Some(&grid));
            prop_assert_eq!(state.plan.len(), before - 1);
            prop_assert!(state.next.is_empty());
        }
    }
}
