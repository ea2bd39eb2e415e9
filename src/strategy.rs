// Hunt/target search for the computer opponent.
// State is an explicit value threaded through each call so that it can be
// inspected, serialized and replayed.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Coordinate, Grid};

/// Search state owned by one computer player for the length of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct StrategyState {
    /// Neighbours of confirmed hits, tried before resuming `plan`.
    pub next: VecDeque<Coordinate>,
    /// Remaining sweep order.
    pub plan: VecDeque<Coordinate>,
    /// Coordinate chosen on the most recent turn.
    pub last_try: Option<Coordinate>,
}

impl StrategyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose sweep follows `plan` in order.
    pub fn with_plan(plan: impl IntoIterator<Item = Coordinate>) -> Self {
        StrategyState {
            next: VecDeque::new(),
            plan: plan.into_iter().collect(),
            last_try: None,
        }
    }

    /// `true` when both queues are exhausted.
    pub fn is_idle(&self) -> bool {
        self.next.is_empty() && self.plan.is_empty()
    }

    #[cfg(feature = "std")]
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    #[cfg(feature = "std")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Every coordinate of `grid` exactly once, in random order. A missing grid
/// yields an empty sweep.
pub fn get_strategy<R: Rng + ?Sized>(rng: &mut R, grid: Option<&Grid>) -> Vec<Coordinate> {
    let Some(grid) = grid else {
        return Vec::new();
    };
    let mut sweep: Vec<Coordinate> = grid.coordinates().collect();
    sweep.shuffle(rng);
    sweep
}

/// Advance the computer's search by one turn and return the new state; the
/// coordinate to fire at is `last_try`.
///
/// Without a grid the state is returned untouched. When both queues are
/// empty a fresh sweep is drawn from the grid. When the chosen cell is an
/// undiscovered ship segment its in-bounds neighbours go to the front of
/// `next`, which always takes priority over `plan`. Duplicates are kept.
///
/// Segments that are already discovered are not expanded again: two adjacent
/// ship cells would otherwise keep re-queueing each other and the search
/// would never reach the rest of the grid.
pub fn computer_strategy<R: Rng + ?Sized>(
    rng: &mut R,
    state: Option<StrategyState>,
    grid: Option<&Grid>,
) -> StrategyState {
    let mut state = state.unwrap_or_default();
    let Some(grid) = grid else {
        return state;
    };

    if state.is_idle() {
        state.plan = get_strategy(rng, Some(grid)).into();
        trace!("new sweep of {} cells", state.plan.len());
    }

    let target = state.next.pop_front().or_else(|| state.plan.pop_front());
    state.last_try = target;
    let Some(target) = target else {
        return state;
    };

    // already-discovered segments were expanded when first hit
    let fresh_hit = grid
        .cell(target)
        .is_some_and(|cell| cell.is_ship && !cell.is_discovered);
    if fresh_hit {
        let neighbors = target.neighbors(grid.width(), grid.height());
        for n in neighbors.into_iter().rev() {
            state.next.push_front(n);
        }
    }
    trace!(
        "target {} hit={} next={} plan={}",
        target,
        fresh_hit,
        state.next.len(),
        state.plan.len()
    );
    state
}
