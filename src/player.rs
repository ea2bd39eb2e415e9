use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::{GameError, ShotOutcome},
    grid::{Coordinate, Grid},
    placement::{try_to_place, Placement},
    ship::Ship,
    strategy::{computer_strategy, StrategyState},
};

/// Computer opponent driven by the hunt/target strategy.
#[derive(Debug, Clone, Default)]
pub struct ComputerPlayer {
    state: StrategyState,
    shots: usize,
    hits: usize,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a saved strategy state.
    pub fn from_state(state: StrategyState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &StrategyState {
        &self.state
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Randomly place `fleet` on the player's own grid.
    pub fn place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: &mut Grid,
        fleet: &[Ship],
    ) -> Result<Vec<Placement>, GameError> {
        fleet
            .iter()
            .map(|ship| try_to_place(rng, grid, ship))
            .collect()
    }

    /// Choose the next coordinate to fire at on `opponent`.
    pub fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &Grid,
    ) -> Option<Coordinate> {
        let state = core::mem::take(&mut self.state);
        self.state = computer_strategy(rng, Some(state), Some(opponent));
        self.state.last_try
    }

    /// Inform the player of the result of its last shot.
    pub fn handle_shot_result(&mut self, _at: Coordinate, outcome: ShotOutcome) {
        self.shots += 1;
        if outcome == ShotOutcome::Hit {
            self.hits += 1;
        }
    }
}
