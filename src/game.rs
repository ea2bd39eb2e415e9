//! Two-player game construction and shot resolution.

use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::common::{GameError, PlayerId, ShotError, ShotOutcome};
use crate::config::{ShotBounds, MIN_GAME_SIZE};
use crate::fleet::check_boats;
use crate::grid::{generate_grid, Coordinate, Grid};
use crate::placement::place_fleet;
use crate::ship::{Ship, ShipSpec};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

/// Both players' grids plus the fleet each of them received.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Game {
    pub player_a: Grid,
    pub player_b: Grid,
    pub boats: Vec<Ship>,
}

/// Build a game. Missing grids are generated at 10×10; if either supplied
/// grid is smaller than 10×10 both are regenerated. The fleet is validated
/// and placed independently on each grid.
pub fn create_game<R: Rng + ?Sized>(
    rng: &mut R,
    player_a: Option<Grid>,
    player_b: Option<Grid>,
    boats: Option<&[ShipSpec]>,
) -> Result<Game, GameError> {
    let undersized = |g: &Option<Grid>| {
        g.as_ref()
            .is_some_and(|grid| !grid.meets_minimum(MIN_GAME_SIZE))
    };
    let (player_a, player_b) = if undersized(&player_a) || undersized(&player_b) {
        info!("supplied grid below {0}x{0}, regenerating both", MIN_GAME_SIZE);
        (None, None)
    } else {
        (player_a, player_b)
    };
    let mut player_a = player_a.unwrap_or_else(|| generate_grid(MIN_GAME_SIZE, MIN_GAME_SIZE));
    let mut player_b = player_b.unwrap_or_else(|| generate_grid(MIN_GAME_SIZE, MIN_GAME_SIZE));

    let boats = check_boats(boats).into_ships();
    place_fleet(rng, &mut player_a, &boats)?;
    place_fleet(rng, &mut player_b, &boats)?;
    debug!("game created with {} ships per side", boats.len());

    Ok(Game {
        player_a,
        player_b,
        boats,
    })
}

impl Game {
    /// Grid owned by `player`.
    pub fn grid(&self, player: PlayerId) -> &Grid {
        match player {
            PlayerId::A => &self.player_a,
            PlayerId::B => &self.player_b,
        }
    }

    pub fn grid_mut(&mut self, player: PlayerId) -> &mut Grid {
        match player {
            PlayerId::A => &mut self.player_a,
            PlayerId::B => &mut self.player_b,
        }
    }

    /// `shooter` fires at the opponent's grid.
    pub fn fire_at(&mut self, shooter: PlayerId, at: Coordinate) -> Result<ShotOutcome, ShotError> {
        let target = self.grid_mut(shooter.opponent());
        fire(Some(shooter), target, at.x as i64, at.y as i64)
    }

    /// A player wins once every ship segment on the other grid is discovered.
    pub fn status(&self) -> GameStatus {
        if self.player_b.all_sunk() {
            GameStatus::Won(PlayerId::A)
        } else if self.player_a.all_sunk() {
            GameStatus::Won(PlayerId::B)
        } else {
            GameStatus::InProgress
        }
    }
}

/// Fire at `(x, y)` on `grid`, marking the cell discovered. The range check
/// uses the grid's own size; see [`fire_with_bounds`] for the fixed bound.
pub fn fire(
    player: Option<PlayerId>,
    grid: &mut Grid,
    x: i64,
    y: i64,
) -> Result<ShotOutcome, ShotError> {
    fire_with_bounds(ShotBounds::Grid, player, grid, x, y)
}

/// [`fire`] with an explicit range policy.
pub fn fire_with_bounds(
    bounds: ShotBounds,
    player: Option<PlayerId>,
    grid: &mut Grid,
    x: i64,
    y: i64,
) -> Result<ShotOutcome, ShotError> {
    let shooter = player.ok_or(ShotError::NoPlayer)?;
    if grid.is_empty() {
        return Err(ShotError::EmptyGrid);
    }
    let out_of_bounds = ShotError::OutOfBounds { x, y };
    let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
        return Err(out_of_bounds);
    };
    if let ShotBounds::Fixed(limit) = bounds {
        if col > limit || row > limit {
            return Err(out_of_bounds);
        }
    }
    let at = Coordinate::new(col, row);
    let cell = grid.cell_mut(at).ok_or(out_of_bounds)?;

    let outcome = if cell.is_discovered {
        ShotOutcome::Repeated
    } else if cell.is_ship {
        ShotOutcome::Hit
    } else {
        ShotOutcome::Miss
    };
    cell.is_discovered = true;
    debug!("player {} fired at {}: {:?}", shooter, at, outcome);
    Ok(outcome)
}
