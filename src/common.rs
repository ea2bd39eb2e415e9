//! Common types for the rules engine: players, shot outcomes and errors.

use crate::grid::Coordinate;

/// One of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    A,
    B,
}

impl PlayerId {
    /// The other seat.
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayerId::A => write!(f, "A"),
            PlayerId::B => write!(f, "B"),
        }
    }
}

/// Result of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot uncovered a ship segment.
    Hit,
    /// Shot uncovered open water.
    Miss,
    /// Cell was already discovered; nothing changed.
    Repeated,
}

/// Reasons a shot is rejected. A rejected shot does not consume a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotError {
    /// No shooter was given.
    NoPlayer,
    /// Target grid has no rows.
    EmptyGrid,
    /// Coordinate falls outside the accepted range.
    OutOfBounds { x: i64, y: i64 },
}

impl core::fmt::Display for ShotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotError::NoPlayer => write!(f, "Shot has no player"),
            ShotError::EmptyGrid => write!(f, "Target grid is empty"),
            ShotError::OutOfBounds { x, y } => {
                write!(f, "Shot coordinate out of bounds: x={}, y={}", x, y)
            }
        }
    }
}

/// Errors returned by placement and game construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Ship length is zero or does not fit the rules.
    InvalidLength(usize),
    /// Ship would extend past the grid edge.
    ShipOutOfBounds { origin: Coordinate },
    /// Ship placement overlaps another ship.
    ShipOverlaps { at: Coordinate },
    /// Random placement ran out of attempts.
    UnableToPlaceShip { length: usize, attempts: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidLength(len) => write!(f, "Invalid ship length: {}", len),
            GameError::ShipOutOfBounds { origin } => {
                write!(f, "Ship placement at {} is out of bounds", origin)
            }
            GameError::ShipOverlaps { at } => {
                write!(f, "Ship placement overlaps with another ship at {}", at)
            }
            GameError::UnableToPlaceShip { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
