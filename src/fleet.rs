//! Fleet validation with all-or-nothing fallback to the standard fleet.

use alloc::vec::Vec;
use core::fmt;
use log::warn;

use crate::config::{MAX_FLEET_SIZE, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH, STANDARD_FLEET};
use crate::ship::{Ship, ShipSpec};

/// Why a candidate fleet was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetIssue {
    /// No candidate, or an empty one.
    Missing,
    /// More ships than the rules allow.
    TooMany(usize),
    /// Ship at `index` has no positive length.
    MissingLength { index: usize },
    TooShort { index: usize, length: i64 },
    TooLong { index: usize, length: i64 },
}

impl fmt::Display for FleetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetIssue::Missing => write!(f, "no fleet given"),
            FleetIssue::TooMany(n) => {
                write!(f, "{} ships exceeds the limit of {}", n, MAX_FLEET_SIZE)
            }
            FleetIssue::MissingLength { index } => write!(f, "ship {} has no length", index),
            FleetIssue::TooShort { index, length } => {
                write!(f, "ship {} is too short ({})", index, length)
            }
            FleetIssue::TooLong { index, length } => {
                write!(f, "ship {} is too long ({})", index, length)
            }
        }
    }
}

/// Outcome of [`check_boats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetCheck {
    /// Candidate accepted as requested.
    Valid(Vec<Ship>),
    /// Candidate rejected; the standard fleet was used instead.
    Substituted { ships: Vec<Ship>, reason: FleetIssue },
}

impl FleetCheck {
    pub fn ships(&self) -> &[Ship] {
        match self {
            FleetCheck::Valid(ships) | FleetCheck::Substituted { ships, .. } => ships,
        }
    }

    pub fn into_ships(self) -> Vec<Ship> {
        match self {
            FleetCheck::Valid(ships) | FleetCheck::Substituted { ships, .. } => ships,
        }
    }

    pub fn is_substituted(&self) -> bool {
        matches!(self, FleetCheck::Substituted { .. })
    }
}

/// Carrier, Battleship, Cruiser, Submarine and Destroyer.
pub fn standard_fleet() -> Vec<Ship> {
    STANDARD_FLEET.iter().copied().map(Ship::from).collect()
}

fn find_issue(candidate: &[ShipSpec]) -> Option<FleetIssue> {
    if candidate.is_empty() {
        return Some(FleetIssue::Missing);
    }
    if candidate.len() > MAX_FLEET_SIZE {
        return Some(FleetIssue::TooMany(candidate.len()));
    }
    candidate
        .iter()
        .enumerate()
        .find_map(|(index, spec)| match spec.length {
            None => Some(FleetIssue::MissingLength { index }),
            Some(length) if length <= 0 => Some(FleetIssue::MissingLength { index }),
            Some(length) if length < MIN_SHIP_LENGTH as i64 => {
                Some(FleetIssue::TooShort { index, length })
            }
            Some(length) if length > MAX_SHIP_LENGTH as i64 => {
                Some(FleetIssue::TooLong { index, length })
            }
            Some(_) => None,
        })
}

/// Validate a candidate fleet. Any single violation rejects the whole list
/// and the standard fleet is returned in full.
pub fn check_boats(candidate: Option<&[ShipSpec]>) -> FleetCheck {
    let candidate = candidate.unwrap_or(&[]);
    if let Some(reason) = find_issue(candidate) {
        warn!("fleet rejected ({}), using standard fleet", reason);
        return FleetCheck::Substituted {
            ships: standard_fleet(),
            reason,
        };
    }
    let ships = candidate
        .iter()
        .map(|spec| Ship {
            name: spec.name.clone().unwrap_or_default(),
            // range checked by find_issue
            length: spec.length.unwrap_or_default() as usize,
        })
        .collect();
    FleetCheck::Valid(ships)
}
