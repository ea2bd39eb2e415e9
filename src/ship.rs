//! Ship definitions: the static standard types, validated ships and the
//! unchecked specs callers hand to the fleet validator.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::grid::Coordinate;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship known at compile time: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A ship that passed fleet validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    pub name: String,
    pub length: usize,
}

impl Ship {
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Ship {
            name: name.into(),
            length,
        }
    }

    /// Cells covered when the ship starts at `origin` facing `orientation`.
    /// Coordinates are not bounds checked.
    pub fn cells(
        &self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> impl Iterator<Item = Coordinate> {
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(origin.x + i, origin.y),
            Orientation::Vertical => Coordinate::new(origin.x, origin.y + i),
        })
    }
}

impl From<ShipType> for Ship {
    fn from(def: ShipType) -> Self {
        Ship::new(def.name(), def.length())
    }
}

/// Unchecked ship description, as supplied by a caller. Either field may be
/// missing or nonsensical; [`crate::check_boats`] decides what to do with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    #[cfg_attr(feature = "std", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "std", serde(default))]
    pub length: Option<i64>,
}

impl ShipSpec {
    pub fn new(name: impl Into<String>, length: i64) -> Self {
        ShipSpec {
            name: Some(name.into()),
            length: Some(length),
        }
    }

    /// Spec carrying only a length.
    pub fn unnamed(length: i64) -> Self {
        ShipSpec {
            name: None,
            length: Some(length),
        }
    }
}

/// Parses `Name:length` or a bare `length`. An unparsable length leaves
/// `length` empty rather than failing, so the validator can fall back.
impl FromStr for ShipSpec {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, len) = match s.rsplit_once(':') {
            Some((name, len)) => (Some(name.trim().to_string()), len),
            None => (None, s),
        };
        Ok(ShipSpec {
            name: name.filter(|n| !n.is_empty()),
            length: len.trim().parse().ok(),
        })
    }
}

/// Parse a comma separated fleet such as `Carrier:5,Destroyer:2`.
pub fn parse_fleet(s: &str) -> Vec<ShipSpec> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .filter_map(|part| part.parse().ok())
        .collect()
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.length)
    }
}
