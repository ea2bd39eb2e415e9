use crate::ship::ShipType;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;
/// Smallest grid `create_game` accepts before regenerating both boards.
pub const MIN_GAME_SIZE: usize = 10;

pub const MIN_SHIP_LENGTH: usize = 2;
pub const MAX_SHIP_LENGTH: usize = 6;
pub const MAX_FLEET_SIZE: usize = 9;

/// Inclusive upper bound used by the fixed shot range check.
pub const SHOT_BOUND: usize = 10;

/// Random samples tried per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

pub const NUM_SHIPS: usize = 5;
pub const STANDARD_FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&STANDARD_FLEET);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Range check applied to shot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotBounds {
    /// Coordinates must name a cell of the grid being fired at.
    #[default]
    Grid,
    /// Coordinates must lie in `[0, n]` inclusive and name an existing cell.
    Fixed(usize),
}

impl ShotBounds {
    /// The literal bound used by older front-ends.
    pub const fn legacy() -> Self {
        ShotBounds::Fixed(SHOT_BOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_cells_match_standard_fleet() {
        let sum: usize = STANDARD_FLEET.iter().map(ShipType::length).sum();
        assert_eq!(TOTAL_SHIP_CELLS, sum);
        assert_eq!(TOTAL_SHIP_CELLS, 17);
    }
}
