//! Ship placement: manual, random single-ship, and whole-fleet.

use log::{debug, trace};
use rand::Rng;

use crate::common::GameError;
use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::{Coordinate, Grid};
use crate::ship::{Orientation, Ship};

/// Where a ship ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub origin: Coordinate,
    pub orientation: Orientation,
}

/// Random coordinate with `x` in `[0, max_x)` and `y` in `[0, max_y)`.
/// A zero maximum is replaced by the default grid size.
pub fn generate_random_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
    max_x: usize,
    max_y: usize,
) -> Coordinate {
    let max_x = if max_x == 0 { DEFAULT_WIDTH } else { max_x };
    let max_y = if max_y == 0 { DEFAULT_HEIGHT } else { max_y };
    Coordinate::new(rng.random_range(0..max_x), rng.random_range(0..max_y))
}

/// Check that `ship` fits at `origin` without leaving the grid or touching
/// another ship.
pub fn can_place(
    grid: &Grid,
    ship: &Ship,
    origin: Coordinate,
    orientation: Orientation,
) -> Result<(), GameError> {
    if ship.length == 0 {
        return Err(GameError::InvalidLength(ship.length));
    }
    for at in ship.cells(origin, orientation) {
        match grid.cell(at) {
            None => return Err(GameError::ShipOutOfBounds { origin }),
            Some(cell) if cell.is_ship => return Err(GameError::ShipOverlaps { at }),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Place `ship` at `origin`, marking each covered cell with the ship's
/// length and name.
pub fn place(
    grid: &mut Grid,
    ship: &Ship,
    origin: Coordinate,
    orientation: Orientation,
) -> Result<(), GameError> {
    can_place(grid, ship, origin, orientation)?;
    for at in ship.cells(origin, orientation) {
        // existence checked by can_place
        if let Some(cell) = grid.cell_mut(at) {
            cell.is_ship = true;
            cell.length = Some(ship.length);
            cell.name = Some(ship.name.clone());
        }
    }
    debug!("placed {} at {} {:?}", ship.name, origin, orientation);
    Ok(())
}

/// Place `ship` at a random non-overlapping position, trying at most
/// [`MAX_PLACEMENT_ATTEMPTS`] samples.
pub fn try_to_place<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    ship: &Ship,
) -> Result<Placement, GameError> {
    if ship.length == 0 {
        return Err(GameError::InvalidLength(ship.length));
    }
    let width = grid.width();
    let height = grid.height();
    let fits_horizontal = ship.length <= width && height > 0;
    let fits_vertical = ship.length <= height && width > 0;
    if !fits_horizontal && !fits_vertical {
        return Err(GameError::UnableToPlaceShip {
            length: ship.length,
            attempts: 0,
        });
    }

    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let orientation = match (fits_horizontal, fits_vertical) {
            (true, true) if rng.random() => Orientation::Horizontal,
            (true, true) => Orientation::Vertical,
            (true, false) => Orientation::Horizontal,
            _ => Orientation::Vertical,
        };
        // sample only origins that keep the ship on the grid
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (width - ship.length + 1, height),
            Orientation::Vertical => (width, height - ship.length + 1),
        };
        let origin = generate_random_coordinates(rng, max_x, max_y);
        if can_place(grid, ship, origin, orientation).is_ok() {
            place(grid, ship, origin, orientation)?;
            trace!("{} placed after {} attempts", ship.name, attempt);
            return Ok(Placement {
                origin,
                orientation,
            });
        }
    }
    Err(GameError::UnableToPlaceShip {
        length: ship.length,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Randomly place every ship of `fleet` onto `grid`.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    fleet: &[Ship],
) -> Result<(), GameError> {
    for ship in fleet {
        try_to_place(rng, grid, ship)?;
    }
    Ok(())
}
