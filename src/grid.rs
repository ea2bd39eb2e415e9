//! Grid of cells for one player's ocean.
//!
//! A grid is stored as rows of cells, indexed `[y][x]` where `x` is the
//! column and `y` the row. Both indices are zero-based.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// A board position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Coordinate { x, y }
    }

    /// Orthogonal neighbours that stay inside a `width`×`height` grid,
    /// in the order right, left, down, up.
    pub fn neighbors(self, width: usize, height: usize) -> Vec<Coordinate> {
        let mut out = Vec::with_capacity(4);
        if self.x + 1 < width {
            out.push(Coordinate::new(self.x + 1, self.y));
        }
        if self.x > 0 {
            out.push(Coordinate::new(self.x - 1, self.y));
        }
        if self.y + 1 < height {
            out.push(Coordinate::new(self.x, self.y + 1));
        }
        if self.y > 0 {
            out.push(Coordinate::new(self.x, self.y - 1));
        }
        out
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Coordinate { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single board position tracking ship occupancy and shot status.
///
/// `length` and `name` are only set on cells covered by a ship.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Cell {
    pub is_ship: bool,
    pub is_discovered: bool,
    pub length: Option<usize>,
    pub name: Option<String>,
}

impl Cell {
    /// Undiscovered open water.
    pub fn water() -> Self {
        Cell::default()
    }

    /// Discovered ship segment.
    pub fn is_hit(&self) -> bool {
        self.is_ship && self.is_discovered
    }
}

/// Rows of cells. Grids built by [`generate_grid`] are rectangular; grids
/// supplied by callers through [`Grid::from_rows`] may not be.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

/// Build a `width`×`height` grid of fresh water cells. A zero dimension is
/// replaced by the default of 10.
pub fn generate_grid(width: usize, height: usize) -> Grid {
    let width = if width == 0 { DEFAULT_WIDTH } else { width };
    let height = if height == 0 { DEFAULT_HEIGHT } else { height };
    let rows = (0..height)
        .map(|_| (0..width).map(|_| Cell::water()).collect())
        .collect();
    Grid { rows }
}

impl Grid {
    /// Same as [`generate_grid`].
    pub fn new(width: usize, height: usize) -> Self {
        generate_grid(width, height)
    }

    /// Wrap caller-supplied rows without validation.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Grid { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Width of the first row, or zero for an empty grid.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `true` when the grid has at least `min` rows and every row has at
    /// least `min` cells.
    pub fn meets_minimum(&self, min: usize) -> bool {
        self.rows.len() >= min && self.rows.iter().all(|row| row.len() >= min)
    }

    pub fn cell(&self, at: Coordinate) -> Option<&Cell> {
        self.rows.get(at.y).and_then(|row| row.get(at.x))
    }

    pub fn cell_mut(&mut self, at: Coordinate) -> Option<&mut Cell> {
        self.rows.get_mut(at.y).and_then(|row| row.get_mut(at.x))
    }

    /// Every existing coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| (0..row.len()).map(move |x| Coordinate::new(x, y)))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().flatten()
    }

    /// Number of cells occupied by ships.
    pub fn ship_cells(&self) -> usize {
        self.cells().filter(|c| c.is_ship).count()
    }

    /// Number of cells that have been fired at.
    pub fn discovered_cells(&self) -> usize {
        self.cells().filter(|c| c.is_discovered).count()
    }

    /// Returns `true` when every ship segment has been discovered.
    pub fn all_sunk(&self) -> bool {
        self.cells().filter(|c| c.is_ship).all(|c| c.is_discovered)
    }

    /// Display adapter that hides undiscovered ships.
    pub fn fog(&self) -> Fog<'_> {
        Fog(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, reveal: bool) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.width() {
            write!(f, " {}", x % 10)?;
        }
        writeln!(f)?;
        for (y, row) in self.rows.iter().enumerate() {
            write!(f, "{:2} ", y)?;
            for cell in row {
                let ch = match (cell.is_ship, cell.is_discovered) {
                    (true, true) => 'X',
                    (false, true) => 'o',
                    (true, false) if reveal => 'S',
                    _ => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        generate_grid(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, true)
    }
}

/// Opponent's view of a grid.
pub struct Fog<'a>(&'a Grid);

impl fmt::Display for Fog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f, false)
    }
}
