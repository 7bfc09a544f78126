use std::ops::RangeInclusive;

use grid_2d::{Coord, Grid, Size};

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Blocked,
}

/// Occupancy query consulted on every expansion. `None` means the
/// coordinate lies outside the grid.
pub trait SolidGrid {
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_valid(&self, coord: Coord) -> bool {
        self.is_solid(coord) == Some(false)
    }
}

/// A fixed-size grid of free and blocked cells, immutable for the
/// duration of any search.
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone)]
pub struct ObstacleGrid {
    grid: Grid<Cell>,
}

impl ObstacleGrid {
    pub fn new(size: Size) -> Self {
        Self {
            grid: Grid::new_clone(size, Cell::Free),
        }
    }

    /// Grid with a contiguous run of blocked rows in a single column.
    pub fn with_column_wall(size: Size, column: i32, rows: RangeInclusive<i32>) -> Self {
        let mut grid = Self::new(size);
        for row in rows {
            grid.block(Coord::new(column, row));
        }
        grid
    }

    pub fn block(&mut self, coord: Coord) {
        if let Some(cell) = self.grid.get_mut(coord) {
            *cell = Cell::Blocked;
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.grid.get(coord).cloned()
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }
}

impl SolidGrid for ObstacleGrid {
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.grid.get(coord).map(|&cell| cell == Cell::Blocked)
    }
}

impl SolidGrid for Grid<bool> {
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.get(coord).cloned()
    }
}
