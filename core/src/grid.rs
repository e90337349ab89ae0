use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Checks `0 < mines < rows * cols` with non-empty axes.
pub(crate) fn validate_dimensions(rows: Coord, cols: Coord, mines: CellCount) -> Result<()> {
    if rows == 0 || cols == 0 || mines == 0 || mines >= mult(rows, cols) {
        Err(GameError::InvalidDimensions { rows, cols, mines })
    } else {
        Ok(())
    }
}

/// Rectangular cell storage with bounds-checked lookup.
///
/// `mine_count` is the declared number of mines. Every mutation path in this crate keeps the
/// number of cells with `is_mine` equal to it once mines have been placed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Empty grid: no mines placed yet.
    pub fn new(rows: Coord, cols: Coord, mine_count: CellCount) -> Result<Self> {
        validate_dimensions(rows, cols, mine_count)?;
        Ok(Self {
            cells: Array2::default((rows, cols).to_nd_index()),
            mine_count,
        })
    }

    /// Grid with mines at exactly `mine_coords` and adjacency already computed.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        let mut mine_count: CellCount = 0;

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds(coords));
            }
            let cell = &mut cells[coords.to_nd_index()];
            if !cell.is_mine {
                cell.is_mine = true;
                mine_count += 1;
            }
        }
        validate_dimensions(size.0, size.1, mine_count)?;

        let mut grid = Self { cells, mine_count };
        recalculate_adjacency(&mut grid);
        Ok(grid)
    }

    pub fn rows(&self) -> Coord {
        self.cells.dim().0 as Coord
    }

    pub fn cols(&self) -> Coord {
        self.cells.dim().1 as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.rows(), self.cols())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.cols())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.rows() && coords.1 < self.cols() {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Up to 8 in-bounds neighbors, never the cell itself.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub(crate) fn window(&self, center: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        iter_window(center, self.size())
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub(crate) fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Number of cells currently holding a mine.
    pub fn placed_mines(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine).count() as CellCount
    }

    pub fn revealed_safe_cells(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_revealed && !cell.is_mine)
            .count() as CellCount
    }

    pub fn flag_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged).count() as CellCount
    }

    pub fn mine_neighbor_count(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
