use crate::*;

/// Stores the number of neighboring mines in every non-mine cell.
///
/// Mine cells keep whatever count they had. Idempotent.
pub fn recalculate_adjacency(grid: &mut Grid) {
    for coords in grid.coords() {
        if !grid[coords].is_mine {
            let count = grid.mine_neighbor_count(coords);
            grid.cell_mut(coords).adjacent_mines = count;
        }
    }
}

/// Whether every non-mine cell holds the count its neighborhood implies.
pub fn adjacency_is_consistent(grid: &Grid) -> bool {
    grid.iter()
        .filter(|(_, cell)| !cell.is_mine)
        .all(|(coords, cell)| cell.adjacent_mines == grid.mine_neighbor_count(coords))
}
