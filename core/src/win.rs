use crate::*;

/// True iff every non-mine cell is revealed. Flags do not matter.
pub fn has_won(grid: &Grid) -> bool {
    grid.iter()
        .all(|(_, cell)| cell.is_mine || cell.is_revealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_when_all_safe_cells_revealed() {
        let mut grid = Grid::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        assert!(!has_won(&grid));

        for coords in [(0, 1), (1, 0)] {
            reveal_cell(&mut grid, coords).unwrap();
            assert!(!has_won(&grid));
        }
        assert_eq!(reveal_cell(&mut grid, (1, 1)), Ok(RevealOutcome::Win));
        assert!(has_won(&grid));
        assert_eq!(grid.revealed_safe_cells(), grid.safe_cell_count());
    }

    #[test]
    fn flags_do_not_count() {
        let mut grid = Grid::from_mine_coords((1, 2), &[(0, 0)]).unwrap();
        toggle_flag(&mut grid, (0, 1)).unwrap();

        assert!(!has_won(&grid));
    }
}
