use rand::Rng;

use super::*;

/// What the first-click treatment actually did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FirstClickReport {
    /// Treatment applied after falling back for crowded boards.
    pub start_tile: StartTile,
    /// Mines moved out of the safe zone.
    pub relocated: usize,
    /// Mines moved by the 50/50 pass.
    pub fifty_fifty: usize,
}

/// Downgrades `requested` until the board can hold all its mines outside the safe zone.
fn effective_start_tile(grid: &Grid, coords: Coord2, requested: StartTile) -> StartTile {
    let mines = grid.mine_count();
    let total = grid.total_cells();

    match requested {
        StartTile::Random => StartTile::Random,
        StartTile::SimpleSafe | StartTile::AlwaysZero if mines + 1 > total => {
            log::warn!("Cannot make start tile safe, fallback to random");
            StartTile::Random
        }
        StartTile::SimpleSafe => StartTile::SimpleSafe,
        StartTile::AlwaysZero if mines + grid.window(coords).count() as CellCount > total => {
            log::warn!("Cannot make start tile zero, fallback to simple safe");
            StartTile::SimpleSafe
        }
        StartTile::AlwaysZero => StartTile::AlwaysZero,
    }
}

/// Rearranges mines before the first reveal at `coords`.
///
/// The clicked cell is emptied first, then (for [`StartTile::AlwaysZero`]) every mine in its
/// 3×3 window in row-major order, recounting adjacency after each move. A single
/// [`resolve_fifty_fifty`] pass follows. Relocated mines never land in the safe zone, so the
/// guarantee survives the 50/50 pass.
pub fn prepare_first_click<R>(
    grid: &mut Grid,
    coords: Coord2,
    start_tile: StartTile,
    rng: &mut R,
) -> Result<FirstClickReport>
where
    R: Rng + ?Sized,
{
    let coords = grid.validate_coords(coords)?;
    let start_tile = effective_start_tile(grid, coords, start_tile);
    let zone = SafeZone::for_start(start_tile, coords);
    let mut relocated = 0;

    if start_tile == StartTile::Random {
        return Ok(FirstClickReport {
            start_tile,
            relocated,
            fifty_fifty: 0,
        });
    }

    if relocate_mine(grid, coords, zone, rng)?.is_some() {
        recalculate_adjacency(grid);
        relocated += 1;
    }

    if start_tile == StartTile::AlwaysZero {
        for pos in grid.window(coords) {
            if relocate_mine(grid, pos, zone, rng)?.is_some() {
                recalculate_adjacency(grid);
                relocated += 1;
            }
        }
    }

    let fifty_fifty = resolve_fifty_fifty(grid, zone, rng)?;
    log::debug!(
        "first click at {:?}: {:?}, {} mines cleared, {} 50/50 fixes",
        coords,
        start_tile,
        relocated,
        fifty_fifty
    );

    Ok(FirstClickReport {
        start_tile,
        relocated,
        fifty_fifty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn window_is_clear(grid: &Grid, center: Coord2) -> bool {
        grid.window(center).all(|pos| !grid[pos].is_mine)
    }

    #[test]
    fn clicked_mine_and_window_are_cleared() {
        let mines = [(3, 3), (2, 2), (4, 4), (2, 4), (0, 0), (7, 7), (5, 1), (1, 6), (6, 6), (3, 4)];
        for seed in 0..16 {
            let mut grid = Grid::from_mine_coords((8, 8), &mines).unwrap();
            let mut rng = SmallRng::seed_from_u64(seed);

            let report =
                prepare_first_click(&mut grid, (3, 3), StartTile::AlwaysZero, &mut rng).unwrap();

            assert_eq!(report.start_tile, StartTile::AlwaysZero);
            assert_eq!(report.relocated, 5);
            assert!(window_is_clear(&grid, (3, 3)));
            assert_eq!(grid.placed_mines(), 10);
            assert_eq!(grid[(3, 3)].adjacent_mines, 0);
            assert!(adjacency_is_consistent(&grid));
        }
    }

    #[test]
    fn simple_safe_only_clears_clicked_cell() {
        let mut grid = Grid::from_mine_coords((5, 5), &[(2, 2), (1, 1)]).unwrap();

        let report = prepare_first_click(
            &mut grid,
            (2, 2),
            StartTile::SimpleSafe,
            &mut SmallRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(report.relocated, 1);
        assert!(!grid[(2, 2)].is_mine);
        assert!(grid[(1, 1)].is_mine);
        assert_eq!(grid.placed_mines(), 2);
    }

    #[test]
    fn random_start_changes_nothing() {
        let mut grid = Grid::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        let before = grid.clone();

        let report = prepare_first_click(
            &mut grid,
            (1, 1),
            StartTile::Random,
            &mut SmallRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(report.relocated, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn crowded_board_falls_back_to_simple_safe() {
        // 9 cells, 8 mines: the window around the center is the whole board
        let mines = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)];
        let mut grid = Grid::from_mine_coords((3, 3), &mines).unwrap();

        let report = prepare_first_click(
            &mut grid,
            (1, 1),
            StartTile::AlwaysZero,
            &mut SmallRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(report.start_tile, StartTile::SimpleSafe);
        assert!(!grid[(1, 1)].is_mine);
        assert!(grid[(2, 2)].is_mine);
        assert_eq!(grid.placed_mines(), 8);
        assert_eq!(grid[(1, 1)].adjacent_mines, 8);
    }

    #[test]
    fn corner_click_uses_clipped_window() {
        // the 4 cells outside the 2x2 corner window can hold all 3 mines
        let mut grid = Grid::from_mine_coords((2, 4), &[(0, 0), (1, 1), (0, 3)]).unwrap();

        let report = prepare_first_click(
            &mut grid,
            (0, 0),
            StartTile::AlwaysZero,
            &mut SmallRng::seed_from_u64(5),
        )
        .unwrap();

        assert_eq!(report.start_tile, StartTile::AlwaysZero);
        assert!(window_is_clear(&grid, (0, 0)));
        assert_eq!(grid.placed_mines(), 3);
    }

    #[test]
    fn click_outside_board_is_rejected() {
        let mut grid = Grid::from_mine_coords((2, 2), &[(0, 0)]).unwrap();

        assert_eq!(
            prepare_first_click(
                &mut grid,
                (2, 2),
                StartTile::AlwaysZero,
                &mut SmallRng::seed_from_u64(1)
            ),
            Err(GameError::OutOfBounds((2, 2)))
        );
    }
}
