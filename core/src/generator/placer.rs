use rand::Rng;

use super::*;

/// Cells that may receive a new mine.
fn free_cells(grid: &Grid, avoid: impl Fn(Coord2) -> bool) -> CellCount {
    grid.iter()
        .filter(|&(coords, cell)| !cell.is_mine && !avoid(coords))
        .count() as CellCount
}

/// Places `count` mines, each uniformly at random among the free cells, without retry loops.
///
/// Checks for room before touching the grid, so an `InsufficientSpace` error leaves it
/// unchanged.
fn place_avoiding<R>(
    grid: &mut Grid,
    count: CellCount,
    rng: &mut R,
    avoid: impl Fn(Coord2) -> bool,
) -> Result<Option<Coord2>>
where
    R: Rng + ?Sized,
{
    let mut available = free_cells(grid, &avoid);
    if count > available {
        return Err(GameError::InsufficientSpace {
            requested: count,
            available,
        });
    }

    let mut last_placed = None;
    for _ in 0..count {
        let mut place = rng.random_range(0..available);
        let chosen = grid
            .coords()
            .filter(|&coords| !grid[coords].is_mine && !avoid(coords))
            .find(|_| {
                if place == 0 {
                    true
                } else {
                    place -= 1;
                    false
                }
            });

        // the pick is always below the number of candidates
        let Some(coords) = chosen else {
            break;
        };
        grid.cell_mut(coords).is_mine = true;
        available -= 1;
        last_placed = Some(coords);
        log::trace!("mine placed at {:?}", coords);
    }

    Ok(last_placed)
}

/// Places `count` new mines outside `zone`.
///
/// Does not touch adjacency counts, see [`recalculate_adjacency`].
pub fn place_mines<R>(grid: &mut Grid, count: CellCount, zone: SafeZone, rng: &mut R) -> Result<()>
where
    R: Rng + ?Sized,
{
    place_avoiding(grid, count, rng, |coords| zone.contains(coords)).map(|_| ())
}

/// Fills an empty grid with its declared number of mines and computes adjacency.
pub fn populate<R>(grid: &mut Grid, rng: &mut R) -> Result<()>
where
    R: Rng + ?Sized,
{
    let missing = grid.mine_count().saturating_sub(grid.placed_mines());
    place_mines(grid, missing, SafeZone::Nowhere, rng)?;
    recalculate_adjacency(grid);
    Ok(())
}

/// Moves the mine at `coords` to a random free cell outside `zone`, never back onto `coords`.
///
/// Returns the new location, or `None` when `coords` holds no mine. The mine count is preserved
/// even on error since the destination is checked before the mine is lifted. Adjacency counts
/// are stale afterwards.
pub fn relocate_mine<R>(
    grid: &mut Grid,
    coords: Coord2,
    zone: SafeZone,
    rng: &mut R,
) -> Result<Option<Coord2>>
where
    R: Rng + ?Sized,
{
    let coords = grid.validate_coords(coords)?;
    if !grid[coords].is_mine {
        return Ok(None);
    }

    let avoid = |pos: Coord2| pos == coords || zone.contains(pos);
    let available = free_cells(grid, avoid);
    if available == 0 {
        return Err(GameError::InsufficientSpace {
            requested: 1,
            available,
        });
    }

    grid.cell_mut(coords).is_mine = false;
    let target = place_avoiding(grid, 1, rng, avoid)?;
    log::trace!("mine relocated from {:?} to {:?}", coords, target);
    Ok(target)
}
