use rand::Rng;

use super::*;

/// Whether `coords` is a safe hidden cell whose hidden neighbors are exactly two, exactly one of
/// them a mine.
///
/// Only looks at mine and reveal flags, adjacency counts play no part.
pub fn is_fifty_fifty(grid: &Grid, coords: Coord2) -> bool {
    let cell = grid[coords];
    if cell.is_mine || cell.is_revealed {
        return false;
    }

    let mut hidden = 0;
    let mut hidden_mines = 0;
    for pos in grid.neighbors(coords) {
        let neighbor = grid[pos];
        if neighbor.is_unrevealed() {
            hidden += 1;
            if neighbor.is_mine {
                hidden_mines += 1;
            }
        }
    }

    hidden == 2 && hidden_mines == 1
}

/// Single row-major pass that breaks local coin-flip configurations.
///
/// For each ambiguous cell the first mine of its 3×3 window is relocated outside `zone`. This is
/// a local heuristic: it runs once, can miss ambiguities that span several cells and can create
/// new ones elsewhere. Adjacency is recalculated once after the whole pass. Returns the number
/// of relocated mines.
pub fn resolve_fifty_fifty<R>(grid: &mut Grid, zone: SafeZone, rng: &mut R) -> Result<usize>
where
    R: Rng + ?Sized,
{
    let mut relocated = 0;

    for coords in grid.coords() {
        if !is_fifty_fifty(grid, coords) {
            continue;
        }

        let Some(mine) = grid.window(coords).find(|&pos| grid[pos].is_mine) else {
            continue;
        };

        match relocate_mine(grid, mine, zone, rng) {
            Ok(target) => {
                log::trace!("50/50 at {:?}: moved {:?} to {:?}", coords, mine, target);
                relocated += 1;
            }
            Err(GameError::InsufficientSpace { .. }) => {
                log::warn!("50/50 at {:?} left in place, no free cell for {:?}", coords, mine);
            }
            Err(err) => return Err(err),
        }
    }

    recalculate_adjacency(grid);
    Ok(relocated)
}
