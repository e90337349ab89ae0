use alloc::vec::Vec;

use crate::*;

/// Reveals one cell, flood-filling through zero-count cells.
///
/// Flagged and already revealed cells are left alone. The fill uses an explicit stack and
/// reveals each cell at most once; it never steps onto flagged cells or mines.
pub fn reveal_cell(grid: &mut Grid, coords: Coord2) -> Result<RevealOutcome> {
    let coords = grid.validate_coords(coords)?;
    let cell = grid[coords];

    if cell.is_flagged || cell.is_revealed {
        return Ok(RevealOutcome::NoChange);
    }

    grid.cell_mut(coords).is_revealed = true;
    if cell.is_mine {
        return Ok(RevealOutcome::Loss);
    }

    if cell.adjacent_mines == 0 {
        let mut to_visit: Vec<Coord2> = Vec::from([coords]);

        while let Some(visit_coords) = to_visit.pop() {
            for pos in grid.neighbors(visit_coords) {
                let neighbor = grid[pos];
                if neighbor.is_revealed || neighbor.is_flagged || neighbor.is_mine {
                    continue;
                }

                grid.cell_mut(pos).is_revealed = true;
                log::trace!("flood fill reveals {:?}", pos);
                if neighbor.adjacent_mines == 0 {
                    to_visit.push(pos);
                }
            }
        }
    }

    Ok(if has_won(grid) {
        RevealOutcome::Win
    } else {
        RevealOutcome::Continue
    })
}

/// Flips the flag on a hidden cell; revealed cells cannot be flagged.
pub fn toggle_flag(grid: &mut Grid, coords: Coord2) -> Result<MarkOutcome> {
    let coords = grid.validate_coords(coords)?;
    let cell = grid.cell_mut(coords);

    if cell.is_revealed {
        return Ok(MarkOutcome::NoChange);
    }

    cell.is_flagged = !cell.is_flagged;
    Ok(MarkOutcome::Changed)
}

/// Marks unflagged hidden mines and wrong flags for the end-of-game display.
///
/// Only sets [`Cell::disclosure`]; `is_revealed` is not touched, so the win check is unaffected.
pub fn reveal_all_mines(grid: &mut Grid) {
    for cell in grid.iter_mut() {
        cell.disclosure = match (cell.is_mine, cell.is_flagged, cell.is_revealed) {
            (true, false, false) => Some(Disclosure::Mine),
            (false, true, _) => Some(Disclosure::WrongFlag),
            _ => cell.disclosure,
        };
    }
}
