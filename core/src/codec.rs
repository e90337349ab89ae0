//! Line-oriented board-state text used for save/resume.
//!
//! One line per cell in row-major order: `<is_mine> <is_flagged> <is_revealed> <adjacent_mines>`,
//! e.g. `false true false 2`. Display marks are not persisted.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::*;

pub fn serialize_board_state(grid: &Grid) -> String {
    let mut out = String::with_capacity(usize::from(grid.total_cells()) * 24);

    for (_, cell) in grid.iter() {
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} {} {} {}",
            cell.is_mine, cell.is_flagged, cell.is_revealed, cell.adjacent_mines
        );
    }

    out
}

fn malformed(line: usize, defect: BoardStateDefect) -> GameError {
    GameError::MalformedBoardState { line, defect }
}

fn parse_bool(token: &str, line: usize) -> Result<bool> {
    token
        .parse()
        .map_err(|_| malformed(line, BoardStateDefect::InvalidBool))
}

/// Parses one line; `line` is 1-based and only used for error reporting.
fn parse_cell(text: &str, line: usize) -> Result<Cell> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let &[is_mine, is_flagged, is_revealed, adjacent_mines] = tokens.as_slice() else {
        return Err(malformed(line, BoardStateDefect::TokenCount(tokens.len())));
    };

    let cell = Cell {
        is_mine: parse_bool(is_mine, line)?,
        is_flagged: parse_bool(is_flagged, line)?,
        is_revealed: parse_bool(is_revealed, line)?,
        adjacent_mines: adjacent_mines
            .parse::<u8>()
            .ok()
            .filter(|&count| count <= 8)
            .ok_or(malformed(line, BoardStateDefect::InvalidCount))?,
        disclosure: None,
    };

    if cell.is_flagged && cell.is_revealed {
        return Err(malformed(line, BoardStateDefect::FlaggedAndRevealed));
    }
    Ok(cell)
}

/// Applies exactly `rows * cols` lines to `grid`, ignoring anything after them.
///
/// Every line is parsed before the grid is touched, so on error it is left as it was.
/// Adjacency counts are taken as stored, not recomputed. A board whose mine total differs from
/// the grid's declared count is rejected with line 0.
pub fn deserialize_board_state<'a, I>(grid: &mut Grid, lines: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let total = usize::from(grid.total_cells());
    let mut lines = lines.into_iter();
    let mut parsed = Vec::with_capacity(total);

    for index in 0..total {
        let line = index + 1;
        let text = lines
            .next()
            .ok_or(malformed(line, BoardStateDefect::MissingLine))?;
        parsed.push(parse_cell(text, line)?);
    }

    let found = parsed.iter().filter(|cell| cell.is_mine).count() as CellCount;
    if found != grid.mine_count() {
        return Err(malformed(
            0,
            BoardStateDefect::MineCountMismatch {
                expected: grid.mine_count(),
                found,
            },
        ));
    }

    for (cell, loaded) in grid.iter_mut().zip(parsed) {
        *cell = loaded;
    }
    Ok(())
}

/// Builds a grid for the given shape from saved text.
pub fn parse_board_state(rows: Coord, cols: Coord, mines: CellCount, text: &str) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols, mines)?;
    deserialize_board_state(&mut grid, text.lines())?;
    Ok(grid)
}
