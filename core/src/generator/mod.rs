use serde::{Deserialize, Serialize};

use crate::*;
pub use first_click::*;
pub use placer::*;
pub use resolver::*;

mod first_click;
mod placer;
mod resolver;

/// How the first reveal of a game treats the clicked cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartTile {
    /// No relocation, the first click may hit a mine.
    Random,
    /// Only the clicked cell is guaranteed to be free.
    SimpleSafe,
    /// The clicked cell and its 3×3 window are guaranteed to be free.
    #[default]
    AlwaysZero,
}

/// Cells that placement and relocation must keep free of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SafeZone {
    #[default]
    Nowhere,
    Cell(Coord2),
    Window(Coord2),
}

impl SafeZone {
    pub fn for_start(start_tile: StartTile, coords: Coord2) -> Self {
        match start_tile {
            StartTile::Random => Self::Nowhere,
            StartTile::SimpleSafe => Self::Cell(coords),
            StartTile::AlwaysZero => Self::Window(coords),
        }
    }

    pub fn contains(self, coords: Coord2) -> bool {
        match self {
            Self::Nowhere => false,
            Self::Cell(center) => center == coords,
            Self::Window(center) => is_within_window(center, coords),
        }
    }
}
