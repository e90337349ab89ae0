#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use cell::*;
pub use codec::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use types::*;
pub use win::*;

mod adjacency;
mod cell;
mod codec;
mod error;
mod game;
mod generator;
mod grid;
mod reveal;
mod types;
mod win;

/// Board shape, mine count and first-click treatment, supplied by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    #[serde(default)]
    pub start: StartTile,
}

impl GameConfig {
    pub const EASY: Self = Self::new_unchecked((8, 8), 10);
    pub const NORMAL: Self = Self::new_unchecked((16, 16), 40);
    pub const HARD: Self = Self::new_unchecked((16, 30), 99);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self {
            size,
            mines,
            start: StartTile::AlwaysZero,
        }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn with_start(self, start: StartTile) -> Self {
        Self { start, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.size.0, self.size.1, self.mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Continue,
    Loss,
    Win,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_configs_are_valid() {
        for config in [GameConfig::EASY, GameConfig::NORMAL, GameConfig::HARD] {
            assert_eq!(config.validate(), Ok(()));
            assert_eq!(config.start, StartTile::AlwaysZero);
        }
        assert_eq!(GameConfig::HARD.total_cells(), 480);
    }

    #[test]
    fn new_validates() {
        assert!(GameConfig::new((9, 9), 10).is_ok());
        assert_eq!(
            GameConfig::new((2, 2), 4),
            Err(GameError::InvalidDimensions {
                rows: 2,
                cols: 2,
                mines: 4
            })
        );
    }

    #[test]
    fn only_no_change_has_no_update() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Continue.has_update());
        assert!(RevealOutcome::Loss.has_update());
        assert!(RevealOutcome::Win.has_update());
    }

    #[test]
    fn with_start_keeps_shape() {
        let config = GameConfig::EASY.with_start(StartTile::SimpleSafe);

        assert_eq!(config.size, (8, 8));
        assert_eq!(config.mines, 10);
        assert_eq!(config.start, StartTile::SimpleSafe);
    }
}
