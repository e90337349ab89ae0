use serde::{Deserialize, Serialize};

/// Terminal display marks applied by [`reveal_all_mines`](crate::reveal_all_mines).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disclosure {
    /// Mine that was neither flagged nor revealed during play.
    Mine,
    /// Flag placed on a cell without a mine.
    WrongFlag,
}

/// One grid position. The coordinates live in the owning [`Grid`](crate::Grid).
///
/// `adjacent_mines` is only meaningful while `is_mine` is false.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_flagged: bool,
    pub is_revealed: bool,
    pub adjacent_mines: u8,
    #[serde(default)]
    pub disclosure: Option<Disclosure>,
}

/// Player-facing state, mutually exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed,
}

/// What a presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Exploded,
    // these are only produced after the game finishes:
    Mine,
    WrongFlag,
}

impl Cell {
    pub const fn state(&self) -> CellState {
        if self.is_revealed {
            CellState::Revealed
        } else if self.is_flagged {
            CellState::Flagged
        } else {
            CellState::Hidden
        }
    }

    pub const fn is_unrevealed(&self) -> bool {
        !self.is_revealed
    }

    pub const fn display(&self) -> CellView {
        match (self.state(), self.disclosure) {
            (_, Some(Disclosure::Mine)) => CellView::Mine,
            (_, Some(Disclosure::WrongFlag)) => CellView::WrongFlag,
            (CellState::Revealed, None) if self.is_mine => CellView::Exploded,
            (CellState::Revealed, None) => CellView::Revealed(self.adjacent_mines),
            (CellState::Flagged, None) => CellView::Flagged,
            (CellState::Hidden, None) => CellView::Hidden,
        }
    }
}
