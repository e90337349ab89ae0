use alloc::string::String;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Terminal signals for the presentation layer. Each fires at most once per game, and never
/// both.
pub trait GameEvents {
    fn on_win(&mut self) {}
    fn on_game_over(&mut self) {}
}

impl GameEvents for () {}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game session: owns the grid, the random source and the event sink.
#[derive(Clone, Debug)]
pub struct Game<E = ()> {
    config: GameConfig,
    grid: Grid,
    rng: SmallRng,
    first_click: bool,
    state: EngineState,
    triggered_mine: Option<Coord2>,
    events: E,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_events(config, seed, ())
    }
}

impl<E: GameEvents> Game<E> {
    pub fn with_events(config: GameConfig, seed: u64, events: E) -> Result<Self> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = Self::fresh_grid(config, &mut rng)?;

        Ok(Self {
            config,
            grid,
            rng,
            first_click: true,
            state: EngineState::Ready,
            triggered_mine: None,
            events,
        })
    }

    /// Resumes from an existing grid, deriving progress from what is already revealed.
    pub fn from_grid(grid: Grid, start: StartTile, seed: u64, events: E) -> Self {
        let config = GameConfig::new_unchecked(grid.size(), grid.mine_count()).with_start(start);
        let triggered_mine = grid
            .iter()
            .find(|(_, cell)| cell.is_mine && cell.is_revealed)
            .map(|(coords, _)| coords);
        let started = grid.iter().any(|(_, cell)| cell.is_revealed);

        let state = if triggered_mine.is_some() {
            EngineState::Lost
        } else if has_won(&grid) {
            EngineState::Won
        } else if started {
            EngineState::Active
        } else {
            EngineState::Ready
        };

        Self {
            config,
            grid,
            rng: SmallRng::seed_from_u64(seed),
            first_click: !started,
            state,
            triggered_mine,
            events,
        }
    }

    /// Restores a session saved with [`Game::save_board_state`].
    pub fn load_board_state(config: GameConfig, text: &str, seed: u64, events: E) -> Result<Self> {
        let (rows, cols) = config.size;
        let grid = parse_board_state(rows, cols, config.mines, text)?;
        Ok(Self::from_grid(grid, config.start, seed, events))
    }

    pub fn save_board_state(&self) -> String {
        serialize_board_state(&self.grid)
    }

    /// Discards the board and deals a new one with the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        self.grid = Self::fresh_grid(self.config, &mut self.rng)?;
        self.first_click = true;
        self.state = EngineState::Ready;
        self.triggered_mine = None;
        log::debug!("game restarted with {:?}", self.config);
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_first_click(&self) -> bool {
        self.first_click
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        self.grid.cell_at(coords).map(Cell::display)
    }

    pub fn mines_left(&self) -> isize {
        (self.grid.mine_count() as isize) - (self.grid.flag_count() as isize)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() {
            log::debug!("reveal at {:?} ignored, game is over", coords);
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.grid[coords];
        if cell.is_flagged || cell.is_revealed {
            return Ok(RevealOutcome::NoChange);
        }

        if self.first_click {
            self.first_click = false;
            prepare_first_click(&mut self.grid, coords, self.config.start, &mut self.rng)?;
        }

        let outcome = reveal_cell(&mut self.grid, coords)?;
        log::debug!("reveal at {:?}: {:?}", coords, outcome);

        match outcome {
            RevealOutcome::Loss => {
                self.triggered_mine = Some(coords);
                self.end_game(false);
            }
            RevealOutcome::Win => self.end_game(true),
            RevealOutcome::Continue => self.mark_started(),
            RevealOutcome::NoChange => {}
        }

        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() {
            log::debug!("flag at {:?} ignored, game is over", coords);
            return Ok(MarkOutcome::NoChange);
        }

        toggle_flag(&mut self.grid, coords)
    }

    fn fresh_grid(config: GameConfig, rng: &mut SmallRng) -> Result<Grid> {
        let (rows, cols) = config.size;
        let mut grid = Grid::new(rows, cols, config.mines)?;
        populate(&mut grid, rng)?;
        Ok(grid)
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        if won {
            self.state = EngineState::Won;
            self.events.on_win();
        } else {
            self.state = EngineState::Lost;
            reveal_all_mines(&mut self.grid);
            self.events.on_game_over();
        }
    }
}
