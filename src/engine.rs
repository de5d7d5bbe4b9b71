use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// State of a single game session.
///
/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
/// - InProgress -> Cancelled
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
    /// The session was abandoned externally, e.g. the surrounding window
    /// closed mid-game.
    Cancelled,
}

impl GameState {
    /// Indicates the game has ended and no moves are accepted anymore.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Cancelled)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a reveal request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was flagged or already revealed; nothing changed.
    Ignored,
    /// Safe cells were revealed: the requested cell plus any cascaded region.
    Revealed { opened: Vec<Coord2> },
    /// The last safe cell was revealed and the game is won.
    Won { opened: Vec<Coord2> },
    /// A mine was hit; the game is lost and every mine is disclosed.
    Exploded { mines: Vec<Coord2> },
}

/// Outcome of a flag toggle, carrying the updated correct-flag count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    /// The cell was already revealed; flagging it is meaningless.
    Ignored,
    Flagged { correct_flags: CellCount },
    Unflagged { correct_flags: CellCount },
}

/// One-shot notification queued when the game reaches a terminal state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalEvent {
    pub state: GameState,
    /// Full mine disclosure, populated only on a loss.
    pub mines: Vec<Coord2>,
}

/// The board engine: one game session from mine placement to a terminal
/// outcome, driven by `reveal`, `toggle_flag`, and `cancel`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: MineLayout,
    grid: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    correct_flag_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
    debug: bool,
    pending_event: Option<TerminalEvent>,
}

impl Board {
    /// Validates the config, generates the minefield, and starts the session
    /// with every cell hidden.
    pub fn new(config: GameConfig, generator: impl MineGenerator, debug: bool) -> Result<Self> {
        config.validate()?;
        Self::with_layout(generator.generate(config), debug)
    }

    /// Starts a session over an explicit mine layout, bypassing random
    /// generation.
    pub fn with_layout(layout: MineLayout, debug: bool) -> Result<Self> {
        layout.game_config().validate()?;
        let size = layout.size();
        Ok(Self {
            layout,
            grid: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            correct_flag_count: 0,
            state: Default::default(),
            triggered_mine: None,
            debug,
            pending_event: None,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    /// How many mines have not been flagged yet; negative when the player
    /// over-flags.
    pub fn mines_left(&self) -> isize {
        (self.layout.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub fn correct_flag_count(&self) -> CellCount {
        self.correct_flag_count
    }

    /// The mine that ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Full mine coordinate set, available only when the board was built in
    /// debug mode. Play semantics are unaffected.
    pub fn debug_mine_coords(&self) -> Option<Vec<Coord2>> {
        self.debug.then(|| self.layout.mine_coords().collect())
    }

    /// Drains the terminal notification. Yields a value exactly once, on the
    /// first call after the game ends.
    pub fn take_terminal_event(&mut self) -> Option<TerminalEvent> {
        self.pending_event.take()
    }

    /// Reveals a hidden cell.
    ///
    /// Flagged and already-revealed cells are ignored. Revealing a mine loses
    /// the game and discloses every mine. Revealing a safe cell with no
    /// adjacent mines cascades breadth-first through its zero region; the win
    /// check runs once after the cascade settles.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_in_progress()?;

        match self.grid[coords.to_nd_index()] {
            Cell::Hidden => {}
            _ => return Ok(RevealOutcome::Ignored),
        }

        if self.layout.contains_mine(coords) {
            self.triggered_mine = Some(coords);
            let mines = self.disclose_mines();
            self.finish(GameState::Lost, mines.clone());
            return Ok(RevealOutcome::Exploded { mines });
        }

        let opened = self.reveal_cascade(coords);

        if self.revealed_count == self.layout.safe_cell_count() {
            self.finish(GameState::Won, Vec::new());
            Ok(RevealOutcome::Won { opened })
        } else {
            Ok(RevealOutcome::Revealed { opened })
        }
    }

    /// Toggles the flag on a hidden cell, keeping the correct-flag counter in
    /// step. Reaching `correct_flags == total_mines` does not end the game;
    /// the only win condition is revealing every safe cell.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_in_progress()?;

        Ok(match self.grid[coords.to_nd_index()] {
            Cell::Hidden => {
                self.grid[coords.to_nd_index()] = Cell::Flagged;
                self.flagged_count += 1;
                if self.layout.contains_mine(coords) {
                    self.correct_flag_count += 1;
                }
                FlagOutcome::Flagged {
                    correct_flags: self.correct_flag_count,
                }
            }
            Cell::Flagged => {
                self.grid[coords.to_nd_index()] = Cell::Hidden;
                self.flagged_count -= 1;
                if self.layout.contains_mine(coords) {
                    self.correct_flag_count -= 1;
                }
                FlagOutcome::Unflagged {
                    correct_flags: self.correct_flag_count,
                }
            }
            _ => FlagOutcome::Ignored,
        })
    }

    /// Abandons the session. Transitions to `Cancelled` while in progress;
    /// on an already-terminal board it just reports the current state.
    pub fn cancel(&mut self) -> GameState {
        if !self.state.is_terminal() {
            self.finish(GameState::Cancelled, Vec::new());
        }
        self.state
    }

    /// Breadth-first flood fill from a hidden safe cell. Revealed cells block
    /// re-entry and flagged cells are never opened, so every cell is visited
    /// at most once.
    fn reveal_cascade(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut opened = Vec::new();
        let mut visited = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if !matches!(self.grid[coords.to_nd_index()], Cell::Hidden) {
                continue;
            }

            let adjacent_mines = self.layout.adjacent_mine_count(coords);
            self.grid[coords.to_nd_index()] = Cell::Revealed(adjacent_mines);
            self.revealed_count += 1;
            opened.push(coords);
            log::trace!("Revealed {:?}, adjacent mines: {}", coords, adjacent_mines);

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.layout
                        .iter_neighbors(coords)
                        .filter(|&pos| visited.insert(pos)),
                );
            }
        }

        opened
    }

    /// Full board disclosure after a loss: the triggered mine shows as
    /// exploded, every other mine as a plain mine.
    fn disclose_mines(&mut self) -> Vec<Coord2> {
        let mines: Vec<Coord2> = self.layout.mine_coords().collect();
        for &coords in &mines {
            self.grid[coords.to_nd_index()] = if Some(coords) == self.triggered_mine {
                Cell::Exploded
            } else {
                Cell::Mine
            };
        }
        mines
    }

    fn finish(&mut self, state: GameState, mines: Vec<Coord2>) {
        debug_assert!(!self.state.is_terminal());
        self.state = state;
        self.pending_event = Some(TerminalEvent { state, mines });
        log::debug!("Game over: {:?}", state);
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_terminal() {
            Err(GameError::AlreadyOver)
        } else {
            Ok(())
        }
    }
}
