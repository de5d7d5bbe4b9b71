use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be non-zero and mine count below the cell count")]
    InvalidConfig,
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Game already over, no new moves are accepted")]
    AlreadyOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
