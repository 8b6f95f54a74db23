use std::fmt;

/// Caller-facing rejections. Every variant is recoverable: the game state
/// is never mutated before validation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    OutOfTurn,
    Occupied,
    Suicide,
    NotOnBoard,
    KoViolation,
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfTurn => write!(f, "out of turn"),
            GameError::Occupied => write!(f, "point occupied"),
            GameError::Suicide => write!(f, "suicide"),
            GameError::NotOnBoard => write!(f, "not on board"),
            GameError::KoViolation => write!(f, "ko violation"),
            GameError::GameOver => write!(f, "game over"),
        }
    }
}

impl std::error::Error for GameError {}
