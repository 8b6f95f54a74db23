pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod rules;
pub mod stone;
pub mod territory;
pub mod turn;

/// A board coordinate as (col, row).
pub type Point = (u8, u8);

/// The board is fixed at 9x9.
pub const BOARD_SIZE: u8 = 9;

pub use ai::{Difficulty, NoDelay, ThinkDelay, UniformDelay};
pub use board::{Board, Captures};
pub use error::GameError;
pub use game::{EngineReply, Game, GameSnapshot, Score, Status};
pub use rules::{apply_move, check_move, is_legal};
pub use stone::Stone;
pub use territory::{Territory, score_territory};
pub use turn::{Action, Turn};
