//! Turn sequencing, termination and the external interface of the engine.
//!
//! `Game` owns the board and is the only mutator of it; every entry point
//! validates fully before touching state, so a rejected call leaves the
//! game exactly as it was.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ai::{self, Difficulty, ThinkDelay};
use crate::board::{Board, Captures};
use crate::error::GameError;
use crate::rules;
use crate::stone::Stone;
use crate::territory;
use crate::turn::Turn;
use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Playing,
    BlackWins,
    WhiteWins,
    Draw,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        *self != Status::Playing
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Playing => write!(f, "playing"),
            Status::BlackWins => write!(f, "black_wins"),
            Status::WhiteWins => write!(f, "white_wins"),
            Status::Draw => write!(f, "draw"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playing" => Ok(Status::Playing),
            "black_wins" => Ok(Status::BlackWins),
            "white_wins" => Ok(Status::WhiteWins),
            "draw" => Ok(Status::Draw),
            _ => Err(format!("unknown status: {s}")),
        }
    }
}

/// Live score: owned territory plus cumulative captures, per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

/// What the computer player decided to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineReply {
    Play(Point),
    Pass,
}

/// Serializable game state for collaborators that want to persist or
/// transmit a game; the core itself never stores anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<i8>,
    pub turn: Stone,
    pub captures: Captures,
    pub ko: Option<Vec<i8>>,
    pub passes: u8,
    pub status: Status,
    pub moves: Vec<Turn>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Stone,
    captures: Captures,
    ko: Option<Board>,
    passes: u8,
    moves: Vec<Turn>,
    status: Status,
    thinking: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh game: empty board, Black to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Stone::Black,
            captures: Captures::new(),
            ko: None,
            passes: 0,
            moves: Vec::new(),
            status: Status::Playing,
            thinking: false,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn ko(&self) -> Option<&Board> {
        self.ko.as_ref()
    }

    pub fn passes(&self) -> u8 {
        self.passes
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Territory plus captures, valid in any state.
    pub fn score(&self) -> Score {
        let t = territory::score_territory(&self.board);
        Score {
            black: t.black + self.captures.black,
            white: t.white + self.captures.white,
        }
    }

    // -- Player actions --

    /// Place a stone for `stone`. Returns the number of captured stones.
    pub fn try_play(&mut self, stone: Stone, point: Point) -> Result<u32, GameError> {
        self.guard_turn(stone)?;
        rules::check_move(&self.board, point, stone, self.ko.as_ref())?;
        Ok(self.commit_play(stone, point))
    }

    /// Pass for `stone`. Two consecutive passes end the game by scoring.
    pub fn try_pass(&mut self, stone: Stone) -> Result<Status, GameError> {
        self.guard_turn(stone)?;
        Ok(self.commit_pass(stone))
    }

    /// Resign for `stone`: the opponent wins on the spot.
    pub fn try_resign(&mut self, stone: Stone) -> Result<Status, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.moves.push(Turn::resign(stone));
        self.status = match stone {
            Stone::Black => Status::WhiteWins,
            Stone::White => Status::BlackWins,
        };
        self.thinking = false;
        Ok(self.status)
    }

    /// Back to the initial state, unconditionally. Cancels any pending
    /// engine move.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    // -- Engine turn protocol --
    //
    // The presentation layer drives three explicit transitions instead of
    // relying on timer side effects: start (marks the engine's move as
    // pending and reports how long to pretend to think), finish (select
    // and apply), cancel (used on reset/teardown). While a move is
    // pending, ordinary submissions are rejected as out of turn.

    /// Mark the engine's move as pending. Returns the stone that will move
    /// and the pacing delay from the injected strategy.
    pub fn start_engine_move(
        &mut self,
        delay: &mut impl ThinkDelay,
    ) -> Result<(Stone, Duration), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.thinking {
            return Err(GameError::OutOfTurn);
        }
        self.thinking = true;
        Ok((self.turn, delay.delay()))
    }

    /// Select and apply the engine's move. Passes automatically when no
    /// legal placement exists.
    ///
    /// Candidates are generated with ko ignored and the chosen move is
    /// applied without a ko re-check; ko bookkeeping stays with the
    /// ordinary submission path.
    pub fn finish_engine_move<R: Rng>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<EngineReply, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.thinking {
            return Err(GameError::OutOfTurn);
        }
        self.thinking = false;

        let stone = self.turn;
        match ai::select_move(&self.board, stone, difficulty, rng) {
            Some(point) => {
                self.commit_play(stone, point);
                Ok(EngineReply::Play(point))
            }
            None => {
                self.commit_pass(stone);
                Ok(EngineReply::Pass)
            }
        }
    }

    /// Abandon a pending engine move without executing it.
    pub fn cancel_engine_move(&mut self) {
        self.thinking = false;
    }

    // -- Serialization --

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.cells().to_vec(),
            turn: self.turn,
            captures: self.captures.clone(),
            ko: self.ko.as_ref().map(|b| b.cells().to_vec()),
            passes: self.passes,
            status: self.status,
            moves: self.moves.clone(),
        }
    }

    /// Restore a game from a snapshot. `None` if the board data is not a
    /// 9x9 cell array.
    pub fn from_snapshot(snap: GameSnapshot) -> Option<Self> {
        let board = Board::from_cells(&snap.board)?;
        let ko = match snap.ko {
            Some(cells) => Some(Board::from_cells(&cells)?),
            None => None,
        };
        Some(Game {
            board,
            turn: snap.turn,
            captures: snap.captures,
            ko,
            passes: snap.passes,
            moves: snap.moves,
            status: snap.status,
            thinking: false,
        })
    }

    // -- Internals --

    fn guard_turn(&self, stone: Stone) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.thinking || stone != self.turn {
            return Err(GameError::OutOfTurn);
        }
        Ok(())
    }

    /// Apply a validated placement and advance the turn.
    fn commit_play(&mut self, stone: Stone, point: Point) -> u32 {
        let before = self.board.clone();
        let (next, captured) = rules::apply_move(&self.board, point, stone);
        self.board = next;
        self.captures.add(stone, captured);
        // Any capturing move locks the pre-move position for one ply.
        self.ko = if captured > 0 { Some(before) } else { None };
        self.passes = 0;
        self.moves.push(Turn::play(stone, point, captured));
        self.turn = stone.opp();
        captured
    }

    fn commit_pass(&mut self, stone: Stone) -> Status {
        self.moves.push(Turn::pass(stone));
        self.passes += 1;
        if self.passes >= 2 {
            let score = self.score();
            self.status = if score.black > score.white {
                Status::BlackWins
            } else if score.white > score.black {
                Status::WhiteWins
            } else {
                Status::Draw
            };
        } else {
            self.turn = stone.opp();
        }
        self.status
    }
}
