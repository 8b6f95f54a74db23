//! Legality checking and move application.
//!
//! Both entry points work on immutable board references and return fresh
//! boards; nothing here touches game-level state (turn order, tallies, ko
//! bookkeeping live in the controller).

use crate::board::Board;
use crate::error::GameError;
use crate::stone::Stone;
use crate::Point;

/// Validate a placement against occupancy, suicide and ko.
///
/// `ko` is the forbidden position: the full board as it stood immediately
/// before the last capturing move. A move whose resulting position equals
/// that snapshot cell-for-cell is rejected.
pub fn check_move(
    board: &Board,
    point: Point,
    stone: Stone,
    ko: Option<&Board>,
) -> Result<(), GameError> {
    if !board.on_board(point) {
        return Err(GameError::NotOnBoard);
    }
    if board.stone_at(point).is_some() {
        return Err(GameError::Occupied);
    }

    // Simulate on a scratch board: place, then resolve captures.
    let (scratch, captured) = apply_move(board, point, stone);

    // Suicide: the mover's own group must end with a liberty unless the
    // placement captured something (captures free up liberties first).
    if captured == 0 && scratch.liberties(point) == 0 {
        return Err(GameError::Suicide);
    }

    if let Some(ko_board) = ko {
        if scratch == *ko_board {
            return Err(GameError::KoViolation);
        }
    }

    Ok(())
}

/// Boolean form of [`check_move`].
pub fn is_legal(board: &Board, point: Point, stone: Stone, ko: Option<&Board>) -> bool {
    check_move(board, point, stone, ko).is_ok()
}

/// Place a stone and remove every opponent group left without liberties.
/// Returns the resulting board and the total number of captured stones.
///
/// This does not re-validate the placement; callers check legality first.
/// All capturable opponent groups die at once, there is no partial state.
pub fn apply_move(board: &Board, point: Point, stone: Stone) -> (Board, u32) {
    let mut next = board.clone();
    next.set_stone(point, stone);

    let opponent = stone.opp();
    let mut dead: Vec<Point> = Vec::new();
    for n in next.neighbors(point) {
        if next.stone_at(n) != Some(opponent) {
            continue;
        }
        if dead.contains(&n) {
            continue;
        }
        let chain = next.chain(n);
        if next.chain_liberties(&chain) == 0 {
            dead.extend(chain);
        }
    }

    for &p in &dead {
        next.clear_stone(p);
    }

    (next, dead.len() as u32)
}
