//! Heuristic move selection for the computer player.
//!
//! A one-ply greedy evaluation, not a reading engine: its obligations are
//! to always return a legal move when one exists and to vary behavior by
//! difficulty tier. Candidate generation ignores ko on purpose; the
//! controller owns ko bookkeeping.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rules;
use crate::stone::Stone;
use crate::{BOARD_SIZE, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty: {s}")),
        }
    }
}

/// All points where `stone` may legally play, in row-major order.
pub fn legal_points(board: &Board, stone: Stone) -> Vec<Point> {
    Board::points()
        .filter(|&p| rules::is_legal(board, p, stone, None))
        .collect()
}

/// Static evaluation of a position for one color.
///
/// Each own stone scores by placement (corner 3, edge 2, interior 1) plus
/// half a point per liberty of its group. Liberties are counted per stone,
/// so a large group's liberties weigh in once per member.
pub fn position_value(board: &Board, stone: Stone) -> f64 {
    let last = BOARD_SIZE - 1;
    let mut value = 0.0;

    for p in Board::points() {
        if board.stone_at(p) != Some(stone) {
            continue;
        }
        let (col, row) = p;
        let on_col_edge = col == 0 || col == last;
        let on_row_edge = row == 0 || row == last;
        value += if on_col_edge && on_row_edge {
            3.0
        } else if on_col_edge || on_row_edge {
            2.0
        } else {
            1.0
        };
        value += board.liberties(p) as f64 * 0.5;
    }

    value
}

/// Pick a move for `stone`, or `None` when no legal move exists (pass).
///
/// Easy picks uniformly among legal points. Medium and Hard greedily
/// maximize own minus opponent [`position_value`] after the move; Medium
/// perturbs each candidate's score with uniform noise in [-1, 1], Hard is
/// deterministic with ties broken by first-encountered row-major order.
pub fn select_move<R: Rng>(
    board: &Board,
    stone: Stone,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Point> {
    let candidates = legal_points(board, stone);
    if candidates.is_empty() {
        return None;
    }

    if difficulty == Difficulty::Easy {
        return Some(candidates[rng.gen_range(0..candidates.len())]);
    }

    let mut best: Option<Point> = None;
    let mut best_score = f64::NEG_INFINITY;

    for &p in &candidates {
        let (next, _) = rules::apply_move(board, p, stone);
        let mut score = position_value(&next, stone) - position_value(&next, stone.opp());
        if difficulty == Difficulty::Medium {
            score += rng.gen_range(-1.0..=1.0);
        }
        if score > best_score {
            best_score = score;
            best = Some(p);
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Think-delay strategy
// ---------------------------------------------------------------------------

/// How long the controller should pretend to think before an engine move.
///
/// Purely a pacing hint for the presentation layer; the returned duration
/// is reported, never slept on, so move selection stays synchronous.
pub trait ThinkDelay {
    fn delay(&mut self) -> Duration;
}

/// Zero delay, for tests and non-interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl ThinkDelay for NoDelay {
    fn delay(&mut self) -> Duration {
        Duration::ZERO
    }
}

/// Uniform random delay between two bounds, 500-1500 ms by default.
#[derive(Debug, Clone, Copy)]
pub struct UniformDelay {
    pub min: Duration,
    pub max: Duration,
}

impl Default for UniformDelay {
    fn default() -> Self {
        UniformDelay {
            min: Duration::from_millis(500),
            max: Duration::from_millis(1500),
        }
    }
}

impl ThinkDelay for UniformDelay {
    fn delay(&mut self) -> Duration {
        let (lo, hi) = (self.min.as_millis() as u64, self.max.as_millis() as u64);
        Duration::from_millis(rand::thread_rng().gen_range(lo..=hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::board_from_layout;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn midgame_board() -> Board {
        board_from_layout(&[
            "+++++++++",
            "++B+W++++",
            "+BWW+++++",
            "++B++W+++",
            "+++++++++",
            "++W+B++++",
            "+++++++++",
            "++++B+W++",
            "+++++++++",
        ])
    }

    #[test]
    fn selects_only_legal_moves() {
        let board = midgame_board();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for seed in 0..20 {
                let p = select_move(&board, Stone::White, difficulty, &mut rng(seed))
                    .expect("moves available");
                assert!(
                    rules::is_legal(&board, p, Stone::White, None),
                    "illegal move {p:?} at {difficulty}"
                );
            }
        }
    }

    #[test]
    fn passes_when_no_legal_move() {
        // Black owns the whole board bar two real eyes; every White
        // placement is suicide.
        let mut rows = vec!["BBBBBBBBB"; 9];
        rows[0] = "+BBBBBBB+";
        let board = board_from_layout(&rows);
        assert_eq!(
            select_move(&board, Stone::White, Difficulty::Hard, &mut rng(1)),
            None
        );
    }

    #[test]
    fn easy_spreads_over_candidates() {
        let board = midgame_board();
        let mut chosen = HashSet::new();
        for seed in 0..60 {
            if let Some(p) = select_move(&board, Stone::White, Difficulty::Easy, &mut rng(seed)) {
                chosen.insert(p);
            }
        }
        // Uniform choice over ~70 legal points: 60 independent draws land
        // on far more than a handful of distinct points.
        assert!(chosen.len() > 10, "easy looked deterministic: {chosen:?}");
    }

    #[test]
    fn hard_is_deterministic() {
        let board = midgame_board();
        let first = select_move(&board, Stone::White, Difficulty::Hard, &mut rng(0));
        for seed in 1..30 {
            assert_eq!(
                select_move(&board, Stone::White, Difficulty::Hard, &mut rng(seed)),
                first
            );
        }
    }

    #[test]
    fn hard_prefers_capture() {
        // The Black corner stone has a single liberty at (0,1); taking it
        // zeroes Black's evaluation, which beats any quiet move.
        let board = board_from_layout(&["BW"]);
        let p = select_move(&board, Stone::White, Difficulty::Hard, &mut rng(0));
        assert_eq!(p, Some((0, 1)));
    }

    #[test]
    fn position_value_weights_placement() {
        // A corner stone with 2 liberties: 3 + 1.0 = 4.0.
        let corner = board_from_layout(&["B"]);
        assert_eq!(position_value(&corner, Stone::Black), 4.0);

        // An interior stone with 4 liberties: 1 + 2.0 = 3.0.
        let interior = board_from_layout(&["+++", "+B+", "+++"]);
        assert_eq!(position_value(&interior, Stone::Black), 3.0);

        // An edge stone with 3 liberties: 2 + 1.5 = 3.5.
        let edge = board_from_layout(&["+B+"]);
        assert_eq!(position_value(&edge, Stone::Black), 3.5);
    }

    #[test]
    fn position_value_counts_group_liberties_per_stone() {
        // Two adjacent interior stones, group liberties = 6:
        // each stone contributes 1 + 3.0.
        let board = board_from_layout(&["+++++", "+BB++", "+++++"]);
        assert_eq!(position_value(&board, Stone::Black), 8.0);
    }

    #[test]
    fn legal_points_row_major() {
        let board = Board::new();
        let pts = legal_points(&board, Stone::Black);
        assert_eq!(pts.len(), 81);
        assert_eq!(pts[0], (0, 0));
        assert_eq!(pts[1], (1, 0));
        assert_eq!(pts[9], (0, 1));
    }

    #[test]
    fn no_delay_is_zero() {
        assert_eq!(NoDelay.delay(), Duration::ZERO);
    }

    #[test]
    fn uniform_delay_within_bounds() {
        let mut d = UniformDelay::default();
        for _ in 0..50 {
            let v = d.delay();
            assert!(v >= Duration::from_millis(500) && v <= Duration::from_millis(1500));
        }
    }

    #[test]
    fn difficulty_round_trips_strings() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
