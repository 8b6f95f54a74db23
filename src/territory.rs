//! End-game territory scoring.
//!
//! Empty cells are partitioned into maximal 4-connected regions; a region
//! bordered by stones of exactly one color counts wholly as that color's
//! territory, anything else is dame. Captures are the controller's
//! business and are added there, not here.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::{BOARD_SIZE, Point};

/// Territory cell counts per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Territory {
    pub black: u32,
    pub white: u32,
}

/// Score every empty region of the board.
pub fn score_territory(board: &Board) -> Territory {
    let size = BOARD_SIZE as usize * BOARD_SIZE as usize;
    let mut visited = vec![false; size];
    let mut territory = Territory::default();

    for start in Board::points() {
        let si = index(start);
        if visited[si] || board.stone_at(start).is_some() {
            continue;
        }

        // Flood-fill this empty region, recording bordering stone colors
        // as a 2-bit mask (bit 0 = Black seen, bit 1 = White seen).
        let mut area = 0u32;
        let mut borders = 0u8;
        let mut stack = vec![start];

        while let Some(p) = stack.pop() {
            let pi = index(p);
            if visited[pi] {
                continue;
            }
            visited[pi] = true;
            area += 1;

            for n in board.neighbors(p) {
                match board.stone_at(n) {
                    None => {
                        if !visited[index(n)] {
                            stack.push(n);
                        }
                    }
                    Some(s) => borders |= if s.to_int() > 0 { 1 } else { 2 },
                }
            }
        }

        match borders {
            1 => territory.black += area,
            2 => territory.white += area,
            _ => {} // dame: no border or both colors
        }
    }

    territory
}

#[inline]
fn index((col, row): Point) -> usize {
    row as usize * BOARD_SIZE as usize + col as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::board_from_layout;

    #[test]
    fn empty_board_is_all_neutral() {
        let t = score_territory(&Board::new());
        assert_eq!(t, Territory { black: 0, white: 0 });
    }

    #[test]
    fn region_bordered_by_one_color_counts() {
        // Black wall on column 1 splits off the two leftmost columns minus
        // nothing; the left region borders only Black.
        let board = board_from_layout(&[
            "+B+++++++",
            "+B+++++++",
            "+B+++++++",
            "+B+++++++",
            "+B+++++++",
            "+B+++++++",
            "+B+++++++",
            "+B+++++++",
            "+B+++++++",
        ]);
        let t = score_territory(&board);
        assert_eq!(t.black, 9 + 63);
        assert_eq!(t.white, 0);
    }

    #[test]
    fn contested_region_is_dame() {
        let board = board_from_layout(&["B++++++W"]);
        let t = score_territory(&board);
        assert_eq!(t, Territory { black: 0, white: 0 });
    }

    #[test]
    fn split_board_scores_both_colors() {
        // Black wall on column 2, White wall on column 6: the left region
        // is Black's, the right region is White's, the middle is dame.
        let board = board_from_layout(&[
            "++B+++W++",
            "++B+++W++",
            "++B+++W++",
            "++B+++W++",
            "++B+++W++",
            "++B+++W++",
            "++B+++W++",
            "++B+++W++",
            "++B+++W++",
        ]);
        let t = score_territory(&board);
        assert_eq!(t.black, 18);
        assert_eq!(t.white, 18);
    }

    #[test]
    fn single_eye_counts_one_point() {
        let board = board_from_layout(&["+W+", "W+W", "+W+"]);
        // The hole at (1,1) borders only White. The outside region borders
        // White too, so on this mostly-empty board everything is White's.
        let t = score_territory(&board);
        // 4 stones on the board; the eye and the outside both border only
        // White, so all 77 empty cells are White's.
        assert_eq!(t.white, 77);
        assert_eq!(t.black, 0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let board = board_from_layout(&["++B+++W++", "++B+++W++"]);
        let first = score_territory(&board);
        let second = score_territory(&board);
        assert_eq!(first, second);
    }
}
