use arrayvec::ArrayVec;

use crate::stone::Stone;
use crate::{BOARD_SIZE, Point};

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Captures indexed by the capturing stone's color.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// A 9x9 Go board stored as a flat array of cell signs.
///
/// Pure data with derived queries: the rules module decides what may be
/// placed here, the board only answers structural questions (neighbors,
/// chains, liberties).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [i8; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty 9x9 board.
    pub fn new() -> Self {
        Board { cells: [0; CELLS] }
    }

    /// Build a board from a 9x9 matrix of cell signs.
    pub fn from_rows(rows: Vec<Vec<i8>>) -> Self {
        assert!(
            rows.len() == BOARD_SIZE as usize
                && rows.iter().all(|r| r.len() == BOARD_SIZE as usize),
            "board matrix must be 9x9"
        );

        let mut cells = [0i8; CELLS];
        for (i, v) in rows.into_iter().flatten().enumerate() {
            cells[i] = v;
        }
        Board { cells }
    }

    /// Rebuild a board from a serialized flat cell array.
    /// Returns `None` unless exactly 81 cells are supplied.
    pub fn from_cells(cells: &[i8]) -> Option<Self> {
        let cells: [i8; CELLS] = cells.try_into().ok()?;
        Some(Board { cells })
    }

    // -- Accessors --

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        col < BOARD_SIZE && row < BOARD_SIZE
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.cells[Self::idx(point)])
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == 0)
    }

    /// All points in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..CELLS).map(|i| ((i % BOARD_SIZE as usize) as u8, (i / BOARD_SIZE as usize) as u8))
    }

    // -- Mutation --

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            self.cells[Self::idx(point)] = stone.to_int();
        }
    }

    pub(crate) fn clear_stone(&mut self, point: Point) {
        if self.on_board(point) {
            self.cells[Self::idx(point)] = 0;
        }
    }

    // -- Graph queries --

    /// The 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (col, row): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if col > 0 {
            result.push((col - 1, row));
        }
        if col + 1 < BOARD_SIZE {
            result.push((col + 1, row));
        }
        if row > 0 {
            result.push((col, row - 1));
        }
        if row + 1 < BOARD_SIZE {
            result.push((col, row + 1));
        }
        result
    }

    /// Flood-fill the maximal connected same-colored group containing `point`.
    /// Returns an empty vec for an empty cell.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let stone = match self.stone_at(point) {
            Some(s) => s,
            None => return Vec::new(),
        };

        let mut visited = [false; CELLS];
        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = Self::idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[Self::idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    /// Count the distinct empty cells adjacent to any member of `chain`.
    pub fn chain_liberties(&self, chain: &[Point]) -> usize {
        let mut seen = [false; CELLS];
        let mut libs = 0;
        for &p in chain {
            for n in self.neighbors(p) {
                let ni = Self::idx(n);
                if !seen[ni] && self.stone_at(n).is_none() {
                    seen[ni] = true;
                    libs += 1;
                }
            }
        }
        libs
    }

    /// Liberties of the group containing a single stone.
    pub fn liberties(&self, point: Point) -> usize {
        self.chain_liberties(&self.chain(point))
    }

    #[inline]
    fn idx((col, row): Point) -> usize {
        row as usize * BOARD_SIZE as usize + col as usize
    }
}
