//! Square grid of cells.
//!
//! The board is pure substrate: bounds checking, raw reads and writes,
//! and a few counting helpers. It knows nothing about legality; every
//! rules engine mutates it in place, both for committed moves and during
//! speculative search.

use serde::{Deserialize, Serialize};

use super::side::{Cell, Side};

/// Orthogonal steps (Go adjacency).
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// All eight compass steps (Reversi rays).
pub const COMPASS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Board coordinate. `x` is the column, `y` the row, both 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step by a signed offset, `None` if the result would be negative.
    ///
    /// Upper bounds are the board's business.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        let x = self.x as i64 + dx as i64;
        let y = self.y as i64 + dy as i64;
        if x < 0 || y < 0 {
            return None;
        }
        Some(Pos::new(x as usize, y as usize))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `size × size` grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Is `(x, y)` on the board?
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Step from `pos` by `(dx, dy)`, staying on the board.
    #[must_use]
    pub fn step(&self, pos: Pos, dx: i32, dy: i32) -> Option<Pos> {
        pos.offset(dx, dy).filter(|p| self.contains(p.x, p.y))
    }

    /// Cell at `(x, y)`; `Empty` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if self.contains(x, y) {
            self.cells[y * self.size + x]
        } else {
            Cell::Empty
        }
    }

    #[inline]
    #[must_use]
    pub fn at(&self, pos: Pos) -> Cell {
        self.get(pos.x, pos.y)
    }

    /// Is the cell on the board and empty?
    #[must_use]
    pub fn is_vacant(&self, pos: Pos) -> bool {
        self.contains(pos.x, pos.y) && self.at(pos).is_empty()
    }

    /// Write a stone if the cell is empty and in bounds.
    ///
    /// Returns `false` (and writes nothing) otherwise; callers validate
    /// beforehand.
    pub fn place_raw(&mut self, pos: Pos, side: Side) -> bool {
        if !self.is_vacant(pos) {
            return false;
        }
        self.cells[pos.y * self.size + pos.x] = Cell::from(side);
        true
    }

    /// Overwrite a cell regardless of its contents (flips, restores).
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if self.contains(pos.x, pos.y) {
            self.cells[pos.y * self.size + pos.x] = cell;
        }
    }

    /// Reset a cell to empty.
    pub fn clear(&mut self, pos: Pos) {
        self.set(pos, Cell::Empty);
    }

    /// Iterate over every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Pos::new(x, y)))
    }

    /// Iterate over (Pos, Cell) pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.positions().map(move |p| (p, self.at(p)))
    }

    /// On-board orthogonal neighbours of `pos`.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dx, dy)| self.step(pos, dx, dy))
    }

    /// Number of stones of `side`.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| c.is(side)).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Rows as plain vectors, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size.max(1)).map(<[Cell]>::to_vec).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
