//! Pattern-weight evaluation for Gomoku.
//!
//! Every maximal line of length ≥ 5 (rows, columns, both diagonal
//! families) is encoded from one side's point of view: own stone `1`,
//! empty `0`, opposing stone `2`. Each line then earns the weight of every
//! pattern it contains. Matches overlap and are summed, so a line holding
//! an open four also earns the open-three weight; the score is an
//! approximation of threat strength, not a threat count.

use crate::core::{Board, Cell, GameRng, Pos, Side, SideMap};
use crate::search::candidates::{neighborhood, INNER_RADIUS, ROOT_RADIUS};
use crate::search::{Heuristic, Ply, Score};

use super::rules::Gomoku;

/// Terminal score for a won/lost board.
pub const WIN_SCORE: Score = 100_000_000.0;

/// Line weight of five in a row; dominates everything else on the line.
pub const FIVE_WEIGHT: i64 = 10_000_000;

/// Weight applied to the opponent's pattern total.
pub const DEFENSE_NUMERATOR: i64 = 3;
pub const DEFENSE_DENOMINATOR: i64 = 2;

/// Half-width of the evaluation jitter.
pub const JITTER: i32 = 5;

const FIVE: &[u8] = b"11111";

/// Summed patterns, highest first.
const PATTERNS: [(&[u8], i64); 9] = [
    // open four
    (b"011110", 100_000),
    // four blocked on one side
    (b"211110", 2_500),
    (b"011112", 2_500),
    // split fours
    (b"10111", 3_000),
    (b"11011", 3_000),
    (b"11101", 3_000),
    // open three
    (b"01110", 3_000),
    // split threes
    (b"010110", 2_000),
    (b"011010", 2_000),
];

/// Open two: the wide form scores more and excludes the narrow one.
const WIDE_TWO: (&[u8], i64) = (b"001100", 500);
const NARROW_TWO: (&[u8], i64) = (b"0110", 200);

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack.windows(needle.len()).any(|w| w == needle)
}

/// Pattern score of one encoded line.
#[must_use]
pub fn line_score(line: &[u8]) -> i64 {
    if contains(line, FIVE) {
        return FIVE_WEIGHT;
    }

    let mut score: i64 = PATTERNS
        .iter()
        .filter(|(pattern, _)| contains(line, pattern))
        .map(|(_, weight)| weight)
        .sum();

    if contains(line, WIDE_TWO.0) {
        score += WIDE_TWO.1;
    } else if contains(line, NARROW_TWO.0) {
        score += NARROW_TWO.1;
    }

    score
}

/// Shortest line that can hold five in a row.
const MIN_LINE: usize = 5;

/// One straight run of cells across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    /// Column and row step between consecutive cells.
    pub step: (isize, isize),
    pub len: usize,
}

impl Line {
    const fn new(start: Pos, step: (isize, isize), len: usize) -> Self {
        Self { start, step, len }
    }

    /// Cells from `start` in step order.
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (0..self.len).map(move |i| {
            let i = i as isize;
            Pos::new(
                self.start.x.wrapping_add_signed(self.step.0 * i),
                self.start.y.wrapping_add_signed(self.step.1 * i),
            )
        })
    }
}

/// Every maximal line of at least five cells: rows, columns, then the
/// `\` and `/` diagonals. Nothing is allocated.
pub fn lines(size: usize) -> impl Iterator<Item = Line> {
    let rows = (0..size).map(move |y| Line::new(Pos::new(0, y), (1, 0), size));
    let cols = (0..size).map(move |x| Line::new(Pos::new(x, 0), (0, 1), size));

    let falling = (0..size)
        .map(move |x| Line::new(Pos::new(x, 0), (1, 1), size - x))
        .chain((1..size).map(move |y| Line::new(Pos::new(0, y), (1, 1), size - y)));
    let rising = (0..size)
        .map(move |x| Line::new(Pos::new(x, 0), (-1, 1), x + 1))
        .chain((1..size).map(move |y| Line::new(Pos::new(size - 1, y), (-1, 1), size - y)));

    rows.chain(cols)
        .chain(falling.chain(rising).filter(|line| line.len >= MIN_LINE))
}

fn encode(board: &Board, line: Line, side: Side, buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend(line.cells().map(|pos| match board.at(pos) {
        Cell::Empty => b'0',
        cell if cell.is(side) => b'1',
        _ => b'2',
    }));
}

/// Pattern totals for both sides, and whether either has five.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: SideMap<i64>,
    pub five: SideMap<bool>,
}

/// Sum line scores over the whole board for both sides.
#[must_use]
pub fn tally(board: &Board) -> Tally {
    let mut tally = Tally::default();
    let mut buf = Vec::with_capacity(board.size());

    for line in lines(board.size()) {
        for side in Side::BOTH {
            encode(board, line, side, &mut buf);
            let score = line_score(&buf);
            if score >= FIVE_WEIGHT {
                tally.five[side] = true;
            }
            tally.score[side] += score;
        }
    }

    tally
}

impl Heuristic for Gomoku {
    fn evaluate(
        &self,
        board: &Board,
        _prisoners: &SideMap<u32>,
        perspective: Side,
        rng: Option<&mut GameRng>,
    ) -> Score {
        let opponent = perspective.opponent();
        let tally = tally(board);

        if tally.five[perspective] {
            return WIN_SCORE;
        }
        if tally.five[opponent] {
            return -WIN_SCORE;
        }
        if board.is_full() {
            return 0.0;
        }

        let defended = tally.score[opponent] * DEFENSE_NUMERATOR / DEFENSE_DENOMINATOR;
        let noise = rng.map_or(0, |rng| rng.gen_range(-JITTER..JITTER + 1));
        (tally.score[perspective] - defended + i64::from(noise)) as Score
    }

    fn candidates(&self, board: &Board, _side: Side, ply: Ply) -> Vec<Pos> {
        let radius = match ply {
            Ply::Root => ROOT_RADIUS,
            Ply::Inner => INNER_RADIUS,
        };
        neighborhood(board, radius)
    }
}
