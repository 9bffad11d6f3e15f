//! Positional estimate for Go.
//!
//! The estimate is the running score difference (prisoners, territory and
//! komi as counted at the end of a game) plus the stone difference, plus
//! a bonus for opposing stones in atari and a penalty for one's own.

use crate::core::{Board, GameRng, Pos, Side, SideMap};
use crate::search::candidates::{neighborhood, INNER_RADIUS, ROOT_RADIUS};
use crate::search::{Heuristic, Ply, Score};

use super::rules::{groups, Go};
use super::scoring::final_score;

/// Weight of each stone in a one-liberty group.
pub const ATARI_WEIGHT: Score = 2.0;

/// Half-width of the evaluation jitter.
pub const JITTER: Score = 0.5;

/// Stones in atari per side.
#[must_use]
pub fn atari_stones(board: &Board) -> SideMap<u32> {
    let mut count = SideMap::default();
    for group in groups(board) {
        if group.liberties == 1 {
            count[group.side] += group.stones.len() as u32;
        }
    }
    count
}

impl Heuristic for Go {
    fn evaluate(
        &self,
        board: &Board,
        prisoners: &SideMap<u32>,
        perspective: Side,
        rng: Option<&mut GameRng>,
    ) -> Score {
        let opponent = perspective.opponent();

        let score = final_score(board, prisoners, self.komi);
        let running = score.totals[perspective] - score.totals[opponent];

        let stones = board.count(perspective) as Score - board.count(opponent) as Score;

        let atari = atari_stones(board);
        let pressure =
            ATARI_WEIGHT * (f64::from(atari[opponent]) - f64::from(atari[perspective]));

        let noise = rng.map_or(0.0, |rng| rng.gen_uniform(-JITTER, JITTER));
        running + stones + pressure + noise
    }

    fn candidates(&self, board: &Board, _side: Side, ply: Ply) -> Vec<Pos> {
        let radius = match ply {
            Ply::Root => ROOT_RADIUS,
            Ply::Inner => INNER_RADIUS,
        };
        neighborhood(board, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_reflects_komi() {
        let board = Board::new(9);
        let prisoners = SideMap::default();
        assert_eq!(Go::default().evaluate(&board, &prisoners, Side::White, None), 6.5);
        assert_eq!(Go::default().evaluate(&board, &prisoners, Side::Black, None), -6.5);
    }

    #[test]
    fn test_atari_detection() {
        let mut board = Board::new(9);
        board.place_raw(Pos::new(4, 4), Side::White);
        for (x, y) in [(3, 4), (5, 4), (4, 3)] {
            board.place_raw(Pos::new(x, y), Side::Black);
        }

        let atari = atari_stones(&board);
        assert_eq!(atari[Side::White], 1);
        assert_eq!(atari[Side::Black], 0);
    }

    #[test]
    fn test_prisoners_count_for_mover() {
        let board = Board::new(9);
        let go = Go::with_komi(0.0);
        let ahead = go.evaluate(&board, &SideMap::new(4, 0), Side::Black, None);
        let behind = go.evaluate(&board, &SideMap::new(0, 4), Side::Black, None);
        assert_eq!(ahead, 4.0);
        assert_eq!(behind, -4.0);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let board = Board::new(9);
        let prisoners = SideMap::default();
        let mut rng = GameRng::new(5);
        for _ in 0..50 {
            let noisy = Go::default().evaluate(&board, &prisoners, Side::Black, Some(&mut rng));
            assert!((noisy + 6.5).abs() <= JITTER);
        }
    }
}
