//! Neighbourhood candidate generation for stone-placement variants.

use crate::core::{Board, Pos};

/// Radius used for the move being chosen.
pub const ROOT_RADIUS: usize = 2;

/// Radius used deeper in the tree.
pub const INNER_RADIUS: usize = 1;

/// Empty cells within `radius` (Chebyshev distance) of any stone, row-major.
///
/// An empty board yields only the centre cell; a full board yields nothing.
#[must_use]
pub fn neighborhood(board: &Board, radius: usize) -> Vec<Pos> {
    let size = board.size();
    if board.is_blank() {
        return vec![Pos::new(size / 2, size / 2)];
    }

    let mut near = vec![false; size * size];
    for (pos, cell) in board.cells() {
        if cell.is_empty() {
            continue;
        }
        let y_range = pos.y.saturating_sub(radius)..=(pos.y + radius).min(size - 1);
        for y in y_range {
            let x_range = pos.x.saturating_sub(radius)..=(pos.x + radius).min(size - 1);
            for x in x_range {
                near[y * size + x] = true;
            }
        }
    }

    board
        .positions()
        .filter(|p| near[p.y * size + p.x] && board.at(*p).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    #[test]
    fn test_empty_board_yields_center() {
        assert_eq!(neighborhood(&Board::new(15), 2), vec![Pos::new(7, 7)]);
        assert_eq!(neighborhood(&Board::new(8), 1), vec![Pos::new(4, 4)]);
    }

    #[test]
    fn test_single_stone_radii() {
        let mut board = Board::new(15);
        board.place_raw(Pos::new(7, 7), Side::Black);

        assert_eq!(neighborhood(&board, 1).len(), 8);
        assert_eq!(neighborhood(&board, 2).len(), 24);
        assert!(!neighborhood(&board, 1).contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_corner_stone_is_clipped() {
        let mut board = Board::new(9);
        board.place_raw(Pos::new(0, 0), Side::White);

        let moves = neighborhood(&board, 1);
        assert_eq!(moves, vec![Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]);
    }

    #[test]
    fn test_overlapping_neighbourhoods_dedup() {
        let mut board = Board::new(9);
        board.place_raw(Pos::new(4, 4), Side::Black);
        board.place_raw(Pos::new(5, 4), Side::White);

        let moves = neighborhood(&board, 1);
        // 3x4 block minus the two stones.
        assert_eq!(moves.len(), 10);
        let mut sorted = moves.clone();
        sorted.dedup();
        assert_eq!(sorted, moves);
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let mut board = Board::new(8);
        for pos in board.positions().collect::<Vec<_>>() {
            board.place_raw(pos, Side::Black);
        }
        assert!(neighborhood(&board, 2).is_empty());
    }
}
