//! Perft: leaf counts of the legal-move tree under this crate's rules
//! (no castling, en-passant or promotion).

use crate::board::{Board, Move};
use crate::movegen::{legal_moves, play};

pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft(&play(board, mv), depth - 1))
        .sum()
}

/// Per-root-move split of `perft(board, depth)`, in generation order.
/// Depth 0 has no root moves and yields an empty list.
pub fn divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves(board)
        .into_iter()
        .map(|mv| (mv, perft(&play(board, &mv), depth - 1)))
        .collect()
}
