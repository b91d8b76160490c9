//! Pseudo-legal move generation and the legality filter.
//!
//! Generation walks the board in scan order (rank 8 to rank 1, file a to h)
//! and, for each piece of the side to move, emits destinations in the order
//! of that piece's offset table. Legality is decided by simulating each
//! candidate on a private copy of the board and asking the attack oracle
//! whether the mover's king is left attacked.

use crate::attacks::is_attacked;
use crate::board::{Board, Color, Move, MoveList, PieceKind, Square};
use crate::error::{BoardError, BoardResult};
use crate::utils::{self, Direction, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use std::thread;

// Empty or enemy-occupied: a stepping piece may land there
#[inline]
fn can_land(board: &Board, sq: Square, mover: Color) -> bool {
    board.piece_on(sq).map_or(true, |p| p.color != mover)
}

/// Pawn pushes (single, double from the start rank) then captures left and right.
/// No en-passant and no promotion marking.
pub fn pawn_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let Some(pawn) = board.piece_on(from) else {
        return out;
    };
    let dir = pawn.color.forward();

    if let Some(one) = from.offset(0, dir) {
        if board.is_empty(one) {
            out.push(one);
            if from.rank() == pawn.color.pawn_start_rank() {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if board.piece_on(to).is_some_and(|target| target.color != pawn.color) {
                out.push(to);
            }
        }
    }
    out
}

pub fn knight_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(knight) = board.piece_on(from) else {
        return Vec::new();
    };
    utils::knight_targets(from)
        .iter()
        .copied()
        .filter(|&to| can_land(board, to, knight.color))
        .collect()
}

pub fn king_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(king) = board.piece_on(from) else {
        return Vec::new();
    };
    // Castling not implemented
    utils::king_targets(from)
        .iter()
        .copied()
        .filter(|&to| can_land(board, to, king.color))
        .collect()
}

fn slide_destinations(board: &Board, from: Square, dirs: &[Direction]) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(slider) = board.piece_on(from) else {
        return out;
    };
    for &dir in dirs {
        for to in utils::ray(from, dir) {
            match board.piece_on(to) {
                None => out.push(to),
                Some(target) => {
                    if target.color != slider.color {
                        out.push(to);
                    }
                    break; // Stop sliding when we hit any piece
                }
            }
        }
    }
    out
}

pub fn bishop_destinations(board: &Board, from: Square) -> Vec<Square> {
    slide_destinations(board, from, &BISHOP_DIRECTIONS)
}

pub fn rook_destinations(board: &Board, from: Square) -> Vec<Square> {
    slide_destinations(board, from, &ROOK_DIRECTIONS)
}

pub fn queen_destinations(board: &Board, from: Square) -> Vec<Square> {
    slide_destinations(board, from, &QUEEN_DIRECTIONS)
}

/// Destinations of whatever stands on `from`; empty for an empty square.
pub fn destinations(board: &Board, from: Square) -> Vec<Square> {
    match board.piece_on(from).map(|p| p.kind) {
        Some(PieceKind::Pawn) => pawn_destinations(board, from),
        Some(PieceKind::Knight) => knight_destinations(board, from),
        Some(PieceKind::Bishop) => bishop_destinations(board, from),
        Some(PieceKind::Rook) => rook_destinations(board, from),
        Some(PieceKind::Queen) => queen_destinations(board, from),
        Some(PieceKind::King) => king_destinations(board, from),
        None => Vec::new(),
    }
}

/// Every pseudo-legal move of `board.side`, in scan order.
pub fn list_pseudo_legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::with_capacity(64);
    for from in Square::scan_order() {
        let Some(piece) = board.piece_on(from) else {
            continue;
        };
        if piece.color != board.side {
            continue;
        }
        moves.extend(
            destinations(board, from)
                .into_iter()
                .map(|to| Move::new(piece, from, to)),
        );
    }
    tracing::debug!(side = ?board.side, count = moves.len(), "pseudo-legal moves generated");
    moves
}

/// Copy of `board` with `mv` played: destination takes the piece, origin empties.
/// The side to move is left unchanged.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut after = *board;
    after.set_piece(mv.to, mv.piece);
    after.clear(mv.from);
    after
}

/// `apply_move` followed by handing the turn to the other side.
pub fn play(board: &Board, mv: &Move) -> Board {
    let mut next = apply_move(board, mv);
    next.side = next.side.opposite();
    next
}

/// True when `mv` does not leave the mover's king attacked.
///
/// # Panics
///
/// When the mover has no king on the board after the move. Legality is
/// undefined for such positions.
pub fn is_legal(board: &Board, mv: &Move) -> bool {
    let after = apply_move(board, mv);
    let king = if mv.piece.kind == PieceKind::King {
        mv.to
    } else {
        match after.king_square(mv.piece.color) {
            Some(sq) => sq,
            None => panic!("{:?} king missing after {}", mv.piece.color, mv),
        }
    };
    !is_attacked(&after, king, mv.piece.color.opposite())
}

/// Keeps the moves of `pseudo_legal` that pass `is_legal`, in input order.
pub fn list_legal_moves(board: &Board, pseudo_legal: &[Move]) -> MoveList {
    let legal: MoveList = pseudo_legal
        .iter()
        .filter(|mv| {
            let ok = is_legal(board, mv);
            if !ok {
                tracing::trace!(%mv, "rejected: leaves king attacked");
            }
            ok
        })
        .copied()
        .collect();
    tracing::debug!(
        candidates = pseudo_legal.len(),
        legal = legal.len(),
        "legality filter done"
    );
    legal
}

/// Same result as `list_legal_moves`, with the candidates split into
/// contiguous chunks checked on scoped worker threads. Each worker owns its
/// board copy; chunk results are joined back in order.
pub fn list_legal_moves_parallel(board: &Board, pseudo_legal: &[Move], threads: usize) -> MoveList {
    let threads = threads.max(1);
    if threads == 1 || pseudo_legal.len() < 2 {
        return list_legal_moves(board, pseudo_legal);
    }
    let chunk = pseudo_legal.len().div_ceil(threads);

    thread::scope(|scope| {
        let workers: Vec<_> = pseudo_legal
            .chunks(chunk)
            .map(|part| {
                let own = *board;
                scope.spawn(move || list_legal_moves(&own, part))
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| {
                worker
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

/// Pseudo-legal generation followed by the legality filter.
pub fn legal_moves(board: &Board) -> MoveList {
    list_legal_moves(board, &list_pseudo_legal_moves(board))
}

/// Resolves a coordinate move ("e2e4") against the legal moves of `board`.
pub fn parse_uci_move(board: &Board, uci: &str) -> BoardResult<Move> {
    if uci.len() != 4 || !uci.is_ascii() {
        return Err(BoardError::MalformedMove(uci.to_string()));
    }
    let from: Square = uci[0..2]
        .parse()
        .map_err(|_| BoardError::MalformedMove(uci.to_string()))?;
    let to: Square = uci[2..4]
        .parse()
        .map_err(|_| BoardError::MalformedMove(uci.to_string()))?;

    legal_moves(board)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
        .ok_or_else(|| BoardError::IllegalMove(uci.to_string()))
}
