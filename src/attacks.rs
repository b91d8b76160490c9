// Attack oracle: is a square reachable by a piece of the given color?

use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::utils::{self, Direction, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// True when at least one piece of color `by` could move to `square` under
/// its own movement rule. Whether that move would be legal for `by` is not
/// considered.
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| board.piece_on(sq) == Some(Piece::new(kind, by));

    // Knight attacks
    if utils::knight_targets(square)
        .iter()
        .any(|&sq| holds(sq, PieceKind::Knight))
    {
        return true;
    }

    // King attacks
    if utils::king_targets(square)
        .iter()
        .any(|&sq| holds(sq, PieceKind::King))
    {
        return true;
    }

    // Pawn attacks: the pawn stands one step behind the target, seen from its side
    let behind = -by.forward();
    for df in [-1, 1] {
        if let Some(sq) = square.offset(df, behind) {
            if holds(sq, PieceKind::Pawn) {
                return true;
            }
        }
    }

    // Sliding: the first occupant along each ray decides; anything else blocks
    let lines: [(&[Direction], PieceKind); 2] = [
        (&ROOK_DIRECTIONS, PieceKind::Rook),
        (&BISHOP_DIRECTIONS, PieceKind::Bishop),
    ];
    for (dirs, slider) in lines {
        for &dir in dirs {
            let first = utils::ray(square, dir).find_map(|sq| board.piece_on(sq));
            if let Some(piece) = first {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen) {
                    return true;
                }
            }
        }
    }

    false
}

/// King of `color` attacked by the other side. A missing king is not in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_attacked(board, king, color.opposite()))
}
