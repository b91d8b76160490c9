// Offset tables, precomputed step targets and ray walking

use crate::board::Square;
use std::sync::OnceLock;

pub type Direction = (i8, i8);

// (file delta, rank delta); the order is the order destinations are emitted in
pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [Direction; 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const QUEEN_DIRECTIONS: [Direction; 8] = KING_OFFSETS;

// Precomputed step tables using OnceLock for thread safety
static KNIGHT_TARGETS: OnceLock<Vec<Vec<Square>>> = OnceLock::new();
static KING_TARGETS: OnceLock<Vec<Vec<Square>>> = OnceLock::new();

fn init_step_targets(offsets: &[Direction]) -> Vec<Vec<Square>> {
    (0..64)
        .map(|index| {
            let from = Square::from_index(index);
            offsets
                .iter()
                .filter_map(|&(df, dr)| from.offset(df, dr))
                .collect()
        })
        .collect()
}

pub fn init_step_tables() {
    KNIGHT_TARGETS.get_or_init(|| init_step_targets(&KNIGHT_OFFSETS));
    KING_TARGETS.get_or_init(|| init_step_targets(&KING_OFFSETS));
}

/// On-board knight jumps from `sq`, in `KNIGHT_OFFSETS` order.
#[inline]
pub fn knight_targets(sq: Square) -> &'static [Square] {
    &KNIGHT_TARGETS.get_or_init(|| init_step_targets(&KNIGHT_OFFSETS))[sq.index()]
}

/// On-board neighbours of `sq`, in `KING_OFFSETS` order.
#[inline]
pub fn king_targets(sq: Square) -> &'static [Square] {
    &KING_TARGETS.get_or_init(|| init_step_targets(&KING_OFFSETS))[sq.index()]
}

/// Squares from `from` (exclusive) towards the board edge along one direction.
pub struct Ray {
    next: Option<Square>,
    dir: Direction,
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.next?;
        self.next = sq.offset(self.dir.0, self.dir.1);
        Some(sq)
    }
}

#[inline]
pub fn ray(from: Square, dir: Direction) -> Ray {
    Ray {
        next: from.offset(dir.0, dir.1),
        dir,
    }
}
