pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod utils;

pub use board::{Board, Color, Move, MoveList, Piece, PieceKind, Square};
pub use error::{BoardError, BoardResult};

pub fn init() {
    utils::init_step_tables();
}
