// Mapping di quadrati: A1=0, B1=1, ..., H8=63 (index = rank * 8 + file)

use crate::error::{BoardError, BoardResult};
use std::fmt;
use std::str::FromStr;

pub const WIDTH: u8 = 8;
pub const HEIGHT: u8 = 8;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a pawn of this color: +1 for White, -1 for Black.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank index from which a pawn may advance two squares.
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl FromStr for Color {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Self> {
        match s {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            other => Err(BoardError::InvalidSide(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kind for a placement letter, ignoring case.
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece standing on a square. Empty squares are `None` in the board,
/// so an empty square never carries a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Placement letter: uppercase White, lowercase Black.
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[inline]
pub fn square_index(file: u8, rank: u8) -> usize {
    rank as usize * WIDTH as usize + file as usize
}

#[inline]
pub fn in_bounds(file: i8, rank: i8) -> bool {
    (0..WIDTH as i8).contains(&file) && (0..HEIGHT as i8).contains(&rank)
}

/// A coordinate on the board. Always within 8x8 once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        (file < WIDTH && rank < HEIGHT).then_some(Square { file, rank })
    }

    /// Panics on indices outside 0..64.
    pub fn from_index(index: usize) -> Square {
        assert!(index < 64, "square index {index} out of range");
        Square {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        }
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn index(self) -> usize {
        square_index(self.file, self.rank)
    }

    /// Square displaced by (`df`, `dr`), or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if in_bounds(file, rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Rank 8 down to rank 1, file a to h within each rank.
    pub fn scan_order() -> impl Iterator<Item = Square> {
        (0..HEIGHT)
            .rev()
            .flat_map(|rank| (0..WIDTH).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !(b'a'..=b'h').contains(&bytes[0]) || !(b'1'..=b'8').contains(&bytes[1])
        {
            return Err(BoardError::InvalidSquare(s.to_string()));
        }
        Ok(Square {
            file: bytes[0] - b'a',
            rank: bytes[1] - b'1',
        })
    }
}

/// A candidate move: the piece as it stood before moving, origin and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

pub type MoveList = Vec<Move>;

impl Move {
    pub const fn new(piece: Piece, from: Square, to: Square) -> Self {
        Self { piece, from, to }
    }

    /// Coordinate notation, e.g. "e2e4".
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} to {}", self.piece, self.from, self.to)
    }
}

/// One move per line, in list order.
pub fn render_move_list(moves: &[Move]) -> String {
    moves.iter().map(|mv| format!("{mv}\n")).collect()
}

/// Mailbox board: 64 squares plus the side to move.
///
/// `Board` is `Copy`; simulating a move always works on a private copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
    pub side: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    // Board vuota, White al tratto
    pub fn new() -> Self {
        Self {
            squares: [None; 64],
            side: Color::White,
        }
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    pub fn clear(&mut self, sq: Square) {
        self.squares[sq.index()] = None;
    }

    /// First square in index order (a1, b1, ...) holding a king of `color`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(PieceKind::King, color));
        self.squares
            .iter()
            .position(|&p| p == king)
            .map(Square::from_index)
    }

    /// Builds a board from the piece-placement field. Anything after the
    /// first whitespace is ignored; the side to move stays White.
    pub fn from_placement(placement: &str) -> BoardResult<Board> {
        let field = placement
            .split_whitespace()
            .next()
            .ok_or(BoardError::EmptyPlacement)?;

        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != HEIGHT as usize {
            return Err(BoardError::RankCount(rows.len()));
        }

        let mut board = Board::new();
        // rank8 .. rank1
        for (row, text) in rows.iter().enumerate() {
            let rank = HEIGHT - 1 - row as u8;
            let label = rank + 1;
            let mut file: u8 = 0;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(BoardError::InvalidRun { ch, rank: label });
                    }
                    file += run as u8;
                } else {
                    let piece =
                        Piece::from_char(ch).ok_or(BoardError::UnknownPiece { ch, rank: label })?;
                    if file >= WIDTH {
                        return Err(BoardError::RankOverflow { rank: label });
                    }
                    board.set_piece(Square { file, rank }, piece);
                    file += 1;
                }
                if file > WIDTH {
                    return Err(BoardError::RankOverflow { rank: label });
                }
            }
            if file != WIDTH {
                return Err(BoardError::RankUnderfilled { rank: label, files: file });
            }
        }

        tracing::debug!(pieces = board.piece_count(), "placement parsed");
        Ok(board)
    }

    /// Placement field followed by an optional side field (`w` / `b`).
    /// Castling, en-passant and clock fields are accepted and ignored.
    pub fn from_fen(fen: &str) -> BoardResult<Board> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(BoardError::EmptyPlacement)?;
        let mut board = Board::from_placement(placement)?;
        if let Some(side) = parts.next() {
            board.side = side.parse()?;
        }
        Ok(board)
    }

    /// Placement field with digit runs for empty squares.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0..HEIGHT).rev() {
            let mut run = 0u8;
            for file in 0..WIDTH {
                match self.squares[square_index(file, rank)] {
                    Some(piece) => {
                        if run > 0 {
                            out.push((b'0' + run) as char);
                            run = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push((b'0' + run) as char);
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|p| p.is_some()).count()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Self> {
        Board::from_fen(s)
    }
}

// Griglia: rank 8 in alto, '.' per le case vuote
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..HEIGHT).rev() {
            for file in 0..WIDTH {
                match self.squares[square_index(file, rank)] {
                    Some(piece) => write!(f, "{} ", piece)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
