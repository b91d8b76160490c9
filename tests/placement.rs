use scacchiera::board::{Board, Color, Piece, PieceKind, Square};
use scacchiera::error::BoardError;

#[test]
fn placement_round_trips() {
    let placements = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "8/8/8/2k5/3b4/8/1P6/K7",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
        "8/8/8/8/8/8/8/8",
        "7k/6pp/8/8/8/8/PP6/K7",
    ];
    for placement in placements {
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.placement(), placement);
        assert_eq!(Board::from_placement(&board.placement()).unwrap(), board);
    }
}

#[test]
fn split_digit_runs_are_normalised() {
    let board = Board::from_placement("11111111/8/8/8/8/8/8/K1111111").unwrap();
    assert_eq!(board.placement(), "8/8/8/8/8/8/8/K7");
}

#[test]
fn fen_side_field_is_read() {
    let board = Board::from_fen("8/8/8/8/8/8/8/K6k b KQkq - 0 1").unwrap();
    assert_eq!(board.side, Color::Black);
    let board: Board = "8/8/8/8/8/8/8/K6k".parse().unwrap();
    assert_eq!(board.side, Color::White);
    // from_placement never looks at the side field
    let board = Board::from_placement("8/8/8/8/8/8/8/K6k b").unwrap();
    assert_eq!(board.side, Color::White);
    assert_eq!(
        Board::from_fen("8/8/8/8/8/8/8/K6k x"),
        Err(BoardError::InvalidSide("x".to_string()))
    );
}

#[test]
fn letters_map_to_kind_and_color() {
    let board = Board::from_placement("pnbrqk2/8/8/8/8/8/8/PNBRQK2").unwrap();
    let kinds = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
    for (file, kind) in kinds.into_iter().enumerate() {
        let white = Square::new(file as u8, 0).unwrap();
        let black = Square::new(file as u8, 7).unwrap();
        assert_eq!(board.piece_on(white), Some(Piece::new(kind, Color::White)));
        assert_eq!(board.piece_on(black), Some(Piece::new(kind, Color::Black)));
    }
}

#[test]
fn malformed_placements_are_rejected() {
    let cases = [
        ("", BoardError::EmptyPlacement),
        ("8/8/8/8/8/8/8", BoardError::RankCount(7)),
        ("8/8/8/8/8/8/8/8/8", BoardError::RankCount(9)),
        ("8/8/8/8/8/8/8/K6X", BoardError::UnknownPiece { ch: 'X', rank: 1 }),
        ("8/8/8/8/8/8/8/K6.", BoardError::UnknownPiece { ch: '.', rank: 1 }),
        ("9/8/8/8/8/8/8/8", BoardError::InvalidRun { ch: '9', rank: 8 }),
        ("8/0K7/8/8/8/8/8/8", BoardError::InvalidRun { ch: '0', rank: 7 }),
        ("8/8/8/8/8/8/8/K8", BoardError::RankOverflow { rank: 1 }),
        ("8/8/8/8/8/8/8/KKKKKKKKK", BoardError::RankOverflow { rank: 1 }),
        ("8/8/8/7/8/8/8/8", BoardError::RankUnderfilled { rank: 5, files: 7 }),
    ];
    for (placement, expected) in cases {
        assert_eq!(Board::from_placement(placement), Err(expected), "{placement:?}");
    }
}

#[test]
fn square_text_is_checked() {
    assert_eq!("h8".parse::<Square>().unwrap().index(), 63);
    for bad in ["", "i1", "a9", "a10", "A1"] {
        assert_eq!(
            bad.parse::<Square>(),
            Err(BoardError::InvalidSquare(bad.to_string()))
        );
    }
}
