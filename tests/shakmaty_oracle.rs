use scacchiera::board::Board;
use scacchiera::movegen::legal_moves;
use scacchiera::perft::perft;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position};

// Positions with no castling rights, no en-passant square and no pawn able to
// promote within the searched depth, where both rule sets must agree.
const POSITIONS: [(&str, &str); 9] = [
    ("pinned pawn", "8/8/8/2k5/3b4/8/1P6/K7 w - - 0 1"),
    ("pinned bishop", "4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1"),
    ("knight and rook", "r3k3/1pp5/8/3N4/8/8/5PP1/4K2R w - - 0 1"),
    ("black queen", "4k3/8/8/3q4/8/8/3P4/4K3 b - - 0 1"),
    ("pawn captures", "4k3/8/8/8/2p1p3/3P4/8/4K3 w - - 0 1"),
    ("knights", "1n2k3/8/8/8/8/8/8/1N2K1N1 w - - 0 1"),
    ("rook check", "4k3/8/8/8/8/8/4r3/4K3 w - - 0 1"),
    ("start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"),
    (
        "italian",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 0 1",
    ),
];

fn shakmaty_position(fen_str: &str) -> Chess {
    let fen: Fen = fen_str.parse().unwrap();
    fen.into_position(CastlingMode::Standard)
        .expect("Shakmaty should accept FEN")
}

fn shakmaty_perft(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += shakmaty_perft(&new_pos, depth - 1);
    }
    nodes
}

#[test]
fn legal_move_sets_match_shakmaty() {
    scacchiera::init();
    for (name, fen_str) in POSITIONS {
        let board = Board::from_fen(fen_str).expect("Valid FEN");
        let mut ours: Vec<String> = legal_moves(&board).iter().map(|m| m.to_uci()).collect();
        ours.sort();

        let pos = shakmaty_position(fen_str);
        let mut expected: Vec<String> = pos
            .legal_moves()
            .iter()
            .map(|m| m.to_uci(CastlingMode::Standard).to_string())
            .collect();
        expected.sort();

        assert_eq!(ours, expected, "legal moves differ in {name}");
    }
}

#[test]
fn perft_matches_shakmaty() {
    scacchiera::init();
    let cases = [
        ("pinned pawn", 3u8),
        ("pinned bishop", 3),
        ("knight and rook", 3),
        ("pawn captures", 3),
        ("knights", 3),
        ("start", 3),
    ];
    for (name, depth) in cases {
        let (_, fen_str) = POSITIONS
            .iter()
            .find(|(n, _)| *n == name)
            .expect("known position");
        let board = Board::from_fen(fen_str).expect("Valid FEN");
        let got = perft(&board, depth);
        let expected = shakmaty_perft(&shakmaty_position(fen_str), depth);
        assert_eq!(
            got, expected,
            "perft mismatch for {name} at depth {depth}: got {got} expected {expected}"
        );
    }
}
