//! Scacchiera command line: load a position, play coordinate moves, list moves.

use anyhow::Context;
use clap::Parser;
use scacchiera::board::{render_move_list, Board, Color, START_FEN};
use scacchiera::movegen::{list_legal_moves_parallel, list_pseudo_legal_moves, parse_uci_move, play};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Piece placement, optionally followed by the side field (w/b)
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    /// Side to move; overrides the side field of --fen
    #[arg(short, long)]
    side: Option<Color>,

    /// Coordinate moves (e.g. e2e4) played in order before listing
    #[arg(short, long, num_args = 1..)]
    moves: Vec<String>,

    /// Also print the pseudo-legal move list
    #[arg(short, long)]
    pseudo: bool,

    /// Worker threads for the legality filter
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    scacchiera::init();

    let mut board = Board::from_fen(&args.fen).with_context(|| format!("loading '{}'", args.fen))?;
    if let Some(side) = args.side {
        board.side = side;
    }
    for uci in &args.moves {
        let mv = parse_uci_move(&board, uci).with_context(|| format!("playing '{uci}'"))?;
        board = play(&board, &mv);
    }

    println!("Board ({:?} to move):", board.side);
    println!("{board}");

    let pseudo = list_pseudo_legal_moves(&board);
    if args.pseudo {
        println!("Pseudo-legal moves for {:?}:", board.side);
        print!("{}", render_move_list(&pseudo));
        println!();
    }

    let legal = list_legal_moves_parallel(&board, &pseudo, args.threads);
    println!("Legal moves for {:?}:", board.side);
    print!("{}", render_move_list(&legal));
    Ok(())
}
