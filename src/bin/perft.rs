use anyhow::Context;
use clap::Parser;
use scacchiera::board::{Board, START_FEN};
use scacchiera::perft::{divide, perft};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Print node counts per root move
    #[arg(long)]
    divide: bool,

    /// Also count with shakmaty (only meaningful without castling, en-passant or promotion)
    #[arg(long)]
    compare: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    scacchiera::init();

    let board = Board::from_fen(&args.fen).with_context(|| format!("loading '{}'", args.fen))?;
    println!("Running perft on '{}' at depth {}", args.fen, args.depth);

    let start = std::time::Instant::now();
    let nodes = if args.divide {
        let split = divide(&board, args.depth);
        for (mv, count) in &split {
            println!("{}: {}", mv.to_uci(), count);
        }
        split.iter().map(|(_, count)| count).sum()
    } else {
        perft(&board, args.depth)
    };
    let duration = start.elapsed();
    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        duration.as_millis(),
        nodes as f64 / (duration.as_micros().max(1) as f64)
    );

    if args.compare {
        let fen = shakmaty_fen(&args.fen);
        let fen: Fen = fen.parse().context("shakmaty rejected the FEN")?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| anyhow::anyhow!("shakmaty rejected the position: {e}"))?;
        let expected = perft_shakmaty(&pos, args.depth);
        println!("Shakmaty perft({}) = {} nodes", args.depth, expected);
        if expected != nodes {
            anyhow::bail!("perft mismatch: got {nodes}, shakmaty {expected}");
        }
    }
    Ok(())
}

// Shakmaty vuole tutti i campi: completa con "senza arrocco, senza en-passant"
fn shakmaty_fen(fen: &str) -> String {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().unwrap_or_default();
    let side = parts.next().unwrap_or("w");
    format!("{placement} {side} - - 0 1")
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
