//! Count the leaf nodes of the legal move tree from a position

use std::time::Instant;

use board::STARTING_FEN;
use clap::Parser;
use mailbox::{perft, perft_divide, Position};

#[derive(Debug, Parser)]
#[command(about = "Count the positions reachable in a fixed number of plies")]
struct Args {
    /// The position to start from
    #[arg(long, default_value = STARTING_FEN)]
    fen: String,

    /// How many plies to look ahead
    #[arg(short, long, default_value_t = 4)]
    depth: u32,

    /// Print the count below each legal move as well
    #[arg(long)]
    divide: bool,
}

fn main() -> Result<(), mailbox::Error> {
    let args = Args::parse();
    let position = Position::from_fen(&args.fen)?;
    let start = Instant::now();

    let nodes = if args.divide {
        let divided = perft_divide(&position, args.depth);
        for (mv, count) in &divided {
            println!("{mv}: {count}");
        }
        println!();
        divided.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(&position, args.depth)
    };

    let seconds = start.elapsed().as_secs_f64();
    println!("Nodes searched: {nodes}");
    println!(
        "{seconds:.3}s ({:.0} kN/s)",
        nodes as f64 / seconds.max(f64::EPSILON) / 1000.0
    );
    Ok(())
}
