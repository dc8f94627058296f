use clap::{Parser, Subcommand};
use patzer::board::Board;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plays a game of random legal moves until mate, stalemate or the
    /// half-move limit
    Playout {
        /// Maximum number of half-moves
        #[arg(short, long, default_value_t = 200)]
        moves: usize,
        /// RNG seed for reproducible games
        #[arg(short, long)]
        seed: Option<u64>,
        /// Only print the final position and result
        #[arg(short, long)]
        quiet: bool,
    },
    /// Counts legal move sequences from the starting position up to a
    /// given depth
    Count {
        depth: u8,
        /// Shows the count per depth up to the maximum
        #[arg(short, long)]
        iterative: bool,
    },
}

pub fn main() {
    env_logger::init();
    let args = Arguments::parse();

    match args.command {
        Command::Playout { moves, seed, quiet } => playout(moves, seed, quiet),
        Command::Count { depth, iterative } => {
            let board = Board::new();
            for depth in (if iterative { 1 } else { depth })..=depth {
                println!("depth {depth}: {} games", count_games(&board, depth));
            }
        }
    }
}

fn playout(max_moves: usize, seed: Option<u64>, quiet: bool) {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    println!("seed {seed}");

    for half_move in 0..max_moves {
        let colour = board.side_to_move();
        let moves = board.legal_moves(colour);
        let &(from, to) = &moves[rng.gen_range(0..moves.len())];
        board.make_move(from, to);

        if !quiet {
            let record = board.moves().last().expect("a move was just recorded");
            println!(
                "{}{}. {}{}{}{}",
                half_move / 2 + 1,
                if colour.is_black() { "..." } else { "" },
                record.piece.kind().key(),
                if record.capture { "x" } else { "" },
                to,
                if record.checkmate {
                    "#"
                } else if record.check {
                    "+"
                } else {
                    ""
                },
            );
        }

        if board.is_checkmate() {
            println!("{board}\n{colour} delivers checkmate.");
            return;
        }
        if board.is_draw() {
            println!("{board}\nStalemate: {} has no move.", colour.inverse());
            return;
        }
    }
    println!("{board}\nNo result after {max_moves} half-moves.");
}

/// Counts the leaves of the legal game tree, cloning the board for each
/// branch. Every clone re-runs full legality and classification, so this
/// doubles as a consistency workout for the whole engine. Expect depths
/// beyond 4 to take a while.
fn count_games(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let colour = board.side_to_move();
    if board.is_checkmate() || board.is_draw() {
        return 1;
    }
    board
        .legal_moves(colour)
        .into_iter()
        .map(|(from, to)| {
            let mut next = board.clone();
            next.make_move(from, to);
            count_games(&next, depth - 1)
        })
        .sum()
}
