use anyhow::Result;
use boggle_solver::letter::{ALPHABET, ALPHABET_LENGTH};
use boggle_solver::{Board, Dictionary, WeightMode};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate many boards from the given word lists and compare observed tile
/// frequencies against the compiled letter weights
#[derive(Parser)]
struct Args {
    /// word lists, compiled in order
    #[arg(required = true)]
    wordlists: Vec<PathBuf>,

    #[arg(long, default_value = "per-source")]
    weight_mode: WeightMode,

    /// number of boards to generate
    #[arg(short, long, default_value_t = 4_000)]
    boards: usize,

    #[arg(short, long, default_value_t = 5)]
    size: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let dictionary = Dictionary::from_files(&args.wordlists, args.weight_mode)?;
    println!(
        "compiled {} words from {} word list(s) ({} weights)",
        dictionary.word_count(),
        args.wordlists.len(),
        args.weight_mode
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut observed = [0usize; ALPHABET_LENGTH];
    for _ in 0..args.boards {
        let board = Board::generate(dictionary.weights(), args.size, &mut rng)?;
        for (total, count) in observed.iter_mut().zip(board.letter_counts()) {
            *total += count;
        }
    }

    let tiles: usize = observed.iter().sum();
    println!("{tiles} tiles over {} boards", args.boards);
    println!("letter  expected  observed  difference");
    for letter in ALPHABET {
        let expected = dictionary.weights().probability(letter);
        let actual = observed[letter.index()] as f64 / tiles.max(1) as f64;
        println!(
            "{letter:>6}  {expected:>8.4}  {actual:>8.4}  {:>+10.4}",
            actual - expected
        );
    }
    Ok(())
}
