use anyhow::{Context, Result};
use boggle_solver::utilities::{score_words, unique_words};
use boggle_solver::{
    Board, Coord, Dictionary, EngineConfig, Session, ValidationResult, WeightMode,
};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering as MemoryOrdering};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "boggle-solver",
    about = "Generate letter grids and find every word traceable through adjacent tiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// TOML config file; command line flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// word list, one word per line (repeatable, compiled in order)
    #[arg(short = 'w', long = "wordlist", global = true)]
    wordlists: Vec<PathBuf>,

    /// board width and height
    #[arg(short, long, global = true)]
    size: Option<usize>,

    /// seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// solver worker threads
    #[arg(short, long, global = true)]
    threads: Option<usize>,

    /// how letter weights combine across word lists: per-source or union
    #[arg(long, global = true)]
    weight_mode: Option<WeightMode>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a board and every word on it
    Solve {
        /// solve this board instead of a random one, rows separated by '/' (e.g. car/tqt/xyz)
        #[arg(short, long)]
        board: Option<String>,

        /// list each word once, sorted
        #[arg(short, long)]
        unique: bool,
    },

    /// Trace words interactively by entering tile coordinates
    Play,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match cli.command {
        Command::Solve { board, unique } => {
            let session = match board {
                Some(rows) => {
                    let board: Board = rows.parse().context("invalid --board")?;
                    let dictionary =
                        Dictionary::from_files(&config.word_sources, config.weight_mode)?;
                    Session::with_board(dictionary, board, StdRng::from_os_rng())
                }
                None => Session::from_config(&config)?,
            };
            run_solve(&session, config.worker_threads(), unique)
        }
        Command::Play => {
            let mut session = Session::from_config(&config)?;
            run_play(&mut session, config.board_size, io::stdin().lock())
        }
    }
}

/// the config file (or defaults) with command line overrides applied
fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    if !cli.wordlists.is_empty() {
        config.word_sources = cli.wordlists.clone();
    }
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.threads.is_some() {
        config.threads = cli.threads;
    }
    if let Some(mode) = cli.weight_mode {
        config.weight_mode = mode;
    }

    config.validate()?;
    Ok(config)
}

fn run_solve(session: &Session, threads: usize, unique: bool) -> Result<()> {
    // set up early termination infrastructure
    let terminator = Arc::new(AtomicBool::new(false));
    let terminator_ref = terminator.clone();
    ctrlc::set_handler(move || terminator_ref.store(true, MemoryOrdering::SeqCst))
        .context("failed to set ctrl-c handler")?;

    println!("{}\n", session.board());

    let solution = session.solve_board_parallel(threads, terminator)?;
    let listed = if unique {
        unique_words(&solution.words)
    } else {
        solution.words.clone()
    };
    for word in &listed {
        println!("{word}");
    }

    println!(
        "\n{} words ({} distinct), score {}",
        solution.words.len(),
        unique_words(&solution.words).len(),
        score_words(&solution.words)
    );
    if solution.interrupted {
        println!(
            "interrupted after searching {} of {} tiles",
            solution.cells_searched, solution.total_cells
        );
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Move(Coord),
    Reset,
    New,
    Solve,
    Found,
    Help,
    Quit,
}

fn parse_command(line: &str, move_regex: &Regex) -> Option<ShellCommand> {
    if let Some(captures) = move_regex.captures(line) {
        let row = captures.get(1)?.as_str().parse().ok()?;
        let col = captures.get(2)?.as_str().parse().ok()?;
        return Some(ShellCommand::Move(Coord::new(row, col)));
    }

    match line.trim().to_lowercase().as_str() {
        "reset" | "r" => Some(ShellCommand::Reset),
        "new" | "n" => Some(ShellCommand::New),
        "solve" | "s" => Some(ShellCommand::Solve),
        "found" | "f" => Some(ShellCommand::Found),
        "help" | "h" | "?" => Some(ShellCommand::Help),
        "quit" | "q" | "exit" => Some(ShellCommand::Quit),
        _ => None,
    }
}

const PLAY_HELP: &str = "enter a tile as `ROW COL` or `ROW,COL` (0-based) to extend the current path.\n\
commands: reset (clear the path), new (new board), solve (show every word), found (words so far), quit";

fn run_play<R: BufRead>(session: &mut Session, size: usize, input: R) -> Result<()> {
    let move_regex = Regex::new(r"^\s*(\d+)\s*[,\s]\s*(\d+)\s*$").context("invalid move regex")?;

    println!("{}\n\n{PLAY_HELP}", session.board());
    prompt()?;

    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        match parse_command(&line, &move_regex) {
            Some(ShellCommand::Move(coord)) => {
                let message = match session.append_move(coord) {
                    ValidationResult::Word { word, .. } => Some(format!("word: {word}")),
                    ValidationResult::PrefixNode(node) => Some(format!("prefix: {}", node.prefix())),
                    ValidationResult::Invalid(reason) => {
                        println!("invalid: {reason}");
                        None
                    }
                };
                match message {
                    Some(message) => println!("{message}"),
                    // reject the tile and keep the path that was valid
                    None => {
                        session.retract_move();
                    }
                }
            }
            Some(ShellCommand::Reset) => {
                session.reset_moves();
                println!("path cleared\n{}", session.board());
            }
            Some(ShellCommand::New) => {
                let board = session.new_game(size)?;
                println!("{board}");
            }
            Some(ShellCommand::Solve) => {
                let words = unique_words(&session.solve_board());
                println!("{} distinct words: {}", words.len(), words.join(" "));
            }
            Some(ShellCommand::Found) => {
                println!(
                    "found {} (score {}): {}",
                    session.found_words().len(),
                    session.score(),
                    session.found_words().join(" ")
                );
            }
            Some(ShellCommand::Help) => println!("{PLAY_HELP}"),
            Some(ShellCommand::Quit) => break,
            None => println!("unrecognised input {:?}, type help", line.trim()),
        }
        prompt()?;
    }

    info!(
        words = session.found_words().len(),
        score = session.score(),
        "game over"
    );
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("failed to flush stdout")
}
