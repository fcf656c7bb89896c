use crate::board::{Board, Coord};
use crate::config::EngineConfig;
use crate::dictionary::Dictionary;
use crate::error::{BoardError, EngineError, SolverError};
use crate::solver::{ParallelSolver, Solution, Solver, MIN_REPORTED_PATH_LEN};
use crate::utilities::score_words;
use crate::validator::{validate, ValidationResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, info};

/// one player's game: the compiled dictionary, the current board and the path being
/// traced on it. the only mutators are `new_game`, `append_move`, `retract_move` and
/// `reset_moves`.
pub struct Session {
    dictionary: Dictionary,
    board: Board,
    path: Vec<Coord>,
    found_words: Vec<String>,
    /// paths that already produced an entry in `found_words`
    found_paths: HashSet<Vec<Coord>>,
    rng: StdRng,
}

impl Session {
    /// start with a freshly generated `size` x `size` board
    pub fn new(dictionary: Dictionary, size: usize, mut rng: StdRng) -> Result<Self, BoardError> {
        let board = Board::generate(dictionary.weights(), size, &mut rng)?;
        Ok(Self::with_board(dictionary, board, rng))
    }

    /// start on a given board
    pub fn with_board(dictionary: Dictionary, board: Board, rng: StdRng) -> Self {
        Self {
            dictionary,
            board,
            path: Vec::new(),
            found_words: Vec::new(),
            found_paths: HashSet::new(),
            rng,
        }
    }

    /// compile the configured word sources and generate the first board
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let dictionary = Dictionary::from_files(&config.word_sources, config.weight_mode)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::new(dictionary, config.board_size, rng)?)
    }

    /// replace the board with a new one drawn from the dictionary's letter weights.
    /// the path and found words are cleared.
    pub fn new_game(&mut self, size: usize) -> Result<&Board, BoardError> {
        self.board = Board::generate(self.dictionary.weights(), size, &mut self.rng)?;
        self.path.clear();
        self.found_words.clear();
        self.found_paths.clear();
        info!(size, "started new game");
        Ok(&self.board)
    }

    /// add `coord` to the current path and validate the whole path. the coordinate is
    /// kept even when the result is invalid; callers decide whether to `retract_move`.
    /// a word is recorded once per distinct path, so retracing the same tiles adds nothing.
    pub fn append_move(&mut self, coord: Coord) -> ValidationResult<'_> {
        self.path.push(coord);
        let result = validate(&self.path, &self.board, &self.dictionary);
        if let ValidationResult::Word { word, .. } = &result {
            if self.path.len() >= MIN_REPORTED_PATH_LEN
                && self.found_paths.insert(self.path.clone())
            {
                self.found_words.push(word.clone());
            }
        }
        debug!(%coord, valid = result.is_valid(), "move appended");
        result
    }

    /// drop the most recent coordinate from the path
    pub fn retract_move(&mut self) -> Option<Coord> {
        self.path.pop()
    }

    /// clear the path, keeping the board
    pub fn reset_moves(&mut self) {
        self.path.clear();
    }

    /// every word on the current board, independent of the current path
    pub fn solve_board(&self) -> Vec<String> {
        Solver::new(&self.board, &self.dictionary).solve_board()
    }

    /// `solve_board` spread over `threads` workers, stoppable through `terminator`
    pub fn solve_board_parallel(
        &self,
        threads: usize,
        terminator: Arc<AtomicBool>,
    ) -> Result<Solution, SolverError> {
        ParallelSolver::new(&self.board, &self.dictionary, threads)
            .with_terminator(terminator)
            .solve()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// words completed by `append_move` since the last new game, in order, one entry per
    /// distinct path
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        score_words(&self.found_words)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
