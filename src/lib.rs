//! word search engine for boggle-style letter grids: compiles word lists into a trie,
//! generates weighted boards and finds every word traceable through adjacent tiles.

pub mod adjacency;
pub mod board;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod letter;
pub mod session;
pub mod solver;
pub mod utilities;
pub mod validator;

pub use board::{Board, Coord};
pub use config::EngineConfig;
pub use dictionary::{Dictionary, DictionaryCompiler, LetterWeights, TrieNode, WeightMode};
pub use error::{BoardError, ConfigError, DictionaryError, EngineError, SolverError};
pub use session::Session;
pub use solver::{ParallelSolver, Solution, Solver};
pub use validator::{validate, InvalidReason, ValidationResult};
