use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// startup failures while compiling word lists. none of these leave a partial dictionary behind.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("word source {source_name} could not be read")]
    SourceUnreadable {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("word {word:?} on line {line} of {source_name} contains {character:?}, only the letters a-z are accepted")]
    InvalidWord {
        source_name: String,
        line: usize,
        word: String,
        character: char,
    },

    #[error("no letters were read from the word sources")]
    NoLetters,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("board size must be at least 1")]
    InvalidBoardSize,

    #[error("at least one word source is required")]
    NoWordSources,
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("board text has {rows} rows but row {row} has {len} letters")]
    NotSquare { rows: usize, row: usize, len: usize },

    #[error("board text contains {0:?}, only the letters a-z are accepted")]
    InvalidLetter(char),
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("failed to spawn solver worker thread")]
    Spawn(#[source] io::Error),

    #[error("solver worker thread {0} panicked")]
    WorkerPanicked(String),
}

/// anything that stops a session from starting
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Board(#[from] BoardError),
}
