use crate::dictionary::WeightMode;
use crate::error::ConfigError;
use crate::utilities::DEFAULT_BOARD_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// the word list used when nothing else is configured
pub const DEFAULT_WORD_SOURCE: &str = "words.dat";

/// engine settings, read from a toml file and/or the command line
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// word lists, compiled in order
    pub word_sources: Vec<PathBuf>,
    pub board_size: usize,
    /// fixed seed for reproducible boards
    pub seed: Option<u64>,
    pub weight_mode: WeightMode,
    /// solver worker threads, defaults to the available parallelism
    pub threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            word_sources: vec![PathBuf::from(DEFAULT_WORD_SOURCE)],
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
            weight_mode: WeightMode::default(),
            threads: None,
        }
    }
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EngineConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::InvalidBoardSize);
        }
        if self.word_sources.is_empty() {
            return Err(ConfigError::NoWordSources);
        }
        Ok(())
    }

    /// configured thread count, else the machine's available parallelism
    pub fn worker_threads(&self) -> usize {
        match self.threads {
            Some(n) => n.max(1),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}
