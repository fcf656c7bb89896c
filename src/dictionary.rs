use crate::error::DictionaryError;
use crate::letter::{to_word, translate_word, Letter, ALPHABET_LENGTH};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};
use trie_rs::inc_search::{Answer, IncSearch};
use trie_rs::{Trie, TrieBuilder};

pub mod weights;

pub use weights::{LetterWeights, WeightMode};

/// the compiled word lists: a letter trie plus the letter weights used to generate boards.
/// immutable once built.
pub struct Dictionary {
    trie: Trie<Letter>,
    weights: LetterWeights,
    letter_counts: [u64; ALPHABET_LENGTH],
    word_count: usize,
}

impl Dictionary {
    /// compile every file in order. any unreadable file aborts the whole compile.
    pub fn from_files<P: AsRef<Path>>(
        paths: &[P],
        mode: WeightMode,
    ) -> Result<Self, DictionaryError> {
        let mut compiler = DictionaryCompiler::new(mode);
        for path in paths {
            compiler.add_file(path)?;
        }
        compiler.finish()
    }

    /// compile a single in-memory source
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = words
            .into_iter()
            .map(|word| word.as_ref().to_owned())
            .collect::<Vec<String>>()
            .join("\n");
        let mut compiler = DictionaryCompiler::new(WeightMode::default());
        compiler.add_source("<memory>", text.as_bytes())?;
        compiler.finish()
    }

    /// the trie root, from which every path validation starts
    pub fn root(&self) -> TrieNode<'_> {
        TrieNode {
            search: self.trie.inc_search(),
            terminal: false,
            extendable: self.word_count > 0,
        }
    }

    /// walk `word` from the root. None if some letter has no edge.
    pub fn lookup(&self, word: &str) -> Option<TrieNode<'_>> {
        let letters = translate_word(&word.trim().to_lowercase()).ok()?;
        letters
            .into_iter()
            .try_fold(self.root(), |node, letter| node.child(letter))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some_and(|node| node.is_terminal())
    }

    /// every distinct word, in trie order
    pub fn words(&self) -> Vec<String> {
        self.trie
            .iter()
            .map(|letters: Vec<Letter>| to_word(&letters))
            .collect()
    }

    /// number of distinct words
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// raw occurrences of each letter over every source
    pub fn letter_counts(&self) -> &[u64; ALPHABET_LENGTH] {
        &self.letter_counts
    }

    pub fn weights(&self) -> &LetterWeights {
        &self.weights
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("word_count", &self.word_count)
            .field("weights", &self.weights)
            .finish()
    }
}

/// a read-only handle on one node of the dictionary trie, i.e. the subtree of every
/// word sharing the prefix spelled so far.
#[derive(Clone)]
pub struct TrieNode<'a> {
    search: IncSearch<'a, Letter, ()>,
    terminal: bool,
    extendable: bool,
}

impl<'a> TrieNode<'a> {
    /// follow the edge labelled `letter`
    pub fn child(&self, letter: Letter) -> Option<TrieNode<'a>> {
        let mut search = self.search.clone();
        let (terminal, extendable) = match search.query(&letter)? {
            Answer::Prefix => (false, true),
            Answer::PrefixAndMatch => (true, true),
            Answer::Match => (true, false),
        };
        Some(Self {
            search,
            terminal,
            extendable,
        })
    }

    /// a complete dictionary word ends here
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// some longer word continues through here
    pub fn has_children(&self) -> bool {
        self.extendable
    }

    /// the letters on the path from the root
    pub fn prefix(&self) -> String {
        let letters: Vec<Letter> = self.search.prefix();
        to_word(&letters)
    }

    /// the terminal value, which always equals the prefix
    pub fn word(&self) -> Option<String> {
        if self.terminal {
            Some(self.prefix())
        } else {
            None
        }
    }
}

impl fmt::Debug for TrieNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("prefix", &self.prefix())
            .field("terminal", &self.terminal)
            .field("extendable", &self.extendable)
            .finish()
    }
}

/// builds a [`Dictionary`] from one or more line-oriented word sources.
/// sources are committed whole: a source that fails leaves the compiler as it was.
pub struct DictionaryCompiler {
    builder: TrieBuilder<Letter>,
    mode: WeightMode,
    letter_counts: [u64; ALPHABET_LENGTH],
    /// per-source running table. holds counts while a source is being read and
    /// cumulative weights between sources.
    running: [f64; ALPHABET_LENGTH],
    sources_read: usize,
    words_read: usize,
}

impl DictionaryCompiler {
    pub fn new(mode: WeightMode) -> Self {
        Self {
            builder: TrieBuilder::new(),
            mode,
            letter_counts: [0; ALPHABET_LENGTH],
            running: [0.0; ALPHABET_LENGTH],
            sources_read: 0,
            words_read: 0,
        }
    }

    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DictionaryError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|source| DictionaryError::SourceUnreadable {
            source_name: source_name.clone(),
            source,
        })?;
        self.add_source(&source_name, BufReader::new(file))
    }

    /// read one word per line (trimmed and lowercased, blank lines skipped).
    /// returns the number of words read from this source.
    pub fn add_source<R: BufRead>(
        &mut self,
        source_name: &str,
        reader: R,
    ) -> Result<usize, DictionaryError> {
        let mut words = Vec::new();
        for (line_idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DictionaryError::SourceUnreadable {
                source_name: source_name.to_owned(),
                source,
            })?;
            let word = line.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            match translate_word(&word) {
                Ok(letters) => words.push(letters),
                Err(character) => {
                    return Err(DictionaryError::InvalidWord {
                        source_name: source_name.to_owned(),
                        line: line_idx + 1,
                        word,
                        character,
                    })
                }
            }
        }

        // every line parsed, commit the source
        let mut running = self.running;
        for letters in &words {
            for letter in letters {
                running[letter.index()] += 1.0;
            }
        }
        if self.mode == WeightMode::PerSource && !weights::accumulate(&mut running) {
            return Err(DictionaryError::NoLetters);
        }
        self.running = running;

        let word_count = words.len();
        for letters in words {
            for letter in &letters {
                self.letter_counts[letter.index()] += 1;
            }
            self.builder.push(letters);
        }
        self.sources_read += 1;
        self.words_read += word_count;

        info!(source = source_name, words = word_count, "compiled word source");
        Ok(word_count)
    }

    pub fn finish(self) -> Result<Dictionary, DictionaryError> {
        if self.sources_read == 0 {
            return Err(DictionaryError::NoLetters);
        }

        let weights = match self.mode {
            WeightMode::PerSource => LetterWeights::from_cumulative(self.running),
            WeightMode::Union => {
                LetterWeights::from_counts(&self.letter_counts).ok_or(DictionaryError::NoLetters)?
            }
        };

        let trie = self.builder.build();
        let word_count = trie.iter().map(|_: Vec<Letter>| ()).count();

        debug!(weights = ?weights, "letter weights");
        info!(
            sources = self.sources_read,
            words = self.words_read,
            distinct = word_count,
            mode = %self.mode,
            "dictionary compiled"
        );

        Ok(Dictionary {
            trie,
            weights,
            letter_counts: self.letter_counts,
            word_count,
        })
    }
}
