use crate::adjacency::neighbors;
use crate::board::{Board, Coord};
use crate::dictionary::{Dictionary, TrieNode};
use crate::validator::{extend, validate, ValidationResult};
use tracing::debug;

pub mod parallel;

pub use parallel::{ParallelSolver, Solution};

/// shortest path that may be reported as a found word
pub const MIN_REPORTED_PATH_LEN: usize = 2;

/// finds every dictionary word traceable on a board. words reachable by several
/// distinct paths are reported once per path.
pub struct Solver<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
}

impl<'a> Solver<'a> {
    pub fn new(board: &'a Board, dictionary: &'a Dictionary) -> Self {
        Self { board, dictionary }
    }

    /// every word spelled by a path that extends `path`. an invalid `path` finds nothing.
    pub fn words_from(&self, path: &[Coord]) -> Vec<String> {
        let mut words = Vec::new();
        let node = match validate(path, self.board, self.dictionary) {
            ValidationResult::Word { node, .. } | ValidationResult::PrefixNode(node) => node,
            ValidationResult::Invalid(_) => return words,
        };

        // dfs over (path, trie node) pairs. depth is bounded by the tile count
        // as tiles never repeat.
        let mut search_stack: Vec<(Vec<Coord>, TrieNode<'a>)> = vec![(path.to_vec(), node)];
        while let Some((cur_path, cur_node)) = search_stack.pop() {
            // a node with no children cannot lead to any longer word
            if !cur_node.has_children() {
                continue;
            }
            let Some(last) = cur_path.last() else {
                continue;
            };

            for next in neighbors(*last, self.board.size()) {
                if cur_path.contains(&next) {
                    continue;
                }

                let (node, word) = match extend(&cur_path, &cur_node, next, self.board) {
                    ValidationResult::Word { word, node } => (node, Some(word)),
                    ValidationResult::PrefixNode(node) => (node, None),
                    // dead branch
                    ValidationResult::Invalid(_) => continue,
                };

                let mut new_path = cur_path.clone();
                new_path.push(next);
                if let Some(word) = word {
                    if new_path.len() >= MIN_REPORTED_PATH_LEN {
                        words.push(word);
                    }
                }
                search_stack.push((new_path, node));
            }
        }
        words
    }

    /// words found from the single tile at `start`
    pub fn words_from_cell(&self, start: Coord) -> Vec<String> {
        self.words_from(&[start])
    }

    /// every word on the board, one entry per distinct path, grouped by starting tile
    /// in row-major order
    pub fn solve_board(&self) -> Vec<String> {
        let words: Vec<String> = self
            .board
            .coords()
            .flat_map(|start| self.words_from_cell(start))
            .collect();
        debug!(words = words.len(), "solved board");
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::unique_words;
    use std::collections::HashMap;

    fn path(coords: &[(usize, usize)]) -> Vec<Coord> {
        coords.iter().copied().map(Coord::from).collect()
    }

    fn counts(words: &[String]) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for word in words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_end_to_end() {
        // c a r
        // t q t
        // x y z
        let board: Board = "car/tqt/xyz".parse().unwrap();
        let dictionary = Dictionary::from_words(["cat", "car", "cart"]).unwrap();
        let solver = Solver::new(&board, &dictionary);

        let words = solver.solve_board();
        let counts = counts(&words);
        // cat via (0,0) (0,1) (1,0)
        assert!(counts.contains_key("cat"));
        // car via (0,0) (0,1) (0,2), then cart through (1,2).
        // (0,1) also reaches (1,2) directly, spelling a second "cat"
        assert_eq!(counts.get("car"), Some(&1));
        assert_eq!(counts.get("cart"), Some(&1));
        assert_eq!(counts.get("cat"), Some(&2));
        assert!(!counts.contains_key("ca"));
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn test_single_letter_words_never_reported() {
        let board: Board = "ab/ba".parse().unwrap();
        let dictionary = Dictionary::from_words(["a", "ab"]).unwrap();
        let solver = Solver::new(&board, &dictionary);

        let words = solver.solve_board();
        assert!(!words.iter().any(|w| w == "a"));
        // (0,0) -> (0,1), (0,0) -> (1,0), (1,1) -> (0,1), (1,1) -> (1,0)
        assert_eq!(words, vec!["ab"; 4]);

        assert!(solver.words_from(&path(&[(0, 0)])).iter().all(|w| w == "ab"));
    }

    #[test]
    fn test_duplicates_preserved() {
        // every path through three distinct 'a' tiles spells "aaa"
        let board: Board = "aa/aa".parse().unwrap();
        let dictionary = Dictionary::from_words(["aa", "aaa"]).unwrap();
        let solver = Solver::new(&board, &dictionary);

        let words = solver.solve_board();
        let counts = counts(&words);
        // 4 starts x 3 neighbours for "aa", then 2 remaining tiles for "aaa"
        assert_eq!(counts.get("aa"), Some(&12));
        assert_eq!(counts.get("aaa"), Some(&24));
        assert_eq!(unique_words(&words), vec!["aa", "aaa"]);
    }

    #[test]
    fn test_words_from_longer_path() {
        let board: Board = "car/tqt/xyz".parse().unwrap();
        let dictionary = Dictionary::from_words(["cat", "car", "cart"]).unwrap();
        let solver = Solver::new(&board, &dictionary);

        let mut words = solver.words_from(&path(&[(0, 0), (0, 1)]));
        words.sort();
        assert_eq!(words, vec!["car", "cart", "cat", "cat"]);

        // the starting path is never reported itself, only its extensions
        assert_eq!(
            solver.words_from(&path(&[(0, 0), (0, 1), (0, 2)])),
            vec!["cart"]
        );
    }

    #[test]
    fn test_words_from_invalid_path() {
        let board: Board = "car/tqt/xyz".parse().unwrap();
        let dictionary = Dictionary::from_words(["cat", "car", "cart"]).unwrap();
        let solver = Solver::new(&board, &dictionary);

        assert!(solver.words_from(&path(&[(0, 0), (2, 2)])).is_empty());
        assert!(solver.words_from(&path(&[(0, 0), (0, 1), (0, 0)])).is_empty());
        assert!(solver.words_from(&path(&[(2, 2)])).is_empty());
        assert!(solver.words_from(&[]).is_empty());
    }

    #[test]
    fn test_found_words_are_valid_paths() {
        let board: Board = "stop/tapo/oats/pots".parse().unwrap();
        let dictionary =
            Dictionary::from_words(["stop", "spot", "pots", "tops", "post", "oats", "tao", "at"])
                .unwrap();
        let solver = Solver::new(&board, &dictionary);

        let words = solver.solve_board();
        assert!(!words.is_empty());
        for word in &words {
            assert!(dictionary.contains(word), "{word} not in dictionary");
            assert!(word.len() >= MIN_REPORTED_PATH_LEN);
        }
        assert!(words.iter().any(|w| w == "stop"));
        assert!(words.iter().any(|w| w == "at"));
    }
}
