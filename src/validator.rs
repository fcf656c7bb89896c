use crate::adjacency::are_adjacent;
use crate::board::{Board, Coord};
use crate::dictionary::{Dictionary, TrieNode};
use std::collections::HashSet;
use std::fmt;

/// why a path cannot spell (the start of) any dictionary word
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    DuplicateCoordinate,
    NonAdjacentStep,
    LetterNotInDictionary,
    OutOfBounds,
    EmptyPath,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            InvalidReason::DuplicateCoordinate => "tile already used",
            InvalidReason::NonAdjacentStep => "tile is not adjacent to the previous tile",
            InvalidReason::LetterNotInDictionary => "no word continues with this letter",
            InvalidReason::OutOfBounds => "tile is off the board",
            InvalidReason::EmptyPath => "no tiles selected",
        };
        write!(f, "{reason}")
    }
}

/// the outcome of checking a path against a board and dictionary
#[derive(Clone, Debug)]
pub enum ValidationResult<'a> {
    /// the path spells a complete word. `node` is kept so searches can carry on
    /// to longer words through it.
    Word { word: String, node: TrieNode<'a> },
    /// the path spells a prefix of some word but not a word itself
    PrefixNode(TrieNode<'a>),
    Invalid(InvalidReason),
}

impl<'a> ValidationResult<'a> {
    pub fn is_valid(&self) -> bool {
        !matches!(self, ValidationResult::Invalid(_))
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            ValidationResult::Word { word, .. } => Some(word),
            _ => None,
        }
    }

    pub fn node(&self) -> Option<&TrieNode<'a>> {
        match self {
            ValidationResult::Word { node, .. } | ValidationResult::PrefixNode(node) => Some(node),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationResult::Invalid(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// check `path` on `board`: no repeated tiles, every step adjacent, and the letters
/// spell a walk from the root of the dictionary trie
pub fn validate<'a>(
    path: &[Coord],
    board: &Board,
    dictionary: &'a Dictionary,
) -> ValidationResult<'a> {
    if path.is_empty() {
        return ValidationResult::Invalid(InvalidReason::EmptyPath);
    }

    if !path.iter().all(|coord| board.contains(*coord)) {
        return ValidationResult::Invalid(InvalidReason::OutOfBounds);
    }

    if path.len() > 1 {
        let mut seen = HashSet::with_capacity(path.len());
        if !path.iter().all(|coord| seen.insert(*coord)) {
            return ValidationResult::Invalid(InvalidReason::DuplicateCoordinate);
        }
    }

    if path
        .windows(2)
        .any(|pair| !are_adjacent(pair[0], pair[1], board.size()))
    {
        return ValidationResult::Invalid(InvalidReason::NonAdjacentStep);
    }

    let mut result = ValidationResult::PrefixNode(dictionary.root());
    for coord in path {
        let next = match &result {
            ValidationResult::Word { node, .. } | ValidationResult::PrefixNode(node) => {
                step(node, *coord, board)
            }
            ValidationResult::Invalid(_) => break,
        };
        result = next;
    }
    result
}

/// validate `path` with `next` appended, where `path` is already known to be valid
/// and `node` is the trie node it reached (the root for an empty path).
/// gives the same answer as `validate` on the extended path without re-walking it.
pub fn extend<'a>(
    path: &[Coord],
    node: &TrieNode<'a>,
    next: Coord,
    board: &Board,
) -> ValidationResult<'a> {
    if !board.contains(next) {
        return ValidationResult::Invalid(InvalidReason::OutOfBounds);
    }
    if path.contains(&next) {
        return ValidationResult::Invalid(InvalidReason::DuplicateCoordinate);
    }
    if let Some(last) = path.last() {
        if !are_adjacent(*last, next, board.size()) {
            return ValidationResult::Invalid(InvalidReason::NonAdjacentStep);
        }
    }
    step(node, next, board)
}

/// follow the board letter at `coord` from `node`
fn step<'a>(node: &TrieNode<'a>, coord: Coord, board: &Board) -> ValidationResult<'a> {
    let Some(letter) = board.get(coord) else {
        return ValidationResult::Invalid(InvalidReason::OutOfBounds);
    };
    match node.child(letter) {
        Some(child) => match child.word() {
            Some(word) => ValidationResult::Word { word, node: child },
            None => ValidationResult::PrefixNode(child),
        },
        None => ValidationResult::Invalid(InvalidReason::LetterNotInDictionary),
    }
}
