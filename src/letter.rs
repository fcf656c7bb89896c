use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// the board and dictionary alphabet. word lists are case-normalized to lowercase
/// before translation, so only `a..=z` is representable.
pub enum Letter {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
    L = 11,
    M = 12,
    N = 13,
    O = 14,
    P = 15,
    Q = 16,
    R = 17,
    S = 18,
    T = 19,
    U = 20,
    V = 21,
    W = 22,
    X = 23,
    Y = 24,
    Z = 25,
}

pub const ALPHABET_LENGTH: usize = 26;

/// the fixed iteration order used by the weight table
pub const ALPHABET: [Letter; ALPHABET_LENGTH] = [
    Letter::A,
    Letter::B,
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::H,
    Letter::I,
    Letter::J,
    Letter::K,
    Letter::L,
    Letter::M,
    Letter::N,
    Letter::O,
    Letter::P,
    Letter::Q,
    Letter::R,
    Letter::S,
    Letter::T,
    Letter::U,
    Letter::V,
    Letter::W,
    Letter::X,
    Letter::Y,
    Letter::Z,
];

impl Letter {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl From<usize> for Letter {
    fn from(n: usize) -> Letter {
        match ALPHABET.get(n) {
            Some(letter) => *letter,
            None => panic!("Cannot convert values greater than 25 into a letter."),
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    /// case-insensitive; returns the offending character on failure
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Ok(Letter::from((lower as u8 - b'a') as usize))
        } else {
            Err(c)
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// translate a word into letters, failing on the first character outside the alphabet
pub fn translate_word(word: &str) -> Result<Vec<Letter>, char> {
    word.chars().map(Letter::try_from).collect()
}

pub fn to_word(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.to_char()).collect()
}
