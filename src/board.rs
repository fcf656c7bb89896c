use crate::dictionary::LetterWeights;
use crate::error::BoardError;
use crate::letter::{Letter, ALPHABET_LENGTH};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// a (row, column) position. (0, 0) is the top left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// a square grid of letters. only ever replaced whole, never edited tile by tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// tiles are read from left to right, top to bottom
    /// 0 1 2
    /// 3 4 5 ...
    tiles: Vec<Letter>,
}

impl Board {
    /// draw every tile independently from `weights`
    pub fn generate<R: Rng + ?Sized>(
        weights: &LetterWeights,
        size: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }

        let tiles: Vec<Letter> = (0..size * size).map(|_| weights.sample(&mut *rng)).collect();
        debug!(size, "generated board");
        Ok(Self { size, tiles })
    }

    /// build a board from rows of letters
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(size * size);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != size {
                return Err(BoardError::NotSquare {
                    rows: size,
                    row: row_idx,
                    len,
                });
            }
            for c in row.chars() {
                tiles.push(Letter::try_from(c).map_err(BoardError::InvalidLetter)?);
            }
        }
        Ok(Self { size, tiles })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// the letter at `coord`, None off the board
    pub fn get(&self, coord: Coord) -> Option<Letter> {
        if self.contains(coord) {
            Some(self.tiles[get_position(coord, self.size)])
        } else {
            None
        }
    }

    /// every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size * size).map(move |position| get_coord(position, size))
    }

    pub fn letter_counts(&self) -> [usize; ALPHABET_LENGTH] {
        let mut counts = [0; ALPHABET_LENGTH];
        for tile in &self.tiles {
            counts[tile.index()] += 1;
        }
        counts
    }
}

/// rows separated by `/` or whitespace, e.g. `car/tqt/xyz`
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        Board::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.tiles.chunks(self.size).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|tile| tile.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[inline(always)]
fn get_position(coord: Coord, size: usize) -> usize {
    coord.row * size + coord.col
}

#[inline(always)]
fn get_coord(position: usize, size: usize) -> Coord {
    Coord::new(position / size, position % size)
}
