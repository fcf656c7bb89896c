use std::collections::HashSet;

#[cfg(test)]
pub mod test_utilities;

/// point values for word lengths from 0 to 8, longer words score as 8
pub const POINTS: [u32; 9] = [0, 0, 0, 1, 1, 2, 3, 5, 11];

pub const DEFAULT_BOARD_SIZE: usize = 5;

pub fn word_points(word: &str) -> u32 {
    POINTS[word.chars().count().min(POINTS.len() - 1)]
}

/// total points for a list of found words. a word only scores once no matter how many
/// paths spell it.
pub fn score_words<S: AsRef<str>>(words: &[S]) -> u32 {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| seen.insert(*word))
        .map(word_points)
        .sum()
}

/// sorted, deduplicated copy of a solver's output
pub fn unique_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut unique: Vec<String> = words.iter().map(|w| w.as_ref().to_owned()).collect();
    unique.sort();
    unique.dedup();
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_points() {
        assert_eq!(word_points("at"), 0);
        assert_eq!(word_points("cat"), 1);
        assert_eq!(word_points("cart"), 1);
        assert_eq!(word_points("carts"), 2);
        assert_eq!(word_points("carton"), 3);
        assert_eq!(word_points("cartons"), 5);
        assert_eq!(word_points("cartoons"), 11);
        assert_eq!(word_points("cartoonist"), 11);
    }

    #[test]
    fn test_score_words_counts_each_word_once() {
        let words = ["cat", "cart", "cat", "carts", "cat"];
        assert_eq!(score_words(&words), 1 + 1 + 2);
    }

    #[test]
    fn test_unique_words() {
        let words = vec!["tar", "cat", "tar", "art", "cat"];
        assert_eq!(unique_words(&words), vec!["art", "cat", "tar"]);
    }
}
