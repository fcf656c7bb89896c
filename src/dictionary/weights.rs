use crate::letter::{Letter, ALPHABET, ALPHABET_LENGTH};
use rand::Rng;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// how letter counts from several word sources are folded into one table
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightMode {
    /// renormalize after every source. the cumulative fractions left by one source
    /// are the base the next source's raw counts are added onto, so loading
    /// several sources is not the same as normalizing their union.
    #[default]
    PerSource,
    /// accumulate raw counts over every source and normalize once
    Union,
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightMode::PerSource => write!(f, "per-source"),
            WeightMode::Union => write!(f, "union"),
        }
    }
}

impl FromStr for WeightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-source" => Ok(WeightMode::PerSource),
            "union" => Ok(WeightMode::Union),
            other => Err(format!(
                "unknown weight mode {other:?}, expected \"per-source\" or \"union\""
            )),
        }
    }
}

/// cumulative letter weights in alphabet order, final entry ~1.0.
/// used for inverse-cdf sampling of board tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterWeights {
    cumulative: [f64; ALPHABET_LENGTH],
}

impl LetterWeights {
    /// normalize raw per-letter counts into a cumulative table.
    /// returns None if every count is zero.
    pub fn from_counts(counts: &[u64; ALPHABET_LENGTH]) -> Option<Self> {
        let mut values = counts.map(|count| count as f64);
        if accumulate(&mut values) {
            Some(Self { cumulative: values })
        } else {
            None
        }
    }

    /// wrap a table that has already been accumulated
    pub(crate) fn from_cumulative(cumulative: [f64; ALPHABET_LENGTH]) -> Self {
        Self { cumulative }
    }

    pub fn cumulative(&self, letter: Letter) -> f64 {
        self.cumulative[letter.index()]
    }

    /// the final cumulative weight, the upper end of the sampling range
    pub fn total(&self) -> f64 {
        self.cumulative[ALPHABET_LENGTH - 1]
    }

    /// the chance of drawing `letter` in one sample
    pub fn probability(&self, letter: Letter) -> f64 {
        let idx = letter.index();
        let lower = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        (self.cumulative[idx] - lower) / self.total()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Letter, f64)> + '_ {
        ALPHABET.iter().copied().zip(self.cumulative.iter().copied())
    }

    /// draw one letter: pick the first letter whose cumulative weight is strictly
    /// greater than a uniform draw from [0, total). zero-weight letters are never drawn.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Letter {
        let draw = rng.random::<f64>() * self.total();
        let idx = self.cumulative.partition_point(|weight| *weight <= draw);
        match ALPHABET.get(idx) {
            Some(letter) => *letter,
            // rounding put the draw on the final boundary
            None => self.last_weighted_letter(),
        }
    }

    fn last_weighted_letter(&self) -> Letter {
        ALPHABET
            .iter()
            .rev()
            .copied()
            .find(|letter| self.probability(*letter) > 0.0)
            .unwrap_or(Letter::Z)
    }
}

/// turn `values` into a running sum of `value / total` over the alphabet order.
/// returns false (leaving `values` untouched) when the total is zero.
pub(crate) fn accumulate(values: &mut [f64; ALPHABET_LENGTH]) -> bool {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return false;
    }

    for i in 0..ALPHABET_LENGTH {
        values[i] /= total;
        if i != 0 {
            values[i] += values[i - 1];
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: f64 = 1e-9;

    fn counts(pairs: &[(Letter, u64)]) -> [u64; ALPHABET_LENGTH] {
        let mut counts = [0; ALPHABET_LENGTH];
        for (letter, count) in pairs {
            counts[letter.index()] = *count;
        }
        counts
    }

    #[test]
    fn test_from_counts_is_cumulative() {
        let weights =
            LetterWeights::from_counts(&counts(&[(Letter::A, 1), (Letter::C, 2), (Letter::Z, 1)]))
                .unwrap();

        assert!((weights.cumulative(Letter::A) - 0.25).abs() < EPSILON);
        assert!((weights.cumulative(Letter::B) - 0.25).abs() < EPSILON);
        assert!((weights.cumulative(Letter::C) - 0.75).abs() < EPSILON);
        assert!((weights.cumulative(Letter::Y) - 0.75).abs() < EPSILON);
        assert!((weights.total() - 1.0).abs() < EPSILON);
        assert!((weights.probability(Letter::C) - 0.5).abs() < EPSILON);
        assert_eq!(weights.probability(Letter::B), 0.0);

        // monotonically non-decreasing
        let values: Vec<f64> = weights.iter().map(|(_, w)| w).collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_from_counts_all_zero() {
        assert!(LetterWeights::from_counts(&[0; ALPHABET_LENGTH]).is_none());
    }

    #[test]
    fn test_sample_never_draws_zero_weight_letters() {
        let weights =
            LetterWeights::from_counts(&counts(&[(Letter::E, 3), (Letter::Q, 1)])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let letter = weights.sample(&mut rng);
            assert!(letter == Letter::E || letter == Letter::Q, "drew {letter}");
        }
    }

    #[test]
    fn test_sample_converges_to_weights() {
        let weights = LetterWeights::from_counts(&counts(&[
            (Letter::A, 5),
            (Letter::E, 3),
            (Letter::S, 1),
            (Letter::T, 1),
        ]))
        .unwrap();

        const DRAWS: usize = 100_000;
        let mut observed = [0usize; ALPHABET_LENGTH];
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..DRAWS {
            observed[weights.sample(&mut rng).index()] += 1;
        }

        for letter in ALPHABET {
            let frequency = observed[letter.index()] as f64 / DRAWS as f64;
            assert!(
                (frequency - weights.probability(letter)).abs() < 0.01,
                "letter {letter} observed {frequency} expected {}",
                weights.probability(letter)
            );
        }
    }

    #[test]
    fn test_weight_mode_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: WeightMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"union\"").unwrap();
        assert_eq!(parsed.mode, WeightMode::Union);
        let parsed: Wrapper = toml::from_str("mode = \"per-source\"").unwrap();
        assert_eq!(parsed.mode, WeightMode::PerSource);
    }

    #[test]
    fn test_weight_mode_from_str() {
        assert_eq!("union".parse::<WeightMode>(), Ok(WeightMode::Union));
        assert_eq!("per-source".parse::<WeightMode>(), Ok(WeightMode::PerSource));
        assert_eq!(WeightMode::PerSource.to_string(), "per-source");
        assert!("sum".parse::<WeightMode>().is_err());
    }
}
