//! Construction of position-specific scoring matrices from aligned sites.
//!
//! A [`ScoringMatrix`] holds one log-odds score per (base, position) pair.
//! Scores are log2(observed frequency / background frequency), with counts
//! seeded by a frequency-proportional pseudocount: each base's count at
//! every position starts at its background frequency, so a motif set of
//! size one still yields finite entries.

use crate::alphabet::{Nucleotide, ALPHABET_SIZE};
use crate::error::{Result, SearchError};
use ndarray::Array2;

/// Background nucleotide frequencies, indexed in A, C, G, T order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background([f64; ALPHABET_SIZE]);

impl Default for Background {
    fn default() -> Self {
        Background([0.25; ALPHABET_SIZE])
    }
}

impl Background {
    /// Validates and normalizes a set of frequencies. Entries must be
    /// positive and finite; they are rescaled to sum to one.
    pub fn new(frequencies: [f64; ALPHABET_SIZE]) -> Result<Self> {
        if frequencies.iter().any(|&f| !f.is_finite() || f <= 0.0) {
            return Err(SearchError::invalid_input(
                "background frequencies must be positive and finite",
            ));
        }
        let total: f64 = frequencies.iter().sum();
        Ok(Background(frequencies.map(|f| f / total)))
    }

    /// The uniform background (0.25 per base).
    pub fn uniform() -> Self {
        Background::default()
    }

    /// Expected genome-wide frequency of `base`.
    pub fn frequency(&self, base: Nucleotide) -> f64 {
        self.0[base.index()]
    }
}

/// A position-specific scoring matrix: 4 base rows by L position columns
/// of log2-odds scores. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringMatrix {
    scores: Array2<f64>,
}

impl ScoringMatrix {
    /// Builds a scoring matrix from aligned binding sites.
    ///
    /// All sites must be non-empty and share one length; symbols are
    /// case-insensitive. For each position, base counts are seeded with
    /// the background frequency of that base, incremented per site,
    /// normalized, and converted to log2(frequency / background).
    ///
    /// # Errors
    /// * `SearchError::InvalidInput` - empty site set, zero-length sites,
    ///   or sites of differing lengths
    /// * `SearchError::InvalidSymbol` - a site character outside `ACGTacgt`
    pub fn from_sites<S: AsRef<str>>(sites: &[S], background: Option<Background>) -> Result<Self> {
        let background = background.unwrap_or_default();

        let first = sites
            .first()
            .ok_or_else(|| SearchError::invalid_input("motif set is empty"))?;
        let length = first.as_ref().len();
        if length == 0 {
            return Err(SearchError::invalid_input("motif sites must be non-empty"));
        }
        for site in sites {
            if site.as_ref().len() != length {
                return Err(SearchError::invalid_input(format!(
                    "motif sites must share one length: expected {}, found {}",
                    length,
                    site.as_ref().len()
                )));
            }
        }

        let mut scores = Array2::zeros((ALPHABET_SIZE, length));
        for pos in 0..length {
            let mut counts = [0.0f64; ALPHABET_SIZE];
            for base in Nucleotide::ALL {
                counts[base.index()] = background.frequency(base);
            }
            for site in sites {
                let byte = site.as_ref().as_bytes()[pos];
                let base = Nucleotide::from_byte(byte)
                    .ok_or_else(|| SearchError::invalid_symbol(pos, byte as char))?;
                counts[base.index()] += 1.0;
            }
            let total: f64 = counts.iter().sum();
            for base in Nucleotide::ALL {
                let observed = counts[base.index()] / total;
                scores[(base.index(), pos)] = (observed / background.frequency(base)).log2();
            }
        }

        Ok(ScoringMatrix { scores })
    }

    /// Motif length L (number of position columns).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.scores.ncols()
    }

    /// Score contribution of `base` at motif position `pos`.
    pub fn score(&self, base: Nucleotide, pos: usize) -> f64 {
        self.scores[(base.index(), pos)]
    }

    /// Highest achievable window score (best base at every position).
    pub fn max_score(&self) -> f64 {
        (0..self.len())
            .map(|pos| {
                Nucleotide::ALL
                    .iter()
                    .map(|&base| self.score(base, pos))
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .sum()
    }

    /// The matrix that scores the reverse-complement strand: column order
    /// reversed, base rows permuted under A↔T, C↔G. Applying this twice
    /// returns a matrix equal to the original.
    pub fn reverse_complement(&self) -> ScoringMatrix {
        let length = self.len();
        let mut scores = Array2::zeros((ALPHABET_SIZE, length));
        for pos in 0..length {
            for base in Nucleotide::ALL {
                scores[(base.index(), pos)] = self.score(base.complement(), length - 1 - pos);
            }
        }
        ScoringMatrix { scores }
    }
}
