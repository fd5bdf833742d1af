//! Exhaustive windowed scanning of a sequence against a scoring matrix.
//!
//! The scanner slides the motif window across every valid offset of the
//! borrowed sequence, summing one matrix entry per window position. A
//! window containing a non-canonical byte (ambiguity codes such as `N`)
//! scores negative infinity and is thereby disqualified; the scan itself
//! never aborts on bad bases.

use crate::alphabet::Nucleotide;
use crate::error::{Result, SearchError};
use crate::pssm::ScoringMatrix;
use crate::rank::rank_hits;
use crate::types::{Hit, ScanOptions, Strand};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Windows scored between cancellation checks in [`scan_with_cancel`].
const CANCEL_CHECK_INTERVAL: usize = 4096;

/// Offsets per partition in [`par_scan`].
const PARTITION_SIZE: usize = 16384;

/// Sums the matrix entries selected by the bytes of one window. Returns
/// negative infinity as soon as a byte falls outside the alphabet.
fn score_window(matrix: &ScoringMatrix, window: &[u8]) -> f64 {
    let mut score = 0.0;
    for (pos, &byte) in window.iter().enumerate() {
        match Nucleotide::from_byte(byte) {
            Some(base) => score += matrix.score(base, pos),
            None => return f64::NEG_INFINITY,
        }
    }
    score
}

/// Lazy iterator over every window score of a scan.
///
/// Yields one [`Hit`] per valid offset on the forward strand, then (when
/// dual-strand scanning was requested) one per offset on the reverse
/// strand. The iterator is finite and restartable: re-creating it with
/// the same inputs replays the identical hit stream. The sequence is
/// borrowed for the duration of the scan and never copied.
pub struct HitIter<'a> {
    matrix: &'a ScoringMatrix,
    reverse: Option<ScoringMatrix>,
    sequence: &'a [u8],
    windows: usize,
    offset: usize,
    strand: Strand,
}

impl<'a> HitIter<'a> {
    /// Creates a scan over `sequence`. With `both_strands`, the
    /// reverse-complement matrix is derived once up front.
    pub fn new(matrix: &'a ScoringMatrix, sequence: &'a str, both_strands: bool) -> Self {
        let sequence = sequence.as_bytes();
        // zero windows when L > N, including the empty sequence
        let windows = (sequence.len() + 1).saturating_sub(matrix.len());
        HitIter {
            matrix,
            reverse: both_strands.then(|| matrix.reverse_complement()),
            sequence,
            windows,
            offset: 0,
            strand: Strand::Forward,
        }
    }

    fn remaining(&self) -> usize {
        let current = self.windows - self.offset;
        match (self.strand, &self.reverse) {
            (Strand::Forward, Some(_)) => current + self.windows,
            _ => current,
        }
    }
}

impl Iterator for HitIter<'_> {
    type Item = Hit;

    fn next(&mut self) -> Option<Hit> {
        loop {
            if self.offset < self.windows {
                let offset = self.offset;
                self.offset += 1;
                let window = &self.sequence[offset..offset + self.matrix.len()];
                let matrix = match self.strand {
                    Strand::Forward => self.matrix,
                    Strand::Reverse => self.reverse.as_ref()?,
                };
                return Some(Hit {
                    offset,
                    strand: self.strand,
                    score: score_window(matrix, window),
                });
            }
            if self.strand == Strand::Forward && self.reverse.is_some() {
                self.strand = Strand::Reverse;
                self.offset = 0;
                if self.windows == 0 {
                    return None;
                }
                continue;
            }
            return None;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HitIter<'_> {}

/// Scans `sequence` against `matrix` and returns the ranked hits.
///
/// One hit per valid window offset per requested strand, ordered by score
/// descending with ties broken by ascending offset (forward before
/// reverse at the same offset). A sequence shorter than the motif yields
/// an empty result, not an error.
pub fn scan(matrix: &ScoringMatrix, sequence: &str, options: &ScanOptions) -> Vec<Hit> {
    let hits = HitIter::new(matrix, sequence, options.both_strands);
    rank_hits(hits, options.top_k, options.min_score)
}

/// Like [`scan`], but checks `cancel` every few thousand windows and
/// bails out with `SearchError::Cancelled` once the flag is raised.
pub fn scan_with_cancel(
    matrix: &ScoringMatrix,
    sequence: &str,
    options: &ScanOptions,
    cancel: &AtomicBool,
) -> Result<Vec<Hit>> {
    let mut hits = Vec::new();
    for (scored, hit) in HitIter::new(matrix, sequence, options.both_strands).enumerate() {
        if scored % CANCEL_CHECK_INTERVAL == 0 && cancel.load(Ordering::Relaxed) {
            return Err(SearchError::Cancelled);
        }
        hits.push(hit);
    }
    Ok(rank_hits(hits.into_iter(), options.top_k, options.min_score))
}

/// Partitioned scan: disjoint offset ranges are scored on rayon workers
/// against the shared, read-only matrix and sequence, and the merged
/// per-partition hit lists are re-ranked. Output is identical to [`scan`].
pub fn par_scan(matrix: &ScoringMatrix, sequence: &str, options: &ScanOptions) -> Vec<Hit> {
    let sequence = sequence.as_bytes();
    let windows = (sequence.len() + 1).saturating_sub(matrix.len());
    if windows == 0 {
        return Vec::new();
    }
    let reverse = options.both_strands.then(|| matrix.reverse_complement());

    let partitions: Vec<(usize, usize)> = (0..windows)
        .step_by(PARTITION_SIZE)
        .map(|start| (start, (start + PARTITION_SIZE).min(windows)))
        .collect();

    let hits: Vec<Hit> = partitions
        .into_par_iter()
        .flat_map_iter(|(start, end)| {
            let per_offset = if reverse.is_some() { 2 } else { 1 };
            let mut partition = Vec::with_capacity((end - start) * per_offset);
            for offset in start..end {
                let window = &sequence[offset..offset + matrix.len()];
                partition.push(Hit {
                    offset,
                    strand: Strand::Forward,
                    score: score_window(matrix, window),
                });
                if let Some(reverse) = &reverse {
                    partition.push(Hit {
                        offset,
                        strand: Strand::Reverse,
                        score: score_window(reverse, window),
                    });
                }
            }
            partition
        })
        .collect();

    rank_hits(hits.into_iter(), options.top_k, options.min_score)
}
