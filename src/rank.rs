//! Ordering and truncation of scanner output.
//!
//! The ranking order is fixed and total: score descending, ties broken
//! by ascending offset, forward strand before reverse at the same
//! offset. Equal inputs therefore always rank identically.

use crate::types::{Hit, Strand};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The ranking order over hits. `Less` means `a` ranks ahead of `b`.
pub fn rank_cmp(a: &Hit, b: &Hit) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.offset.cmp(&b.offset))
        .then_with(|| strand_rank(a.strand).cmp(&strand_rank(b.strand)))
}

fn strand_rank(strand: Strand) -> u8 {
    match strand {
        Strand::Forward => 0,
        Strand::Reverse => 1,
    }
}

// BinaryHeap is a max-heap, so with this Ord the peek is the
// worst-ranked hit currently kept.
struct Ranked(Hit);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        rank_cmp(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        rank_cmp(&self.0, &other.0)
    }
}

/// Filters, orders, and truncates a hit stream.
///
/// `min_score` drops hits scoring below the cutoff before any sorting.
/// With `top_k`, a bounded heap keeps the k best-ranked hits seen so far
/// instead of materializing and sorting the full stream.
pub fn rank_hits<I>(hits: I, top_k: Option<usize>, min_score: Option<f64>) -> Vec<Hit>
where
    I: Iterator<Item = Hit>,
{
    let kept = hits.filter(|hit| min_score.is_none_or(|cutoff| hit.score >= cutoff));

    match top_k {
        Some(0) => Vec::new(),
        Some(k) => {
            let mut heap: BinaryHeap<Ranked> = BinaryHeap::with_capacity(k + 1);
            for hit in kept {
                heap.push(Ranked(hit));
                if heap.len() > k {
                    heap.pop();
                }
            }
            let mut ranked: Vec<Hit> = heap.into_iter().map(|r| r.0).collect();
            ranked.sort_by(rank_cmp);
            ranked
        }
        None => {
            let mut ranked: Vec<Hit> = kept.collect();
            ranked.sort_by(rank_cmp);
            ranked
        }
    }
}
