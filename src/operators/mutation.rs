//! # Mutation Operators
//!
//! Structural edits on a complete path that preserve the candidate set
//! exactly: the output contains the same word ids as the input, each exactly
//! once, in a different order.
//!
//! Both operators draw a random contiguous segment of length `1..=n-2` whose
//! start leaves at least one word after it, so a lock needs at least three
//! valid words before mutation is meaningful.

use crate::candidate::Candidate;
use crate::operators::assert_permutation;
use crate::rng::RandomNumberGenerator;

/// A structural edit applied to child candidates during breeding.
///
/// The population applies a configured sequence of these, each with a
/// per-operator repeat bound, as a greedy hill-climb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationOperator {
    /// Reverse a random segment and reinsert the reversed block at a
    /// uniformly random position among the remaining words.
    SegmentReverse,
    /// Remove a random segment and reinsert it, in original internal order,
    /// at a different random offset among the remaining words.
    SegmentShift,
}

impl MutationOperator {
    /// A short name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            MutationOperator::SegmentReverse => "segment-reverse",
            MutationOperator::SegmentShift => "segment-shift",
        }
    }

    /// Produces a mutated copy of `input`.
    ///
    /// # Panics
    ///
    /// Panics if the lock has fewer than three words, or (invariant
    /// violation) if the result is not a permutation of the input's id set.
    pub fn run(&self, input: &Candidate, rng: &mut RandomNumberGenerator) -> Candidate {
        let n = input.len();
        assert!(n >= 3, "mutation requires a lock with at least 3 words");

        let output = match self {
            MutationOperator::SegmentReverse => segment_reverse(input, rng),
            MutationOperator::SegmentShift => segment_shift(input, rng),
        };
        assert_permutation(output.path(), n, self.name());
        output
    }
}

/// Draws a segment: a length in `[1, n-2]` and a start such that the segment
/// never reaches the final slot.
fn draw_segment(n: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
    let length = 1 + rng.gen_index(n - 2);
    let start = rng.gen_index(n - length);
    (start, length)
}

fn segment_reverse(input: &Candidate, rng: &mut RandomNumberGenerator) -> Candidate {
    let n = input.len();
    let (start, length) = draw_segment(n, rng);

    let reversed: Vec<usize> = input.path()[start..start + length]
        .iter()
        .rev()
        .copied()
        .collect();
    let remainder: Vec<usize> = input
        .path()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i < start || i >= start + length)
        .map(|(_, &id)| id)
        .collect();

    // n - length + 1 possible gaps in the remainder.
    let insert_at = rng.gen_index(remainder.len() + 1);

    let mut path = Vec::with_capacity(n);
    path.extend_from_slice(&remainder[..insert_at]);
    path.extend_from_slice(&reversed);
    path.extend_from_slice(&remainder[insert_at..]);
    Candidate::from_path(input.lock().clone(), path)
}

fn segment_shift(input: &Candidate, rng: &mut RandomNumberGenerator) -> Candidate {
    let n = input.len();
    let (start, length) = draw_segment(n, rng);

    // The target counts how many of the remaining words precede the moved
    // segment; rerolled while it would put the segment back where it was.
    let mut target = rng.gen_index(n - length);
    while target == start {
        target = rng.gen_index(n - length);
    }

    let segment: Vec<usize> = input.path()[start..start + length].to_vec();
    let remainder: Vec<usize> = input
        .path()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i < start || i >= start + length)
        .map(|(_, &id)| id)
        .collect();

    let mut path = Vec::with_capacity(n);
    path.extend_from_slice(&remainder[..target]);
    path.extend_from_slice(&segment);
    path.extend_from_slice(&remainder[target..]);
    Candidate::from_path(input.lock().clone(), path)
}
