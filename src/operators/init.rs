//! # Initialization Operators
//!
//! Operators that produce a complete, valid initial path for a lock. Both
//! are total: given any lock they return a full permutation of its word ids.

use std::rc::Rc;

use crate::candidate::Candidate;
use crate::lock::{Lock, Stop};
use crate::rng::RandomNumberGenerator;

/// A way of producing an initial candidate.
///
/// The population seeds itself by drawing among a configured table of these
/// operators with caller-supplied weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitOperator {
    /// A uniformly shuffled permutation of all word ids.
    Random,
    /// A greedy tour: starting from the lock's initial position, repeatedly
    /// append the unused word nearest to the last one placed, breaking ties
    /// by uniform random choice among the nearest set.
    NearestUnvisited,
}

impl InitOperator {
    /// A short name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            InitOperator::Random => "random",
            InitOperator::NearestUnvisited => "nearest-unvisited",
        }
    }

    /// Produces a complete initial candidate for `lock`.
    pub fn run(&self, lock: &Rc<Lock>, rng: &mut RandomNumberGenerator) -> Candidate {
        match self {
            InitOperator::Random => random(lock, rng),
            InitOperator::NearestUnvisited => nearest_unvisited(lock, rng),
        }
    }
}

fn random(lock: &Rc<Lock>, rng: &mut RandomNumberGenerator) -> Candidate {
    let mut ids: Vec<usize> = (0..lock.word_count()).collect();
    rng.shuffle(&mut ids);
    Candidate::from_path(lock.clone(), ids)
}

fn nearest_unvisited(lock: &Rc<Lock>, rng: &mut RandomNumberGenerator) -> Candidate {
    let n = lock.word_count();
    let mut candidate = Candidate::new(lock.clone());
    let mut used = vec![false; n];
    let mut last = Stop::Initial;

    for _ in 0..n {
        let mut best_distance = u32::MAX;
        let mut nearest: Vec<usize> = Vec::new();
        for id in 0..n {
            if used[id] {
                continue;
            }
            let d = lock.distance(Stop::Word(id), last);
            if d < best_distance {
                best_distance = d;
                nearest.clear();
            }
            if d == best_distance {
                nearest.push(id);
            }
        }

        let choice = nearest[rng.gen_index(nearest.len())];
        candidate.push(choice);
        used[choice] = true;
        last = Stop::Word(choice);
    }

    candidate
}
