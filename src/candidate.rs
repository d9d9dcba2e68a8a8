//! # Candidate
//!
//! A [`Candidate`] is one solution to the search: an ordering of every valid
//! word id, representing the sequence in which the combinations are tried.
//! Once fully built it is a permutation of `0..word_count`.
//!
//! The cumulative-latency score is memoized behind a dirty-flag cache that
//! every path mutation invalidates; the ordering-independent lower-bound
//! fitness is delegated to the shared [`Lock`], which memoizes it once for
//! the whole word set.
//!
//! Candidate identity is the path sequence alone: two candidates over the
//! same lock compare equal exactly when they visit the words in the same
//! order.

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::lock::{Lock, Stop};

/// An ordered visiting plan over a lock's valid words.
#[derive(Clone)]
pub struct Candidate {
    lock: Rc<Lock>,
    path: Vec<usize>,
    /// Memoized score; cleared whenever the path changes.
    score: Cell<Option<f64>>,
}

impl Candidate {
    /// Creates an empty candidate for the given lock. Operators build the
    /// path up with [`push`](Candidate::push).
    pub fn new(lock: Rc<Lock>) -> Self {
        let capacity = lock.word_count();
        Self {
            lock,
            path: Vec::with_capacity(capacity),
            score: Cell::new(None),
        }
    }

    /// Creates a candidate from a complete path.
    pub fn from_path(lock: Rc<Lock>, path: Vec<usize>) -> Self {
        Self {
            lock,
            path,
            score: Cell::new(None),
        }
    }

    /// Appends a word id to the path, invalidating the cached score.
    pub fn push(&mut self, id: usize) {
        self.score.set(None);
        self.path.push(id);
    }

    /// The word id at position `i`.
    pub fn get(&self, i: usize) -> usize {
        self.path[i]
    }

    /// The number of words placed so far.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether no words have been placed yet.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The visiting order as word ids.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The lock this candidate is defined over.
    pub fn lock(&self) -> &Rc<Lock> {
        &self.lock
    }

    /// The visiting order as word strings, for reporting.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.path.iter().map(move |&id| self.lock.word(id))
    }

    /// The cumulative-latency cost of this path.
    ///
    /// Walking the path from the lock's initial position, each step adds the
    /// wheel-turning distance to the next word plus one unit for trying it
    /// to a running total, and the running total after each step is added to
    /// the score. Combinations tried early therefore weigh less than
    /// combinations tried late. Lower is better.
    ///
    /// The value is memoized until the path next changes.
    pub fn score(&self) -> f64 {
        if let Some(score) = self.score.get() {
            return score;
        }

        let mut dist_so_far: u64 = 0;
        let mut score = 0.0;
        let mut last = Stop::Initial;
        for &id in &self.path {
            let next = Stop::Word(id);
            dist_so_far += 1 + u64::from(self.lock.distance(last, next));
            score += dist_so_far as f64;
            last = next;
        }

        self.score.set(Some(score));
        score
    }

    /// The ordering-independent lower-bound fitness of this candidate's word
    /// set. A full permutation always covers the lock's entire valid-word
    /// set, so the value is shared (and memoized) lock-wide. Diagnostic
    /// only.
    pub fn fitness(&self) -> f64 {
        self.lock.lower_bound_fitness()
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("path", &self.path)
            .field("score", &self.score.get())
            .finish()
    }
}
