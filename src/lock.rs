//! # Lock
//!
//! The distance model of the search. A [`Lock`] owns an ordered sequence of
//! cyclic wheels, derives the set of valid combination words from a
//! dictionary, and answers turning-distance queries between any two words
//! (or between a word and the lock's initial position).
//!
//! A `Lock` is logically immutable once constructed and is shared by
//! reference across every candidate and the population. The word/word
//! distance matrix is allocated eagerly but filled lazily: each pair is
//! computed at most once and memoized behind interior mutability.
//!
//! ## Example
//!
//! ```rust
//! use lockpath::lock::{Lock, Stop};
//!
//! let wheels = vec!["ab".to_string(), "cd".to_string()];
//! let words = vec![
//!     ("ac".to_string(), 10),
//!     ("bd".to_string(), 1),
//! ];
//! let lock = Lock::new(&wheels, words, 0)?;
//!
//! assert_eq!(lock.word_count(), 2);
//! assert_eq!(lock.distance(Stop::Word(0), Stop::Word(1)), 2);
//! # Ok::<(), lockpath::SearchError>(())
//! ```

use std::cell::{OnceCell, RefCell};
use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, SearchError};

/// A position on the tour: either the lock's initial (untouched) state or a
/// valid word identified by its id.
///
/// Word ids are the indices assigned by the [`Lock`] in order of first sight
/// in the word source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stop {
    /// The lock as found: every wheel showing its first symbol.
    Initial,
    /// The valid word with the given id.
    Word(usize),
}

/// A lock configuration: wheels, the derived valid-word set, and the
/// memoized distance table.
pub struct Lock {
    /// One entry per wheel, symbols lowercased. Position on a wheel is
    /// cyclic; duplicate symbols resolve to their first occurrence.
    wheels: Vec<Vec<char>>,
    /// The word shown when every wheel is in its default position.
    initial_word: String,
    /// Valid words in id order (id = index).
    words: Vec<String>,
    /// Flattened `n * n` word/word distance matrix. `u32::MAX` marks a pair
    /// not yet computed.
    distances: RefCell<Vec<u32>>,
    /// Memoized ordering-independent lower bound, see
    /// [`lower_bound_fitness`](Lock::lower_bound_fitness).
    fitness: OnceCell<f64>,
}

impl Lock {
    /// Builds a lock from wheel alphabets and a word source.
    ///
    /// Wheels and words are treated case-insensitively. Each `(word,
    /// frequency)` pair is considered in order; the frequency is accepted
    /// but not used. A word survives when:
    ///
    /// - it is no longer than the wheel count (shorter words are right-padded
    ///   with `' '` to the wheel width, so a short word is only feasible on
    ///   wheels that carry a space symbol),
    /// - every padded symbol appears on the corresponding wheel,
    /// - its distance from the initial word is at least
    ///   `min_distance_from_start`.
    ///
    /// Duplicates collapse to their first occurrence, and surviving words
    /// receive ids `0..n` in order of first sight.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] if the wheel list is empty or
    /// contains an empty wheel, and [`SearchError::WordSource`] if no word
    /// survives filtering — a lock with nothing to try cannot be searched.
    pub fn new<I>(wheels: &[String], word_source: I, min_distance_from_start: u32) -> Result<Self>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        if wheels.is_empty() {
            return Err(SearchError::Configuration(
                "a lock needs at least one wheel".to_string(),
            ));
        }
        if wheels.iter().any(|w| w.is_empty()) {
            return Err(SearchError::Configuration(
                "every wheel needs at least one symbol".to_string(),
            ));
        }

        let wheels: Vec<Vec<char>> = wheels
            .iter()
            .map(|w| w.to_lowercase().chars().collect())
            .collect();
        let initial_word: String = wheels.iter().map(|w| w[0]).collect();

        let mut lock = Self {
            wheels,
            initial_word,
            words: Vec::new(),
            distances: RefCell::new(Vec::new()),
            fitness: OnceCell::new(),
        };

        let mut seen = HashSet::new();
        for (word, _frequency) in word_source {
            let word = word.to_lowercase();
            if word.chars().count() > lock.wheels.len() {
                continue;
            }
            let padded: String = word
                .chars()
                .chain(std::iter::repeat(' '))
                .take(lock.wheels.len())
                .collect();
            let feasible = padded
                .chars()
                .zip(lock.wheels.iter())
                .all(|(c, wheel)| wheel.contains(&c));
            if !feasible {
                continue;
            }
            if lock.word_distance(&lock.initial_word, &padded) < min_distance_from_start {
                continue;
            }
            if seen.insert(padded.clone()) {
                lock.words.push(padded);
            }
        }

        if lock.words.is_empty() {
            return Err(SearchError::WordSource(
                "the word source produced no valid words for these wheels".to_string(),
            ));
        }

        let n = lock.words.len();
        lock.distances = RefCell::new(vec![u32::MAX; n * n]);
        Ok(lock)
    }

    /// The number of valid words this lock can make.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The word with the given id, padded to wheel width.
    pub fn word(&self, id: usize) -> &str {
        &self.words[id]
    }

    /// All valid words in id order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The word shown when the lock is in its default position.
    pub fn initial_word(&self) -> &str {
        &self.initial_word
    }

    /// The turning distance between two stops: the number of single-symbol
    /// wheel moves needed to change one word into the other, each wheel
    /// taking the shorter cyclic direction.
    ///
    /// The distance is symmetric, non-negative, and zero exactly for a stop
    /// paired with itself. Word/word queries are memoized; distances
    /// involving [`Stop::Initial`] are cheap enough to recompute.
    pub fn distance(&self, a: Stop, b: Stop) -> u32 {
        match (a, b) {
            (Stop::Initial, Stop::Initial) => 0,
            (Stop::Initial, Stop::Word(j)) | (Stop::Word(j), Stop::Initial) => {
                self.word_distance(&self.initial_word, &self.words[j])
            }
            (Stop::Word(i), Stop::Word(j)) => {
                if i == j {
                    return 0;
                }
                let n = self.words.len();
                let cached = self.distances.borrow()[i * n + j];
                if cached != u32::MAX {
                    return cached;
                }
                let d = self.word_distance(&self.words[i], &self.words[j]);
                let mut distances = self.distances.borrow_mut();
                distances[i * n + j] = d;
                distances[j * n + i] = d;
                d
            }
        }
    }

    /// An ordering-independent lower-bound estimate of the best achievable
    /// score for this lock's word set.
    ///
    /// For every word, take the average of the distances to its two nearest
    /// other words plus the unit try cost; sort these per-word values
    /// ascending, accumulate their running prefix sums, subtract the largest
    /// `average - nearest` gap seen, and normalize by the word count. The
    /// value is a diagnostic floor — the search never optimizes against it.
    ///
    /// Computed once and memoized.
    pub fn lower_bound_fitness(&self) -> f64 {
        *self.fitness.get_or_init(|| {
            let n = self.words.len();
            if n < 2 {
                // A single word has no neighbors; the bound is the bare try cost.
                return n as f64;
            }

            let mut per_word = vec![0.0f64; n];
            let mut adjustment = -1.0f64;
            for i in 0..n {
                let mut closest = u32::MAX;
                let mut next_closest = u32::MAX;
                for j in 0..n {
                    if j == i {
                        continue;
                    }
                    let d = self.distance(Stop::Word(i), Stop::Word(j));
                    if d < closest {
                        next_closest = closest;
                        closest = d;
                    } else if d < next_closest {
                        next_closest = d;
                    }
                }
                // With a single neighbor (two-word lock) the average
                // degenerates to that neighbor's distance.
                if next_closest == u32::MAX {
                    next_closest = closest;
                }
                let ave = (closest + next_closest) as f64 / 2.0;
                if ave - closest as f64 > adjustment {
                    adjustment = ave - closest as f64;
                }
                per_word[i] = 1.0 + ave;
            }

            per_word.sort_by(f64::total_cmp);
            let mut fitness = 0.0;
            let mut ave_so_far = 0.0;
            for value in per_word {
                ave_so_far += value;
                fitness += ave_so_far;
            }
            (fitness - adjustment) / n as f64
        })
    }

    /// Distance between two padded words, summed per wheel.
    fn word_distance(&self, word1: &str, word2: &str) -> u32 {
        word1
            .chars()
            .zip(word2.chars())
            .enumerate()
            .map(|(wheel, (c1, c2))| self.wheel_distance(wheel, c1, c2))
            .sum()
    }

    /// The number of turns needed to move one wheel from `c1` to `c2`,
    /// taking the shorter cyclic direction. Duplicate symbols resolve to
    /// their first position on the wheel.
    fn wheel_distance(&self, wheel: usize, c1: char, c2: char) -> u32 {
        let symbols = &self.wheels[wheel];
        let pos1 = symbols
            .iter()
            .position(|&c| c == c1)
            .expect("symbol membership is validated at construction");
        let pos2 = symbols
            .iter()
            .position(|&c| c == c2)
            .expect("symbol membership is validated at construction");

        let straight = pos1.abs_diff(pos2);
        straight.min(symbols.len() - straight) as u32
    }
}

impl fmt::Debug for Lock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lock")
            .field("wheels", &self.wheels.len())
            .field("initial_word", &self.initial_word)
            .field("word_count", &self.words.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock(wheels: &[&str], words: &[&str], min_distance: u32) -> Lock {
        let wheels: Vec<String> = wheels.iter().map(|w| w.to_string()).collect();
        let source: Vec<(String, u64)> = words.iter().map(|w| (w.to_string(), 1)).collect();
        Lock::new(&wheels, source, min_distance).unwrap()
    }

    #[test]
    fn test_cyclic_distance() {
        let lock = lock(&["abcde", "abcde"], &["aa", "ad", "db"], 0);
        // a -> d is 2 backwards (a <- e <- d) vs 3 forwards.
        assert_eq!(lock.distance(Stop::Word(0), Stop::Word(1)), 2);
        // aa -> db: 2 + 1.
        assert_eq!(lock.distance(Stop::Word(0), Stop::Word(2)), 3);
    }

    #[test]
    fn test_distance_from_initial_is_not_cached() {
        let lock = lock(&["ab", "cd"], &["bd"], 0);
        assert_eq!(lock.distance(Stop::Initial, Stop::Word(0)), 2);
        assert_eq!(lock.distance(Stop::Word(0), Stop::Initial), 2);
        assert_eq!(lock.distance(Stop::Initial, Stop::Initial), 0);
    }

    #[test]
    fn test_duplicate_symbols_use_first_position() {
        let lock = lock(&["aba"], &["b"], 0);
        // 'b' sits at position 1 on wheel "aba"; the duplicate 'a' at
        // position 2 never shortens the move from the initial 'a'.
        assert_eq!(lock.distance(Stop::Initial, Stop::Word(0)), 1);
    }
}
