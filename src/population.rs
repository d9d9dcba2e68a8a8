//! # Population
//!
//! The population manager owns the active set of candidates and runs the
//! generational loop: weighted seeding, fitness-proportionate parent
//! selection, crossover, bounded greedy mutation, duplicate-free insertion,
//! and elitist truncation back to the target size.
//!
//! Membership is held in an insertion-ordered arena with a parallel hash
//! index over path content, so duplicate candidates are rejected in O(1).
//! The best candidate ever observed is retained separately and survives
//! even after leaving the active set.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::candidate::Candidate;
use crate::error::{Result, SearchError};
use crate::lock::Lock;
use crate::operators::{crossover, InitOperator, MutationOperator};
use crate::rng::RandomNumberGenerator;

/// A snapshot of the active population after seeding or a generation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Lowest (best) score in the active set.
    pub best: f64,
    /// Highest (worst) score in the active set.
    pub worst: f64,
    /// Mean score of the active set.
    pub average: f64,
    /// Score of the best candidate observed across the whole run.
    pub best_so_far: f64,
}

/// The outcome of attempting to insert a candidate.
enum InsertOutcome {
    /// An identical path was already present; the candidate was discarded.
    Duplicate,
    /// Inserted.
    Inserted,
    /// Inserted, and it beats every candidate seen so far.
    BestSoFar,
}

/// The active set of candidates plus the best candidate ever observed.
#[derive(Debug)]
pub struct Population {
    lock: Rc<Lock>,
    /// Active members in insertion order (stable ascending score order
    /// right after truncation).
    members: Vec<Candidate>,
    /// Path index for O(1) duplicate rejection.
    seen: HashSet<Vec<usize>>,
    /// Best candidate across all generations, kept even after it leaves the
    /// active set.
    best_so_far: Option<Candidate>,
    target_size: usize,
}

impl Population {
    /// Seeds a population up to `target_size` distinct candidates.
    ///
    /// Each seed is produced by an initialization operator drawn by weighted
    /// roulette among `init_operators`; duplicates are discarded without
    /// counting toward the target. Seeding therefore loops until enough
    /// *distinct* candidates exist — a lock admitting fewer distinct
    /// permutations than `target_size` would never finish, so size the
    /// population to the lock.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] when no operator is supplied,
    /// the operator and weight arrays differ in length, any weight is not
    /// strictly positive, or `target_size` is below 2 (parent selection
    /// needs two distinct members).
    pub fn new(
        lock: Rc<Lock>,
        init_operators: &[InitOperator],
        init_weights: &[f64],
        target_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if init_operators.is_empty() {
            return Err(SearchError::Configuration(
                "at least one initialization operator is required to seed the population"
                    .to_string(),
            ));
        }
        if init_operators.len() != init_weights.len() {
            return Err(SearchError::Configuration(format!(
                "initialization operator and weight arrays differ in length ({} vs {})",
                init_operators.len(),
                init_weights.len()
            )));
        }
        if init_weights.iter().any(|&w| w <= 0.0) {
            return Err(SearchError::Configuration(
                "initialization weights must be strictly positive".to_string(),
            ));
        }
        if target_size < 2 {
            return Err(SearchError::Configuration(
                "population target size must be at least 2".to_string(),
            ));
        }

        let weight_sum: f64 = init_weights.iter().sum();
        let mut population = Self {
            lock,
            members: Vec::with_capacity(2 * target_size),
            seen: HashSet::with_capacity(2 * target_size),
            best_so_far: None,
            target_size,
        };

        while population.members.len() < target_size {
            let operator = roulette_operator(init_operators, init_weights, weight_sum, rng);
            let candidate = operator.run(&population.lock, rng);
            match population.insert(candidate) {
                InsertOutcome::Duplicate => {
                    trace!(operator = operator.name(), "seed produced a duplicate path");
                }
                InsertOutcome::Inserted => {}
                InsertOutcome::BestSoFar => {
                    debug!(
                        operator = operator.name(),
                        score = population.best().score(),
                        "new best candidate while seeding"
                    );
                }
            }
        }

        Ok(population)
    }

    /// Runs one generation: `ceil(target_size / 2)` breeding rounds, each
    /// selecting two distinct parents, crossing them, hill-climbing the
    /// children through the configured mutation operators, and inserting
    /// the results; then truncates back to the `target_size` best members.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] when the mutation operator and
    /// bound arrays differ in length or any bound is zero.
    pub fn run_generation(
        &mut self,
        mutation_operators: &[MutationOperator],
        max_mutations: &[usize],
        rng: &mut RandomNumberGenerator,
    ) -> Result<GenerationStats> {
        if mutation_operators.len() != max_mutations.len() {
            return Err(SearchError::Configuration(format!(
                "mutation operator and bound arrays differ in length ({} vs {})",
                mutation_operators.len(),
                max_mutations.len()
            )));
        }
        if max_mutations.iter().any(|&m| m == 0) {
            return Err(SearchError::Configuration(
                "mutation bounds must be at least 1".to_string(),
            ));
        }

        let rounds = self.target_size.div_ceil(2);
        for _ in 0..rounds {
            self.breed_once(mutation_operators, max_mutations, rng);
        }

        self.truncate();
        Ok(self.stats())
    }

    /// One breeding round: two parents, two children.
    fn breed_once(
        &mut self,
        mutation_operators: &[MutationOperator],
        max_mutations: &[usize],
        rng: &mut RandomNumberGenerator,
    ) {
        let (first, second) = self.select_parents(rng);
        let (child0, child1) = crossover(&self.members[first], &self.members[second]);

        for child in [child0, child1] {
            let improved = mutate_greedily(child, mutation_operators, max_mutations, rng);
            match self.insert(improved) {
                InsertOutcome::Duplicate => trace!("offspring duplicated an existing path"),
                InsertOutcome::Inserted => {}
                InsertOutcome::BestSoFar => {
                    debug!(score = self.best().score(), "new best candidate");
                }
            }
        }
    }

    /// Fitness-proportionate selection of two distinct parents.
    ///
    /// Sampling covers the first `target_size` members; a candidate's weight
    /// is `(max score in sample + 1) - score`, so lower-cost candidates are
    /// proportionally more likely. The second parent is drawn the same way
    /// with the first excluded.
    fn select_parents(&self, rng: &mut RandomNumberGenerator) -> (usize, usize) {
        let sample = self.target_size.min(self.members.len());
        let scores: Vec<f64> = self.members[..sample].iter().map(|c| c.score()).collect();
        let max_plus_one = 1.0 + scores.iter().fold(f64::MIN, |a, &b| a.max(b));

        let first = roulette_index(&scores, max_plus_one, None, rng);
        let second = roulette_index(&scores, max_plus_one, Some(first), rng);
        (first, second)
    }

    /// Attempts to insert a candidate, rejecting exact-path duplicates and
    /// tracking the best candidate ever observed.
    fn insert(&mut self, candidate: Candidate) -> InsertOutcome {
        if self.seen.contains(candidate.path()) {
            return InsertOutcome::Duplicate;
        }

        let score = candidate.score();
        let is_best = self
            .best_so_far
            .as_ref()
            .map_or(true, |best| best.score() > score);
        if is_best {
            self.best_so_far = Some(candidate.clone());
        }

        self.seen.insert(candidate.path().to_vec());
        self.members.push(candidate);
        if is_best {
            InsertOutcome::BestSoFar
        } else {
            InsertOutcome::Inserted
        }
    }

    /// Elitist truncation: keep the `target_size` lowest-scoring members.
    /// The sort is stable, so ties keep their insertion order.
    fn truncate(&mut self) {
        self.members
            .sort_by(|a, b| a.score().total_cmp(&b.score()));
        while self.members.len() > self.target_size {
            let unfit = self
                .members
                .pop()
                .expect("members cannot be empty while longer than target");
            self.seen.remove(unfit.path());
        }
    }

    /// Best/worst/average score of the active set plus the best-so-far.
    pub fn stats(&self) -> GenerationStats {
        let mut best = f64::MAX;
        let mut worst = 0.0f64;
        let mut sum = 0.0;
        for member in &self.members {
            let score = member.score();
            best = best.min(score);
            worst = worst.max(score);
            sum += score;
        }
        GenerationStats {
            best,
            worst,
            average: sum / self.members.len() as f64,
            best_so_far: self.best().score(),
        }
    }

    /// The best candidate observed across the whole run.
    pub fn best(&self) -> &Candidate {
        self.best_so_far
            .as_ref()
            .expect("population is seeded at construction")
    }

    /// The active members.
    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    /// The number of active members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// The configured target size.
    pub fn target_size(&self) -> usize {
        self.target_size
    }
}

/// Weighted roulette choice of an initialization operator.
fn roulette_operator<'a>(
    operators: &'a [InitOperator],
    weights: &[f64],
    weight_sum: f64,
    rng: &mut RandomNumberGenerator,
) -> &'a InitOperator {
    let mut selector = rng.gen_f64() * weight_sum;
    let mut index = 0;
    while selector > weights[index] && index < operators.len() - 1 {
        selector -= weights[index];
        index += 1;
    }
    &operators[index]
}

/// Cumulative-walk roulette over `(max_plus_one - score)` weights,
/// optionally excluding one index. Falls back to the last eligible index if
/// floating-point drift exhausts the walk.
fn roulette_index(
    scores: &[f64],
    max_plus_one: f64,
    exclude: Option<usize>,
    rng: &mut RandomNumberGenerator,
) -> usize {
    let total: f64 = scores
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != exclude)
        .map(|(_, &s)| max_plus_one - s)
        .sum();

    let mut selector = rng.gen_f64() * total;
    let mut chosen = None;
    for (i, &score) in scores.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        chosen = Some(i);
        selector -= max_plus_one - score;
        if selector <= 0.0 {
            break;
        }
    }
    chosen.expect("selection sample contains at least one eligible candidate")
}

/// Applies each mutation operator up to its drawn repeat count, keeping a
/// mutant only when it strictly improves the score (greedy hill-climb per
/// operator; rejected mutants are discarded, never chained).
fn mutate_greedily(
    mut child: Candidate,
    mutation_operators: &[MutationOperator],
    max_mutations: &[usize],
    rng: &mut RandomNumberGenerator,
) -> Candidate {
    for (operator, &bound) in mutation_operators.iter().zip(max_mutations) {
        let times = rng.gen_index(bound);
        for _ in 0..times {
            let mutated = operator.run(&child, rng);
            if mutated.score() < child.score() {
                child = mutated;
            }
        }
    }
    child
}
