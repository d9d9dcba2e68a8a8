//! # Optimizer
//!
//! The generational driver: seeds a population, runs the configured number
//! of generations, and returns the best candidate observed together with
//! the per-generation statistics history.
//!
//! The run is fully sequential and deterministic for a fixed seed — every
//! stochastic choice flows through the one [`RandomNumberGenerator`] the
//! caller passes in, in a fixed order. The optimizer emits `tracing` events
//! for progress; rendering them is the caller's concern.

use std::rc::Rc;

use tracing::info;

use crate::candidate::Candidate;
use crate::error::{Result, SearchError};
use crate::lock::Lock;
use crate::population::{GenerationStats, Population};
use crate::rng::RandomNumberGenerator;
use crate::search::options::SearchOptions;

/// The outcome of a search run.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// The best candidate observed across all generations.
    pub best: Candidate,
    /// Its cumulative-latency score.
    pub score: f64,
    /// Population statistics after seeding (first entry) and after each
    /// generation.
    pub history: Vec<GenerationStats>,
}

/// Drives the genetic search over a lock.
#[derive(Debug)]
pub struct Optimizer {
    lock: Rc<Lock>,
    options: SearchOptions,
}

impl Optimizer {
    /// Creates an optimizer for the given lock and options.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] if the options fail
    /// [`SearchOptions::validate`] or the lock admits fewer than three
    /// valid words (the mutation operators need room to cut a segment).
    pub fn new(lock: Rc<Lock>, options: SearchOptions) -> Result<Self> {
        options.validate()?;
        if lock.word_count() < 3 {
            return Err(SearchError::Configuration(format!(
                "the lock admits only {} valid words; the search needs at least 3",
                lock.word_count()
            )));
        }
        Ok(Self { lock, options })
    }

    /// Runs the search: seed, evolve for the configured generation count,
    /// return the best candidate observed.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<SearchResult> {
        let mut population = Population::new(
            self.lock.clone(),
            self.options.get_init_operators(),
            self.options.get_init_weights(),
            self.options.get_population_size(),
            rng,
        )?;

        let mut history = Vec::with_capacity(self.options.get_generations() + 1);
        let seeded = population.stats();
        info!(
            best = seeded.best,
            worst = seeded.worst,
            average = seeded.average,
            "population seeded"
        );
        history.push(seeded);

        for generation in 1..=self.options.get_generations() {
            let stats = population.run_generation(
                self.options.get_mutation_operators(),
                self.options.get_max_mutations(),
                rng,
            )?;
            info!(
                generation,
                best = stats.best,
                worst = stats.worst,
                average = stats.average,
                best_so_far = stats.best_so_far,
                "generation complete"
            );
            history.push(stats);
        }

        let best = population.best().clone();
        Ok(SearchResult {
            score: best.score(),
            best,
            history,
        })
    }
}
