//! # SearchOptions
//!
//! The `SearchOptions` struct carries the configuration of a search run: the
//! initialization operator table with its weights, the mutation operator
//! sequence with per-operator repeat bounds, the population target size, and
//! the generation count.
//!
//! ## Example
//!
//! ```rust
//! use lockpath::search::SearchOptions;
//! use lockpath::operators::{InitOperator, MutationOperator};
//!
//! // Defaults mirror a full production run.
//! let defaults = SearchOptions::default();
//! assert_eq!(defaults.get_population_size(), 100);
//!
//! // The builder overrides individual fields.
//! let options = SearchOptions::builder()
//!     .init_operators(vec![InitOperator::Random, InitOperator::NearestUnvisited])
//!     .init_weights(vec![1.0, 3.0])
//!     .mutation_operators(vec![MutationOperator::SegmentReverse, MutationOperator::SegmentShift])
//!     .max_mutations(vec![50, 50])
//!     .population_size(20)
//!     .generations(40)
//!     .build();
//! assert!(options.validate().is_ok());
//! ```

use crate::error::{Result, SearchError};
use crate::operators::{InitOperator, MutationOperator};

/// Configuration of a search run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    init_operators: Vec<InitOperator>,
    init_weights: Vec<f64>,
    mutation_operators: Vec<MutationOperator>,
    max_mutations: Vec<usize>,
    population_size: usize,
    generations: usize,
}

impl SearchOptions {
    pub fn get_init_operators(&self) -> &[InitOperator] {
        &self.init_operators
    }

    pub fn get_init_weights(&self) -> &[f64] {
        &self.init_weights
    }

    pub fn get_mutation_operators(&self) -> &[MutationOperator] {
        &self.mutation_operators
    }

    pub fn get_max_mutations(&self) -> &[usize] {
        &self.max_mutations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_generations(&self) -> usize {
        self.generations
    }

    /// Checks the configuration invariants the population and optimizer
    /// depend on.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] when: no initialization
    /// operator is configured, an operator array and its weight/bound array
    /// differ in length, a weight is not strictly positive, a mutation
    /// bound is zero, the population size is below 2, or the generation
    /// count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.init_operators.is_empty() {
            return Err(SearchError::Configuration(
                "at least one initialization operator is required".to_string(),
            ));
        }
        if self.init_operators.len() != self.init_weights.len() {
            return Err(SearchError::Configuration(format!(
                "initialization operator and weight arrays differ in length ({} vs {})",
                self.init_operators.len(),
                self.init_weights.len()
            )));
        }
        if self.init_weights.iter().any(|&w| w <= 0.0) {
            return Err(SearchError::Configuration(
                "initialization weights must be strictly positive".to_string(),
            ));
        }
        if self.mutation_operators.len() != self.max_mutations.len() {
            return Err(SearchError::Configuration(format!(
                "mutation operator and bound arrays differ in length ({} vs {})",
                self.mutation_operators.len(),
                self.max_mutations.len()
            )));
        }
        if self.max_mutations.iter().any(|&m| m == 0) {
            return Err(SearchError::Configuration(
                "mutation bounds must be at least 1".to_string(),
            ));
        }
        if self.population_size < 2 {
            return Err(SearchError::Configuration(
                "population size must be at least 2".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(SearchError::Configuration(
                "generation count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for assembling a `SearchOptions` instance.
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }
}

impl Default for SearchOptions {
    /// The parameters of a full production run: greedy seeding only, three
    /// alternating reverse/shift mutation passes with generous bounds, a
    /// population of 100 evolved for 100 generations.
    fn default() -> Self {
        Self {
            init_operators: vec![InitOperator::NearestUnvisited],
            init_weights: vec![1.0],
            mutation_operators: vec![
                MutationOperator::SegmentReverse,
                MutationOperator::SegmentShift,
                MutationOperator::SegmentReverse,
                MutationOperator::SegmentShift,
                MutationOperator::SegmentReverse,
                MutationOperator::SegmentShift,
            ],
            max_mutations: vec![1000; 6],
            population_size: 100,
            generations: 100,
        }
    }
}

/// Builder for [`SearchOptions`]. Unset fields fall back to the defaults.
#[derive(Clone, Debug, Default)]
pub struct SearchOptionsBuilder {
    init_operators: Option<Vec<InitOperator>>,
    init_weights: Option<Vec<f64>>,
    mutation_operators: Option<Vec<MutationOperator>>,
    max_mutations: Option<Vec<usize>>,
    population_size: Option<usize>,
    generations: Option<usize>,
}

impl SearchOptionsBuilder {
    /// Sets the initialization operator table.
    pub fn init_operators(mut self, value: Vec<InitOperator>) -> Self {
        self.init_operators = Some(value);
        self
    }

    /// Sets the initialization operator weights.
    pub fn init_weights(mut self, value: Vec<f64>) -> Self {
        self.init_weights = Some(value);
        self
    }

    /// Sets the mutation operator sequence.
    pub fn mutation_operators(mut self, value: Vec<MutationOperator>) -> Self {
        self.mutation_operators = Some(value);
        self
    }

    /// Sets the per-operator mutation repeat bounds.
    pub fn max_mutations(mut self, value: Vec<usize>) -> Self {
        self.max_mutations = Some(value);
        self
    }

    /// Sets the population target size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of generations to run.
    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    /// Builds the `SearchOptions`, filling unset fields from the defaults.
    /// Validation happens when the options reach an
    /// [`Optimizer`](crate::search::Optimizer).
    pub fn build(self) -> SearchOptions {
        let defaults = SearchOptions::default();
        SearchOptions {
            init_operators: self.init_operators.unwrap_or(defaults.init_operators),
            init_weights: self.init_weights.unwrap_or(defaults.init_weights),
            mutation_operators: self
                .mutation_operators
                .unwrap_or(defaults.mutation_operators),
            max_mutations: self.max_mutations.unwrap_or(defaults.max_mutations),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            generations: self.generations.unwrap_or(defaults.generations),
        }
    }
}
