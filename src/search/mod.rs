//! # Search
//!
//! The outer layer of the genetic search: configuration options with a
//! fluent builder, and the [`Optimizer`] that seeds a population, runs a
//! fixed number of generations, and returns the best candidate observed.

pub mod optimizer;
pub mod options;

pub use optimizer::{Optimizer, SearchResult};
pub use options::{SearchOptions, SearchOptionsBuilder};
