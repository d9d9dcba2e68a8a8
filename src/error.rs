//! # Error Types
//!
//! This module defines the error type for the lock-path search. It separates
//! the two failure families the search distinguishes: malformed configuration
//! (reported as `Err` values at construction time) and data-source problems
//! while loading the word list. Invariant breaches inside the genetic
//! operators are *not* represented here — an operator that produces a
//! non-permutation, or a crossover invoked on identical parents, indicates a
//! bug and aborts with a labeled panic instead of a recoverable error.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use lockpath::error::{Result, SearchError};
//!
//! fn validate(population_size: usize) -> Result<()> {
//!     if population_size < 2 {
//!         return Err(SearchError::Configuration(
//!             "population size must be at least 2".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use lockpath::error::ResultExt;
//! use std::fs::File;
//!
//! fn open_word_list(path: &str) -> lockpath::error::Result<File> {
//!     File::open(path).context("failed to open word list")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// An invalid configuration was provided: mismatched operator/weight
    /// arrays, non-positive weights or mutation bounds, or sizes too small
    /// for the search to operate.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The word source was missing, unreadable, or produced no usable words.
    /// Lock construction cannot proceed without one.
    #[error("Word source error: {0}")]
    WordSource(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized `Result` type for lock-path search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Extension trait for `Result` to add context to errors.
///
/// This provides a convenient way to convert foreign error types into a
/// [`SearchError`] while recording where the failure happened.
///
/// ## Examples
///
/// ```rust
/// use lockpath::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> lockpath::error::Result<()> {
///     File::open(path).context("failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error, converting it to a [`SearchError`].
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| SearchError::Other(format!("{}: {}", context, e)))
    }
}
