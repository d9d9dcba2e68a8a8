//! # Genetic Operators
//!
//! The operators that build and rearrange candidate paths: initialization
//! ([`InitOperator`]), structural mutation ([`MutationOperator`]), and the
//! order-preserving [`crossover`].
//!
//! Every operator's output is a full permutation of the lock's word ids.
//! That is an invariant, not a recoverable condition: an output with a
//! duplicated or missing id indicates an operator bug and aborts with a
//! labeled panic.

pub mod crossover;
pub mod init;
pub mod mutation;

pub use crossover::crossover;
pub use init::InitOperator;
pub use mutation::MutationOperator;

/// Verifies that `path` contains every id in `0..n` exactly once.
///
/// # Panics
///
/// Panics with an invariant-violation message naming `operator` otherwise.
pub(crate) fn assert_permutation(path: &[usize], n: usize, operator: &str) {
    if path.len() != n {
        panic!(
            "invariant violation: {} produced {} words, expected {}",
            operator,
            path.len(),
            n
        );
    }
    let mut used = vec![false; n];
    for &id in path {
        if used[id] {
            panic!(
                "invariant violation: {} placed word {} twice",
                operator, id
            );
        }
        used[id] = true;
    }
}
