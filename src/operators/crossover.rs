//! # Crossover
//!
//! Combines two distinct parent paths into two children that are full
//! permutations of the same id set, preserving as much shared ordering as
//! the parents already agree on.

use crate::candidate::Candidate;
use crate::operators::assert_permutation;

/// Crosses two distinct parents into two children.
///
/// The children are built in three phases:
///
/// 1. The shared prefix — positions where the parents already agree — is
///    copied verbatim into both children.
/// 2. From the divergence point, child 1 copies ids from parent 0 until
///    parent 0's sequence reaches the id parent 1 has queued at the
///    divergence point; child 0 is filled symmetrically from parent 1 until
///    it reaches parent 0's divergence id. This keeps a contiguous run of
///    the other parent's ordering intact.
/// 3. The remaining positions of child 0 are filled from parent 0, and of
///    child 1 from parent 1, in parental order, skipping ids already placed.
///
/// # Panics
///
/// Panics if the parents are path-identical ("duplicate parents" — the
/// caller's selection should never have paired them), and on any would-be
/// duplicate insertion during phase 2 (invariant violation).
pub fn crossover(parent0: &Candidate, parent1: &Candidate) -> (Candidate, Candidate) {
    debug_assert!(std::rc::Rc::ptr_eq(parent0.lock(), parent1.lock()));
    if parent0 == parent1 {
        panic!("invariant violation: crossover invoked with duplicate parents");
    }

    let n = parent0.len();
    let lock = parent0.lock();
    let mut child0 = Candidate::new(lock.clone());
    let mut child1 = Candidate::new(lock.clone());
    let mut used0 = vec![false; n];
    let mut used1 = vec![false; n];

    // Phase 1: shared prefix.
    let mut index = 0;
    while parent0.get(index) == parent1.get(index) {
        let id = parent0.get(index);
        child0.push(id);
        child1.push(id);
        used0[id] = true;
        used1[id] = true;
        index += 1;
    }

    // Phase 2: child 1 follows parent 0 until it reaches parent 1's next id.
    let next_in_1 = parent1.get(index);
    let mut index1 = index;
    while index1 < n && parent0.get(index1) != next_in_1 {
        let id = parent0.get(index1);
        if used1[id] {
            panic!("invariant violation: crossover would place word {} twice", id);
        }
        child1.push(id);
        used1[id] = true;
        index1 += 1;
    }

    // ... and child 0 follows parent 1 until it reaches parent 0's next id.
    let next_in_0 = parent0.get(index);
    let mut index2 = index;
    while index2 < n && parent1.get(index2) != next_in_0 {
        let id = parent1.get(index2);
        if used0[id] {
            panic!("invariant violation: crossover would place word {} twice", id);
        }
        child0.push(id);
        used0[id] = true;
        index2 += 1;
    }

    // Phase 3: each child takes its own parent's remaining ids in order.
    for i in index..n {
        let id = parent0.get(i);
        if !used0[id] {
            child0.push(id);
            used0[id] = true;
        }
        let id = parent1.get(i);
        if !used1[id] {
            child1.push(id);
            used1[id] = true;
        }
    }

    assert_permutation(child0.path(), n, "crossover");
    assert_permutation(child1.path(), n, "crossover");
    (child0, child1)
}
