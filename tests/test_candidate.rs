use std::rc::Rc;

use lockpath::candidate::Candidate;
use lockpath::lock::{Lock, Stop};

fn sample_lock() -> Rc<Lock> {
    let wheels = vec!["ab".to_string(), "cd".to_string()];
    let words = ["ac", "ad", "bc", "bd"]
        .iter()
        .map(|w| (w.to_string(), 1))
        .collect::<Vec<_>>();
    Rc::new(Lock::new(&wheels, words, 0).unwrap())
}

/// Recomputes a path's score independently: the try cost joins the running
/// distance total *before* the total is added to the score.
fn expected_score(lock: &Lock, path: &[usize]) -> f64 {
    let mut dist_so_far = 0u64;
    let mut score = 0.0;
    let mut last = Stop::Initial;
    for &id in path {
        dist_so_far += 1 + u64::from(lock.distance(last, Stop::Word(id)));
        score += dist_so_far as f64;
        last = Stop::Word(id);
    }
    score
}

#[test]
fn test_score_matches_reference_accumulation() {
    let lock = sample_lock();
    for path in [
        vec![0, 1, 2, 3],
        vec![3, 2, 1, 0],
        vec![0, 2, 3, 1],
        vec![1, 0, 3, 2],
    ] {
        let candidate = Candidate::from_path(lock.clone(), path.clone());
        assert_eq!(candidate.score(), expected_score(&lock, &path));
    }
}

#[test]
fn test_score_on_zero_distance_path() {
    // A one-word lock whose only word is the initial word: the single step
    // has distance zero, so the score is the bare try cost 1 = sum(1..=1).
    let lock = Rc::new(
        Lock::new(
            &["ab".to_string(), "cd".to_string()],
            vec![("ac".to_string(), 1)],
            0,
        )
        .unwrap(),
    );
    let candidate = Candidate::from_path(lock, vec![0]);
    assert_eq!(candidate.score(), 1.0);
}

/// Two accumulation formulas for the score have existed: an older one that
/// kept the try cost out of the running distance total
/// (`dist += d; score += 1 + dist`) and the current one that folds it in
/// (`dist += 1 + d; score += dist`). They are not equivalent; this pins the
/// current behavior against the superseded one.
#[test]
fn test_score_diverges_from_superseded_accumulation() {
    let lock = sample_lock();
    let path = vec![0, 1, 2, 3];

    let superseded = {
        let mut dist_so_far = 0u64;
        let mut score = 0.0;
        let mut last = Stop::Initial;
        for &id in &path {
            dist_so_far += u64::from(lock.distance(last, Stop::Word(id)));
            score += (1 + dist_so_far) as f64;
            last = Stop::Word(id);
        }
        score
    };

    let candidate = Candidate::from_path(lock.clone(), path);
    assert_eq!(candidate.score(), 18.0);
    assert_eq!(superseded, 12.0);
    assert_ne!(candidate.score(), superseded);
}

#[test]
fn test_score_is_cached_until_mutation() {
    let lock = sample_lock();
    let mut candidate = Candidate::new(lock);
    candidate.push(3);
    // start -> bd costs 2 turns plus the try: running total 3.
    assert_eq!(candidate.score(), 3.0);
    assert_eq!(candidate.score(), 3.0);

    candidate.push(2);
    // bd -> bc is 1 turn: running total 5, score 3 + 5.
    assert_eq!(candidate.score(), 8.0);
}

#[test]
fn test_fitness_is_order_independent() {
    let lock = sample_lock();
    let a = Candidate::from_path(lock.clone(), vec![0, 1, 2, 3]);
    let b = Candidate::from_path(lock.clone(), vec![3, 1, 0, 2]);
    assert_eq!(a.fitness(), b.fitness());
    assert_eq!(a.fitness(), lock.lower_bound_fitness());
}

#[test]
fn test_words_reports_path_order() {
    let lock = sample_lock();
    let candidate = Candidate::from_path(lock, vec![2, 0, 3, 1]);
    let words: Vec<&str> = candidate.words().collect();
    assert_eq!(words, vec!["bc", "ac", "bd", "ad"]);
}
