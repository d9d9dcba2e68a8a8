use std::rc::Rc;

use lockpath::candidate::Candidate;
use lockpath::error::SearchError;
use lockpath::lock::Lock;
use lockpath::operators::{InitOperator, MutationOperator};
use lockpath::rng::RandomNumberGenerator;
use lockpath::search::{Optimizer, SearchOptions};

fn worked_example_lock() -> Rc<Lock> {
    let wheels = vec!["ab".to_string(), "cd".to_string()];
    let words = ["ac", "ad", "bc", "bd"]
        .iter()
        .map(|w| (w.to_string(), 1))
        .collect::<Vec<_>>();
    Rc::new(Lock::new(&wheels, words, 0).unwrap())
}

/// All orderings of `0..n`, for brute-forcing small locks.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn recurse(prefix: &mut Vec<usize>, used: &mut Vec<bool>, out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for id in 0..used.len() {
            if !used[id] {
                used[id] = true;
                prefix.push(id);
                recurse(prefix, used, out);
                prefix.pop();
                used[id] = false;
            }
        }
    }

    let mut out = Vec::new();
    recurse(&mut Vec::new(), &mut vec![false; n], &mut out);
    out
}

fn brute_force_minimum(lock: &Rc<Lock>) -> f64 {
    permutations(lock.word_count())
        .into_iter()
        .map(|path| Candidate::from_path(lock.clone(), path).score())
        .fold(f64::MAX, f64::min)
}

fn small_options(init_operators: Vec<InitOperator>, init_weights: Vec<f64>) -> SearchOptions {
    SearchOptions::builder()
        .init_operators(init_operators)
        .init_weights(init_weights)
        .mutation_operators(vec![
            MutationOperator::SegmentReverse,
            MutationOperator::SegmentShift,
        ])
        .max_mutations(vec![8, 8])
        .population_size(4)
        .generations(20)
        .build()
}

#[test]
fn test_worked_example_converges_to_brute_force_optimum() {
    let lock = worked_example_lock();
    let optimum = brute_force_minimum(&lock);

    let options = small_options(
        vec![InitOperator::Random, InitOperator::NearestUnvisited],
        vec![1.0, 1.0],
    );
    let optimizer = Optimizer::new(lock, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(4);
    let result = optimizer.run(&mut rng).unwrap();

    assert_eq!(result.score, optimum);
    assert_eq!(result.best.score(), result.score);
}

#[test]
fn test_random_seeding_still_improves() {
    let lock = worked_example_lock();
    let optimum = brute_force_minimum(&lock);

    let options = small_options(vec![InitOperator::Random], vec![1.0]);
    let optimizer = Optimizer::new(lock, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(99);
    let result = optimizer.run(&mut rng).unwrap();

    // The heuristic may not prove optimality, but it never reports a score
    // below the true minimum and never worsens across generations.
    assert!(result.score >= optimum);
    let best_so_far: Vec<f64> = result.history.iter().map(|s| s.best_so_far).collect();
    assert!(best_so_far.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(result.score, *best_so_far.last().unwrap());
}

#[test]
fn test_identical_seeds_reproduce_identical_runs() {
    let options = small_options(
        vec![InitOperator::Random, InitOperator::NearestUnvisited],
        vec![2.0, 1.0],
    );

    let run = |seed: u64| {
        let lock = worked_example_lock();
        let optimizer = Optimizer::new(lock, options.clone()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(seed);
        optimizer.run(&mut rng).unwrap()
    };

    let first = run(7);
    let second = run(7);

    assert_eq!(first.score, second.score);
    assert_eq!(first.best.path(), second.best.path());
    assert_eq!(first.history, second.history);
}

#[test]
fn test_history_covers_seeding_and_every_generation() {
    let lock = worked_example_lock();
    // The greedy initializer alone can only produce two distinct paths on
    // this lock, so mix in random seeding to fill a size-4 population.
    let options = small_options(
        vec![InitOperator::Random, InitOperator::NearestUnvisited],
        vec![1.0, 1.0],
    );
    let generations = options.get_generations();
    let optimizer = Optimizer::new(lock, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(1);
    let result = optimizer.run(&mut rng).unwrap();

    assert_eq!(result.history.len(), generations + 1);
}

#[test]
fn test_optimizer_rejects_invalid_options() {
    let lock = worked_example_lock();

    let mismatched = SearchOptions::builder()
        .init_operators(vec![InitOperator::Random])
        .init_weights(vec![1.0, 1.0])
        .build();
    assert!(matches!(
        Optimizer::new(lock.clone(), mismatched),
        Err(SearchError::Configuration(_))
    ));

    let zero_generations = SearchOptions::builder().generations(0).build();
    assert!(matches!(
        Optimizer::new(lock.clone(), zero_generations),
        Err(SearchError::Configuration(_))
    ));

    let zero_bound = SearchOptions::builder()
        .mutation_operators(vec![MutationOperator::SegmentShift])
        .max_mutations(vec![0])
        .build();
    assert!(matches!(
        Optimizer::new(lock, zero_bound),
        Err(SearchError::Configuration(_))
    ));
}

#[test]
fn test_optimizer_rejects_tiny_locks() {
    let wheels = vec!["ab".to_string(), "cd".to_string()];
    let words = vec![("ac".to_string(), 1), ("bd".to_string(), 1)];
    let lock = Rc::new(Lock::new(&wheels, words, 0).unwrap());

    let result = Optimizer::new(lock, SearchOptions::default());
    assert!(matches!(result, Err(SearchError::Configuration(_))));
}
