use std::collections::HashSet;
use std::rc::Rc;

use lockpath::error::SearchError;
use lockpath::lock::Lock;
use lockpath::operators::{InitOperator, MutationOperator};
use lockpath::population::Population;
use lockpath::rng::RandomNumberGenerator;

fn cube_lock() -> Rc<Lock> {
    let wheels: Vec<String> = (0..3).map(|_| "abc".to_string()).collect();
    let symbols = ['a', 'b', 'c'];
    let mut words = Vec::new();
    for x in symbols {
        for y in symbols {
            for z in symbols {
                words.push((format!("{}{}{}", x, y, z), 1));
            }
        }
    }
    Rc::new(Lock::new(&wheels, words, 0).unwrap())
}

fn seeded(lock: Rc<Lock>, target_size: usize, rng: &mut RandomNumberGenerator) -> Population {
    Population::new(
        lock,
        &[InitOperator::Random, InitOperator::NearestUnvisited],
        &[1.0, 1.0],
        target_size,
        rng,
    )
    .unwrap()
}

#[test]
fn test_seeding_reaches_target_size_without_duplicates() {
    let mut rng = RandomNumberGenerator::from_seed(8);
    let population = seeded(cube_lock(), 10, &mut rng);

    assert_eq!(population.size(), 10);
    let distinct: HashSet<&[usize]> = population.members().iter().map(|c| c.path()).collect();
    assert_eq!(distinct.len(), 10);
}

#[test]
fn test_seeding_tracks_best() {
    let mut rng = RandomNumberGenerator::from_seed(8);
    let population = seeded(cube_lock(), 10, &mut rng);

    let best_active = population
        .members()
        .iter()
        .map(|c| c.score())
        .fold(f64::MAX, f64::min);
    assert_eq!(population.best().score(), best_active);
    assert_eq!(population.stats().best_so_far, best_active);
}

#[test]
fn test_generation_maintains_size_and_uniqueness() {
    let mut rng = RandomNumberGenerator::from_seed(13);
    let mut population = seeded(cube_lock(), 10, &mut rng);
    let operators = [
        MutationOperator::SegmentReverse,
        MutationOperator::SegmentShift,
    ];

    for _ in 0..5 {
        population
            .run_generation(&operators, &[10, 10], &mut rng)
            .unwrap();
        assert_eq!(population.size(), 10);
        let distinct: HashSet<&[usize]> = population.members().iter().map(|c| c.path()).collect();
        assert_eq!(distinct.len(), 10);
    }
}

#[test]
fn test_best_so_far_never_worsens() {
    let mut rng = RandomNumberGenerator::from_seed(5);
    let mut population = seeded(cube_lock(), 8, &mut rng);
    let operators = [
        MutationOperator::SegmentReverse,
        MutationOperator::SegmentShift,
    ];

    let mut previous = population.best().score();
    for _ in 0..10 {
        let stats = population
            .run_generation(&operators, &[20, 20], &mut rng)
            .unwrap();
        assert!(stats.best_so_far <= previous);
        assert!(stats.best >= stats.best_so_far);
        assert!(stats.worst >= stats.best);
        assert!(stats.average >= stats.best && stats.average <= stats.worst);
        previous = stats.best_so_far;
    }
}

#[test]
fn test_truncation_keeps_the_fittest() {
    let mut rng = RandomNumberGenerator::from_seed(17);
    let mut population = seeded(cube_lock(), 6, &mut rng);
    let operators = [MutationOperator::SegmentReverse];

    population
        .run_generation(&operators, &[10], &mut rng)
        .unwrap();

    // After truncation the members sit in ascending score order.
    let scores: Vec<f64> = population.members().iter().map(|c| c.score()).collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_construction_rejects_empty_operator_table() {
    let mut rng = RandomNumberGenerator::from_seed(1);
    let result = Population::new(cube_lock(), &[], &[], 4, &mut rng);
    assert!(matches!(result, Err(SearchError::Configuration(_))));
}

#[test]
fn test_construction_rejects_mismatched_weights() {
    let mut rng = RandomNumberGenerator::from_seed(1);
    let result = Population::new(
        cube_lock(),
        &[InitOperator::Random],
        &[1.0, 2.0],
        4,
        &mut rng,
    );
    assert!(matches!(result, Err(SearchError::Configuration(_))));
}

#[test]
fn test_construction_rejects_non_positive_weights() {
    let mut rng = RandomNumberGenerator::from_seed(1);
    for weight in [0.0, -1.0] {
        let result = Population::new(
            cube_lock(),
            &[InitOperator::Random],
            &[weight],
            4,
            &mut rng,
        );
        assert!(matches!(result, Err(SearchError::Configuration(_))));
    }
}

#[test]
fn test_construction_rejects_tiny_target_size() {
    let mut rng = RandomNumberGenerator::from_seed(1);
    let result = Population::new(cube_lock(), &[InitOperator::Random], &[1.0], 1, &mut rng);
    assert!(matches!(result, Err(SearchError::Configuration(_))));
}

#[test]
fn test_generation_rejects_mismatched_mutation_bounds() {
    let mut rng = RandomNumberGenerator::from_seed(2);
    let mut population = seeded(cube_lock(), 4, &mut rng);
    let result = population.run_generation(&[MutationOperator::SegmentShift], &[5, 5], &mut rng);
    assert!(matches!(result, Err(SearchError::Configuration(_))));
}

#[test]
fn test_generation_rejects_zero_mutation_bound() {
    let mut rng = RandomNumberGenerator::from_seed(2);
    let mut population = seeded(cube_lock(), 4, &mut rng);
    let result = population.run_generation(&[MutationOperator::SegmentShift], &[0], &mut rng);
    assert!(matches!(result, Err(SearchError::Configuration(_))));
}
