//! Fitness-proportionate (roulette wheel) selection.
//!
//! Fitness scores are non-positive, so they are first shifted by
//! `|min| + 1`, making every weight at least 1. The worst board in a
//! generation therefore keeps a nonzero chance of being drawn, and a
//! generation of equally fit boards is resampled uniformly.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use crate::board::Board;

/// Shifted, strictly positive selection weights.
fn shifted_weights(fitness: &[i32]) -> Vec<f64> {
    let min = fitness.iter().copied().min().unwrap_or(0);
    let shift = i64::from(min.unsigned_abs()) + 1;
    fitness
        .iter()
        .map(|&f| (i64::from(f) + shift) as f64)
        .collect()
}

/// Normalized selection probability of each index.
///
/// # Examples
///
/// ```
/// use queens_ga::ga::selection_probabilities;
///
/// // shift = |-2| + 1 = 3 → weights [3, 2, 1]
/// let p = selection_probabilities(&[0, -1, -2]);
/// assert!((p[0] - 0.5).abs() < 1e-12);
/// assert!((p[2] - 1.0 / 6.0).abs() < 1e-12);
/// ```
pub fn selection_probabilities(fitness: &[i32]) -> Vec<f64> {
    let weights = shifted_weights(fitness);
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Draws `count` indices with replacement, proportionally to shifted fitness.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn roulette_indices<R: Rng + ?Sized>(fitness: &[i32], count: usize, rng: &mut R) -> Vec<usize> {
    assert!(!fitness.is_empty(), "cannot select from empty population");

    let n = fitness.len();
    let mut cumulative = shifted_weights(fitness);
    for i in 1..n {
        cumulative[i] += cumulative[i - 1];
    }
    let total = cumulative[n - 1];

    (0..count)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            // first index whose running total exceeds the threshold
            cumulative.partition_point(|&c| c <= threshold).min(n - 1)
        })
        .collect()
}

/// Builds a breeding pool of the same size as `population`.
///
/// Each slot holds its own clone, so a board drawn several times never
/// shares storage with its duplicates.
///
/// # Panics
/// Panics if `population` is empty or `fitness` has a different length.
pub fn roulette_select<R: Rng + ?Sized>(
    population: &[Board],
    fitness: &[i32],
    rng: &mut R,
) -> Vec<Board> {
    assert_eq!(
        population.len(),
        fitness.len(),
        "fitness vector must match population"
    );
    roulette_indices(fitness, population.len(), rng)
        .into_iter()
        .map(|i| population[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_probabilities_sum_to_one() {
        let p = selection_probabilities(&[-10, -4, 0, -56, -2]);
        let total: f64 = p.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(p.iter().all(|&x| x > 0.0));
    }

    #[test]
    fn test_worst_keeps_nonzero_probability() {
        let p = selection_probabilities(&[0, -56]);
        // weights: 57, 1
        assert!((p[1] - 1.0 / 58.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_fitness_is_uniform() {
        let p = selection_probabilities(&[-6; 4]);
        for &x in &p {
            assert!((x - 0.25).abs() < 1e-12, "expected uniform, got {p:?}");
        }
    }

    #[test]
    fn test_equal_fitness_draws_uniformly() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 40_000;
        let mut counts = [0u32; 4];
        for i in roulette_indices(&[-12; 4], n, &mut rng) {
            counts[i] += 1;
        }
        for &c in &counts {
            // expected 10_000 each
            assert!(
                (9_500..=10_500).contains(&c),
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let mut counts = [0u32; 4];
        // weights: 1, 11, 21, 6
        for i in roulette_indices(&[-20, -10, 0, -15], n, &mut rng) {
            counts[i] += 1;
        }
        assert!(counts[2] > counts[1] && counts[1] > counts[3] && counts[3] > counts[0]);
        let best_share = counts[2] as f64 / n as f64;
        assert!(
            (best_share - 21.0 / 39.0).abs() < 0.02,
            "best share {best_share} far from 21/39"
        );
    }

    #[test]
    fn test_single_individual() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roulette_indices(&[-3], 5, &mut rng), vec![0; 5]);
    }

    #[test]
    fn test_select_returns_same_size_copies() {
        let mut rng = StdRng::seed_from_u64(3);
        let pop = vec![
            Board::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap(),
            Board::new(vec![0; 8]).unwrap(),
        ];
        let fitness = vec![0, -56];
        let selected = roulette_select(&pop, &fitness, &mut rng);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|b| pop.contains(b)));
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        roulette_indices(&[], 1, &mut rng);
    }
}
