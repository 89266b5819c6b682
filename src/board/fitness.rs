//! Conflict-count fitness for queen placements.
//!
//! For every ordered pair of columns `(i, j)` with `i != j`, the queen in
//! column `j` threatens the queen in column `i` when it shares the row or
//! sits on either diagonal (`|row_i - row_j| == |i - j|`). Each ordered pair
//! counts once, so every unordered clash contributes 2 to the penalty.
//!
//! # Complexity
//! O(N²) per board, O(N²·P) per generation for a population of size P.

use super::Board;

/// Number of ordered attacking pairs on the board.
///
/// # Examples
///
/// ```
/// use queens_ga::board::conflicts;
///
/// assert_eq!(conflicts(&[0, 4, 7, 5, 2, 6, 1, 3]), 0);
/// assert_eq!(conflicts(&[0; 8]), 56);
/// ```
pub fn conflicts(rows: &[usize]) -> u32 {
    let mut penalty = 0;
    for (i, &ri) in rows.iter().enumerate() {
        for (j, &rj) in rows.iter().enumerate() {
            if i == j {
                continue;
            }
            let d = i.abs_diff(j);
            if rj == ri || ri.abs_diff(rj) == d {
                penalty += 1;
            }
        }
    }
    penalty
}

/// Fitness score: `-conflicts(rows)`. Always `<= 0`; `0` is optimal.
pub fn fitness(rows: &[usize]) -> i32 {
    -(conflicts(rows) as i32)
}

/// Worst possible penalty for an `n`-column board (every queen on one row).
pub fn max_conflicts(n: usize) -> u32 {
    (n * n.saturating_sub(1)) as u32
}

/// Scores every board in the population, preserving order.
///
/// With the `parallel` feature enabled and `parallel == true`, boards are
/// scored on the rayon pool. Otherwise evaluation is sequential.
pub fn evaluate_population(population: &[Board], parallel: bool) -> Vec<i32> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return population.par_iter().map(Board::fitness).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(Board::fitness).collect()
}
