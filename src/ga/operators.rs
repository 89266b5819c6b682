//! Variation operators for row-per-column boards.
//!
//! Operators take parents by reference (or a child by value) and return new
//! boards, so no board in the breeding pool is ever modified through an
//! alias of another slot.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: with probability `pc`, swap the tails of
//!   two parents at a random cut point in `[1, N-1]`
//!
//! # Mutation
//!
//! - [`reset_mutation`]: with probability `pm`, redraw one random gene
//!
//! # Breeding
//!
//! - [`breed`]: crossover over consecutive pairs, then mutation per child

use rand::Rng;

use crate::board::Board;

// ============================================================================
// Crossover
// ============================================================================

/// Deterministic single-point crossover at `cut`.
///
/// `child1 = p1[..cut] ++ p2[cut..]`, `child2 = p2[..cut] ++ p1[cut..]`.
///
/// # Panics
/// Panics if the parents have different sizes or `cut > size`.
pub fn crossover_at(parent1: &Board, parent2: &Board, cut: usize) -> (Board, Board) {
    let n = parent1.size();
    assert_eq!(n, parent2.size(), "parents must have equal length");
    assert!(cut <= n, "cut point {cut} beyond board size {n}");

    let (a, b) = (parent1.rows(), parent2.rows());
    let mut c1 = Vec::with_capacity(n);
    c1.extend_from_slice(&a[..cut]);
    c1.extend_from_slice(&b[cut..]);
    let mut c2 = Vec::with_capacity(n);
    c2.extend_from_slice(&b[..cut]);
    c2.extend_from_slice(&a[cut..]);

    (Board { rows: c1 }, Board { rows: c2 })
}

/// Single-point crossover applied with probability `pc`.
///
/// A uniform draw `r ∈ [0, 1)` decides: if `r < pc` the parents are cut at
/// a uniform point in `[1, N-1]`, otherwise the children are plain copies.
///
/// # Panics
/// Panics if the parents have different sizes or fewer than 2 columns.
pub fn single_point_crossover<R: Rng + ?Sized>(
    parent1: &Board,
    parent2: &Board,
    pc: f64,
    rng: &mut R,
) -> (Board, Board) {
    let n = parent1.size();
    assert_eq!(n, parent2.size(), "parents must have equal length");
    assert!(n >= 2, "crossover needs at least 2 columns");

    if rng.random::<f64>() < pc {
        let cut = rng.random_range(1..n);
        crossover_at(parent1, parent2, cut)
    } else {
        (parent1.clone(), parent2.clone())
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Random-reset mutation applied with probability `pm`.
///
/// Picks one column uniformly and redraws its row uniformly from `0..N`.
/// The new row may equal the old one; it is not resampled.
pub fn reset_mutation<R: Rng + ?Sized>(mut board: Board, pm: f64, rng: &mut R) -> Board {
    if rng.random::<f64>() < pm {
        let n = board.size();
        let col = rng.random_range(0..n);
        board.rows[col] = rng.random_range(0..n);
    }
    board
}

// ============================================================================
// Breeding pass
// ============================================================================

/// Produces the next generation from a selected pool.
///
/// Pairs `(0,1), (2,3), …` are crossed with probability `pc`; every child is
/// then passed through [`reset_mutation`] independently. The pool is
/// consumed and a new population of the same size is returned.
///
/// # Panics
/// Panics if the pool has odd length.
pub fn breed<R: Rng + ?Sized>(selected: Vec<Board>, pc: f64, pm: f64, rng: &mut R) -> Vec<Board> {
    assert!(
        selected.len() % 2 == 0,
        "breeding pool must have even length, got {}",
        selected.len()
    );

    let mut children = Vec::with_capacity(selected.len());
    for pair in selected.chunks_exact(2) {
        let (c1, c2) = single_point_crossover(&pair[0], &pair[1], pc, rng);
        children.push(c1);
        children.push(c2);
    }

    children
        .into_iter()
        .map(|child| reset_mutation(child, pm, rng))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
