//! Candidate encoding: one row index per column.

use std::fmt;

use rand::Rng;

use super::fitness;
use crate::error::{GaError, Result};

/// Default board size (the classic eight-queens puzzle).
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// A candidate placement of N queens on an N×N board.
///
/// Index `i` is a column and `rows()[i]` is the row of the queen in that
/// column, so at most one queen sits in each column by construction. Rows
/// may repeat; row and diagonal clashes are what [`fitness`] penalizes.
///
/// # Examples
///
/// ```
/// use queens_ga::board::Board;
///
/// let board = Board::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
/// assert_eq!(board.size(), 8);
/// assert!(board.is_solution());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub(crate) rows: Vec<usize>,
}

impl Board {
    /// Builds a board from raw row indices.
    ///
    /// Fails if `rows` is empty or any value is not in `0..rows.len()`.
    pub fn new(rows: Vec<usize>) -> Result<Self> {
        if rows.is_empty() {
            return Err(GaError::InvalidBoard {
                rows,
                reason: "board must have at least one column".into(),
            });
        }
        let n = rows.len();
        if let Some(&bad) = rows.iter().find(|&&r| r >= n) {
            return Err(GaError::InvalidBoard {
                reason: format!("row {bad} out of range 0..{n}"),
                rows,
            });
        }
        Ok(Self { rows })
    }

    /// Creates a board with every gene drawn uniformly from `0..n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        assert!(n > 0, "board size must be positive");
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { rows }
    }

    /// Row index per column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Ordered-pair conflict count. See [`fitness::conflicts`].
    pub fn conflicts(&self) -> u32 {
        fitness::conflicts(&self.rows)
    }

    /// Negated conflict count; `0` is optimal.
    pub fn fitness(&self) -> i32 {
        fitness::fitness(&self.rows)
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Consumes the board, returning its rows.
    pub fn into_rows(self) -> Vec<usize> {
        self.rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            for (col, &queen_row) in self.rows.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if queen_row == row { "Q" } else { "." })?;
            }
            if row + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_accepts_valid_rows() {
        let board = Board::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
        assert_eq!(board.rows(), &[0, 4, 7, 5, 2, 6, 1, 3]);
        assert_eq!(board.size(), 8);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            Board::new(vec![]),
            Err(GaError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_new_rejects_out_of_range_row() {
        let err = Board::new(vec![0, 1, 4, 2]).unwrap_err();
        match err {
            GaError::InvalidBoard { rows, reason } => {
                assert_eq!(rows, vec![0, 1, 4, 2]);
                assert!(reason.contains("row 4"), "unexpected reason: {reason}");
            }
            other => panic!("expected InvalidBoard, got {other:?}"),
        }
    }

    #[test]
    fn test_random_genes_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let board = Board::random(8, &mut rng);
            assert_eq!(board.size(), 8);
            assert!(board.rows().iter().all(|&r| r < 8));
        }
    }

    #[test]
    fn test_random_allows_repeated_rows() {
        // 8 independent draws from 0..8 collide almost always
        let mut rng = StdRng::seed_from_u64(7);
        let repeated = (0..100)
            .map(|_| Board::random(8, &mut rng))
            .filter(|b| {
                let mut seen = [false; 8];
                b.rows().iter().any(|&r| std::mem::replace(&mut seen[r], true))
            })
            .count();
        assert!(repeated > 90, "expected most boards to repeat a row, got {repeated}");
    }

    #[test]
    fn test_is_solution() {
        assert!(Board::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap().is_solution());
        assert!(!Board::new(vec![0; 8]).unwrap().is_solution());
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new(vec![1, 3, 0, 2]).unwrap();
        let expected = ". . Q .\nQ . . .\n. . . Q\n. Q . .";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_into_rows() {
        let board = Board::new(vec![2, 0, 1]).unwrap();
        assert_eq!(board.into_rows(), vec![2, 0, 1]);
    }
}
