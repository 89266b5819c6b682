//! Board encoding and fitness evaluation.
//!
//! - [`Board`]: one candidate, a row index per column
//! - [`conflicts`] / [`fitness`]: ordered-pair attack penalty
//! - [`evaluate_population`]: the per-generation fitness vector

mod encoding;
mod fitness;

pub use encoding::{Board, DEFAULT_BOARD_SIZE};
pub use fitness::{conflicts, evaluate_population, fitness, max_conflicts};
