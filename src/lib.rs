//! Genetic-algorithm solver for the N-Queens placement problem.
//!
//! Searches for a placement of N mutually non-attacking queens on an N×N
//! board (N = 8 by default) with a plain generational GA:
//!
//! - **Board encoding**: one row index per column ([`board::Board`]).
//! - **Fitness**: negated count of ordered attacking pairs; `0` is optimal.
//! - **Selection**: fitness-proportionate roulette wheel.
//! - **Variation**: single-point crossover and single-gene random reset.
//! - **Evolution loop**: stops on the first zero-conflict board or when the
//!   generation budget is exhausted.
//!
//! The search is stochastic. Exhausting the budget without a solution is a
//! normal [`GaResult`], not an error.
//!
//! # Example
//!
//! ```
//! use queens_ga::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default().with_max_generations(500).with_seed(7);
//! let result = GaRunner::run(&config)?;
//! println!("{}\npenalty = {}", result.best, result.best_penalty());
//! # Ok::<(), queens_ga::GaError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate populations on the rayon thread pool.
//! - `serde`: derive `Serialize`/`Deserialize` for configs, boards and results.

pub mod board;
pub mod error;
pub mod ga;

pub use error::{GaError, Result};
pub use ga::{solve, GaConfig, GaResult, GaRunner};
