//! Genetic Algorithm for N-Queens.
//!
//! A generational GA over [`Board`](crate::board::Board) candidates:
//! evaluate → select → recombine → mutate, until a zero-conflict board
//! appears or the generation budget runs out.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, budget)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best board found plus convergence metadata
//! - [`GaObserver`]: Per-generation and completion progress events
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover, random-reset mutation, breeding pass
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod observer;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use observer::{FnObserver, GaObserver, GenerationStats, NoopObserver, TracingObserver};
pub use runner::{solve, GaResult, GaRunner, Termination};
pub use selection::{roulette_indices, roulette_select, selection_probabilities};
