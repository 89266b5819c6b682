//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! Each generation is evaluated, reported, and checked for termination
//! before the next one is bred. The new population is built in full and
//! then replaces the old one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::instrument;

use super::config::GaConfig;
use super::observer::{GaObserver, GenerationStats, NoopObserver};
use super::operators::breed;
use super::selection::roulette_select;
use crate::board::{evaluate_population, Board};
use crate::error::Result;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A zero-conflict board was found.
    Solved,
    /// The generation budget was used up.
    MaxGenerations,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a GA run.
///
/// Contains the best board found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best board found during the entire run.
    pub best: Board,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: i32,

    /// 1-based generation in which `best` was first seen.
    pub found_at_generation: usize,

    /// Total number of generations evaluated.
    pub generations: usize,

    /// Whether `best` is a zero-conflict placement.
    pub solved: bool,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best-so-far fitness after each evaluated generation.
    pub fitness_history: Vec<i32>,
}

impl GaResult {
    /// Conflict count of the best board.
    pub fn best_penalty(&self) -> u32 {
        self.best_fitness.unsigned_abs()
    }
}

/// Best board seen so far. Replaced only by a strictly fitter board.
struct BestSolution {
    board: Board,
    fitness: i32,
    generation: usize,
}

impl BestSolution {
    fn offer(&mut self, population: &[Board], idx: usize, fitness: i32, generation: usize) {
        if fitness > self.fitness {
            self.board = population[idx].clone();
            self.fitness = fitness;
            self.generation = generation;
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use queens_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_max_generations(200).with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.best_fitness <= 0);
/// assert_eq!(result.best.fitness(), result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA without progress reporting.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(config, &mut NoopObserver, None)
    }

    /// Runs the GA, reporting progress to `observer`.
    pub fn run_with_observer<O: GaObserver + ?Sized>(
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult> {
        Self::run_with_cancel(config, observer, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop after the current generation has been evaluated and return the
    /// best board found so far.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`](crate::GaError::InvalidConfiguration)
    /// before any work is done if `config` fails validation.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population_size = config.population_size,
            board_size = config.board_size,
            max_generations = config.max_generations
        )
    )]
    pub fn run_with_cancel<O: GaObserver + ?Sized>(
        config: &GaConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);
        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));
        tracing::info!(seed, "starting run");

        // 1. Initialize and evaluate the first generation
        let mut population: Vec<Board> = (0..config.population_size)
            .map(|_| Board::random(config.board_size, &mut rng))
            .collect();
        let mut fitness = evaluate_population(&population, config.parallel);

        let mut generation = 1;
        let (idx, mut gen_best) = fittest(&fitness);
        let mut best = BestSolution {
            board: population[idx].clone(),
            fitness: gen_best,
            generation,
        };
        let mut fitness_history = Vec::with_capacity(config.max_generations.min(1024));

        // 2. Evolutionary loop
        let termination = loop {
            fitness_history.push(best.fitness);

            let stats = GenerationStats {
                generation,
                generation_best: gen_best,
                best_fitness: best.fitness,
                mean_fitness: mean(&fitness),
            };
            tracing::debug!(
                generation,
                penalty = stats.best_penalty(),
                best_penalty = best.fitness.unsigned_abs(),
                "generation evaluated"
            );
            observer.on_generation(&stats);

            if gen_best == 0 {
                break Termination::Solved;
            }
            if generation >= config.max_generations {
                break Termination::MaxGenerations;
            }
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                break Termination::Cancelled;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break Termination::TimeLimit;
            }

            // Selection, then crossover and mutation into a fresh population
            let selected = roulette_select(&population, &fitness, &mut rng);
            population = breed(
                selected,
                config.crossover_rate,
                config.mutation_rate,
                &mut rng,
            );

            generation += 1;
            fitness = evaluate_population(&population, config.parallel);
            let (idx, f) = fittest(&fitness);
            gen_best = f;
            best.offer(&population, idx, f, generation);
        };

        let result = GaResult {
            solved: best.fitness == 0,
            best_fitness: best.fitness,
            found_at_generation: best.generation,
            best: best.board,
            generations: generation,
            termination,
            fitness_history,
        };
        tracing::info!(
            generations = result.generations,
            best_penalty = result.best_penalty(),
            termination = ?result.termination,
            "run finished"
        );
        observer.on_complete(&result);
        Ok(result)
    }
}

/// Runs the GA on the default 8×8 board with the four core parameters.
///
/// ```
/// let result = queens_ga::solve(100, 50, 0.7, 0.01).unwrap();
/// assert!(result.generations <= 50);
///
/// assert!(queens_ga::solve(99, 50, 0.7, 0.01).is_err());
/// ```
pub fn solve(
    population_size: usize,
    max_generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
) -> Result<GaResult> {
    let config = GaConfig::new(
        population_size,
        max_generations,
        crossover_rate,
        mutation_rate,
    );
    GaRunner::run(&config)
}

/// Index and value of the highest fitness; ties keep the first index.
fn fittest(fitness: &[i32]) -> (usize, i32) {
    fitness
        .iter()
        .copied()
        .enumerate()
        .fold((0, i32::MIN), |acc, (i, f)| if f > acc.1 { (i, f) } else { acc })
}

fn mean(fitness: &[i32]) -> f64 {
    if fitness.is_empty() {
        return 0.0;
    }
    fitness.iter().map(|&f| f64::from(f)).sum::<f64>() / fitness.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
