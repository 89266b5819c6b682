//! Progress reporting for the evolutionary loop.
//!
//! The runner never prints. Callers that want progress plug in a
//! [`GaObserver`]: one event per evaluated generation and one on completion.

use super::runner::GaResult;

/// Snapshot of one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Best fitness within this generation.
    pub generation_best: i32,

    /// Best fitness seen in any generation so far.
    pub best_fitness: i32,

    /// Mean fitness of this generation.
    pub mean_fitness: f64,
}

impl GenerationStats {
    /// Conflict count of this generation's best board.
    pub fn best_penalty(&self) -> u32 {
        self.generation_best.unsigned_abs()
    }
}

/// Receives progress events from [`GaRunner`](super::GaRunner).
///
/// Both methods default to no-ops.
pub trait GaObserver {
    /// Called after every generation is evaluated.
    fn on_generation(&mut self, _stats: &GenerationStats) {}

    /// Called once when the run terminates.
    fn on_complete(&mut self, _result: &GaResult) {}
}

impl<O: GaObserver + ?Sized> GaObserver for &mut O {
    fn on_generation(&mut self, stats: &GenerationStats) {
        (**self).on_generation(stats);
    }

    fn on_complete(&mut self, result: &GaResult) {
        (**self).on_complete(result);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GaObserver for NoopObserver {}

/// Observer that forwards events to `tracing` at `INFO` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GaObserver for TracingObserver {
    fn on_generation(&mut self, stats: &GenerationStats) {
        tracing::info!(
            generation = stats.generation,
            penalty = stats.best_penalty(),
            "generation evaluated"
        );
    }

    fn on_complete(&mut self, result: &GaResult) {
        if result.solved {
            tracing::info!(
                generation = result.found_at_generation,
                board = ?result.best.rows(),
                "found optimal solution"
            );
        } else {
            tracing::info!(
                generations = result.generations,
                penalty = result.best_penalty(),
                board = ?result.best.rows(),
                termination = ?result.termination,
                "stopped without optimal solution"
            );
        }
    }
}

/// Adapts a closure into a per-generation observer.
///
/// ```
/// use queens_ga::ga::{FnObserver, GaConfig, GaRunner, GenerationStats};
///
/// let mut seen = 0;
/// let config = GaConfig::default().with_max_generations(5).with_seed(1);
/// GaRunner::run_with_observer(&config, &mut FnObserver(|_: &GenerationStats| seen += 1)).unwrap();
/// assert!((1..=5).contains(&seen));
/// ```
pub struct FnObserver<F>(pub F);

impl<F: FnMut(&GenerationStats)> GaObserver for FnObserver<F> {
    fn on_generation(&mut self, stats: &GenerationStats) {
        (self.0)(stats);
    }
}
