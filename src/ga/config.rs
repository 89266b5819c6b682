//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::{GaError, Result};

/// Configuration for the N-Queens genetic algorithm.
///
/// # Defaults
///
/// ```
/// use queens_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 10_000);
/// assert_eq!(config.board_size, 8);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of boards in the population.
    ///
    /// Must be even and positive: the breeding pass pairs boards two at a time.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, both children are copies of their parents.
    pub crossover_rate: f64,

    /// Probability of mutating one gene of an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Board dimension N (columns and rows). Must be at least 2.
    pub board_size: usize,

    /// Whether to evaluate boards in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so a run may exceed the
    /// limit by one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 10_000,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            board_size: DEFAULT_BOARD_SIZE,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Creates a configuration from the four core parameters.
    ///
    /// Remaining fields take their defaults. Call [`validate`](Self::validate)
    /// (or run the solver, which validates) to check the values.
    pub fn new(
        population_size: usize,
        max_generations: usize,
        crossover_rate: f64,
        mutation_rate: f64,
    ) -> Self {
        Self {
            population_size,
            max_generations,
            crossover_rate,
            mutation_rate,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the board dimension.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidConfiguration`] describing the first
    /// offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be positive"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid(format!(
                "population_size must be even, got {}",
                self.population_size
            )));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        if self.board_size < 2 {
            return Err(invalid(format!(
                "board_size must be at least 2, got {}",
                self.board_size
            )));
        }
        if self.time_limit_ms == Some(0) {
            return Err(invalid("time_limit_ms must be positive or None"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> GaError {
    GaError::InvalidConfiguration(msg.into())
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be in [0, 1], got {p}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(config: &GaConfig, needle: &str) {
        match config.validate() {
            Err(GaError::InvalidConfiguration(msg)) => {
                assert!(msg.contains(needle), "expected '{needle}' in '{msg}'")
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 10_000);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.mutation_rate - 0.01).abs() < 1e-10);
        assert_eq!(config.board_size, 8);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_new_sets_core_parameters() {
        let config = GaConfig::new(50, 200, 0.9, 0.2);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 200);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.board_size, 8);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_board_size(10)
            .with_parallel(true)
            .with_seed(42)
            .with_time_limit_ms(5000);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.board_size, 10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(5000));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::new(2, 1, 0.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        assert_invalid(&GaConfig::default().with_population_size(0), "positive");
    }

    #[test]
    fn test_validate_odd_population() {
        assert_invalid(&GaConfig::default().with_population_size(51), "even");
    }

    #[test]
    fn test_validate_zero_generations() {
        assert_invalid(&GaConfig::default().with_max_generations(0), "max_generations");
    }

    #[test]
    fn test_validate_rates_out_of_range() {
        assert_invalid(&GaConfig::default().with_crossover_rate(1.5), "crossover_rate");
        assert_invalid(&GaConfig::default().with_crossover_rate(-0.1), "crossover_rate");
        assert_invalid(&GaConfig::default().with_mutation_rate(2.0), "mutation_rate");
        assert_invalid(&GaConfig::default().with_mutation_rate(f64::NAN), "mutation_rate");
    }

    #[test]
    fn test_builders_do_not_clamp() {
        let config = GaConfig::default().with_crossover_rate(-0.5);
        assert!((config.crossover_rate + 0.5).abs() < 1e-10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_board_too_small() {
        assert_invalid(&GaConfig::default().with_board_size(1), "board_size");
        assert!(GaConfig::default().with_board_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert_invalid(&GaConfig::default().with_time_limit_ms(0), "time_limit_ms");
        assert!(GaConfig::default().with_time_limit_ms(1).validate().is_ok());
    }
}
