//! Minimizable trait for Boolean function minimization
//!
//! This module provides the public [`Minimizable`] trait which defines a uniform
//! interface for running the exact minimizer over any function description.

use super::MinimizationResult;
use crate::error::MinimizationError;
use crate::MinimizerConfig;

/// Public trait for function descriptions that can be minimized
///
/// Minimization never modifies the description; every call computes a fresh
/// [`MinimizationResult`] from immutable input, so independent calls may run
/// concurrently on different threads.
///
/// ```
/// use qmc_logic::{Minimizable, TruthTable};
///
/// # fn main() -> Result<(), qmc_logic::MinimizationError> {
/// let table = TruthTable::new(2, &[0u32, 1, 2, 3], &[])?;
/// let result = table.minimize()?;
/// assert!(result.is_one());
/// # Ok(())
/// # }
/// ```
///
/// # Implementations
///
/// - [`TruthTable`](crate::TruthTable): minterms and don't-cares given as term numbers
/// - [`PlaFunction`](crate::pla::PlaFunction): a single-output PLA, keeping its input labels
pub trait Minimizable {
    /// Minimize with the default configuration
    ///
    /// Default implementation calls `minimize_with_config` with default config.
    fn minimize(&self) -> Result<MinimizationResult, MinimizationError> {
        let config = MinimizerConfig::default();
        self.minimize_with_config(&config)
    }

    /// Minimize with an explicit configuration
    ///
    /// This is the method that implementations must provide.
    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<MinimizationResult, MinimizationError>;
}
