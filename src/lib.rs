//! # Quine-McCluskey Logic Minimizer
//!
//! This crate computes a minimum sum-of-products (SOP) expression for a Boolean
//! function given by its minterms and optional don't-care terms. It is an exact
//! two-level minimizer:
//!
//! 1. **Prime implicants** are generated by repeatedly merging cubes that differ
//!    in exactly one bit (Quine-McCluskey).
//! 2. The **prime implicant chart** lists, for every minterm, the primes covering it.
//! 3. **Essential implicants** (sole cover of some minterm) are selected first.
//! 4. **Petrick's method** covers the remaining minterms with the fewest primes,
//!    breaking ties by total literal count.
//!
//! ## Minimizing term lists
//!
//! ```
//! use qmc_logic::minimize;
//!
//! # fn main() -> Result<(), qmc_logic::MinimizationError> {
//! // f(A, B, C) = m(0, 4)
//! let result = minimize(&[0, 4], &[], 3)?;
//! assert_eq!(result.to_string(), "B'C'");
//!
//! // Every row true: the constant 1
//! let result = minimize(&[0, 1, 2, 3], &[], 2)?;
//! assert!(result.is_one());
//! assert_eq!(result.to_string(), "1");
//!
//! // No minterms: the constant 0
//! let result = minimize(&[], &[], 2)?;
//! assert!(result.is_zero());
//! assert_eq!(result.to_string(), "0");
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting the intermediate steps
//!
//! ```
//! use qmc_logic::{minimize, Notation};
//!
//! # fn main() -> Result<(), qmc_logic::MinimizationError> {
//! let result = minimize(&[1, 3, 7, 11, 15], &[2, 5, 6, 9, 10], 4)?;
//!
//! for (idx, prime) in result.prime_implicants().iter().enumerate() {
//!     println!("[{}] {} covers {:?}", idx, prime.mask(), prime.covers());
//! }
//! for (minterm, row) in result.chart().rows() {
//!     println!("{} -> {:?}", minterm, row);
//! }
//! println!("essential: {:?}", result.essential_indices());
//! println!("F = {}", result.to_sop(Notation::Latex));
//! # Ok(())
//! # }
//! ```
//!
//! ## Validation
//!
//! Inputs are checked at the boundary by [`TruthTable::new`]: every term must lie in
//! `[0, 2^num_vars - 1]`, and don't-cares that repeat a minterm are dropped. The
//! pipeline itself then runs on validated input only.
//!
//! ## Concurrency
//!
//! Minimization is a synchronous, deterministic computation over its own local data.
//! Independent calls share no state and may run on different threads at once.

// Public modules
pub mod cover;
pub mod error;
pub mod expression;
pub mod kmap;
pub mod pla;
pub mod truth_table;

// Re-export high-level public API
pub use cover::{
    CoverageChart, Implicant, Mask, Minimizable, MinimizationResult, SelectedImplicant,
    VariableLabels,
};
pub use error::{MinimizationError, TermListError};
pub use expression::{Notation, ProductTerm, SumOfProducts};
pub use pla::{PLAWriter, PlaFunction};
pub use truth_table::{parse_term_list, TruthTable};

/// Largest number of variables any function may have
pub const MAX_VARIABLES: usize = 30;

/// Configuration for the minimizer
///
/// Both limits guard against the combinatorial growth of prime implicants and of
/// Petrick's expansion; exceeding either one fails the request instead of running
/// for an unbounded time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Largest accepted number of variables (at most [`MAX_VARIABLES`])
    pub max_vars: usize,
    /// Largest number of candidate products Petrick's method may hold at once
    ///
    /// This bounds memory and the size of each step, not total running time:
    /// absorption within one step is quadratic in the number of products.
    pub petrick_limit: usize,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            max_vars: 16,
            petrick_limit: 1 << 16,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Minimize the function with the given minterms and don't-cares
///
/// Uses [`MinimizerConfig::default`]. Don't-cares that are also minterms are
/// treated as minterms.
///
/// # Errors
///
/// Returns [`MinimizationError::InvalidTerm`] or
/// [`MinimizationError::InvalidVariableCount`] for invalid input, and the solver
/// errors described on [`MinimizationError`] otherwise.
pub fn minimize(
    minterms: &[u32],
    dont_cares: &[u32],
    num_vars: usize,
) -> Result<MinimizationResult, MinimizationError> {
    minimize_with_config(minterms, dont_cares, num_vars, &MinimizerConfig::default())
}

/// Minimize with an explicit configuration
///
/// ```
/// use qmc_logic::{minimize_with_config, MinimizationError, MinimizerConfig};
///
/// let config = MinimizerConfig { max_vars: 4, ..Default::default() };
/// let err = minimize_with_config(&[0], &[], 5, &config).unwrap_err();
/// assert_eq!(err, MinimizationError::InvalidVariableCount { num_vars: 5, max: 4 });
/// ```
pub fn minimize_with_config(
    minterms: &[u32],
    dont_cares: &[u32],
    num_vars: usize,
    config: &MinimizerConfig,
) -> Result<MinimizationResult, MinimizationError> {
    TruthTable::new(num_vars, minterms, dont_cares)?.minimize_with_config(config)
}
