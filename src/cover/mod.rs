//! Cover types for two-level Boolean minimization
//!
//! This module holds the minimization engine and the [`MinimizationResult`] it
//! produces: the prime implicants of a function, its prime implicant chart, the
//! essential implicants and the final selection forming a minimum sum-of-products
//! cover.

// Module declarations
mod chart;
mod cubes;
mod labels;
mod minimizable;
mod minimize;
mod petrick;
mod primes;
mod summary;

#[cfg(test)]
mod tests;

// Public re-exports - core types
pub use chart::{CoverageChart, EssentialSelection};
pub use cubes::{Implicant, Mask};
pub use labels::VariableLabels;
pub use minimizable::Minimizable;
pub use petrick::{petrick, Product};
pub use primes::{merge_round, prime_implicants, PrimeAccumulator, RoundOutcome};

pub(crate) use minimize::minimize_table;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::expression::{Notation, ProductTerm, SumOfProducts};
use crate::truth_table::TruthTable;

/// One implicant of the final selection, ready for rendering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedImplicant {
    /// Index into [`MinimizationResult::prime_implicants`]
    pub index: usize,
    /// The implicant's mask
    pub mask: Mask,
    /// Product term in prime notation, e.g. `B'C'`
    pub expression: String,
    /// Covered input terms (minterms and don't-cares), ascending
    pub covers: Vec<u32>,
    /// Whether the implicant is essential
    pub essential: bool,
}

/// The outcome of minimizing one function
///
/// Selected implicants are always reported in ascending prime index order, which
/// keeps rendering and coloring stable across runs.
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize;
///
/// # fn main() -> Result<(), qmc_logic::MinimizationError> {
/// let result = minimize(&[0, 4], &[], 3)?;
/// assert_eq!(result.prime_implicants().len(), 1);
/// assert_eq!(result.to_string(), "B'C'");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct MinimizationResult {
    table: TruthTable,
    labels: VariableLabels,
    output_label: Option<Arc<str>>,
    prime_implicants: Vec<Implicant>,
    chart: CoverageChart,
    essential: BTreeSet<usize>,
    selected: BTreeSet<usize>,
}

impl MinimizationResult {
    /// The validated function that was minimized
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Number of input variables
    pub fn num_vars(&self) -> usize {
        self.table.num_vars()
    }

    /// Variable labels used for rendering
    pub fn labels(&self) -> &VariableLabels {
        &self.labels
    }

    /// Replace the variable labels, padding with defaults if too few are given
    pub fn with_labels(mut self, mut labels: VariableLabels) -> Self {
        labels.backfill_to(self.num_vars());
        self.labels = labels;
        self
    }

    /// Name of the function's output, if one was given
    pub fn output_label(&self) -> Option<&str> {
        self.output_label.as_deref()
    }

    /// Name the function's output (written as `.ob` in PLA output)
    pub fn with_output_label<S: AsRef<str>>(mut self, label: S) -> Self {
        self.output_label = Some(Arc::from(label.as_ref()));
        self
    }

    /// All prime implicants, sorted by mask
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.prime_implicants
    }

    /// The prime implicant chart over the true minterms
    pub fn chart(&self) -> &CoverageChart {
        &self.chart
    }

    /// Indices of the essential prime implicants
    pub fn essential_indices(&self) -> &BTreeSet<usize> {
        &self.essential
    }

    /// Indices of the selected prime implicants
    pub fn selected_indices(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// Iterate over the selected implicants in ascending index order
    pub fn selected_implicants(&self) -> impl Iterator<Item = &Implicant> + '_ {
        self.selected.iter().map(|&idx| &self.prime_implicants[idx])
    }

    /// The selection with masks, covered terms and prime notation expressions
    pub fn selected_expressions(&self) -> Vec<SelectedImplicant> {
        self.selected
            .iter()
            .map(|&index| {
                let implicant = &self.prime_implicants[index];
                SelectedImplicant {
                    index,
                    mask: implicant.mask().clone(),
                    expression: ProductTerm::new(implicant.mask(), &self.labels).to_string(),
                    covers: implicant.covers().iter().copied().collect(),
                    essential: self.essential.contains(&index),
                }
            })
            .collect()
    }

    /// The minimized function as a sum of products in the given notation
    pub fn to_sop(&self, notation: Notation) -> SumOfProducts {
        SumOfProducts::new(
            self.selected_implicants().map(|p| p.mask().clone()).collect(),
            self.labels.clone(),
        )
        .with_notation(notation)
    }

    /// True if the function has no minterms (the constant `0`)
    pub fn is_zero(&self) -> bool {
        self.selected.is_empty()
    }

    /// True if the selection is a single all-`-` implicant (the constant `1`)
    pub fn is_one(&self) -> bool {
        let mut selected = self.selected_implicants();
        matches!(
            (selected.next(), selected.next()),
            (Some(p), None) if p.mask().is_universal()
        )
    }
}

impl fmt::Display for MinimizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sop(Notation::Prime))
    }
}
