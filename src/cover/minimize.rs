//! Minimizable trait implementation for TruthTable
//!
//! This module runs the full pipeline: prime implicant generation, chart
//! construction, essential implicant selection and Petrick's method for the
//! minterms the essentials leave uncovered.

use std::collections::BTreeSet;

use tracing::debug;

use super::chart::CoverageChart;
use super::labels::VariableLabels;
use super::minimizable::Minimizable;
use super::petrick::petrick;
use super::primes::prime_implicants;
use super::MinimizationResult;
use crate::error::MinimizationError;
use crate::truth_table::TruthTable;
use crate::MinimizerConfig;

impl Minimizable for TruthTable {
    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<MinimizationResult, MinimizationError> {
        minimize_table(self, VariableLabels::new(self.num_vars()), config)
    }
}

pub(crate) fn minimize_table(
    table: &TruthTable,
    labels: VariableLabels,
    config: &MinimizerConfig,
) -> Result<MinimizationResult, MinimizationError> {
    if table.num_vars() > config.max_vars {
        return Err(MinimizationError::InvalidVariableCount {
            num_vars: table.num_vars(),
            max: config.max_vars,
        });
    }

    // The constant 0 needs no implicants, even if don't-cares are present
    if table.minterms().is_empty() {
        debug!(num_vars = table.num_vars(), "no minterms, function is 0");
        return Ok(MinimizationResult {
            table: table.clone(),
            labels,
            output_label: None,
            prime_implicants: Vec::new(),
            chart: CoverageChart::default(),
            essential: BTreeSet::new(),
            selected: BTreeSet::new(),
        });
    }

    let primes = prime_implicants(table.minterms(), table.dont_cares(), table.num_vars())?;
    let chart = CoverageChart::build(&primes, table.minterms());
    let selection = chart.essentials(&primes);
    debug!(
        primes = primes.len(),
        essential = selection.essential.len(),
        remaining = selection.remaining.len(),
        "essential implicants selected"
    );

    let mut selected = selection.essential.clone();
    if !selection.remaining.is_empty() {
        let reduced = chart.restrict(&selection.remaining);
        selected.extend(petrick(&reduced, &primes, config.petrick_limit)?);
    }

    let covered: BTreeSet<u32> = selected
        .iter()
        .flat_map(|&idx| primes[idx].covers().iter().copied())
        .collect();
    if let Some(m) = table.minterms().iter().find(|m| !covered.contains(*m)) {
        return Err(MinimizationError::InfeasibleCover { minterm: *m });
    }

    debug!(
        selected = selected.len(),
        num_vars = table.num_vars(),
        "minimization finished"
    );

    Ok(MinimizationResult {
        table: table.clone(),
        labels,
        output_label: None,
        prime_implicants: primes,
        chart,
        essential: selection.essential,
        selected,
    })
}
