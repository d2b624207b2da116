//! Prime implicant chart and essential implicant selection

use std::collections::{BTreeMap, BTreeSet};

use super::cubes::Implicant;

/// Mapping from each true minterm to the indices of the prime implicants covering it
///
/// Don't-cares never appear as rows: they only enable merges and never demand coverage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageChart {
    rows: BTreeMap<u32, Vec<usize>>,
}

impl CoverageChart {
    /// Build the chart for `minterms` over `primes`
    ///
    /// Every row lists implicant indices in ascending order.
    pub fn build(primes: &[Implicant], minterms: &[u32]) -> Self {
        let rows = minterms
            .iter()
            .map(|&m| {
                let covering = primes
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.covers_term(m))
                    .map(|(idx, _)| idx)
                    .collect();
                (m, covering)
            })
            .collect();
        CoverageChart { rows }
    }

    /// Indices of the implicants covering `minterm`, if it is a row of this chart
    pub fn row(&self, minterm: u32) -> Option<&[usize]> {
        self.rows.get(&minterm).map(Vec::as_slice)
    }

    /// Iterate over `(minterm, covering indices)` in ascending minterm order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[usize])> + '_ {
        self.rows.iter().map(|(m, idx)| (*m, idx.as_slice()))
    }

    /// Number of rows (minterms)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the chart has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A chart restricted to the given minterms
    pub fn restrict(&self, minterms: &BTreeSet<u32>) -> CoverageChart {
        let rows = self
            .rows
            .iter()
            .filter(|(m, _)| minterms.contains(*m))
            .map(|(m, idx)| (*m, idx.clone()))
            .collect();
        CoverageChart { rows }
    }

    /// Select the essential implicants
    ///
    /// An implicant is essential if it is the sole entry of some row. The
    /// returned selection also records which minterms the essentials already
    /// cover and which remain for Petrick's method.
    pub fn essentials(&self, primes: &[Implicant]) -> EssentialSelection {
        let essential: BTreeSet<usize> = self
            .rows
            .values()
            .filter_map(|idx| match idx.as_slice() {
                [only] => Some(*only),
                _ => None,
            })
            .collect();

        let covered: BTreeSet<u32> = self
            .rows
            .keys()
            .copied()
            .filter(|m| essential.iter().any(|&e| primes[e].covers_term(*m)))
            .collect();

        let remaining = self
            .rows
            .keys()
            .copied()
            .filter(|m| !covered.contains(m))
            .collect();

        EssentialSelection {
            essential,
            covered,
            remaining,
        }
    }
}

/// Outcome of essential implicant selection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EssentialSelection {
    /// Indices of essential prime implicants
    pub essential: BTreeSet<usize>,
    /// Minterms covered by at least one essential implicant
    pub covered: BTreeSet<u32>,
    /// Minterms left for Petrick's method
    pub remaining: BTreeSet<u32>,
}
