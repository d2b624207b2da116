//! Prime implicant generation by iterative bit-difference merging
//!
//! Each round is a pure function of the current implicants: [`merge_round`] returns
//! the merged masks for the next round and the implicants that took part in no merge.
//! The latter are folded into a [`PrimeAccumulator`] that is threaded through the
//! rounds by value.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use super::cubes::{Implicant, Mask};
use crate::error::MinimizationError;

/// Result of one merging round
#[derive(Debug, Clone, Default)]
pub struct RoundOutcome {
    /// Merged implicants, deduplicated by mask and sorted by mask
    pub merged: Vec<Implicant>,
    /// Input implicants that did not take part in any successful merge
    pub unmerged: Vec<Implicant>,
}

/// Prime implicants discovered so far, keyed by mask
///
/// If the same mask is promoted more than once, the covered terms are unioned.
#[derive(Debug, Clone, Default)]
pub struct PrimeAccumulator {
    primes: BTreeMap<Mask, BTreeSet<u32>>,
}

impl PrimeAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold newly promoted implicants into the accumulator
    pub fn promote(mut self, implicants: Vec<Implicant>) -> Self {
        for implicant in implicants {
            self.primes
                .entry(implicant.mask)
                .or_default()
                .extend(implicant.covers);
        }
        self
    }

    /// Number of distinct prime masks collected
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// True if nothing has been promoted yet
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Finish accumulation, returning the primes sorted by mask
    pub fn into_implicants(self) -> Vec<Implicant> {
        self.primes
            .into_iter()
            .map(|(mask, covers)| Implicant::new(mask, covers))
            .collect()
    }
}

/// Run one merging round over `implicants`
///
/// Implicants are grouped by the number of `1` positions in their mask; only pairs
/// from groups whose counts differ by exactly one are tried.
pub fn merge_round(implicants: &[Implicant]) -> RoundOutcome {
    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, implicant) in implicants.iter().enumerate() {
        groups.entry(implicant.mask.ones()).or_default().push(idx);
    }

    let mut used = vec![false; implicants.len()];
    let mut merged: BTreeMap<Mask, BTreeSet<u32>> = BTreeMap::new();

    for (ones, lower) in groups.iter() {
        let Some(upper) = groups.get(&(ones + 1)) else {
            continue;
        };
        for &i in lower {
            for &j in upper {
                let (a, b) = (&implicants[i], &implicants[j]);
                if let Some(mask) = a.mask.merge(&b.mask) {
                    let covers = merged.entry(mask).or_default();
                    covers.extend(a.covers.iter().copied());
                    covers.extend(b.covers.iter().copied());
                    used[i] = true;
                    used[j] = true;
                }
            }
        }
    }

    let unmerged = implicants
        .iter()
        .zip(used)
        .filter(|(_, was_used)| !was_used)
        .map(|(implicant, _)| implicant.clone())
        .collect();

    RoundOutcome {
        merged: merged
            .into_iter()
            .map(|(mask, covers)| Implicant::new(mask, covers))
            .collect(),
        unmerged,
    }
}

/// Generate all prime implicants of the function given by `minterms` and `dont_cares`
///
/// The two term sets are expected to be validated and disjoint. The result is sorted
/// by mask, unique by mask, and its covered terms together equal the input terms;
/// both properties are checked before returning.
///
/// # Examples
///
/// ```
/// use qmc_logic::cover::prime_implicants;
///
/// let primes = prime_implicants(&[0, 4], &[], 3).unwrap();
/// assert_eq!(primes.len(), 1);
/// assert_eq!(primes[0].mask().to_string(), "-00");
/// ```
pub fn prime_implicants(
    minterms: &[u32],
    dont_cares: &[u32],
    num_vars: usize,
) -> Result<Vec<Implicant>, MinimizationError> {
    let all_terms: BTreeSet<u32> = minterms.iter().chain(dont_cares).copied().collect();

    let mut current: Vec<Implicant> = all_terms
        .iter()
        .map(|&t| Implicant::from_term(t, num_vars))
        .collect();
    let mut accumulator = PrimeAccumulator::new();
    let mut round = 0usize;

    while !current.is_empty() {
        round += 1;
        let outcome = merge_round(&current);
        trace!(
            round,
            input = current.len(),
            merged = outcome.merged.len(),
            promoted = outcome.unmerged.len(),
            "merge round"
        );
        accumulator = accumulator.promote(outcome.unmerged);
        current = outcome.merged;
    }

    let primes = accumulator.into_implicants();
    debug!(
        terms = all_terms.len(),
        rounds = round,
        primes = primes.len(),
        "generated prime implicants"
    );

    check_primes(&primes, &all_terms)?;
    Ok(primes)
}

fn check_primes(primes: &[Implicant], all_terms: &BTreeSet<u32>) -> Result<(), MinimizationError> {
    for pair in primes.windows(2) {
        if pair[0].mask >= pair[1].mask {
            return Err(MinimizationError::Inconsistent {
                reason: format!("mask {} is not unique or not sorted", pair[1].mask),
            });
        }
    }

    let mut covered = BTreeSet::new();
    for prime in primes {
        if let Some(t) = prime.covers.iter().find(|t| !prime.mask.matches(**t)) {
            return Err(MinimizationError::Inconsistent {
                reason: format!("mask {} claims to cover term {}", prime.mask, t),
            });
        }
        covered.extend(prime.covers.iter().copied());
    }

    if &covered != all_terms {
        let missing: Vec<u32> = all_terms.difference(&covered).copied().collect();
        return Err(MinimizationError::Inconsistent {
            reason: format!("terms {:?} are covered by no prime implicant", missing),
        });
    }

    Ok(())
}
