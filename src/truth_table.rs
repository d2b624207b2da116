//! Input boundary: term lists and validated truth tables
//!
//! All range checks happen here, before the minimizer runs. The minimization
//! pipeline itself assumes a valid [`TruthTable`].

use std::collections::BTreeSet;

use crate::error::{MinimizationError, TermListError};
use crate::MAX_VARIABLES;

/// Parse a comma-separated list of term numbers such as `"1, 3,7"`
///
/// Blank entries (including a trailing comma) are skipped.
///
/// # Examples
///
/// ```
/// use qmc_logic::parse_term_list;
///
/// assert_eq!(parse_term_list("1, 3,,7,").unwrap(), vec![1, 3, 7]);
/// assert!(parse_term_list("1, two").is_err());
/// ```
pub fn parse_term_list(input: &str) -> Result<Vec<u64>, TermListError> {
    input
        .split(',')
        .map(str::trim)
        .enumerate()
        .filter(|(_, token)| !token.is_empty())
        .map(|(position, token)| {
            token
                .parse::<u64>()
                .map_err(|_| TermListError::InvalidNumber {
                    token: token.to_string(),
                    position,
                })
        })
        .collect()
}

/// A validated single-output function given by its minterms and don't-cares
///
/// Both term lists are sorted and deduplicated, and no don't-care is also a
/// minterm: a term listed in both is treated as a minterm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    num_vars: usize,
    minterms: Vec<u32>,
    dont_cares: Vec<u32>,
}

impl TruthTable {
    /// Validate and normalize a function description
    ///
    /// # Errors
    ///
    /// - [`MinimizationError::InvalidVariableCount`] unless `1 <= num_vars <= MAX_VARIABLES`
    /// - [`MinimizationError::InvalidTerm`] for the first term `>= 2^num_vars`
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::TruthTable;
    ///
    /// let table = TruthTable::new(3, &[0u32, 4, 4], &[4u32, 5]).unwrap();
    /// assert_eq!(table.minterms(), &[0, 4]);
    /// assert_eq!(table.dont_cares(), &[5]);
    ///
    /// assert!(TruthTable::new(2, &[4u32], &[] as &[u32]).is_err());
    /// ```
    pub fn new<T: Copy + Into<u64>>(
        num_vars: usize,
        minterms: &[T],
        dont_cares: &[T],
    ) -> Result<Self, MinimizationError> {
        if num_vars == 0 || num_vars > MAX_VARIABLES {
            return Err(MinimizationError::InvalidVariableCount {
                num_vars,
                max: MAX_VARIABLES,
            });
        }

        let minterms = validate_terms(minterms, num_vars)?;
        let dont_cares: BTreeSet<u32> = validate_terms(dont_cares, num_vars)?
            .difference(&minterms)
            .copied()
            .collect();

        Ok(TruthTable {
            num_vars,
            minterms: minterms.into_iter().collect(),
            dont_cares: dont_cares.into_iter().collect(),
        })
    }

    /// Number of input variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Sorted minterms (rows that must evaluate to 1)
    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    /// Sorted don't-cares, disjoint from the minterms
    pub fn dont_cares(&self) -> &[u32] {
        &self.dont_cares
    }

    /// Output value of a row
    ///
    /// `Some(true)` for a minterm, `None` for a don't-care, `Some(false)` otherwise.
    pub fn value(&self, term: u32) -> Option<bool> {
        if self.minterms.binary_search(&term).is_ok() {
            Some(true)
        } else if self.dont_cares.binary_search(&term).is_ok() {
            None
        } else {
            Some(false)
        }
    }

    /// Number of rows, `2^num_vars`
    pub fn num_rows(&self) -> u64 {
        1u64 << self.num_vars
    }
}

fn validate_terms<T: Copy + Into<u64>>(
    terms: &[T],
    num_vars: usize,
) -> Result<BTreeSet<u32>, MinimizationError> {
    let limit = 1u64 << num_vars;
    terms
        .iter()
        .map(|&t| {
            let value: u64 = t.into();
            if value < limit {
                Ok(value as u32)
            } else {
                Err(MinimizationError::InvalidTerm { value, num_vars })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_term_list_whitespace() {
        assert_eq!(parse_term_list(" 2 ,5, 6 ").unwrap(), vec![2, 5, 6]);
        assert!(parse_term_list("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_term_list_rejects_negative() {
        let err = parse_term_list("1,-3").unwrap_err();
        assert_eq!(
            err,
            TermListError::InvalidNumber {
                token: "-3".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn test_truth_table_drops_overlapping_dont_cares() {
        let table = TruthTable::new(4, &[1u32, 3, 7], &[3u32, 2, 2]).unwrap();
        assert_eq!(table.minterms(), &[1, 3, 7]);
        assert_eq!(table.dont_cares(), &[2]);
    }

    #[test]
    fn test_truth_table_rejects_out_of_range() {
        let err = TruthTable::new(3, &[1u64, 8], &[]).unwrap_err();
        assert_eq!(
            err,
            MinimizationError::InvalidTerm {
                value: 8,
                num_vars: 3
            }
        );

        let err = TruthTable::new(3, &[1u64], &[100]).unwrap_err();
        assert!(matches!(err, MinimizationError::InvalidTerm { value: 100, .. }));
    }

    #[test]
    fn test_truth_table_variable_count() {
        assert!(matches!(
            TruthTable::new(0, &[0u32], &[]),
            Err(MinimizationError::InvalidVariableCount { num_vars: 0, .. })
        ));
        assert!(TruthTable::new(MAX_VARIABLES + 1, &[0u32], &[]).is_err());
        assert!(TruthTable::new(MAX_VARIABLES, &[0u32], &[]).is_ok());
    }

    #[test]
    fn test_value() {
        let table = TruthTable::new(2, &[1u32], &[2u32]).unwrap();
        assert_eq!(table.value(1), Some(true));
        assert_eq!(table.value(2), None);
        assert_eq!(table.value(0), Some(false));
        assert_eq!(table.num_rows(), 4);
    }
}
