//! Error types for the minimizer
//!
//! This module provides error types that can be distinguished programmatically.
//! Validation failures at the input boundary, failures of Petrick's method and
//! internal consistency checks all have their own variants so callers can tell
//! a malformed request apart from a function that is identically zero.

use std::fmt;
use std::io;

/// The main error type for a minimization request
///
/// Any of these errors is fatal to the single request that produced it; no partial
/// result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// A minterm or don't-care lies outside `[0, 2^num_vars - 1]`
    InvalidTerm {
        /// The offending term value
        value: u64,
        /// The number of variables of the function
        num_vars: usize,
    },

    /// The variable count is zero or above the supported ceiling
    InvalidVariableCount {
        /// The requested number of variables
        num_vars: usize,
        /// The largest accepted number of variables
        max: usize,
    },

    /// Petrick's method met a minterm that no prime implicant covers
    ///
    /// This can only happen if the coverage chart is inconsistent with the prime
    /// implicants, so it always indicates a defect rather than a constant-zero function.
    InfeasibleCover {
        /// The minterm with an empty chart row
        minterm: u32,
    },

    /// Petrick's expansion grew past the configured number of candidate products
    PetrickLimitExceeded {
        /// Number of products the next expansion step would hold
        products: usize,
        /// The configured limit
        limit: usize,
    },

    /// A self-check of the prime implicant set failed
    Inconsistent {
        /// Description of the violated invariant
        reason: String,
    },
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::InvalidTerm { value, num_vars } => write!(
                f,
                "Term {} is out of range for {} variable(s) (valid range: 0..={})",
                value,
                num_vars,
                max_term(*num_vars)
            ),
            MinimizationError::InvalidVariableCount { num_vars, max } => write!(
                f,
                "Invalid variable count {} (supported range: 1..={})",
                num_vars, max
            ),
            MinimizationError::InfeasibleCover { minterm } => write!(
                f,
                "No prime implicant covers minterm {}; the coverage chart is inconsistent",
                minterm
            ),
            MinimizationError::PetrickLimitExceeded { products, limit } => write!(
                f,
                "Petrick's method would hold {} candidate products, above the limit of {}",
                products, limit
            ),
            MinimizationError::Inconsistent { reason } => {
                write!(f, "Prime implicant self-check failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for MinimizationError {}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        let kind = match err {
            MinimizationError::InvalidTerm { .. }
            | MinimizationError::InvalidVariableCount { .. } => io::ErrorKind::InvalidInput,
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

fn max_term(num_vars: usize) -> u64 {
    if num_vars >= 64 {
        u64::MAX
    } else {
        (1u64 << num_vars).saturating_sub(1)
    }
}

/// Errors produced while parsing a comma-separated term list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermListError {
    /// A token between commas is not a non-negative integer
    InvalidNumber {
        /// The token as written (trimmed)
        token: String,
        /// Zero-based position of the token in the list
        position: usize,
    },
}

impl fmt::Display for TermListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermListError::InvalidNumber { token, position } => write!(
                f,
                "Cannot parse '{}' (entry {}) as a term number",
                token, position
            ),
        }
    }
}

impl std::error::Error for TermListError {}

impl From<TermListError> for io::Error {
    fn from(err: TermListError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors produced while parsing a mask written as `0`, `1` and `-` symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskParseError {
    /// A character other than `0`, `1`, `-` (or the aliases `x`, `X`, `~`)
    InvalidCharacter {
        /// The invalid character
        character: char,
        /// Position of the character in the mask
        position: usize,
    },
}

impl fmt::Display for MaskParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskParseError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid mask character '{}' at position {}",
                character, position
            ),
        }
    }
}

impl std::error::Error for MaskParseError {}
