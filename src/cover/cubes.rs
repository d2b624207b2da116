//! Cube types for two-level minimization
//!
//! This module provides the core cube-related types used by the minimizer:
//! - [`Mask`]: A ternary cube, one `0`/`1`/`-` symbol per variable
//! - [`Implicant`]: A mask together with the input terms it covers

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::MaskParseError;

/// A cube over `len()` variables
///
/// Each position holds:
/// - `Some(false)` - variable must be 0
/// - `Some(true)` - variable must be 1
/// - `None` - don't care (either value)
///
/// Position 0 is the most significant bit of a term. Masks order like their
/// textual form (`-` < `0` < `1` position by position).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mask {
    bits: Arc<[Option<bool>]>,
}

impl Mask {
    /// Encode a term as a fully specified mask of `num_vars` positions
    ///
    /// The result is the zero-padded binary representation of `term`. The caller
    /// guarantees `term < 2^num_vars`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Mask;
    ///
    /// assert_eq!(Mask::from_term(5, 4).to_string(), "0101");
    /// ```
    pub fn from_term(term: u32, num_vars: usize) -> Self {
        let bits: Vec<Option<bool>> = (0..num_vars)
            .map(|pos| {
                let shift = num_vars - 1 - pos;
                Some(shift < 32 && (term >> shift) & 1 == 1)
            })
            .collect();
        Mask { bits: bits.into() }
    }

    /// Build a mask from explicit positions
    pub fn from_bits(bits: &[Option<bool>]) -> Self {
        Mask { bits: bits.into() }
    }

    /// Get the positions of this mask
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for a mask over zero variables
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Count of positions fixed to `1`; `-` positions are not counted
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|b| **b == Some(true)).count()
    }

    /// Count of fixed (non `-`) positions
    pub fn literal_count(&self) -> usize {
        self.bits.iter().filter(|b| b.is_some()).count()
    }

    /// True if every position is `-`, i.e. the mask covers the whole space
    pub fn is_universal(&self) -> bool {
        self.bits.iter().all(|b| b.is_none())
    }

    /// Merge two masks that differ in exactly one fixed position
    ///
    /// Returns `None` unless both masks have `-` in the same positions and
    /// disagree in exactly one of the remaining positions. The merged mask has
    /// `-` at the differing position.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Mask;
    ///
    /// let a: Mask = "0-1".parse().unwrap();
    /// let b: Mask = "1-1".parse().unwrap();
    /// assert_eq!(a.merge(&b).unwrap().to_string(), "--1");
    ///
    /// let c: Mask = "01-".parse().unwrap();
    /// assert!(a.merge(&c).is_none());
    /// ```
    pub fn merge(&self, other: &Mask) -> Option<Mask> {
        if self.len() != other.len() {
            return None;
        }

        let mut differing = None;
        for (pos, (x, y)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            match (x, y) {
                (Some(a), Some(b)) if a != b => {
                    if differing.is_some() {
                        return None;
                    }
                    differing = Some(pos);
                }
                (Some(_), Some(_)) | (None, None) => {}
                // A '-' facing a fixed symbol can never merge
                _ => return None,
            }
        }

        let pos = differing?;
        let mut bits = self.bits.to_vec();
        bits[pos] = None;
        Some(Mask { bits: bits.into() })
    }

    /// Check whether a term lies inside this cube
    pub fn matches(&self, term: u32) -> bool {
        let n = self.len();
        self.bits.iter().enumerate().all(|(pos, bit)| match bit {
            None => true,
            Some(value) => {
                let shift = n - 1 - pos;
                (shift < 32 && (term >> shift) & 1 == 1) == *value
            }
        })
    }

    /// Enumerate every term inside this cube in ascending order
    pub fn terms(&self) -> Vec<u32> {
        let mut terms = vec![0u32];
        for bit in self.bits.iter() {
            terms = match bit {
                Some(value) => terms.into_iter().map(|t| (t << 1) | *value as u32).collect(),
                None => terms
                    .into_iter()
                    .flat_map(|t| [t << 1, (t << 1) | 1])
                    .collect(),
            };
        }
        terms.sort_unstable();
        terms
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            let ch = match bit {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl FromStr for Mask {
    type Err = MaskParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            bits.push(match character {
                '0' => Some(false),
                '1' => Some(true),
                '-' | '~' | 'x' | 'X' => None,
                _ => {
                    return Err(MaskParseError::InvalidCharacter {
                        character,
                        position,
                    })
                }
            });
        }
        Ok(Mask { bits: bits.into() })
    }
}

/// A mask together with the original terms (minterms and don't-cares) it subsumes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Implicant {
    pub(crate) mask: Mask,
    pub(crate) covers: BTreeSet<u32>,
}

impl Implicant {
    /// Singleton implicant for one input term
    pub fn from_term(term: u32, num_vars: usize) -> Self {
        Implicant {
            mask: Mask::from_term(term, num_vars),
            covers: BTreeSet::from([term]),
        }
    }

    pub(crate) fn new(mask: Mask, covers: BTreeSet<u32>) -> Self {
        Implicant { mask, covers }
    }

    /// Get the mask of this implicant
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Get the input terms covered by this implicant
    pub fn covers(&self) -> &BTreeSet<u32> {
        &self.covers
    }

    /// Number of literals in the product term; used as a tie-break weight
    pub fn literal_count(&self) -> usize {
        self.mask.literal_count()
    }

    /// Check whether this implicant covers a given term
    pub fn covers_term(&self, term: u32) -> bool {
        self.covers.contains(&term)
    }
}
