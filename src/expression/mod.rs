//! Sum-of-products rendering of minimized covers
//!
//! Masks are rendered as product terms with one literal per fixed position:
//! a `1` gives the bare variable, a `0` gives its complement, and `-` positions
//! are omitted. A mask with no fixed positions renders as the constant `1`, and
//! an empty sum renders as the constant `0`.

mod display;

use crate::cover::{Mask, VariableLabels};

/// How complemented literals and products are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `AB'C`, complements marked with a trailing apostrophe
    #[default]
    Prime,
    /// `AB^{\prime}C`, for typesetting with LaTeX
    Latex,
    /// `A * ~B * C`, the operator syntax used by most logic tools
    Operator,
}

/// A single product term borrowed from a mask
///
/// # Examples
///
/// ```
/// use qmc_logic::{Mask, Notation, ProductTerm, VariableLabels};
///
/// let mask: Mask = "-00".parse().unwrap();
/// let labels = VariableLabels::new(3);
/// assert_eq!(ProductTerm::new(&mask, &labels).to_string(), "B'C'");
/// assert_eq!(
///     ProductTerm::new(&mask, &labels).with_notation(Notation::Operator).to_string(),
///     "~B * ~C"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProductTerm<'a> {
    mask: &'a Mask,
    labels: &'a VariableLabels,
    notation: Notation,
}

impl<'a> ProductTerm<'a> {
    /// Product term for `mask`, labelling position `i` with `labels.get(i)`
    pub fn new(mask: &'a Mask, labels: &'a VariableLabels) -> Self {
        ProductTerm {
            mask,
            labels,
            notation: Notation::Prime,
        }
    }

    /// Use a different notation
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Literals as `(label, positive)` pairs in variable order
    pub fn literals(&self) -> Vec<(String, bool)> {
        self.mask
            .bits()
            .iter()
            .enumerate()
            .filter_map(|(pos, bit)| {
                bit.map(|positive| {
                    let label = match self.labels.get(pos) {
                        Some(label) => label.to_string(),
                        None => format!("x{}", pos),
                    };
                    (label, positive)
                })
            })
            .collect()
    }
}

/// An ordered sum of product terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumOfProducts {
    products: Vec<Mask>,
    labels: VariableLabels,
    notation: Notation,
}

impl SumOfProducts {
    /// Sum of the given masks in the given order
    pub fn new(products: Vec<Mask>, labels: VariableLabels) -> Self {
        SumOfProducts {
            products,
            labels,
            notation: Notation::Prime,
        }
    }

    /// Use a different notation
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// The product masks
    pub fn products(&self) -> &[Mask] {
        &self.products
    }

    /// Rendered product terms, one string per product
    pub fn terms(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|mask| {
                ProductTerm::new(mask, &self.labels)
                    .with_notation(self.notation)
                    .to_string()
            })
            .collect()
    }

    /// True for the empty sum (constant `0`)
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
