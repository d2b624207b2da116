//! Petrick's method for the cyclic part of the prime implicant chart
//!
//! Each chart row is a sum of implicant choices; the product of all rows is expanded
//! into a sum of products, one candidate cover per product. After each multiplication
//! dominated candidates (strict supersets of another candidate) are absorbed.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::chart::CoverageChart;
use super::cubes::Implicant;
use crate::error::MinimizationError;

/// A candidate cover: a set of prime implicant indices
pub type Product = BTreeSet<usize>;

/// Pick a minimum cover of every row of `chart`
///
/// Candidates are ranked by number of implicants, then by summed literal count,
/// then lexicographically by their ascending index lists. The first candidate in
/// that order is returned. An empty chart yields an empty cover.
///
/// # Errors
///
/// - [`MinimizationError::InfeasibleCover`] if some row has no covering implicant
/// - [`MinimizationError::PetrickLimitExceeded`] if a multiplication step would hold
///   more than `limit` products
///
/// `limit` bounds the number of products, not the running time: absorbing one
/// step of `k` products takes up to `k^2 / 2` subset checks.
pub fn petrick(
    chart: &CoverageChart,
    primes: &[Implicant],
    limit: usize,
) -> Result<Product, MinimizationError> {
    let mut products: Vec<Product> = vec![Product::new()];

    for (minterm, choices) in chart.rows() {
        if choices.is_empty() {
            return Err(MinimizationError::InfeasibleCover { minterm });
        }

        let projected = products.len().saturating_mul(choices.len());
        if projected > limit {
            return Err(MinimizationError::PetrickLimitExceeded {
                products: projected,
                limit,
            });
        }

        products = multiply(&products, choices);
        sort_products(&mut products, primes);
        products = absorb(products);
        trace!(minterm, choices = choices.len(), products = products.len(), "petrick step");
    }

    let best = products.into_iter().next().unwrap_or_default();
    debug!(
        rows = chart.len(),
        selected = best.len(),
        weight = weight(&best, primes),
        "petrick cover chosen"
    );
    Ok(best)
}

/// Multiply the current sum of products by one sum of choices
fn multiply(products: &[Product], choices: &[usize]) -> Vec<Product> {
    let expanded: BTreeSet<Product> = products
        .iter()
        .flat_map(|product| {
            choices.iter().map(move |&idx| {
                let mut next = product.clone();
                next.insert(idx);
                next
            })
        })
        .collect();
    expanded.into_iter().collect()
}

/// Summed literal count of the implicants in `product`
pub fn weight(product: &Product, primes: &[Implicant]) -> usize {
    product.iter().map(|&idx| primes[idx].literal_count()).sum()
}

fn sort_products(products: &mut [Product], primes: &[Implicant]) {
    products.sort_by_cached_key(|p| (p.len(), weight(p, primes), p.clone()));
}

/// Remove every product that strictly contains another product
///
/// `products` must be sorted by size and free of duplicates, so any product that
/// could absorb a later one has already been kept. Only the kept products of
/// smaller size are compared; the pass is still quadratic in the worst case.
fn absorb(products: Vec<Product>) -> Vec<Product> {
    let mut kept: Vec<Product> = Vec::with_capacity(products.len());
    // kept[..smaller] holds the kept products shorter than the current size
    let mut smaller = 0;
    let mut current_len = 0;
    for product in products {
        if product.len() != current_len {
            current_len = product.len();
            smaller = kept.len();
        }
        let dominated = kept[..smaller].iter().any(|k| k.is_subset(&product));
        if !dominated {
            kept.push(product);
        }
    }
    kept
}
