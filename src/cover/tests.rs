//! Tests for the cover module

use std::collections::BTreeSet;

use super::*;
use crate::{minimize, minimize_with_config, MinimizationError, MinimizerConfig, TruthTable};

fn masks(result: &MinimizationResult) -> Vec<String> {
    result
        .prime_implicants()
        .iter()
        .map(|p| p.mask().to_string())
        .collect()
}

fn selected_masks(result: &MinimizationResult) -> Vec<String> {
    result
        .selected_implicants()
        .map(|p| p.mask().to_string())
        .collect()
}

#[test]
fn test_empty_minterms() {
    let result = minimize(&[], &[], 3).unwrap();
    assert!(result.prime_implicants().is_empty());
    assert!(result.selected_indices().is_empty());
    assert!(result.chart().is_empty());
    assert!(result.is_zero());
    assert!(!result.is_one());
}

#[test]
fn test_empty_minterms_ignore_dont_cares() {
    let result = minimize(&[], &[1, 2], 2).unwrap();
    assert!(result.prime_implicants().is_empty());
    assert!(result.is_zero());
    assert_eq!(result.to_string(), "0");
}

#[test]
fn test_full_space_two_vars() {
    let result = minimize(&[0, 1, 2, 3], &[], 2).unwrap();
    assert_eq!(selected_masks(&result), vec!["--"]);
    assert!(result.is_one());
    assert_eq!(result.selected_expressions()[0].expression, "1");
}

#[test]
fn test_full_space_four_vars() {
    let all: Vec<u32> = (0..16).collect();
    let result = minimize(&all, &[], 4).unwrap();
    assert_eq!(selected_masks(&result), vec!["----"]);
    assert_eq!(result.to_string(), "1");
}

#[test]
fn test_reducible_case_with_dont_cares() {
    let result = minimize(&[1, 3, 7, 11, 15], &[2, 5, 6, 9, 10], 4).unwrap();
    assert_eq!(masks(&result), vec!["--11", "-0-1", "-01-", "0--1", "0-1-"]);
    assert_eq!(result.chart().row(15), Some(&[0usize][..]));
    assert_eq!(result.chart().row(3), Some(&[0usize, 1, 2, 3, 4][..]));
    assert_eq!(result.essential_indices(), &BTreeSet::from([0]));
    assert_eq!(result.selected_indices(), &BTreeSet::from([0, 1]));
    assert_eq!(result.to_string(), "CD + B'D");

    // Selected covers contain every minterm and stay inside minterms and don't-cares
    let allowed: BTreeSet<u32> = [1, 3, 7, 11, 15, 2, 5, 6, 9, 10].into_iter().collect();
    let covered: BTreeSet<u32> = result
        .selected_implicants()
        .flat_map(|p| p.covers().iter().copied())
        .collect();
    assert!(covered.is_superset(&BTreeSet::from([1, 3, 7, 11, 15])));
    assert!(covered.is_subset(&allowed));
}

#[test]
fn test_essentials_then_petrick() {
    let result = minimize(&[0, 1, 2, 5, 6, 7, 8, 9, 10, 14], &[], 4).unwrap();
    assert_eq!(result.essential_indices(), &BTreeSet::from([0, 2]));
    assert_eq!(selected_masks(&result), vec!["--10", "-00-", "01-1"]);
    assert_eq!(result.to_string(), "CD' + B'C' + A'BD");
}

#[test]
fn test_dont_cares_never_chart_rows() {
    let result = minimize(&[4, 8, 10, 11, 12, 15], &[9, 14], 4).unwrap();
    assert!(result.chart().row(9).is_none());
    assert!(result.chart().row(14).is_none());
    assert_eq!(result.chart().len(), 6);
    assert_eq!(selected_masks(&result), vec!["-100", "1--0", "1-1-"]);
}

#[test]
fn test_all_essential() {
    let result = minimize(&[0, 2, 5, 7, 8, 10, 13, 15], &[], 4).unwrap();
    assert_eq!(result.essential_indices(), result.selected_indices());
    assert_eq!(result.to_string(), "B'D' + BD");
}

#[test]
fn test_overlapping_dont_care_is_minterm() {
    let with_overlap = minimize(&[0, 4], &[4], 3).unwrap();
    assert_eq!(with_overlap.table().dont_cares(), &[] as &[u32]);
    assert_eq!(with_overlap.to_string(), "B'C'");
}

#[test]
fn test_selected_expressions_ordered_by_index() {
    let result = minimize(&[0, 1, 2, 5, 6, 7], &[], 3).unwrap();
    let selected = result.selected_expressions();
    let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 2, 5]);
    let exprs: Vec<&str> = selected.iter().map(|s| s.expression.as_str()).collect();
    assert_eq!(exprs, vec!["B'C", "A'C'", "AB"]);
    assert!(selected.iter().all(|s| !s.essential));
    assert_eq!(selected[0].covers, vec![1, 5]);
}

#[test]
fn test_deterministic() {
    let first = minimize(&[0, 1, 2, 5, 6, 7], &[], 3).unwrap();
    let second = minimize(&[7, 6, 5, 2, 1, 0], &[], 3).unwrap();
    assert_eq!(first.selected_indices(), second.selected_indices());
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_petrick_limit_is_reported() {
    let config = MinimizerConfig {
        petrick_limit: 2,
        ..Default::default()
    };
    let err = minimize_with_config(&[0, 1, 2, 5, 6, 7], &[], 3, &config).unwrap_err();
    assert!(matches!(err, MinimizationError::PetrickLimitExceeded { .. }));
}

#[test]
fn test_config_variable_ceiling() {
    let config = MinimizerConfig {
        max_vars: 6,
        ..Default::default()
    };
    let table = TruthTable::new(7, &[0u32], &[]).unwrap();
    let err = table.minimize_with_config(&config).unwrap_err();
    assert_eq!(
        err,
        MinimizationError::InvalidVariableCount {
            num_vars: 7,
            max: 6
        }
    );
}

#[test]
fn test_custom_labels() {
    let result = minimize(&[0, 4], &[], 3)
        .unwrap()
        .with_labels(VariableLabels::from_labels(&["x", "y"]));
    assert_eq!(result.to_string(), "y'C'");
}

#[test]
fn test_minimizable_trait_on_truth_table() {
    let table = TruthTable::new(3, &[0u32, 4], &[]).unwrap();
    let result = table.minimize().unwrap();
    assert_eq!(result.table(), &table);
    assert_eq!(result.num_vars(), 3);
}

#[test]
fn test_summary_lists_everything() {
    let result = minimize(&[1, 3, 7, 11, 15], &[2, 5, 6, 9, 10], 4).unwrap();
    let mut out = Vec::new();
    result
        .write_summary(&mut out, crate::Notation::Prime)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[0] --11"));
    assert!(text.contains("(essential)"));
    assert!(text.contains("15 -> [0]"));
    assert!(text.contains("F = CD + B'D"));
}

#[test]
fn test_summary_for_zero_function() {
    let result = minimize(&[], &[], 2).unwrap();
    let mut out = Vec::new();
    result
        .write_summary(&mut out, crate::Notation::Latex)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("(none)"));
    assert!(text.trim_end().ends_with("F = 0"));
}
