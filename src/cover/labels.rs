//! Variable label management
//!
//! This module provides the [`VariableLabels`] type used when rendering masks as
//! product terms.

use std::collections::HashMap;
use std::sync::Arc;

/// Ordered variable labels with name lookup
///
/// Position 0 labels the most significant bit of a term. Default labels are the
/// letters `A` to `Z`; positions past the alphabet fall back to `x26`, `x27`, ...
/// unless that name is already taken, in which case the next free index is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableLabels {
    /// Ordered labels by position
    labels: Vec<Arc<str>>,
    /// Fast lookup: label name -> position index
    label_map: HashMap<Arc<str>, usize>,
}

impl VariableLabels {
    /// Default labels for `num_vars` variables
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::VariableLabels;
    ///
    /// let labels = VariableLabels::new(3);
    /// assert_eq!(labels.get(0), Some("A"));
    /// assert_eq!(labels.get(2), Some("C"));
    /// ```
    pub fn new(num_vars: usize) -> Self {
        let mut labels = VariableLabels {
            labels: Vec::with_capacity(num_vars),
            label_map: HashMap::new(),
        };
        labels.backfill_to(num_vars);
        labels
    }

    /// Create from existing labels
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let labels: Vec<Arc<str>> = labels.iter().map(|s| Arc::from(s.as_ref())).collect();
        let label_map = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (Arc::clone(label), i))
            .collect();
        VariableLabels { labels, label_map }
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get label at position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|l| l.as_ref())
    }

    /// Get labels slice
    pub fn as_slice(&self) -> &[Arc<str>] {
        &self.labels
    }

    /// Find position by label name
    pub fn find_position(&self, name: &str) -> Option<usize> {
        self.label_map.get(name).copied()
    }

    /// Check if label exists
    pub fn contains(&self, name: &str) -> bool {
        self.label_map.contains_key(name)
    }

    fn natural_label(position: usize) -> Arc<str> {
        if position < 26 {
            let letter = (b'A' + position as u8) as char;
            Arc::from(letter.to_string().as_str())
        } else {
            Arc::from(format!("x{}", position).as_str())
        }
    }

    /// Find the next free `x<n>` label starting from `start`
    fn next_available_index(&self, start: usize) -> usize {
        let mut n = start;
        while self.label_map.contains_key(format!("x{}", n).as_str()) {
            n += 1;
        }
        n
    }

    /// Add a label for the next position, resolving conflicts with existing names
    fn push_default(&mut self) {
        let position = self.labels.len();
        let natural = Self::natural_label(position);
        let label = if !self.label_map.contains_key(&natural) {
            natural
        } else {
            let n = self.next_available_index(position);
            Arc::from(format!("x{}", n).as_str())
        };
        self.label_map.insert(Arc::clone(&label), position);
        self.labels.push(label);
    }

    /// Backfill default labels up to `target_size`
    pub fn backfill_to(&mut self, target_size: usize) {
        while self.labels.len() < target_size {
            self.push_default();
        }
    }
}
