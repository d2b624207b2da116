//! Karnaugh map layout of a minimized function
//!
//! The map places the most significant `n / 2` variables on the rows and the rest on
//! the columns. Both axes run in Gray code order, so adjacent cells differ in one
//! variable. Each cell records its output value and which selected implicants cover it.

use std::fmt;

use crate::cover::{MinimizationResult, VariableLabels};
use crate::error::MinimizationError;
use crate::truth_table::TruthTable;

/// Largest variable count a map is laid out for
pub const MAX_KMAP_VARIABLES: usize = 6;

/// Reflected binary Gray code of `n`
///
/// ```
/// use qmc_logic::kmap::gray_code;
///
/// let order: Vec<u32> = (0..4).map(gray_code).collect();
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// ```
pub fn gray_code(n: u32) -> u32 {
    n ^ (n >> 1)
}

/// One cell of the map
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The truth table row shown in this cell
    pub term: u32,
    /// `Some(true)` for a minterm, `None` for a don't-care, `Some(false)` otherwise
    pub value: Option<bool>,
    /// Positions (in selection order) of the selected implicants covering this cell
    pub groups: Vec<usize>,
}

/// Gray-coded grid of a function of up to [`MAX_KMAP_VARIABLES`] variables
#[derive(Clone, Debug)]
pub struct KarnaughMap {
    num_vars: usize,
    row_bits: usize,
    col_bits: usize,
    labels: VariableLabels,
    cells: Vec<Cell>,
}

impl KarnaughMap {
    /// Lay out a function without any highlighted groups
    pub fn from_table(table: &TruthTable) -> Result<Self, MinimizationError> {
        Self::layout(table, VariableLabels::new(table.num_vars()), |_| Vec::new())
    }

    /// Lay out a minimized function, one group per selected implicant
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::{minimize, kmap::KarnaughMap};
    ///
    /// # fn main() -> Result<(), qmc_logic::MinimizationError> {
    /// let result = minimize(&[0, 4], &[], 3)?;
    /// let map = KarnaughMap::new(&result)?;
    /// assert_eq!((map.rows(), map.cols()), (2, 4));
    /// assert_eq!(map.cell(1, 0).term, 4);
    /// assert_eq!(map.cell(1, 0).groups, vec![0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(result: &MinimizationResult) -> Result<Self, MinimizationError> {
        let selected: Vec<_> = result.selected_implicants().collect();
        Self::layout(result.table(), result.labels().clone(), |term| {
            selected
                .iter()
                .enumerate()
                .filter(|(_, p)| p.covers_term(term))
                .map(|(order, _)| order)
                .collect()
        })
    }

    fn layout<F>(
        table: &TruthTable,
        labels: VariableLabels,
        groups_of: F,
    ) -> Result<Self, MinimizationError>
    where
        F: Fn(u32) -> Vec<usize>,
    {
        let num_vars = table.num_vars();
        if num_vars == 0 || num_vars > MAX_KMAP_VARIABLES {
            return Err(MinimizationError::InvalidVariableCount {
                num_vars,
                max: MAX_KMAP_VARIABLES,
            });
        }

        let row_bits = num_vars / 2;
        let col_bits = num_vars - row_bits;
        let mut cells = Vec::with_capacity(1 << num_vars);
        for r in 0..(1u32 << row_bits) {
            for c in 0..(1u32 << col_bits) {
                let term = (gray_code(r) << col_bits) | gray_code(c);
                cells.push(Cell {
                    term,
                    value: table.value(term),
                    groups: groups_of(term),
                });
            }
        }

        Ok(KarnaughMap {
            num_vars,
            row_bits,
            col_bits,
            labels,
            cells,
        })
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of rows, `2^(n / 2)`
    pub fn rows(&self) -> usize {
        1 << self.row_bits
    }

    /// Number of columns, `2^(n - n / 2)`
    pub fn cols(&self) -> usize {
        1 << self.col_bits
    }

    /// Cell at `(row, col)`; panics if out of bounds
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        assert!(row < self.rows() && col < self.cols(), "cell out of bounds");
        &self.cells[row * self.cols() + col]
    }

    /// Grid coordinates of `term`, if it is a row of the function
    pub fn position_of(&self, term: u32) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|cell| cell.term == term)
            .map(|idx| (idx / self.cols(), idx % self.cols()))
    }

    fn axis_label(&self, range: std::ops::Range<usize>) -> String {
        range.filter_map(|pos| self.labels.get(pos)).collect()
    }
}

fn gray_header(index: usize, bits: usize) -> String {
    if bits == 0 {
        return String::new();
    }
    format!("{:0width$b}", gray_code(index as u32), width = bits)
}

fn cell_text(cell: &Cell) -> String {
    let mut text = String::from(match cell.value {
        Some(true) => "1",
        None => "X",
        Some(false) => "0",
    });
    for group in &cell.groups {
        text.push((b'a' + (group % 26) as u8) as char);
    }
    text
}

impl fmt::Display for KarnaughMap {
    /// Text grid: `1`/`X`/`0` per cell followed by one letter per covering group
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let corner = format!(
            "{}\\{}",
            self.axis_label(0..self.row_bits),
            self.axis_label(self.row_bits..self.num_vars)
        );
        let texts: Vec<String> = self.cells.iter().map(cell_text).collect();
        let width = texts
            .iter()
            .map(String::len)
            .chain(std::iter::once(self.col_bits))
            .max()
            .unwrap_or(1);
        let head = corner.len().max(self.row_bits);

        write!(f, "{:>head$}", corner, head = head)?;
        for c in 0..self.cols() {
            write!(f, " {:<width$}", gray_header(c, self.col_bits), width = width)?;
        }
        writeln!(f)?;

        for r in 0..self.rows() {
            write!(f, "{:>head$}", gray_header(r, self.row_bits), head = head)?;
            for c in 0..self.cols() {
                write!(f, " {:<width$}", texts[r * self.cols() + c], width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize;

    #[test]
    fn test_four_variable_layout() {
        let table = TruthTable::new(4, &[0u32], &[]).unwrap();
        let map = KarnaughMap::from_table(&table).unwrap();
        assert_eq!((map.rows(), map.cols()), (4, 4));
        let first_row: Vec<u32> = (0..4).map(|c| map.cell(0, c).term).collect();
        assert_eq!(first_row, vec![0, 1, 3, 2]);
        let first_col: Vec<u32> = (0..4).map(|r| map.cell(r, 0).term).collect();
        assert_eq!(first_col, vec![0, 4, 12, 8]);
        assert_eq!(map.position_of(10), Some((3, 3)));
    }

    #[test]
    fn test_single_variable_layout() {
        let table = TruthTable::new(1, &[1u32], &[]).unwrap();
        let map = KarnaughMap::from_table(&table).unwrap();
        assert_eq!((map.rows(), map.cols()), (1, 2));
        assert_eq!(map.cell(0, 1).value, Some(true));
    }

    #[test]
    fn test_too_many_variables() {
        let table = TruthTable::new(7, &[0u32], &[]).unwrap();
        assert!(matches!(
            KarnaughMap::from_table(&table),
            Err(MinimizationError::InvalidVariableCount { max: 6, .. })
        ));
    }

    #[test]
    fn test_groups_follow_selection_order() {
        let result = minimize(&[0, 1, 2, 5, 6, 7], &[], 3).unwrap();
        let map = KarnaughMap::new(&result).unwrap();
        for r in 0..map.rows() {
            for c in 0..map.cols() {
                let cell = map.cell(r, c);
                match cell.value {
                    Some(true) => assert!(!cell.groups.is_empty()),
                    _ => assert!(cell.groups.is_empty()),
                }
            }
        }
    }

    #[test]
    fn test_render_marks_dont_cares() {
        let result = minimize(&[0], &[1], 2).unwrap();
        let text = KarnaughMap::new(&result).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("A\\B"));
        assert!(lines[1].contains("1a"));
        assert!(lines[1].contains("Xa"));
    }
}
