//! Human-readable report of a minimization result

use std::io::{self, Write};

use super::MinimizationResult;
use crate::expression::{Notation, ProductTerm};

impl MinimizationResult {
    /// Write the prime implicant table, the chart and the selected cover
    ///
    /// ```
    /// use qmc_logic::minimize;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let result = minimize(&[0, 4], &[], 3)?;
    /// let mut out = Vec::new();
    /// result.write_summary(&mut out, qmc_logic::Notation::Prime)?;
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.contains("-00"));
    /// assert!(text.contains("F = B'C'"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_summary<W: Write>(&self, writer: &mut W, notation: Notation) -> io::Result<()> {
        writeln!(writer, "Variables: {}", self.num_vars())?;
        writeln!(writer, "Minterms: {:?}", self.table().minterms())?;
        writeln!(writer, "Don't cares: {:?}", self.table().dont_cares())?;
        writeln!(writer)?;

        writeln!(writer, "Prime implicants:")?;
        if self.prime_implicants().is_empty() {
            writeln!(writer, "  (none)")?;
        }
        for (idx, prime) in self.prime_implicants().iter().enumerate() {
            let marker = if self.essential_indices().contains(&idx) {
                " (essential)"
            } else {
                ""
            };
            writeln!(
                writer,
                "  [{}] {}  covers {:?}  literals {}{}",
                idx,
                prime.mask(),
                prime.covers(),
                prime.literal_count(),
                marker
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "Chart:")?;
        for (minterm, row) in self.chart().rows() {
            writeln!(writer, "  {} -> {:?}", minterm, row)?;
        }
        writeln!(writer)?;

        writeln!(writer, "Selected:")?;
        for (order, idx) in self.selected_indices().iter().enumerate() {
            let prime = &self.prime_implicants()[*idx];
            writeln!(
                writer,
                "  {}. [{}] {}  {}",
                order + 1,
                idx,
                prime.mask(),
                ProductTerm::new(prime.mask(), self.labels()).with_notation(notation)
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "F = {}", self.to_sop(notation))
    }
}
