//! PLA (Programmable Logic Array) format support
//!
//! This module reads single-output PLA descriptions into a [`PlaFunction`] and
//! writes minimized covers back out as type-F PLA files.
//!
//! ```
//! use qmc_logic::pla::{PLAWriter, PlaFunction};
//! use qmc_logic::Minimizable;
//!
//! # fn main() -> std::io::Result<()> {
//! let pla = ".i 3\n.o 1\n.ilb a b c\n.p 2\n000 1\n100 1\n.e\n";
//! let function = PlaFunction::from_pla_string(pla)?;
//! let result = function.minimize()?;
//! assert_eq!(result.to_string(), "b'c'");
//!
//! let text = result.to_pla_string()?;
//! assert!(text.contains("-00 1"));
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::{PLAError, PLAReadError, PLAWriteError};

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::cover::{Mask, MinimizationResult, Minimizable, VariableLabels};
use crate::error::{MaskParseError, MinimizationError};
use crate::truth_table::TruthTable;
use crate::{MinimizerConfig, MAX_VARIABLES};

/// Which sets the output column of a PLA describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PLAType {
    /// On-set only (F)
    F,
    /// On-set and don't-care set (FD)
    FD,
    /// On-set and off-set (FR)
    FR,
    /// On-set, don't-care set, and off-set (FDR)
    FDR,
}

impl PLAType {
    /// Check if this type includes the don't-care set
    pub fn has_d(&self) -> bool {
        matches!(self, PLAType::FD | PLAType::FDR)
    }
}

/// A single-output function read from a PLA description
#[derive(Clone, Debug)]
pub struct PlaFunction {
    table: TruthTable,
    labels: VariableLabels,
    output_label: Option<Arc<str>>,
}

impl PlaFunction {
    /// Wrap a truth table, labelling its inputs with `labels`
    pub fn new(table: TruthTable, mut labels: VariableLabels) -> Self {
        labels.backfill_to(table.num_vars());
        PlaFunction {
            table,
            labels,
            output_label: None,
        }
    }

    /// The function as a truth table
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Input labels (`.ilb`, or defaults)
    pub fn labels(&self) -> &VariableLabels {
        &self.labels
    }

    /// Output label (`.ob`), if present
    pub fn output_label(&self) -> Option<&str> {
        self.output_label.as_deref()
    }

    /// Parse a function from a PLA format reader
    ///
    /// Cubes whose output is `1` contribute every term they contain to the
    /// on-set; cubes whose output is `-` or `2` contribute to the don't-care set
    /// (for the default `fd` type); `0` and `~` rows are ignored.
    ///
    /// Uses the variable ceiling of [`MinimizerConfig::default`]; see
    /// [`from_pla_reader_with_config`](Self::from_pla_reader_with_config).
    pub fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError> {
        Self::from_pla_reader_with_config(reader, &MinimizerConfig::default())
    }

    /// Parse a function from a PLA format reader, rejecting wide inputs early
    ///
    /// The input count is checked against `config.max_vars` as soon as it is known,
    /// before any cube is expanded into terms.
    pub fn from_pla_reader_with_config<R: BufRead>(
        reader: R,
        config: &MinimizerConfig,
    ) -> Result<Self, PLAReadError> {
        let ceiling = config.max_vars.min(MAX_VARIABLES);
        let mut num_inputs: Option<usize> = None;
        // Default to fd, so '-' outputs are don't-cares
        let mut pla_type = PLAType::FD;
        let mut input_labels: Option<Vec<Arc<str>>> = None;
        let mut output_label: Option<Arc<str>> = None;
        let mut on_set: BTreeSet<u32> = BTreeSet::new();
        let mut dc_set: BTreeSet<u32> = BTreeSet::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts.first().copied() {
                    Some(".i") => {
                        let val: usize =
                            parts.get(1).and_then(|s| s.parse().ok()).ok_or_else(|| {
                                PLAError::InvalidInputDirective {
                                    value: Arc::from(parts.get(1).copied().unwrap_or("")),
                                }
                            })?;
                        check_input_count(val, ceiling)?;
                        num_inputs = Some(val);
                    }
                    Some(".o") => {
                        let val: usize =
                            parts.get(1).and_then(|s| s.parse().ok()).ok_or_else(|| {
                                PLAError::InvalidOutputDirective {
                                    value: Arc::from(parts.get(1).copied().unwrap_or("")),
                                }
                            })?;
                        if val != 1 {
                            return Err(PLAError::UnsupportedOutputCount { count: val }.into());
                        }
                    }
                    Some(".type") => {
                        pla_type = match parts.get(1).copied() {
                            Some("fd") => PLAType::FD,
                            Some("fr") => PLAType::FR,
                            Some("fdr") => PLAType::FDR,
                            _ => PLAType::F,
                        };
                    }
                    Some(".ilb") => {
                        let labels: Vec<Arc<str>> =
                            parts.iter().skip(1).map(|s| Arc::from(*s)).collect();
                        if !labels.is_empty() {
                            input_labels = Some(labels);
                        }
                    }
                    Some(".ob") => {
                        output_label = parts.get(1).map(|s| Arc::from(*s));
                    }
                    Some(".e") | Some(".end") => break,
                    _ => {}
                }
                continue;
            }

            // Inputs may be split into columns; the last field is the output
            let fields: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || c == '|')
                .filter(|f| !f.is_empty())
                .collect();
            let (input_str, output_str): (String, String) = match fields.as_slice() {
                [] => continue,
                [single] => match num_inputs {
                    Some(ni) if single.len() > ni => {
                        let (inp, out) = single.split_at(ni);
                        (inp.to_string(), out.to_string())
                    }
                    _ => continue,
                },
                [inputs @ .., output] => (inputs.concat(), output.to_string()),
            };

            // Infer the input count from the first cube if not declared
            let ni = *num_inputs.get_or_insert(input_str.len());
            if input_str.len() != ni {
                return Err(PLAError::CubeDimensionMismatch {
                    expected_inputs: ni,
                    actual_inputs: input_str.len(),
                }
                .into());
            }
            check_input_count(ni, ceiling)?;

            let mut outputs = output_str.chars();
            let output = match (outputs.next(), outputs.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(PLAError::UnsupportedOutputCount {
                        count: output_str.chars().count(),
                    }
                    .into())
                }
            };

            let mask: Mask = input_str.parse().map_err(|err| match err {
                MaskParseError::InvalidCharacter {
                    character,
                    position,
                } => PLAError::InvalidInputCharacter {
                    character,
                    position,
                },
            })?;

            match output {
                '1' | '4' => on_set.extend(mask.terms()),
                '-' | '2' if pla_type.has_d() => dc_set.extend(mask.terms()),
                // Off-set rows and '~' carry nothing for a single-output cover
                '0' | '3' | '~' | '-' | '2' => {}
                character => {
                    return Err(PLAError::InvalidOutputCharacter {
                        character,
                        position: 0,
                    }
                    .into())
                }
            }
        }

        let num_inputs = num_inputs.ok_or(PLAError::MissingInputDirective)?;

        if let Some(ref labels) = input_labels {
            if labels.len() != num_inputs {
                return Err(PLAError::LabelCountMismatch {
                    expected: num_inputs,
                    actual: labels.len(),
                }
                .into());
            }
        }

        let on_set: Vec<u32> = on_set.into_iter().collect();
        let dc_set: Vec<u32> = dc_set.into_iter().collect();
        let table = TruthTable::new(num_inputs, &on_set, &dc_set)?;
        debug!(
            num_inputs,
            minterms = table.minterms().len(),
            dont_cares = table.dont_cares().len(),
            "read PLA function"
        );

        let labels = match input_labels {
            Some(labels) => VariableLabels::from_labels(&labels),
            None => VariableLabels::new(num_inputs),
        };

        Ok(PlaFunction {
            table,
            labels,
            output_label,
        })
    }

    /// Parse a function from a PLA format string
    pub fn from_pla_string(s: &str) -> Result<Self, PLAReadError> {
        Self::from_pla_reader(io::Cursor::new(s.as_bytes()))
    }

    /// Load a function from a PLA format file
    pub fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PLAReadError> {
        Self::from_pla_file_with_config(path, &MinimizerConfig::default())
    }

    /// Load a function from a PLA format file with an explicit variable ceiling
    pub fn from_pla_file_with_config<P: AsRef<Path>>(
        path: P,
        config: &MinimizerConfig,
    ) -> Result<Self, PLAReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader_with_config(BufReader::new(file), config)
    }
}

fn check_input_count(num_inputs: usize, ceiling: usize) -> Result<(), MinimizationError> {
    if num_inputs > ceiling {
        return Err(MinimizationError::InvalidVariableCount {
            num_vars: num_inputs,
            max: ceiling,
        });
    }
    Ok(())
}

impl Minimizable for PlaFunction {
    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<MinimizationResult, MinimizationError> {
        let result = crate::cover::minimize_table(&self.table, self.labels.clone(), config)?;
        Ok(match self.output_label() {
            Some(label) => result.with_output_label(label),
            None => result,
        })
    }
}

/// Trait for types that support PLA serialization (writing)
pub trait PLAWriter {
    /// Write this cover to PLA format using a writer
    ///
    /// This is the core serialization method; `to_pla_string` and `to_pla_file`
    /// delegate to it.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError>;

    /// Convert this cover to a PLA format string
    fn to_pla_string(&self) -> Result<String, PLAWriteError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| PLAWriteError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write this cover to a PLA file
    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PLAWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl PLAWriter for MinimizationResult {
    /// Write the selected implicants as a type-F, single-output PLA
    ///
    /// `.ob` is written only when the result carries an output label. Cubes appear in ascending prime index order. The constant `0` is written
    /// with no cubes.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError> {
        writeln!(writer, ".i {}", self.num_vars())?;

        write!(writer, ".ilb")?;
        for label in self.labels().as_slice().iter().take(self.num_vars()) {
            write!(writer, " {}", label)?;
        }
        writeln!(writer)?;

        writeln!(writer, ".o 1")?;
        if let Some(label) = self.output_label() {
            writeln!(writer, ".ob {}", label)?;
        }
        writeln!(writer, ".p {}", self.selected_indices().len())?;
        for implicant in self.selected_implicants() {
            writeln!(writer, "{} 1", implicant.mask())?;
        }
        writeln!(writer, ".e")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_minterm_rows() {
        let function = PlaFunction::from_pla_string(".i 2\n.o 1\n01 1\n10 1\n.e\n").unwrap();
        assert_eq!(function.table().minterms(), &[1, 2]);
        assert!(function.table().dont_cares().is_empty());
        assert_eq!(function.labels().get(0), Some("A"));
    }

    #[test]
    fn test_read_expands_dashes() {
        let function = PlaFunction::from_pla_string(".i 3\n.o 1\n1-- 1\n0-1 -\n.e\n").unwrap();
        assert_eq!(function.table().minterms(), &[4, 5, 6, 7]);
        assert_eq!(function.table().dont_cares(), &[1, 3]);
    }

    #[test]
    fn test_type_f_ignores_dash_outputs() {
        let function =
            PlaFunction::from_pla_string(".type f\n.i 2\n.o 1\n11 1\n00 -\n.e\n").unwrap();
        assert_eq!(function.table().minterms(), &[3]);
        assert!(function.table().dont_cares().is_empty());
    }

    #[test]
    fn test_infers_inputs_and_reads_labels() {
        let function =
            PlaFunction::from_pla_string(".o 1\n.ob out\n011 1\n").unwrap();
        assert_eq!(function.table().num_vars(), 3);
        assert_eq!(function.output_label(), Some("out"));

        let function = PlaFunction::from_pla_string(".i 2\n.ilb x y\n.o 1\n1 1 1\n").unwrap();
        assert_eq!(function.labels().get(1), Some("y"));
        assert_eq!(function.table().minterms(), &[3]);
    }

    #[test]
    fn test_rejects_multiple_outputs() {
        let err = PlaFunction::from_pla_string(".i 2\n.o 2\n01 10\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::UnsupportedOutputCount { count: 2 })
        ));
    }

    #[test]
    fn test_rejects_bad_characters() {
        let err = PlaFunction::from_pla_string(".i 2\n.o 1\n0z 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::InvalidInputCharacter {
                character: 'z',
                position: 1
            })
        ));

        let err = PlaFunction::from_pla_string(".i 2\n.o 1\n01 q\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::InvalidOutputCharacter { character: 'q', .. })
        ));
    }

    #[test]
    fn test_rejects_label_mismatch() {
        let err = PlaFunction::from_pla_string(".i 2\n.ilb a\n.o 1\n01 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::LabelCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_missing_dimensions() {
        let err = PlaFunction::from_pla_string(".o 1\n.e\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::MissingInputDirective)
        ));
    }

    #[test]
    fn test_write_result() {
        let function =
            PlaFunction::from_pla_string(".i 2\n.ilb p q\n.o 1\n00 1\n01 1\n").unwrap();
        let result = function.minimize().unwrap();
        let text = result.to_pla_string().unwrap();
        assert_eq!(text, ".i 2\n.ilb p q\n.o 1\n.p 1\n0- 1\n.e\n");
    }

    #[test]
    fn test_wide_input_rejected_before_expansion() {
        let cube = "-".repeat(30);
        let declared = format!(".i 30\n.o 1\n{} 1\n.e\n", cube);
        let err = PlaFunction::from_pla_string(&declared).unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Function(MinimizationError::InvalidVariableCount {
                num_vars: 30,
                max: 16
            })
        ));

        // Width inferred from the cube itself
        let inferred = format!(".o 1\n{} 1\n.e\n", cube);
        let err = PlaFunction::from_pla_string(&inferred).unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Function(MinimizationError::InvalidVariableCount { num_vars: 30, .. })
        ));
    }

    #[test]
    fn test_config_raises_input_ceiling() {
        let pla = format!(".i 18\n.o 1\n{} 1\n.e\n", "0".repeat(18));
        assert!(PlaFunction::from_pla_string(&pla).is_err());

        let config = MinimizerConfig {
            max_vars: 18,
            ..Default::default()
        };
        let function =
            PlaFunction::from_pla_reader_with_config(io::Cursor::new(pla.as_bytes()), &config)
                .unwrap();
        assert_eq!(function.table().minterms(), &[0]);
    }

    #[test]
    fn test_write_keeps_output_label() {
        let function =
            PlaFunction::from_pla_string(".i 2\n.o 1\n.ob f\n00 1\n01 1\n").unwrap();
        let result = function.minimize().unwrap();
        assert_eq!(result.output_label(), Some("f"));
        let text = result.to_pla_string().unwrap();
        assert_eq!(text, ".i 2\n.ilb A B\n.o 1\n.ob f\n.p 1\n0- 1\n.e\n");
    }

    #[test]
    fn test_write_zero_function() {
        let function = PlaFunction::from_pla_string(".i 2\n.o 1\n00 0\n").unwrap();
        let result = function.minimize().unwrap();
        assert!(result.is_zero());
        let text = result.to_pla_string().unwrap();
        assert!(text.contains(".p 0\n.e"));
    }
}
