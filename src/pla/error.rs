//! Error types for PLA format parsing and validation

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::error::MinimizationError;

/// Errors related to PLA format parsing and validation
///
/// These errors occur when reading a PLA description that is malformed or that
/// describes something other than a single-output function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PLAError {
    /// PLA file is missing the .i (inputs) directive and has no cubes to infer from
    MissingInputDirective,
    /// Invalid value in .i directive
    InvalidInputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in .o directive
    InvalidOutputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// The PLA declares more than one output
    UnsupportedOutputCount {
        /// Number of outputs declared
        count: usize,
    },
    /// Invalid character in input portion of a cube
    InvalidInputCharacter {
        /// The invalid character
        character: char,
        /// Position in the input string
        position: usize,
    },
    /// Invalid character in output portion of a cube
    InvalidOutputCharacter {
        /// The invalid character
        character: char,
        /// Position in the output string
        position: usize,
    },
    /// Cube input width doesn't match the declared number of inputs
    CubeDimensionMismatch {
        /// Expected number of inputs
        expected_inputs: usize,
        /// Actual number of inputs in the cube
        actual_inputs: usize,
    },
    /// Label count doesn't match the number of inputs
    LabelCountMismatch {
        /// Expected number of labels
        expected: usize,
        /// Actual number of labels provided
        actual: usize,
    },
}

impl fmt::Display for PLAError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAError::MissingInputDirective => {
                write!(f, "PLA file missing .i directive and no cubes to infer from")
            }
            PLAError::InvalidInputDirective { value } => {
                write!(f, "Invalid .i directive value: '{}'", value)
            }
            PLAError::InvalidOutputDirective { value } => {
                write!(f, "Invalid .o directive value: '{}'", value)
            }
            PLAError::UnsupportedOutputCount { count } => {
                write!(f, "Only single-output PLA files are supported (found {} outputs)", count)
            }
            PLAError::InvalidInputCharacter { character, position } => {
                write!(f, "Invalid input character '{}' at position {}", character, position)
            }
            PLAError::InvalidOutputCharacter { character, position } => {
                write!(f, "Invalid output character '{}' at position {}", character, position)
            }
            PLAError::CubeDimensionMismatch {
                expected_inputs,
                actual_inputs,
            } => write!(
                f,
                "Cube has {} inputs but the PLA declares {}",
                actual_inputs, expected_inputs
            ),
            PLAError::LabelCountMismatch { expected, actual } => write!(
                f,
                "input label count ({}) doesn't match input count ({})",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for PLAError {}

impl From<PLAError> for io::Error {
    fn from(err: PLAError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading PLA format data
///
/// This error type is returned by `PlaFunction::from_pla_*` methods.
#[derive(Debug)]
pub enum PLAReadError {
    /// PLA format error
    PLA(PLAError),
    /// The described function is not valid input for the minimizer
    Function(MinimizationError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for PLAReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAReadError::PLA(e) => write!(f, "PLA format error: {}", e),
            PLAReadError::Function(e) => write!(f, "Invalid function: {}", e),
            PLAReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAReadError::PLA(e) => Some(e),
            PLAReadError::Function(e) => Some(e),
            PLAReadError::Io(e) => Some(e),
        }
    }
}

impl From<PLAError> for PLAReadError {
    fn from(err: PLAError) -> Self {
        PLAReadError::PLA(err)
    }
}

impl From<MinimizationError> for PLAReadError {
    fn from(err: MinimizationError) -> Self {
        PLAReadError::Function(err)
    }
}

impl From<io::Error> for PLAReadError {
    fn from(err: io::Error) -> Self {
        PLAReadError::Io(err)
    }
}

impl From<PLAReadError> for io::Error {
    fn from(err: PLAReadError) -> Self {
        match err {
            PLAReadError::Io(e) => e,
            PLAReadError::PLA(e) => io::Error::new(io::ErrorKind::InvalidData, e),
            PLAReadError::Function(e) => e.into(),
        }
    }
}

/// Errors that can occur when writing PLA format data
#[derive(Debug)]
pub enum PLAWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for PLAWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PLAWriteError {
    fn from(err: io::Error) -> Self {
        PLAWriteError::Io(err)
    }
}

impl From<PLAWriteError> for io::Error {
    fn from(err: PLAWriteError) -> Self {
        match err {
            PLAWriteError::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pla_error_missing_input_directive() {
        let msg = PLAError::MissingInputDirective.to_string();
        assert!(msg.contains("missing .i directive"));
    }

    #[test]
    fn test_pla_error_unsupported_outputs() {
        let msg = PLAError::UnsupportedOutputCount { count: 3 }.to_string();
        assert!(msg.contains("3 outputs"));
    }

    #[test]
    fn test_pla_error_cube_dimension_mismatch() {
        let err = PLAError::CubeDimensionMismatch {
            expected_inputs: 3,
            actual_inputs: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("2 inputs"));
        assert!(msg.contains("declares 3"));
    }

    #[test]
    fn test_pla_read_error_conversions() {
        let read_err: PLAReadError = PLAError::MissingInputDirective.into();
        assert!(matches!(read_err, PLAReadError::PLA(_)));

        let read_err: PLAReadError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(read_err, PLAReadError::Io(_)));

        let read_err: PLAReadError = MinimizationError::InvalidVariableCount {
            num_vars: 40,
            max: 30,
        }
        .into();
        let io_err: io::Error = read_err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_pla_read_error_preserves_io_error() {
        let read_err = PLAReadError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let io_err: io::Error = read_err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert_eq!(io_err.to_string(), "file not found");
    }

    #[test]
    fn test_pla_write_error_to_io_error() {
        let write_err = PLAWriteError::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        let io_err: io::Error = write_err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
