//! Integration tests for PLA file input and output

use qmc_logic::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_read_minimize_write_file() {
    let mut input = NamedTempFile::new().unwrap();
    write!(
        input,
        "# f = m(1,3,7,11,15) + d(2,5,6,9,10)\n\
         .i 4\n.o 1\n.ilb a b c d\n.ob f\n.type fd\n\
         0001 1\n0011 1\n0111 1\n1011 1\n1111 1\n\
         0010 -\n0101 -\n0110 -\n1001 -\n1010 -\n.e\n"
    )
    .unwrap();
    input.flush().unwrap();

    let function = PlaFunction::from_pla_file(input.path()).unwrap();
    assert_eq!(function.output_label(), Some("f"));
    assert_eq!(function.table().minterms(), &[1, 3, 7, 11, 15]);
    assert_eq!(function.table().dont_cares(), &[2, 5, 6, 9, 10]);

    let result = function.minimize().unwrap();
    assert_eq!(result.to_string(), "cd + b'd");

    let output = NamedTempFile::new().unwrap();
    result.to_pla_file(output.path()).unwrap();
    let written = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(
        written,
        ".i 4\n.ilb a b c d\n.o 1\n.ob f\n.p 2\n--11 1\n-0-1 1\n.e\n"
    );

    let reread = PlaFunction::from_pla_file(output.path()).unwrap();
    assert_eq!(reread.output_label(), Some("f"));
}

#[test]
fn test_wide_all_dash_cube_fails_fast() {
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, ".i 30\n.o 1\n{} 1\n.e", "-".repeat(30)).unwrap();
    input.flush().unwrap();

    let err = PlaFunction::from_pla_file(input.path()).unwrap_err();
    assert!(matches!(
        err,
        pla::PLAReadError::Function(MinimizationError::InvalidVariableCount { num_vars: 30, .. })
    ));

    let config = MinimizerConfig {
        max_vars: 20,
        ..Default::default()
    };
    let err = PlaFunction::from_pla_file_with_config(input.path(), &config).unwrap_err();
    assert!(matches!(
        err,
        pla::PLAReadError::Function(MinimizationError::InvalidVariableCount { max: 20, .. })
    ));
}

#[test]
fn test_written_cover_reads_back_as_same_function() {
    let result = minimize(&[0, 1, 2, 5, 6, 7, 8, 9, 10, 14], &[], 4).unwrap();
    let text = result.to_pla_string().unwrap();

    let reread = PlaFunction::from_pla_string(&text).unwrap();
    assert_eq!(reread.table().minterms(), result.table().minterms());
    assert_eq!(reread.minimize().unwrap().to_string(), result.to_string());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = PlaFunction::from_pla_file("/nonexistent/function.pla").unwrap_err();
    assert!(matches!(err, pla::PLAReadError::Io(_)));
}

#[test]
fn test_multiple_outputs_rejected() {
    let err = PlaFunction::from_pla_string(".i 2\n.o 2\n01 11\n.e\n").unwrap_err();
    assert!(matches!(
        err,
        pla::PLAReadError::PLA(pla::PLAError::UnsupportedOutputCount { count: 2 })
    ));
}
