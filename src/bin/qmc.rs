//! Quine-McCluskey minimizer - Command Line Interface
//!
//! Reads a function either as term lists or as a single-output PLA file and prints
//! its minimum sum-of-products form.

use clap::{Parser, ValueEnum};
use qmc_logic::kmap::KarnaughMap;
use qmc_logic::{
    parse_term_list, Minimizable, MinimizationResult, MinimizerConfig, Notation, PLAWriter,
    PlaFunction, TruthTable,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, ValueEnum)]
enum NotationArg {
    /// A'B style
    Prime,
    /// A^{\prime}B style
    Latex,
    /// ~A * B style
    Operator,
}

impl From<NotationArg> for Notation {
    fn from(val: NotationArg) -> Self {
        match val {
            NotationArg::Prime => Notation::Prime,
            NotationArg::Latex => Notation::Latex,
            NotationArg::Operator => Notation::Operator,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Exact sum-of-products minimizer (Quine-McCluskey + Petrick)", long_about = None)]
#[command(version)]
struct Args {
    /// Input PLA file (instead of --vars/--minterms)
    #[arg(value_name = "FILE", conflicts_with_all = ["vars", "minterms", "dont_cares"])]
    input: Option<PathBuf>,

    /// Number of variables
    #[arg(short = 'n', long = "vars", requires = "minterms")]
    vars: Option<usize>,

    /// Minterms, comma separated (e.g. "1,3,7")
    #[arg(short = 'm', long = "minterms", allow_hyphen_values = true)]
    minterms: Option<String>,

    /// Don't-care terms, comma separated
    #[arg(short = 'd', long = "dont-cares", allow_hyphen_values = true, default_value = "")]
    dont_cares: String,

    /// Notation of the printed expression
    #[arg(long = "notation", value_enum, default_value = "prime")]
    notation: NotationArg,

    /// Largest accepted number of variables
    #[arg(long = "max-vars", default_value_t = MinimizerConfig::default().max_vars)]
    max_vars: usize,

    /// Largest number of candidate products in Petrick's method
    #[arg(long = "petrick-limit", default_value_t = MinimizerConfig::default().petrick_limit)]
    petrick_limit: usize,

    /// Print the Karnaugh map with the selected groups
    #[arg(short = 'k', long = "kmap")]
    kmap: bool,

    /// Print prime implicants, chart and selection details
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Suppress printing of the expression
    #[arg(short = 'x', long = "no-output")]
    no_output: bool,

    /// Write the minimized cover as a PLA file
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

fn init_tracing(summary: bool) {
    let default = if summary { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<MinimizationResult, Box<dyn std::error::Error>> {
    let config = MinimizerConfig {
        max_vars: args.max_vars,
        petrick_limit: args.petrick_limit,
    };

    let result = match (&args.input, args.vars, &args.minterms) {
        (Some(path), _, _) => {
            let function = PlaFunction::from_pla_file_with_config(path, &config).map_err(|e| {
                format!("Error reading PLA file '{}': {}", path.display(), e)
            })?;
            function.minimize_with_config(&config)?
        }
        (None, Some(vars), Some(minterms)) => {
            let minterms = parse_term_list(minterms)?;
            let dont_cares = parse_term_list(&args.dont_cares)?;
            TruthTable::new(vars, &minterms, &dont_cares)?.minimize_with_config(&config)?
        }
        _ => return Err("either a PLA FILE or --vars with --minterms is required".into()),
    };
    Ok(result)
}

fn main() {
    let args = Args::parse();
    init_tracing(args.summary);

    let result = match run(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let notation = Notation::from(args.notation.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let printed = (|| -> io::Result<()> {
        if args.summary {
            result.write_summary(&mut out, notation)?;
            writeln!(out)?;
        }
        if args.kmap {
            match KarnaughMap::new(&result) {
                Ok(map) => write!(out, "{}", map)?,
                Err(e) => eprintln!("Cannot draw Karnaugh map: {}", e),
            }
            writeln!(out)?;
        }
        if !args.no_output {
            writeln!(out, "{}", result.to_sop(notation))?;
        }
        Ok(())
    })();
    if let Err(e) = printed {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(1);
    }

    if let Some(ref output_path) = args.output_file {
        if let Err(e) = result.to_pla_file(output_path) {
            eprintln!("Error writing output file: {}", e);
            process::exit(1);
        }
        if args.summary {
            eprintln!("Wrote output to: {}", output_path.display());
        }
    }
}
