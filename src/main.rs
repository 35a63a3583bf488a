//! genetools - Plain Sequence Toolkit
//!
//! ## Usage
//!
//! ```bash
//! genetools translate AUGGUAUAA          # met-val-stop
//! genetools complement -i strand.txt     # read from a file
//! echo "atg gta taa" | genetools mrna    # read from stdin
//! genetools --codon-table
//! ```

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use genetools::genetic_code::{entries, is_start_codon, is_stop_codon};
use genetools::input::InputSource;
use genetools::operation::Operation;
use genetools::output::{render, write_output};

/// Operation specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OperationArg {
    /// Format input to plain sequence format
    Format,
    /// Complement DNA (A<->T, G<->C, order kept)
    Complement,
    /// Reverse prime direction
    Reverse,
    /// Convert DNA to messenger RNA (T -> U)
    Mrna,
    /// Convert RNA to DNA (U -> T)
    Dna,
    /// Interpret mRNA as codons and convert to amino acids
    Translate,
    /// Report whether the input is DNA or RNA
    Detect,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Format => Operation::Format,
            OperationArg::Complement => Operation::Complement,
            OperationArg::Reverse => Operation::Reverse,
            OperationArg::Mrna => Operation::ToMrna,
            OperationArg::Dna => Operation::ToDna,
            OperationArg::Translate => Operation::Translate,
            OperationArg::Detect => Operation::Detect,
        }
    }
}

/// genetools - sanitize, complement, reverse, transcribe and translate
/// nucleotide sequences
///
/// The sequence is read from the SEQUENCE arguments, from --input, or from
/// standard input, in that order.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "THIS MACHINE HAS NO BRAIN. USE YOUR OWN. This tool is not all knowing."
)]
struct Args {
    /// Operation to apply
    #[arg(value_enum, required_unless_present = "codon_table")]
    operation: Option<OperationArg>,

    /// Sequence text (words are joined with spaces before normalization)
    sequence: Vec<String>,

    /// Read the sequence from a file instead
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Output file. Use "-" for stdout (default)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Wrap output to this many columns
    #[arg(short = 'w', long = "wrap")]
    wrap: Option<NonZeroUsize>,

    /// Print the codon table and exit
    #[arg(long = "codon-table", conflicts_with_all = ["sequence", "input"])]
    codon_table: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Sets up stderr logging. `RUST_LOG` wins over the -v count.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Formats the codon table, one `CODON<TAB>label` row per codon.
fn codon_table_text() -> String {
    entries()
        .iter()
        .map(|e| {
            let note = if is_start_codon(e.codon) {
                "\t(start)"
            } else if is_stop_codon(e.codon) {
                "\t(stop)"
            } else {
                ""
            };
            format!("{}\t{}{}", e.codon, e.amino_acid, note)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs one operation: read input, transform, write output.
fn run(
    operation: Operation,
    source: InputSource,
    output: Option<&Path>,
    wrap: Option<NonZeroUsize>,
) -> Result<()> {
    let text = source.read()?;
    if text.trim().is_empty() {
        warn!("input sequence is empty");
    }

    let result = operation
        .apply(&text)
        .with_context(|| format!("{} failed", operation))?;

    write_output(output, &render(&result, wrap))
        .context("Failed to write output")?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.codon_table {
        write_output(args.output.as_deref(), &codon_table_text())
            .context("Failed to write codon table")?;
        return Ok(());
    }

    let operation: Operation = args
        .operation
        .context("An operation is required")?
        .into();
    let source = InputSource::select(args.sequence, args.input);

    run(operation, source, args.output.as_deref(), args.wrap)
}
