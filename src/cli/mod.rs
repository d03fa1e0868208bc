//! Command-line argument handling for the `fibbench` binary.
//!
//! A bare invocation reproduces the original four-line program; every flag is
//! a supplement with a default that leaves that behavior untouched.

mod error;
mod types;

pub use error::Error;
pub use types::{Color, OutputFormat};

use std::{env, ffi::OsString};

use crate::fib::DEFAULT_INDEX;
use crate::harness::DEFAULT_SAMPLE_COUNT;

/// Parsed command-line arguments. `None` means "use the default".
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    /// Fibonacci index to compute.
    pub fib_index: Option<u32>,
    /// Isolated measurements per routine.
    pub samples: Option<usize>,
    /// Which report renders the measurements.
    pub output_format: OutputFormat,
    /// Coloring of the pretty report.
    pub color: Color,
    /// Additional statistics in the pretty report.
    pub verbose: bool,
    /// Single line per routine in the pretty report.
    pub quiet: bool,
}

/// Parses `std::env` arguments, exiting the process on help, version or a
/// parse error.
pub fn parse_args() -> Args {
    let args = env::args_os().collect();
    match try_parse_args(args) {
        Ok(args) => args,
        Err(Error::DisplayHelp) => {
            println!("{}", gen_help());
            std::process::exit(0);
        }
        Err(Error::DisplayVersion) => {
            println!("fibbench {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error parsing CLI args: {}", e);
            eprintln!("{}", gen_help());
            std::process::exit(1);
        }
    }
}

fn try_parse_args(mut args: Vec<OsString>) -> Result<Args, Error> {
    // Remove the executable
    args.remove(0);

    let mut args = pico_args::Arguments::from_vec(args);

    // '--help' and '--version' have higher precedence, so handle them first
    if args.contains(["-h", "--help"]) {
        return Err(Error::DisplayHelp);
    } else if args.contains(["-V", "--version"]) {
        return Err(Error::DisplayVersion);
    }

    // Flags with values first
    let color: Color = args
        .opt_value_from_str("--colour")
        .transpose()
        .or_else(|| args.opt_value_from_str(["-c", "--color"]).transpose())
        .transpose()?
        .unwrap_or_default();
    let fib_index = args.opt_value_from_str(["-n", "--fib-index"])?;
    let samples = args.opt_value_from_str(["-s", "--samples"])?;
    let output_format: OutputFormat = args
        .opt_value_from_str(["-o", "--output-format"])?
        .unwrap_or_default();

    // Now flags without values
    let verbose = args.contains(["-v", "--verbose"]);
    let quiet = args.contains("--quiet");

    // Finally we fail if there are any remaining args that we didn't handle
    let trailing = args.finish();
    if !trailing.is_empty() {
        return Err(Error::TrailingArgs(trailing));
    }

    // Error if there are conflicting args
    if verbose && quiet {
        return Err(Error::ConflictingFlags(&["--verbose", "--quiet"]));
    }

    // Zero samples would mean nothing to report
    if samples == Some(0) {
        return Err(Error::InvalidSampleCount);
    }

    Ok(Args {
        fib_index,
        samples,
        output_format,
        color,
        verbose,
        quiet,
    })
}

fn gen_help() -> String {
    format!(
        "\
fibbench {}
Times a linked recursive Fibonacci implementation against a local equivalent.

USAGE:
    fibbench [OPTIONS]

OPTIONS:
    -h, --help                    Prints help information
    -V, --version                 Prints version information
    -n, --fib-index <INDEX>       Fibonacci index to compute [default: {}]
    -s, --samples <COUNT>         Isolated measurements per routine [default: {}]
    -o, --output-format <FORMAT>  Output format: ticks, pretty or json [default: ticks]
    -c, --color <WHEN>            Color the pretty report: auto, always or never [default: auto]
    -v, --verbose                 Print additional statistics in the pretty report
        --quiet                   Print a single line per routine in the pretty report

With no options the output is four lines: the linked result, its elapsed tick
count, the local result, its elapsed tick count.",
        env!("CARGO_PKG_VERSION"),
        DEFAULT_INDEX,
        DEFAULT_SAMPLE_COUNT,
    )
}
