use fibbench::cli::{self, Color, OutputFormat};
use fibbench::fib;
use fibbench::report::{CliReport, CliVerbosity, JsonReport, Report, TickReport};
use fibbench::{Function, Harness};

use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();

    let enable_text_coloring = match args.color {
        Color::Always => true,
        Color::Never => false,
        Color::Auto => atty::is(atty::Stream::Stdout),
    };
    let verbosity = if args.verbose {
        CliVerbosity::Verbose
    } else if args.quiet {
        CliVerbosity::Quiet
    } else {
        CliVerbosity::Normal
    };

    let report: Box<dyn Report> = match args.output_format {
        OutputFormat::Ticks => Box::new(TickReport::stdout()),
        OutputFormat::Pretty => Box::new(CliReport::stdout(enable_text_coloring, verbosity)),
        OutputFormat::Json => Box::new(JsonReport::stdout()),
    };

    let mut harness = Harness::default().with_report(report);
    if let Some(index) = args.fib_index {
        harness = harness.fib_index(index);
    }
    if let Some(samples) = args.samples {
        harness = harness.sample_count(samples);
    }

    if let Err(e) = run(&mut harness) {
        eprintln!("fibbench: failed to write report: {}", e);
        process::exit(1);
    }
}

fn run(harness: &mut Harness) -> io::Result<()> {
    harness.bench("linked", Function::new(|n| fib::fib_linked(n)))?;
    harness.bench("local", Function::new(fib::fib_local))?;
    harness.compare()
}
