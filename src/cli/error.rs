use std::{ffi::OsString, fmt};

/// Failures while interpreting the command line.
#[derive(Debug)]
pub enum Error {
    /// `--help` was passed.
    DisplayHelp,
    /// `--version` was passed.
    DisplayVersion,
    /// The underlying parser rejected an argument.
    PicoArgs(pico_args::Error),
    /// Arguments no flag consumed.
    TrailingArgs(Vec<OsString>),
    /// Flags that cannot be combined.
    ConflictingFlags(&'static [&'static str]),
    /// `--samples` was zero.
    InvalidSampleCount,
}

impl From<pico_args::Error> for Error {
    fn from(e: pico_args::Error) -> Self {
        Self::PicoArgs(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisplayHelp => f.write_str("Signals to display help"),
            Self::DisplayVersion => f.write_str("Signals to display version"),
            Self::PicoArgs(err) => write!(f, "Arg-parse error: {}", err),
            Self::TrailingArgs(args) => write!(f, "Extra args that weren't processed: {:?}", args),
            Self::ConflictingFlags(flags) => {
                write!(f, "Multiple of conflicting flags: {:?}", flags)
            }
            Self::InvalidSampleCount => f.write_str("'--samples' must be at least 1"),
        }
    }
}
