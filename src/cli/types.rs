use std::{fmt, str::FromStr};

#[derive(Debug)]
pub struct TypeParseError(String);

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected value: {}", self.0)
    }
}

impl std::error::Error for TypeParseError {}

/// Coloring of the human-readable report.
#[derive(Debug, PartialEq)]
pub enum Color {
    /// Color when stdout is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl Default for Color {
    fn default() -> Self {
        Self::Auto
    }
}

impl FromStr for Color {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            invalid => Err(TypeParseError(invalid.to_owned())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

/// Which report renders the measurements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// Raw result and tick-count lines, the original contract.
    Ticks,
    /// Colored human-readable console report.
    Pretty,
    /// One JSON object per routine.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Ticks
    }
}

impl FromStr for OutputFormat {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ticks" => Ok(Self::Ticks),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            invalid => Err(TypeParseError(invalid.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ticks => "ticks",
            Self::Pretty => "pretty",
            Self::Json => "json",
        })
    }
}
