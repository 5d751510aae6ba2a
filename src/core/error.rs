//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::{core::color::ColorError, genome::DictionaryError};

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    MissingField(&'static str),
    InvalidArity(usize),
    InvalidDelimiter(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(x) => write!(f, "configuration missing field `{x}`"),
            ConfigError::InvalidArity(n) => {
                write!(f, "a point needs at least 2 columns, got {n}")
            }
            ConfigError::InvalidDelimiter(d) => {
                write!(f, "delimiter must be a single character, got `{d}`")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum PlotError {
    Io(io::Error),
    Read { line: usize, source: io::Error },
    Dictionary(DictionaryError),
    Config(ConfigError),
    Color(ColorError),
    /// The whole input was consumed without producing anything plottable.
    NoData(&'static str),
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(e) => write!(f, "{e}"),
            PlotError::Read { line, source } => {
                write!(f, "I/O error after line {line}: {source}")
            }
            PlotError::Dictionary(e) => write!(f, "{e}"),
            PlotError::Config(e) => write!(f, "{e}"),
            PlotError::Color(e) => write!(f, "{e}"),
            PlotError::NoData(what) => write!(f, "no valid data: {what}"),
            PlotError::GraphTooSmall {
                want_w,
                want_h,
                got_w,
                got_h,
            } => write!(
                f,
                "output too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}"
            ),
        }
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlotError::Io(e) | PlotError::Read { source: e, .. } => Some(e),
            PlotError::Dictionary(e) => Some(e),
            PlotError::Config(e) => Some(e),
            PlotError::Color(e) => Some(e),
            PlotError::NoData(_) | PlotError::GraphTooSmall { .. } => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for PlotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<DictionaryError> for PlotError {
    fn from(e: DictionaryError) -> Self {
        Self::Dictionary(e)
    }
}
impl From<ColorError> for PlotError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for PlotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
