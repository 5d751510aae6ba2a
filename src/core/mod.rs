//! Shared plumbing: configuration, errors, line sources, number parsing.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod natural;
pub mod scalar;
pub mod source;

// re-export frequently-used items for convenience
pub use bounds::{AxisRange, MinMax};
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use error::{ConfigError, PlotError};
pub use natural::natural_cmp;
pub use scalar::{ScalarFn, parse_non_negative, parse_scalar};
pub use source::{LineReader, LineSource, open_input};
