//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Line-oriented tabular text goes in, a typed chart comes out:
//! [`ingest`] parses and aggregates, [`chart`] maps the aggregate onto
//! series and axes, [`render`] draws it as text.

pub mod chart;
pub mod cli;
pub mod core;
pub mod genome;
pub mod ingest;
pub mod render;

pub use chart::{AxisLabels, Chart, ChartKind, assemble};
pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder},
    error::{ConfigError, PlotError},
    source::{LineReader, LineSource, open_input},
};
pub use genome::{Contig, ContigDictionary, ContigNameResolver, DictionaryError};
pub use ingest::{Aggregate, Grammar, LineFormat, resolve_dictionary};
pub use render::Renderer;

/// Ingest all of `src` the way `cfg` asks and assemble the chart.
///
/// Loads the reference dictionary first when the chart kind needs one, so
/// a bad reference fails before any input is read.
pub fn load_chart<S: LineSource + ?Sized>(cfg: &Config, src: &mut S) -> Result<Chart, PlotError> {
    let dict = resolve_dictionary(cfg)?;
    let aggregate = Grammar::from_config(cfg, dict)?
        .ingest(src)?
        .ok_or(PlotError::NoData("input holds no usable record"))?;
    let labels = AxisLabels {
        x: cfg.x_label.clone(),
        y: cfg.y_label.clone(),
    };
    assemble(cfg.kind, aggregate, &labels)
}
