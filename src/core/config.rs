//! Run-time configuration object + fluent builder.

use std::path::PathBuf;

use crate::{
    chart::ChartKind,
    core::{
        color::AnsiCode,
        constants::{DEFAULT_ARITY, DEFAULT_DELIMITER},
        error::ConfigError,
    },
};

/// Immutable parameters for one plot request.
#[derive(Debug, Clone)]
pub struct Config {
    pub kind: ChartKind,
    /// Input is the output of `sort | uniq -c`.
    pub sort_unique: bool,
    /// Genomic input is `CHROM POS VALUE` rather than BED-like intervals.
    pub chrom_position: bool,
    pub delimiter: char,
    /// Columns per point for bubble plots.
    pub arity: usize,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub hide_legend: bool,
    pub color: AnsiCode,
    pub reference: Option<PathBuf>,
    /// Contigs shorter than this are dropped from the dictionary; negative keeps all.
    pub min_contig_size: i64,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder(kind: ChartKind) -> ConfigBuilder {
        ConfigBuilder::new(kind)
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    kind: ChartKind,
    sort_unique: bool,
    chrom_position: bool,
    delimiter: char,
    arity: usize,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    hide_legend: bool,
    color: Option<AnsiCode>,
    reference: Option<PathBuf>,
    min_contig_size: i64,
    width: Option<usize>,
    height: Option<usize>,
}

impl ConfigBuilder {
    pub(crate) fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            sort_unique: false,
            chrom_position: false,
            delimiter: DEFAULT_DELIMITER,
            arity: DEFAULT_ARITY,
            title: None,
            x_label: None,
            y_label: None,
            hide_legend: false,
            color: None,
            reference: None,
            min_contig_size: -1,
            width: None,
            height: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn sort_unique(mut self, yes: bool) -> Self {
        self.sort_unique = yes;
        self
    }
    #[inline]
    #[must_use]
    pub fn chrom_position(mut self, yes: bool) -> Self {
        self.chrom_position = yes;
        self
    }
    #[inline]
    #[must_use]
    pub fn delimiter(mut self, d: char) -> Self {
        self.delimiter = d;
        self
    }
    #[inline]
    #[must_use]
    pub fn arity(mut self, n: usize) -> Self {
        self.arity = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn x_label_opt(mut self, s: Option<String>) -> Self {
        self.x_label = s;
        self
    }
    #[inline]
    #[must_use]
    pub fn y_label_opt(mut self, s: Option<String>) -> Self {
        self.y_label = s;
        self
    }
    #[inline]
    #[must_use]
    pub fn hide_legend(mut self, yes: bool) -> Self {
        self.hide_legend = yes;
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.color = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn reference(mut self, p: impl Into<PathBuf>) -> Self {
        self.reference = Some(p.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn reference_opt(mut self, p: Option<PathBuf>) -> Self {
        self.reference = p;
        self
    }
    #[inline]
    #[must_use]
    pub fn min_contig_size(mut self, n: i64) -> Self {
        self.min_contig_size = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn size(mut self, width: Option<usize>, height: Option<usize>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.kind == ChartKind::Bedgraph && self.reference.is_none() {
            return Err(ConfigError::MissingField("reference"));
        }
        if self.arity < DEFAULT_ARITY {
            return Err(ConfigError::InvalidArity(self.arity));
        }
        Ok(Config {
            kind: self.kind,
            sort_unique: self.sort_unique,
            chrom_position: self.chrom_position,
            delimiter: self.delimiter,
            arity: self.arity,
            title: self.title.unwrap_or_default(),
            x_label: self.x_label.filter(|s| !s.trim().is_empty()),
            y_label: self.y_label.filter(|s| !s.trim().is_empty()),
            hide_legend: self.hide_legend,
            color: self.color.unwrap_or(AnsiCode::ORANGE),
            reference: self.reference,
            min_contig_size: self.min_contig_size,
            width: self.width,
            height: self.height,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

/// Accept a literal single character, or the spelled-out `\t` / `tab`.
pub fn parse_delimiter(s: &str) -> Result<char, ConfigError> {
    match s {
        "\\t" | "tab" | "TAB" => return Ok('\t'),
        "space" => return Ok(' '),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidDelimiter(s.to_owned())),
    }
}
