//! The ingestion engine: one grammar per input layout, each turning a
//! [`LineSource`] into an [`Aggregate`] in a single streaming pass.
//!
//! | grammar       | input                                   | aggregate        |
//! |---------------|-----------------------------------------|------------------|
//! | key/value     | `key<TAB>value` or `sort \| uniq -c`     | [`KeyValueMap`]  |
//! | genomic       | BED-like intervals or `chrom pos value` | [`GenomicSeries`]|
//! | matrix        | header line + numeric rows              | [`CategoryMatrix`]|
//! | triples       | `x<TAB>y<TAB>value` or `sort \| uniq -c` | [`KeyedXyv`]     |
//! | tuples        | `N` numeric columns                     | [`PointSeries`]  |
//!
//! Malformed records are skipped, never fatal. A pass producing nothing
//! usable returns `Ok(None)`.

pub mod genomic;
pub mod key_value;
pub mod matrix;
pub mod ordered;
pub mod sort_unique;
pub mod tuples;
pub mod xyv;

use log::debug;

pub use genomic::{ContigSeries, GenomicGrammar, GenomicLayout, GenomicPoint, GenomicSeries};
pub use key_value::{KeyValueGrammar, KeyValueMap};
pub use matrix::{CategoryMatrix, MatrixGrammar, RowSeries};
pub use ordered::{KeyOrder, OrderedMap};
pub use sort_unique::parse_sort_unique;
pub use tuples::{PointSeries, TupleGrammar};
pub use xyv::{KeyedXyv, TripleGrammar};

use crate::{
    chart::ChartKind,
    core::{
        config::Config,
        constants::DEFAULT_DELIMITER,
        error::PlotError,
        scalar::{ScalarFn, parse_scalar},
        source::LineSource,
    },
    genome::{ContigDictionary, DictionaryError},
};

/// How a line is cut into fields and how a field becomes a number.
#[derive(Clone, Copy, Debug)]
pub struct LineFormat {
    pub delimiter: char,
    pub scalar: ScalarFn,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl LineFormat {
    #[must_use]
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            scalar: parse_scalar,
        }
    }

    /// Every field of `line`; trailing empty fields are dropped.
    #[must_use]
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut fields: Vec<&str> = line.split(self.delimiter).collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        fields
    }

    /// First field and the untouched rest of the line.
    #[inline]
    #[must_use]
    pub fn split_first<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        line.split_once(self.delimiter)
    }

    /// Parse a field that must be a non-negative number.
    #[inline]
    #[must_use]
    pub fn value(&self, token: &str) -> Option<f64> {
        (self.scalar)(token).filter(|v| *v >= 0.0)
    }
}

/// Kept / skipped line counts of one pass, reported at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Tally {
    pub kept: usize,
    pub skipped: usize,
}

impl Tally {
    #[inline]
    pub fn keep(&mut self) {
        self.kept += 1;
    }
    #[inline]
    pub fn skip(&mut self) {
        self.skipped += 1;
    }
    pub fn report(&self, grammar: &str) {
        debug!(
            "{grammar}: kept {} record(s), skipped {} line(s)",
            self.kept, self.skipped
        );
    }
}

/// One canonical in-memory shape per grammar.
#[derive(Clone, Debug, PartialEq)]
pub enum Aggregate {
    KeyValues(KeyValueMap),
    Matrix(CategoryMatrix),
    Keyed(KeyedXyv),
    Points(PointSeries),
    Genomic(GenomicSeries),
}

/// The closed set of input grammars.
#[derive(Clone, Debug)]
pub enum Grammar {
    KeyValue(KeyValueGrammar),
    Genomic(GenomicGrammar),
    Matrix(MatrixGrammar),
    Triples(TripleGrammar),
    Tuples(TupleGrammar),
}

impl Grammar {
    /// Grammar reading the input of `cfg.kind`.
    ///
    /// `dict` must be the dictionary resolved by [`resolve_dictionary`];
    /// it is only consumed by the genomic grammar.
    pub fn from_config(cfg: &Config, dict: Option<ContigDictionary>) -> Result<Self, PlotError> {
        let format = LineFormat::new(cfg.delimiter);
        Ok(match cfg.kind {
            ChartKind::Pie | ChartKind::SimpleHistogram => {
                Self::KeyValue(KeyValueGrammar::new(format, cfg.sort_unique))
            }
            ChartKind::Histogram | ChartKind::StackedHistogram => {
                Self::Matrix(MatrixGrammar::new(format))
            }
            ChartKind::Xyv | ChartKind::StackedXyv => {
                Self::Triples(TripleGrammar::new(format, cfg.sort_unique))
            }
            ChartKind::Bubble => Self::Tuples(TupleGrammar::new(format, cfg.arity)),
            ChartKind::Bedgraph => {
                let dict = dict.ok_or(DictionaryError::Missing)?;
                let layout = if cfg.chrom_position {
                    GenomicLayout::ChromPosition
                } else {
                    GenomicLayout::Interval
                };
                Self::Genomic(GenomicGrammar::new(format, layout, dict))
            }
        })
    }

    /// Consume `src` to exhaustion. `Ok(None)` means nothing usable was read.
    pub fn ingest<S: LineSource + ?Sized>(
        &self,
        src: &mut S,
    ) -> Result<Option<Aggregate>, PlotError> {
        Ok(match self {
            Self::KeyValue(g) => {
                let map = g.ingest(src)?;
                (!map.is_empty()).then_some(Aggregate::KeyValues(map))
            }
            Self::Genomic(g) => g.ingest(src)?.map(Aggregate::Genomic),
            Self::Matrix(g) => g.ingest(src)?.map(Aggregate::Matrix),
            Self::Triples(g) => g.ingest(src)?.map(Aggregate::Keyed),
            Self::Tuples(g) => g.ingest(src)?.map(Aggregate::Points),
        })
    }
}

/// Load the contig dictionary up front when the chart needs one.
pub fn resolve_dictionary(cfg: &Config) -> Result<Option<ContigDictionary>, DictionaryError> {
    if cfg.kind != ChartKind::Bedgraph {
        return Ok(None);
    }
    let path = cfg.reference.as_deref().ok_or(DictionaryError::Missing)?;
    let dict = ContigDictionary::load(path, cfg.min_contig_size)?;
    debug!(
        "dictionary {}: {} contig(s), {} bp",
        path.display(),
        dict.len(),
        dict.reference_length()
    );
    Ok(Some(dict))
}
