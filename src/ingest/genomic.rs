//! Genome-wide series from BED-like intervals or `samtools depth` style
//! `chrom pos value` lines.
//!
//! Every record is placed on one linear axis spanning all contigs in
//! dictionary order: `midpoint + sum(length of preceding contigs)`.

use crate::{
    core::{bounds::MinMax, error::PlotError, scalar::parse_coordinate, source::LineSource},
    genome::{ContigDictionary, ContigNameResolver},
    ingest::{LineFormat, Tally},
};

/// Column layout of the genomic input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenomicLayout {
    /// `chrom start end value`
    Interval,
    /// `chrom pos value`
    ChromPosition,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenomicPoint {
    pub offset: u64,
    pub value: f64,
}

/// Points of one contig, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct ContigSeries {
    pub name: String,
    pub points: Vec<GenomicPoint>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenomicSeries {
    /// One entry per dictionary contig, in dictionary order.
    pub contigs: Vec<ContigSeries>,
    pub values: MinMax,
    pub reference_length: u64,
}

#[derive(Clone, Debug)]
pub struct GenomicGrammar {
    format: LineFormat,
    layout: GenomicLayout,
    dict: ContigDictionary,
    resolver: ContigNameResolver,
}

impl GenomicGrammar {
    #[must_use]
    pub fn new(format: LineFormat, layout: GenomicLayout, dict: ContigDictionary) -> Self {
        let resolver = ContigNameResolver::new(&dict);
        Self {
            format,
            layout,
            dict,
            resolver,
        }
    }

    /// `None` when no line produced a valid point.
    pub fn ingest<S: LineSource + ?Sized>(
        &self,
        src: &mut S,
    ) -> Result<Option<GenomicSeries>, PlotError> {
        let mut contigs: Vec<ContigSeries> = self
            .dict
            .contigs()
            .iter()
            .map(|c| ContigSeries {
                name: c.name.clone(),
                points: Vec::new(),
            })
            .collect();
        let mut values = MinMax::new();
        let mut tally = Tally::default();

        while let Some(line) = src.next_line()? {
            if is_header(line) {
                continue;
            }
            match self.locate(line) {
                Some((index, point)) => {
                    contigs[index].points.push(point);
                    values.accept(point.value);
                    tally.keep();
                }
                None => tally.skip(),
            }
        }
        tally.report("genomic");

        if contigs.is_empty() || values.is_empty() {
            return Ok(None);
        }
        Ok(Some(GenomicSeries {
            contigs,
            values,
            reference_length: self.dict.reference_length(),
        }))
    }

    /// Contig ordinal + linear point for one record, `None` to skip it.
    fn locate(&self, line: &str) -> Option<(usize, GenomicPoint)> {
        let tokens = self.format.split(line);
        let (start, end, value) = match self.layout {
            GenomicLayout::ChromPosition if tokens.len() >= 3 => {
                let pos = parse_coordinate(tokens[1])?;
                (pos, pos, tokens[2])
            }
            GenomicLayout::Interval if tokens.len() >= 4 => (
                parse_coordinate(tokens[1])?,
                parse_coordinate(tokens[2])?,
                tokens[3],
            ),
            _ => return None,
        };

        let index = self.resolver.resolve(tokens[0])?;
        let length = i64::try_from(self.dict.contig(index)?.length).ok()?;
        let value = self.format.value(value)?;
        if start > end || start < 0 || end > length {
            return None;
        }

        let mid = u64::try_from((start + end) / 2).ok()?;
        let offset = self.dict.linear(index, mid)?;
        Some((index, GenomicPoint { offset, value }))
    }
}

/// Blank lines and BED `#`, `track`, `browser` headers.
fn is_header(line: &str) -> bool {
    line.trim().is_empty()
        || line.starts_with('#')
        || line.starts_with("track")
        || line.starts_with("browser")
}
