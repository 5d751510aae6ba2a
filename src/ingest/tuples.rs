//! Fixed-arity numeric tuples (`x y` or `x y radius`) for bubble plots.

use crate::{
    core::{bounds::MinMax, error::PlotError, source::LineSource},
    ingest::{LineFormat, Tally},
};

/// Flat storage of `arity`-wide points plus per-axis extrema.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSeries {
    arity: usize,
    coords: Vec<f64>,
    axes: Vec<MinMax>,
}

impl PointSeries {
    #[must_use]
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            coords: Vec::new(),
            axes: vec![MinMax::new(); arity],
        }
    }

    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len() / self.arity.max(1)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &[f64]> {
        self.coords.chunks_exact(self.arity.max(1))
    }

    /// Extrema of coordinate `axis` (0 = x, 1 = y, …).
    #[must_use]
    pub fn axis(&self, axis: usize) -> MinMax {
        self.axes.get(axis).copied().unwrap_or_default()
    }

    fn push(&mut self, point: &[f64]) {
        debug_assert_eq!(point.len(), self.arity);
        for (tracker, &v) in self.axes.iter_mut().zip(point) {
            tracker.accept(v);
        }
        self.coords.extend_from_slice(point);
    }
}

#[derive(Clone, Debug)]
pub struct TupleGrammar {
    format: LineFormat,
    arity: usize,
}

impl TupleGrammar {
    #[must_use]
    pub fn new(format: LineFormat, arity: usize) -> Self {
        Self { format, arity }
    }

    /// Lines with fewer than `arity` fields, or a non-numeric or negative one
    /// among the first `arity`, are skipped. `None` when the x or y axis saw nothing.
    pub fn ingest<S: LineSource + ?Sized>(
        &self,
        src: &mut S,
    ) -> Result<Option<PointSeries>, PlotError> {
        let mut series = PointSeries::new(self.arity);
        let mut point = Vec::with_capacity(self.arity);
        let mut tally = Tally::default();

        while let Some(line) = src.next_line()? {
            if line.trim().is_empty() {
                continue;
            }
            let tokens = self.format.split(line);
            if tokens.len() < self.arity {
                tally.skip();
                continue;
            }
            point.clear();
            point.extend(tokens[..self.arity].iter().map_while(|t| self.format.value(t)));
            if point.len() == self.arity {
                series.push(&point);
                tally.keep();
            } else {
                tally.skip();
            }
        }
        tally.report("tuples");

        if series.axis(0).is_empty() || series.axis(1).is_empty() {
            return Ok(None);
        }
        Ok(Some(series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::LineReader;

    fn run(format: LineFormat, arity: usize, input: &str) -> Option<PointSeries> {
        TupleGrammar::new(format, arity)
            .ingest(&mut LineReader::new(input.as_bytes()))
            .unwrap()
    }

    #[test]
    fn unparsable_rows_are_dropped_and_ranges_tracked() {
        let s = run(LineFormat::new(' '), 2, "1 2\n3 notanumber\n5 6").unwrap();
        let pts: Vec<_> = s.points().collect();
        assert_eq!(pts, [&[1.0, 2.0][..], &[5.0, 6.0][..]]);
        assert_eq!(s.axis(0).range(), Some((1.0, 5.0)));
        assert_eq!(s.axis(1).range(), Some((2.0, 6.0)));
    }

    #[test]
    fn short_rows_are_skipped_and_extra_columns_ignored() {
        let s = run(LineFormat::default(), 3, "1\t2\n1\t2\t3\t4\n\n").unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.points().next().unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(s.axis(2).range(), Some((3.0, 3.0)));
    }

    #[test]
    fn negative_coordinates_are_skipped() {
        let s = run(LineFormat::default(), 2, "-1\t2\n0\t4\n").unwrap();
        assert_eq!(s.axis(0).range(), Some((0.0, 0.0)));
    }

    #[test]
    fn no_valid_point_is_no_data() {
        assert!(run(LineFormat::default(), 2, "a\tb\n").is_none());
        assert!(run(LineFormat::default(), 2, "").is_none());
    }
}
