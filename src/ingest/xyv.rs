//! `x, y, value` triples: one bar per `x`, one series per `y`.

use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    core::{error::PlotError, source::LineSource},
    ingest::{
        LineFormat, Tally,
        ordered::{KeyOrder, OrderedMap},
        sort_unique::parse_sort_unique,
    },
};

/// `x → (y → value)` plus every `y` ever seen, in first-seen order.
///
/// Missing `(x, y)` combinations are not stored; [`KeyedXyv::value`]
/// reports them as `0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyedXyv {
    cells: OrderedMap<HashMap<String, f64>>,
    y_keys: OrderedMap<()>,
    duplicates: usize,
}

impl KeyedXyv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one triple; `false` when `(x, y)` was already recorded.
    pub fn record(&mut self, x: &str, y: &str, value: f64) -> bool {
        self.y_keys.insert_if_absent(y, ());
        let row = self.cells.get_or_insert_with(x, HashMap::new);
        if row.contains_key(y) {
            self.duplicates += 1;
            return false;
        }
        row.insert(y.to_owned(), value);
        true
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Triples dropped because their `(x, y)` was already recorded.
    #[inline]
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn x_keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys()
    }

    pub fn y_keys(&self) -> impl Iterator<Item = &str> {
        self.y_keys.keys()
    }

    /// Recorded value, if any.
    #[must_use]
    pub fn get(&self, x: &str, y: &str) -> Option<f64> {
        self.cells.get(x).and_then(|row| row.get(y)).copied()
    }

    /// Dense view: recorded value or `0`.
    #[inline]
    #[must_use]
    pub fn value(&self, x: &str, y: &str) -> f64 {
        self.get(x, y).unwrap_or(0.0)
    }

    fn arrange(&mut self, order: KeyOrder) {
        self.cells.arrange(order);
    }
}

#[derive(Clone, Debug)]
pub struct TripleGrammar {
    format: LineFormat,
    sort_unique: bool,
}

impl TripleGrammar {
    #[must_use]
    pub fn new(format: LineFormat, sort_unique: bool) -> Self {
        Self {
            format,
            sort_unique,
        }
    }

    /// Split one line into `(x, y, value)`.
    fn triple<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str, f64)> {
        let (x, y, value) = if self.sort_unique {
            let (count, rest) = parse_sort_unique(line)?;
            let tokens = self.format.split(rest);
            if tokens.len() < 2 {
                return None;
            }
            (tokens[0], tokens[1], Some(count))
        } else {
            let tokens = self.format.split(line);
            if tokens.len() < 3 {
                return None;
            }
            (tokens[0], tokens[1], self.format.value(tokens[2]))
        };
        if x.trim().is_empty() || y.trim().is_empty() {
            return None;
        }
        Some((x, y, value?))
    }

    /// Later duplicates of an `(x, y)` pair are dropped with a warning.
    pub fn ingest<S: LineSource + ?Sized>(
        &self,
        src: &mut S,
    ) -> Result<Option<KeyedXyv>, PlotError> {
        let mut xyv = KeyedXyv::new();
        let mut tally = Tally::default();

        while let Some(line) = src.next_line()? {
            let Some((x, y, value)) = self.triple(line) else {
                tally.skip();
                continue;
            };
            if xyv.record(x, y, value) {
                tally.keep();
            } else {
                warn!("duplicate value for {x}/{y}");
                tally.skip();
            }
        }
        tally.report("x/y/value");
        if xyv.duplicates() > 0 {
            debug!("x/y/value: {} duplicate pair(s) dropped", xyv.duplicates());
        }

        if xyv.is_empty() {
            return Ok(None);
        }
        xyv.arrange(KeyOrder::for_sort_unique(self.sort_unique));
        Ok(Some(xyv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::LineReader;

    fn run(input: &str, sort_unique: bool) -> Option<KeyedXyv> {
        TripleGrammar::new(LineFormat::default(), sort_unique)
            .ingest(&mut LineReader::new(input.as_bytes()))
            .unwrap()
    }

    #[test]
    fn first_duplicate_wins() {
        let k = run("2018\tX\t1\n2018\tX\t9\n2018\tY\t2\n", false).unwrap();
        assert_eq!(k.get("2018", "X"), Some(1.0));
        assert_eq!(k.duplicates(), 1);
    }

    #[test]
    fn distinct_pairs_are_not_duplicates() {
        let k = run("2018\tX\t1\n2019\tX\t1\n2018\tY\t1\n", false).unwrap();
        assert_eq!(k.duplicates(), 0);
    }

    #[test]
    fn missing_combinations_read_as_zero() {
        let k = run("2018\tX\t1\n2018\tY\t2\n2019\tX\t3\n", false).unwrap();
        assert_eq!(k.get("2019", "Y"), None);
        assert_eq!(k.value("2019", "Y"), 0.0);
        assert_eq!(k.y_keys().collect::<Vec<_>>(), ["X", "Y"]);
        assert_eq!(k.x_keys().collect::<Vec<_>>(), ["2018", "2019"]);
    }

    #[test]
    fn y_keys_follow_first_sighting_across_all_x() {
        let k = run("a\tQ\t1\nb\tP\t1\na\tP\t1\n", false).unwrap();
        assert_eq!(k.y_keys().collect::<Vec<_>>(), ["Q", "P"]);
    }

    #[test]
    fn bad_records_are_skipped() {
        let k = run("a\tb\nx\ty\t-1\nx\ty\tNA\n\ty\t1\nok\ty\t2\n", false).unwrap();
        assert_eq!(k.x_keys().collect::<Vec<_>>(), ["ok"]);
    }

    #[test]
    fn counted_triples_are_naturally_ordered() {
        let input = "  3 10\tA\n  2 9\tA\n  1 9\tC\n  5 nosplit\n";
        let k = run(input, true).unwrap();
        assert_eq!(k.x_keys().collect::<Vec<_>>(), ["9", "10"]);
        assert_eq!(k.y_keys().collect::<Vec<_>>(), ["A", "C"]);
        assert_eq!(k.get("9", "C"), Some(1.0));
        assert_eq!(k.value("10", "C"), 0.0);
    }

    #[test]
    fn nothing_usable_is_no_data() {
        assert!(run("", false).is_none());
        assert!(run("only\ttwo\n", false).is_none());
    }
}
