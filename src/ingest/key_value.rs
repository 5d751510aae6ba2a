//! One `key → value` pair per line, feeding pie charts and simple histograms.

use crate::{
    core::{error::PlotError, source::LineSource},
    ingest::{
        LineFormat, Tally,
        ordered::{KeyOrder, OrderedMap},
        sort_unique::parse_sort_unique,
    },
};

/// Non-blank keys mapped to non-negative values.
pub type KeyValueMap = OrderedMap<f64>;

#[derive(Clone, Debug)]
pub struct KeyValueGrammar {
    format: LineFormat,
    sort_unique: bool,
}

impl KeyValueGrammar {
    #[must_use]
    pub fn new(format: LineFormat, sort_unique: bool) -> Self {
        Self {
            format,
            sort_unique,
        }
    }

    /// Read every pair of `src`.
    ///
    /// * counted input: key = remainder, value = count; a repeated key
    ///   overwrites, keys end up in natural order.
    /// * delimited input: `key<DELIM>value`; the first value of a key wins,
    ///   keys stay in input order.
    ///
    /// Blank and `#` lines are ignored. An empty map is a valid result.
    pub fn ingest<S: LineSource + ?Sized>(&self, src: &mut S) -> Result<KeyValueMap, PlotError> {
        let mut map = KeyValueMap::new();
        let mut tally = Tally::default();

        while let Some(line) = src.next_line()? {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            if self.sort_unique {
                match parse_sort_unique(line) {
                    Some((count, key)) => {
                        map.insert(key, count);
                        tally.keep();
                    }
                    None => tally.skip(),
                }
                continue;
            }

            let kept = self
                .format
                .split_first(line)
                .filter(|(key, _)| !key.trim().is_empty())
                .and_then(|(key, raw)| Some((key, self.format.value(raw)?)))
                .is_some_and(|(key, v)| map.insert_if_absent(key, v));
            if kept {
                tally.keep();
            } else {
                tally.skip();
            }
        }

        map.arrange(KeyOrder::for_sort_unique(self.sort_unique));
        tally.report("key/value");
        Ok(map)
    }
}
