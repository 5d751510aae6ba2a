//! Header line + one numeric row per series, for grouped or stacked bars:
//!
//! ```text
//! Year  X  Y
//! 2018  1  2
//! 2019  3  4
//! ```

use crate::{
    core::{error::PlotError, source::LineSource},
    ingest::{LineFormat, Tally},
};

/// One row of the matrix: a named series with one value per header column.
#[derive(Clone, Debug, PartialEq)]
pub struct RowSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryMatrix {
    /// Header labels, without the leading row-label column.
    pub columns: Vec<String>,
    pub rows: Vec<RowSeries>,
}

impl CategoryMatrix {
    /// `(column label, value)` pairs of `row`.
    pub fn points<'a>(&'a self, row: &'a RowSeries) -> impl Iterator<Item = (&'a str, f64)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(row.values.iter().copied())
    }
}

#[derive(Clone, Debug)]
pub struct MatrixGrammar {
    format: LineFormat,
}

impl MatrixGrammar {
    #[must_use]
    pub fn new(format: LineFormat) -> Self {
        Self { format }
    }

    /// The first line is the header; it needs at least one column besides
    /// the row label or the pass is `None`.
    ///
    /// Row values that are missing, unparsable or not positive become `0`
    /// so every row stays aligned with the header. Rows are never merged,
    /// even when two share a name.
    pub fn ingest<S: LineSource + ?Sized>(
        &self,
        src: &mut S,
    ) -> Result<Option<CategoryMatrix>, PlotError> {
        let Some(header) = src.next_line()? else {
            return Ok(None);
        };
        let header = self.format.split(header);
        if header.len() <= 1 {
            return Ok(None);
        }
        let columns: Vec<String> = header[1..].iter().map(|s| (*s).to_owned()).collect();

        let mut rows = Vec::new();
        let mut tally = Tally::default();
        while let Some(line) = src.next_line()? {
            if line.trim().is_empty() {
                tally.skip();
                continue;
            }
            let tokens = self.format.split(line);
            let values = (1..=columns.len())
                .map(|x| {
                    tokens
                        .get(x)
                        .and_then(|t| (self.format.scalar)(*t))
                        .filter(|v| *v > 0.0)
                        .unwrap_or(0.0)
                })
                .collect();
            rows.push(RowSeries {
                name: tokens.first().copied().unwrap_or_default().to_owned(),
                values,
            });
            tally.keep();
        }
        tally.report("matrix");

        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(CategoryMatrix { columns, rows }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::LineReader;

    fn run(input: &str) -> Option<CategoryMatrix> {
        MatrixGrammar::new(LineFormat::default())
            .ingest(&mut LineReader::new(input.as_bytes()))
            .unwrap()
    }

    #[test]
    fn header_labels_each_value() {
        let m = run("Year\tX\tY\n2018\t1\t2\n").unwrap();
        assert_eq!(m.rows.len(), 1);
        assert_eq!(m.rows[0].name, "2018");
        let pts: Vec<_> = m.points(&m.rows[0]).collect();
        assert_eq!(pts, [("X", 1.0), ("Y", 2.0)]);
    }

    #[test]
    fn unparsable_values_become_zero() {
        let m = run("Year\tX\tY\n2019\tNA\t4\n2020\t-1\n").unwrap();
        assert_eq!(m.rows[0].values, [0.0, 4.0]);
        assert_eq!(m.rows[1].values, [0.0, 0.0]);
    }

    #[test]
    fn duplicate_row_names_stay_separate() {
        let m = run("k\tA\na\t1\n\na\t2\n").unwrap();
        let names: Vec<_> = m.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "a"]);
    }

    #[test]
    fn extra_row_fields_are_ignored() {
        let m = run("k\tA\nr\t1\t99\t98\n").unwrap();
        assert_eq!(m.rows[0].values, [1.0]);
    }

    #[test]
    fn header_without_columns_is_no_data() {
        assert!(run("").is_none());
        assert!(run("Year\n2018\t1\n").is_none());
        assert!(run("Year\t\t\n2018\t1\n").is_none());
        assert!(run("Year\tX\n").is_none());
    }
}
