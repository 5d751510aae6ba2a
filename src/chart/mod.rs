//! Chart assembly: aggregate → series + axes for one chart kind.
//!
//! Pure mapping, no I/O and no validation beyond what ingestion did.

use clap::ValueEnum;

use crate::{
    core::{
        bounds::{AxisRange, MinMax},
        constants::GENOMIC_AXIS_LABEL,
        error::PlotError,
    },
    ingest::{Aggregate, CategoryMatrix, GenomicSeries, KeyValueMap, KeyedXyv, PointSeries},
};

/// What to draw; also selects the input grammar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ChartKind {
    /// Genome-wide scatter of BED-like intervals (needs a reference)
    Bedgraph,
    /// Pie of `key<TAB>value` pairs
    Pie,
    /// One bar per `key<TAB>value` pair
    SimpleHistogram,
    /// Grouped bars from a header + rows matrix
    Histogram,
    /// Stacked bars from a header + rows matrix
    StackedHistogram,
    /// Grouped bars from `x<TAB>y<TAB>value` triples
    Xyv,
    /// Stacked bars from `x<TAB>y<TAB>value` triples
    StackedXyv,
    /// Bubble plot of numeric tuples
    Bubble,
}

/// Optional axis titles from the command line.
#[derive(Clone, Debug, Default)]
pub struct AxisLabels {
    pub x: Option<String>,
    pub y: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieChart {
    pub slices: Vec<Slice>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAxis {
    pub label: Option<String>,
    pub categories: Vec<String>,
}

/// `range == None` lets the renderer fit the data.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberAxis {
    pub label: Option<String>,
    pub range: Option<AxisRange>,
}

/// One bar series: a value for every category of the x axis, in axis order.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub stacked: bool,
    pub x_axis: CategoryAxis,
    pub y_axis: NumberAxis,
    pub series: Vec<BarSeries>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
    /// Bubble radius, in x-axis units.
    pub extra: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct XySeries {
    pub name: String,
    pub points: Vec<XyPoint>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterChart {
    pub x_axis: NumberAxis,
    pub y_axis: NumberAxis,
    pub series: Vec<XySeries>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Chart {
    Pie(PieChart),
    Bar(BarChart),
    Scatter(ScatterChart),
}

impl Chart {
    /// Names of the series, in drawing order.
    #[must_use]
    pub fn series_names(&self) -> Vec<&str> {
        match self {
            Chart::Pie(p) => p.slices.iter().map(|s| s.label.as_str()).collect(),
            Chart::Bar(b) => b.series.iter().map(|s| s.name.as_str()).collect(),
            Chart::Scatter(s) => s.series.iter().map(|s| s.name.as_str()).collect(),
        }
    }
}

/// Map `aggregate` to the chart `kind` asks for.
///
/// Fails only when the aggregate is not the shape the kind's grammar
/// produces.
pub fn assemble(
    kind: ChartKind,
    aggregate: Aggregate,
    labels: &AxisLabels,
) -> Result<Chart, PlotError> {
    Ok(match (kind, aggregate) {
        (ChartKind::Pie, Aggregate::KeyValues(m)) => Chart::Pie(pie(&m)),
        (ChartKind::SimpleHistogram, Aggregate::KeyValues(m)) => {
            Chart::Bar(simple_histogram(&m, labels))
        }
        (ChartKind::Histogram, Aggregate::Matrix(m)) => Chart::Bar(histogram(m, false, labels)),
        (ChartKind::StackedHistogram, Aggregate::Matrix(m)) => {
            Chart::Bar(histogram(m, true, labels))
        }
        (ChartKind::Xyv, Aggregate::Keyed(k)) => Chart::Bar(xyv(&k, false, labels)),
        (ChartKind::StackedXyv, Aggregate::Keyed(k)) => Chart::Bar(xyv(&k, true, labels)),
        (ChartKind::Bubble, Aggregate::Points(p)) => Chart::Scatter(bubble(&p, labels)),
        (ChartKind::Bedgraph, Aggregate::Genomic(g)) => Chart::Scatter(bedgraph(g, labels)),
        _ => return Err(PlotError::NoData("aggregate does not match the chart type")),
    })
}

fn pie(m: &KeyValueMap) -> PieChart {
    PieChart {
        slices: m
            .iter()
            .map(|(k, v)| Slice {
                label: k.to_owned(),
                value: *v,
            })
            .collect(),
    }
}

fn category_axis(label: Option<&String>, categories: Vec<String>) -> CategoryAxis {
    CategoryAxis {
        label: label.cloned(),
        categories,
    }
}

fn auto_axis(label: Option<&String>) -> NumberAxis {
    NumberAxis {
        label: label.cloned(),
        range: None,
    }
}

fn ranged_axis(label: Option<&String>, m: MinMax) -> NumberAxis {
    NumberAxis {
        label: label.cloned(),
        range: m.to_range(),
    }
}

fn simple_histogram(m: &KeyValueMap, labels: &AxisLabels) -> BarChart {
    BarChart {
        stacked: true,
        x_axis: category_axis(labels.x.as_ref(), m.keys().map(str::to_owned).collect()),
        y_axis: auto_axis(labels.y.as_ref()),
        series: vec![BarSeries {
            name: String::new(),
            values: m.iter().map(|(_, v)| *v).collect(),
        }],
    }
}

/// Rows become series, header columns become categories.
fn histogram(m: CategoryMatrix, stacked: bool, labels: &AxisLabels) -> BarChart {
    BarChart {
        stacked,
        x_axis: category_axis(labels.x.as_ref(), m.columns),
        y_axis: auto_axis(labels.y.as_ref()),
        series: m
            .rows
            .into_iter()
            .map(|r| BarSeries {
                name: r.name,
                values: r.values,
            })
            .collect(),
    }
}

/// One series per `y`, one category per `x`; absent cells are `0`.
fn xyv(k: &KeyedXyv, stacked: bool, labels: &AxisLabels) -> BarChart {
    let xs: Vec<String> = k.x_keys().map(str::to_owned).collect();
    let series = k
        .y_keys()
        .map(|y| BarSeries {
            name: y.to_owned(),
            values: xs.iter().map(|x| k.value(x, y)).collect(),
        })
        .collect();
    BarChart {
        stacked,
        x_axis: category_axis(labels.x.as_ref(), xs),
        y_axis: auto_axis(labels.y.as_ref()),
        series,
    }
}

fn bubble(p: &PointSeries, labels: &AxisLabels) -> ScatterChart {
    let points = p
        .points()
        .filter_map(|c| {
            Some(XyPoint {
                x: *c.first()?,
                y: *c.get(1)?,
                extra: c.get(2).copied(),
            })
        })
        .collect();
    ScatterChart {
        x_axis: ranged_axis(labels.x.as_ref(), p.axis(0)),
        y_axis: ranged_axis(labels.y.as_ref(), p.axis(1)),
        series: vec![XySeries {
            name: String::new(),
            points,
        }],
    }
}

/// One series per contig; the x axis spans the whole reference.
#[allow(clippy::cast_precision_loss)]
fn bedgraph(g: GenomicSeries, labels: &AxisLabels) -> ScatterChart {
    let x_label = labels
        .x
        .clone()
        .unwrap_or_else(|| GENOMIC_AXIS_LABEL.to_owned());
    ScatterChart {
        x_axis: NumberAxis {
            label: Some(x_label),
            range: Some(AxisRange::new(1.0, g.reference_length as f64)),
        },
        y_axis: ranged_axis(labels.y.as_ref(), g.values),
        series: g
            .contigs
            .into_iter()
            .map(|c| XySeries {
                name: c.name,
                points: c
                    .points
                    .iter()
                    .map(|p| XyPoint {
                        x: p.offset as f64,
                        y: p.value,
                        extra: None,
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::source::LineReader,
        genome::{Contig, ContigDictionary},
        ingest::{
            GenomicGrammar, GenomicLayout, LineFormat, MatrixGrammar, TripleGrammar, TupleGrammar,
        },
    };

    fn no_labels() -> AxisLabels {
        AxisLabels::default()
    }

    #[test]
    fn pie_keeps_map_order() {
        let mut m = KeyValueMap::new();
        m.insert("b", 2.0);
        m.insert("a", 1.0);
        let Chart::Pie(p) = assemble(ChartKind::Pie, Aggregate::KeyValues(m), &no_labels()).unwrap()
        else {
            panic!("expected a pie");
        };
        assert_eq!(p.slices[0].label, "b");
        assert_eq!(p.slices[1].value, 1.0);
    }

    #[test]
    fn histogram_rows_become_series() {
        let m = MatrixGrammar::new(LineFormat::default())
            .ingest(&mut LineReader::new("Year\tX\tY\n2018\t1\t2\n2019\t3\t4\n".as_bytes()))
            .unwrap()
            .unwrap();
        let labels = AxisLabels {
            x: Some("Category".into()),
            y: None,
        };
        let Chart::Bar(b) = assemble(ChartKind::StackedHistogram, Aggregate::Matrix(m), &labels)
            .unwrap()
        else {
            panic!("expected bars");
        };
        assert!(b.stacked);
        assert_eq!(b.x_axis.categories, ["X", "Y"]);
        assert_eq!(b.x_axis.label.as_deref(), Some("Category"));
        assert_eq!(b.series[1].name, "2019");
        assert_eq!(b.series[1].values, [3.0, 4.0]);
        assert_eq!(b.y_axis.range, None);
    }

    #[test]
    fn xyv_fills_missing_cells_with_zero() {
        let k = TripleGrammar::new(LineFormat::default(), false)
            .ingest(&mut LineReader::new("2018\tX\t1\n2018\tY\t2\n2019\tX\t3\n".as_bytes()))
            .unwrap()
            .unwrap();
        let Chart::Bar(b) = assemble(ChartKind::Xyv, Aggregate::Keyed(k), &no_labels()).unwrap()
        else {
            panic!("expected bars");
        };
        assert!(!b.stacked);
        assert_eq!(b.x_axis.categories, ["2018", "2019"]);
        assert_eq!(b.series[0].values, [1.0, 3.0]);
        assert_eq!(b.series[1].name, "Y");
        assert_eq!(b.series[1].values, [2.0, 0.0]);
    }

    #[test]
    fn bubble_axes_tick_a_tenth_of_the_span() {
        let p = TupleGrammar::new(LineFormat::default(), 3)
            .ingest(&mut LineReader::new("0\t10\t1\n20\t30\t2\n".as_bytes()))
            .unwrap()
            .unwrap();
        let Chart::Scatter(s) =
            assemble(ChartKind::Bubble, Aggregate::Points(p), &no_labels()).unwrap()
        else {
            panic!("expected a scatter");
        };
        let x = s.x_axis.range.unwrap();
        assert_eq!((x.lower, x.upper, x.tick), (0.0, 20.0, 2.0));
        assert_eq!(s.series[0].points[1].extra, Some(2.0));
    }

    #[test]
    fn bedgraph_axis_spans_the_reference() {
        let dict = ContigDictionary::new(vec![Contig::new("chr1", 1000), Contig::new("chr2", 500)]);
        let g = GenomicGrammar::new(LineFormat::default(), GenomicLayout::Interval, dict)
            .ingest(&mut LineReader::new("chr2\t0\t100\t4\n".as_bytes()))
            .unwrap()
            .unwrap();
        let Chart::Scatter(s) =
            assemble(ChartKind::Bedgraph, Aggregate::Genomic(g), &no_labels()).unwrap()
        else {
            panic!("expected a scatter");
        };
        assert_eq!(s.x_axis.label.as_deref(), Some("Genomic Index"));
        let x = s.x_axis.range.unwrap();
        assert_eq!((x.lower, x.upper), (1.0, 1500.0));
        assert_eq!(s.series.len(), 2);
        assert_eq!(s.series[1].points[0].x, 1050.0);
        assert!(s.y_axis.range.unwrap().is_degenerate());
    }

    #[test]
    fn mismatched_aggregate_is_rejected() {
        let err = assemble(ChartKind::Pie, Aggregate::Points(PointSeries::new(2)), &no_labels());
        assert!(err.is_err());
    }
}
