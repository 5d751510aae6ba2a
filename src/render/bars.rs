//! Horizontal bars: pie shares, grouped bars and stacked bars.
//!
//! Categories run down the left edge, values grow to the right. Bars are
//! drawn in eighth-cell steps; stacked segments use one shade per series so
//! they stay apart without colour.

use std::iter::repeat_n;

use crate::{
    chart::{BarChart, BarSeries, PieChart},
    core::{
        constants::{DECIMAL_PRECISION, MIN_GRAPH_WIDTH},
        error::PlotError,
    },
    render::{
        Palette,
        frame::{Frame, Line, fit},
        too_small,
    },
};

const FULL: char = '█';
/// 1/8 .. 7/8 of a cell
const EIGHTHS: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];
/// Fill of stacked segments, cycling by series
pub(crate) const SHADES: [char; 4] = ['█', '▓', '▒', '░'];

/// Whole numbers print without decimals.
pub(crate) fn fmt_value(v: f64) -> String {
    if v.fract().abs() < f64::EPSILON && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        let prec = DECIMAL_PRECISION;
        format!("{v:.prec$}")
    }
}

/// Label column: widest label, but never more than a third of the row.
fn label_column<'a>(labels: impl Iterator<Item = &'a str>, inner: usize) -> usize {
    labels
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .min(inner / 3)
}

fn push_label(line: &mut Line, label: &str, width: usize) {
    line.push(&format!("{:<width$} ", fit(label, width)));
}

/// Columns left for the bars once labels and value suffixes are placed.
fn bar_width(inner: usize, label_w: usize, suffix_w: usize, rows: usize) -> Result<usize, PlotError> {
    let chrome = label_w + 1 + suffix_w;
    let w = inner.saturating_sub(chrome);
    if w < MIN_GRAPH_WIDTH {
        return Err(too_small(chrome + MIN_GRAPH_WIDTH, inner, rows));
    }
    Ok(w)
}

/// Cells covered by `value` on a `width`-cell scale topping out at `max`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn cells(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max).min(1.0) * width as f64).round() as usize
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let eighths = ((value / max).min(1.0) * (width * 8) as f64).round() as usize;
    let mut s: String = repeat_n(FULL, eighths / 8).collect();
    if eighths % 8 > 0 {
        s.push(EIGHTHS[eighths % 8 - 1]);
    }
    s
}

/// One line per slice: label, share bar, percentage and raw value.
pub(crate) fn pie(frame: &mut Frame<'_>, chart: &PieChart, palette: Palette) -> Result<(), PlotError> {
    let inner = frame.inner();
    let total: f64 = chart.slices.iter().map(|s| s.value).sum();
    let suffixes: Vec<String> = chart
        .slices
        .iter()
        .map(|s| {
            let pct = if total > 0.0 {
                s.value / total * 100.0
            } else {
                0.0
            };
            format!(" {pct:5.1}% ({})", fmt_value(s.value))
        })
        .collect();
    let suffix_w = suffixes.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    let label_w = label_column(chart.slices.iter().map(|s| s.label.as_str()), inner);
    let width = bar_width(inner, label_w, suffix_w, chart.slices.len())?;

    for (i, (slice, suffix)) in chart.slices.iter().zip(&suffixes).enumerate() {
        let mut l = Line::default();
        push_label(&mut l, &slice.label, label_w);
        l.push_colored(palette.get(i).as_ref(), &bar(slice.value, total, width));
        l.pad_to(label_w + 1 + width);
        l.push(suffix);
        frame.row(l);
    }
    Ok(())
}

fn value_at(series: &BarSeries, category: usize) -> f64 {
    series.values.get(category).copied().unwrap_or(0.0).max(0.0)
}

pub(crate) fn bars(frame: &mut Frame<'_>, chart: &BarChart, palette: Palette) -> Result<(), PlotError> {
    let inner = frame.inner();
    let cats = &chart.x_axis.categories;
    let label_w = label_column(
        cats.iter().map(String::as_str).chain(chart.x_axis.label.as_deref()),
        inner,
    );

    // per category: stack height, or the tallest bar of the group
    let totals: Vec<f64> = (0..cats.len())
        .map(|c| {
            let vals = chart.series.iter().map(|s| value_at(s, c));
            if chart.stacked {
                vals.sum::<f64>()
            } else {
                vals.fold(0.0, f64::max)
            }
        })
        .collect();
    let data_max = totals.iter().copied().fold(0.0, f64::max);
    let max = chart.y_axis.range.map_or(data_max, |r| r.drawable().1);

    let widest = if chart.stacked {
        totals.iter().map(|v| fmt_value(*v).len()).max()
    } else {
        chart
            .series
            .iter()
            .flat_map(|s| (0..cats.len()).map(|c| fmt_value(value_at(s, c)).len()))
            .max()
    };
    let suffix_w = widest.unwrap_or(0) + 1;
    let rows = if chart.stacked {
        cats.len()
    } else {
        cats.len() * chart.series.len()
    };
    let width = bar_width(inner, label_w, suffix_w, rows)?;

    if chart.x_axis.label.is_some() || chart.y_axis.label.is_some() {
        let mut l = Line::default();
        push_label(&mut l, chart.x_axis.label.as_deref().unwrap_or_default(), label_w);
        l.push(&fit(
            chart.y_axis.label.as_deref().unwrap_or_default(),
            inner.saturating_sub(label_w + 1),
        ));
        frame.row(l);
    }

    for (c, cat) in cats.iter().enumerate() {
        if chart.stacked {
            let mut l = Line::default();
            push_label(&mut l, cat, label_w);
            let mut sum = 0.0;
            let mut drawn = 0;
            for (i, s) in chart.series.iter().enumerate() {
                sum += value_at(s, c);
                // segment ends are rounded from the running sum so they never drift
                let end = cells(sum, max, width);
                let seg: String = repeat_n(SHADES[i % SHADES.len()], end.saturating_sub(drawn)).collect();
                l.push_colored(palette.get(i).as_ref(), &seg);
                drawn = drawn.max(end);
            }
            l.pad_to(label_w + 1 + width);
            l.push(&format!(" {}", fmt_value(totals[c])));
            frame.row(l);
            continue;
        }

        if c > 0 && chart.series.len() > 1 {
            frame.blank();
        }
        for (i, s) in chart.series.iter().enumerate() {
            let v = value_at(s, c);
            let mut l = Line::default();
            push_label(&mut l, if i == 0 { cat.as_str() } else { "" }, label_w);
            l.push_colored(palette.get(i).as_ref(), &bar(v, max, width));
            l.pad_to(label_w + 1 + width);
            l.push(&format!(" {}", fmt_value(v)));
            frame.row(l);
        }
    }
    Ok(())
}
