//! Braille scatter: y bounds on the left, x bounds under the plot.

use crate::{
    chart::{NumberAxis, ScatterChart},
    core::{
        bounds::{MinMax, label_width},
        constants::{DECIMAL_PRECISION, LABEL_GUTTER, MIN_GRAPH_WIDTH},
        error::PlotError,
    },
    render::{
        Palette,
        bars::fmt_value,
        braille::BrailleCanvas,
        frame::{Frame, Line, fit},
        too_small,
    },
};

/// Drawable bounds of `axis`, fitted to `values` when the axis has no range.
fn bounds(axis: &NumberAxis, values: impl Iterator<Item = f64>) -> (f64, f64) {
    if let Some(r) = axis.range {
        return r.drawable();
    }
    let mut m = MinMax::new();
    values.for_each(|v| m.accept(v));
    m.to_range().map_or((0.0, 1.0), |r| r.drawable())
}

/// Draw `rows` lines of plot plus the axis decorations around them.
pub(crate) fn scatter(
    frame: &mut Frame<'_>,
    chart: &ScatterChart,
    palette: Palette,
    rows: usize,
) -> Result<(), PlotError> {
    let points = || chart.series.iter().flat_map(|s| s.points.iter());
    let xr = bounds(&chart.x_axis, points().map(|p| p.x));
    let yr = bounds(&chart.y_axis, points().map(|p| p.y));

    let inner = frame.inner();
    let label_w = label_width(yr, DECIMAL_PRECISION);
    let cols = inner.saturating_sub(label_w + LABEL_GUTTER);
    if cols < MIN_GRAPH_WIDTH {
        return Err(too_small(label_w + LABEL_GUTTER + MIN_GRAPH_WIDTH, inner, rows));
    }

    let mut canvas = BrailleCanvas::new(cols, rows);
    for (i, s) in chart.series.iter().enumerate() {
        for p in &s.points {
            match p.extra {
                Some(r) if r > 0.0 => canvas.ring(p.x, p.y, r, xr, yr, i),
                _ => canvas.plot(p.x, p.y, xr, yr, i),
            }
        }
    }

    if let Some(label) = &chart.y_axis.label {
        let mut l = Line::default();
        l.push(&fit(label, inner));
        frame.row(l);
    }

    let prec = DECIMAL_PRECISION;
    let gutter = " ".repeat(LABEL_GUTTER);
    for r in 0..rows {
        let tick = match r {
            0 => format!("{:>label_w$.prec$}", yr.1),
            _ if r + 1 == rows => format!("{:>label_w$.prec$}", yr.0),
            _ => " ".repeat(label_w),
        };
        let mut l = Line::default();
        l.push(&tick);
        l.push(&gutter);
        for (owner, text) in canvas.row_runs(r) {
            l.push_colored(owner.and_then(|i| palette.get(i)).as_ref(), &text);
        }
        frame.row(l);
    }

    let lo = fmt_value(xr.0);
    let hi = fmt_value(xr.1);
    let gap = cols
        .saturating_sub(lo.chars().count() + hi.chars().count())
        .max(1);
    let mut l = Line::default();
    l.push(&" ".repeat(label_w + LABEL_GUTTER));
    l.push(&lo);
    l.push(&" ".repeat(gap));
    l.push(&hi);
    frame.row(l);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chart::{XyPoint, XySeries},
        core::bounds::AxisRange,
    };

    fn chart(points: &[(f64, f64)]) -> ScatterChart {
        ScatterChart {
            x_axis: NumberAxis {
                label: None,
                range: Some(AxisRange::new(0.0, 10.0)),
            },
            y_axis: NumberAxis {
                label: Some("depth".into()),
                range: None,
            },
            series: vec![XySeries {
                name: "s".into(),
                points: points
                    .iter()
                    .map(|&(x, y)| XyPoint { x, y, extra: None })
                    .collect(),
            }],
        }
    }

    fn draw(c: &ScatterChart, width: usize, rows: usize) -> Vec<String> {
        let mut f = Frame::new(width, None);
        scatter(&mut f, c, Palette::plain(), rows).unwrap();
        let mut out = Vec::new();
        f.write_to(&mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn y_bounds_frame_the_plot_and_x_bounds_sit_below() {
        let lines = draw(&chart(&[(0.0, 1.0), (10.0, 3.0)]), 40, 4);
        // label row, 4 plot rows, x range row
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("depth"));
        assert!(lines[1].starts_with("│3.0 "));
        assert!(lines[4].starts_with("│1.0 "));
        assert!(lines[5].contains('0') && lines[5].contains("10"));
    }

    #[test]
    fn flat_data_still_draws() {
        let lines = draw(&chart(&[(5.0, 2.0)]), 40, 4);
        assert!(lines[1].starts_with("│2.5 "));
        assert!(lines.iter().any(|l| l.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c))));
    }

    #[test]
    fn narrow_frames_are_refused() {
        let mut f = Frame::new(12, None);
        assert!(matches!(
            scatter(&mut f, &chart(&[(1.0, 1.0)]), Palette::plain(), 4),
            Err(PlotError::GraphTooSmall { .. })
        ));
    }
}
