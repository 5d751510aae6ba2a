//! Text rendering of assembled charts.
//!
//! Everything is drawn into a [`frame::Frame`] first and written in one go,
//! so a failed layout never leaves half a chart on the terminal.

mod bars;
mod braille;
mod frame;
mod scatter;

use std::io::Write;

use crate::{
    chart::Chart,
    core::{
        bounds::terminal_geometry,
        color::AnsiCode,
        config::Config,
        constants::{BORDER_WIDTH, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH},
        error::PlotError,
    },
};

use frame::{Frame, Line};

/// Rows the terminal keeps for the shell prompt below the chart
const PROMPT_ROWS: usize = 1;
/// Legend marker of lines, bubbles and grouped bars
const MARKER: char = '■';

/// Series colours; `plain` turns every colour off.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Palette {
    first: AnsiCode,
    plain: bool,
}

impl Palette {
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self {
            first: AnsiCode::WHITE,
            plain: true,
        }
    }

    #[inline]
    pub(crate) fn get(self, index: usize) -> Option<AnsiCode> {
        (!self.plain).then(|| AnsiCode::series(self.first, index))
    }
}

pub(crate) fn too_small(want_w: usize, got_w: usize, rows: usize) -> PlotError {
    PlotError::GraphTooSmall {
        want_w: want_w + BORDER_WIDTH,
        want_h: rows,
        got_w: got_w + BORDER_WIDTH,
        got_h: rows,
    }
}

/// Draws a [`Chart`] inside a titled box.
#[derive(Clone, Debug)]
pub struct Renderer {
    title: String,
    palette: Palette,
    hide_legend: bool,
    width: Option<usize>,
    height: Option<usize>,
}

impl Renderer {
    /// `plain` drops every colour escape, for writing to files.
    #[must_use]
    pub fn from_config(cfg: &Config, plain: bool) -> Self {
        Self {
            title: cfg.title.clone(),
            palette: Palette {
                first: cfg.color,
                plain,
            },
            hide_legend: cfg.hide_legend,
            width: cfg.width,
            height: cfg.height,
        }
    }

    /// Lay out `chart` and write it to `out`.
    ///
    /// Width and height follow the terminal unless configured.
    pub fn render<W: Write>(&self, chart: &Chart, out: &mut W) -> Result<(), PlotError> {
        let (term_w, term_h) = terminal_geometry();
        let width = self.width.unwrap_or(term_w);
        if width < MIN_GRAPH_WIDTH + BORDER_WIDTH {
            return Err(too_small(MIN_GRAPH_WIDTH, width.saturating_sub(BORDER_WIDTH), 0));
        }

        let chrome = self.palette.get(0);
        let mut frame = Frame::new(width, chrome.as_ref());
        frame.top(&self.title);
        let legend = self.legend(chart, frame.inner());

        let caption = match chart {
            Chart::Pie(p) => {
                bars::pie(&mut frame, p, self.palette)?;
                None
            }
            Chart::Bar(b) => {
                bars::bars(&mut frame, b, self.palette)?;
                None
            }
            Chart::Scatter(s) => {
                // top, bottom and x range rows, the y label, the legend block
                let fixed = 3
                    + usize::from(s.y_axis.label.is_some())
                    + legend.len()
                    + usize::from(!legend.is_empty());
                let rows = match self.height {
                    Some(h) => h
                        .checked_sub(fixed)
                        .filter(|r| *r >= MIN_GRAPH_HEIGHT)
                        .ok_or(PlotError::GraphTooSmall {
                            want_w: width,
                            want_h: fixed + MIN_GRAPH_HEIGHT,
                            got_w: width,
                            got_h: h,
                        })?,
                    None => term_h
                        .saturating_sub(fixed + PROMPT_ROWS)
                        .max(MIN_GRAPH_HEIGHT),
                };
                scatter::scatter(&mut frame, s, self.palette, rows)?;
                s.x_axis.label.as_deref()
            }
        };

        if !legend.is_empty() {
            frame.blank();
            for l in legend {
                frame.row(l);
            }
        }
        frame.bottom(caption);
        frame.write_to(out)
    }

    /// Series names with their colours, wrapped to `inner` columns.
    ///
    /// Pie slices are labelled in place and unnamed series need no key, so
    /// both yield nothing.
    fn legend(&self, chart: &Chart, inner: usize) -> Vec<Line> {
        if self.hide_legend || matches!(chart, Chart::Pie(_)) {
            return Vec::new();
        }
        let names = chart.series_names();
        if names.iter().all(|n| n.is_empty()) {
            return Vec::new();
        }
        let stacked = matches!(chart, Chart::Bar(b) if b.stacked);

        let mut lines = Vec::new();
        let mut line = Line::default();
        for (i, name) in names.iter().enumerate() {
            let marker = if stacked {
                bars::SHADES[i % bars::SHADES.len()]
            } else {
                MARKER
            };
            let entry = frame::fit(name, inner.saturating_sub(2));
            let need = entry.chars().count() + 2;
            if line.visible() > 0 && line.visible() + 2 + need > inner {
                lines.push(std::mem::take(&mut line));
            }
            if line.visible() > 0 {
                line.push("  ");
            }
            line.push_colored(self.palette.get(i).as_ref(), &marker.to_string());
            line.push(" ");
            line.push(&entry);
        }
        if line.visible() > 0 {
            lines.push(line);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{
        BarChart, BarSeries, CategoryAxis, ChartKind, NumberAxis, PieChart, ScatterChart, Slice,
        XyPoint, XySeries,
    };

    fn renderer(kind: ChartKind, hide_legend: bool) -> Renderer {
        let cfg = Config::builder(kind)
            .title("T")
            .hide_legend(hide_legend)
            .size(Some(60), Some(20))
            .build()
            .unwrap();
        Renderer::from_config(&cfg, true)
    }

    fn draw(r: &Renderer, chart: &Chart) -> String {
        let mut out = Vec::new();
        r.render(chart, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn bars(stacked: bool) -> Chart {
        Chart::Bar(BarChart {
            stacked,
            x_axis: CategoryAxis {
                label: None,
                categories: vec!["2018".into(), "2019".into()],
            },
            y_axis: NumberAxis {
                label: None,
                range: None,
            },
            series: vec![
                BarSeries {
                    name: "X".into(),
                    values: vec![1.0, 3.0],
                },
                BarSeries {
                    name: "Y".into(),
                    values: vec![2.0, 4.0],
                },
            ],
        })
    }

    #[test]
    fn every_line_fills_the_frame() {
        let text = draw(&renderer(ChartKind::Histogram, false), &bars(false));
        assert!(text.lines().all(|l| l.chars().count() == 60));
        assert!(text.lines().next().unwrap().contains(" T "));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn stacked_bars_show_totals_and_shaded_legend() {
        let text = draw(&renderer(ChartKind::StackedHistogram, false), &bars(true));
        let rows: Vec<_> = text.lines().collect();
        assert!(rows[1].starts_with("│2018 ") && rows[1].trim_end_matches('│').ends_with(" 3"));
        assert!(rows[2].trim_end_matches('│').ends_with(" 7"));
        assert!(rows[2].contains('▓'));
        assert!(text.contains("█ X  ▓ Y"));
    }

    #[test]
    fn hidden_legend_is_not_drawn() {
        let text = draw(&renderer(ChartKind::Xyv, true), &bars(false));
        assert!(!text.contains("■ X"));
    }

    #[test]
    fn pie_lines_carry_shares() {
        let chart = Chart::Pie(PieChart {
            slices: vec![
                Slice {
                    label: "a".into(),
                    value: 1.0,
                },
                Slice {
                    label: "b".into(),
                    value: 3.0,
                },
            ],
        });
        let text = draw(&renderer(ChartKind::Pie, false), &chart);
        assert!(text.contains(" 25.0% (1)"));
        assert!(text.contains(" 75.0% (3)"));
    }

    #[test]
    fn scatter_fills_the_requested_height() {
        let chart = Chart::Scatter(ScatterChart {
            x_axis: NumberAxis {
                label: Some("pos".into()),
                range: None,
            },
            y_axis: NumberAxis {
                label: None,
                range: None,
            },
            series: vec![XySeries {
                name: "chr1".into(),
                points: vec![XyPoint {
                    x: 1.0,
                    y: 2.0,
                    extra: None,
                }],
            }],
        });
        let text = draw(&renderer(ChartKind::Bubble, false), &chart);
        assert_eq!(text.lines().count(), 20);
        assert!(text.lines().last().unwrap().contains(" pos "));
        assert!(text.contains("■ chr1"));
    }

    #[test]
    fn tiny_widths_are_refused() {
        let cfg = Config::builder(ChartKind::Pie)
            .size(Some(5), None)
            .build()
            .unwrap();
        let mut out = Vec::new();
        let err = Renderer::from_config(&cfg, true).render(&bars(false), &mut out);
        assert!(matches!(err, Err(PlotError::GraphTooSmall { .. })));
        assert!(out.is_empty());
    }
}
