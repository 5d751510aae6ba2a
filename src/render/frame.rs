//! Box-drawn frame around a chart: centred title on the top rule, caption
//! on the bottom rule, content rows padded to a fixed width.

use std::io::Write;

use crate::core::{
    color::{AnsiCode, colorize},
    constants::BORDER_WIDTH,
    error::PlotError,
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

/// One output row; tracks its printable width separately from the escapes
/// it may contain.
#[derive(Debug, Default)]
pub(crate) struct Line {
    buf: String,
    visible: usize,
}

impl Line {
    pub fn push(&mut self, s: &str) {
        self.buf.push_str(s);
        self.visible += s.chars().count();
    }

    pub fn push_colored(&mut self, color: Option<&AnsiCode>, s: &str) {
        if s.is_empty() {
            return;
        }
        self.buf.push_str(&colorize(color, s));
        self.visible += s.chars().count();
    }

    pub fn pad_to(&mut self, width: usize) {
        if self.visible < width {
            self.push(&" ".repeat(width - self.visible));
        }
    }

    #[inline]
    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub(crate) fn fit(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    if max == 0 {
        return String::new();
    }
    let mut s: String = text.chars().take(max - 1).collect();
    s.push('…');
    s
}

/// Write centred coloured text between horizontal rules.
fn push_centered(line: &mut Line, text: &str, width: usize, color: Option<&AnsiCode>) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        line.push(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    line.push(&H.repeat(pad_left));
    line.push("  "); // 2-char left padding
    line.push_colored(color, text);
    line.push(" "); // 1-char right padding
    line.push(&H.repeat(pad_right));
}

pub(crate) struct Frame<'a> {
    width: usize,
    color: Option<&'a AnsiCode>,
    rows: Vec<Line>,
}

impl<'a> Frame<'a> {
    /// `width` counts both borders.
    pub fn new(width: usize, color: Option<&'a AnsiCode>) -> Self {
        Self {
            width,
            color,
            rows: Vec::new(),
        }
    }

    /// Columns available between the borders.
    #[inline]
    pub fn inner(&self) -> usize {
        self.width.saturating_sub(BORDER_WIDTH)
    }

    pub fn top(&mut self, title: &str) {
        let mut l = Line::default();
        l.push(TL);
        push_centered(&mut l, title, self.inner(), self.color);
        l.push(TR);
        self.rows.push(l);
    }

    pub fn row(&mut self, mut content: Line) {
        let mut l = Line::default();
        l.push(V);
        content.pad_to(self.inner());
        l.buf.push_str(content.as_str());
        l.visible += content.visible();
        l.push(V);
        self.rows.push(l);
    }

    pub fn blank(&mut self) {
        self.row(Line::default());
    }

    pub fn bottom(&mut self, caption: Option<&str>) {
        let mut l = Line::default();
        l.push(BL);
        push_centered(&mut l, caption.unwrap_or_default(), self.inner(), self.color);
        l.push(BR);
        self.rows.push(l);
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), PlotError> {
        for r in &self.rows {
            writeln!(out, "{}", r.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_padded_between_borders() {
        let mut f = Frame::new(12, None);
        f.top("hi");
        let mut l = Line::default();
        l.push("abc");
        f.row(l);
        f.bottom(None);

        let mut out = Vec::new();
        f.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "│abc       │");
        assert_eq!(lines[2], "└──────────┘");
        assert!(lines[0].contains("  hi "));
        assert!(lines.iter().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn escapes_do_not_count_as_width() {
        let red = AnsiCode::RED;
        let mut l = Line::default();
        l.push_colored(Some(&red), "ab");
        assert_eq!(l.visible(), 2);
        l.pad_to(4);
        assert!(l.as_str().ends_with("  "));
    }

    #[test]
    fn long_labels_are_cut() {
        assert_eq!(fit("chromosome", 5), "chro…");
        assert_eq!(fit("chr1", 5), "chr1");
    }
}
