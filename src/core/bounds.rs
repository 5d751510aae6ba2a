//! Running extrema + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::TICK_DIVISIONS;

/// Running minimum / maximum of every value offered so far.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MinMax {
    range: Option<(f64, f64)>,
}

impl MinMax {
    #[must_use]
    pub const fn new() -> Self {
        Self { range: None }
    }

    #[inline]
    pub fn accept(&mut self, v: f64) {
        self.range = Some(match self.range {
            None => (v, v),
            Some((low, high)) => (low.min(v), high.max(v)),
        });
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Numeric axis covering exactly the observed values.
    #[must_use]
    pub fn to_range(&self) -> Option<AxisRange> {
        self.range.map(|(low, high)| AxisRange::new(low, high))
    }
}

/// Inclusive numeric span + suggested tick spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
    pub tick: f64,
}

impl AxisRange {
    /// Tick spacing is a tenth of the span; zero when `lower == upper`.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            tick: (upper - lower) / TICK_DIVISIONS,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        (self.upper - self.lower).abs() < f64::EPSILON
    }

    /// Bounds safe to divide by.
    ///
    /// * Non-finite bounds fall back to `(0.0, 1.0)`.
    /// * A flat range is expanded by +-0.5 so the plot keeps a non-zero span.
    #[must_use]
    pub fn drawable(&self) -> (f64, f64) {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return (0.0, 1.0);
        }
        if self.is_degenerate() {
            return (self.lower - 0.5, self.upper + 0.5);
        }
        (self.lower.min(self.upper), self.lower.max(self.upper))
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (usize, usize) {
    let (Width(w), Height(h)) = terminal_size().unwrap_or((Width(80), Height(30)));
    (usize::from(w), usize::from(h))
}

/// How wide will numeric labels be for the given range?
#[inline]
#[must_use]
pub fn label_width((low, high): (f64, f64), decimals: usize) -> usize {
    let lo = format!("{low:.decimals$}").len();
    let hi = format!("{high:.decimals$}").len();
    lo.max(hi)
}
