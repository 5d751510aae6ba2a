//! Dot canvas backed by UTF-8 braille cells (2×4 dots per character).
//!
//! Every braille scalar U+2800..U+28FF is `0x2800 | mask`, one bit per dot:
//!
//! ```text
//! 0x01 0x08
//! 0x02 0x10
//! 0x04 0x20
//! 0x40 0x80
//! ```
//!
//! Each cell also remembers the last series that set one of its dots so the
//! renderer can colour it.

use std::f64::consts::TAU;

use crate::core::constants::{
    BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR,
};

const LEFT_DOTS: [u8; VR] = [0x01, 0x02, 0x04, 0x40];
const RIGHT_DOTS: [u8; VR] = [0x08, 0x10, 0x20, 0x80];

pub(crate) struct BrailleCanvas {
    cols: usize,
    rows: usize,
    masks: Vec<u8>,
    owners: Vec<Option<usize>>,
}

impl BrailleCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            masks: vec![0; cols * rows],
            owners: vec![None; cols * rows],
        }
    }

    /// Dot resolution `(width, height)`.
    #[inline]
    pub fn pixels(&self) -> (usize, usize) {
        (self.cols * HR, self.rows * VR)
    }

    /// Light dot `(px, py)`, origin top-left; out-of-range dots are ignored.
    pub fn set(&mut self, px: usize, py: usize, series: usize) {
        let (w, h) = self.pixels();
        if px >= w || py >= h {
            return;
        }
        let cell = (py / VR) * self.cols + px / HR;
        let dot = if px % HR == 0 {
            LEFT_DOTS[py % VR]
        } else {
            RIGHT_DOTS[py % VR]
        };
        self.masks[cell] |= dot;
        self.owners[cell] = Some(series);
    }

    /// Data coordinates to fractional dot coordinates, origin top-left.
    #[allow(clippy::cast_precision_loss)]
    fn to_pixel(&self, x: f64, y: f64, (xl, xh): (f64, f64), (yl, yh): (f64, f64)) -> Option<(f64, f64)> {
        let (w, h) = self.pixels();
        if w == 0 || h == 0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let fx = (x - xl) / (xh - xl) * (w - 1) as f64;
        let fy = (h - 1) as f64 - (y - yl) / (yh - yl) * (h - 1) as f64;
        Some((fx, fy))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn set_nearest(&mut self, fx: f64, fy: f64, series: usize) {
        if fx < -0.5 || fy < -0.5 {
            return;
        }
        self.set(fx.round() as usize, fy.round() as usize, series);
    }

    /// Light the dot nearest to `(x, y)`; values outside the ranges stick to
    /// the edge.
    #[allow(clippy::cast_precision_loss)]
    pub fn plot(&mut self, x: f64, y: f64, xr: (f64, f64), yr: (f64, f64), series: usize) {
        let Some((fx, fy)) = self.to_pixel(x, y, xr, yr) else {
            return;
        };
        let (w, h) = self.pixels();
        self.set_nearest(
            fx.clamp(0.0, (w - 1) as f64),
            fy.clamp(0.0, (h - 1) as f64),
            series,
        );
    }

    /// Circle outline around `(x, y)`; `radius` is in x-axis units and dots
    /// are treated as square. Parts outside the canvas are clipped.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn ring(&mut self, x: f64, y: f64, radius: f64, xr: (f64, f64), yr: (f64, f64), series: usize) {
        let Some((cx, cy)) = self.to_pixel(x, y, xr, yr) else {
            return;
        };
        let (w, _) = self.pixels();
        let r = radius / (xr.1 - xr.0) * (w - 1) as f64;
        if r.is_nan() || r < 0.5 {
            self.set_nearest(cx, cy, series);
            return;
        }
        let steps = ((r * TAU).ceil() as usize * 2).max(8);
        for k in 0..steps {
            let a = TAU * k as f64 / steps as f64;
            self.set_nearest(r.mul_add(a.cos(), cx), r.mul_add(a.sin(), cy), series);
        }
    }

    /// Characters of row `r` grouped into runs sharing the same owner.
    pub fn row_runs(&self, r: usize) -> Vec<(Option<usize>, String)> {
        let mut runs: Vec<(Option<usize>, String)> = Vec::new();
        let start = r * self.cols;
        for i in start..start + self.cols {
            let ch = char::from_u32(0x2800 | u32::from(self.masks[i])).unwrap_or(' ');
            let owner = self.owners[i];
            match runs.last_mut() {
                Some((o, s)) if *o == owner => s.push(ch),
                _ => runs.push((owner, ch.to_string())),
            }
        }
        runs
    }
}
