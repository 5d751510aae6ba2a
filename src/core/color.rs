//! ANSI colours for series, titles and legends.

use std::{error::Error, fmt};

const RESET: &str = "\x1b[0m";

#[derive(Debug)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

/// A foreground colour escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    /// One of the eight basic colours, `ESC[3Nm`
    Basic(u8),
    /// True colour, `ESC[38;2;R;G;Bm`
    Rgb(u8, u8, u8),
}

impl AnsiCode {
    pub const RED: Self = Self::Basic(1);
    pub const GREEN: Self = Self::Basic(2);
    pub const YELLOW: Self = Self::Basic(3);
    pub const BLUE: Self = Self::Basic(4);
    pub const MAGENTA: Self = Self::Basic(5);
    pub const CYAN: Self = Self::Basic(6);
    pub const WHITE: Self = Self::Basic(7);
    pub const ORANGE: Self = Self::Rgb(210, 135, 10);
}

/// Names accepted by [`AnsiCode::from_name`].
const NAMED: [(&str, AnsiCode); 9] = [
    ("red", AnsiCode::RED),
    ("green", AnsiCode::GREEN),
    ("yellow", AnsiCode::YELLOW),
    ("blue", AnsiCode::BLUE),
    ("magenta", AnsiCode::MAGENTA),
    ("cyan", AnsiCode::CYAN),
    ("white", AnsiCode::WHITE),
    ("orange", AnsiCode::ORANGE),
    ("industrial", AnsiCode::ORANGE),
];

/// Series 1.. cycle through these; series 0 takes the configured colour.
const PALETTE: [AnsiCode; 6] = [
    AnsiCode::ORANGE,
    AnsiCode::CYAN,
    AnsiCode::MAGENTA,
    AnsiCode::GREEN,
    AnsiCode::YELLOW,
    AnsiCode::BLUE,
];

impl AnsiCode {
    /// Colour of the `index`-th series, `first` for series 0.
    #[must_use]
    pub fn series(first: AnsiCode, index: usize) -> Self {
        if index == 0 {
            first
        } else {
            PALETTE[index % PALETTE.len()]
        }
    }

    /// A colour name (case-insensitive) or `#RRGGBB`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        match NAMED.iter().find(|(name, _)| name.eq_ignore_ascii_case(s)) {
            Some((_, c)) => Ok(*c),
            None => Self::from_hex(s),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength);
        }
        if !h.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit);
        }
        let rgb = u32::from_str_radix(h, 16).map_err(|_| ColorError::InvalidHexDigit)?;
        let [_, r, g, b] = rgb.to_be_bytes();
        Ok(Self::Rgb(r, g, b))
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(n) => write!(f, "\x1b[3{n}m"),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

/// Wrap `text` in colour + reset sequence, or leave it bare when `color` is
/// `None` (plain-text export).
#[inline]
#[must_use]
pub fn colorize(color: Option<&AnsiCode>, text: &str) -> String {
    match color {
        Some(c) => format!("{c}{text}{RESET}"),
        None => text.to_owned(),
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours_become_true_colour_escapes() {
        let c = AnsiCode::from_name("#505050").unwrap();
        assert_eq!(c, AnsiCode::Rgb(0x50, 0x50, 0x50));
        assert_eq!(c.to_string(), "\x1b[38;2;80;80;80m");
    }

    #[test]
    fn names_ignore_case() {
        assert_eq!(AnsiCode::from_name(" Cyan ").unwrap(), AnsiCode::CYAN);
        assert_eq!(AnsiCode::from_name("industrial").unwrap(), AnsiCode::ORANGE);
    }

    #[test]
    fn bad_colours_are_rejected() {
        assert!(matches!(
            AnsiCode::from_name("#12"),
            Err(ColorError::InvalidHexLength)
        ));
        assert!(matches!(
            AnsiCode::from_name("zzzzzz"),
            Err(ColorError::InvalidHexDigit)
        ));
        assert!(matches!(
            AnsiCode::from_name("+12345"),
            Err(ColorError::InvalidHexDigit)
        ));
    }

    #[test]
    fn series_colours_cycle_after_the_first() {
        let first = AnsiCode::RED;
        assert_eq!(AnsiCode::series(first, 0), first);
        assert_eq!(AnsiCode::series(first, 1), AnsiCode::CYAN);
        assert_eq!(AnsiCode::series(first, 7), AnsiCode::CYAN);
    }

    #[test]
    fn plain_output_has_no_escapes() {
        assert_eq!(colorize(None, "x"), "x");
        assert_eq!(colorize(Some(&AnsiCode::RED), "x"), "\x1b[31mx\x1b[0m");
    }
}
