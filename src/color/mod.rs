//! RGB color values and color-string parsing.
//!
//! Anchor colors arrive as CSS-like strings (`#rgb`, `#rrggbb`, `rgb(..)`,
//! `rgba(..)`) and are resolved to opaque 8-bit [`Rgb`] triples before any
//! interpolation happens. Translucent `rgba` colors are composited onto a
//! white background.

mod gradient;

use std::fmt;
use std::str::FromStr;

pub use gradient::{GradientPalette, MAX_STEPS};
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// An opaque RGB color with 8-bit channels.
///
/// Serializes as a `[r, g, b]` array so palettes read naturally in TOML.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white, the background translucent colors are composited onto.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized `[0, 1]` channels, as a GPU color buffer expects them.
    #[must_use]
    pub fn to_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    pub(crate) fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.channels()
    }
}

/// Formats as comma-joined channels, e.g. `255,125,69`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse a color string into an opaque [`Rgb`].
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`
/// (case-insensitive, surrounding whitespace ignored). Alpha is composited
/// onto white: `channel' = floor(a * channel + (1 - a) * 255)`.
pub fn parse_color(input: &str) -> Result<Rgb, ThemeError> {
    let spec = input.trim().to_ascii_lowercase();
    let parsed = if let Some(hex) = spec.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(body) = spec
        .strip_prefix("rgba(")
        .or_else(|| spec.strip_prefix("rgb("))
    {
        body.strip_suffix(')').and_then(parse_functional)
    } else {
        None
    };
    parsed.ok_or_else(|| ThemeError::InvalidColorFormat(input.to_owned()))
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, digit) in out.iter_mut().zip(hex.chars()) {
                // #abc expands to #aabbcc
                *slot = channel(&format!("{digit}{digit}"))?;
            }
            Some(Rgb::from(out))
        }
        6 => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn parse_functional(body: &str) -> Option<Rgb> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }
    let alpha = match parts.get(3) {
        Some(a) => a.parse::<f64>().ok().filter(|a| (0.0..=1.0).contains(a))?,
        None => 1.0,
    };
    let mut out = [0u8; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        let value = f64::from(part.parse::<u8>().ok()?);
        *slot = (alpha * value + (1.0 - alpha) * 255.0).floor() as u8;
    }
    Some(Rgb::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_color("#0000FF").unwrap(), Rgb::new(0, 0, 255));
        assert_eq!(parse_color("#fb3767").unwrap(), Rgb::new(251, 55, 103));
    }

    #[test]
    fn expands_three_digit_hex() {
        assert_eq!(parse_color("#f0a").unwrap(), Rgb::new(255, 0, 170));
    }

    #[test]
    fn parses_rgb_with_spaces() {
        assert_eq!(
            parse_color(" rgb(221, 132, 60) ").unwrap(),
            Rgb::new(221, 132, 60)
        );
        assert_eq!(parse_color("RGB(0,0,255)").unwrap(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn rgba_composites_onto_white() {
        assert_eq!(
            parse_color("rgba(251, 55, 103, 1)").unwrap(),
            Rgb::new(251, 55, 103)
        );
        // 0.5 * 251 + 0.5 * 255 = 253, 0.5 * 55 + 0.5 * 255 = 155
        assert_eq!(
            parse_color("rgba(251, 55, 255, 0.5)").unwrap(),
            Rgb::new(253, 155, 255)
        );
        assert_eq!(parse_color("rgba(0, 0, 0, 0)").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in [
            "",
            "blue",
            "#12",
            "#12345",
            "#ggg",
            "rgb(1, 2)",
            "rgb(1, 2, 3",
            "rgb(256, 0, 0)",
            "rgb(-1, 0, 0)",
            "rgba(1, 2, 3, 1.5)",
            "rgba(1, 2, 3, 4, 5)",
        ] {
            assert!(
                matches!(parse_color(bad), Err(ThemeError::InvalidColorFormat(_))),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn displays_as_comma_joined_channels() {
        assert_eq!(Rgb::new(255, 125, 69).to_string(), "255,125,69");
    }

    #[test]
    fn normalizes_channels() {
        assert_eq!(Rgb::WHITE.to_f32(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::new(0, 0, 0).to_f32(), [0.0, 0.0, 0.0]);
    }
}
