//! Discrete multi-stop color gradients.
//!
//! A [`GradientPalette`] holds exactly `steps` colors laid out between N
//! anchor colors. The `steps - 1` interpolated slots are split evenly across
//! the `N - 1` segments; any remainder goes one extra slot per segment,
//! starting from the first. Each segment interpolates linearly in RGB from
//! its start anchor, and only the final segment emits its end anchor, so the
//! last palette entry is exactly the last anchor.

use super::{parse_color, Rgb};
use crate::error::ThemeError;

/// Largest palette [`GradientPalette::from_anchors`] will build.
pub const MAX_STEPS: usize = 1024;

/// A palette of evenly interpolated colors, indexed `0..len()`.
///
/// The default palette is empty; every bucket then samples as white.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GradientPalette {
    colors: Vec<Rgb>,
}

impl GradientPalette {
    /// Build a palette from anchor color strings.
    ///
    /// Fails with [`ThemeError::InvalidColorFormat`] on the first malformed
    /// anchor, and with [`ThemeError::InvalidGradient`] if there are fewer
    /// than two anchors, fewer steps than anchors, or more than
    /// [`MAX_STEPS`] steps.
    pub fn generate<S: AsRef<str>>(
        anchors: &[S],
        steps: usize,
    ) -> Result<Self, ThemeError> {
        let anchors = anchors
            .iter()
            .map(|a| parse_color(a.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_anchors(&anchors, steps)
    }

    /// Build a palette from already resolved anchor colors.
    pub fn from_anchors(
        anchors: &[Rgb],
        steps: usize,
    ) -> Result<Self, ThemeError> {
        if anchors.len() < 2 {
            return Err(ThemeError::InvalidGradient(format!(
                "need at least 2 anchor colors, got {}",
                anchors.len()
            )));
        }
        if steps < anchors.len() {
            return Err(ThemeError::InvalidGradient(format!(
                "{steps} steps cannot hold {} anchor colors",
                anchors.len()
            )));
        }
        if steps > MAX_STEPS {
            return Err(ThemeError::InvalidGradient(format!(
                "{steps} steps exceeds the maximum of {MAX_STEPS}"
            )));
        }

        // One slot is reserved for the final anchor.
        let slots = steps - 1;
        let segments = anchors.len() - 1;
        let per_segment = slots / segments;
        let mut remainder = slots % segments;

        let mut colors = Vec::with_capacity(steps);
        for pair in anchors.windows(2) {
            let (start, end) = (pair[0].channels(), pair[1].channels());
            let mut n = per_segment;
            if remainder > 0 {
                n += 1;
                remainder -= 1;
            }
            let delta: [f64; 3] = std::array::from_fn(|c| {
                (f64::from(end[c]) - f64::from(start[c])) / n as f64
            });
            colors.extend((0..n).map(|j| {
                // `as` truncates toward zero
                let step: [u8; 3] = std::array::from_fn(|c| {
                    (delta[c] * j as f64 + f64::from(start[c])) as u8
                });
                Rgb::from(step)
            }));
        }
        if let Some(&last) = anchors.last() {
            colors.push(last);
        }

        Ok(Self { colors })
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// All palette colors in order.
    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Map `value` in `[lower, upper]` to a palette index.
    ///
    /// The range is cut into `len()` equal buckets; values outside the range
    /// clamp to the first/last bucket and NaN maps to the first.
    #[must_use]
    pub fn bucket(&self, value: f64, lower: f64, upper: f64) -> usize {
        let steps = self.colors.len();
        let gap = (upper - lower) / steps as f64;
        let raw = ((value - lower) / gap).floor();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else if raw >= steps as f64 {
            steps.saturating_sub(1)
        } else {
            raw as usize
        }
    }

    /// Bucket `value` and return the bucket's color with its index.
    #[must_use]
    pub fn sample(&self, value: f64, lower: f64, upper: f64) -> (usize, Rgb) {
        let index = self.bucket(value, lower, upper);
        (index, self.colors.get(index).copied().unwrap_or(Rgb::WHITE))
    }
}
