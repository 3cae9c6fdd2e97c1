//! Physicochemical scores, colored on a continuous gradient.
//!
//! Unlike the other kinds there is no discrete category: each score is
//! bucketed straight into a [`GradientPalette`] color.

use super::{Classifier, ScoreEntry, ScoreKind};
use crate::color::{GradientPalette, Rgb};
use crate::error::ThemeError;
use crate::options::PhysicochemicalColors;

/// Blue → white → red.
pub(crate) const DEFAULT_ANCHORS: [Rgb; 3] = [
    Rgb::new(0, 0, 255),
    Rgb::new(255, 255, 255),
    Rgb::new(255, 0, 0),
];
pub(crate) const DEFAULT_STEPS: usize = 100;
pub(crate) const DEFAULT_LOWER: f64 = -1.0;
pub(crate) const DEFAULT_UPPER: f64 = 1.0;

/// Physicochemical score of one residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicochemicalEntry {
    /// Raw score; `-1` for residues without data.
    pub score: f64,
    /// Palette bucket; `None` for residues without data.
    pub color_index: Option<usize>,
    /// Resolved bucket color.
    pub color: Rgb,
}

impl ScoreEntry for PhysicochemicalEntry {
    type Palette = PhysicochemicalColors;

    const KIND: ScoreKind = ScoreKind::Physicochemical;

    fn no_data() -> Self {
        Self {
            score: -1.0,
            color_index: None,
            color: Rgb::WHITE,
        }
    }

    fn category(&self) -> Option<&'static str> {
        None
    }

    fn color(&self, palette: &PhysicochemicalColors) -> Rgb {
        if self.color_index.is_some() {
            self.color
        } else {
            palette.no_data
        }
    }

    fn no_data_color(palette: &PhysicochemicalColors) -> Rgb {
        palette.no_data
    }
}

/// Buckets scores in `[lower, upper]` into a gradient palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicochemicalClassifier {
    palette: GradientPalette,
    lower: f64,
    upper: f64,
}

impl PhysicochemicalClassifier {
    /// Create a classifier over `[lower, upper]`.
    pub fn new(
        palette: GradientPalette,
        lower: f64,
        upper: f64,
    ) -> Result<Self, ThemeError> {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(ThemeError::InvalidGradient(format!(
                "score range [{lower}, {upper}] is empty"
            )));
        }
        if palette.is_empty() {
            return Err(ThemeError::InvalidGradient(
                "palette has no colors".to_owned(),
            ));
        }
        Ok(Self {
            palette,
            lower,
            upper,
        })
    }

    /// The palette scores are bucketed into.
    #[must_use]
    pub fn palette(&self) -> &GradientPalette {
        &self.palette
    }

    /// Score range `(lower, upper)`.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl Default for PhysicochemicalClassifier {
    fn default() -> Self {
        Self {
            palette: GradientPalette::from_anchors(&DEFAULT_ANCHORS, DEFAULT_STEPS)
                .unwrap_or_default(),
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
        }
    }
}

impl Classifier for PhysicochemicalClassifier {
    type Value = f64;
    type Entry = PhysicochemicalEntry;

    const VALUE_COLUMN: &'static str = "physicochemical";

    fn parse_value(raw: &str) -> Option<f64> {
        raw.trim().parse().ok()
    }

    fn classify(&self, value: &f64) -> PhysicochemicalEntry {
        let (index, color) = self.palette.sample(*value, self.lower, self.upper);
        PhysicochemicalEntry {
            score: *value,
            color_index: Some(index),
            color,
        }
    }
}
