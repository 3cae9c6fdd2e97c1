//! AlphaFold pLDDT confidence bands.

use super::{Classifier, ScoreEntry, ScoreKind};
use crate::color::Rgb;
use crate::options::ConfidenceColors;

/// pLDDT band of a residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceCategory {
    /// No pLDDT value for the residue.
    NoScore,
    /// pLDDT ≤ 50.
    VeryLow,
    /// 50 < pLDDT ≤ 70.
    Low,
    /// 70 < pLDDT ≤ 90.
    Confident,
    /// pLDDT > 90.
    VeryHigh,
}

impl ConfidenceCategory {
    /// Display label, as offered for category filtering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoScore => "No Score",
            Self::VeryLow => "Very low",
            Self::Low => "Low",
            Self::Confident => "Confident",
            Self::VeryHigh => "Very high",
        }
    }

    /// Band for a pLDDT value. Anything not above 50 (including NaN) is
    /// "Very low".
    #[must_use]
    pub fn from_plddt(value: f64) -> Self {
        if value > 50.0 && value <= 70.0 {
            Self::Low
        } else if value > 70.0 && value <= 90.0 {
            Self::Confident
        } else if value > 90.0 {
            Self::VeryHigh
        } else {
            Self::VeryLow
        }
    }
}

/// Confidence score of one residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEntry {
    /// Raw pLDDT value; `-1` for residues without data.
    pub score: f64,
    /// Band the score falls in.
    pub category: ConfidenceCategory,
}

impl ScoreEntry for ConfidenceEntry {
    type Palette = ConfidenceColors;

    const KIND: ScoreKind = ScoreKind::Confidence;

    fn no_data() -> Self {
        Self {
            score: -1.0,
            category: ConfidenceCategory::NoScore,
        }
    }

    fn category(&self) -> Option<&'static str> {
        Some(self.category.as_str())
    }

    fn color(&self, palette: &ConfidenceColors) -> Rgb {
        palette.color(self.category)
    }

    fn no_data_color(palette: &ConfidenceColors) -> Rgb {
        palette.no_score
    }
}

/// Classifies `plddt` values into [`ConfidenceCategory`] bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceClassifier;

impl Classifier for ConfidenceClassifier {
    type Value = f64;
    type Entry = ConfidenceEntry;

    const VALUE_COLUMN: &'static str = "plddt";

    fn parse_value(raw: &str) -> Option<f64> {
        raw.trim().parse().ok()
    }

    fn classify(&self, value: &f64) -> ConfidenceEntry {
        ConfidenceEntry {
            score: *value,
            category: ConfidenceCategory::from_plddt(*value),
        }
    }
}
