use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::score::{ConfidenceCategory, InteractionCategory};

/// Per-band colors for the confidence theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfidenceColors {
    /// Residues without a pLDDT value.
    pub no_score: Rgb,
    /// pLDDT ≤ 50.
    pub very_low: Rgb,
    /// 50 < pLDDT ≤ 70.
    pub low: Rgb,
    /// 70 < pLDDT ≤ 90.
    pub confident: Rgb,
    /// pLDDT > 90.
    pub very_high: Rgb,
}

impl Default for ConfidenceColors {
    fn default() -> Self {
        Self {
            no_score: Rgb::new(170, 170, 170),
            very_low: Rgb::new(242, 240, 19),
            low: Rgb::new(206, 229, 208),
            confident: Rgb::new(52, 190, 130),
            very_high: Rgb::new(47, 134, 166),
        }
    }
}

impl ConfidenceColors {
    /// Color of a confidence band.
    #[must_use]
    pub fn color(&self, category: ConfidenceCategory) -> Rgb {
        match category {
            ConfidenceCategory::NoScore => self.no_score,
            ConfidenceCategory::VeryLow => self.very_low,
            ConfidenceCategory::Low => self.low,
            ConfidenceCategory::Confident => self.confident,
            ConfidenceCategory::VeryHigh => self.very_high,
        }
    }
}

/// Per-category colors for the interaction theme. `b` doubles as the
/// no-data color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InteractionColors {
    /// Chain A, off the interface.
    pub a: Rgb,
    /// Chain A, on the interface.
    pub ai: Rgb,
    /// Chain B, off the interface.
    pub b: Rgb,
    /// Chain B, on the interface.
    pub bi: Rgb,
}

impl Default for InteractionColors {
    fn default() -> Self {
        Self {
            a: Rgb::new(170, 170, 170),
            ai: Rgb::new(0, 83, 214),
            b: Rgb::new(170, 170, 170),
            bi: Rgb::new(255, 125, 69),
        }
    }
}

impl InteractionColors {
    /// Color of an interaction category.
    #[must_use]
    pub fn color(&self, category: InteractionCategory) -> Rgb {
        match category {
            InteractionCategory::A => self.a,
            InteractionCategory::AI => self.ai,
            InteractionCategory::B => self.b,
            InteractionCategory::BI => self.bi,
        }
    }
}

/// Colors for the physicochemical theme outside the gradient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhysicochemicalColors {
    /// Residues without a physicochemical score.
    pub no_data: Rgb,
}

impl Default for PhysicochemicalColors {
    fn default() -> Self {
        Self {
            no_data: Rgb::WHITE,
        }
    }
}

/// Category color palettes for all score themes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ColorOptions {
    /// Confidence band colors.
    pub confidence: ConfidenceColors,
    /// Interaction category colors.
    pub interaction: InteractionColors,
    /// Physicochemical fallback colors.
    pub physicochemical: PhysicochemicalColors,
}
