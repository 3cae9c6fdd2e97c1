use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::GradientPalette;
use crate::error::ThemeError;
use crate::score::{
    PhysicochemicalClassifier, DEFAULT_ANCHORS, DEFAULT_LOWER, DEFAULT_STEPS,
    DEFAULT_UPPER,
};

/// Gradient used to color physicochemical scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Physicochemical Gradient", inline)]
#[serde(default)]
pub struct GradientOptions {
    /// Anchor colors, low score first (`#rgb`, `#rrggbb`, `rgb()`,
    /// `rgba()`).
    #[schemars(title = "Anchor Colors")]
    pub anchors: Vec<String>,
    /// Number of discrete palette colors.
    #[schemars(title = "Steps", range(min = 2, max = 1024), extend("step" = 1))]
    pub steps: usize,
    /// Score mapped to the first anchor.
    #[schemars(title = "Lower Limit")]
    pub lower_limit: f64,
    /// Score mapped to the last anchor.
    #[schemars(title = "Upper Limit")]
    pub upper_limit: f64,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            anchors: DEFAULT_ANCHORS
                .iter()
                .map(|c| format!("rgb({}, {}, {})", c.r, c.g, c.b))
                .collect(),
            steps: DEFAULT_STEPS,
            lower_limit: DEFAULT_LOWER,
            upper_limit: DEFAULT_UPPER,
        }
    }
}

impl GradientOptions {
    /// Build the palette described by these options.
    pub fn palette(&self) -> Result<GradientPalette, ThemeError> {
        GradientPalette::generate(&self.anchors, self.steps)
    }

    /// Build the physicochemical classifier described by these options.
    pub fn classifier(&self) -> Result<PhysicochemicalClassifier, ThemeError> {
        PhysicochemicalClassifier::new(
            self.palette()?,
            self.lower_limit,
            self.upper_limit,
        )
    }

    /// Like [`classifier`](Self::classifier), falling back to the default
    /// blue-white-red gradient when the options are invalid.
    #[must_use]
    pub fn classifier_or_default(&self) -> PhysicochemicalClassifier {
        self.classifier().unwrap_or_else(|e| {
            log::warn!("Ignoring physicochemical gradient options: {e}");
            PhysicochemicalClassifier::default()
        })
    }
}
