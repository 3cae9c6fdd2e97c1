//! Theme color and gradient options with TOML preset support.
//!
//! Category colors, the physicochemical gradient and the initial display
//! are consolidated here. Options serialize to/from TOML so hosts can ship
//! color presets as plain files.

mod colors;
mod display;
mod gradient;

use std::path::Path;

pub use colors::{
    ColorOptions, ConfidenceColors, InteractionColors, PhysicochemicalColors,
};
pub use display::DisplayOptions;
pub use gradient::GradientOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::GradientPalette;
use crate::error::ThemeError;
use crate::score::PhysicochemicalClassifier;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gradient]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial display and color mode.
    pub display: DisplayOptions,
    /// Category and no-data colors.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Physicochemical gradient.
    pub gradient: GradientOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults; a
    /// gradient that cannot build a palette is rejected.
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| ThemeError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the configured gradient yields a usable classifier.
    pub fn validate(&self) -> Result<(), ThemeError> {
        self.gradient.classifier().map(|_| ())
    }

    /// Load a color preset from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let options = Self::from_toml(&std::fs::read_to_string(path)?)?;
        log::info!("Loaded color preset {}", path.display());
        Ok(options)
    }

    /// Save these options as a TOML color preset. Invalid gradients are
    /// refused so every saved preset loads again.
    pub fn save(&self, path: &Path) -> Result<(), ThemeError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| ThemeError::OptionsParse(e.to_string()))?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved color preset {}", path.display());
        Ok(())
    }

    /// Preset names (TOML file stems) in `dir`, sorted.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .collect();
        names.sort_unstable();
        names
    }

    /// Palette built from the configured gradient anchors.
    pub fn physicochemical_palette(
        &self,
    ) -> Result<GradientPalette, ThemeError> {
        self.gradient.palette()
    }

    /// Physicochemical classifier for the configured gradient, or the
    /// default one if the gradient is invalid.
    #[must_use]
    pub fn physicochemical_classifier(&self) -> PhysicochemicalClassifier {
        self.gradient.classifier_or_default()
    }
}
