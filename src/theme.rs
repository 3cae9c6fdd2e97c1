//! Residue color themes over a [`ScoreIndex`].
//!
//! A theme answers "what color is this residue?" for one score kind. In
//! [`ColorMode::Score`] every residue gets its entry's color; in
//! [`ColorMode::Category`] only residues in the selected category keep
//! theirs and everything else falls back to the kind's no-data color. Kinds
//! without categories (physicochemical) ignore the filter.
//!
//! Themes hold no state of their own: they borrow the structure's index and
//! the configured palette, so building one per render is cheap.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::score::{ResidueIndex, ScoreEntry, ScoreIndex, ScoreKind};

/// Theme group shown in the host's theme picker.
pub const THEME_CATEGORY: &str = "Validation";

/// How a score theme colors residues.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "name", content = "params", rename_all = "snake_case")]
pub enum ColorMode {
    /// Color every residue by its score.
    #[default]
    Score,
    /// Color only residues whose category is `kind`.
    Category {
        /// Selected category label, e.g. `"Very high"`.
        kind: String,
    },
}

/// Static description of a score theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeDescriptor {
    /// Registry name.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Picker group.
    pub category: &'static str,
    /// One-line description.
    pub description: &'static str,
}

impl ThemeDescriptor {
    /// Descriptor of the theme for `kind`.
    #[must_use]
    pub fn of(kind: ScoreKind) -> Self {
        let (label, description) = match kind {
            ScoreKind::Confidence => (
                "Confidence",
                "Assigns residue colors according to the AF Confidence score",
            ),
            ScoreKind::Interaction => (
                "Interaction",
                "Protein Interaction Interface Structural Alignment",
            ),
            ScoreKind::Physicochemical => (
                "Physicochemical",
                "Assigns residue colors according to the Physicochemical score",
            ),
        };
        Self {
            name: kind.name(),
            label,
            category: THEME_CATEGORY,
            description,
        }
    }
}

/// Modes a theme can offer for a structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeParams {
    /// Selectable mode names (`"score"`, and `"category"` when available).
    pub modes: Vec<&'static str>,
    /// Category choices, in first-seen order.
    pub category_options: Vec<String>,
    /// Preselected category.
    pub default_category: Option<String>,
}

impl ThemeParams {
    /// Parameters for a structure whose index observed `categories`.
    /// Category mode is only offered when there is something to pick.
    #[must_use]
    pub fn for_categories(categories: &[&str]) -> Self {
        if categories.is_empty() {
            return Self {
                modes: vec!["score"],
                category_options: Vec::new(),
                default_category: None,
            };
        }
        Self {
            modes: vec!["score", "category"],
            category_options: categories.iter().map(|&c| c.to_owned()).collect(),
            default_category: categories.first().map(|&c| c.to_owned()),
        }
    }
}

/// Per-residue color source, object safe so hosts can hold any kind.
pub trait ColorTheme {
    /// Static theme description.
    fn descriptor(&self) -> ThemeDescriptor;

    /// Whether the structure carries data for this theme.
    fn is_applicable(&self) -> bool;

    /// Color of one residue.
    fn color(&self, residue: ResidueIndex) -> Rgb;
}

/// A [`ColorTheme`] over one score kind's index.
pub struct ScoreTheme<'a, E: ScoreEntry> {
    index: Option<&'a ScoreIndex<E>>,
    palette: &'a E::Palette,
    mode: ColorMode,
}

impl<'a, E: ScoreEntry> ScoreTheme<'a, E> {
    /// Create a theme. With no index every residue gets the no-data color.
    pub fn new(
        index: Option<&'a ScoreIndex<E>>,
        palette: &'a E::Palette,
        mode: ColorMode,
    ) -> Self {
        Self {
            index,
            palette,
            mode,
        }
    }

    /// Active coloring mode.
    #[must_use]
    pub fn mode(&self) -> &ColorMode {
        &self.mode
    }
}

impl<E: ScoreEntry> ColorTheme for ScoreTheme<'_, E> {
    fn descriptor(&self) -> ThemeDescriptor {
        ThemeDescriptor::of(E::KIND)
    }

    fn is_applicable(&self) -> bool {
        self.index.is_some()
    }

    fn color(&self, residue: ResidueIndex) -> Rgb {
        let Some(index) = self.index else {
            return E::no_data_color(self.palette);
        };
        let entry = index.lookup(residue);
        if let ColorMode::Category { kind } = &self.mode {
            if entry.category().is_some_and(|c| c != kind.as_str()) {
                return E::no_data_color(self.palette);
            }
        }
        entry.color(self.palette)
    }
}

/// Normalized colors for `residues`, in order, ready for a GPU color buffer.
pub fn per_residue_colors<I>(theme: &dyn ColorTheme, residues: I) -> Vec<[f32; 3]>
where
    I: IntoIterator<Item = ResidueIndex>,
{
    residues
        .into_iter()
        .map(|r| theme.color(r).to_f32())
        .collect()
}
