//! Interaction-interface flags.
//!
//! `label_interface` holds a two-character code per residue: the first
//! character picks the partner chain (A/B), the second whether the residue
//! sits on the interface.

use super::{Classifier, ScoreEntry, ScoreKind};
use crate::color::Rgb;
use crate::options::InteractionColors;

/// Chain side and interface membership of a residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum InteractionCategory {
    /// Chain A, not on the interface (`00`).
    A,
    /// Chain A, on the interface (`01`).
    AI,
    /// Chain B, not on the interface (`10`).
    B,
    /// Chain B, on the interface (`11` and any unknown code).
    BI,
}

impl InteractionCategory {
    /// Display label, as offered for category filtering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AI => "AI",
            Self::B => "B",
            Self::BI => "BI",
        }
    }

    /// Category for a `label_interface` code.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "00" => Self::A,
            "01" => Self::AI,
            "10" => Self::B,
            _ => Self::BI,
        }
    }
}

/// Interaction flag of one residue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEntry {
    /// Raw code; `None` for residues without data.
    pub code: Option<String>,
    /// Category the code maps to.
    pub category: InteractionCategory,
}

impl ScoreEntry for InteractionEntry {
    type Palette = InteractionColors;

    const KIND: ScoreKind = ScoreKind::Interaction;

    fn no_data() -> Self {
        Self {
            code: None,
            category: InteractionCategory::B,
        }
    }

    fn category(&self) -> Option<&'static str> {
        Some(self.category.as_str())
    }

    fn color(&self, palette: &InteractionColors) -> Rgb {
        palette.color(self.category)
    }

    fn no_data_color(palette: &InteractionColors) -> Rgb {
        palette.b
    }
}

/// Classifies `label_interface` codes into [`InteractionCategory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionClassifier;

impl Classifier for InteractionClassifier {
    type Value = String;
    type Entry = InteractionEntry;

    const VALUE_COLUMN: &'static str = "label_interface";

    fn parse_value(raw: &str) -> Option<String> {
        Some(raw.trim().to_owned())
    }

    fn classify(&self, value: &String) -> InteractionEntry {
        InteractionEntry {
            code: Some(value.clone()),
            category: InteractionCategory::from_code(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(InteractionCategory::from_code("00").as_str(), "A");
        assert_eq!(InteractionCategory::from_code("01").as_str(), "AI");
        assert_eq!(InteractionCategory::from_code("10").as_str(), "B");
        assert_eq!(InteractionCategory::from_code("11").as_str(), "BI");
    }

    #[test]
    fn unknown_codes_are_bi() {
        for code in ["02", "20", "xx", "", "?", "001"] {
            assert_eq!(InteractionCategory::from_code(code), InteractionCategory::BI);
        }
    }

    #[test]
    fn entry_keeps_raw_code() {
        let entry = InteractionClassifier.classify(&"01".to_owned());
        assert_eq!(entry.code.as_deref(), Some("01"));
        assert_eq!(entry.category, InteractionCategory::AI);
    }

    #[test]
    fn colors_follow_palette() {
        let palette = InteractionColors::default();
        let bi = InteractionClassifier.classify(&"11".to_owned());
        assert_eq!(bi.color(&palette), Rgb::new(255, 125, 69));
        assert_eq!(
            InteractionEntry::no_data_color(&palette),
            Rgb::new(170, 170, 170)
        );
    }
}
