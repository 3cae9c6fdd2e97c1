//! Display decisions for a host structure viewer.
//!
//! The host owns rendering and selection; this module only decides what to
//! ask it for: which representation and color theme a display name maps to,
//! which residues a highlight request covers, and which sequence positions
//! a click reports back.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resolver::ResidueMap;
use crate::score::{ResidueIndex, ScoreKind};

/// Representation geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RepresentationKind {
    /// Secondary-structure cartoon.
    #[default]
    Cartoon,
    /// Smooth molecular surface.
    GaussianSurface,
}

impl RepresentationKind {
    /// Host registry name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cartoon => "cartoon",
            Self::GaussianSurface => "gaussian-surface",
        }
    }
}

/// Color theme applied to a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Coloring {
    /// One color per structural unit.
    #[default]
    UnitIndex,
    /// One color per chain.
    ChainId,
    /// A score theme.
    Score(ScoreKind),
}

impl Coloring {
    /// Host theme registry name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::UnitIndex => "unit-index",
            Self::ChainId => "chain-id",
            Self::Score(kind) => kind.name(),
        }
    }
}

/// Representation plus coloring requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RepresentationStyle {
    /// Geometry.
    pub kind: RepresentationKind,
    /// Color theme.
    pub coloring: Coloring,
}

impl fmt::Display for RepresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.kind.name(), self.coloring.name())
    }
}

/// Named display modes offered to the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewerDisplay {
    /// Cartoon colored by confidence band.
    Confidence,
    /// Surface colored by physicochemical gradient.
    Physicochemical,
    /// Cartoon colored by interaction category.
    Interaction,
    /// Plain cartoon colored by chain.
    #[default]
    Cartoon,
}

impl ViewerDisplay {
    /// Display for a name. Unknown names select the plain cartoon.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "confidence" => Self::Confidence,
            "physicochemical" => Self::Physicochemical,
            "interaction" => Self::Interaction,
            _ => Self::Cartoon,
        }
    }

    /// Score kind this display colors by, if any.
    #[must_use]
    pub fn score_kind(self) -> Option<ScoreKind> {
        match self {
            Self::Confidence => Some(ScoreKind::Confidence),
            Self::Physicochemical => Some(ScoreKind::Physicochemical),
            Self::Interaction => Some(ScoreKind::Interaction),
            Self::Cartoon => None,
        }
    }

    /// Representation to request for this display.
    #[must_use]
    pub fn style(self) -> RepresentationStyle {
        let kind = match self {
            Self::Physicochemical => RepresentationKind::GaussianSurface,
            _ => RepresentationKind::Cartoon,
        };
        let coloring =
            self.score_kind().map_or(Coloring::ChainId, Coloring::Score);
        RepresentationStyle { kind, coloring }
    }
}

/// Inclusive `label_seq_id` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRange {
    /// First position.
    pub start: i32,
    /// Last position, inclusive. Ranges with `end < start` match nothing.
    pub end: i32,
}

impl HighlightRange {
    /// Whether `sequence_id` falls in the range.
    #[must_use]
    pub fn contains(&self, sequence_id: i32) -> bool {
        (self.start..=self.end).contains(&sequence_id)
    }
}

/// Residues to highlight, as a union of sequence ranges over every chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightQuery {
    ranges: Vec<HighlightRange>,
}

impl HighlightQuery {
    /// Query over `ranges`. An empty query clears the highlight.
    #[must_use]
    pub fn new(ranges: Vec<HighlightRange>) -> Self {
        Self { ranges }
    }

    /// Whether the query clears the highlight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether any range contains `sequence_id`.
    #[must_use]
    pub fn contains(&self, sequence_id: i32) -> bool {
        self.ranges.iter().any(|r| r.contains(sequence_id))
    }

    /// Residues of `residues` selected by the query, in model order.
    #[must_use]
    pub fn select(&self, residues: &ResidueMap) -> Vec<ResidueIndex> {
        residues
            .iter()
            .filter(|&(_, _, seq)| self.contains(seq))
            .map(|(index, _, _)| index)
            .collect()
    }
}

/// Sequence positions reported when `residue` is clicked. Empty if the
/// residue is unknown.
#[must_use]
pub fn clicked_positions(
    residues: &ResidueMap,
    residue: ResidueIndex,
) -> Vec<i32> {
    residues
        .residue(residue)
        .map(|(_, seq)| seq)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResidueResolver;

    fn two_chains() -> ResidueMap {
        ResidueMap::from_residues(
            (1..=6).map(|seq| ("A", seq)).chain((1..=3).map(|seq| ("B", seq))),
        )
    }

    #[test]
    fn display_names_map_to_styles() {
        let style = |name: &str| ViewerDisplay::from_name(name).style().to_string();
        assert_eq!(style("confidence"), "cartoon + confidence");
        assert_eq!(style("physicochemical"), "gaussian-surface + physicochemical");
        assert_eq!(style("interaction"), "cartoon + interaction");
        assert_eq!(style("cartoon"), "cartoon + chain-id");
        assert_eq!(style("surprise"), "cartoon + chain-id");
    }

    #[test]
    fn bare_load_uses_unit_index() {
        let style = RepresentationStyle::default();
        assert_eq!(style.kind, RepresentationKind::Cartoon);
        assert_eq!(style.coloring, Coloring::UnitIndex);
        assert_eq!(style.to_string(), "cartoon + unit-index");
    }

    #[test]
    fn score_displays_name_their_kind() {
        assert_eq!(
            ViewerDisplay::Interaction.score_kind(),
            Some(ScoreKind::Interaction)
        );
        assert_eq!(ViewerDisplay::Cartoon.score_kind(), None);
    }

    #[test]
    fn ranges_are_inclusive() {
        let query = HighlightQuery::new(vec![
            HighlightRange { start: 2, end: 3 },
            HighlightRange { start: 6, end: 6 },
        ]);
        let hits: Vec<_> = (0..8).filter(|&s| query.contains(s)).collect();
        assert_eq!(hits, [2, 3, 6]);
        assert!(!HighlightRange { start: 5, end: 4 }.contains(5));
    }

    #[test]
    fn select_spans_all_chains() {
        let map = two_chains();
        let query = HighlightQuery::new(vec![HighlightRange { start: 3, end: 4 }]);
        let selected: Vec<_> = query
            .select(&map)
            .into_iter()
            .map(|i| map.residue(i).unwrap())
            .collect();
        assert_eq!(selected, [("A", 3), ("A", 4), ("B", 3)]);
    }

    #[test]
    fn empty_query_selects_nothing() {
        let query = HighlightQuery::default();
        assert!(query.is_empty());
        assert!(query.select(&two_chains()).is_empty());
    }

    #[test]
    fn click_reports_sequence_position() {
        let map = two_chains();
        let b2 = map.resolve("B", 2).unwrap();
        assert_eq!(clicked_positions(&map, b2), [2]);
        assert!(clicked_positions(&map, ResidueIndex(100)).is_empty());
    }

    #[test]
    fn highlight_query_from_json() {
        let query: HighlightQuery =
            serde_json::from_str(r#"[{ "start": 10, "end": 12 }]"#).unwrap();
        assert!(query.contains(11));
        assert!(!query.contains(13));
    }
}
