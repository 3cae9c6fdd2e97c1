//! Per-structure score indices.
//!
//! A [`ScoreStore`] owns one [`StructureScores`] per loaded structure. The
//! host attaches scores when a structure is loaded and detaches them when it
//! is unloaded; themes borrow the stored indices in between.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::options::{ColorOptions, Options};
use crate::resolver::ResidueResolver;
use crate::score::{
    self, Classifier, ConfidenceClassifier, ConfidenceEntry,
    InteractionClassifier, InteractionEntry, PhysicochemicalClassifier,
    PhysicochemicalEntry, ScoreIndex, ScoreKind,
};
use crate::table::{self, MetadataBlock};
use crate::theme::{ColorMode, ColorTheme, ScoreTheme, ThemeParams};

/// Host-assigned structure identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructureId(pub u32);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Score indices of one structure. A kind is `None` when the structure's
/// metadata does not carry it.
#[derive(Debug, Clone, Default)]
pub struct StructureScores {
    /// pLDDT confidence.
    pub confidence: Option<ScoreIndex<ConfidenceEntry>>,
    /// Interaction-interface categories.
    pub interaction: Option<ScoreIndex<InteractionEntry>>,
    /// Physicochemical gradient colors.
    pub physicochemical: Option<ScoreIndex<PhysicochemicalEntry>>,
}

fn index_kind<C, R>(
    block: &MetadataBlock,
    classifier: &C,
    resolver: &R,
) -> Option<ScoreIndex<C::Entry>>
where
    C: Classifier,
    R: ResidueResolver + ?Sized,
{
    let records = table::records::<C>(block)?;
    Some(score::build(&records, classifier, resolver))
}

fn theme_for<'a>(
    scores: Option<&'a StructureScores>,
    kind: ScoreKind,
    mode: ColorMode,
    colors: &'a ColorOptions,
) -> Box<dyn ColorTheme + 'a> {
    match kind {
        ScoreKind::Confidence => Box::new(ScoreTheme::new(
            scores.and_then(|s| s.confidence.as_ref()),
            &colors.confidence,
            mode,
        )),
        ScoreKind::Interaction => Box::new(ScoreTheme::new(
            scores.and_then(|s| s.interaction.as_ref()),
            &colors.interaction,
            mode,
        )),
        ScoreKind::Physicochemical => Box::new(ScoreTheme::new(
            scores.and_then(|s| s.physicochemical.as_ref()),
            &colors.physicochemical,
            mode,
        )),
    }
}

impl StructureScores {
    /// Build every index the metadata block supports.
    pub fn from_metadata<R: ResidueResolver + ?Sized>(
        block: &MetadataBlock,
        resolver: &R,
        physicochemical: &PhysicochemicalClassifier,
    ) -> Self {
        Self {
            confidence: index_kind(block, &ConfidenceClassifier, resolver),
            interaction: index_kind(block, &InteractionClassifier, resolver),
            physicochemical: index_kind(block, physicochemical, resolver),
        }
    }

    /// Whether the structure carries scores of `kind`.
    #[must_use]
    pub fn is_applicable(&self, kind: ScoreKind) -> bool {
        match kind {
            ScoreKind::Confidence => self.confidence.is_some(),
            ScoreKind::Interaction => self.interaction.is_some(),
            ScoreKind::Physicochemical => self.physicochemical.is_some(),
        }
    }

    /// Kinds the structure carries, in theme registration order.
    pub fn applicable_kinds(&self) -> impl Iterator<Item = ScoreKind> + '_ {
        ScoreKind::ALL
            .into_iter()
            .filter(|&kind| self.is_applicable(kind))
    }

    /// Categories observed for `kind`; empty when not applicable.
    #[must_use]
    pub fn categories(&self, kind: ScoreKind) -> &[&'static str] {
        match kind {
            ScoreKind::Confidence => self
                .confidence
                .as_ref()
                .map(ScoreIndex::categories)
                .unwrap_or_default(),
            ScoreKind::Interaction => self
                .interaction
                .as_ref()
                .map(ScoreIndex::categories)
                .unwrap_or_default(),
            ScoreKind::Physicochemical => self
                .physicochemical
                .as_ref()
                .map(ScoreIndex::categories)
                .unwrap_or_default(),
        }
    }

    /// Theme coloring this structure by `kind`.
    #[must_use]
    pub fn theme<'a>(
        &'a self,
        kind: ScoreKind,
        mode: ColorMode,
        colors: &'a ColorOptions,
    ) -> Box<dyn ColorTheme + 'a> {
        theme_for(Some(self), kind, mode, colors)
    }

    /// Modes and category choices the `kind` theme offers.
    #[must_use]
    pub fn theme_params(&self, kind: ScoreKind) -> ThemeParams {
        ThemeParams::for_categories(self.categories(kind))
    }
}

/// Score indices of every loaded structure.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    structures: FxHashMap<StructureId, StructureScores>,
    physicochemical: PhysicochemicalClassifier,
}

impl ScoreStore {
    /// Create an empty store using the default physicochemical gradient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store using the gradient configured in `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            structures: FxHashMap::default(),
            physicochemical: options.physicochemical_classifier(),
        }
    }

    /// Classifier used for physicochemical scores.
    #[must_use]
    pub fn physicochemical(&self) -> &PhysicochemicalClassifier {
        &self.physicochemical
    }

    /// Build and store the indices for a newly loaded structure, replacing
    /// any previous scores for `id`.
    pub fn attach<R: ResidueResolver + ?Sized>(
        &mut self,
        id: StructureId,
        block: &MetadataBlock,
        resolver: &R,
    ) -> &StructureScores {
        let scores = StructureScores::from_metadata(
            block,
            resolver,
            &self.physicochemical,
        );
        let kinds: Vec<_> =
            scores.applicable_kinds().map(ScoreKind::name).collect();
        log::info!(
            "Attached scores to structure {id}: [{}]",
            kinds.join(", ")
        );
        let slot = self.structures.entry(id).or_default();
        *slot = scores;
        slot
    }

    /// Store prebuilt scores, returning the ones they replace.
    pub fn insert(
        &mut self,
        id: StructureId,
        scores: StructureScores,
    ) -> Option<StructureScores> {
        self.structures.insert(id, scores)
    }

    /// Drop the scores of an unloaded structure.
    pub fn detach(&mut self, id: StructureId) -> Option<StructureScores> {
        let removed = self.structures.remove(&id);
        if removed.is_some() {
            log::info!("Detached scores from structure {id}");
        }
        removed
    }

    /// Scores of a structure.
    #[must_use]
    pub fn get(&self, id: StructureId) -> Option<&StructureScores> {
        self.structures.get(&id)
    }

    /// Theme coloring structure `id` by `kind`. Unknown structures get a
    /// uniform no-data theme.
    #[must_use]
    pub fn theme<'a>(
        &'a self,
        id: StructureId,
        kind: ScoreKind,
        mode: ColorMode,
        colors: &'a ColorOptions,
    ) -> Box<dyn ColorTheme + 'a> {
        theme_for(self.get(id), kind, mode, colors)
    }

    /// Modes and category choices the `kind` theme offers for `id`.
    #[must_use]
    pub fn theme_params(
        &self,
        id: StructureId,
        kind: ScoreKind,
    ) -> ThemeParams {
        self.get(id).map_or_else(
            || ThemeParams::for_categories(&[]),
            |scores| scores.theme_params(kind),
        )
    }

    /// Number of structures with attached scores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Whether no structure has attached scores.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::resolver::ResidueMap;

    const BLOCK: &str = r#"{ "seq_label": {
        "label_asym_id": ["A", "A", "A", "B"],
        "label_seq_id": ["1", "2", "3", "1"],
        "plddt": ["95", "40", "80", "55"],
        "label_interface": ["01", "00", "11", "10"]
    } }"#;

    fn setup() -> (MetadataBlock, ResidueMap) {
        let block = MetadataBlock::from_json(BLOCK).unwrap();
        let map = table::residue_map(&block);
        (block, map)
    }

    #[test]
    fn attach_builds_applicable_kinds_only() {
        let (block, map) = setup();
        let mut store = ScoreStore::new();
        let scores = store.attach(StructureId(1), &block, &map);

        assert!(scores.is_applicable(ScoreKind::Confidence));
        assert!(scores.is_applicable(ScoreKind::Interaction));
        assert!(!scores.is_applicable(ScoreKind::Physicochemical));
        assert_eq!(
            scores.applicable_kinds().collect::<Vec<_>>(),
            [ScoreKind::Confidence, ScoreKind::Interaction]
        );
        assert_eq!(
            scores.categories(ScoreKind::Confidence),
            ["Very high", "Very low", "Confident", "Low"]
        );
        assert_eq!(
            scores.categories(ScoreKind::Interaction),
            ["AI", "A", "BI", "B"]
        );
        assert!(scores.categories(ScoreKind::Physicochemical).is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn detach_discards_scores() {
        let (block, map) = setup();
        let mut store = ScoreStore::new();
        let _ = store.attach(StructureId(7), &block, &map);
        assert!(store.get(StructureId(7)).is_some());

        assert!(store.detach(StructureId(7)).is_some());
        assert!(store.get(StructureId(7)).is_none());
        assert!(store.detach(StructureId(7)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn reattach_replaces_scores() {
        let (block, map) = setup();
        let mut store = ScoreStore::new();
        let _ = store.attach(StructureId(1), &block, &map);
        let _ = store.attach(StructureId(1), &MetadataBlock::new(), &map);
        let scores = store.get(StructureId(1)).unwrap();
        assert_eq!(scores.applicable_kinds().count(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn themes_color_attached_structures() {
        let (block, map) = setup();
        let mut store = ScoreStore::new();
        let _ = store.attach(StructureId(1), &block, &map);
        let colors = ColorOptions::default();

        let theme = store.theme(
            StructureId(1),
            ScoreKind::Interaction,
            ColorMode::Score,
            &colors,
        );
        assert!(theme.is_applicable());
        let a1 = map.resolve("A", 1).unwrap();
        assert_eq!(theme.color(a1), colors.interaction.ai);
        assert_eq!(theme.descriptor().name, "interaction");
    }

    #[test]
    fn unknown_structure_gets_uniform_no_data() {
        let store = ScoreStore::new();
        let colors = ColorOptions::default();
        let theme = store.theme(
            StructureId(99),
            ScoreKind::Physicochemical,
            ColorMode::Score,
            &colors,
        );
        assert!(!theme.is_applicable());
        assert_eq!(theme.color(score::ResidueIndex(0)), Rgb::WHITE);

        let params = store.theme_params(StructureId(99), ScoreKind::Confidence);
        assert_eq!(params.modes, ["score"]);
    }

    #[test]
    fn theme_params_follow_categories() {
        let (block, map) = setup();
        let mut store = ScoreStore::new();
        let _ = store.attach(StructureId(1), &block, &map);
        let params = store.theme_params(StructureId(1), ScoreKind::Interaction);
        assert_eq!(params.modes, ["score", "category"]);
        assert_eq!(params.default_category.as_deref(), Some("AI"));
    }

    #[test]
    fn configured_gradient_is_used() {
        let options: Options = toml::from_str(
            r##"
[gradient]
anchors = ["#000000", "#ffffff"]
steps = 3
lower_limit = 0.0
upper_limit = 3.0
"##,
        )
        .unwrap();
        let block = MetadataBlock::from_json(
            r#"{ "seq_label": {
                "label_asym_id": ["A", "A"],
                "label_seq_id": ["1", "2"],
                "physicochemical": ["0.5", "2.9"]
            } }"#,
        )
        .unwrap();
        let map = table::residue_map(&block);

        let mut store = ScoreStore::from_options(&options);
        assert_eq!(store.physicochemical().palette().len(), 3);
        let scores = store.attach(StructureId(2), &block, &map);
        let index = scores.physicochemical.as_ref().unwrap();
        let first = index.lookup(map.resolve("A", 1).unwrap());
        let second = index.lookup(map.resolve("A", 2).unwrap());
        assert_eq!(first.color_index, Some(0));
        assert_eq!(first.color, Rgb::new(0, 0, 0));
        assert_eq!(second.color_index, Some(2));
        assert_eq!(second.color, Rgb::WHITE);
    }
}
