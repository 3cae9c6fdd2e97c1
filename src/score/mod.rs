//! Per-residue score indexing.
//!
//! Each score kind (confidence, interaction, physicochemical) supplies a
//! [`Classifier`] that turns a raw table value into a typed [`ScoreEntry`].
//! [`build`] resolves every record to a [`ResidueIndex`] and collects the
//! entries into a [`ScoreIndex`], along with the categories seen in
//! first-seen order. Records whose residue cannot be resolved are skipped.

mod confidence;
mod interaction;
mod physicochemical;

use std::fmt;

pub use confidence::{ConfidenceCategory, ConfidenceClassifier, ConfidenceEntry};
pub use interaction::{
    InteractionCategory, InteractionClassifier, InteractionEntry,
};
pub(crate) use physicochemical::{
    DEFAULT_ANCHORS, DEFAULT_LOWER, DEFAULT_STEPS, DEFAULT_UPPER,
};
pub use physicochemical::{PhysicochemicalClassifier, PhysicochemicalEntry};
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::resolver::ResidueResolver;

/// Stable identifier of a residue within one structural model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueIndex(pub u32);

impl fmt::Display for ResidueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of per-residue score metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord<V> {
    /// `label_asym_id` of the residue's chain.
    pub chain_id: String,
    /// `label_seq_id` of the residue.
    pub sequence_id: i32,
    /// Raw score value for this kind.
    pub value: V,
}

impl<V> ResidueRecord<V> {
    /// Create a record.
    pub fn new(chain_id: impl Into<String>, sequence_id: i32, value: V) -> Self {
        Self {
            chain_id: chain_id.into(),
            sequence_id,
            value,
        }
    }
}

/// The score kinds carried in `seq_label` metadata.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// AlphaFold pLDDT confidence, 0–100.
    Confidence,
    /// Two-bit interaction-interface code.
    Interaction,
    /// Physicochemical score in `[-1, 1]`.
    Physicochemical,
}

impl ScoreKind {
    /// All kinds, in theme registration order.
    pub const ALL: [Self; 3] =
        [Self::Confidence, Self::Physicochemical, Self::Interaction];

    /// Machine name, also used as the theme name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Confidence => "confidence",
            Self::Interaction => "interaction",
            Self::Physicochemical => "physicochemical",
        }
    }

    /// Metadata column holding this kind's raw value.
    #[must_use]
    pub fn value_column(self) -> &'static str {
        match self {
            Self::Confidence => ConfidenceClassifier::VALUE_COLUMN,
            Self::Interaction => InteractionClassifier::VALUE_COLUMN,
            Self::Physicochemical => PhysicochemicalClassifier::VALUE_COLUMN,
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A derived per-residue score, queryable for color.
pub trait ScoreEntry: Clone + fmt::Debug {
    /// Colors a theme uses for this kind.
    type Palette;

    /// Score kind this entry belongs to.
    const KIND: ScoreKind;

    /// Entry reported for residues without data.
    fn no_data() -> Self;

    /// Discrete category label; `None` for kinds without categories.
    fn category(&self) -> Option<&'static str>;

    /// Color of this entry.
    fn color(&self, palette: &Self::Palette) -> Rgb;

    /// Color for residues without data, or filtered out by category.
    fn no_data_color(palette: &Self::Palette) -> Rgb;
}

/// Turns a raw metadata value into a [`ScoreEntry`].
pub trait Classifier {
    /// Raw value type read from the table.
    type Value;
    /// Entry type produced.
    type Entry: ScoreEntry;

    /// Name of the `seq_label` column holding the raw value.
    const VALUE_COLUMN: &'static str;

    /// Parse a raw table cell; `None` skips the row.
    fn parse_value(raw: &str) -> Option<Self::Value>;

    /// Classify one value.
    fn classify(&self, value: &Self::Value) -> Self::Entry;
}

/// Lookup from residue to derived score, plus observed categories.
#[derive(Debug, Clone)]
pub struct ScoreIndex<E> {
    entries: FxHashMap<ResidueIndex, E>,
    categories: Vec<&'static str>,
    no_data: E,
}

impl<E: ScoreEntry> Default for ScoreIndex<E> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
            categories: Vec::new(),
            no_data: E::no_data(),
        }
    }
}

impl<E: ScoreEntry> ScoreIndex<E> {
    /// Insert an entry, recording its category if new. Replaces any
    /// previous entry for the residue.
    pub fn insert(&mut self, residue: ResidueIndex, entry: E) {
        if let Some(category) = entry.category() {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }
        let _ = self.entries.insert(residue, entry);
    }

    /// Stored entry for a residue, or the no-data entry.
    #[must_use]
    pub fn lookup(&self, residue: ResidueIndex) -> &E {
        self.entries.get(&residue).unwrap_or(&self.no_data)
    }

    /// Stored entry for a residue, if any.
    #[must_use]
    pub fn get(&self, residue: ResidueIndex) -> Option<&E> {
        self.entries.get(&residue)
    }

    /// Categories in the order they were first seen.
    #[must_use]
    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    /// Number of residues with data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no residue has data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Residues with data, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ResidueIndex, &E)> {
        self.entries.iter().map(|(&r, e)| (r, e))
    }
}

/// Index `records` by resolved residue.
///
/// Rows whose `(chain_id, sequence_id)` the resolver does not know are
/// skipped; later rows for the same residue overwrite earlier ones.
pub fn build<C, R>(
    records: &[ResidueRecord<C::Value>],
    classifier: &C,
    resolver: &R,
) -> ScoreIndex<C::Entry>
where
    C: Classifier,
    R: ResidueResolver + ?Sized,
{
    let mut index = ScoreIndex::default();
    let mut unresolved = 0usize;
    for record in records {
        let Some(residue) =
            resolver.resolve(&record.chain_id, record.sequence_id)
        else {
            unresolved += 1;
            continue;
        };
        index.insert(residue, classifier.classify(&record.value));
    }
    log::debug!(
        "{} index: {} residues from {} rows ({unresolved} unresolved)",
        C::VALUE_COLUMN,
        index.len(),
        records.len(),
    );
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResidueMap;

    fn chain_a() -> ResidueMap {
        ResidueMap::from_residues((1..=10).map(|seq| ("A", seq)))
    }

    #[test]
    fn confidence_scenario() {
        let map = chain_a();
        let records = [
            ResidueRecord::new("A", 5, 95.0),
            ResidueRecord::new("A", 6, 40.0),
        ];
        let index = build(&records, &ConfidenceClassifier, &map);

        assert_eq!(index.categories(), ["Very high", "Very low"]);

        let five = index.lookup(map.resolve("A", 5).unwrap());
        assert_eq!(five.score, 95.0);
        assert_eq!(five.category, ConfidenceCategory::VeryHigh);

        let six = index.lookup(map.resolve("A", 6).unwrap());
        assert_eq!(six.score, 40.0);
        assert_eq!(six.category, ConfidenceCategory::VeryLow);

        let seven = index.lookup(map.resolve("A", 7).unwrap());
        assert_eq!(seven, &ConfidenceEntry::no_data());
    }

    #[test]
    fn one_entry_per_resolvable_record() {
        let map = chain_a();
        let records: Vec<_> = (1..=10)
            .map(|seq| ResidueRecord::new("A", seq, f64::from(seq) * 10.0))
            .collect();
        let index = build(&records, &ConfidenceClassifier, &map);
        assert_eq!(index.len(), 10);
    }

    #[test]
    fn unresolved_rows_are_skipped() {
        let map = chain_a();
        let records = [
            ResidueRecord::new("A", 1, 80.0),
            ResidueRecord::new("Z", 1, 99.0),
            ResidueRecord::new("A", 99, 10.0),
            ResidueRecord::new("A", 2, 60.0),
        ];
        let index = build(&records, &ConfidenceClassifier, &map);
        assert_eq!(index.len(), 2);
        // Skipped rows contribute no categories either.
        assert_eq!(index.categories(), ["Confident", "Low"]);
    }

    #[test]
    fn duplicate_residue_last_write_wins() {
        let map = chain_a();
        let records = [
            ResidueRecord::new("A", 3, 20.0),
            ResidueRecord::new("A", 3, 99.0),
        ];
        let index = build(&records, &ConfidenceClassifier, &map);
        assert_eq!(index.len(), 1);
        let entry = index.lookup(map.resolve("A", 3).unwrap());
        assert_eq!(entry.category, ConfidenceCategory::VeryHigh);
        // Both categories were observed while building.
        assert_eq!(index.categories(), ["Very low", "Very high"]);
    }

    #[test]
    fn empty_index_returns_sentinels() {
        let confidence = ScoreIndex::<ConfidenceEntry>::default();
        assert!(confidence.is_empty());
        let entry = confidence.lookup(ResidueIndex(0));
        assert_eq!(entry.score, -1.0);
        assert_eq!(entry.category.as_str(), "No Score");

        let interaction = ScoreIndex::<InteractionEntry>::default();
        assert_eq!(interaction.lookup(ResidueIndex(3)).category.as_str(), "B");

        let physico = ScoreIndex::<PhysicochemicalEntry>::default();
        assert_eq!(
            physico.lookup(ResidueIndex(3)).color.to_string(),
            "255,255,255"
        );
    }

    #[test]
    fn build_is_deterministic() {
        let map = chain_a();
        let records: Vec<_> = (1..=10)
            .map(|seq| ResidueRecord::new("A", seq, f64::from(seq * 9)))
            .collect();
        let a = build(&records, &ConfidenceClassifier, &map);
        let b = build(&records, &ConfidenceClassifier, &map);
        assert_eq!(a.categories(), b.categories());
        for (residue, entry) in a.iter() {
            assert_eq!(b.get(residue), Some(entry));
        }
    }

    #[test]
    fn closure_resolver_builds() {
        let records = [ResidueRecord::new("B", 2, "01".to_owned())];
        let index = build(&records, &InteractionClassifier, &|_: &str, seq: i32| {
            Some(ResidueIndex(seq as u32 * 100))
        });
        assert_eq!(
            index.lookup(ResidueIndex(200)).category,
            InteractionCategory::AI
        );
    }

    #[test]
    fn kind_columns() {
        assert_eq!(ScoreKind::Confidence.value_column(), "plddt");
        assert_eq!(ScoreKind::Interaction.value_column(), "label_interface");
        assert_eq!(
            ScoreKind::Physicochemical.value_column(),
            "physicochemical"
        );
        assert_eq!(ScoreKind::Interaction.to_string(), "interaction");
    }
}
