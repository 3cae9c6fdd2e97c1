//! Column-oriented metadata tables.
//!
//! Score data arrives as the `seq_label` category of a structure's metadata
//! block: parallel columns of string cells, the way an mmCIF reader hands
//! them over. This module turns those columns into typed
//! [`ResidueRecord`]s for one score kind. Tokenizing the container format is
//! left to the host.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ThemeError;
use crate::resolver::ResidueMap;
use crate::score::{Classifier, ResidueRecord};

/// Category holding per-residue scores.
pub const SEQ_LABEL: &str = "seq_label";
/// Chain id column.
pub const CHAIN_COLUMN: &str = "label_asym_id";
/// Sequence id column.
pub const SEQUENCE_COLUMN: &str = "label_seq_id";

/// Cell as written in a JSON table. Numbers are kept in their textual form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawCell> for String {
    fn from(cell: RawCell) -> Self {
        match cell {
            RawCell::Text(s) => s,
            RawCell::Integer(i) => i.to_string(),
            RawCell::Float(f) => f.to_string(),
        }
    }
}

type RawColumns = FxHashMap<String, Vec<RawCell>>;

/// One metadata category: named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "FxHashMap<String, Vec<String>>")]
pub struct MetadataCategory {
    columns: FxHashMap<String, Vec<String>>,
    row_count: usize,
}

impl MetadataCategory {
    /// Build a category from `(name, cells)` columns.
    pub fn from_columns<I, N, C, S>(columns: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = FxHashMap::default();
        for (name, cells) in columns {
            let _ = map.insert(
                name.into(),
                cells.into_iter().map(Into::into).collect::<Vec<String>>(),
            );
        }
        Self::try_from_map(map)
    }

    fn try_from_map(
        columns: FxHashMap<String, Vec<String>>,
    ) -> Result<Self, ThemeError> {
        let mut lengths = columns.iter().map(|(name, cells)| (name, cells.len()));
        let Some((first_name, row_count)) = lengths.next() else {
            return Ok(Self::default());
        };
        if let Some((name, len)) = lengths.find(|&(_, len)| len != row_count) {
            return Err(ThemeError::TableParse(format!(
                "column '{name}' has {len} rows but '{first_name}' has \
                 {row_count}"
            )));
        }
        Ok(Self { columns, row_count })
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Cells of a column, if present.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Whether the category has a column called `name`.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }
}

impl<'de> Deserialize<'de> for MetadataCategory {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let raw = RawColumns::deserialize(deserializer)?;
        Self::try_from_map(
            raw.into_iter()
                .map(|(name, cells)| {
                    (name, cells.into_iter().map(String::from).collect())
                })
                .collect(),
        )
        .map_err(serde::de::Error::custom)
    }
}

impl From<MetadataCategory> for FxHashMap<String, Vec<String>> {
    fn from(category: MetadataCategory) -> Self {
        category.columns
    }
}

/// Metadata categories of one structure, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataBlock {
    categories: FxHashMap<String, MetadataCategory>,
}

impl MetadataBlock {
    /// Create an empty block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a block from a JSON object of categories, each an object of
    /// equal-length columns.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json)
            .map_err(|e| ThemeError::TableParse(e.to_string()))
    }

    /// Add or replace a category.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        category: MetadataCategory,
    ) {
        let _ = self.categories.insert(name.into(), category);
    }

    /// Look up a category.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&MetadataCategory> {
        self.categories.get(name)
    }
}

/// Rows of `seq_label` carrying `C`'s value column.
///
/// Returns `None` when the kind is not applicable to this block: no
/// `seq_label` category, a missing chain/sequence/value column, or no rows.
/// Rows whose sequence id or value does not parse are skipped.
pub fn records<C: Classifier>(
    block: &MetadataBlock,
) -> Option<Vec<ResidueRecord<C::Value>>> {
    let category = block.category(SEQ_LABEL)?;
    let chains = category.column(CHAIN_COLUMN)?;
    let sequences = category.column(SEQUENCE_COLUMN)?;
    let values = category.column(C::VALUE_COLUMN)?;
    if category.row_count() == 0 {
        return None;
    }

    let mut out = Vec::with_capacity(category.row_count());
    for (row, ((chain, seq), raw)) in
        chains.iter().zip(sequences).zip(values).enumerate()
    {
        let Ok(sequence_id) = seq.trim().parse::<i32>() else {
            log::debug!("{SEQ_LABEL} row {row}: bad {SEQUENCE_COLUMN} '{seq}'");
            continue;
        };
        let Some(value) = C::parse_value(raw) else {
            log::debug!("{SEQ_LABEL} row {row}: bad {} '{raw}'", C::VALUE_COLUMN);
            continue;
        };
        out.push(ResidueRecord::new(chain.trim(), sequence_id, value));
    }
    Some(out)
}

/// Residue map over the `(chain, sequence)` pairs of `seq_label`, in row
/// order. Hosts without a model of their own use this as the resolver.
#[must_use]
pub fn residue_map(block: &MetadataBlock) -> ResidueMap {
    let mut map = ResidueMap::new();
    let Some(category) = block.category(SEQ_LABEL) else {
        return map;
    };
    let (Some(chains), Some(sequences)) = (
        category.column(CHAIN_COLUMN),
        category.column(SEQUENCE_COLUMN),
    ) else {
        return map;
    };
    for (chain, seq) in chains.iter().zip(sequences) {
        if let Ok(sequence_id) = seq.trim().parse::<i32>() {
            let _ = map.insert(chain.trim(), sequence_id);
        }
    }
    map
}
