//! Residue identity resolution.
//!
//! Score tables identify residues by `(label_asym_id, label_seq_id)`. The
//! host viewer owns the structural model and knows which stable
//! [`ResidueIndex`] that pair refers to; it exposes that knowledge through
//! [`ResidueResolver`]. [`ResidueMap`] is an owned stand-in for hosts that
//! only have a residue list.

use rustc_hash::FxHashMap;

use crate::score::ResidueIndex;

/// Maps a `(chain id, sequence id)` pair to a residue in the host model.
pub trait ResidueResolver {
    /// Resolve a residue, or `None` if the model has no such residue.
    fn resolve(&self, chain_id: &str, sequence_id: i32) -> Option<ResidueIndex>;
}

impl<F> ResidueResolver for F
where
    F: Fn(&str, i32) -> Option<ResidueIndex>,
{
    fn resolve(&self, chain_id: &str, sequence_id: i32) -> Option<ResidueIndex> {
        self(chain_id, sequence_id)
    }
}

/// Owned residue table assigning indices in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ResidueMap {
    by_chain: FxHashMap<String, FxHashMap<i32, ResidueIndex>>,
    residues: Vec<(String, i32)>,
}

impl ResidueMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from residues in model order. Repeated residues keep
    /// their first index.
    pub fn from_residues<'a, I>(residues: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut map = Self::new();
        for (chain_id, sequence_id) in residues {
            let _ = map.insert(chain_id, sequence_id);
        }
        map
    }

    /// Add a residue, returning its index (existing index if already known).
    pub fn insert(&mut self, chain_id: &str, sequence_id: i32) -> ResidueIndex {
        if let Some(&index) = self
            .by_chain
            .get(chain_id)
            .and_then(|chain| chain.get(&sequence_id))
        {
            return index;
        }
        let index = ResidueIndex(self.residues.len() as u32);
        let _ = self
            .by_chain
            .entry(chain_id.to_owned())
            .or_default()
            .insert(sequence_id, index);
        self.residues.push((chain_id.to_owned(), sequence_id));
        index
    }

    /// Chain and sequence id of a residue.
    #[must_use]
    pub fn residue(&self, index: ResidueIndex) -> Option<(&str, i32)> {
        self.residues
            .get(index.0 as usize)
            .map(|(chain, seq)| (chain.as_str(), *seq))
    }

    /// All residues in index order.
    pub fn iter(&self) -> impl Iterator<Item = (ResidueIndex, &str, i32)> {
        self.residues
            .iter()
            .enumerate()
            .map(|(i, (chain, seq))| (ResidueIndex(i as u32), chain.as_str(), *seq))
    }

    /// Number of residues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Whether the map holds no residues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl ResidueResolver for ResidueMap {
    fn resolve(&self, chain_id: &str, sequence_id: i32) -> Option<ResidueIndex> {
        self.by_chain.get(chain_id)?.get(&sequence_id).copied()
    }
}
