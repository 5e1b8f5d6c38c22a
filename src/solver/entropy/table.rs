//! Per-word expected information for one turn

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Expected information (bits) of each word considered as a guess this turn
///
/// Entries keep the order the words were evaluated in, which is also the
/// tie-break order for [`InformationTable::best`]. A table is rebuilt every
/// turn and never carried over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InformationTable {
    entries: Vec<(Word, f64)>,
    index: FxHashMap<Word, usize>,
}

impl InformationTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the bits for a word; a word already present keeps its first value
    pub fn insert(&mut self, word: Word, bits: f64) {
        if self.index.contains_key(&word) {
            return;
        }
        self.index.insert(word, self.entries.len());
        self.entries.push((word, bits));
    }

    /// Expected bits for `word`, if it is in the table
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in evaluation order
    #[must_use]
    pub fn entries(&self) -> &[(Word, f64)] {
        &self.entries
    }

    /// All values in evaluation order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, bits)| bits)
    }

    /// Word with the strictly greatest bits; the first word to reach a value
    /// wins every later tie
    #[must_use]
    pub fn best(&self) -> Option<(Word, f64)> {
        let mut entries = self.entries.iter().copied();
        let first = entries.next()?;

        Some(entries.fold(first, |best, entry| {
            if entry.1 > best.1 { entry } else { best }
        }))
    }

    /// The `n` highest entries, descending by bits, ties in evaluation order
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(Word, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl FromIterator<(Word, f64)> for InformationTable {
    fn from_iter<I: IntoIterator<Item = (Word, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, bits) in iter {
            table.insert(word, bits);
        }
        table
    }
}
