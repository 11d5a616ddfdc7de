use bitvec::prelude::{BitVec, bitvec};

/// Fixed-size bitset over dense vocabulary indices
///
/// Domains hold word ids, never word order: only membership and size are
/// semantically significant. Provides O(1) membership testing and cheap
/// whole-set copies for snapshotting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBitset {
    bits: BitVec,
}

impl WordBitset {
    /// Create a bitset with no words present
    pub fn new(word_count: usize) -> Self {
        Self {
            bits: bitvec![0; word_count],
        }
    }

    /// Create a bitset containing every word id below `word_count`
    pub fn full(word_count: usize) -> Self {
        Self {
            bits: bitvec![1; word_count],
        }
    }

    /// Insert a word id
    ///
    /// Ids at or beyond the fixed capacity are ignored.
    pub fn insert(&mut self, word: usize) {
        if word < self.bits.len() {
            self.bits.set(word, true);
        }
    }

    /// Remove a word id
    pub fn remove(&mut self, word: usize) {
        if word < self.bits.len() {
            self.bits.set(word, false);
        }
    }

    /// Test word membership
    pub fn contains(&self, word: usize) -> bool {
        self.bits.get(word).as_deref() == Some(&true)
    }

    /// Test if no words are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count words in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fixed capacity the set was created with
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Iterate over the word ids present, in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all word ids as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}
