use crate::algorithm::bitset::WordBitset;

/// Per-slot candidate word sets, the solver's working memory
///
/// Every slot starts with the full vocabulary and only ever shrinks under
/// consistency enforcement; the explicit snapshot/restore pair is the sole
/// way domains grow back. Implements `PartialEq` so rollback can be
/// asserted bit-for-bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<WordBitset>,
    empty: WordBitset,
}

/// Deep copy of a `DomainStore`, taken before a tentative branch
///
/// A snapshot shares no state with the live store: mutating one never
/// affects the other. Restoring consumes the snapshot.
#[derive(Clone, Debug)]
pub struct DomainSnapshot {
    domains: Vec<WordBitset>,
}

impl DomainStore {
    /// Initialize every slot's domain to the full vocabulary
    pub fn new(slot_count: usize, word_count: usize) -> Self {
        Self {
            domains: vec![WordBitset::full(word_count); slot_count],
            empty: WordBitset::new(0),
        }
    }

    /// Number of slots tracked by the store
    pub fn slot_count(&self) -> usize {
        self.domains.len()
    }

    /// The candidate set for a slot
    ///
    /// Unknown slot ids read as an empty domain.
    pub fn get(&self, slot: usize) -> &WordBitset {
        self.domains.get(slot).unwrap_or(&self.empty)
    }

    /// Replace the candidate set for a slot
    pub fn set(&mut self, slot: usize, words: WordBitset) {
        if let Some(domain) = self.domains.get_mut(slot) {
            *domain = words;
        }
    }

    /// Remove a single word from a slot's domain
    pub fn remove(&mut self, slot: usize, word: usize) {
        if let Some(domain) = self.domains.get_mut(slot) {
            domain.remove(word);
        }
    }

    /// Collapse a slot's domain to a single word
    pub fn restrict_to(&mut self, slot: usize, word: usize) {
        if let Some(domain) = self.domains.get_mut(slot) {
            let mut single = WordBitset::new(domain.capacity());
            single.insert(word);
            *domain = single;
        }
    }

    /// Number of candidates remaining for a slot
    pub fn size(&self, slot: usize) -> usize {
        self.get(slot).count()
    }

    /// Whether a slot has no candidates left
    pub fn is_empty(&self, slot: usize) -> bool {
        self.get(slot).is_empty()
    }

    /// Deep-copy the whole store
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Atomically replace the store with a previously taken snapshot
    pub fn restore(&mut self, snapshot: DomainSnapshot) {
        self.domains = snapshot.domains;
    }
}
