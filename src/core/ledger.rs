use crate::domain::model::WordEntry;
use crate::domain::ports::WordSink;
use crate::utils::error::Result;

/// The collection of all distinct words seen so far and their counts.
///
/// The ledger owns every entry exclusively. Entries are only ever added or
/// incremented, never removed; iteration order is unspecified. New entries
/// currently land at the end, but callers must not rely on placement; the
/// sorter produces ordering on demand.
#[derive(Debug, Clone, Default)]
pub struct WordLedger {
    entries: Vec<WordEntry>,
}

impl WordLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`: increments the existing entry, or
    /// adds a fresh entry with count 1 if the word has not been seen.
    /// Lookup is exact byte comparison, case-sensitive.
    pub fn insert_or_increment(&mut self, word: &str) {
        match self.entries.iter_mut().find(|e| e.word == word) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(WordEntry::new(word)),
        }
    }

    pub fn find(&self, word: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.word == word)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visits every entry exactly once.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [WordEntry] {
        &mut self.entries
    }
}

impl WordSink for WordLedger {
    fn accept(&mut self, word: &str) -> Result<()> {
        self.insert_or_increment(word);
        Ok(())
    }
}
