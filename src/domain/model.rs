use std::path::PathBuf;

/// One distinct word and the number of times it has been seen.
///
/// Within a [`WordLedger`](crate::core::ledger::WordLedger) the `word` field
/// is unique by exact byte comparison (case-sensitive). The word is owned and
/// never mutated after the entry is created; only the count changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub count: u64,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            count: 1,
        }
    }
}

/// What the driver has been asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Total word count across all inputs.
    Count,
    /// Per-word frequency report, sorted ascending by count then word.
    Frequency,
}

/// Outcome of a full engine run, for the driver's logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_words: u64,
    pub distinct_words: usize,
    pub skipped_inputs: Vec<PathBuf>,
}
