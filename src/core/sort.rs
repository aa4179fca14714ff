use crate::core::ledger::WordLedger;
use crate::domain::model::WordEntry;

/// Default report order: ascending count, ties broken by bytewise word order.
/// Strict weak ordering; an entry is never less than an equal entry.
pub fn wordcount_less(a: &WordEntry, b: &WordEntry) -> bool {
    if a.count < b.count {
        return true;
    }
    a.count == b.count && a.word < b.word
}

/// Reorders the ledger in place so entries compare non-decreasing under
/// `less`.
///
/// Bubble sort on purpose: adjacent-pair scans with a shrinking tail,
/// stopping early once a full pass swaps nothing. Teaching-grade, O(n²).
pub fn sort_entries<F>(ledger: &mut WordLedger, less: F)
where
    F: Fn(&WordEntry, &WordEntry) -> bool,
{
    let entries = ledger.entries_mut();
    let n = entries.len();

    for pass in 0..n {
        let mut swapped = false;
        for i in 0..n - pass - 1 {
            if less(&entries[i + 1], &entries[i]) {
                entries.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_of(words: &[&str]) -> WordLedger {
        let mut ledger = WordLedger::new();
        for word in words {
            ledger.insert_or_increment(word);
        }
        ledger
    }

    fn is_sorted(ledger: &WordLedger) -> bool {
        let entries: Vec<_> = ledger.iter().collect();
        entries.windows(2).all(|w| !wordcount_less(w[1], w[0]))
    }

    #[test]
    fn test_comparator_orders_by_count_first() {
        let once = WordEntry::new("zebra");
        let mut twice = WordEntry::new("apple");
        twice.count = 2;

        assert!(wordcount_less(&once, &twice));
        assert!(!wordcount_less(&twice, &once));
    }

    #[test]
    fn test_comparator_breaks_count_ties_lexicographically() {
        let a = WordEntry::new("apple");
        let b = WordEntry::new("banana");

        assert!(wordcount_less(&a, &b));
        assert!(!wordcount_less(&b, &a));
    }

    #[test]
    fn test_comparator_is_irreflexive_on_equal_entries() {
        let a = WordEntry::new("same");
        let b = WordEntry::new("same");

        assert!(!wordcount_less(&a, &b));
        assert!(!wordcount_less(&b, &a));
    }

    #[test]
    fn test_sort_produces_non_decreasing_order() {
        let mut ledger = ledger_of(&["the", "quick", "fox", "the", "a", "a", "a"]);
        sort_entries(&mut ledger, wordcount_less);

        assert!(is_sorted(&ledger));
        let words: Vec<_> = ledger.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["fox", "quick", "the", "a"]);
    }

    #[test]
    fn test_sort_orders_equal_counts_lexicographically() {
        let mut ledger = ledger_of(&["delta", "alpha", "charlie", "bravo"]);
        sort_entries(&mut ledger, wordcount_less);

        let words: Vec<_> = ledger.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_sort_handles_empty_and_singleton_ledgers() {
        let mut empty = WordLedger::new();
        sort_entries(&mut empty, wordcount_less);
        assert!(empty.is_empty());

        let mut one = ledger_of(&["only"]);
        sort_entries(&mut one, wordcount_less);
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_sort_accepts_a_custom_comparator() {
        // Descending by count.
        let mut ledger = ledger_of(&["b", "a", "a"]);
        sort_entries(&mut ledger, |x, y| x.count > y.count);

        let counts: Vec<_> = ledger.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![2, 1]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut ledger = ledger_of(&["c", "b", "b", "a", "a", "a"]);
        sort_entries(&mut ledger, wordcount_less);
        let first: Vec<_> = ledger.iter().cloned().collect();

        sort_entries(&mut ledger, wordcount_less);
        let second: Vec<_> = ledger.iter().cloned().collect();
        assert_eq!(first, second);
    }
}
