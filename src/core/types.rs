// src/core/types.rs
use std::cmp::Reverse;
use std::collections::HashMap;

/// Number of times a normalized word occurred in the source.
pub type WordCount = u64;

/// Mapping from normalized word to its occurrence count.
/// Built once by the counter and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, WordCount>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `word`, starting at 1.
    pub fn record(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> Option<WordCount> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were recorded.
    pub fn total(&self) -> WordCount {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, WordCount)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Entries in ascending lexicographic order of the word.
    pub fn alphabetical(&self) -> Vec<(&str, WordCount)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Entries by descending count. Equal counts are ordered by word.
    pub fn ranking(&self) -> Vec<(&str, WordCount)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(word, count)| (Reverse(count), word));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, WordCount)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, WordCount)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(word, count)| (word.into(), count)).collect(),
        }
    }
}

/// Length of a word in characters, the unit used by every length rule.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_starts_at_one_and_increments() {
        let mut table = FrequencyTable::new();
        table.record("cat".to_string());
        table.record("cat".to_string());
        table.record(String::new());
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get(""), Some(1));
        assert_eq!(table.total(), 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn ranking_breaks_ties_by_word() {
        let table: FrequencyTable = [("b", 2), ("a", 2), ("c", 5), ("d", 1)].into_iter().collect();
        let words: Vec<_> = table.ranking().into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, ["c", "a", "b", "d"]);
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        assert_eq!(word_length("café"), 4);
        assert_eq!(word_length(""), 0);
    }
}
