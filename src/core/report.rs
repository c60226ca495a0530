// File: src/core/report.rs
use crate::core::types::{word_length, FrequencyTable, WordCount};
use crate::error::{Result, StatsError};
use serde::Serialize;
use std::fmt;

/// All words tied for the maximum length, in ascending word order.
pub fn longest_words(table: &FrequencyTable) -> Result<Vec<&str>> {
    let max_length = table
        .iter()
        .map(|(word, _)| word_length(word))
        .max()
        .ok_or(StatsError::EmptyInput("no words to find the longest of"))?;

    let mut longest: Vec<&str> = table
        .iter()
        .map(|(word, _)| word)
        .filter(|word| word_length(word) == max_length)
        .collect();
    longest.sort_unstable();
    Ok(longest)
}

/// The first `n` entries of the ranking. Asking for more than there are
/// returns everything.
pub fn top_words(table: &FrequencyTable, n: usize) -> Vec<(&str, WordCount)> {
    let mut ranking = table.ranking();
    ranking.truncate(n);
    ranking
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub count: WordCount,
}

impl fmt::Display for RankedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// Everything printed after a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub longest: Vec<String>,
    pub top_n: usize,
    pub top: Vec<RankedWord>,
    pub total_tokens: WordCount,
    pub distinct_words: usize,
}

impl Report {
    pub fn build(table: &FrequencyTable, top_n: usize) -> Result<Self> {
        let longest = longest_words(table)?.into_iter().map(str::to_string).collect();
        let top = top_words(table, top_n)
            .into_iter()
            .map(|(word, count)| RankedWord { word: word.to_string(), count })
            .collect();
        Ok(Self {
            longest,
            top_n,
            top,
            total_tokens: table.total(),
            distinct_words: table.len(),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.longest.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\nor:\n\n")?;
            }
            write!(f, "The longest word is:  {word}")?;
        }
        writeln!(f)?;
        writeln!(f, "The {} most common words are:", self.top_n)?;
        for entry in &self.top {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, WordCount)]) -> FrequencyTable {
        entries.iter().copied().collect()
    }

    #[test]
    fn longest_keeps_every_tie() {
        let t = table(&[("a", 1), ("bb", 2), ("cc", 3)]);
        assert_eq!(longest_words(&t).unwrap(), ["bb", "cc"]);
    }

    #[test]
    fn longest_of_nothing_fails() {
        let err = longest_words(&FrequencyTable::new()).unwrap_err();
        assert!(matches!(err, StatsError::EmptyInput(_)));
    }

    #[test]
    fn longest_measures_characters() {
        let t = table(&[("naïve", 1), ("abcdef", 1)]);
        assert_eq!(longest_words(&t).unwrap(), ["abcdef"]);
    }

    #[test]
    fn top_zero_is_empty_and_oversized_is_everything() {
        let t = table(&[("x", 3), ("y", 1)]);
        assert!(top_words(&t, 0).is_empty());
        assert_eq!(top_words(&t, 10), [("x", 3), ("y", 1)]);
    }

    #[test]
    fn report_text_layout() {
        let t = table(&[("ab", 3), ("cd", 1), ("e", 2)]);
        let report = Report::build(&t, 2).unwrap();
        let expected = "The longest word is:  ab\n\nor:\n\nThe longest word is:  cd\n\
                        The 2 most common words are:\nab: 3\ne: 2\n";
        assert_eq!(report.to_string(), expected);
        assert_eq!(report.total_tokens, 6);
        assert_eq!(report.distinct_words, 3);
    }
}
