//! Parsed help-text data model.
//!
//! All data here is transient: built fully in memory during one run and
//! discarded after the output artifact is written. Insertion order is
//! preserved throughout so emission is deterministic for a given input
//! ordering.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping from section name to joined section content.
pub type SectionMap = IndexMap<String, String>;

/// The complete parsed corpus: base filename → section name → content.
///
/// Filenames are keyed by base name only; two help files with the same base
/// name in different directories collide, and the one parsed last wins.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ParsedCorpus {
    files: IndexMap<String, SectionMap>,
}

impl ParsedCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parsed file, returning `true` when an existing entry with
    /// the same base name was overwritten.
    pub fn insert_file(&mut self, basename: String, sections: SectionMap) -> bool {
        self.files.insert(basename, sections).is_some()
    }

    /// Look up the sections of one help file by base name.
    pub fn get(&self, basename: &str) -> Option<&SectionMap> {
        self.files.get(basename)
    }

    /// Iterate over (basename, sections) pairs in insertion order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &SectionMap)> {
        self.files.iter().map(|(name, sections)| (name.as_str(), sections))
    }

    /// Number of help files in the corpus.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total number of sections across all files.
    pub fn section_count(&self) -> usize {
        self.files.values().map(|sections| sections.len()).sum()
    }

    /// Whether the corpus holds no files at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(pairs: &[(&str, &str)]) -> SectionMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn insert_preserves_order() {
        let mut corpus = ParsedCorpus::new();
        corpus.insert_file("help-b.txt".to_string(), sections(&[("x", "1")]));
        corpus.insert_file("help-a.txt".to_string(), sections(&[("y", "2")]));

        let names: Vec<&str> = corpus.files().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["help-b.txt", "help-a.txt"]);
    }

    #[test]
    fn duplicate_basename_last_write_wins() {
        let mut corpus = ParsedCorpus::new();
        assert!(!corpus.insert_file("help-a.txt".to_string(), sections(&[("old", "1")])));
        assert!(corpus.insert_file("help-a.txt".to_string(), sections(&[("new", "2")])));

        assert_eq!(corpus.file_count(), 1);
        let entry = corpus.get("help-a.txt").unwrap();
        assert!(entry.contains_key("new"));
        assert!(!entry.contains_key("old"));
    }

    #[test]
    fn section_count_sums_across_files() {
        let mut corpus = ParsedCorpus::new();
        corpus.insert_file("help-a.txt".to_string(), sections(&[("a", "1"), ("b", "2")]));
        corpus.insert_file("help-b.txt".to_string(), sections(&[("c", "3")]));

        assert_eq!(corpus.file_count(), 2);
        assert_eq!(corpus.section_count(), 3);
        assert!(!corpus.is_empty());
    }
}
