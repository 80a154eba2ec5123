//! Term frequency counting across a collection of documents.
//!
//! Every document is run through a [`ReviewAnalyzer`]; the resulting terms
//! are counted and ranked by count. Ties keep the order in which the terms
//! were first seen across the documents, so the "top terms" quoted by the
//! summary are deterministic.
//!
//! # Examples
//!
//! ```
//! use reviewlens::analysis::analyzer::ReviewAnalyzer;
//! use reviewlens::frequency::TermCounter;
//!
//! let counter = TermCounter::new(ReviewAnalyzer::new().unwrap());
//! let table = counter.count(vec![Some("kopi susu"), None, Some("kopi hitam")], 20);
//!
//! assert_eq!(table.entries()[0].term, "kopi");
//! assert_eq!(table.entries()[0].count, 2);
//! assert_eq!(table.terms(), vec!["kopi", "susu", "hitam"]);
//! ```

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::ReviewAnalyzer;
use crate::review::Review;

/// Default number of terms kept in a frequency table.
pub const DEFAULT_TOP_N: usize = 20;

/// A term together with the number of times it occurred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
}

/// Ranked `(term, count)` pairs, counts non-increasing by position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermFrequencyTable {
    entries: Vec<TermFrequency>,
}

impl TermFrequencyTable {
    /// The ranked entries.
    pub fn entries(&self) -> &[TermFrequency] {
        &self.entries
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The ranked terms without their counts.
    pub fn terms(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.term.as_str()).collect()
    }

    /// The first `n` terms (fewer if the table is shorter).
    pub fn top_terms(&self, n: usize) -> Vec<&str> {
        self.entries
            .iter()
            .take(n)
            .map(|entry| entry.term.as_str())
            .collect()
    }

    /// Sum of all counts in the table.
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

impl<'a> IntoIterator for &'a TermFrequencyTable {
    type Item = &'a TermFrequency;
    type IntoIter = std::slice::Iter<'a, TermFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Counts analyzed terms across documents.
#[derive(Debug)]
pub struct TermCounter {
    analyzer: ReviewAnalyzer,
}

impl TermCounter {
    /// Create a counter that tokenizes with the given analyzer.
    pub fn new(analyzer: ReviewAnalyzer) -> Self {
        TermCounter { analyzer }
    }

    /// Get the analyzer used by this counter.
    pub fn analyzer(&self) -> &ReviewAnalyzer {
        &self.analyzer
    }

    /// Build the top-`top_n` term table over `documents`, skipping absent ones.
    pub fn count<I, S>(&self, documents: I, top_n: usize) -> TermFrequencyTable
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        // Entries are appended in first-seen order; `index` points into them.
        let mut index: AHashMap<String, usize> = AHashMap::new();
        let mut entries: Vec<TermFrequency> = Vec::new();
        let mut documents_seen = 0usize;

        for document in documents.into_iter().flatten() {
            documents_seen += 1;
            for term in self.analyzer.terms(document.as_ref()) {
                match index.get(&term) {
                    Some(&slot) => entries[slot].count += 1,
                    None => {
                        index.insert(term.clone(), entries.len());
                        entries.push(TermFrequency { term, count: 1 });
                    }
                }
            }
        }

        // Stable sort keeps first-seen order among equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(top_n);

        debug!(
            "Counted {} distinct terms over {documents_seen} documents (top {top_n} kept)",
            index.len()
        );

        TermFrequencyTable { entries }
    }

    /// Build the term table over review bodies.
    pub fn count_reviews(&self, reviews: &[Review], top_n: usize) -> TermFrequencyTable {
        self.count(reviews.iter().map(|review| Some(review.text())), top_n)
    }
}
