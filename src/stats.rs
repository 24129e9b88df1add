use std::collections::{BTreeSet, HashMap};
use std::io;

use serde::Serialize;

/// Canonical unordered pair of distinct words.
///
/// `first <= second` always holds, so {A,B} and {B,A} map to the same key.
/// # Example
/// ```
/// use word_assoc::WordPair;
/// assert_eq!(WordPair::new("beta", "alpha"), WordPair::new("alpha", "beta"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WordPair {
    pub first: String,
    pub second: String,
}

impl WordPair {
    pub fn new(a: &str, b: &str) -> WordPair {
        if a <= b {
            WordPair {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            WordPair {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }
}

/// Frequency tables for one corpus, built in a single pass over its
/// documents and read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CorpusStats {
    /// Word -> number of documents containing it at least once.
    pub doc_freq: HashMap<String, u32>,
    /// Canonical pair -> number of documents containing both words. Sparse:
    /// pairs that never co-occurred are absent, not zero.
    pub cooc_freq: HashMap<WordPair, u32>,
    /// Total number of documents.
    pub n_docs: u32,
}

impl CorpusStats {
    /// Consume a document sequence once and build the complete tables.
    pub fn from_documents<I>(docs: I) -> io::Result<CorpusStats>
    where
        I: IntoIterator<Item = io::Result<BTreeSet<String>>>,
    {
        let mut stats = CorpusStats::default();
        stats.extend_from(docs)?;
        Ok(stats)
    }

    /// Fold more documents into the tables. Callers feeding several corpus
    /// files pool them into one corpus this way.
    pub fn extend_from<I>(&mut self, docs: I) -> io::Result<()>
    where
        I: IntoIterator<Item = io::Result<BTreeSet<String>>>,
    {
        for doc in docs {
            self.add_document(&doc?);
        }
        Ok(())
    }

    /// Count one document: every word once, every unordered pair of distinct
    /// words once, the document itself once.
    pub fn add_document(&mut self, words: &BTreeSet<String>) {
        self.n_docs += 1;
        for word in words {
            *self.doc_freq.entry(word.clone()).or_insert(0) += 1;
        }
        // The set iterates in sorted order, so (i, j) with i < j is already
        // the canonical orientation.
        let ordered: Vec<&String> = words.iter().collect();
        for i in 0..ordered.len() {
            for j in (i + 1)..ordered.len() {
                let pair = WordPair {
                    first: ordered[i].clone(),
                    second: ordered[j].clone(),
                };
                *self.cooc_freq.entry(pair).or_insert(0) += 1;
            }
        }
    }

    /// Number of distinct words seen across the corpus.
    pub fn distinct_words(&self) -> usize {
        self.doc_freq.len()
    }
}
