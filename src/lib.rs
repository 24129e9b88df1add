//! Word association statistics over line-per-document corpora.
//!
//! One pass over the corpus builds the document-frequency table, the
//! co-occurrence table (canonical unordered pairs), and the document total.
//! From those, every co-occurring pair gets a smoothed mutual-information
//! score, and three ranked views are read off the finished tables: top pairs
//! by co-occurrence, top pairs by MI, and top associates of a query word.
//!
//! ## Example
//! ```
//! use word_assoc::{AssocOptions, analyze_lines};
//!
//! let opts = AssocOptions {
//!     query_word: "a".to_string(),
//!     ..AssocOptions::default()
//! };
//! let report = analyze_lines(["a b", "a c", "a b c"], &opts);
//! assert_eq!(report.n_docs, 3);
//! assert_eq!(report.top_cooc[0].count, 2);
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

pub mod corpus;
pub mod export;
pub mod mi;
pub mod report;
pub mod stats;

pub use corpus::{BlankLines, collect_files, documents, line_to_document};
pub use export::{ExportFormat, csv_safe_cell, export_report};
pub use mi::{MiTable, SMOOTHING, joint_table, pair_mi, score_pairs};
pub use report::{
    Associate, AssocReport, PairCount, PairMi, build_report, top_associates, top_cooccurrence,
    top_mi,
};
pub use stats::{CorpusStats, WordPair};

/// Corpus path used when none is given on the command line.
pub const DEFAULT_CORPUS: &str = "cacm.txt";

/// Tunable parameters of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AssocOptions {
    /// Query word for the associate ranking.
    pub query_word: String,
    /// Entries kept in the co-occurrence ranking.
    pub k_cooc: usize,
    /// Entries kept in the MI ranking.
    pub k_mi: usize,
    /// Entries kept in the query-associate ranking.
    pub k_query: usize,
    /// What to do with corpus lines that contain no tokens.
    pub blank_lines: BlankLines,
}

impl Default for AssocOptions {
    /// The reference configuration: query word `programming`, 10 pairs per
    /// pair ranking, 5 associates, blank lines skipped.
    fn default() -> Self {
        AssocOptions {
            query_word: "programming".to_string(),
            k_cooc: 10,
            k_mi: 10,
            k_query: 5,
            blank_lines: BlankLines::Skip,
        }
    }
}

/// Run the full pipeline over a corpus file or a directory of `.txt` files.
///
/// Every line of every collected file is one document; all documents pool
/// into a single corpus. Fails before any aggregation when the path yields
/// no files or a file cannot be read.
pub fn analyze_path(path: &Path, opts: &AssocOptions) -> Result<AssocReport, String> {
    let files =
        collect_files(path).map_err(|e| format!("Scan {} failed: {e}", path.display()))?;
    if files.is_empty() {
        return Err(format!("No corpus files found at {}", path.display()));
    }
    let mut stats = CorpusStats::default();
    for file in &files {
        let reader = BufReader::new(
            File::open(file).map_err(|e| format!("Open {} failed: {e}", file.display()))?,
        );
        stats
            .extend_from(documents(reader, opts.blank_lines))
            .map_err(|e| format!("Read {} failed: {e}", file.display()))?;
    }
    info!(
        "Aggregated {} documents, {} distinct words, {} co-occurring pairs",
        stats.n_docs,
        stats.distinct_words(),
        stats.cooc_freq.len()
    );
    Ok(run_views(stats, opts))
}

/// Run the pipeline over in-memory lines, one document per line. Same
/// semantics as [`analyze_path`] minus the I/O.
pub fn analyze_lines<I, S>(lines: I, opts: &AssocOptions) -> AssocReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stats = CorpusStats::default();
    for line in lines {
        if let Some(words) = line_to_document(line.as_ref(), opts.blank_lines) {
            stats.add_document(&words);
        }
    }
    run_views(stats, opts)
}

fn run_views(stats: CorpusStats, opts: &AssocOptions) -> AssocReport {
    let scores = score_pairs(&stats);
    build_report(&stats, &scores, opts)
}
