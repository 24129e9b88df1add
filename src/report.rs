use std::cmp::Ordering;

use serde::Serialize;

use crate::AssocOptions;
use crate::mi::MiTable;
use crate::stats::CorpusStats;

/// One row of the co-occurrence ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairCount {
    pub word1: String,
    pub word2: String,
    pub count: u32,
}

/// One row of the MI ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairMi {
    pub word1: String,
    pub word2: String,
    pub mi: f64,
}

/// One row of the query-associate ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Associate {
    pub word: String,
    pub mi: f64,
}

/// Finished result of one run: corpus totals, the three rankings, and the
/// rendered text summary the CLI prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssocReport {
    pub n_docs: u32,
    pub distinct_words: usize,
    pub query_word: String,
    pub top_cooc: Vec<PairCount>,
    pub top_mi: Vec<PairMi>,
    pub associates: Vec<Associate>,
    pub summary: String,
}

/// Pairs ranked by co-occurrence count descending, ties broken
/// lexicographically on the pair, truncated to `k`.
pub fn top_cooccurrence(stats: &CorpusStats, k: usize) -> Vec<PairCount> {
    let mut rows: Vec<PairCount> = stats
        .cooc_freq
        .iter()
        .map(|(pair, &count)| PairCount {
            word1: pair.first.clone(),
            word2: pair.second.clone(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.word1.cmp(&b.word1))
            .then_with(|| a.word2.cmp(&b.word2))
    });
    rows.truncate(k);
    rows
}

/// Pairs ranked by MI descending, same tie-break, truncated to `k`.
pub fn top_mi(scores: &MiTable, k: usize) -> Vec<PairMi> {
    let mut rows: Vec<PairMi> = scores
        .iter()
        .map(|(pair, &mi)| PairMi {
            word1: pair.first.clone(),
            word2: pair.second.clone(),
            mi,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.mi
            .partial_cmp(&a.mi)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word1.cmp(&b.word1))
            .then_with(|| a.word2.cmp(&b.word2))
    });
    rows.truncate(k);
    rows
}

/// Associates of `query`: every pair containing the query word, projected to
/// the other word, ranked by MI descending. Empty when the query word never
/// co-occurred with anything.
pub fn top_associates(scores: &MiTable, query: &str, k: usize) -> Vec<Associate> {
    let mut rows: Vec<Associate> = scores
        .iter()
        .filter_map(|(pair, &mi)| {
            if pair.first == query {
                Some(Associate {
                    word: pair.second.clone(),
                    mi,
                })
            } else if pair.second == query {
                Some(Associate {
                    word: pair.first.clone(),
                    mi,
                })
            } else {
                None
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.mi
            .partial_cmp(&a.mi)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });
    rows.truncate(k);
    rows
}

/// Run all three views over the finished tables and render the summary.
pub fn build_report(stats: &CorpusStats, scores: &MiTable, opts: &AssocOptions) -> AssocReport {
    let top_cooc = top_cooccurrence(stats, opts.k_cooc);
    let top_mi = top_mi(scores, opts.k_mi);
    let associates = top_associates(scores, &opts.query_word, opts.k_query);
    let summary = render_summary(stats, &top_mi, &top_cooc, &associates, opts);
    AssocReport {
        n_docs: stats.n_docs,
        distinct_words: stats.distinct_words(),
        query_word: opts.query_word.clone(),
        top_cooc,
        top_mi,
        associates,
        summary,
    }
}

fn render_summary(
    stats: &CorpusStats,
    top_mi: &[PairMi],
    top_cooc: &[PairCount],
    associates: &[Associate],
    opts: &AssocOptions,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Corpus: {} documents, {} distinct words\n",
        stats.n_docs,
        stats.distinct_words()
    ));

    out.push_str(&format!(
        "\nTop {} word pairs by mutual information:\n",
        opts.k_mi
    ));
    for row in top_mi {
        out.push_str(&format!(
            "  ({}, {})\tMI={:.5}\n",
            row.word1, row.word2, row.mi
        ));
    }

    out.push_str(&format!(
        "\nTop {} word pairs by co-occurrence:\n",
        opts.k_cooc
    ));
    for row in top_cooc {
        out.push_str(&format!(
            "  ({}, {})\tcount={}\n",
            row.word1, row.word2, row.count
        ));
    }

    out.push_str(&format!(
        "\nTop {} associates of \"{}\" by mutual information:\n",
        opts.k_query, opts.query_word
    ));
    for row in associates {
        out.push_str(&format!("  {}\tMI={:.5}\n", row.word, row.mi));
    }

    out
}
