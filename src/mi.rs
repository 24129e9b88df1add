use std::collections::HashMap;

use rayon::prelude::*;

use crate::stats::{CorpusStats, WordPair};

/// Additive smoothing constant applied to every cell of the 2x2 table.
pub const SMOOTHING: f64 = 0.25;

/// Mutual information scores keyed by canonical pair.
pub type MiTable = HashMap<WordPair, f64>;

/// One cell's contribution to the MI sum.
///
/// A non-positive joint probability contributes 0, keeping the sum defined
/// for every input the formula can be handed.
fn mi_term(p_xy: f64, p_x: f64, p_y: f64) -> f64 {
    if p_xy <= 0.0 {
        return 0.0;
    }
    p_xy * (p_xy / (p_x * p_y)).log2()
}

/// Smoothed joint probabilities `[p11, p10, p01, p00]` of the two presence
/// indicators, from document frequencies `na`/`nb`, joint count `nab`, and
/// corpus size `n`. The numerators add the smoothing constant, the shared
/// denominator is `n + 1`, so the four cells sum to 1.
pub fn joint_table(na: u32, nb: u32, nab: u32, n: u32) -> [f64; 4] {
    let (na, nb, nab, n) = (
        f64::from(na),
        f64::from(nb),
        f64::from(nab),
        f64::from(n),
    );
    let denom = n + 1.0;
    [
        (nab + SMOOTHING) / denom,
        (na - nab + SMOOTHING) / denom,
        (nb - nab + SMOOTHING) / denom,
        (n - na - nb + nab + SMOOTHING) / denom,
    ]
}

/// Mutual information of two words' presence indicators across the corpus:
/// MI = sum over the 2x2 table of p(x,y) * log2(p(x,y) / (p(x) * p(y))).
///
/// A pure function of its four counts; identical inputs give bit-identical
/// output.
pub fn pair_mi(na: u32, nb: u32, nab: u32, n: u32) -> f64 {
    let [p11, p10, p01, p00] = joint_table(na, nb, nab, n);

    let p1_ = p10 + p11;
    let p0_ = p00 + p01;
    let p_1 = p01 + p11;
    let p_0 = p00 + p10;

    mi_term(p11, p1_, p_1)
        + mi_term(p10, p1_, p_0)
        + mi_term(p01, p0_, p_1)
        + mi_term(p00, p0_, p_0)
}

/// Score every pair that co-occurred at least once.
///
/// Each pair's score depends only on its own counts and the global document
/// total, so the map runs in parallel over the co-occurrence table.
pub fn score_pairs(stats: &CorpusStats) -> MiTable {
    stats
        .cooc_freq
        .par_iter()
        .map(|(pair, &nab)| {
            let na = stats.doc_freq[&pair.first];
            let nb = stats.doc_freq[&pair.second];
            (pair.clone(), pair_mi(na, nb, nab, stats.n_docs))
        })
        .collect()
}
