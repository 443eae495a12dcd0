//! Edit distances and the normalized substitution score.
//!
//! Both metrics work over `char` sequences, so multi-byte characters count as
//! a single edit. Only two (Levenshtein) or three (Damerau-Levenshtein) rows
//! of the dynamic-programming matrix are kept alive.

use serde::{Deserialize, Serialize};

use crate::error::{SpookifyError, SpookifyResult};

/// Edit distance used to score candidate substitutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Insertions, deletions and substitutions.
    Levenshtein,
    /// Levenshtein plus adjacent transpositions (optimal string alignment).
    #[default]
    DamerauLevenshtein,
}

impl Metric {
    /// Distance between `a` and `b` under this metric.
    pub fn distance(self, a: &str, b: &str) -> usize {
        match self {
            Self::Levenshtein => levenshtein(a, b),
            Self::DamerauLevenshtein => damerau_levenshtein(a, b),
        }
    }
}

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character edits (insertions,
/// deletions, substitutions) required to transform `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Compute the Damerau-Levenshtein (optimal string alignment) distance.
///
/// Like [`levenshtein`], but swapping two adjacent characters counts as one
/// edit, so `"ab"` → `"ba"` costs 1 instead of 2. No substring is edited more
/// than once, which keeps the distance symmetric and lets it run on three
/// rows.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Row i-2, needed for the transposition lookback.
    let mut before_prev = vec![0usize; n + 1];
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                curr[j] = curr[j].min(before_prev[j - 2] + 1); // transposition
            }
        }
        // Rotate rows: before_prev <- prev, prev <- curr, curr becomes scratch.
        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Score replacing `word_part` with `possible_sub` (lower is better).
///
/// Identical strings score `0.0`. Anything else scores the edit distance
/// divided by the length of the *replacement*, so a long themed word that is
/// one edit away beats a short one that is one edit away.
pub fn score(word_part: &str, possible_sub: &str, metric: Metric) -> SpookifyResult<f64> {
    if possible_sub == word_part {
        return Ok(0.0);
    }

    let sub_len = possible_sub.chars().count();
    if sub_len == 0 {
        return Err(SpookifyError::invalid_input(format!(
            "empty substitute for {word_part:?}"
        )));
    }

    let dist = metric.distance(possible_sub, word_part);
    Ok(dist as f64 / sub_len as f64)
}
