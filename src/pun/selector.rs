//! Substitution selector: picks the best themed word for a single word and
//! splices it in.
//!
//! # Steps
//!
//! 1. Skip words shorter than [`MIN_WORD_LEN`], longer than [`MAX_WORD_LEN`],
//!    and the [`IGNORED_WORDS`].
//! 2. Enumerate every contiguous substring of at least [`MIN_WORD_LEN`] chars.
//! 3. Score every (substring, themed word) pair with [`distance::score`].
//! 4. Keep the first minimum, visiting candidates longest first after the
//!    tie-break strategy has reordered them.
//! 5. Replace the first occurrence of the chosen substring, delimited by
//!    [`MARKER`] except at the word's edges.

use std::cmp::Reverse;

use serde::Serialize;
use tracing::{debug, warn};

use super::distance::{self, Metric};
use super::tie_break::TieBreak;
use crate::error::{SpookifyError, SpookifyResult};

/// Shortest word (and substring) considered for substitution, in chars.
pub const MIN_WORD_LEN: usize = 3;

/// Longest word considered for substitution, in chars.
///
/// Candidate search is cubic in the word length; longer tokens are returned
/// unchanged.
pub const MAX_WORD_LEN: usize = 32;

/// Function words that are never punned on.
pub const IGNORED_WORDS: &[&str] = &["and", "for", "the"];

/// Delimits a spliced themed word inside the original word.
pub const MARKER: char = '-';

/// The winning candidate for a word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substitution {
    /// Substring of the original word that gets replaced.
    pub word_part: String,
    /// Themed word taken verbatim from the word list.
    pub themed_word: String,
    pub score: f64,
}

/// Whether `word` is within the length bounds and not an ignored function
/// word.
pub fn is_eligible(word: &str) -> bool {
    let len = word.chars().count();
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) && !IGNORED_WORDS.contains(&word)
}

/// All contiguous substrings of `word` with at least [`MIN_WORD_LEN`] chars,
/// ordered by start then end position.
pub fn substrings(word: &str) -> Vec<&str> {
    // Byte offset of every char boundary, including the end of the word.
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();
    let n = bounds.len() - 1;
    let mut parts = Vec::new();

    for start in 0..n.saturating_sub(MIN_WORD_LEN - 1) {
        for end in (start + MIN_WORD_LEN)..=n {
            parts.push(&word[bounds[start]..bounds[end]]);
        }
    }

    parts
}

/// Find the best substitution for `word`.
///
/// Returns `Ok(None)` for ineligible words. The caller's `word_list` is only
/// read; reordering happens on private copies.
pub fn select<W, T>(
    word: &str,
    word_list: &[W],
    metric: Metric,
    tie_break: &mut T,
) -> SpookifyResult<Option<Substitution>>
where
    W: AsRef<str>,
    T: TieBreak,
{
    if !is_eligible(word) {
        if word.chars().count() > MAX_WORD_LEN {
            warn!(word, limit = MAX_WORD_LEN, "word too long, keeping it unchanged");
        }
        return Ok(None);
    }
    if word_list.is_empty() {
        return Err(SpookifyError::invalid_input(format!(
            "no themed words to substitute into {word:?}"
        )));
    }

    let mut parts = substrings(word);
    let mut themed: Vec<&str> = word_list.iter().map(AsRef::as_ref).collect();
    tie_break.reorder(&mut parts);
    tie_break.reorder(&mut themed);
    // Stable sorts: the tie-break order survives among equal lengths.
    parts.sort_by_key(|part| Reverse(part.chars().count()));
    themed.sort_by_key(|sub| Reverse(sub.chars().count()));

    let mut best: Option<(&str, &str, f64)> = None;
    'search: for &part in &parts {
        for &sub in &themed {
            let score = distance::score(part, sub, metric)?;
            if best.is_none_or(|(_, _, best_score)| score < best_score) {
                best = Some((part, sub, score));
                if score <= 0.0 {
                    break 'search;
                }
            }
        }
    }

    Ok(best.map(|(part, sub, score)| {
        debug!(word, word_part = part, themed_word = sub, score, "selected substitution");
        Substitution {
            word_part: part.to_owned(),
            themed_word: sub.to_owned(),
            score,
        }
    }))
}

/// Replace the first occurrence of `word_part` in `word` with `themed_word`.
///
/// The themed word is wrapped in [`MARKER`]s, except on a side where the
/// occurrence touches the start or end of `word`. If `word_part` does not
/// occur, `word` is returned unchanged.
pub fn splice(word: &str, word_part: &str, themed_word: &str) -> String {
    let Some(index) = word.find(word_part) else {
        return word.to_owned();
    };
    let end = index + word_part.len();

    let mut result = String::with_capacity(word.len() + themed_word.len() + 2);
    result.push_str(&word[..index]);
    if index > 0 {
        result.push(MARKER);
    }
    result.push_str(themed_word);
    if end < word.len() {
        result.push(MARKER);
    }
    result.push_str(&word[end..]);
    result
}

/// Pun on a single word: [`select`] then [`splice`].
pub fn apply<W, T>(
    word: &str,
    word_list: &[W],
    metric: Metric,
    tie_break: &mut T,
) -> SpookifyResult<String>
where
    W: AsRef<str>,
    T: TieBreak,
{
    Ok(match select(word, word_list, metric, tie_break)? {
        Some(sub) => splice(word, &sub.word_part, &sub.themed_word),
        None => word.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pun::tie_break::{KeepOrder, RandomOrder};

    const THEMED: &[&str] = &["ghost", "spooky", "bat", "witch", "boo"];

    fn keep(word: &str, list: &[&str]) -> SpookifyResult<String> {
        apply(word, list, Metric::default(), &mut KeepOrder)
    }

    #[test]
    fn test_ineligible_words_unchanged() {
        assert_eq!(keep("the", THEMED).ok().as_deref(), Some("the"));
        assert_eq!(keep("and", THEMED).ok().as_deref(), Some("and"));
        assert_eq!(keep("for", THEMED).ok().as_deref(), Some("for"));
        assert_eq!(keep("ok", THEMED).ok().as_deref(), Some("ok"));
        assert_eq!(keep("", THEMED).ok().as_deref(), Some(""));
    }

    #[test]
    fn test_ineligible_words_skip_empty_list_check() {
        assert_eq!(keep("ok", &[]).ok().as_deref(), Some("ok"));
    }

    #[test]
    fn test_identical_word() {
        assert_eq!(keep("cat", &["cat"]).ok().as_deref(), Some("cat"));
    }

    #[test]
    fn test_whole_word_replacement_has_no_markers() {
        assert_eq!(keep("bob", &["boo"]).ok().as_deref(), Some("boo"));
        assert_eq!(keep("sam", &["spooky"]).ok().as_deref(), Some("spooky"));
    }

    #[test]
    fn test_interior_replacement_keeps_markers() {
        // "abc" is the only zero-cost match, in the middle of the word.
        assert_eq!(keep("xxabcxx", &["abc"]).ok().as_deref(), Some("xx-abc-xx"));
        assert_eq!(keep("abcxx", &["abc"]).ok().as_deref(), Some("abc-xx"));
        assert_eq!(keep("xxabc", &["abc"]).ok().as_deref(), Some("xx-abc"));
    }

    #[test]
    fn test_replaces_first_occurrence_only() {
        // Every 3-char substring scores 1.0 against "xyz"; the first one wins.
        assert_eq!(keep("abcabc", &["xyz"]).ok().as_deref(), Some("xyz-abc"));
    }

    #[test]
    fn test_prefers_longer_substrings_on_ties() {
        // "ghost" and "hos" both occur verbatim; the longer substring is
        // visited first.
        let result = keep("ghosty", &["hos", "ghost"]).expect("apply");
        assert_eq!(result, "ghost-y");
    }

    #[test]
    fn test_empty_list_is_invalid() {
        let err = keep("samantha", &[]).expect_err("should be rejected");
        assert!(matches!(err, SpookifyError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_themed_word_is_invalid() {
        let err = keep("samantha", &["", "ghost"]).expect_err("should be rejected");
        assert!(matches!(err, SpookifyError::InvalidInput { .. }));
    }

    #[test]
    fn test_overlong_word_unchanged() {
        let long: String = ('a'..='z').cycle().take(MAX_WORD_LEN + 1).collect();
        assert_eq!(keep(&long, THEMED).ok().as_deref(), Some(long.as_str()));
        // Passed through before the word list is consulted.
        assert_eq!(keep(&long, &[]).ok().as_deref(), Some(long.as_str()));

        let huge = "ab".repeat(32 * 1024);
        assert!(!is_eligible(&huge));
        assert_eq!(keep(&huge, THEMED).ok().as_deref(), Some(huge.as_str()));
    }

    #[test]
    fn test_longest_allowed_word_is_punned() {
        let word: String = "x".repeat(MAX_WORD_LEN - 3) + "bat";
        assert!(is_eligible(&word));
        let expected = format!("{}-bat", "x".repeat(MAX_WORD_LEN - 3));
        assert_eq!(keep(&word, &["bat"]).ok().as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_substrings() {
        assert_eq!(substrings("abcd"), vec!["abc", "abcd", "bcd"]);
        assert_eq!(substrings("abc"), vec!["abc"]);
        assert!(substrings("ab").is_empty());
        assert_eq!(substrings("ñañé"), vec!["ñañ", "ñañé", "añé"]);
    }

    #[test]
    fn test_selects_global_minimum() {
        let word = "jonathan";
        let mut rng = RandomOrder::seeded(3);
        let chosen = select(word, THEMED, Metric::default(), &mut rng)
            .expect("select")
            .expect("eligible");

        let minimum = substrings(word)
            .iter()
            .flat_map(|part| {
                THEMED
                    .iter()
                    .map(move |sub| distance::score(part, sub, Metric::default()).expect("score"))
            })
            .fold(f64::INFINITY, f64::min);
        assert!((chosen.score - minimum).abs() < f64::EPSILON);
        assert!(THEMED.contains(&chosen.themed_word.as_str()));
    }

    #[test]
    fn test_preserves_unreplaced_text() {
        let word = "elizabeth";
        for seed in 0..20 {
            let chosen = select(word, THEMED, Metric::default(), &mut RandomOrder::seeded(seed))
                .expect("select")
                .expect("eligible");
            let result = splice(word, &chosen.word_part, &chosen.themed_word);
            let index = word.find(&chosen.word_part).expect("substring of word");
            let prefix = &word[..index];
            let suffix = &word[index + chosen.word_part.len()..];

            assert!(result.starts_with(prefix));
            assert!(result.ends_with(suffix));
            assert!(result.contains(&chosen.themed_word));
            assert!(!result.starts_with(MARKER));
            assert!(!result.ends_with(MARKER));
        }
    }

    #[test]
    fn test_does_not_mutate_word_list() {
        let list: Vec<String> = THEMED.iter().map(|s| (*s).to_owned()).collect();
        let before = list.clone();
        apply("samuel", &list, Metric::default(), &mut RandomOrder::seeded(9)).expect("apply");
        assert_eq!(list, before);
    }

    #[test]
    fn test_seeded_runs_agree() {
        let a = apply("christopher", THEMED, Metric::default(), &mut RandomOrder::seeded(11));
        let b = apply("christopher", THEMED, Metric::default(), &mut RandomOrder::seeded(11));
        assert_eq!(a.ok(), b.ok());
    }

    #[test]
    fn test_splice_missing_part_is_noop() {
        assert_eq!(splice("sam", "zzz", "ghost"), "sam");
    }
}
