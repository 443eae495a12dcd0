//! Themed pun engine.
//!
//! A phrase is lowercased and split on whitespace; every token goes through
//! the [`selector`] independently, and the results are joined with single
//! spaces and title-cased.
//!
//! # Modules
//!
//! - [`distance`] - Levenshtein / Damerau-Levenshtein and the substitution score
//! - [`selector`] - per-word candidate search and splice
//! - [`tie_break`] - candidate ordering strategies

pub mod distance;
pub mod selector;
pub mod tie_break;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SpookifyError, SpookifyResult};
use crate::wordlist::WordList;

use self::distance::Metric;
use self::selector::Substitution;
use self::tie_break::{Shuffle, TieBreak};

/// Pun on every word of `phrase` and return the title-cased result.
///
/// Fails only if `word_list` is empty. A token whose substitution fails is
/// kept as-is.
pub fn spookify<W, T>(
    phrase: &str,
    word_list: &[W],
    metric: Metric,
    tie_break: &mut T,
) -> SpookifyResult<String>
where
    W: AsRef<str> + Sync,
    T: TieBreak,
{
    if word_list.is_empty() {
        return Err(SpookifyError::invalid_input("word list is empty"));
    }

    let tokens = pun_tokens(tokenize(phrase), word_list, metric, tie_break);
    Ok(join_tokens(&tokens))
}

/// Lowercase `phrase` and split it on whitespace.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Upper-case the first character of each whitespace-separated word and
/// lower-case the rest, joining with single spaces.
pub fn capitalize_words(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Settings for a [`Spookifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpookifierConfig {
    pub metric: Metric,
    /// Shuffle candidates before tie-breaking.
    pub shuffle: bool,
    /// Fixed seed for reproducible shuffling.
    pub seed: Option<u64>,
}

impl Default for SpookifierConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            shuffle: true,
            seed: None,
        }
    }
}

/// Result for one input token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenPun {
    pub token: String,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution: Option<Substitution>,
}

/// Result for a whole phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PunOutcome {
    pub input: String,
    pub output: String,
    pub tokens: Vec<TokenPun>,
}

/// A word list bundled with its scoring and tie-break settings, for
/// punning on many phrases in a row.
#[derive(Debug)]
pub struct Spookifier {
    word_list: WordList,
    metric: Metric,
    tie_break: Shuffle,
}

impl Spookifier {
    pub fn new(word_list: WordList, config: &SpookifierConfig) -> Self {
        Self {
            word_list,
            metric: config.metric,
            tie_break: Shuffle::new(config.shuffle, config.seed),
        }
    }

    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    /// Pun on `phrase`, keeping the per-token detail.
    pub fn pun(&mut self, phrase: &str) -> PunOutcome {
        let tokens = pun_tokens(
            tokenize(phrase),
            self.word_list.words(),
            self.metric,
            &mut self.tie_break,
        );
        PunOutcome {
            input: phrase.to_owned(),
            output: join_tokens(&tokens),
            tokens,
        }
    }
}

fn join_tokens(tokens: &[TokenPun]) -> String {
    let joined = tokens
        .iter()
        .map(|t| t.result.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    capitalize_words(&joined)
}

/// Each token gets its own forked strategy, handed out in token order.
fn pun_tokens<W, T>(
    tokens: Vec<String>,
    word_list: &[W],
    metric: Metric,
    tie_break: &mut T,
) -> Vec<TokenPun>
where
    W: AsRef<str> + Sync,
    T: TieBreak,
{
    let jobs: Vec<(String, T)> = tokens
        .into_iter()
        .map(|token| (token, tie_break.fork()))
        .collect();

    #[cfg(feature = "parallel")]
    let results: Vec<TokenPun> = {
        use rayon::prelude::*;
        jobs.into_par_iter()
            .map(|(token, mut fork)| pun_token(token, word_list, metric, &mut fork))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<TokenPun> = jobs
        .into_iter()
        .map(|(token, mut fork)| pun_token(token, word_list, metric, &mut fork))
        .collect();

    results
}

fn pun_token<W, T>(token: String, word_list: &[W], metric: Metric, tie_break: &mut T) -> TokenPun
where
    W: AsRef<str>,
    T: TieBreak,
{
    match selector::select(&token, word_list, metric, tie_break) {
        Ok(substitution) => {
            let result = substitution.as_ref().map_or_else(
                || token.clone(),
                |sub| selector::splice(&token, &sub.word_part, &sub.themed_word),
            );
            debug!(token = %token, result = %result, "token punned");
            TokenPun {
                token,
                result,
                substitution,
            }
        }
        Err(e) => {
            warn!(token = %token, error = %e, "substitution failed, keeping token");
            TokenPun {
                result: token.clone(),
                token,
                substitution: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::tie_break::{KeepOrder, RandomOrder};
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  Mary  ANNE\tSmith \n"), ["mary", "anne", "smith"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("mary-ghost-anne smith"), "Mary-ghost-anne Smith");
        assert_eq!(capitalize_words("émile zola"), "Émile Zola");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_spookify_single_word() {
        let out = spookify("SAM", &["spooky"], Metric::default(), &mut KeepOrder);
        assert_eq!(out.ok().as_deref(), Some("Spooky"));
    }

    #[test]
    fn test_spookify_keeps_short_and_ignored_words() {
        let out = spookify("jo and the cat", &["cat"], Metric::default(), &mut KeepOrder);
        assert_eq!(out.ok().as_deref(), Some("Jo And The Cat"));
    }

    #[test]
    fn test_spookify_empty_list() {
        let err = spookify("sam", &[] as &[&str], Metric::default(), &mut KeepOrder)
            .expect_err("should be rejected");
        assert!(matches!(err, SpookifyError::InvalidInput { .. }));
    }

    #[test]
    fn test_failed_token_passes_through() {
        // The empty themed word fails scoring for eligible tokens only.
        let out = spookify("al samuel", &["", "ghost"], Metric::default(), &mut KeepOrder);
        assert_eq!(out.ok().as_deref(), Some("Al Samuel"));
    }

    #[test]
    fn test_spookifier_outcome() {
        let list = WordList::builtin("spooky").expect("embedded list");
        let config = SpookifierConfig {
            seed: Some(5),
            ..SpookifierConfig::default()
        };
        let mut spookifier = Spookifier::new(list, &config);
        let outcome = spookifier.pun("Sam the Baker");

        assert_eq!(outcome.input, "Sam the Baker");
        assert_eq!(outcome.tokens.len(), 3);
        assert!(outcome.tokens[0].substitution.is_some());
        assert_eq!(outcome.tokens[1].result, "the");
        assert!(outcome.tokens[1].substitution.is_none());
        assert!(outcome.output.starts_with(char::is_uppercase));
        assert_eq!(outcome.output.split(' ').count(), 3);
    }

    #[test]
    fn test_seeded_spookifiers_agree() {
        let list = WordList::builtin("spooky").expect("embedded list");
        let config = SpookifierConfig {
            seed: Some(2024),
            ..SpookifierConfig::default()
        };
        let mut a = Spookifier::new(list.clone(), &config);
        let mut b = Spookifier::new(list, &config);
        assert_eq!(a.pun("samantha jones").output, b.pun("samantha jones").output);
    }

    #[test]
    fn test_free_function_matches_spookifier() {
        let list = WordList::builtin("spooky").expect("embedded list");
        let expected = spookify(
            "harold finch",
            list.words(),
            Metric::default(),
            &mut RandomOrder::seeded(8),
        )
        .expect("spookify");

        let config = SpookifierConfig {
            seed: Some(8),
            ..SpookifierConfig::default()
        };
        let mut spookifier = Spookifier::new(list, &config);
        assert_eq!(spookifier.pun("harold finch").output, expected);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SpookifierConfig =
            serde_json::from_str(r#"{"metric": "levenshtein"}"#).expect("config");
        assert_eq!(config.metric, Metric::Levenshtein);
        assert!(config.shuffle);
        assert_eq!(config.seed, None);
    }
}
