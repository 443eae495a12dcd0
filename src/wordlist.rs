//! Themed word lists.
//!
//! Lists are either embedded in the binary (see [`WordList::builtin_names`])
//! or loaded from a file: a JSON array of strings for `*.json`, otherwise one
//! word per line with blank lines and `#` comments skipped. Entries are
//! trimmed and lowercased, empty entries are dropped, and a list must keep at
//! least one word.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{SpookifyError, SpookifyResult};

/// Name of the list used when none (or an unknown one) is requested.
pub const DEFAULT_LIST: &str = "spooky";

/// Embedded lists: (name, JSON source).
const BUILTIN_LISTS: &[(&str, &str)] = &[(
    "spooky",
    include_str!("../wordlists/spooky.json"),
)];

/// An ordered, non-empty list of themed words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    name: String,
    words: Vec<String>,
}

impl WordList {
    /// Build a list from raw entries, normalizing each one.
    pub fn new<I, S>(name: impl Into<String>, words: I) -> SpookifyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(SpookifyError::EmptyWordList { source_name: name });
        }

        debug!(list = name, words = words.len(), "word list ready");
        Ok(Self { name, words })
    }

    /// Names of the embedded lists.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_LISTS.iter().map(|&(name, _)| name)
    }

    /// Load an embedded list by name (case-insensitive).
    pub fn builtin(name: &str) -> SpookifyResult<Self> {
        let wanted = name.trim().to_lowercase();
        let Some(&(found, json)) = BUILTIN_LISTS.iter().find(|(n, _)| *n == wanted) else {
            return Err(SpookifyError::UnknownWordList {
                name: name.to_owned(),
            });
        };
        Self::from_json_str(found, json)
    }

    /// Like [`WordList::builtin`], but unknown names fall back to
    /// [`DEFAULT_LIST`].
    pub fn named_or_default(name: &str) -> SpookifyResult<Self> {
        match Self::builtin(name) {
            Err(SpookifyError::UnknownWordList { .. }) => {
                warn!(requested = name, fallback = DEFAULT_LIST, "unknown word list");
                Self::builtin(DEFAULT_LIST)
            }
            other => other,
        }
    }

    /// Parse a JSON array of strings.
    pub fn from_json_str(name: impl Into<String>, json: &str) -> SpookifyResult<Self> {
        let words: Vec<String> = serde_json::from_str(json)?;
        Self::new(name, words)
    }

    /// Parse one word per line; blank lines and `#` comments are skipped.
    pub fn from_lines(name: impl Into<String>, text: &str) -> SpookifyResult<Self> {
        let words = text
            .lines()
            .map(|line| line.split_once('#').map_or(line, |(word, _)| word));
        Self::new(name, words)
    }

    /// Load a list from disk; the file stem becomes the list name.
    pub fn from_path(path: &Path) -> SpookifyResult<Self> {
        if !path.exists() {
            return Err(SpookifyError::WordListNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|source| SpookifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(name, &text)
        } else {
            Self::from_lines(name, &text)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
