//! `spookify` - Halloween name generator.
//!
//! Turns a name into a themed pun: for every word, the substring that best
//! matches some entry of a themed word list (by normalized edit distance) is
//! replaced with that entry, delimited by hyphens inside the word.
//!
//! # Architecture
//!
//! ```text
//! phrase → tokenize → selector (per token) → join → capitalize_words
//!                        ↓
//!          substrings × word list → distance::score → first minimum → splice
//! ```
//!
//! - [`pun`] - distance engine, substitution selector, tie-break strategies
//! - [`wordlist`] - embedded and file-backed themed word lists
//! - [`output`] - human / JSON rendering
//! - [`repl`] - interactive prompt loop

pub mod error;
pub mod output;
pub mod pun;
pub mod repl;
pub mod wordlist;

pub use error::{SpookifyError, SpookifyResult};
pub use pun::distance::Metric;
pub use pun::{spookify, PunOutcome, Spookifier, SpookifierConfig};
pub use repl::run_repl;
pub use wordlist::WordList;
