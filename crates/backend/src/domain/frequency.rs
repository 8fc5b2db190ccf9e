//! Word frequency counting
//!
//! A [`FrequencyMap`] is produced fresh for every count request and handed
//! off by value between actors.
//!
//! # Tokenisation
//!
//! Text is split on every single whitespace character (`' '`, `\t`, `\n`,
//! `\x0B`, `\x0C`, `\r`), not on runs of whitespace. This means consecutive or
//! leading separators produce empty-string tokens, and those are counted:
//!
//! ```text
//! "a  b"  -> ["a", "", "b"]
//! " a"    -> ["", "a"]
//! "a "    -> ["a"]          trailing empty tokens are dropped
//! "   "   -> []
//! ""      -> [""]           no separator: the whole text is the only token
//! ```

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Returns true for the characters that separate tokens
fn is_separator(c: char) -> bool {
  matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Split text into tokens using the single-separator rule described in the
/// module docs.
pub fn tokenize(text: &str) -> Vec<&str> {
  if !text.contains(is_separator) {
    return vec![text];
  }

  let mut tokens: Vec<&str> = text.split(is_separator).collect();
  while tokens.last().is_some_and(|t| t.is_empty()) {
    tokens.pop();
  }
  tokens
}

/// Count occurrences of every token in `text`
pub fn count_words(text: &str) -> FrequencyMap {
  tokenize(text).into_iter().collect()
}

/// Mapping from word to occurrence count
///
/// Keys are compared by exact string equality (case-sensitive). Backed by a
/// `BTreeMap` so log lines and printed output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap(BTreeMap<String, u64>);

impl FrequencyMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Count for a word, if it occurred at all
  pub fn get(&self, word: &str) -> Option<u64> {
    self.0.get(word).copied()
  }

  /// Number of distinct words
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Total number of tokens counted
  pub fn total(&self) -> u64 {
    self.0.values().sum()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
    self.0.iter().map(|(word, count)| (word.as_str(), *count))
  }

  fn record(&mut self, word: &str) {
    match self.0.get_mut(word) {
      Some(count) => *count += 1,
      None => {
        self.0.insert(word.to_string(), 1);
      }
    }
  }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
  fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
    let mut map = Self::new();
    for word in iter {
      map.record(word);
    }
    map
  }
}

impl<const N: usize> From<[(&str, u64); N]> for FrequencyMap {
  fn from(entries: [(&str, u64); N]) -> Self {
    Self(entries.into_iter().map(|(word, count)| (word.to_string(), count)).collect())
  }
}

impl fmt::Display for FrequencyMap {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (word, count)) in self.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{}={}", word, count)?;
    }
    f.write_str("}")
  }
}
