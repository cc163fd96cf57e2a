//! Dictionary lookups and edit-distance
//! suggestions.
//!
//! The dictionary keeps insertion order:
//! when two candidates are equally close
//! to a misspelling, the one listed
//! first wins. The bundled list is
//! ordered by word frequency, so that
//! tie break favours common words.

use std::cmp::min;
use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::token;
use crate::wordlist;

const BUNDLED_WORDS: &str =
  include_str!("../data/words.txt");

pub const DEFAULT_MAX_DISTANCE: usize =
  2;

#[derive(Clone, Debug, Default)]
pub struct Dictionary {
  words: Vec<String>,
  index: HashSet<String>
}

impl Dictionary {
  pub fn bundled() -> Self {
    Self::from_words(wordlist::parse(
      BUNDLED_WORDS
    ))
  }

  pub fn from_words<I>(words: I) -> Self
  where
    I: IntoIterator,
    I::Item: AsRef<str>
  {
    let mut dictionary = Self::default();
    for word in words {
      dictionary.insert(word.as_ref());
    }
    dictionary
  }

  pub fn from_file(
    path: impl AsRef<Path>
  ) -> Result<Self> {
    Ok(Self::from_words(wordlist::load(
      path
    )?))
  }

  /// Returns `false` when the word was
  /// already present; its position is
  /// left unchanged.
  pub fn insert(
    &mut self,
    word: &str
  ) -> bool {
    let normalized = word.to_lowercase();
    if self.index.contains(&normalized) {
      return false;
    }
    self.index.insert(normalized.clone());
    self.words.push(normalized);
    true
  }

  pub fn contains(
    &self,
    word: &str
  ) -> bool {
    self
      .index
      .contains(&word.to_lowercase())
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &str> {
    self.words.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

#[derive(
  Clone, Debug, PartialEq, Eq, Serialize,
)]
pub struct Misspelling {
  pub word:       String,
  pub suggestion: Option<String>,
  pub start:      usize,
  pub end:        usize
}

impl From<Misspelling>
  for (String, Option<String>)
{
  fn from(found: Misspelling) -> Self {
    (found.word, found.suggestion)
  }
}

#[derive(Clone, Debug)]
pub struct SpellChecker {
  dictionary:   Dictionary,
  ignored:      HashSet<String>,
  max_distance: usize
}

impl Default for SpellChecker {
  fn default() -> Self {
    Self::new(Dictionary::bundled())
  }
}

impl SpellChecker {
  pub fn new(
    dictionary: Dictionary
  ) -> Self {
    Self {
      dictionary,
      ignored: HashSet::new(),
      max_distance: DEFAULT_MAX_DISTANCE
    }
  }

  pub fn with_max_distance(
    mut self,
    max_distance: usize
  ) -> Self {
    self.max_distance = max_distance;
    self
  }

  /// Words that are never reported,
  /// e.g. acronyms or product names.
  pub fn with_ignored<I>(
    mut self,
    words: I
  ) -> Self
  where
    I: IntoIterator,
    I::Item: AsRef<str>
  {
    self.ignored.extend(
      words
        .into_iter()
        .map(|w| w.as_ref().to_lowercase())
    );
    self
  }

  pub fn dictionary(&self) -> &Dictionary {
    &self.dictionary
  }

  pub fn max_distance(&self) -> usize {
    self.max_distance
  }

  /// A possessive `'s` is known when
  /// its stem is.
  pub fn is_known(
    &self,
    word: &str
  ) -> bool {
    let lowered = word.to_lowercase();
    if self.knows(&lowered) {
      return true;
    }
    lowered
      .strip_suffix("'s")
      .or_else(|| {
        lowered.strip_suffix("\u{2019}s")
      })
      .is_some_and(|stem| self.knows(stem))
  }

  fn knows(&self, lowered: &str) -> bool {
    self.dictionary.index.contains(lowered)
      || self.ignored.contains(lowered)
  }

  /// Closest dictionary word within the
  /// distance bound. Ties go to the word
  /// inserted first.
  pub fn suggest(
    &self,
    word: &str
  ) -> Option<&str> {
    let lowered = word.to_lowercase();
    let mut best: Option<(usize, &str)> =
      None;
    for candidate in self.dictionary.iter()
    {
      let bound = match best {
        | Some((1, _)) => break,
        | Some((distance, _)) => {
          distance - 1
        }
        | None => self.max_distance
      };
      if let Some(distance) =
        bounded_levenshtein(
          &lowered, candidate, bound
        )
      {
        if distance > 0 {
          best = Some((distance, candidate));
        }
      }
    }
    best.map(|(_, candidate)| candidate)
  }

  pub fn check(
    &self,
    text: &str
  ) -> Vec<Misspelling> {
    token::word_tokens(text)
      .filter(|word| is_checkable(word.text))
      .filter(|word| {
        !self.is_known(word.text)
      })
      .map(|word| Misspelling {
        word:       word.text.to_string(),
        suggestion: self
          .suggest(word.text)
          .map(str::to_string),
        start:      word.start,
        end:        word.end
      })
      .collect()
  }

  /// Rewrites every misspelling that has
  /// a suggestion, keeping the original
  /// capitalization pattern.
  pub fn correct(
    &self,
    text: &str
  ) -> String {
    let mut output =
      String::with_capacity(text.len());
    let mut cursor = 0;
    for found in self.check(text) {
      let Some(suggestion) =
        &found.suggestion
      else {
        continue;
      };
      output
        .push_str(&text[cursor..found.start]);
      output.push_str(&token::apply_case(
        token::case_pattern(&found.word),
        suggestion
      ));
      cursor = found.end;
    }
    output.push_str(&text[cursor..]);
    output
  }
}

/// Only words with letters and without
/// digits are spell checked.
fn is_checkable(word: &str) -> bool {
  word.chars().any(char::is_alphabetic)
    && !word
      .chars()
      .any(|c| c.is_ascii_digit())
}

/// Reports only misspelled words, in
/// text order, each with its best
/// suggestion if one is close enough.
pub fn check_spelling(
  text: &str,
  checker: &SpellChecker
) -> Vec<Misspelling> {
  checker.check(text)
}

pub fn correct_spelling(
  text: &str,
  checker: &SpellChecker
) -> String {
  checker.correct(text)
}

/// Levenshtein distance, or `None` as
/// soon as it is certain to exceed
/// `threshold`.
#[allow(clippy::needless_range_loop)]
pub fn bounded_levenshtein(
  s1: &str,
  s2: &str,
  threshold: usize
) -> Option<usize> {
  let s1_chars: Vec<char> =
    s1.chars().collect();
  let s2_chars: Vec<char> =
    s2.chars().collect();
  let len1 = s1_chars.len();
  let len2 = s2_chars.len();

  if len1.abs_diff(len2) > threshold {
    return None;
  }
  if len1 == 0 || len2 == 0 {
    return Some(len1.max(len2));
  }

  let mut prev_row: Vec<usize> =
    (0..=len2).collect();
  let mut curr_row = vec![0; len2 + 1];

  for i in 1..=len1 {
    curr_row[0] = i;
    let mut min_in_row = i;
    for j in 1..=len2 {
      let cost =
        if s1_chars[i - 1] == s2_chars[j - 1]
        {
          0
        } else {
          1
        };
      curr_row[j] = min(
        min(
          prev_row[j] + 1,
          curr_row[j - 1] + 1
        ),
        prev_row[j - 1] + cost
      );
      min_in_row =
        min(min_in_row, curr_row[j]);
    }
    if min_in_row > threshold {
      return None;
    }
    std::mem::swap(
      &mut prev_row,
      &mut curr_row
    );
  }

  let distance = prev_row[len2];
  (distance <= threshold)
    .then_some(distance)
}
