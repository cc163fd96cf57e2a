use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::stopwords::BUNDLED_STOP_WORDS;
use crate::token;
use crate::wordlist;

const BUNDLED_NAMES: &str =
  include_str!("../data/names.txt");
const BUNDLED_CALENDAR: &str =
  include_str!("../data/calendar.txt");

#[derive(Clone, Debug)]
pub struct NameList {
  names:      HashSet<String>,
  stop_words: HashSet<String>,
  heuristic:  bool
}

impl Default for NameList {
  fn default() -> Self {
    Self::bundled()
  }
}

impl NameList {
  pub fn bundled() -> Self {
    Self::new(
      wordlist::parse(BUNDLED_NAMES),
      never_names()
    )
  }

  pub fn new<N, S>(
    names: N,
    stop_words: S
  ) -> Self
  where
    N: IntoIterator,
    N::Item: AsRef<str>,
    S: IntoIterator,
    S::Item: AsRef<str>
  {
    Self {
      names:      names
        .into_iter()
        .map(|n| n.as_ref().to_lowercase())
        .collect(),
      stop_words: stop_words
        .into_iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect(),
      heuristic:  false
    }
  }

  /// Names from a word list file; stop
  /// words stay bundled.
  pub fn from_file(
    path: impl AsRef<Path>
  ) -> Result<Self> {
    Ok(Self::new(
      wordlist::load(path)?,
      never_names()
    ))
  }

  /// In heuristic mode every
  /// capitalized mid-sentence word is a
  /// name, listed or not.
  pub fn with_heuristic(
    mut self,
    heuristic: bool
  ) -> Self {
    self.heuristic = heuristic;
    self
  }

  pub fn extend<I>(&mut self, names: I)
  where
    I: IntoIterator,
    I::Item: AsRef<str>
  {
    self.names.extend(
      names
        .into_iter()
        .map(|n| n.as_ref().to_lowercase())
    );
  }

  pub fn contains(&self, word: &str) -> bool {
    self.names.contains(&word.to_lowercase())
  }

  pub fn is_stop_word(
    &self,
    word: &str
  ) -> bool {
    self
      .stop_words
      .contains(&word.to_lowercase())
  }

  pub fn is_heuristic(&self) -> bool {
    self.heuristic
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  fn is_name(&self, core: &str) -> bool {
    let capitalized = core
      .chars()
      .next()
      .is_some_and(char::is_uppercase);
    if !capitalized
      || self.is_stop_word(core)
    {
      return false;
    }
    if self.heuristic {
      // acronyms are not names
      token::case_pattern(core)
        != token::CasePattern::Upper
    } else {
      self.contains(core)
    }
  }
}

/// Stop words plus titles, weekdays
/// and months.
fn never_names() -> impl Iterator<Item = String> {
  wordlist::parse(BUNDLED_STOP_WORDS)
    .chain(wordlist::parse(BUNDLED_CALENDAR))
}

/// Removes capitalized, non sentence
/// initial words that the list knows as
/// names. Punctuation glued to a
/// removed word survives, and the
/// spacing in front of it goes with it.
pub fn remove_names(
  input: &str,
  names: &NameList
) -> String {
  let (output, removed) =
    token::strip_words(input, |core, initial| {
      !initial && names.is_name(core)
    });
  log::debug!("removed {removed} names");
  output
}
