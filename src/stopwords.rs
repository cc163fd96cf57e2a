use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::token;
use crate::wordlist;

pub(crate) const BUNDLED_STOP_WORDS: &str =
  include_str!("../data/stopwords.txt");

/// Case-insensitive set of words that
/// carry little meaning on their own.
#[derive(Clone, Debug)]
pub struct StopWords {
  words: HashSet<String>
}

impl Default for StopWords {
  fn default() -> Self {
    Self::bundled()
  }
}

impl StopWords {
  pub fn bundled() -> Self {
    Self::new(wordlist::parse(
      BUNDLED_STOP_WORDS
    ))
  }

  pub fn new<I>(words: I) -> Self
  where
    I: IntoIterator,
    I::Item: AsRef<str>
  {
    let mut stop_words = Self {
      words: HashSet::new()
    };
    stop_words.extend(words);
    stop_words
  }

  pub fn from_file(
    path: impl AsRef<Path>
  ) -> Result<Self> {
    Ok(Self::new(wordlist::load(path)?))
  }

  pub fn extend<I>(&mut self, words: I)
  where
    I: IntoIterator,
    I::Item: AsRef<str>
  {
    self.words.extend(
      words
        .into_iter()
        .map(|w| w.as_ref().to_lowercase())
    );
  }

  pub fn contains(
    &self,
    word: &str
  ) -> bool {
    self.words.contains(&word.to_lowercase())
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

/// Drops stop words wherever they
/// appear, in any casing. Spacing and
/// punctuation are handled as in
/// [`remove_names`](crate::remove_names);
/// leading stop words take the spacing
/// after them along.
pub fn remove_stopwords(
  input: &str,
  stop_words: &StopWords
) -> String {
  let (output, removed) =
    token::strip_words(input, |core, _| {
      stop_words.contains(core)
    });
  log::debug!("removed {removed} stop words");
  output
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn drops_bundled_stop_words() {
    let stop_words = StopWords::bundled();
    assert_eq!(
      remove_stopwords(
        "The cat sat on the mat.",
        &stop_words
      ),
      "cat sat mat."
    );
    assert_eq!(
      remove_stopwords(
        "Is THIS a test? Yes, it is!",
        &stop_words
      ),
      "test? Yes,!"
    );
  }

  #[test]
  fn calendar_words_are_not_stop_words() {
    let stop_words = StopWords::bundled();
    assert!(!stop_words.contains("Monday"));
    assert!(stop_words.contains("THE"));
  }

  #[test]
  fn custom_set_replaces_bundled() {
    let mut stop_words =
      StopWords::new(["foo"]);
    stop_words.extend(["Bar"]);
    assert_eq!(stop_words.len(), 2);
    assert_eq!(
      remove_stopwords(
        "foo the bar baz",
        &stop_words
      ),
      "the baz"
    );
  }

  #[test]
  fn only_stop_words_gives_empty() {
    let stop_words = StopWords::bundled();
    assert_eq!(
      remove_stopwords(
        "  it is what it is  ",
        &stop_words
      ),
      ""
    );
    assert_eq!(
      remove_stopwords("", &stop_words),
      ""
    );
  }
}
