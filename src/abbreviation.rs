use once_cell::sync::Lazy;
use regex::{
  CaptureMatches,
  Regex
};
use serde::Serialize;

use crate::token::{
  self,
  Token
};

static PARENTHESIZED: Lazy<Regex> =
  Lazy::new(|| {
    Regex::new(r"\(([A-Z]{2,10})\)")
      .expect("abbreviation pattern")
  });

const CONNECTORS: [&str; 10] = [
  "of", "and", "the", "for", "in", "on",
  "to", "a", "an", "&"
];

#[derive(
  Clone, Debug, PartialEq, Eq, Serialize,
)]
pub struct Abbreviation {
  pub expansion:    String,
  pub abbreviation: String
}

impl From<Abbreviation> for (String, String) {
  fn from(found: Abbreviation) -> Self {
    (found.expansion, found.abbreviation)
  }
}

/// Single pass over the text, yielding
/// `Capitalized Phrase (CP)` pairs left
/// to right.
pub struct Abbreviations<'a> {
  text:       &'a str,
  candidates: CaptureMatches<'static, 'a>
}

impl Iterator for Abbreviations<'_> {
  type Item = Abbreviation;

  fn next(&mut self) -> Option<Self::Item> {
    for caps in self.candidates.by_ref() {
      let (Some(whole), Some(abbr)) =
        (caps.get(0), caps.get(1))
      else {
        continue;
      };
      let preceding =
        &self.text[..whole.start()];
      if let Some(expansion) =
        find_expansion(preceding, abbr.as_str())
      {
        return Some(Abbreviation {
          expansion:    expansion
            .to_string(),
          abbreviation: abbr
            .as_str()
            .to_string()
        });
      }
    }
    None
  }
}

pub fn find_abbreviations(
  text: &str
) -> Abbreviations<'_> {
  let pattern: &'static Regex =
    &PARENTHESIZED;
  Abbreviations {
    text,
    candidates: pattern.captures_iter(text)
  }
}

/// Walks back from the parenthesis,
/// matching abbreviation letters
/// against word initials from the last
/// letter to the first. Connector
/// words may sit inside the phrase but
/// never at either end.
fn find_expansion<'a>(
  preceding: &'a str,
  abbreviation: &str
) -> Option<&'a str> {
  let letters: Vec<char> = abbreviation
    .chars()
    .flat_map(char::to_lowercase)
    .collect();
  let words = token::tokens(preceding);
  let mut remaining = letters.len();
  let mut last: Option<Token<'_>> = None;
  for word in words.iter().rev() {
    if is_connector(word.text) {
      if last.is_none() {
        return None;
      }
      continue;
    }
    if !is_plain_word(word.text) {
      return None;
    }
    let initials = initials(word.text);
    if initials.is_empty()
      || initials.len() > remaining
    {
      return None;
    }
    let expected = &letters
      [remaining - initials.len()..remaining];
    if initials != expected {
      return None;
    }
    remaining -= initials.len();
    let last = *last.get_or_insert(*word);
    if remaining == 0 {
      let capitalized = word
        .text
        .chars()
        .next()
        .is_some_and(char::is_uppercase);
      return capitalized.then(|| {
        &preceding[word.start..last.end]
      });
    }
  }
  None
}

fn is_connector(word: &str) -> bool {
  CONNECTORS
    .iter()
    .any(|c| word.eq_ignore_ascii_case(c))
}

fn is_plain_word(word: &str) -> bool {
  word.chars().all(|c| {
    c.is_alphanumeric()
      || c == '-'
      || c == '\''
  })
}

/// First letters of each hyphen
/// separated part: `Cross-Site` gives
/// `cs`.
fn initials(word: &str) -> Vec<char> {
  word
    .split('-')
    .filter_map(|part| part.chars().next())
    .flat_map(char::to_lowercase)
    .collect()
}
