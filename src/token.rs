use unicode_segmentation::UnicodeSegmentation;

/// A slice of the input together with
/// its byte offsets, so callers can
/// rebuild the text around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
  pub text:  &'a str,
  pub start: usize,
  pub end:   usize
}

/// Maximal runs of non-whitespace
/// characters.
pub fn tokens(input: &str) -> Vec<Token<'_>> {
  let mut positions = Vec::new();
  let mut start = None;
  for (idx, ch) in input.char_indices()
  {
    if ch.is_whitespace() {
      if let Some(s) = start.take() {
        positions.push(Token {
          text:  &input[s..idx],
          start: s,
          end:   idx
        });
      }
    } else if start.is_none() {
      start = Some(idx);
    }
  }
  if let Some(s) = start {
    positions.push(Token {
      text:  &input[s..],
      start: s,
      end:   input.len()
    });
  }
  positions
}

/// Unicode word segments (UAX #29)
/// that carry at least one letter or
/// digit. Punctuation and spacing
/// between them are never yielded.
pub fn word_tokens(
  input: &str
) -> impl Iterator<Item = Token<'_>> {
  input
    .split_word_bound_indices()
    .filter(|(_, segment)| {
      segment
        .chars()
        .any(char::is_alphanumeric)
    })
    .map(|(start, segment)| Token {
      text: segment,
      start,
      end: start + segment.len()
    })
}

/// Word tokens as strings; spacing and
/// punctuation are dropped.
pub fn tokenize_words(
  input: &str
) -> Vec<&str> {
  input.unicode_words().collect()
}

/// Sentences split on Unicode sentence
/// boundaries (UAX #29), trimmed, empty
/// ones skipped.
pub fn tokenize_sentences(
  input: &str
) -> Vec<&str> {
  input
    .unicode_sentences()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect()
}

/// Drops every whitespace token whose
/// alphanumeric core `remove` accepts.
/// The callback also learns whether the
/// token starts a sentence. Punctuation
/// glued to a dropped core stays; the
/// spacing in front of it goes.
pub(crate) fn strip_words<F>(
  input: &str,
  mut remove: F
) -> (String, usize)
where
  F: FnMut(&str, bool) -> bool
{
  let mut output =
    String::with_capacity(input.len());
  let mut cursor = 0;
  let mut previous: Option<&str> = None;
  let mut removed = 0usize;
  for token in tokens(input) {
    let sentence_initial =
      previous.is_none_or(ends_sentence);
    // Bare quotes and dashes do not move
    // the sentence boundary.
    if token
      .text
      .chars()
      .any(char::is_alphanumeric)
      || ends_sentence(token.text)
    {
      previous = Some(token.text);
    }
    let parts = split_core(token.text)
      .filter(|(_, core, _)| {
        remove(*core, sentence_initial)
      });
    let Some((leading, _, trailing)) = parts
    else {
      output.push_str(
        &input[cursor..token.end]
      );
      cursor = token.end;
      continue;
    };
    removed += 1;
    if !leading.is_empty() {
      output.push_str(
        &input[cursor..token.start]
      );
      output.push_str(leading);
    }
    output.push_str(trailing);
    cursor = token.end;
    if output.is_empty() {
      let rest = &input[cursor..];
      cursor += rest.len()
        - rest.trim_start().len();
    }
  }
  output.push_str(&input[cursor..]);
  (output, removed)
}

/// Splits a token into leading
/// punctuation, the span from its first
/// to its last alphanumeric character,
/// and trailing punctuation.
fn split_core(
  word: &str
) -> Option<(&str, &str, &str)> {
  let start =
    word.find(char::is_alphanumeric)?;
  let last =
    word.rfind(char::is_alphanumeric)?;
  let end = last
    + word[last..]
      .chars()
      .next()
      .map_or(0, char::len_utf8);
  Some((
    &word[..start],
    &word[start..end],
    &word[end..]
  ))
}

fn ends_sentence(word: &str) -> bool {
  word
    .trim_end_matches([
      '"', '\'', ')', ']', '\u{201d}',
      '\u{2019}'
    ])
    .ends_with(['.', '!', '?'])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CasePattern {
  Upper,
  Capitalized,
  AsIs
}

pub fn case_pattern(
  word: &str
) -> CasePattern {
  let cased: Vec<char> = word
    .chars()
    .filter(|c| {
      c.is_uppercase() || c.is_lowercase()
    })
    .collect();
  if cased.len() > 1
    && cased.iter().all(|c| c.is_uppercase())
  {
    return CasePattern::Upper;
  }
  match word.chars().next() {
    | Some(first) if first.is_uppercase() => {
      CasePattern::Capitalized
    }
    | _ => CasePattern::AsIs
  }
}

pub fn apply_case(
  pattern: CasePattern,
  value: &str
) -> String {
  match pattern {
    | CasePattern::Upper => {
      value.to_uppercase()
    }
    | CasePattern::Capitalized => {
      let mut chars = value.chars();
      match chars.next() {
        | Some(first) => first
          .to_uppercase()
          .chain(chars)
          .collect(),
        | None => String::new()
      }
    }
    | CasePattern::AsIs => {
      value.to_string()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokens_keep_byte_offsets() {
    let input = "  héllo\tworld \n";
    let found = tokens(input);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].text, "héllo");
    assert_eq!(
      &input[found[0].start..found[0].end],
      "héllo"
    );
    assert_eq!(found[1].text, "world");
    assert_eq!(found[1].end, 14);
  }

  #[test]
  fn word_tokens_skip_punctuation() {
    let words: Vec<_> =
      word_tokens("Hi, there! vs. 42")
        .map(|t| t.text)
        .collect();
    assert_eq!(
      words,
      vec!["Hi", "there", "vs", "42"]
    );
  }

  #[test]
  fn case_patterns_are_detected() {
    assert_eq!(
      case_pattern("JOHN"),
      CasePattern::Upper
    );
    assert_eq!(
      case_pattern("John"),
      CasePattern::Capitalized
    );
    assert_eq!(
      case_pattern("I"),
      CasePattern::Capitalized
    );
    assert_eq!(
      case_pattern("john"),
      CasePattern::AsIs
    );
    assert_eq!(
      apply_case(
        CasePattern::Capitalized,
        "foo bar"
      ),
      "Foo bar"
    );
  }

  #[test]
  fn tokenizes_words_and_sentences() {
    assert_eq!(
      tokenize_words(
        "Hello, world! It's 3.5 ok"
      ),
      vec!["Hello", "world", "It's", "3.5", "ok"]
    );
    assert_eq!(
      tokenize_sentences(
        "Hello there. How are you?  \
         Fine!\n"
      ),
      vec![
        "Hello there.",
        "How are you?",
        "Fine!"
      ]
    );
    assert!(tokenize_words("").is_empty());
    assert!(
      tokenize_sentences("  ").is_empty()
    );
  }

  #[test]
  fn strip_words_keeps_glued_punctuation() {
    let (output, removed) = strip_words(
      "keep (drop), keep drop!",
      |core, _| core == "drop"
    );
    assert_eq!(output, "keep (), keep!");
    assert_eq!(removed, 2);
  }

  #[test]
  fn strip_words_drops_leading_spacing() {
    let (output, _) = strip_words(
      "  drop \n drop keep  it",
      |core, _| core == "drop"
    );
    assert_eq!(output, "keep  it");
  }

  #[test]
  fn strip_words_tracks_sentences() {
    let mut initial = Vec::new();
    strip_words(
      "\" One two. - Three (four)",
      |core, first| {
        initial.push((core.to_string(), first));
        false
      }
    );
    assert_eq!(
      initial,
      vec![
        ("One".to_string(), true),
        ("two".to_string(), false),
        ("Three".to_string(), true),
        ("four".to_string(), false)
      ]
    );
  }
}
