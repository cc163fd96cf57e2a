use std::collections::HashMap;
use std::io;
use std::path::Path;

use csv::{
  ReaderBuilder,
  Trim
};

use crate::error::{
  Error,
  Result
};
use crate::token;

/// Word-to-word substitutions. Case
/// sensitivity is chosen per call to
/// [`replace_words`], so the map keeps
/// both an exact and a lowercased view.
#[derive(Clone, Debug, Default)]
pub struct ReplacementMap {
  exact:  HashMap<String, String>,
  folded: HashMap<String, String>
}

impl ReplacementMap {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_pairs<I, K, V>(
    pairs: I
  ) -> Result<Self>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>
  {
    let mut map = Self::new();
    for (from, to) in pairs {
      map.insert(from, to)?;
    }
    Ok(map)
  }

  /// Two-column `from,to` rows without
  /// a header.
  pub fn from_csv(
    path: impl AsRef<Path>
  ) -> Result<Self> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    Self::from_csv_reader(file).map_err(
      |err| match err {
        | Error::InvalidConfig(msg) => {
          Error::invalid_config(format!(
            "{}: {}",
            path.display(),
            msg
          ))
        }
        | other => other
      }
    )
  }

  pub fn from_csv_reader<R: io::Read>(
    reader: R
  ) -> Result<Self> {
    let mut csv = ReaderBuilder::new()
      .has_headers(false)
      .flexible(true)
      .trim(Trim::All)
      .comment(Some(b'#'))
      .from_reader(reader);
    let mut map = Self::new();
    for (idx, record) in
      csv.records().enumerate()
    {
      let record = record.map_err(|err| {
        Error::invalid_config(format!(
          "row {}: {}",
          idx + 1,
          err
        ))
      })?;
      if record.len() != 2 {
        return Err(Error::invalid_config(
          format!(
            "row {}: expected 2 columns, \
             found {}",
            idx + 1,
            record.len()
          )
        ));
      }
      map.insert(&record[0], &record[1])?;
    }
    Ok(map)
  }

  /// Later entries win, in both the
  /// exact and the lowercased view.
  pub fn insert(
    &mut self,
    from: impl Into<String>,
    to: impl Into<String>
  ) -> Result<()> {
    let from = from.into();
    let to = to.into();
    validate_key(&from)?;
    if to.is_empty() {
      return Err(Error::invalid_config(
        format!(
          "replacement for {from:?} is \
           empty"
        )
      ));
    }
    self
      .folded
      .insert(from.to_lowercase(), to.clone());
    self.exact.insert(from, to);
    Ok(())
  }

  pub fn merge(&mut self, other: ReplacementMap) {
    self.exact.extend(other.exact);
    self.folded.extend(other.folded);
  }

  pub fn get(
    &self,
    word: &str,
    case_sensitive: bool
  ) -> Option<&str> {
    let found = if case_sensitive {
      self.exact.get(word)
    } else {
      self.folded.get(&word.to_lowercase())
    };
    found.map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.exact.len()
  }

  pub fn is_empty(&self) -> bool {
    self.exact.is_empty()
  }
}

fn validate_key(key: &str) -> Result<()> {
  let mut words = token::word_tokens(key);
  match (words.next(), words.next()) {
    | (Some(word), None)
      if word.text == key =>
    {
      Ok(())
    }
    | _ => Err(Error::invalid_config(
      format!(
        "replacement key {key:?} must be \
         a single word"
      )
    ))
  }
}

/// Substitutes mapped words in place.
/// Anything that is not a mapped word
/// token is copied byte for byte. When
/// matching ignores case, the source
/// word's capitalization is carried
/// over to the replacement.
pub fn replace_words(
  text: &str,
  map: &ReplacementMap,
  case_sensitive: bool
) -> String {
  if map.is_empty() {
    return text.to_string();
  }
  let mut output =
    String::with_capacity(text.len());
  let mut cursor = 0;
  for word in token::word_tokens(text) {
    let Some(value) =
      map.get(word.text, case_sensitive)
    else {
      continue;
    };
    output.push_str(&text[cursor..word.start]);
    if case_sensitive {
      output.push_str(value);
    } else {
      output.push_str(&token::apply_case(
        token::case_pattern(word.text),
        value
      ));
    }
    cursor = word.end;
  }
  output.push_str(&text[cursor..]);
  output
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  fn john_map() -> ReplacementMap {
    ReplacementMap::from_pairs([(
      "john", "foo"
    )])
    .expect("valid map")
  }

  #[test]
  fn keeps_capitalization_when_folding() {
    let map = john_map();
    assert_eq!(
      replace_words("John", &map, false),
      "Foo"
    );
    assert_eq!(
      replace_words("JOHN", &map, false),
      "FOO"
    );
    assert_eq!(
      replace_words("john", &map, false),
      "foo"
    );
  }

  #[test]
  fn case_sensitive_needs_exact_key() {
    let map = john_map();
    assert_eq!(
      replace_words("John and john", &map, true),
      "John and foo"
    );
  }

  #[test]
  fn punctuation_and_spacing_survive() {
    let map = ReplacementMap::from_pairs([
      ("vs", "versus"),
      ("govt", "government")
    ])
    .expect("valid map");
    assert_eq!(
      replace_words(
        "Cats vs. dogs,  (Govt)!\n",
        &map,
        false
      ),
      "Cats versus. dogs,  (Government)!\n"
    );
  }

  #[test]
  fn partial_words_are_not_replaced() {
    let map = john_map();
    assert_eq!(
      replace_words("johnny johns", &map, false),
      "johnny johns"
    );
  }

  #[test]
  fn invalid_entries_are_config_errors() {
    for (from, to) in [
      ("", "x"),
      ("two words", "x"),
      ("w/", "with"),
      ("ok", "")
    ] {
      let err =
        ReplacementMap::from_pairs([(from, to)])
          .unwrap_err();
      assert!(
        matches!(err, Error::InvalidConfig(_)),
        "{from:?} -> {to:?}"
      );
    }
  }

  #[test]
  fn loads_csv_rows() {
    let csv = "# from,to\nvs, versus\nw, with\n";
    let map = ReplacementMap::from_csv_reader(
      csv.as_bytes()
    )
    .expect("csv map");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("VS", false), Some("versus"));
    assert_eq!(map.get("VS", true), None);
  }

  #[test]
  fn csv_rows_need_two_columns() {
    let err = ReplacementMap::from_csv_reader(
      "vs,versus\nlonely\n".as_bytes()
    )
    .unwrap_err();
    assert!(matches!(
      err,
      Error::InvalidConfig(msg) if msg.starts_with("row 2")
    ));
  }

  #[test]
  fn merge_prefers_incoming_entries() {
    let mut base = john_map();
    base.merge(
      ReplacementMap::from_pairs([(
        "john", "bar"
      )])
      .expect("valid map")
    );
    assert_eq!(
      replace_words("John", &base, false),
      "Bar"
    );
  }

  fn key_or_filler()
  -> impl Strategy<Value = String> {
    prop_oneof![
      Just("zebra".to_string()),
      Just("Zebra".to_string()),
      Just("ZEBRA".to_string()),
      "[a-y]{1,8}"
    ]
  }

  proptest! {
    #[test]
    fn unmapped_text_is_untouched(
      input in "[a-y ,.!?'\\n]{0,64}"
    ) {
      let map = ReplacementMap::from_pairs([(
        "zebra", "horse"
      )])
      .expect("valid map");
      prop_assert_eq!(
        replace_words(&input, &map, false),
        input.clone()
      );
      prop_assert_eq!(
        replace_words(&input, &map, true),
        input
      );
    }

    #[test]
    fn only_mapped_words_change(
      parts in prop::collection::vec(
        (
          key_or_filler(),
          "[,.!?']{0,2} [ \\n]{0,2}"
        ),
        0..12
      )
    ) {
      let map = ReplacementMap::from_pairs([(
        "zebra", "horse"
      )])
      .expect("valid map");
      let mut input = String::new();
      let mut folded = String::new();
      let mut exact = String::new();
      for (word, sep) in &parts {
        input.push_str(word);
        match word.as_str() {
          | "zebra" => {
            folded.push_str("horse");
            exact.push_str("horse");
          }
          | "Zebra" => {
            folded.push_str("Horse");
            exact.push_str(word);
          }
          | "ZEBRA" => {
            folded.push_str("HORSE");
            exact.push_str(word);
          }
          | _ => {
            folded.push_str(word);
            exact.push_str(word);
          }
        }
        for out in
          [&mut input, &mut folded, &mut exact]
        {
          out.push_str(sep);
        }
      }
      prop_assert_eq!(
        replace_words(&input, &map, false),
        folded
      );
      prop_assert_eq!(
        replace_words(&input, &map, true),
        exact
      );
    }
  }
}
