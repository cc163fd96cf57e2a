use std::fs;
use std::path::Path;

use crate::error::{
  Error,
  Result
};

/// Lowercased entries of a one-word-per
/// line list. Blank lines and `#`
/// comments are skipped.
pub fn parse(
  contents: &str
) -> impl Iterator<Item = String> + '_ {
  entries(contents)
    .map(|(_, word)| word.to_lowercase())
}

pub fn load(
  path: impl AsRef<Path>
) -> Result<Vec<String>> {
  let path = path.as_ref();
  let contents =
    fs::read_to_string(path)?;
  let mut words = Vec::new();
  for (line, word) in entries(&contents)
  {
    if word.contains(char::is_whitespace)
    {
      return Err(Error::invalid_config(
        format!(
          "{}:{}: expected one word per \
           line, found {:?}",
          path.display(),
          line,
          word
        )
      ));
    }
    words.push(word.to_lowercase());
  }
  log::debug!(
    "loaded {} words from {}",
    words.len(),
    path.display()
  );
  Ok(words)
}

fn entries(
  contents: &str
) -> impl Iterator<Item = (usize, &str)> {
  contents
    .lines()
    .enumerate()
    .map(|(idx, line)| (idx + 1, line.trim()))
    .filter(|(_, line)| {
      !line.is_empty()
        && !line.starts_with('#')
    })
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;

  use super::*;

  #[test]
  fn parse_skips_comments_and_blanks() {
    let words: Vec<_> =
      parse("# header\nApple\n\n  pear \n")
        .collect();
    assert_eq!(words, vec!["apple", "pear"]);
  }

  #[test]
  fn load_rejects_multi_word_lines() {
    let mut file = NamedTempFile::new()
      .expect("temp file");
    writeln!(file, "alpha\nnew york")
      .expect("write");
    let err =
      load(file.path()).unwrap_err();
    assert!(matches!(
      err,
      Error::InvalidConfig(msg) if msg.contains(":2:")
    ));
  }

  #[test]
  fn load_missing_file_is_io_error() {
    let err = load("/nonexistent/words.txt")
      .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
  }
}
