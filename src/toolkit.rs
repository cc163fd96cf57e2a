use crate::config::Config;
use crate::error::Result;
use crate::names::{
  self,
  NameList
};
use crate::replace::{
  self,
  ReplacementMap
};
use crate::spelling::{
  Dictionary,
  Misspelling,
  SpellChecker
};
use crate::stopwords::{
  self,
  StopWords
};
use crate::wordlist;

/// The reference data the dictionary
/// driven operations read from. Built
/// once, then shared read-only.
#[derive(Clone, Debug, Default)]
pub struct Toolkit {
  names:          NameList,
  stop_words:     StopWords,
  spelling:       SpellChecker,
  replacements:   ReplacementMap,
  case_sensitive: bool
}

impl Toolkit {
  pub fn new(
    names: NameList,
    spelling: SpellChecker,
    replacements: ReplacementMap
  ) -> Self {
    Self {
      names,
      stop_words: StopWords::bundled(),
      spelling,
      replacements,
      case_sensitive: false
    }
  }

  pub fn from_config(
    config: &Config
  ) -> Result<Self> {
    let mut names =
      match &config.names.file {
        | Some(path) => NameList::from_file(
          config.resolve(path)
        )?,
        | None => NameList::bundled()
      }
      .with_heuristic(config.names.heuristic);
    names.extend(&config.names.extra);

    let mut stop_words =
      match &config.stop_words.file {
        | Some(path) => StopWords::from_file(
          config.resolve(path)
        )?,
        | None => StopWords::bundled()
      };
    stop_words.extend(&config.stop_words.extra);

    let dictionary =
      match &config.spelling.dictionary_file {
        | Some(path) => Dictionary::from_file(
          config.resolve(path)
        )?,
        | None => Dictionary::bundled()
      };
    let mut ignored =
      config.spelling.ignore.clone();
    if let Some(path) =
      &config.spelling.ignore_file
    {
      ignored.extend(wordlist::load(
        config.resolve(path)
      )?);
    }
    let spelling = SpellChecker::new(dictionary)
      .with_max_distance(
        config.spelling.max_distance
      )
      .with_ignored(ignored);

    let mut replacements =
      match &config.replace.csv_file {
        | Some(path) => ReplacementMap::from_csv(
          config.resolve(path)
        )?,
        | None => ReplacementMap::new()
      };
    replacements.merge(
      ReplacementMap::from_pairs(
        config.replacements.clone()
      )?
    );

    log::debug!(
      "toolkit ready: {} names, {} stop \
       words, {} dictionary words, {} \
       replacements",
      names.len(),
      stop_words.len(),
      spelling.dictionary().len(),
      replacements.len()
    );
    Ok(
      Self::new(names, spelling, replacements)
        .with_stop_words(stop_words)
        .with_case_sensitive(
          config.replace.case_sensitive
        )
    )
  }

  pub fn with_case_sensitive(
    mut self,
    case_sensitive: bool
  ) -> Self {
    self.case_sensitive = case_sensitive;
    self
  }

  pub fn with_stop_words(
    mut self,
    stop_words: StopWords
  ) -> Self {
    self.stop_words = stop_words;
    self
  }

  pub fn with_replacements(
    mut self,
    replacements: ReplacementMap
  ) -> Self {
    self.replacements = replacements;
    self
  }

  pub fn names(&self) -> &NameList {
    &self.names
  }

  pub fn stop_words(&self) -> &StopWords {
    &self.stop_words
  }

  pub fn spell_checker(&self) -> &SpellChecker {
    &self.spelling
  }

  pub fn replacements(&self) -> &ReplacementMap {
    &self.replacements
  }

  pub fn case_sensitive(&self) -> bool {
    self.case_sensitive
  }

  pub fn remove_names(&self, text: &str) -> String {
    names::remove_names(text, &self.names)
  }

  pub fn remove_stopwords(
    &self,
    text: &str
  ) -> String {
    stopwords::remove_stopwords(
      text,
      &self.stop_words
    )
  }

  pub fn replace_words(&self, text: &str) -> String {
    replace::replace_words(
      text,
      &self.replacements,
      self.case_sensitive
    )
  }

  pub fn check_spelling(
    &self,
    text: &str
  ) -> Vec<Misspelling> {
    self.spelling.check(text)
  }

  pub fn correct_spelling(
    &self,
    text: &str
  ) -> String {
    self.spelling.correct(text)
  }
}
