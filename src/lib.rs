//! Composable text preprocessing: name
//! and stop word removal, abbreviation
//! detection, dictionary replacement,
//! spell checking, scrubbing of
//! personal numbers and whitespace /
//! line ending normalization.
//!
//! Every operation is a pure function
//! over `&str`. Reference data (names,
//! stop words, dictionary,
//! replacements) is passed in
//! explicitly, usually through a
//! [`Toolkit`].

pub mod abbreviation;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod names;
pub mod normalization;
pub mod pipeline;
pub mod replace;
pub mod spelling;
pub mod stopwords;
pub mod token;
pub mod toolkit;
pub mod wordlist;

pub use abbreviation::{
  Abbreviation,
  Abbreviations,
  find_abbreviations
};
pub use config::Config;
pub use error::{
  Error,
  Result,
  decode_text
};
pub use names::{
  NameList,
  remove_names
};
pub use normalization::{
  handle_line_feeds,
  remove_whitespace
};
pub use pipeline::{
  Pipeline,
  Step
};
pub use replace::{
  ReplacementMap,
  replace_words
};
pub use spelling::{
  Dictionary,
  Misspelling,
  SpellChecker,
  check_spelling,
  correct_spelling
};
pub use stopwords::{
  StopWords,
  remove_stopwords
};
pub use token::{
  tokenize_sentences,
  tokenize_words
};
pub use toolkit::Toolkit;
