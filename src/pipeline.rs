use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Deserializer
};

use crate::cleaning;
use crate::config::Config;
use crate::error::{
  Error,
  Result
};
use crate::normalization;
use crate::toolkit::Toolkit;

/// Every text-to-text operation. Those
/// returning sequences (abbreviations,
/// spelling reports) are not steps.
#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum Step {
  RemoveNames,
  RemoveStopwords,
  ReplaceWords,
  CorrectSpelling,
  RemoveWhitespace,
  HandleLineFeeds,
  MakeLowercase,
  MakeUppercase,
  RemoveNumbers,
  RemoveUrls,
  RemoveEmailAddresses,
  RemovePhoneNumbers,
  RemoveSocialSecurityNumbers,
  RemoveCreditCardNumbers,
  RemovePunctuation,
  RemoveSpecialCharacters,
  KeepAlphaNumeric,
  RemoveItemizedBullets,
  NormalizeUnicode
}

impl Step {
  pub const ALL: [Step; 19] = [
    Step::RemoveNames,
    Step::RemoveStopwords,
    Step::ReplaceWords,
    Step::CorrectSpelling,
    Step::RemoveWhitespace,
    Step::HandleLineFeeds,
    Step::MakeLowercase,
    Step::MakeUppercase,
    Step::RemoveNumbers,
    Step::RemoveUrls,
    Step::RemoveEmailAddresses,
    Step::RemovePhoneNumbers,
    Step::RemoveSocialSecurityNumbers,
    Step::RemoveCreditCardNumbers,
    Step::RemovePunctuation,
    Step::RemoveSpecialCharacters,
    Step::KeepAlphaNumeric,
    Step::RemoveItemizedBullets,
    Step::NormalizeUnicode
  ];

  pub fn name(&self) -> &'static str {
    match self {
      | Step::RemoveNames => "remove_names",
      | Step::RemoveStopwords => {
        "remove_stopwords"
      }
      | Step::ReplaceWords => "replace_words",
      | Step::CorrectSpelling => {
        "correct_spelling"
      }
      | Step::RemoveWhitespace => {
        "remove_whitespace"
      }
      | Step::HandleLineFeeds => {
        "handle_line_feeds"
      }
      | Step::MakeLowercase => "make_lowercase",
      | Step::MakeUppercase => "make_uppercase",
      | Step::RemoveNumbers => "remove_numbers",
      | Step::RemoveUrls => "remove_urls",
      | Step::RemoveEmailAddresses => {
        "remove_email_addresses"
      }
      | Step::RemovePhoneNumbers => {
        "remove_phone_numbers"
      }
      | Step::RemoveSocialSecurityNumbers => {
        "remove_social_security_numbers"
      }
      | Step::RemoveCreditCardNumbers => {
        "remove_credit_card_numbers"
      }
      | Step::RemovePunctuation => {
        "remove_punctuation"
      }
      | Step::RemoveSpecialCharacters => {
        "remove_special_characters"
      }
      | Step::KeepAlphaNumeric => {
        "keep_alpha_numeric"
      }
      | Step::RemoveItemizedBullets => {
        "remove_itemized_bullets"
      }
      | Step::NormalizeUnicode => {
        "normalize_unicode"
      }
    }
  }

  pub fn apply(
    &self,
    toolkit: &Toolkit,
    text: &str
  ) -> String {
    match self {
      | Step::RemoveNames => {
        toolkit.remove_names(text)
      }
      | Step::RemoveStopwords => {
        toolkit.remove_stopwords(text)
      }
      | Step::ReplaceWords => {
        toolkit.replace_words(text)
      }
      | Step::CorrectSpelling => {
        toolkit.correct_spelling(text)
      }
      | Step::RemoveWhitespace => {
        normalization::remove_whitespace(text)
      }
      | Step::HandleLineFeeds => {
        normalization::handle_line_feeds(text)
      }
      | Step::MakeLowercase => {
        cleaning::make_lowercase(text)
      }
      | Step::MakeUppercase => {
        cleaning::make_uppercase(text)
      }
      | Step::RemoveNumbers => {
        cleaning::remove_numbers(text)
      }
      | Step::RemoveUrls => {
        cleaning::remove_urls(text)
      }
      | Step::RemoveEmailAddresses => {
        cleaning::remove_email_addresses(text)
      }
      | Step::RemovePhoneNumbers => {
        cleaning::remove_phone_numbers(text)
      }
      | Step::RemoveSocialSecurityNumbers => {
        cleaning::remove_social_security_numbers(
          text
        )
      }
      | Step::RemoveCreditCardNumbers => {
        cleaning::remove_credit_card_numbers(
          text
        )
      }
      | Step::RemovePunctuation => {
        cleaning::remove_punctuation(text, None)
      }
      | Step::RemoveSpecialCharacters => {
        cleaning::remove_special_characters(
          text, None
        )
      }
      | Step::KeepAlphaNumeric => {
        cleaning::keep_alpha_numeric(text)
      }
      | Step::RemoveItemizedBullets => {
        cleaning::remove_itemized_bullets(text)
      }
      | Step::NormalizeUnicode => {
        cleaning::normalize_unicode(text)
      }
    }
  }
}

impl fmt::Display for Step {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Accepts `remove_names`,
/// `remove-names` and any casing.
impl FromStr for Step {
  type Err = Error;

  fn from_str(value: &str) -> Result<Self> {
    let normalized = value
      .trim()
      .to_lowercase()
      .replace('-', "_");
    Step::ALL
      .into_iter()
      .find(|step| step.name() == normalized)
      .ok_or_else(|| {
        Error::invalid_config(format!(
          "unknown step '{}'",
          value
        ))
      })
  }
}

impl<'de> Deserialize<'de> for Step {
  fn deserialize<D>(
    deserializer: D
  ) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    struct StepVisitor;

    impl serde::de::Visitor<'_> for StepVisitor {
      type Value = Step;

      fn expecting(
        &self,
        formatter: &mut fmt::Formatter<'_>
      ) -> fmt::Result {
        formatter.write_str(
          "a step name such as \
           remove_whitespace"
        )
      }

      fn visit_str<E>(
        self,
        value: &str
      ) -> std::result::Result<Self::Value, E>
      where
        E: serde::de::Error
      {
        value
          .parse()
          .map_err(serde::de::Error::custom)
      }
    }

    deserializer.deserialize_str(StepVisitor)
  }
}

/// An ordered, duplicate free chain of
/// steps over one toolkit.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
  toolkit: Toolkit,
  steps:   Vec<Step>
}

impl Pipeline {
  pub fn new(toolkit: Toolkit) -> Self {
    Self {
      toolkit,
      steps: Vec::new()
    }
  }

  pub fn from_config(
    config: &Config
  ) -> Result<Self> {
    let mut pipeline =
      Self::new(Toolkit::from_config(config)?);
    pipeline.add_all(
      config.pipeline.steps.iter().copied()
    );
    Ok(pipeline)
  }

  pub fn toolkit(&self) -> &Toolkit {
    &self.toolkit
  }

  /// Appends `step`; a step already in
  /// the chain is left where it is.
  pub fn add(&mut self, step: Step) -> bool {
    if self.steps.contains(&step) {
      log::warn!(
        "{step} is already in the pipeline"
      );
      return false;
    }
    self.steps.push(step);
    log::info!(
      "{step} has been added to the pipeline"
    );
    true
  }

  pub fn add_all<I>(&mut self, steps: I)
  where
    I: IntoIterator<Item = Step>
  {
    for step in steps {
      self.add(step);
    }
  }

  pub fn remove(&mut self, step: Step) -> bool {
    match self.steps.iter().position(|s| *s == step) {
      | Some(idx) => {
        self.steps.remove(idx);
        log::info!(
          "{step} has been removed from the \
           pipeline"
        );
        true
      }
      | None => {
        log::error!(
          "{step} is not in the pipeline"
        );
        false
      }
    }
  }

  pub fn clear(&mut self) {
    if self.steps.is_empty() {
      log::info!("the pipeline is already empty");
    } else {
      self.steps.clear();
      log::info!(
        "all steps have been removed from \
         the pipeline"
      );
    }
  }

  pub fn steps(&self) -> &[Step] {
    &self.steps
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  /// Numbered listing, `1: remove_names`.
  pub fn describe(&self) -> Vec<String> {
    self
      .steps
      .iter()
      .enumerate()
      .map(|(idx, step)| {
        format!("{}: {}", idx + 1, step)
      })
      .collect()
  }

  pub fn execute(&self, text: &str) -> String {
    let mut current = text.to_string();
    for step in &self.steps {
      current = step.apply(&self.toolkit, &current);
      log::debug!(
        "{step} -> {} bytes",
        current.len()
      );
    }
    current
  }
}
