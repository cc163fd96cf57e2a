use std::collections::BTreeMap;
use std::fs;
use std::path::{
  Path,
  PathBuf
};

use serde::Deserialize;

use crate::error::{
  Error,
  Result
};
use crate::pipeline::Step;
use crate::spelling::DEFAULT_MAX_DISTANCE;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub names:        NamesConfig,
  #[serde(default)]
  pub stop_words:   StopWordsConfig,
  #[serde(default)]
  pub spelling:     SpellingConfig,
  #[serde(default)]
  pub replace:      ReplaceConfig,
  #[serde(default)]
  pub replacements: BTreeMap<String, String>,
  #[serde(default)]
  pub pipeline:     PipelineConfig,
  #[serde(default)]
  pub batch:        BatchConfig,
  #[serde(skip)]
  base_dir:         PathBuf
}

impl Default for Config {
  fn default() -> Self {
    Self {
      names:        NamesConfig::default(),
      stop_words:   StopWordsConfig::default(
      ),
      spelling:     SpellingConfig::default(
      ),
      replace:      ReplaceConfig::default(),
      replacements: BTreeMap::new(),
      pipeline:     PipelineConfig::default(
      ),
      batch:        BatchConfig::default(),
      base_dir:     PathBuf::from(".")
    }
  }
}

impl Config {
  /// A missing file yields the
  /// defaults. Relative paths inside
  /// the file resolve against its
  /// directory.
  pub fn load<P: AsRef<Path>>(
    path: P
  ) -> Result<Self> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
      log::debug!(
        "no config at {:?}, using \
         defaults",
        path_ref
      );
      return Ok(Self::default());
    }
    let contents =
      fs::read_to_string(path_ref)?;
    let mut config =
      Self::from_toml_str(&contents)
        .map_err(|err| {
          Error::invalid_config(format!(
            "{}: {}",
            path_ref.display(),
            err
          ))
        })?;
    config.base_dir = path_ref
      .parent()
      .filter(|p| {
        !p.as_os_str().is_empty()
      })
      .map(Path::to_path_buf)
      .unwrap_or_else(|| {
        PathBuf::from(".")
      });
    log::info!(
      "loaded config from {:?}",
      path_ref
    );
    Ok(config)
  }

  pub fn from_toml_str(
    contents: &str
  ) -> Result<Self> {
    toml::from_str(contents).map_err(
      |err| Error::invalid_config(err.to_string())
    )
  }

  pub fn resolve(
    &self,
    path: &Path
  ) -> PathBuf {
    if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.base_dir.join(path)
    }
  }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NamesConfig {
  #[serde(default)]
  pub heuristic: bool,
  #[serde(default)]
  pub extra:     Vec<String>,
  #[serde(default)]
  pub file:      Option<PathBuf>
}

/// `file` replaces the bundled list;
/// `extra` adds to whichever is used.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StopWordsConfig {
  #[serde(default)]
  pub extra: Vec<String>,
  #[serde(default)]
  pub file:  Option<PathBuf>
}

#[derive(Clone, Debug, Deserialize)]
pub struct SpellingConfig {
  #[serde(
    default = "default_max_distance"
  )]
  pub max_distance:    usize,
  #[serde(default)]
  pub dictionary_file: Option<PathBuf>,
  #[serde(default)]
  pub ignore:          Vec<String>,
  #[serde(default)]
  pub ignore_file:     Option<PathBuf>
}

impl Default for SpellingConfig {
  fn default() -> Self {
    Self {
      max_distance:
        default_max_distance(),
      dictionary_file: None,
      ignore:          Vec::new(),
      ignore_file:     None
    }
  }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReplaceConfig {
  #[serde(default)]
  pub case_sensitive: bool,
  #[serde(default)]
  pub csv_file:       Option<PathBuf>
}

#[derive(Clone, Debug, Deserialize)]
pub struct PipelineConfig {
  #[serde(default = "default_steps")]
  pub steps: Vec<Step>
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      steps: default_steps()
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct BatchConfig {
  #[serde(
    default = "default_extensions"
  )]
  pub extensions:      Vec<String>,
  #[serde(default = "default_true")]
  pub skip_duplicates: bool
}

impl Default for BatchConfig {
  fn default() -> Self {
    Self {
      extensions:
        default_extensions(),
      skip_duplicates: true
    }
  }
}

fn default_true() -> bool {
  true
}

fn default_max_distance() -> usize {
  DEFAULT_MAX_DISTANCE
}

fn default_steps() -> Vec<Step> {
  vec![
    Step::HandleLineFeeds,
    Step::RemoveWhitespace,
  ]
}

fn default_extensions() -> Vec<String> {
  vec!["txt".into(), "md".into()]
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn missing_file_gives_defaults() {
    let config = Config::load(
      "/nonexistent/textprep.toml"
    )
    .expect("defaults");
    assert_eq!(
      config.spelling.max_distance,
      2
    );
    assert_eq!(
      config.pipeline.steps,
      vec![
        Step::HandleLineFeeds,
        Step::RemoveWhitespace
      ]
    );
    assert!(config.batch.skip_duplicates);
    assert!(config.replacements.is_empty());
  }

  #[test]
  fn parses_every_section() {
    let config = Config::from_toml_str(
      r#"
        [names]
        heuristic = true
        extra = ["Zorblax"]

        [stop_words]
        extra = ["via"]

        [spelling]
        max_distance = 1
        ignore = ["rustc"]

        [replace]
        case_sensitive = true

        [replacements]
        vs = "versus"

        [pipeline]
        steps = ["remove_names", "replace_words"]

        [batch]
        extensions = ["log"]
        skip_duplicates = false
      "#
    )
    .expect("valid config");
    assert!(config.names.heuristic);
    assert_eq!(config.names.extra, vec!["Zorblax"]);
    assert_eq!(
      config.stop_words.extra,
      vec!["via"]
    );
    assert_eq!(config.spelling.max_distance, 1);
    assert!(config.replace.case_sensitive);
    assert_eq!(
      config.replacements.get("vs").map(String::as_str),
      Some("versus")
    );
    assert_eq!(
      config.pipeline.steps,
      vec![Step::RemoveNames, Step::ReplaceWords]
    );
    assert_eq!(config.batch.extensions, vec!["log"]);
    assert!(!config.batch.skip_duplicates);
  }

  #[test]
  fn non_string_replacements_are_rejected() {
    let err = Config::from_toml_str(
      "[replacements]\nvs = 3\n"
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
  }

  #[test]
  fn unknown_step_is_rejected() {
    let err = Config::from_toml_str(
      "[pipeline]\nsteps = [\"translate\"]\n"
    )
    .unwrap_err();
    match err {
      | Error::InvalidConfig(msg) => {
        assert!(msg.contains("translate"))
      }
      | other => panic!("unexpected {other:?}")
    }
  }

  #[test]
  fn relative_paths_follow_config_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("textprep.toml");
    let mut file =
      fs::File::create(&path).expect("create");
    writeln!(
      file,
      "[spelling]\ndictionary_file = \"words.txt\""
    )
    .expect("write");
    let config =
      Config::load(&path).expect("load");
    let dictionary = config.spelling.dictionary_file.clone().expect("set");
    assert_eq!(
      config.resolve(&dictionary),
      dir.path().join("words.txt")
    );
    assert_eq!(
      config.resolve(Path::new("/abs/x.txt")),
      PathBuf::from("/abs/x.txt")
    );
  }
}
