use std::fs;
use std::io::{
  self,
  Read
};
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  Result
};
use textprep::{
  Config,
  Pipeline,
  ReplacementMap,
  Toolkit
};

use crate::args::Command;
use crate::batch;

pub fn run(
  command: Command,
  config: &Config
) -> Result<()> {
  match command {
    | Command::RemoveNames {
      input
    } => {
      let text = read_input(input.as_deref())?;
      let toolkit = build_toolkit(config)?;
      emit(&toolkit.remove_names(&text));
    }
    | Command::Abbreviations {
      input,
      json
    } => {
      let text = read_input(input.as_deref())?;
      let found: Vec<_> =
        textprep::find_abbreviations(&text)
          .collect();
      if json {
        println!(
          "{}",
          serde_json::to_string_pretty(&found)?
        );
      } else {
        for pair in found {
          println!(
            "{}\t{}",
            pair.expansion, pair.abbreviation
          );
        }
      }
    }
    | Command::Replace {
      input,
      case_sensitive,
      map
    } => {
      let text = read_input(input.as_deref())?;
      let mut toolkit = build_toolkit(config)?;
      if let Some(path) = map {
        let mut replacements =
          toolkit.replacements().clone();
        replacements.merge(
          ReplacementMap::from_csv(&path)
            .with_context(|| {
              format!(
                "load replacement map {:?}",
                path
              )
            })?
        );
        toolkit =
          toolkit.with_replacements(replacements);
      }
      if case_sensitive {
        toolkit = toolkit.with_case_sensitive(true);
      }
      emit(&toolkit.replace_words(&text));
    }
    | Command::Spell {
      input,
      json,
      correct
    } => {
      let text = read_input(input.as_deref())?;
      let toolkit = build_toolkit(config)?;
      if correct {
        emit(&toolkit.correct_spelling(&text));
      } else {
        let found = toolkit.check_spelling(&text);
        if json {
          println!(
            "{}",
            serde_json::to_string_pretty(&found)?
          );
        } else {
          for miss in found {
            println!(
              "{} -> {}",
              miss.word,
              miss
                .suggestion
                .as_deref()
                .unwrap_or("(no suggestion)")
            );
          }
        }
      }
    }
    | Command::Tokenize {
      input,
      sentences,
      json
    } => {
      let text = read_input(input.as_deref())?;
      let tokens = if sentences {
        textprep::tokenize_sentences(&text)
      } else {
        textprep::tokenize_words(&text)
      };
      if json {
        println!(
          "{}",
          serde_json::to_string_pretty(&tokens)?
        );
      } else {
        for token in tokens {
          println!("{}", token);
        }
      }
    }
    | Command::Whitespace {
      input
    } => {
      let text = read_input(input.as_deref())?;
      emit(&textprep::remove_whitespace(&text));
    }
    | Command::LineFeeds {
      input
    } => {
      let text = read_input(input.as_deref())?;
      emit(&textprep::handle_line_feeds(&text));
    }
    | Command::Clean {
      step,
      input
    } => {
      let text = read_input(input.as_deref())?;
      let toolkit = build_toolkit(config)?;
      emit(&step.apply(&toolkit, &text));
    }
    | Command::Pipeline {
      input,
      steps
    } => {
      let text = read_input(input.as_deref())?;
      let pipeline = build_pipeline(config, steps)?;
      for line in pipeline.describe() {
        log::info!("{}", line);
      }
      emit(&pipeline.execute(&text));
    }
    | Command::Batch {
      path,
      out
    } => {
      let pipeline =
        build_pipeline(config, Vec::new())?;
      let summary = batch::run(
        &path,
        &out,
        &pipeline,
        &config.batch
      )?;
      println!(
        "Processed {} files ({} duplicates, \
         {} not UTF-8 skipped) into {}",
        summary.processed,
        summary.skipped_duplicates,
        summary.skipped_invalid,
        out.display()
      );
    }
  }
  Ok(())
}

fn build_toolkit(config: &Config) -> Result<Toolkit> {
  Toolkit::from_config(config)
    .context("load reference data")
}

fn build_pipeline(
  config: &Config,
  steps: Vec<textprep::Step>
) -> Result<Pipeline> {
  let mut pipeline = Pipeline::from_config(config)
    .context("build pipeline")?;
  if !steps.is_empty() {
    pipeline.clear();
    pipeline.add_all(steps);
  }
  if pipeline.is_empty() {
    log::warn!("the pipeline is empty");
  }
  Ok(pipeline)
}

fn read_input(path: Option<&Path>) -> Result<String> {
  let bytes = match path {
    | Some(path) => fs::read(path)
      .with_context(|| {
        format!("read input {:?}", path)
      })?,
    | None => {
      let mut buffer = Vec::new();
      io::stdin()
        .read_to_end(&mut buffer)
        .context("read stdin")?;
      buffer
    }
  };
  let source = path
    .map(Path::to_path_buf)
    .unwrap_or_else(|| PathBuf::from("<stdin>"));
  textprep::decode_text(bytes)
    .with_context(|| format!("decode {:?}", source))
}

fn emit(text: &str) {
  if text.ends_with('\n') {
    print!("{}", text);
  } else {
    println!("{}", text);
  }
}
