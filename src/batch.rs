use std::collections::HashSet;
use std::fs::{
  self,
  File
};
use std::io::Write;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  Result
};
use chrono::Utc;
use serde::Serialize;
use sha2::{
  Digest,
  Sha256
};
use textprep::Pipeline;
use textprep::config::BatchConfig;
use walkdir::WalkDir;

const MANIFEST_JSONL: &str =
  "manifest.jsonl";

#[derive(Debug, Serialize)]
struct ManifestRecord {
  source:       String,
  hash:         String,
  output:       String,
  bytes_in:     usize,
  bytes_out:    usize,
  misspellings: usize,
  processed_at: String
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
  pub processed:          usize,
  pub skipped_duplicates: usize,
  pub skipped_invalid:    usize
}

pub fn run(
  path: &Path,
  out_dir: &Path,
  pipeline: &Pipeline,
  config: &BatchConfig
) -> Result<BatchSummary> {
  let mut summary = BatchSummary::default();
  let source_files =
    collect_sources(path, &config.extensions);
  if source_files.is_empty() {
    log::warn!(
      "no files with extensions {:?} \
       found at {:?}",
      config.extensions,
      path
    );
    return Ok(summary);
  }
  fs::create_dir_all(out_dir).with_context(
    || {
      format!(
        "create output directory {:?}",
        out_dir
      )
    }
  )?;
  let manifest_path =
    out_dir.join(MANIFEST_JSONL);
  let mut manifest =
    File::create(&manifest_path)
      .with_context(|| {
        format!(
          "create manifest {:?}",
          manifest_path
        )
      })?;
  let mut seen = HashSet::new();
  for file in source_files {
    let bytes =
      fs::read(&file).with_context(|| {
        format!("read file {:?}", file)
      })?;
    let text = match textprep::decode_text(
      bytes
    ) {
      | Ok(text) => text,
      | Err(err) => {
        log::warn!(
          "skipping {:?}: {}",
          file,
          err
        );
        summary.skipped_invalid += 1;
        continue;
      }
    };
    let hash = hash_text(&text);
    if config.skip_duplicates
      && !seen.insert(hash.clone())
    {
      log::info!(
        "skipping duplicate content in \
         {:?}",
        file
      );
      summary.skipped_duplicates += 1;
      continue;
    }
    let output = pipeline.execute(&text);
    let target = out_dir
      .join(relative_target(path, &file));
    if let Some(parent) = target.parent() {
      fs::create_dir_all(parent)
        .with_context(|| {
          format!(
            "create output directory {:?}",
            parent
          )
        })?;
    }
    fs::write(&target, &output)
      .with_context(|| {
        format!("write {:?}", target)
      })?;
    let record = ManifestRecord {
      source:       file
        .to_string_lossy()
        .into(),
      hash,
      output:       target
        .to_string_lossy()
        .into(),
      bytes_in:     text.len(),
      bytes_out:    output.len(),
      misspellings: pipeline
        .toolkit()
        .check_spelling(&output)
        .len(),
      processed_at: Utc::now()
        .to_rfc3339()
    };
    let line = serde_json::to_string(&record)?;
    writeln!(manifest, "{}", line)?;
    log::debug!(
      "processed {:?} -> {:?}",
      file,
      target
    );
    summary.processed += 1;
  }
  Ok(summary)
}

fn collect_sources(
  path: &Path,
  extensions: &[String]
) -> Vec<PathBuf> {
  if path.is_file() {
    return vec![path.to_path_buf()];
  }
  let mut files: Vec<PathBuf> =
    WalkDir::new(path)
      .into_iter()
      .filter_map(|entry| entry.ok())
      .filter(|entry| {
        entry.file_type().is_file()
      })
      .map(|entry| entry.into_path())
      .filter(|file| {
        has_extension(file, extensions)
      })
      .collect();
  files.sort();
  files
}

fn has_extension(
  file: &Path,
  extensions: &[String]
) -> bool {
  file
    .extension()
    .map(|ext| {
      ext.to_string_lossy().to_lowercase()
    })
    .is_some_and(|ext| {
      extensions
        .iter()
        .any(|e| e.eq_ignore_ascii_case(&ext))
    })
}

/// Keeps the layout under `root`; a
/// single input file keeps its name.
fn relative_target(
  root: &Path,
  file: &Path
) -> PathBuf {
  match file.strip_prefix(root) {
    | Ok(relative)
      if !relative.as_os_str().is_empty() =>
    {
      relative.to_path_buf()
    }
    | _ => file
      .file_name()
      .map(PathBuf::from)
      .unwrap_or_else(|| {
        PathBuf::from("output.txt")
      })
  }
}

fn hash_text(text: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(text.as_bytes());
  format!("{:x}", hasher.finalize())
}
