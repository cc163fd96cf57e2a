use std::path::PathBuf;

use clap::{
  ArgAction,
  Parser,
  Subcommand
};
use textprep::Step;

#[derive(Debug, Parser)]
#[command(
  name = "textprep",
  about = "Text preprocessing \
           toolbox"
)]
pub struct Cli {
  /// Configuration file (TOML)
  #[arg(
    long,
    global = true,
    env = "TEXTPREP_CONFIG",
    default_value = "textprep.toml"
  )]
  pub config:  PathBuf,
  /// Increase log verbosity (-v info,
  /// -vv debug)
  #[arg(
    short,
    long,
    global = true,
    action = ArgAction::Count
  )]
  pub verbose: u8,
  #[command(subcommand)]
  pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Remove proper names from the text
  RemoveNames {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>
  },
  /// List `Expansion (ABBR)` pairs
  Abbreviations {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>,
    /// Print JSON instead of tab
    /// separated lines
    #[arg(long)]
    json:  bool
  },
  /// Replace words using the configured
  /// replacement map
  Replace {
    /// Input file (stdin when omitted)
    input:          Option<PathBuf>,
    /// Match keys exactly instead of
    /// ignoring case
    #[arg(long)]
    case_sensitive: bool,
    /// Extra `from,to` CSV map, merged
    /// over the configured one
    #[arg(long)]
    map:            Option<PathBuf>
  },
  /// Report misspelled words
  Spell {
    /// Input file (stdin when omitted)
    input:   Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long)]
    json:    bool,
    /// Print the corrected text instead
    /// of a report
    #[arg(long, conflicts_with = "json")]
    correct: bool
  },
  /// Print one word, or one sentence,
  /// per line
  Tokenize {
    /// Input file (stdin when omitted)
    input:     Option<PathBuf>,
    /// Split into sentences instead of
    /// words
    #[arg(long)]
    sentences: bool,
    /// Print a JSON array
    #[arg(long)]
    json:      bool
  },
  /// Collapse whitespace runs and trim
  Whitespace {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>
  },
  /// Normalize line endings to LF
  LineFeeds {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>
  },
  /// Run a single step by name
  Clean {
    /// Step name, e.g. remove_urls
    step:  Step,
    /// Input file (stdin when omitted)
    input: Option<PathBuf>
  },
  /// Run the configured pipeline
  Pipeline {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>,
    /// Steps to run instead of the
    /// configured ones (repeatable)
    #[arg(long = "step")]
    steps: Vec<Step>
  },
  /// Run the pipeline over a file or
  /// directory of files
  Batch {
    /// File or directory to process
    path: PathBuf,
    /// Directory for processed files
    /// and the manifest
    #[arg(long)]
    out:  PathBuf
  }
}
