mod args;
mod batch;
mod commands;

use anyhow::{
  Context,
  Result
};
use clap::Parser;
use textprep::Config;

use crate::args::Cli;

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);
  let config = Config::load(&cli.config)
    .with_context(|| {
      format!(
        "load config {:?}",
        cli.config
      )
    })?;
  commands::run(cli.command, &config)
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    | 0 => "warn",
    | 1 => "info",
    | _ => "debug"
  };
  env_logger::Builder::from_env(
    env_logger::Env::default()
      .default_filter_or(level)
  )
  .init();
}
