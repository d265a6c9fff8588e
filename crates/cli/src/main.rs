mod cmd;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{ExportArgs, ImportArgs, UserCommand, cmd_clean, cmd_export, cmd_import, cmd_info, cmd_unlock, cmd_user};
use output::{OutputFormat, print_error};

/// sampledata - import and export JSON sample data, optionally only once
#[derive(Parser)]
#[command(name = "sampledata")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Import a sample file and print it
  Import(ImportArgs),

  /// Export a JSON document or a record to a sample file
  Export(ExportArgs),

  /// Remove the lock marker of a sample file
  Unlock {
    /// Sample file name, with or without the .lock suffix
    name: String,
  },

  /// Delete every sample file and lock marker
  Clean,

  /// Manage the first record
  #[command(subcommand)]
  User(UserCommand),

  /// Show resolved locations and samples
  Info,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match &cli.command {
    Commands::Import(args) => cmd_import(args, cli.output),
    Commands::Export(args) => cmd_export(args, cli.output),
    Commands::Unlock { name } => cmd_unlock(name, cli.output),
    Commands::Clean => cmd_clean(cli.output),
    Commands::User(command) => cmd_user(command, cli.output),
    Commands::Info => cmd_info(cli.output),
  };

  match result {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::from(2)
    }
  }
}
