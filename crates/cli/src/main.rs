//! wordfreq CLI - actor-style word frequency counting

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordfreq::config::Config;

mod commands;
mod logging;

use commands::{cmd_ask, cmd_config_show, cmd_coordinate};
use logging::init_logging;

#[derive(Parser)]
#[command(name = "wordfreq")]
#[command(about = "Count word frequencies with a pair of actors")]
#[command(after_help = "\
EXAMPLES:
  wordfreq coordinate                     # Life is Life / Dog eat Dog via the coordinator
  wordfreq coordinate \"a b a\" \"c\"         # Your own sentences
  wordfreq ask \"Life is Life\"             # Ask a bare counter, 5s deadline
  wordfreq ask --timeout-ms 100 \"x y\"     # Custom deadline")]
struct Cli {
  /// Config file (default: ~/.config/wordfreq/config.toml)
  #[arg(long, global = true, value_name = "FILE")]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Delegate sentences to a FrequencyCounter through a Coordinator
  Coordinate {
    /// Sentences to count (default: configured samples)
    texts: Vec<String>,
    /// Output each result as JSON
    #[arg(long)]
    json: bool,
  },
  /// Count one sentence with the ask pattern
  Ask {
    /// Sentence to count (default: configured sample)
    text: Option<String>,
    /// Reply deadline in milliseconds (default: actor.ask_timeout_ms)
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
    /// Output the result as JSON
    #[arg(long)]
    json: bool,
  },
  /// Show the effective configuration
  Config,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => Config::load_from(path).with_context(|| format!("Failed to load {}", path.display()))?,
    None => Config::load(),
  };

  init_logging(&config.log_level);

  match cli.command {
    Commands::Coordinate { texts, json } => cmd_coordinate(config, texts, json).await,
    Commands::Ask { text, timeout_ms, json } => cmd_ask(config, text, timeout_ms, json).await,
    Commands::Config => cmd_config_show(&config),
  }
}
