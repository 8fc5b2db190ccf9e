//! Ask command: request/response with a deadline against a bare FrequencyCounter

use anyhow::Result;
use tracing::error;
use wordfreq::{
  actor::{ActorSystem, AskError},
  config::Config,
  frequency::FrequencyMap,
};

/// Count one sentence with the ask pattern and print the result
///
/// A timeout is reported as a failure, never printed as an empty result.
pub async fn cmd_ask(
  mut config: Config,
  text: Option<String>,
  timeout_ms: Option<u64>,
  json_output: bool,
) -> Result<()> {
  if let Some(timeout_ms) = timeout_ms {
    config.actor.ask_timeout_ms = timeout_ms;
  }
  let text = text.unwrap_or_else(|| config.samples.ask.clone());

  let system = ActorSystem::new(config);
  let result = system.ask_frequencies(&text).await;
  system.shutdown().await;

  let exit_code = ask_exit_code(&result);
  match result {
    Ok(frequencies) => {
      if json_output {
        println!("{}", serde_json::to_string(&frequencies)?);
      } else {
        println!("Total frequencies: {}", frequencies);
      }
      Ok(())
    }
    Err(AskError::Timeout(timeout)) => {
      error!("No answer from FrequencyCounter within {:?}", timeout);
      std::process::exit(exit_code);
    }
    Err(e) => {
      error!("Ask failed: {}", e);
      std::process::exit(exit_code);
    }
  }
}

/// Process exit code for an ask outcome: 0 on a reply, 2 on timeout, 1 otherwise
fn ask_exit_code(result: &Result<FrequencyMap, AskError>) -> i32 {
  match result {
    Ok(_) => 0,
    Err(AskError::Timeout(_)) => 2,
    Err(AskError::ActorGone | AskError::NoReply) => 1,
  }
}
