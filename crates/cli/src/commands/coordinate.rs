//! Coordinator command: delegate sentences through a Coordinator actor

use anyhow::{Context, Result};
use tracing::info;
use wordfreq::{actor::ActorSystem, config::Config};

/// Inject each text into a Coordinator and print every aggregated result
pub async fn cmd_coordinate(config: Config, texts: Vec<String>, json_output: bool) -> Result<()> {
  let texts = if texts.is_empty() {
    config.samples.coordinator.clone()
  } else {
    texts
  };

  let system = ActorSystem::new(config);
  let results = system.run_coordinator(&texts).await;
  system.shutdown().await;

  let results = results.context("Coordinator did not complete")?;
  info!(results = results.len(), "All requests aggregated");

  for frequencies in &results {
    if json_output {
      println!("{}", serde_json::to_string(frequencies)?);
    } else {
      println!("Aggregated frequencies: {}", frequencies);
    }
  }

  Ok(())
}
