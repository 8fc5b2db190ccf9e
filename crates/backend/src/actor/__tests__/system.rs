//! ActorSystem bootstrap tests.

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use pretty_assertions::assert_eq;
  use tokio::sync::mpsc;

  use crate::{
    actor::{
      __tests__::helpers::{RECV_TIMEOUT, recv_within},
      ask::AskError,
      system::ActorSystem,
    },
    domain::{
      config::{ActorConfig, Config},
      frequency::FrequencyMap,
    },
  };

  fn fast_config() -> Config {
    Config {
      actor: ActorConfig {
        ask_timeout_ms: 2000,
        shutdown_grace_ms: 10,
      },
      ..Default::default()
    }
  }

  /// Test: both sample sentences come back through the coordinator.
  #[tokio::test]
  async fn test_run_coordinator_samples() {
    let system = ActorSystem::new(fast_config());
    let texts = system.config().samples.coordinator.clone();

    let mut results = system.run_coordinator(&texts).await.expect("results");
    results.sort_by_key(|m| m.to_string());

    assert_eq!(
      results,
      vec![
        FrequencyMap::from([("Dog", 2), ("eat", 1)]),
        FrequencyMap::from([("Life", 2), ("is", 1)]),
      ]
    );
    system.shutdown().await;
  }

  /// Test: no requests, no results, no waiting.
  #[tokio::test]
  async fn test_run_coordinator_no_texts() {
    let system = ActorSystem::new(fast_config());
    let results = system.run_coordinator(&[]).await.expect("results");
    assert!(results.is_empty());
  }

  /// Test: the ask path uses the configured deadline and a fresh counter.
  #[tokio::test]
  async fn test_ask_frequencies() {
    let system = ActorSystem::new(fast_config());
    let result = system.ask_frequencies("Life is Life").await;
    assert_eq!(result, Ok(FrequencyMap::from([("Life", 2), ("is", 1)])));
  }

  /// Test: graphs spawned by the system stop on shutdown.
  #[tokio::test]
  async fn test_shutdown_stops_spawned_actors() {
    let system = ActorSystem::new(fast_config());
    let counter = system.spawn_counter();
    let (tx, mut aggregated) = mpsc::unbounded_channel();
    let coordinator = system.spawn_coordinator(Some(tx));

    coordinator.get_frequencies("still running").unwrap();
    assert_eq!(
      recv_within(&mut aggregated, RECV_TIMEOUT).await,
      Some(FrequencyMap::from([("still", 1), ("running", 1)]))
    );

    system.shutdown().await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(system.is_shutdown());
    assert!(counter.addr().is_closed());
    assert!(coordinator.addr().is_closed());
    assert_eq!(
      counter.ask_count("x", Duration::from_millis(100)).await,
      Err(AskError::ActorGone)
    );
  }
}
