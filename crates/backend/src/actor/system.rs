//! ActorSystem - explicit construction of the actor graph
//!
//! There is no global registry of actors. The system owns a root
//! `CancellationToken`; every actor graph it builds runs on a child token so
//! the graph can be torn down on its own or together with everything else.
//!
//! # Entry paths
//!
//! ```text
//! run_coordinator:  ActorSystem ─▶ Coordinator ─▶ FrequencyCounter
//! ask_frequencies:  ActorSystem ─────ask────────▶ FrequencyCounter
//! ```

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{
  ask::AskError,
  coordinator::{CoordinatorActor, CoordinatorConfig},
  counter::FrequencyCounterActor,
  handle::{CoordinatorHandle, FrequencyCounterHandle, SendError},
};
use crate::domain::{config::Config, frequency::FrequencyMap};

// ============================================================================
// Errors
// ============================================================================

/// Errors from the coordinator entry path
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
  #[error("Failed to send request: {0}")]
  Send(#[from] SendError),
  #[error("Timed out waiting for results ({received} of {expected} received)")]
  Timeout { received: usize, expected: usize },
  #[error("Coordinator stopped before all results arrived ({received} of {expected} received)")]
  Stopped { received: usize, expected: usize },
}

// ============================================================================
// ActorSystem
// ============================================================================

/// Builds actor graphs and owns their shutdown
pub struct ActorSystem {
  config: Config,
  cancel: CancellationToken,
}

impl ActorSystem {
  pub fn new(config: Config) -> Self {
    Self {
      config,
      cancel: CancellationToken::new(),
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Spawn a standalone FrequencyCounter
  pub fn spawn_counter(&self) -> FrequencyCounterHandle {
    FrequencyCounterActor::spawn("counter", self.cancel.child_token())
  }

  /// Spawn a Coordinator (and the FrequencyCounter it owns)
  ///
  /// If `aggregated` is given, every aggregated map is also sent there.
  pub fn spawn_coordinator(&self, aggregated: Option<mpsc::UnboundedSender<FrequencyMap>>) -> CoordinatorHandle {
    CoordinatorActor::spawn(CoordinatorConfig { aggregated }, self.cancel.child_token())
  }

  /// Send every text through a fresh Coordinator and collect the results
  ///
  /// Results arrive in completion order, which need not match `texts`. Each
  /// wait for the next result is bounded by the configured ask timeout.
  pub async fn run_coordinator(&self, texts: &[String]) -> Result<Vec<FrequencyMap>, SystemError> {
    let cancel = self.cancel.child_token();
    let (sink_tx, mut sink_rx) = mpsc::unbounded_channel();
    let coordinator = CoordinatorActor::spawn(
      CoordinatorConfig {
        aggregated: Some(sink_tx),
      },
      cancel.clone(),
    );

    let result = self.drive_coordinator(&coordinator, &mut sink_rx, texts).await;

    cancel.cancel();
    result
  }

  async fn drive_coordinator(
    &self,
    coordinator: &CoordinatorHandle,
    sink_rx: &mut mpsc::UnboundedReceiver<FrequencyMap>,
    texts: &[String],
  ) -> Result<Vec<FrequencyMap>, SystemError> {
    let expected = texts.len();
    info!(requests = expected, "Injecting requests into coordinator");

    for text in texts {
      coordinator.get_frequencies(text.as_str())?;
    }

    let timeout = self.config.actor.ask_timeout();
    let mut results = Vec::with_capacity(expected);
    while results.len() < expected {
      match tokio::time::timeout(timeout, sink_rx.recv()).await {
        Ok(Some(frequencies)) => results.push(frequencies),
        Ok(None) => {
          return Err(SystemError::Stopped {
            received: results.len(),
            expected,
          });
        }
        Err(_) => {
          return Err(SystemError::Timeout {
            received: results.len(),
            expected,
          });
        }
      }
    }
    Ok(results)
  }

  /// Count `text` on a bare FrequencyCounter using the ask pattern
  pub async fn ask_frequencies(&self, text: &str) -> Result<FrequencyMap, AskError> {
    let cancel = self.cancel.child_token();
    let counter = FrequencyCounterActor::spawn("counter", cancel.clone());

    let result = counter.ask_count(text, self.config.actor.ask_timeout()).await;

    cancel.cancel();
    result
  }

  /// Cancel every actor spawned by this system and give them a moment to stop
  pub async fn shutdown(&self) {
    debug!("Shutting down actor system");
    self.cancel.cancel();
    tokio::time::sleep(self.config.actor.shutdown_grace()).await;
    info!("Actor system stopped");
  }

  pub fn is_shutdown(&self) -> bool {
    self.cancel.is_cancelled()
  }
}
