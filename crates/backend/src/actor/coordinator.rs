//! CoordinatorActor - delegates counting to an owned FrequencyCounter
//!
//! The coordinator spawns its worker at startup and builds one reply adapter
//! over its own mailbox. Every `GetFrequencies` is forwarded as a `Count`
//! whose reply address is that adapter, so the worker's `Counted` reply comes
//! back as `AggregateFrequencies` without the worker knowing the
//! coordinator's message type.
//!
//! ```text
//! caller ──GetFrequencies──▶ Coordinator ──Count──▶ FrequencyCounter
//!                               ▲                        │
//!                               └─AggregateFrequencies◀──┘ (adapter)
//! ```

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{
  address::{ActorRef, MessageAdapter},
  counter::FrequencyCounterActor,
  handle::{CoordinatorHandle, FrequencyCounterHandle},
  message::{CoordinatorCommand, Counted},
};
use crate::domain::frequency::FrequencyMap;

/// Configuration for the CoordinatorActor
#[derive(Debug, Clone, Default)]
pub struct CoordinatorConfig {
  /// Receives a copy of every aggregated map, if set
  pub aggregated: Option<mpsc::UnboundedSender<FrequencyMap>>,
}

/// The coordinator actor
///
/// # Lifecycle
///
/// Single steady state. The coordinator holds an address to its own mailbox
/// (inside the adapter), so it only stops when its CancellationToken is
/// triggered. Its worker runs on a child token and stops with it.
pub struct CoordinatorActor {
  config: CoordinatorConfig,
  worker: FrequencyCounterHandle,
  adapter: MessageAdapter<Counted, CoordinatorCommand>,
  rx: mpsc::UnboundedReceiver<CoordinatorCommand>,
  cancel: CancellationToken,
}

impl CoordinatorActor {
  /// Spawn the coordinator together with the FrequencyCounter it owns
  pub fn spawn(config: CoordinatorConfig, cancel: CancellationToken) -> CoordinatorHandle {
    let worker = FrequencyCounterActor::spawn("worker", cancel.child_token());
    Self::spawn_with_worker(config, worker, cancel)
  }

  /// Spawn the coordinator delegating to an existing worker address
  pub fn spawn_with_worker(
    config: CoordinatorConfig,
    worker: FrequencyCounterHandle,
    cancel: CancellationToken,
  ) -> CoordinatorHandle {
    let (addr, rx) = ActorRef::mailbox("coordinator");
    let adapter = addr.adapter(|counted: Counted| CoordinatorCommand::from(counted));

    let actor = Self {
      config,
      worker,
      adapter,
      rx,
      cancel,
    };
    tokio::spawn(actor.run());
    CoordinatorHandle::new(addr)
  }

  /// Main actor loop
  pub async fn run(mut self) {
    info!(worker = self.worker.addr().name(), "CoordinatorActor started");

    loop {
      tokio::select! {
          biased;

          _ = self.cancel.cancelled() => {
              info!("CoordinatorActor shutting down (cancelled)");
              break;
          }

          command = self.rx.recv() => {
              match command {
                  Some(command) => self.handle_command(command),
                  None => {
                      info!("CoordinatorActor shutting down (channel closed)");
                      break;
                  }
              }
          }
      }
    }
  }

  /// Dispatch a command to the appropriate handler
  fn handle_command(&mut self, command: CoordinatorCommand) {
    match command {
      CoordinatorCommand::GetFrequencies { text } => self.get_frequencies(text),
      CoordinatorCommand::AggregateFrequencies { frequencies } => self.aggregate_frequencies(frequencies),
    }
  }

  fn get_frequencies(&self, text: String) {
    info!(text = %text, "Delegating sentence to FrequencyCounter");

    if let Err(e) = self.worker.count(text, self.adapter.clone()) {
      debug!(error = %e, "FrequencyCounter gone, request dropped");
    }
  }

  fn aggregate_frequencies(&mut self, frequencies: FrequencyMap) {
    info!(frequencies = %frequencies, "Aggregated frequencies");

    let sink_closed = self
      .config
      .aggregated
      .as_ref()
      .is_some_and(|sink| sink.send(frequencies).is_err());
    if sink_closed {
      debug!("Aggregation sink closed, detaching");
      self.config.aggregated = None;
    }
  }
}
